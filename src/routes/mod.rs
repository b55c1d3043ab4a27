pub mod create_router;
