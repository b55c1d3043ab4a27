pub mod erc20;
pub mod read_call;
