use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::constants::BROADCAST_CHANNEL_CAPACITY;
use crate::config::environment::Environment;
use crate::domain::SupplyBoard;
use crate::services::supply_store::{BoardListener, SupplyStore};
use crate::view::board_view::BoardView;
use crate::view::page::PageCache;

/// Forwards every new board to SSE clients.
pub struct SnapshotBroadcaster {
    sender: broadcast::Sender<BoardView>,
}

impl BoardListener for SnapshotBroadcaster {
    fn on_replace(&self, board: &SupplyBoard) {
        let _ = self.sender.send(BoardView::from(board)).inspect_err(|_| {
            tracing::debug!("no stream clients for board snapshot");
        });
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SupplyStore>,
    pub page: Arc<PageCache>,
    pub snapshots: broadcast::Sender<BoardView>,
}

impl AppState {
    pub fn build(board: SupplyBoard, environment: Environment) -> Arc<Self> {
        let page = Arc::new(PageCache::new(&board, environment));
        let (snapshots, _) = broadcast::channel::<BoardView>(BROADCAST_CHANNEL_CAPACITY);

        let store = Arc::new(SupplyStore::new(board));
        store.subscribe(Arc::clone(&page) as Arc<dyn BoardListener>);
        store.subscribe(Arc::new(SnapshotBroadcaster {
            sender: snapshots.clone(),
        }));

        Arc::new(Self {
            store,
            page,
            snapshots,
        })
    }
}
