use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::SupplyBoard;

/// Gets notified after every board replacement.
pub trait BoardListener: Send + Sync {
    fn on_replace(&self, board: &SupplyBoard);
}

impl<F> BoardListener for F
where
    F: Fn(&SupplyBoard) + Send + Sync,
{
    fn on_replace(&self, board: &SupplyBoard) {
        self(board)
    }
}

/// Holds the current board and fans replacements out to listeners.
///
/// Writes swap the whole board, readers only ever see complete snapshots.
pub struct SupplyStore {
    board: RwLock<Arc<SupplyBoard>>,
    listeners: RwLock<Vec<Arc<dyn BoardListener>>>,
}

impl SupplyStore {
    pub fn new(board: SupplyBoard) -> Self {
        Self {
            board: RwLock::new(Arc::new(board)),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<SupplyBoard> {
        let board = self.board.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&board)
    }

    pub fn subscribe(&self, listener: Arc<dyn BoardListener>) {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        listeners.push(listener);
    }

    /// Swaps in `board` and calls every listener, in registration order, before returning.
    pub fn replace(&self, board: SupplyBoard) -> Arc<SupplyBoard> {
        let board = Arc::new(board);

        {
            let mut current = self.board.write().unwrap_or_else(PoisonError::into_inner);
            *current = Arc::clone(&board);
        }

        let listeners: Vec<Arc<dyn BoardListener>> = {
            let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
            listeners.iter().cloned().collect()
        };

        tracing::debug!(
            tokens = board.tokens().len(),
            listeners = listeners.len(),
            "board replaced"
        );

        for listener in listeners {
            listener.on_replace(&board);
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Supply, TokenDescriptor};
    use alloy::primitives::Address;
    use bigdecimal::BigDecimal;
    use std::sync::Mutex;

    fn board(names: &[&str]) -> SupplyBoard {
        SupplyBoard::new(
            names
                .iter()
                .map(|name| TokenDescriptor::new(*name, 6, Address::ZERO, "totalSupply", ""))
                .collect(),
        )
    }

    #[test]
    fn test_snapshot_returns_initial_board() {
        let store = SupplyStore::new(board(&["a", "b"]));
        assert_eq!(store.snapshot().tokens().len(), 2);
    }

    #[test]
    fn test_replace_notifies_listeners_in_order() {
        let store = SupplyStore::new(board(&["a"]));
        let calls: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        for id in ["first", "second"] {
            let calls = Arc::clone(&calls);
            store.subscribe(Arc::new(move |board: &SupplyBoard| {
                calls
                    .lock()
                    .unwrap()
                    .push(format!("{id}:{}", board.tokens().len()));
            }));
        }

        store.replace(board(&["x", "y", "z"]));

        assert_eq!(*calls.lock().unwrap(), vec!["first:3", "second:3"]);
    }

    #[test]
    fn test_listener_sees_replaced_snapshot() {
        let store = Arc::new(SupplyStore::new(board(&["a"])));
        let seen = Arc::new(Mutex::new(None));

        {
            let store_ref = Arc::clone(&store);
            let seen = Arc::clone(&seen);
            store.subscribe(Arc::new(move |_: &SupplyBoard| {
                *seen.lock().unwrap() = Some(store_ref.snapshot().tokens().len());
            }));
        }

        let settled = board(&["a"]).tokens()[0].settle(Supply::Loaded(BigDecimal::from(3i64)));
        store.replace(SupplyBoard::new(vec![settled.clone(), settled]));

        assert_eq!(*seen.lock().unwrap(), Some(2));
    }

    #[test]
    fn test_replace_without_listeners() {
        let store = SupplyStore::new(board(&[]));
        let replaced = store.replace(board(&["a"]));

        assert_eq!(replaced.tokens().len(), 1);
        assert_eq!(store.snapshot(), replaced);
    }
}
