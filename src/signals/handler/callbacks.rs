/*!
 * Signal Callbacks
 * Token-addressed store of the functions a handler entry can name
 */

use crate::core::errors::{TrapError, TrapResult};
use crate::core::types::{HandlerId, SignalNumber};
use ahash::RandomState;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Callback invoked with the number of the signal that arrived
pub type HandlerFn = Arc<dyn Fn(SignalNumber) -> TrapResult<()> + Send + Sync>;

/// Callback store shared by the trap manager and the dispatcher
///
/// Handler entries hold [`HandlerId`] tokens only. Tokens are never reused.
#[derive(Clone)]
pub struct CallbackRegistry {
    handlers: Arc<DashMap<HandlerId, HandlerFn, RandomState>>,
    next_id: Arc<AtomicU64>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(DashMap::with_hasher(RandomState::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Store `handler` under a fresh token
    pub fn register<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(SignalNumber) -> TrapResult<()> + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        self.handlers.insert(id, Arc::new(handler));
        info!(handler = id, "Callback registered");
        id
    }

    /// Run the callback named by `handler_id` for `signal`
    pub fn execute(&self, handler_id: HandlerId, signal: SignalNumber) -> TrapResult<()> {
        // No shard lock may be held while user code runs
        let Some(handler) = self.handlers.get(&handler_id).map(|entry| Arc::clone(entry.value()))
        else {
            return Err(TrapError::InvalidHandler(format!(
                "Handler {} not found",
                handler_id
            )));
        };

        debug!(handler = handler_id, signal, "Dispatching callback");
        handler(signal)
    }

    /// Drop a callback; callers must ensure no table entry still names it
    pub(crate) fn unregister(&self, handler_id: HandlerId) -> bool {
        let removed = self.handlers.remove(&handler_id).is_some();
        if removed {
            info!(handler = handler_id, "Callback removed");
        }
        removed
    }

    pub fn exists(&self, handler_id: HandlerId) -> bool {
        self.handlers.contains_key(&handler_id)
    }

    pub fn count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}
