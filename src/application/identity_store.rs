//! Session Store - the signed-in identity for the lifetime of the process.
//!
//! A single replay-latest slot: `set_identity`/`clear_identity` replace the
//! value and every `is_logged_in` subscriber observes the new state. Late
//! subscribers only see the latest value, nothing is queued.

use std::sync::Arc;

use futures::stream::{self, Stream};
use tokio::sync::watch;

use crate::domain::foundation::Identity;

/// Holds the current `Identity`, if any.
///
/// Cheap to clone; clones share the same slot.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    sender: Arc<watch::Sender<Option<Identity>>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn get_identity(&self) -> Option<Identity> {
        *self.sender.borrow()
    }

    pub fn set_identity(&self, identity: Identity) {
        self.sender.send_replace(Some(identity));
    }

    pub fn clear_identity(&self) {
        self.sender.send_replace(None);
    }

    /// Logged-in state: the current value first, then one item per change.
    pub fn is_logged_in(&self) -> impl Stream<Item = bool> + Send + 'static {
        let receiver = self.sender.subscribe();
        stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first {
                receiver.changed().await.ok()?;
            }
            let logged_in = receiver.borrow_and_update().is_some();
            Some((logged_in, (receiver, false)))
        })
    }
}

impl Default for IdentityStore {
    fn default() -> Self {
        Self::new()
    }
}
