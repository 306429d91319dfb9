//! Per-entity mutation ordering.
//!
//! ARCHITECTURE
//! ============
//! Each key (`image:<id>`, `user:<id>`) has a tail: a shared future that
//! settles once the most recently issued operation and every earlier one have
//! settled. A new operation chains itself onto the tail and waits for the
//! previous one before running, so operations on one key run strictly in issue
//! order while different keys proceed independently.
//!
//! A dropped operation settles only its own link. Its successor still waits
//! for everything issued before it.

#[cfg(test)]
#[path = "mutations_test.rs"]
mod mutations_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{BoxFuture, Shared};

type Tail = Shared<BoxFuture<'static, ()>>;

#[derive(Default)]
struct Tails {
    next_ticket: u64,
    by_key: HashMap<String, (u64, Tail)>,
}

/// Serializes async operations that share a key.
#[derive(Clone, Default)]
pub struct MutationQueue {
    tails: Arc<Mutex<Tails>>,
}

impl std::fmt::Debug for MutationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationQueue").field("pending_keys", &self.pending_keys()).finish()
    }
}

pub fn image_key(id: &str) -> String {
    format!("image:{id}")
}

pub fn user_key(id: &str) -> String {
    format!("user:{id}")
}

impl MutationQueue {
    /// Run `op` after every earlier operation on `key` has settled.
    pub async fn run<F: Future>(&self, key: &str, op: F) -> F::Output {
        let (done_tx, done_rx) = oneshot::channel::<()>();
        let (ticket, previous) = {
            let mut tails = lock(&self.tails);
            let ticket = tails.next_ticket;
            tails.next_ticket += 1;
            let previous = tails.by_key.get(key).map(|(_, tail)| tail.clone());
            // Settles after the previous tail and then this operation.
            let chained = previous.clone();
            let tail = async move {
                if let Some(previous) = chained {
                    previous.await;
                }
                let _ = done_rx.await;
            }
            .boxed()
            .shared();
            tails.by_key.insert(key.to_owned(), (ticket, tail));
            (ticket, previous)
        };

        if let Some(previous) = previous {
            previous.await;
        }
        let output = op.await;

        let _ = done_tx.send(());
        let mut tails = lock(&self.tails);
        if tails.by_key.get(key).is_some_and(|(t, _)| *t == ticket) {
            tails.by_key.remove(key);
        }
        output
    }

    /// Number of keys with an operation queued or running.
    ///
    /// Entries left behind by cancelled operations are pruned once their
    /// chain has settled.
    pub fn pending_keys(&self) -> usize {
        let mut tails = lock(&self.tails);
        tails.by_key.retain(|_, (_, tail)| tail.clone().now_or_never().is_none());
        tails.by_key.len()
    }
}

fn lock(tails: &Mutex<Tails>) -> MutexGuard<'_, Tails> {
    tails.lock().unwrap_or_else(PoisonError::into_inner)
}
