//! Background execution of network actions.
//!
//! Each dispatched action runs on its own thread and reports back through a
//! `crossbeam_channel` as a `WorkerEvent`. An action has an in-flight flag:
//! dispatching it again before the previous run has finished is refused with
//! `PolicyError::Busy`. The flag is cleared before the event is sent, so once
//! the foreground has received the event the action can be dispatched again.
//! A separate counter of undelivered events drops only after the send, so a
//! zero `pending()` means every result is already in the channel.
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, error};
use policy_common::{PolicyError, Result};
use strum::IntoEnumIterator;

use crate::model::action::{Action, Outcome, WorkerEvent};

/// Runs actions off the foreground thread, one at a time per action.
pub struct ActionWorker {
    in_flight: HashMap<Action, Arc<AtomicBool>>,
    pending: Arc<AtomicUsize>,
    events: Sender<WorkerEvent>,
}

/// Clears the in-flight flag when dropped, including on panic.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Decrements the undelivered-event counter when dropped.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ActionWorker {
    /// Create a new worker that reports finished actions on `events`.
    pub fn new(events: Sender<WorkerEvent>) -> Self {
        let in_flight = Action::iter()
            .map(|action| (action, Arc::new(AtomicBool::new(false))))
            .collect();
        Self {
            in_flight,
            pending: Arc::new(AtomicUsize::new(0)),
            events,
        }
    }

    /// Number of dispatched actions whose event has not been sent yet.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Whether `action` is currently running.
    pub fn is_in_flight(&self, action: Action) -> bool {
        self.flag(action).load(Ordering::SeqCst)
    }

    /// Starts `job` for `action` on a new thread.
    ///
    /// Returns `Busy` if the same action is still running.
    pub fn dispatch<F>(&self, action: Action, job: F) -> Result<()>
    where
        F: FnOnce() -> Result<Outcome> + Send + 'static,
    {
        let flag = Arc::clone(self.flag(action));
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("{} refused: already in flight", action);
            return Err(PolicyError::Busy(action.to_string()));
        }

        let guard = InFlightGuard(flag);
        self.pending.fetch_add(1, Ordering::SeqCst);
        let pending = PendingGuard(Arc::clone(&self.pending));
        let events = self.events.clone();
        let spawned = thread::Builder::new()
            .name(format!("worker-{:?}", action).to_lowercase())
            .spawn(move || {
                let _pending = pending;
                let outcome = {
                    let _guard = guard;
                    job()
                };
                if let Err(e) = events.send(WorkerEvent { action, outcome }) {
                    error!("Failed to deliver {} result: {}", action, e);
                }
            });

        match spawned {
            Ok(_) => {
                debug!("{} dispatched", action);
                Ok(())
            }
            Err(e) => {
                // The closure and its guards were dropped: flag clear, counter restored.
                error!("Failed to spawn worker for {}: {}", action, e);
                Err(PolicyError::Io(e))
            }
        }
    }

    fn flag(&self, action: Action) -> &Arc<AtomicBool> {
        // Every variant is inserted in `new`.
        &self.in_flight[&action]
    }
}
