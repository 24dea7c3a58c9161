//! Background formation runs.
//!
//! A [`FormationTask`] runs a [`TeamBuilder`] on its own thread so the
//! caller's control loop stays responsive. The returned [`FormationHandle`]
//! can cancel the run and collect its outcome.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::builder::{FormationOutcome, TeamBuilder};
use crate::error::{FormationError, Result};
use crate::models::Participant;

/// Spawns formation runs off the calling thread.
pub struct FormationTask;

impl FormationTask {
    /// Starts a formation run on a worker thread.
    ///
    /// # Example
    ///
    /// ```
    /// use u_teams::formation::{FormationConfig, FormationTask, TeamBuilder};
    /// use u_teams::models::Participant;
    ///
    /// let roster: Vec<Participant> = (1..=6)
    ///     .map(|i| Participant::new(format!("P{i}"), format!("Player {i}")).with_skill(5))
    ///     .collect();
    /// let builder = TeamBuilder::new().with_config(FormationConfig::default().with_seed(1));
    ///
    /// let handle = FormationTask::spawn(builder, roster, 3);
    /// let outcome = handle.join().unwrap();
    /// assert_eq!(outcome.placed_count(), 6);
    /// ```
    pub fn spawn(builder: TeamBuilder, roster: Vec<Participant>, team_size: usize) -> FormationHandle {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let worker =
            thread::spawn(move || builder.build_with_cancel(&roster, team_size, Some(flag)));
        FormationHandle { cancel, worker }
    }
}

/// Handle to a running formation.
#[derive(Debug)]
pub struct FormationHandle {
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<Result<FormationOutcome>>,
}

impl FormationHandle {
    /// Requests cancellation. The run stops before its next placement.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Whether the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the run and returns its outcome.
    pub fn join(self) -> Result<FormationOutcome> {
        self.worker
            .join()
            .unwrap_or(Err(FormationError::WorkerPanicked))
    }
}
