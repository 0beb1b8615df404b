//! Background recomputation for interactively edited text
//!
//! An editor submits a fresh snapshot after every change. [`LiveStatistics`]
//! computes on a worker thread so the editor never blocks, and only the
//! newest submission is ever current: older queued snapshots are skipped and
//! results for superseded snapshots are dropped before delivery. Updates
//! arrive in generation order.

use crate::aggregator::StatisticsAggregator;
use crate::error::{EngineError, Result};
use crate::result::StatisticsResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use wordtally_core::{Locale, TextSnapshot};

/// Sequence number of a submission; later submissions get larger numbers
pub type Generation = u64;

/// A result delivered by the worker
#[derive(Debug)]
pub struct StatsUpdate {
    /// Submission this result belongs to
    pub generation: Generation,
    /// The counts, or the failure that replaced them
    pub result: Result<StatisticsResult>,
}

struct Job {
    generation: Generation,
    snapshot: TextSnapshot,
    locale: Locale,
}

/// Statistics recomputed in the background on every submitted change
pub struct LiveStatistics {
    jobs: Option<Sender<Job>>,
    updates: Receiver<StatsUpdate>,
    latest: Arc<AtomicU64>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for LiveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveStatistics")
            .field("latest", &self.latest.load(Ordering::SeqCst))
            .field("running", &self.worker.is_some())
            .finish()
    }
}

impl LiveStatistics {
    /// Start the worker thread
    ///
    /// The aggregator's [`StatsConfig::debounce`](crate::StatsConfig::debounce)
    /// sets how long the worker waits for further submissions before
    /// computing.
    pub fn spawn(aggregator: StatisticsAggregator) -> Result<Self> {
        let (job_tx, job_rx) = mpsc::channel();
        let (update_tx, update_rx) = mpsc::channel();
        let latest = Arc::new(AtomicU64::new(0));

        let worker = {
            let latest = Arc::clone(&latest);
            thread::Builder::new()
                .name("wordtally-stats".to_string())
                .spawn(move || run_worker(&aggregator, &job_rx, &update_tx, &latest))?
        };

        Ok(Self {
            jobs: Some(job_tx),
            updates: update_rx,
            latest,
            worker: Some(worker),
        })
    }

    /// Queue a recomputation and make it the current one
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkerDisconnected`] after [`shutdown`](Self::shutdown)
    /// or if the worker thread died.
    pub fn submit(&self, snapshot: TextSnapshot, locale: Locale) -> Result<Generation> {
        let jobs = self.jobs.as_ref().ok_or(EngineError::WorkerDisconnected)?;
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        jobs.send(Job {
            generation,
            snapshot,
            locale,
        })
        .map_err(|_| EngineError::WorkerDisconnected)?;

        Ok(generation)
    }

    /// Generation of the most recent submission (0 before the first)
    pub fn current_generation(&self) -> Generation {
        self.latest.load(Ordering::SeqCst)
    }

    /// Return the newest pending update without blocking
    ///
    /// Older pending updates are discarded.
    pub fn try_recv(&self) -> Result<Option<StatsUpdate>> {
        let mut newest = None;
        loop {
            match self.updates.try_recv() {
                Ok(update) => newest = Some(update),
                Err(TryRecvError::Empty) => return Ok(newest),
                Err(TryRecvError::Disconnected) => {
                    return newest.map(Some).ok_or(EngineError::WorkerDisconnected)
                }
            }
        }
    }

    /// Wait up to `timeout` for the next update
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<StatsUpdate>> {
        match self.updates.recv_timeout(timeout) {
            Ok(update) => Ok(Some(update)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::WorkerDisconnected),
        }
    }

    /// Wait until an update for `generation` or a later one arrives
    ///
    /// Earlier updates received while waiting are discarded. Returns
    /// `Ok(None)` if `timeout` elapses first.
    pub fn wait_for(
        &self,
        generation: Generation,
        timeout: Duration,
    ) -> Result<Option<StatsUpdate>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.recv_timeout(remaining)? {
                Some(update) if update.generation >= generation => return Ok(Some(update)),
                Some(_) => {}
                None => return Ok(None),
            }
        }
    }

    /// Stop accepting submissions and join the worker
    ///
    /// Queued work is abandoned. Called automatically on drop.
    pub fn shutdown(&mut self) -> Result<()> {
        // Closing the queue ends the worker loop
        self.jobs.take();

        match self.worker.take() {
            Some(handle) => handle.join().map_err(|_| EngineError::WorkerDisconnected),
            None => Ok(()),
        }
    }
}

impl Drop for LiveStatistics {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            tracing::warn!(error = %e, "statistics worker did not shut down cleanly");
        }
    }
}

fn run_worker(
    aggregator: &StatisticsAggregator,
    jobs: &Receiver<Job>,
    updates: &Sender<StatsUpdate>,
    latest: &AtomicU64,
) {
    let debounce = aggregator.config().debounce;

    while let Ok(mut job) = jobs.recv() {
        // Skip everything already queued behind this job
        while let Ok(newer) = jobs.try_recv() {
            tracing::trace!(skipped = job.generation, "coalescing queued job");
            job = newer;
        }

        if !debounce.is_zero() {
            loop {
                match jobs.recv_timeout(debounce) {
                    Ok(newer) => {
                        tracing::trace!(skipped = job.generation, "debounced job");
                        job = newer;
                    }
                    Err(RecvTimeoutError::Timeout) => break,
                    // Shutting down; the pending job is abandoned
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        }

        if job.generation < latest.load(Ordering::SeqCst) {
            continue;
        }

        let result = aggregator.compute(&job.snapshot, &job.locale);

        if job.generation < latest.load(Ordering::SeqCst) {
            tracing::trace!(generation = job.generation, "discarding superseded result");
            continue;
        }

        let update = StatsUpdate {
            generation: job.generation,
            result,
        };
        if updates.send(update).is_err() {
            break;
        }
    }
}
