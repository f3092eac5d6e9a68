// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Worker Pool
//!
//! A fixed set of persistent worker threads draining one shared queue, with
//! a task-counting barrier. The pool knows nothing about frames or actors;
//! it executes opaque closures and keeps the books the barrier needs.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

use crate::error::PoolError;

/// How long `drain` waits between warnings while the barrier has not cleared.
const DRAIN_HEARTBEAT: Duration = Duration::from_secs(5);

type Task = Box<dyn FnOnce() + Send + 'static>;

/// A point-in-time copy of the pool's lifetime counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Jobs the pool accepted.
    pub submitted: u64,
    /// Jobs that ran to completion.
    pub completed: u64,
    /// Jobs that panicked and were contained at the worker boundary.
    pub faulted: u64,
}

#[derive(Default)]
struct StatCounters {
    submitted: AtomicU64,
    completed: AtomicU64,
    faulted: AtomicU64,
}

impl StatCounters {
    fn snapshot(&self) -> PoolStats {
        PoolStats {
            submitted: self.submitted.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            faulted: self.faulted.load(Ordering::Relaxed),
        }
    }
}

/// The outstanding-job counter the barrier blocks on.
///
/// Every submission increments it before the task is enqueued; every task
/// decrements it after running, faulted or not. `drain` waits until the
/// counter truly reaches zero, so a task another thread submits while the
/// driver is already waiting is still awaited once its increment lands.
struct InflightGauge {
    outstanding: Mutex<usize>,
    all_clear: Condvar,
}

impl InflightGauge {
    fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            all_clear: Condvar::new(),
        }
    }

    fn job_added(&self) {
        let mut count = self
            .outstanding
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *count += 1;
    }

    fn job_finished(&self) {
        let mut count = self
            .outstanding
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *count -= 1;
        if *count == 0 {
            self.all_clear.notify_all();
        }
    }

    fn wait_until_idle(&self, heartbeat: Duration) {
        let mut count = self
            .outstanding
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while *count > 0 {
            let (guard, timeout) = self
                .all_clear
                .wait_timeout(count, heartbeat)
                .unwrap_or_else(PoisonError::into_inner);
            count = guard;
            if timeout.timed_out() && *count > 0 {
                // A job that never terminates hangs the barrier by design;
                // all we can do is keep saying so.
                log::warn!(
                    "WorkerPool: barrier still waiting on {} outstanding job(s)",
                    *count
                );
            }
        }
    }
}

/// A fixed pool of worker threads behind one shared job queue.
///
/// Workers block on the queue while idle and exit when the queue closes.
/// [`submit`](Self::submit) never blocks, [`drain`](Self::drain) blocks the
/// caller until every counted job has finished, and a job that panics is
/// contained, logged, and counted without disturbing its worker.
pub struct WorkerPool {
    sender: Option<Sender<Task>>,
    workers: Vec<thread::JoinHandle<()>>,
    gauge: Arc<InflightGauge>,
    stats: Arc<StatCounters>,
}

impl WorkerPool {
    /// Starts `worker_count` persistent workers.
    ///
    /// Fails with [`PoolError::InvalidWorkerCount`] when `worker_count` is
    /// zero; a pool with no workers would hang its first `drain`.
    pub fn start(worker_count: usize) -> Result<Self, PoolError> {
        if worker_count == 0 {
            return Err(PoolError::InvalidWorkerCount);
        }

        let (sender, receiver) = crossbeam_channel::unbounded::<Task>();
        let gauge = Arc::new(InflightGauge::new());
        let stats = Arc::new(StatCounters::default());

        let workers = (0..worker_count)
            .map(|index| {
                let queue = receiver.clone();
                let gauge = Arc::clone(&gauge);
                let stats = Arc::clone(&stats);
                thread::spawn(move || worker_loop(index, queue, gauge, stats))
            })
            .collect();

        log::info!("WorkerPool: started {worker_count} worker(s)");
        Ok(Self {
            sender: Some(sender),
            workers,
            gauge,
            stats,
        })
    }

    /// Enqueues a job and returns immediately.
    ///
    /// Safe to call from any thread holding a reference to the pool. Fails
    /// with [`PoolError::ShutDown`] once [`shutdown`](Self::shutdown) has run.
    pub fn submit(&self, job: impl FnOnce() + Send + 'static) -> Result<(), PoolError> {
        let sender = self.sender.as_ref().ok_or(PoolError::ShutDown)?;

        // Count before enqueueing so a fast worker cannot finish the job
        // ahead of its own increment.
        self.gauge.job_added();
        match sender.send(Box::new(job)) {
            Ok(()) => {
                self.stats.submitted.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }
            Err(_) => {
                self.gauge.job_finished();
                Err(PoolError::ShutDown)
            }
        }
    }

    /// Blocks until every counted job has finished executing.
    ///
    /// This is a task-counting join, not a queue-emptiness check: jobs
    /// in-flight on workers are awaited too. With nothing outstanding it
    /// returns immediately. A warning is logged every few seconds while the
    /// barrier stays blocked.
    pub fn drain(&self) {
        self.gauge.wait_until_idle(DRAIN_HEARTBEAT);
    }

    /// The pool's lifetime counters.
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }

    /// The number of worker threads serving the queue.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Closes the queue, lets workers finish in-flight and queued work, and
    /// joins them.
    ///
    /// Idempotent; later calls return at once. After shutdown every
    /// [`submit`](Self::submit) fails.
    pub fn shutdown(&mut self) {
        if self.sender.take().is_none() {
            return;
        }
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
        let stats = self.stats.snapshot();
        log::info!(
            "WorkerPool: shut down ({} submitted, {} completed, {} faulted)",
            stats.submitted,
            stats.completed,
            stats.faulted
        );
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(
    index: usize,
    queue: Receiver<Task>,
    gauge: Arc<InflightGauge>,
    stats: Arc<StatCounters>,
) {
    log::debug!("Worker {index}: online");
    while let Ok(task) = queue.recv() {
        match panic::catch_unwind(AssertUnwindSafe(task)) {
            Ok(()) => {
                stats.completed.fetch_add(1, Ordering::Relaxed);
            }
            Err(payload) => {
                stats.faulted.fetch_add(1, Ordering::Relaxed);
                log::error!(
                    "Worker {index}: job faulted: {}",
                    panic_message(payload.as_ref())
                );
            }
        }
        gauge.job_finished();
    }
    log::debug!("Worker {index}: queue closed, exiting");
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
