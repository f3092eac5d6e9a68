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

//! Errors surfaced by the pool and the frame pipeline.
//!
//! Faults inside job bodies never appear here: those are contained at the
//! worker boundary, logged, and counted in [`PoolStats`](crate::PoolStats).
//! This module covers misuse that surfaces synchronously to the caller.

use thiserror::Error;

/// Errors from [`WorkerPool`](crate::pool::WorkerPool) construction and use.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The pool was configured with zero workers.
    #[error("worker pool requires at least one worker thread")]
    InvalidWorkerCount,

    /// A submission arrived after the pool shut down.
    #[error("worker pool has shut down and accepts no further jobs")]
    ShutDown,
}

/// Errors from driving one frame through the scheduler.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The pool refused part of the frame's job set.
    #[error("frame {frame} could not be scheduled: {source}")]
    Scheduling {
        /// The frame whose job set was refused.
        frame: u64,
        /// The underlying pool error.
        #[source]
        source: PoolError,
    },
}
