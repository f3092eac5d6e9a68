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

//! # Strata Exec
//!
//! The concurrency layer of the engine: a fixed pool of worker threads, the
//! closed set of jobs a frame fans out to them, and the scheduler that drives
//! the submit / barrier / sweep / replicate pipeline once per frame.
//!
//! Everything above this crate is single-threaded by construction. One driver
//! thread calls [`FrameScheduler::run_frame`]; the workers only ever execute
//! job bodies, and the barrier inside `run_frame` guarantees a frame's writes
//! are complete before its snapshot is taken.

#![warn(missing_docs)]

pub mod error;
pub mod job;
pub mod pool;
pub mod scheduler;

pub use error::{FrameError, PoolError};
pub use job::FrameJob;
pub use pool::{PoolStats, WorkerPool};
pub use scheduler::{FrameEvent, FrameScheduler, SchedulerConfig};
