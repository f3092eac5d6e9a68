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

//! # Strata Core
//!
//! Foundational crate containing the math primitives, frame clock, actor
//! identity, event channel, and interface contracts that the rest of the
//! engine builds on. Nothing in here knows about workers, packets, or
//! gameplay rules; higher crates compose these pieces.

#![warn(missing_docs)]

pub mod actor;
pub mod combat;
pub mod event;
pub mod math;
pub mod random;
pub mod time;

pub use actor::ActorId;
pub use combat::RaycastProvider;
pub use event::EventBus;
pub use random::SeededRng;
pub use time::FrameClock;
