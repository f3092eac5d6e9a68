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

//! # Strata Sim
//!
//! The system bodies the frame pipeline runs: rigid-body integration,
//! bot steering, streaming level-of-detail, and the weapon fire-rate
//! controller. Every function here operates on plainly borrowed state;
//! locking and job dispatch belong to `strata-exec`.

#![warn(missing_docs)]

pub mod ai;
pub mod error;
pub mod fire_control;
pub mod movement;
pub mod physics;
pub mod streaming;

pub use ai::{steer_bot, BotAiConfig};
pub use error::WeaponError;
pub use fire_control::{FireOutcome, FirePhase, FireRateController};
pub use physics::{integrate_actor, PhysicsConfig};
pub use streaming::{StreamingField, Zone, ZoneLod};
