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

//! # Strata Data
//!
//! Data layouts shared by the simulation systems: the [`Actor`] record,
//! the [`ActorRegistry`] that owns every live actor, and the read-only
//! [`WeaponTable`]. This crate defines how state is stored and handed out;
//! the systems that mutate it live in `strata-sim` and `strata-exec`.

#![warn(missing_docs)]

pub mod actor;
pub mod error;
pub mod registry;
pub mod weapon;

pub use actor::{Actor, ActorHandle, AiState};
pub use error::RegistryError;
pub use registry::ActorRegistry;
pub use weapon::{FireMode, WeaponId, WeaponSpec, WeaponTable};
