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

//! Error types for registry bookkeeping.

use std::fmt;

use strata_core::ActorId;

/// An error raised by [`ActorRegistry`](crate::ActorRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An actor with this id is already live.
    DuplicateActor {
        /// The id that was spawned twice.
        id: ActorId,
    },
    /// No live actor carries this id.
    UnknownActor {
        /// The id that failed to resolve.
        id: ActorId,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateActor { id } => {
                write!(f, "An actor named '{id}' is already registered")
            }
            RegistryError::UnknownActor { id } => {
                write!(f, "No live actor is named '{id}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
