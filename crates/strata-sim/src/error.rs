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

//! Error types for the weapon systems.

use std::fmt;

use strata_data::WeaponId;

/// An error raised by weapon handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaponError {
    /// The id does not exist in the weapon table. The wielder's state is
    /// left exactly as it was.
    UnknownWeapon {
        /// The id that failed to resolve.
        id: WeaponId,
    },
}

impl fmt::Display for WeaponError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponError::UnknownWeapon { id } => {
                write!(f, "No weapon named '{id}' exists in the weapon table")
            }
        }
    }
}

impl std::error::Error for WeaponError {}
