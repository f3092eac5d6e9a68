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

//! The read-only weapon master list and its entry types.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The weapon every actor wields until told otherwise.
pub const DEFAULT_WEAPON: &str = "pulse_rifle";

/// Identifier of a weapon in the [`WeaponTable`].
///
/// Reference-counted like an actor id: cloning one into a packet or an
/// actor record never copies the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeaponId(Arc<str>);

impl WeaponId {
    /// Creates an id from any string-like name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The name as a borrowed string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeaponId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for WeaponId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// How a weapon responds to a held trigger.
///
/// The timing state machine is identical across modes; the input layer
/// consults this to decide whether a held trigger keeps pulling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireMode {
    /// Keeps firing while the trigger is held.
    Auto,
    /// One shot per trigger pull, quick follow-ups allowed.
    Semi,
    /// One deliberate shot per trigger pull.
    Single,
}

/// Static description of one weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Damage applied per projectile that hits.
    pub damage: f64,
    /// Rounds per minute; the cooldown between shots is `60.0 / rpm`.
    pub rpm: f64,
    /// Maximum perturbation applied to the aim on each perpendicular axis.
    /// Zero means perfectly accurate.
    pub spread: f64,
    /// Trigger behavior.
    pub mode: FireMode,
    /// Projectiles launched per shot. Shotguns fire several at once.
    pub projectile_count: u32,
}

impl WeaponSpec {
    /// Seconds that must elapse between two shots of this weapon.
    #[inline]
    pub fn fire_delay(&self) -> f64 {
        60.0 / self.rpm
    }
}

/// The read-only mapping from weapon ids to their specs.
///
/// Built once at startup (from the built-in arsenal or a config file) and
/// then only consulted. Iteration follows insertion order so listings and
/// logs are stable run to run.
#[derive(Debug, Clone)]
pub struct WeaponTable {
    order: Vec<WeaponId>,
    specs: AHashMap<WeaponId, WeaponSpec>,
}

impl WeaponTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            specs: AHashMap::new(),
        }
    }

    /// Adds or replaces one weapon.
    pub fn insert(&mut self, id: impl Into<WeaponId>, spec: WeaponSpec) {
        let id = id.into();
        if self.specs.insert(id.clone(), spec).is_none() {
            self.order.push(id);
        }
    }

    /// Looks up a weapon's spec.
    pub fn get(&self, id: &WeaponId) -> Option<&WeaponSpec> {
        self.specs.get(id)
    }

    /// Whether the table knows this weapon.
    pub fn contains(&self, id: &WeaponId) -> bool {
        self.specs.contains_key(id)
    }

    /// The number of weapons in the table.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates over the weapons in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&WeaponId, &WeaponSpec)> {
        self.order.iter().filter_map(|id| {
            let spec = self.specs.get(id)?;
            Some((id, spec))
        })
    }
}

impl Default for WeaponTable {
    /// The built-in arsenal.
    fn default() -> Self {
        let mut table = Self::new();
        table.insert(
            DEFAULT_WEAPON,
            WeaponSpec {
                damage: 55.0,
                rpm: 450.0,
                spread: 0.0,
                mode: FireMode::Auto,
                projectile_count: 1,
            },
        );
        table.insert(
            "riot_shotgun",
            WeaponSpec {
                damage: 15.0,
                rpm: 90.0,
                spread: 1.5,
                mode: FireMode::Semi,
                projectile_count: 8,
            },
        );
        table.insert(
            "rail_lance",
            WeaponSpec {
                damage: 300.0,
                rpm: 30.0,
                spread: 0.0,
                mode: FireMode::Single,
                projectile_count: 1,
            },
        );
        table.insert(
            "emp_charge",
            WeaponSpec {
                damage: 0.0,
                rpm: 10.0,
                spread: 0.0,
                mode: FireMode::Single,
                projectile_count: 1,
            },
        );
        table
    }
}
