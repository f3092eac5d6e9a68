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

//! # Fire Control
//!
//! The per-wielder timing state machine and the projectile fan-out. The
//! controller decides *whether* a trigger pull fires at the current
//! simulation time and *which directions* the projectiles take; resolving
//! what they hit belongs to the [`RaycastProvider`] it is handed.

use strata_core::math::Vec3;
use strata_core::{ActorId, RaycastProvider, SeededRng};
use strata_data::{Actor, FireMode, WeaponId, WeaponSpec, WeaponTable};

use crate::error::WeaponError;

/// Whether a wielder's weapon could fire at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FirePhase {
    /// The cooldown has elapsed; the next trigger pull fires.
    Ready,
    /// The weapon is still cycling.
    Cooling {
        /// Seconds until the weapon is ready again.
        remaining: f64,
    },
}

/// What one trigger pull produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOutcome {
    /// The shot happened.
    Fired {
        /// How many projectiles left the barrel.
        projectiles: u32,
        /// The actors struck, one entry per projectile that hit.
        hits: Vec<ActorId>,
    },
    /// The weapon was still cooling; nothing changed.
    Cooling {
        /// Seconds until the weapon is ready again.
        remaining: f64,
    },
}

/// Decides when shots happen and where their projectiles go.
///
/// One controller serves every wielder: the cooldown state itself lives on
/// the actor (`last_fire_time`), so the controller holds only the weapon
/// table and the spread randomness. All calls take the shooter by exclusive
/// borrow, which is what makes the ready-check and the time stamp one
/// indivisible step per wielder.
pub struct FireRateController {
    table: WeaponTable,
    rng: SeededRng,
}

impl FireRateController {
    /// Creates a controller over the given weapon table.
    pub fn new(table: WeaponTable) -> Self {
        Self::with_seed(table, 0)
    }

    /// Creates a controller with an explicit spread seed, for reproducible
    /// matches.
    pub fn with_seed(table: WeaponTable, seed: u64) -> Self {
        Self {
            table,
            rng: SeededRng::new(seed),
        }
    }

    /// The weapon table this controller consults.
    pub fn table(&self) -> &WeaponTable {
        &self.table
    }

    fn spec_for(&self, shooter: &Actor) -> Result<&WeaponSpec, WeaponError> {
        self.table
            .get(&shooter.active_weapon)
            .ok_or_else(|| WeaponError::UnknownWeapon {
                id: shooter.active_weapon.clone(),
            })
    }

    /// Reports the shooter's weapon phase at time `now` without firing.
    pub fn phase(&self, shooter: &Actor, now: f64) -> Result<FirePhase, WeaponError> {
        let delay = self.spec_for(shooter)?.fire_delay();
        let elapsed = now - shooter.last_fire_time;
        Ok(if elapsed >= delay {
            FirePhase::Ready
        } else {
            FirePhase::Cooling {
                remaining: delay - elapsed,
            }
        })
    }

    /// The trigger behavior of the shooter's active weapon.
    ///
    /// The input layer consults this to decide whether a held trigger keeps
    /// pulling; the timing below is the same for every mode.
    pub fn weapon_mode(&self, shooter: &Actor) -> Result<FireMode, WeaponError> {
        Ok(self.spec_for(shooter)?.mode)
    }

    /// Swaps the wielded weapon after validating the id.
    ///
    /// An unknown id leaves the shooter untouched.
    pub fn switch_weapon(
        &self,
        shooter: &mut Actor,
        weapon: impl Into<WeaponId>,
    ) -> Result<(), WeaponError> {
        let weapon = weapon.into();
        if !self.table.contains(&weapon) {
            return Err(WeaponError::UnknownWeapon { id: weapon });
        }
        log::debug!("'{}' switched to '{weapon}'", shooter.id());
        shooter.active_weapon = weapon;
        Ok(())
    }

    /// Pulls the trigger at time `now`, aiming along `aim`.
    ///
    /// A ready weapon stamps `last_fire_time`, fans out one ray per
    /// projectile (spread perturbs the aim on the two axes perpendicular to
    /// it, re-normalized to unit length), and reports the actors struck. A
    /// cooling weapon reports the remaining cooldown and changes nothing.
    /// `aim` need not be normalized; a degenerate zero aim produces rays
    /// that hit nothing.
    pub fn try_fire(
        &mut self,
        shooter: &mut Actor,
        aim: Vec3,
        now: f64,
        raycaster: &dyn RaycastProvider,
    ) -> Result<FireOutcome, WeaponError> {
        let spec = self.spec_for(shooter)?.clone();
        let delay = spec.fire_delay();
        let elapsed = now - shooter.last_fire_time;
        if elapsed < delay {
            return Ok(FireOutcome::Cooling {
                remaining: delay - elapsed,
            });
        }

        shooter.last_fire_time = now;

        let origin = shooter.position;
        let aim = aim.normalize();
        let mut hits = Vec::new();
        for _ in 0..spec.projectile_count {
            let direction = self.perturb(aim, spec.spread);
            if let Some(victim) = raycaster.raycast(origin, direction, spec.damage) {
                hits.push(victim);
            }
        }

        log::debug!(
            "'{}' fired '{}': {} projectile(s), {} hit(s)",
            shooter.id(),
            shooter.active_weapon,
            spec.projectile_count,
            hits.len()
        );
        Ok(FireOutcome::Fired {
            projectiles: spec.projectile_count,
            hits,
        })
    }

    /// Offsets a unit aim within the spread cone and re-normalizes.
    fn perturb(&mut self, aim: Vec3, spread: f64) -> Vec3 {
        if spread <= 0.0 {
            return aim;
        }
        let (tangent, bitangent) = aim.orthonormal_basis();
        let offset_t = self.rng.range(-spread, spread);
        let offset_b = self.rng.range(-spread, spread);
        (aim + tangent * offset_t + bitangent * offset_b).normalize()
    }
}
