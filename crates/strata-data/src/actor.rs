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

//! The mutable per-actor simulation record and its shared handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use strata_core::math::Vec3;
use strata_core::ActorId;

use crate::weapon::{WeaponId, DEFAULT_WEAPON};

/// Health every freshly spawned actor starts with, walls included.
pub const SPAWN_HEALTH: f64 = 100.0;

/// The steering state a bot's AI is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiState {
    /// Wandering toward the map center; the player is out of sight.
    #[default]
    Patrol,
    /// Closing the distance to the player.
    Chase,
    /// In range; holding position and engaging.
    Attack,
}

/// One actor's complete mutable state.
///
/// Everything a frame job or the replication pass reads or writes about an
/// actor lives here. The id is fixed at spawn; all other fields are fair
/// game for whichever system owns them during a frame (see the write
/// discipline on [`ActorRegistry`](crate::ActorRegistry)).
#[derive(Debug, Clone)]
pub struct Actor {
    id: ActorId,
    /// World-space position. The world is Y-up; the ground plane is `y = 0`.
    pub position: Vec3,
    /// World-space linear velocity in meters per second.
    pub velocity: Vec3,
    /// Remaining health. At or below zero the actor is swept after the
    /// frame's barrier, before replication.
    pub health: f64,
    /// Static geometry (walls) never moves and is skipped by integration.
    pub is_static: bool,
    /// Bots get one AI steering job per frame.
    pub is_bot: bool,
    /// Sprint scales the integration step of this actor while held.
    pub is_sprinting: bool,
    /// Whether the actor currently rests on the ground plane.
    pub on_ground: bool,
    /// Steering state; only meaningful when `is_bot` is set.
    pub ai_state: AiState,
    /// The weapon this actor currently wields.
    pub active_weapon: WeaponId,
    /// Simulation time of the last successful shot. Starts at negative
    /// infinity so the very first trigger pull, even at time zero, finds
    /// the weapon ready.
    pub last_fire_time: f64,
}

impl Actor {
    fn base(id: ActorId, position: Vec3) -> Self {
        Self {
            id,
            position,
            velocity: Vec3::ZERO,
            health: SPAWN_HEALTH,
            is_static: false,
            is_bot: false,
            is_sprinting: false,
            on_ground: position.y <= 0.0,
            ai_state: AiState::default(),
            active_weapon: WeaponId::from(DEFAULT_WEAPON),
            last_fire_time: f64::NEG_INFINITY,
        }
    }

    /// Creates a player-controlled actor at the given position.
    pub fn player(id: impl Into<ActorId>, position: Vec3) -> Self {
        Self::base(id.into(), position)
    }

    /// Creates an AI-controlled bot at the given position.
    pub fn bot(id: impl Into<ActorId>, position: Vec3) -> Self {
        Self {
            is_bot: true,
            ..Self::base(id.into(), position)
        }
    }

    /// Creates a static wall segment. Walls never move but can be shot
    /// down: they carry the same spawn health as everyone else.
    pub fn wall(id: impl Into<ActorId>, position: Vec3) -> Self {
        Self {
            is_static: true,
            ..Self::base(id.into(), position)
        }
    }

    /// Sets the wielded weapon at construction time.
    pub fn with_weapon(mut self, weapon: impl Into<WeaponId>) -> Self {
        self.active_weapon = weapon.into();
        self
    }

    /// The actor's immutable id.
    #[inline]
    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// Whether the actor has health left.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// A shared, individually locked reference to one [`Actor`].
///
/// Job payloads capture clones of these; cloning is an `Arc` bump. Each
/// actor has its own lock, and no system locks two actors at once, so
/// there is no lock-ordering hazard.
#[derive(Debug, Clone)]
pub struct ActorHandle(Arc<Mutex<Actor>>);

impl ActorHandle {
    /// Wraps an actor in its shared handle.
    pub fn new(actor: Actor) -> Self {
        Self(Arc::new(Mutex::new(actor)))
    }

    /// Locks the actor for exclusive access.
    ///
    /// A job that faulted while holding this lock leaves it poisoned; the
    /// actor's state at that point is still the best snapshot there is, so
    /// the poison flag is cleared rather than propagated and the rest of
    /// the frame (and replication) carries on.
    pub fn lock(&self) -> MutexGuard<'_, Actor> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether two handles refer to the same actor.
    pub fn same_actor(&self, other: &ActorHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
