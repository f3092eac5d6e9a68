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

//! The registry that owns every live actor and hands out partitions of it.

use ahash::AHashMap;

use strata_core::ActorId;

use crate::actor::{Actor, ActorHandle};
use crate::error::RegistryError;

/// Owner of all live actors, in stable insertion order.
///
/// The registry's spine (the ordered list and the id index) is only touched
/// by the frame driver between barriers: spawns, despawns, and the dead
/// sweep all happen while no job is running. During a frame, jobs hold
/// cloned [`ActorHandle`]s and go through each actor's own lock.
///
/// Write discipline inside a frame: the physics job writes position and
/// velocity of every non-static actor; each bot's AI job writes only that
/// bot's velocity and steering state; the streaming job writes no actor at
/// all. Bot velocity is therefore touched by two jobs, which the per-actor
/// locks serialize in an unspecified order. Everything else is exclusive.
pub struct ActorRegistry {
    entries: Vec<ActorHandle>,
    index: AHashMap<ActorId, usize>,
    player: Option<ActorId>,
}

impl ActorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
            player: None,
        }
    }

    /// Spawns an actor, handing back its shared handle.
    ///
    /// Fails with [`RegistryError::DuplicateActor`] when an actor with the
    /// same id is already live; the registry is left untouched in that case.
    pub fn spawn(&mut self, actor: Actor) -> Result<ActorHandle, RegistryError> {
        let id = actor.id().clone();
        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateActor { id });
        }

        log::info!(
            "ActorRegistry: spawned '{}' (static={}, bot={})",
            id,
            actor.is_static,
            actor.is_bot
        );
        let handle = ActorHandle::new(actor);
        self.index.insert(id, self.entries.len());
        self.entries.push(handle.clone());
        Ok(handle)
    }

    /// Marks an already-spawned actor as the player this match follows.
    ///
    /// The player's position parameterizes the streaming job and is the
    /// target the bot AI hunts.
    pub fn designate_player(&mut self, id: &ActorId) -> Result<(), RegistryError> {
        if !self.index.contains_key(id) {
            return Err(RegistryError::UnknownActor { id: id.clone() });
        }
        log::info!("ActorRegistry: '{id}' designated as the player");
        self.player = Some(id.clone());
        Ok(())
    }

    /// Removes an actor by id.
    pub fn despawn(&mut self, id: &ActorId) -> Result<(), RegistryError> {
        let position = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| RegistryError::UnknownActor { id: id.clone() })?;

        self.entries.remove(position);
        self.rebuild_index();
        if self.player.as_ref() == Some(id) {
            self.player = None;
        }
        log::info!("ActorRegistry: despawned '{id}'");
        Ok(())
    }

    /// Looks up one actor's handle.
    pub fn get(&self, id: &ActorId) -> Option<ActorHandle> {
        self.index.get(id).map(|&i| self.entries[i].clone())
    }

    /// The number of live actors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no actors are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all live actors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActorHandle> {
        self.entries.iter()
    }

    /// Handles of every non-static actor, in insertion order.
    ///
    /// This is the partition the physics job integrates.
    pub fn dynamic_actors(&self) -> Vec<ActorHandle> {
        self.entries
            .iter()
            .filter(|h| !h.lock().is_static)
            .cloned()
            .collect()
    }

    /// Handles of every bot, in insertion order.
    ///
    /// Each one becomes its own AI steering job.
    pub fn bots(&self) -> Vec<ActorHandle> {
        self.entries
            .iter()
            .filter(|h| h.lock().is_bot)
            .cloned()
            .collect()
    }

    /// The designated player's handle, if one is live.
    pub fn player(&self) -> Option<ActorHandle> {
        self.player.as_ref().and_then(|id| self.get(id))
    }

    /// Removes every actor whose health has reached zero.
    ///
    /// The frame pipeline runs this between the barrier and replication, so
    /// a frame's packet list never contains an actor its own jobs killed.
    /// Returns the removed ids in their former registry order.
    pub fn sweep_dead(&mut self) -> Vec<ActorId> {
        let mut removed = Vec::new();
        self.entries.retain(|handle| {
            let actor = handle.lock();
            if actor.is_alive() {
                true
            } else {
                removed.push(actor.id().clone());
                false
            }
        });

        if !removed.is_empty() {
            self.rebuild_index();
            for id in &removed {
                if self.player.as_ref() == Some(id) {
                    self.player = None;
                }
                log::debug!("ActorRegistry: swept '{id}' (health depleted)");
            }
        }
        removed
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, handle) in self.entries.iter().enumerate() {
            self.index.insert(handle.lock().id().clone(), position);
        }
    }
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
