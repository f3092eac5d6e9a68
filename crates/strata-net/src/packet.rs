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

//! The wire shape of one actor's replicated state.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use strata_data::Actor;

/// One actor's authoritative state at a sync point.
///
/// A detached value object: capture copies everything it needs out of the
/// actor, so mutating the actor afterwards cannot bleed into a packet that
/// was already produced. The serde field names are the wire contract;
/// remote observers parse exactly these keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct StatePacket {
    /// The actor's unique name.
    pub id: String,
    /// World position as `[x, y, z]`.
    pub pos: [f64; 3],
    /// Linear velocity as `[x, y, z]`.
    pub vel: [f64; 3],
    /// Remaining health.
    pub health: f64,
    /// Name of the wielded weapon.
    pub weapon: String,
}

impl StatePacket {
    /// Captures one actor's current state.
    pub fn capture(actor: &Actor) -> Self {
        Self {
            id: actor.id().to_string(),
            pos: actor.position.to_array(),
            vel: actor.velocity.to_array(),
            health: actor.health,
            weapon: actor.active_weapon.to_string(),
        }
    }

    /// Renders the packet as one JSON object with exactly the wire keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
