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

//! Shared locomotion rules.
//!
//! Player input handling and bot steering both express movement through
//! these helpers, so walking speed and jump impulses stay consistent no
//! matter who is driving the actor.

use strata_core::math::Vec2;
use strata_data::Actor;

/// Ground speed of a walking actor, in meters per second.
pub const MOVE_SPEED: f64 = 10.0;
/// Vertical velocity granted by a jump or a bot hop.
pub const JUMP_VELOCITY: f64 = 15.0;

/// Points the actor's horizontal velocity along `direction` at `speed`.
///
/// `direction` lies on the ground plane and need not be normalized; a zero
/// direction stops the actor. Vertical velocity is left to gravity and
/// jumps.
pub fn steer_horizontal(actor: &mut Actor, direction: Vec2, speed: f64) {
    let dir = direction.normalize();
    actor.velocity.x = dir.x * speed;
    actor.velocity.z = dir.y * speed;
}

/// Launches the actor upward if it is standing on the ground.
///
/// Returns whether the jump happened; airborne actors cannot jump again.
pub fn try_jump(actor: &mut Actor) -> bool {
    if actor.on_ground {
        actor.velocity.y = JUMP_VELOCITY;
        actor.on_ground = false;
        true
    } else {
        false
    }
}
