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

//! The seam between weapon fire and whatever resolves hits.

use crate::actor::ActorId;
use crate::math::Vec3;

/// Hit-test collaborator consumed by the fire-rate controller.
///
/// The engine core decides *when* a shot happens and *which directions* the
/// projectiles take; it never decides what they hit. Implementations own
/// that question: the runtime ships a simple registry scan, a full game
/// would back this with its spatial index, and tests substitute recorders.
pub trait RaycastProvider {
    /// Casts one ray and applies `damage` to whatever it strikes.
    ///
    /// `direction` is always unit length by the time it arrives here.
    /// Returns the id of the struck actor, or `None` on a miss.
    fn raycast(&self, origin: Vec3, direction: Vec3, damage: f64) -> Option<ActorId>;
}
