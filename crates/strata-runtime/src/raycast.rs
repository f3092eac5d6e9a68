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

//! Hitscan resolution against the live actor registry.

use strata_core::math::Vec3;
use strata_core::{ActorId, RaycastProvider};
use strata_data::{ActorHandle, ActorRegistry};

/// Radius of the bounding sphere every actor presents to hitscan fire.
const ACTOR_HIT_RADIUS: f64 = 1.5;

/// Resolves rays against every live actor except the shooter.
///
/// The fire controller calls [`RaycastProvider::raycast`] while it already
/// holds the shooter's own lock, so the shooter must be skipped by handle
/// identity before any lock is taken.
pub struct RegistryRaycaster<'a> {
    registry: &'a ActorRegistry,
    shooter: ActorHandle,
}

impl<'a> RegistryRaycaster<'a> {
    /// Builds a raycaster over `registry` that ignores `shooter`.
    pub fn new(registry: &'a ActorRegistry, shooter: ActorHandle) -> Self {
        Self { registry, shooter }
    }
}

impl RaycastProvider for RegistryRaycaster<'_> {
    fn raycast(&self, origin: Vec3, direction: Vec3, damage: f64) -> Option<ActorId> {
        let mut nearest: Option<(f64, ActorHandle)> = None;

        for handle in self.registry.iter() {
            if handle.same_actor(&self.shooter) {
                continue;
            }

            let candidate = handle.lock();
            if !candidate.is_alive() {
                continue;
            }

            let to_center = candidate.position - origin;
            let along = to_center.dot(direction);
            if along <= 0.0 {
                // Behind the muzzle.
                continue;
            }

            let closest_sq = to_center.length_squared() - along * along;
            if closest_sq > ACTOR_HIT_RADIUS * ACTOR_HIT_RADIUS {
                continue;
            }

            if nearest.as_ref().is_none_or(|(best, _)| along < *best) {
                nearest = Some((along, handle.clone()));
            }
        }

        let (_, victim) = nearest?;
        let mut actor = victim.lock();
        actor.health -= damage;
        log::debug!(
            "Raycast hit '{}' for {damage:.1} ({:.1} health left)",
            actor.id(),
            actor.health
        );
        Some(actor.id().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_data::Actor;

    fn firing_range() -> (ActorRegistry, ActorHandle) {
        let mut registry = ActorRegistry::new();
        let shooter = registry
            .spawn(Actor::player("player_1", Vec3::ZERO))
            .unwrap();
        registry
            .spawn(Actor::bot("bot_near", Vec3::new(0.0, 0.0, 10.0)))
            .unwrap();
        registry
            .spawn(Actor::bot("bot_far", Vec3::new(0.0, 0.0, 40.0)))
            .unwrap();
        registry
            .spawn(Actor::bot("bot_side", Vec3::new(25.0, 0.0, 0.0)))
            .unwrap();
        (registry, shooter)
    }

    #[test]
    fn nearest_actor_on_the_ray_takes_the_hit() {
        let (registry, shooter) = firing_range();
        let raycaster = RegistryRaycaster::new(&registry, shooter);

        let victim = raycaster.raycast(Vec3::ZERO, Vec3::Z, 12.0);

        assert_eq!(victim, Some(ActorId::new("bot_near")));
        let near = registry.get(&ActorId::new("bot_near")).unwrap();
        assert_eq!(near.lock().health, 88.0, "damage lands on the victim");
        let far = registry.get(&ActorId::new("bot_far")).unwrap();
        assert_eq!(far.lock().health, 100.0, "the occluded actor is untouched");
    }

    #[test]
    fn resolves_while_the_shooter_lock_is_held() {
        let (registry, shooter) = firing_range();
        let raycaster = RegistryRaycaster::new(&registry, shooter.clone());

        // The fire controller calls in with the shooter's guard live; the
        // scan must never try to take that lock again.
        let guard = shooter.lock();
        let victim = raycaster.raycast(guard.position, Vec3::Z, 5.0);
        drop(guard);

        assert_eq!(victim, Some(ActorId::new("bot_near")));
    }

    #[test]
    fn wide_shots_hit_nothing() {
        let (registry, shooter) = firing_range();
        let raycaster = RegistryRaycaster::new(&registry, shooter);

        let diagonal = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert_eq!(raycaster.raycast(Vec3::ZERO, diagonal, 12.0), None);

        for handle in registry.iter() {
            assert_eq!(handle.lock().health, 100.0, "a miss damages nobody");
        }
    }

    #[test]
    fn actors_behind_the_muzzle_are_ignored() {
        let (registry, shooter) = firing_range();
        let raycaster = RegistryRaycaster::new(&registry, shooter);

        // From z=20 looking down +Z, bot_near sits behind the origin.
        let victim = raycaster.raycast(Vec3::new(0.0, 0.0, 20.0), Vec3::Z, 12.0);

        assert_eq!(victim, Some(ActorId::new("bot_far")));
    }

    #[test]
    fn dead_actors_do_not_soak_projectiles() {
        let (registry, shooter) = firing_range();
        registry
            .get(&ActorId::new("bot_near"))
            .unwrap()
            .lock()
            .health = 0.0;
        let raycaster = RegistryRaycaster::new(&registry, shooter);

        let victim = raycaster.raycast(Vec3::ZERO, Vec3::Z, 12.0);

        assert_eq!(
            victim,
            Some(ActorId::new("bot_far")),
            "the ray passes through the corpse to the live actor behind it"
        );
    }
}
