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

//! # Rigid Body Step
//!
//! Gravity, integration, and ground resolution for one actor. Contact
//! physics beyond the ground plane is someone else's problem; actors here
//! are points that fall, run, and land.

use strata_data::Actor;

/// Tunables for the integration step.
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Vertical acceleration, in meters per second squared. Negative is down.
    pub gravity: f64,
    /// Height of the ground plane actors rest on.
    pub ground_height: f64,
    /// Factor applied to a sprinting actor's integration step.
    pub sprint_multiplier: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -9.8,
            ground_height: 0.0,
            sprint_multiplier: 2.5,
        }
    }
}

/// Advances one actor by `dt` seconds.
///
/// Static actors pass through untouched; the physics partition should not
/// contain them in the first place.
pub fn integrate_actor(actor: &mut Actor, dt: f64, config: &PhysicsConfig) {
    if actor.is_static {
        return;
    }

    // 1. Gravity accelerates the vertical velocity.
    actor.velocity.y += config.gravity * dt;

    // 2. Integrate the position. Sprint scales the whole step, so a
    //    sprinting actor covers more ground per frame at the same velocity.
    let step = if actor.is_sprinting {
        dt * config.sprint_multiplier
    } else {
        dt
    };
    actor.position = actor.position + actor.velocity * step;

    // 3. Resolve against the ground plane. Only a downward velocity is
    //    cancelled; an upward one belongs to a jump that started this frame.
    if actor.position.y <= config.ground_height {
        actor.position.y = config.ground_height;
        if actor.velocity.y < 0.0 {
            actor.velocity.y = 0.0;
        }
        actor.on_ground = true;
    } else {
        actor.on_ground = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strata_core::math::Vec3;

    const DT: f64 = 0.1;

    #[test]
    fn dynamic_actor_falls_under_gravity() {
        let mut actor = Actor::bot("bot_01", Vec3::new(0.0, 10.0, 0.0));
        let config = PhysicsConfig::default();

        integrate_actor(&mut actor, DT, &config);

        assert_relative_eq!(actor.velocity.y, -0.98, epsilon = 1e-12);
        assert!(actor.position.y < 10.0);
        assert!(!actor.on_ground);
    }

    #[test]
    fn falling_actor_lands_on_the_ground_plane() {
        let mut actor = Actor::player("player_1", Vec3::new(0.0, 0.5, 0.0));
        actor.velocity.y = -20.0;
        let config = PhysicsConfig::default();

        integrate_actor(&mut actor, DT, &config);

        assert_eq!(actor.position.y, 0.0);
        assert_eq!(actor.velocity.y, 0.0);
        assert!(actor.on_ground);
    }

    #[test]
    fn fresh_jump_is_not_cancelled_by_ground_contact() {
        // A grounded actor that just jumped still has position.y == 0 for
        // this integration; the positive velocity must survive it.
        let mut actor = Actor::player("player_1", Vec3::ZERO);
        actor.velocity.y = 15.0;
        let config = PhysicsConfig::default();

        integrate_actor(&mut actor, 0.01, &config);

        assert!(actor.position.y > 0.0);
        assert!(actor.velocity.y > 0.0);
        assert!(!actor.on_ground);
    }

    #[test]
    fn sprint_covers_the_multiplier_distance() {
        let config = PhysicsConfig::default();

        let mut walker = Actor::player("walker", Vec3::ZERO);
        walker.velocity = Vec3::new(10.0, 0.0, 0.0);
        integrate_actor(&mut walker, DT, &config);

        let mut sprinter = Actor::player("sprinter", Vec3::ZERO);
        sprinter.velocity = Vec3::new(10.0, 0.0, 0.0);
        sprinter.is_sprinting = true;
        integrate_actor(&mut sprinter, DT, &config);

        assert_relative_eq!(walker.position.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            sprinter.position.x,
            walker.position.x * config.sprint_multiplier,
            epsilon = 1e-12
        );
    }

    #[test]
    fn static_actors_never_move() {
        let mut wall = Actor::wall("wall_a", Vec3::new(10.0, 5.0, 12.0));
        let config = PhysicsConfig::default();

        integrate_actor(&mut wall, DT, &config);

        assert_eq!(wall.position, Vec3::new(10.0, 5.0, 12.0));
        assert_eq!(wall.velocity, Vec3::ZERO);
    }

    #[test]
    fn repeated_steps_keep_a_grounded_actor_put() {
        let mut actor = Actor::player("player_1", Vec3::new(3.0, 0.0, 4.0));
        let config = PhysicsConfig::default();

        for _ in 0..50 {
            integrate_actor(&mut actor, DT, &config);
        }

        assert_eq!(actor.position.y, 0.0);
        assert_eq!(actor.velocity.y, 0.0);
        assert!(actor.on_ground);
    }
}
