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

//! # Bot Steering
//!
//! The Patrol / Chase / Attack state machine. Each bot's AI job runs this
//! once per frame against the player-position snapshot captured when the
//! job was built; it writes nothing but its own bot's velocity and state.

use strata_core::math::{Vec2, Vec3};
use strata_core::SeededRng;
use strata_data::{Actor, AiState};

use crate::movement::{self, MOVE_SPEED};

/// Tunables for bot steering.
#[derive(Debug, Clone)]
pub struct BotAiConfig {
    /// Squared horizontal distance at which a bot notices the player.
    pub vision_range_sq: f64,
    /// Squared horizontal distance at which a bot stops and engages.
    pub attack_range_sq: f64,
    /// Ground speed while chasing.
    pub chase_speed: f64,
    /// Ground speed while patrolling.
    pub patrol_speed: f64,
    /// Where patrols drift toward when the player is out of sight.
    pub patrol_anchor: Vec2,
    /// Uniform per-axis jitter applied to the patrol anchor each update.
    pub patrol_jitter: f64,
    /// Per-update probability that a grounded bot hops.
    pub hop_chance: f64,
}

impl Default for BotAiConfig {
    fn default() -> Self {
        Self {
            vision_range_sq: 2500.0,
            attack_range_sq: 400.0,
            chase_speed: 8.0,
            patrol_speed: MOVE_SPEED,
            patrol_anchor: Vec2::new(500.0, 500.0),
            patrol_jitter: 25.0,
            hop_chance: 0.005,
        }
    }
}

/// Steers one bot for this frame.
///
/// `rng` is the bot's per-frame stream; replaying the same seeds replays
/// the same patrol wobble and hops.
pub fn steer_bot(bot: &mut Actor, player_position: Vec3, rng: &mut SeededRng, config: &BotAiConfig) {
    let here = bot.position.xz();
    let player = player_position.xz();
    let player_dist_sq = here.distance_squared(player);

    // 1. Pick this frame's state from the distance bands.
    bot.ai_state = if player_dist_sq <= config.attack_range_sq {
        AiState::Attack
    } else if player_dist_sq <= config.vision_range_sq {
        AiState::Chase
    } else {
        AiState::Patrol
    };

    // 2. Steer accordingly.
    match bot.ai_state {
        AiState::Attack => {
            // Hold position; fire control owns what happens next.
            movement::steer_horizontal(bot, Vec2::ZERO, 0.0);
        }
        AiState::Chase => {
            movement::steer_horizontal(bot, player - here, config.chase_speed);
        }
        AiState::Patrol => {
            let target = config.patrol_anchor
                + Vec2::new(
                    rng.range(-config.patrol_jitter, config.patrol_jitter),
                    rng.range(-config.patrol_jitter, config.patrol_jitter),
                );
            if here.distance_squared(target) > 1.0 {
                movement::steer_horizontal(bot, target - here, config.patrol_speed);
            } else {
                // Close enough to the anchor; stand still instead of
                // thrashing around the jitter.
                movement::steer_horizontal(bot, Vec2::ZERO, 0.0);
            }
        }
    }

    // 3. The occasional hop. Grounded bots only; airborne ones draw no roll.
    if bot.on_ground && rng.chance(config.hop_chance) {
        movement::try_jump(bot);
    }

    log::trace!(
        "Bot '{}' -> {:?} (player distance^2 {:.1})",
        bot.id(),
        bot.ai_state,
        player_dist_sq
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::movement::JUMP_VELOCITY;

    fn quiet_config() -> BotAiConfig {
        BotAiConfig {
            hop_chance: 0.0,
            ..BotAiConfig::default()
        }
    }

    fn rng() -> SeededRng {
        SeededRng::with_stream(7, 0)
    }

    #[test]
    fn far_bot_patrols_toward_the_anchor() {
        let config = quiet_config();
        let mut bot = Actor::bot("bot_01", Vec3::new(100.0, 0.0, 100.0));
        let player = Vec3::new(900.0, 0.0, 900.0);

        steer_bot(&mut bot, player, &mut rng(), &config);

        assert_eq!(bot.ai_state, AiState::Patrol);
        // The anchor sits up and to the right of the bot; the jitter of
        // ±25 around (500, 500) cannot flip either sign from (100, 100).
        assert!(bot.velocity.x > 0.0);
        assert!(bot.velocity.z > 0.0);
        let speed = bot.velocity.xz().length();
        assert_relative_eq!(speed, config.patrol_speed, epsilon = 1e-9);
    }

    #[test]
    fn mid_range_bot_chases_the_player() {
        let config = quiet_config();
        let mut bot = Actor::bot("bot_01", Vec3::new(500.0, 0.0, 500.0));
        // 30 m away on X: inside vision (2500), outside attack (400).
        let player = Vec3::new(530.0, 0.0, 500.0);

        steer_bot(&mut bot, player, &mut rng(), &config);

        assert_eq!(bot.ai_state, AiState::Chase);
        assert_relative_eq!(bot.velocity.x, config.chase_speed, epsilon = 1e-9);
        assert_relative_eq!(bot.velocity.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn close_bot_stops_to_attack() {
        let config = quiet_config();
        let mut bot = Actor::bot("bot_01", Vec3::new(500.0, 0.0, 500.0));
        bot.velocity = Vec3::new(8.0, 0.0, 0.0);
        // 10 m away: squared distance 100, inside the attack band.
        let player = Vec3::new(510.0, 0.0, 500.0);

        steer_bot(&mut bot, player, &mut rng(), &config);

        assert_eq!(bot.ai_state, AiState::Attack);
        assert_eq!(bot.velocity.x, 0.0);
        assert_eq!(bot.velocity.z, 0.0);
    }

    #[test]
    fn vertical_motion_is_gravity_business() {
        let config = quiet_config();
        let mut bot = Actor::bot("bot_01", Vec3::new(0.0, 5.0, 0.0));
        bot.velocity.y = -3.0;

        steer_bot(&mut bot, Vec3::new(900.0, 0.0, 900.0), &mut rng(), &config);

        assert_eq!(bot.velocity.y, -3.0);
    }

    #[test]
    fn certain_hop_launches_a_grounded_bot() {
        let config = BotAiConfig {
            hop_chance: 1.0,
            ..BotAiConfig::default()
        };
        let mut bot = Actor::bot("bot_01", Vec3::new(100.0, 0.0, 100.0));
        assert!(bot.on_ground);

        steer_bot(&mut bot, Vec3::new(900.0, 0.0, 900.0), &mut rng(), &config);

        assert_eq!(bot.velocity.y, JUMP_VELOCITY);
        assert!(!bot.on_ground);
    }

    #[test]
    fn same_stream_steers_identically() {
        let config = BotAiConfig::default();
        let player = Vec3::new(900.0, 0.0, 900.0);

        let mut first = Actor::bot("bot_01", Vec3::new(100.0, 0.0, 100.0));
        let mut second = first.clone();

        steer_bot(&mut first, player, &mut SeededRng::with_stream(41, 3), &config);
        steer_bot(&mut second, player, &mut SeededRng::with_stream(41, 3), &config);

        assert_eq!(first.velocity, second.velocity);
        assert_eq!(first.ai_state, second.ai_state);
    }

    #[test]
    fn state_bands_transition_with_distance() {
        let config = quiet_config();
        let mut bot = Actor::bot("bot_01", Vec3::new(0.0, 0.0, 0.0));

        // Out of sight, then spotted, then in the face.
        steer_bot(&mut bot, Vec3::new(60.0, 0.0, 0.0), &mut rng(), &config);
        assert_eq!(bot.ai_state, AiState::Patrol);

        steer_bot(&mut bot, Vec3::new(49.0, 0.0, 0.0), &mut rng(), &config);
        assert_eq!(bot.ai_state, AiState::Chase);

        steer_bot(&mut bot, Vec3::new(19.0, 0.0, 0.0), &mut rng(), &config);
        assert_eq!(bot.ai_state, AiState::Attack);
    }
}
