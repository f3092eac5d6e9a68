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

//! # Frame Jobs
//!
//! The closed set of work units a frame fans out to the pool. Each variant
//! captures everything it needs at build time: handles, the timestep, the
//! player-position snapshot, and (for bots) a private random stream. All
//! actor locking happens here; the simulation bodies in `strata-sim` work
//! on plain `&mut Actor`.

use std::sync::{Arc, Mutex, PoisonError};

use strata_core::math::{Vec2, Vec3};
use strata_core::SeededRng;
use strata_data::ActorHandle;
use strata_sim::{integrate_actor, steer_bot, BotAiConfig, PhysicsConfig, StreamingField};

/// One unit of frame work, tagged with its captured arguments.
///
/// The set is closed on purpose: the scheduler knows exactly which kinds of
/// job a frame can contain, and the write discipline documented on
/// [`ActorRegistry`](strata_data::ActorRegistry) is stated in terms of these
/// three.
#[derive(Debug)]
pub enum FrameJob {
    /// Integrate every non-static actor by the frame's timestep.
    Physics {
        /// The actors to integrate, one lock each.
        actors: Vec<ActorHandle>,
        /// The frame's timestep in seconds.
        dt: f64,
        /// Integration tunables.
        config: PhysicsConfig,
    },
    /// Steer one bot against the frame's player-position snapshot.
    BotAi {
        /// The bot to steer.
        bot: ActorHandle,
        /// Where the player stood when the frame was built.
        player_position: Vec3,
        /// This bot's private random stream for this frame.
        rng: SeededRng,
        /// Steering tunables.
        config: BotAiConfig,
    },
    /// Re-classify zone detail around the observer.
    Streaming {
        /// The shared field of zones.
        field: Arc<Mutex<StreamingField>>,
        /// The observer's ground position when the frame was built.
        observer: Vec2,
    },
}

impl FrameJob {
    /// Executes the job on the calling worker thread.
    pub fn run(self) {
        match self {
            FrameJob::Physics { actors, dt, config } => {
                for handle in &actors {
                    let mut actor = handle.lock();
                    integrate_actor(&mut actor, dt, &config);
                }
            }
            FrameJob::BotAi {
                bot,
                player_position,
                mut rng,
                config,
            } => {
                let mut actor = bot.lock();
                steer_bot(&mut actor, player_position, &mut rng, &config);
            }
            FrameJob::Streaming { field, observer } => {
                field
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .update(observer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_data::{Actor, AiState};
    use strata_sim::ZoneLod;

    #[test]
    fn physics_job_integrates_every_actor_it_holds() {
        let first = ActorHandle::new(Actor::player("player_1", Vec3::new(0.0, 10.0, 0.0)));
        let second = ActorHandle::new(Actor::bot("bot_01", Vec3::new(5.0, 20.0, 5.0)));

        FrameJob::Physics {
            actors: vec![first.clone(), second.clone()],
            dt: 0.1,
            config: PhysicsConfig::default(),
        }
        .run();

        assert!(first.lock().position.y < 10.0);
        assert!(second.lock().position.y < 20.0);
    }

    #[test]
    fn bot_job_runs_the_steering_policy() {
        let bot = ActorHandle::new(Actor::bot("bot_01", Vec3::new(500.0, 0.0, 500.0)));

        FrameJob::BotAi {
            bot: bot.clone(),
            player_position: Vec3::new(530.0, 0.0, 500.0),
            rng: SeededRng::with_stream(7, 0),
            config: BotAiConfig::default(),
        }
        .run();

        let steered = bot.lock();
        assert_eq!(steered.ai_state, AiState::Chase);
        assert!(steered.velocity.x > 0.0);
    }

    #[test]
    fn streaming_job_reclassifies_the_shared_field() {
        let field = Arc::new(Mutex::new(StreamingField::default()));

        FrameJob::Streaming {
            field: Arc::clone(&field),
            observer: Vec2::new(500.0, 500.0),
        }
        .run();

        let field = field.lock().unwrap();
        assert_eq!(field.lod_of("bunker"), Some(ZoneLod::Full));
        assert_eq!(field.lod_of("downtown"), Some(ZoneLod::Minimal));
    }
}
