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

//! # Frame Scheduler
//!
//! The single-threaded driver of the per-frame pipeline: advance the clock,
//! fan the frame's job set out to the worker pool, wait at the barrier,
//! sweep the dead, then capture the replication snapshot. Frames are totally
//! ordered because exactly one thread owns the scheduler.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use strata_core::math::Vec3;
use strata_core::{EventBus, FrameClock, SeededRng};
use strata_data::ActorRegistry;
use strata_net::{NetworkReplicator, StatePacket};
use strata_sim::{BotAiConfig, PhysicsConfig, StreamingField};

use crate::error::{FrameError, PoolError};
use crate::job::FrameJob;
use crate::pool::{PoolStats, WorkerPool};

/// Telemetry the scheduler publishes on its event bus.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// A frame finished its whole pipeline.
    Completed {
        /// The frame's index, starting at 1.
        frame: u64,
        /// How many jobs the frame fanned out.
        jobs: usize,
        /// How many of this frame's jobs faulted.
        faults: u64,
        /// Wall time the frame took, barrier and replication included.
        duration: Duration,
    },
}

/// Knobs for a scheduler instance.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Worker threads backing the frame's job set. Must be at least one.
    pub worker_count: usize,
    /// Integration tunables handed to every physics job.
    pub physics: PhysicsConfig,
    /// Steering tunables handed to every bot job.
    pub bot_ai: BotAiConfig,
    /// Base seed every bot's per-frame random stream derives from.
    pub seed: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            worker_count: 4,
            physics: PhysicsConfig::default(),
            bot_ai: BotAiConfig::default(),
            seed: 0,
        }
    }
}

/// Drives the per-frame pipeline over one registry.
///
/// The scheduler is the only caller of `drain` and `sync`; workers only
/// execute job bodies. Between a frame's barrier and the next frame's
/// submissions, no job is running, which is the window in which the dead
/// sweep and the replication pass may walk the registry freely.
pub struct FrameScheduler {
    pool: WorkerPool,
    clock: FrameClock,
    replicator: NetworkReplicator,
    field: Arc<Mutex<StreamingField>>,
    events: EventBus<FrameEvent>,
    config: SchedulerConfig,
}

impl FrameScheduler {
    /// Creates a scheduler and starts its worker pool.
    pub fn new(config: SchedulerConfig) -> Result<Self, PoolError> {
        let pool = WorkerPool::start(config.worker_count)?;
        Ok(Self {
            pool,
            clock: FrameClock::new(),
            replicator: NetworkReplicator::new(),
            field: Arc::new(Mutex::new(StreamingField::default())),
            events: EventBus::new(),
            config,
        })
    }

    /// Replaces the default zone map, builder style.
    pub fn with_streaming_field(mut self, field: StreamingField) -> Self {
        self.field = Arc::new(Mutex::new(field));
        self
    }

    /// Runs one full frame over the registry.
    ///
    /// Pipeline: advance the clock, build and submit the frame's closed job
    /// set, block at the barrier, sweep dead actors, then capture and return
    /// the replication snapshot. The packet list contains exactly the actors
    /// that survived the frame, in registry order.
    pub fn run_frame(
        &mut self,
        registry: &mut ActorRegistry,
        dt: f64,
    ) -> Result<Vec<StatePacket>, FrameError> {
        let frame_start = Instant::now();
        let faults_before = self.pool.stats().faulted;

        // 1. Advance simulation time.
        self.clock.advance(dt);
        let frame = self.clock.frame();

        // 2. Build this frame's closed job set.
        let jobs = self.build_jobs(registry, dt, frame);
        let job_count = jobs.len();

        // 3. Fan out and wait at the barrier.
        for job in jobs {
            self.pool
                .submit(move || job.run())
                .map_err(|source| FrameError::Scheduling { frame, source })?;
        }
        self.pool.drain();

        // 4. Sweep the dead before replication; the snapshot carries only
        //    actors that survived their own frame.
        let swept = registry.sweep_dead();

        // 5. Capture the authoritative snapshot.
        let packets = self.replicator.sync(registry);

        // 6. Publish the frame summary.
        let faults = self.pool.stats().faulted - faults_before;
        let duration = frame_start.elapsed();
        self.events.publish(FrameEvent::Completed {
            frame,
            jobs: job_count,
            faults,
            duration,
        });
        log::debug!(
            "FrameScheduler: frame {frame} ran {job_count} job(s), swept {}, replicated {} packet(s) in {duration:?}",
            swept.len(),
            packets.len()
        );

        Ok(packets)
    }

    fn build_jobs(&self, registry: &ActorRegistry, dt: f64, frame: u64) -> Vec<FrameJob> {
        let mut jobs = Vec::new();

        let dynamic = registry.dynamic_actors();
        if !dynamic.is_empty() {
            jobs.push(FrameJob::Physics {
                actors: dynamic,
                dt,
                config: self.config.physics.clone(),
            });
        }

        // Bot steering and zone streaming both key off the player; a world
        // without one runs physics only.
        let player_position = registry.player().map(|handle| handle.lock().position);
        if let Some(player_position) = player_position {
            for (slot, bot) in registry.bots().into_iter().enumerate() {
                jobs.push(FrameJob::BotAi {
                    bot,
                    player_position,
                    rng: self.bot_stream(frame, slot),
                    config: self.config.bot_ai.clone(),
                });
            }
            jobs.push(FrameJob::Streaming {
                field: Arc::clone(&self.field),
                observer: player_position.xz(),
            });
        }

        jobs
    }

    /// The random stream for one bot slot in one frame.
    ///
    /// Frame in the high bits, slot in the low: every (frame, bot) pair
    /// draws from its own sequence, so job reordering across workers cannot
    /// change what any bot rolls.
    fn bot_stream(&self, frame: u64, slot: usize) -> SeededRng {
        SeededRng::with_stream(self.config.seed, frame.wrapping_shl(16) | slot as u64)
    }

    /// The bus carrying [`FrameEvent`]s.
    pub fn events(&self) -> &EventBus<FrameEvent> {
        &self.events
    }

    /// The simulation clock; its `now()` is what cooldowns compare against.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// The worker pool's lifetime counters.
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Shared handle to the streaming field, for detail-level inspection.
    pub fn streaming_field(&self) -> Arc<Mutex<StreamingField>> {
        Arc::clone(&self.field)
    }
}
