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

// Strata Match Runtime
// Headless binary driving the frame pipeline end to end

use anyhow::Result;

use strata_core::math::Vec3;
use strata_core::{ActorId, SeededRng};
use strata_data::{Actor, ActorRegistry, WeaponTable};
use strata_exec::{FrameEvent, FrameScheduler, SchedulerConfig};
use strata_net::NetworkReplicator;
use strata_sim::movement;
use strata_sim::{FireOutcome, FireRateController};

mod config;
mod raycast;

use config::MatchConfig;
use raycast::RegistryRaycaster;

/// Random stream for arena layout. Per-frame job streams start at frame 1
/// shifted left 16 bits, so anything below that is free.
const PLACEMENT_STREAM: u64 = 1;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    // --- Step 1: Logging and configuration ---
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = MatchConfig::load(std::env::args().nth(1).as_deref())?;
    log::info!(
        "Match setup: {} worker(s), {} frame(s) at {:.4}s, {} bot(s), seed {}",
        config.worker_count,
        config.frame_count,
        config.timestep,
        config.bot_count,
        config.seed
    );

    // --- Step 2: World and pipeline ---
    let mut registry = build_arena(&config)?;
    let mut scheduler = FrameScheduler::new(SchedulerConfig {
        worker_count: config.worker_count,
        seed: config.seed,
        ..SchedulerConfig::default()
    })?;
    let mut controller = FireRateController::with_seed(WeaponTable::default(), config.seed);

    // --- Step 3: Send the player walking toward downtown, weapon hot ---
    if let Some(player) = registry.player() {
        let mut actor = player.lock();
        let heading = (Vec3::new(100.0, 0.0, 100.0) - actor.position).xz();
        movement::steer_horizontal(&mut actor, heading, movement::MOVE_SPEED);
        actor.is_sprinting = true;
    }

    // --- Step 4: Run the match ---
    let mut last_snapshot = Vec::new();
    for _ in 0..config.frame_count {
        let packets = scheduler.run_frame(&mut registry, config.timestep)?;

        // The player keeps the trigger held on whoever is closest.
        if let Some(FireOutcome::Fired { hits, .. }) =
            fire_at_nearest_bot(&mut controller, &registry, scheduler.clock().now())?
        {
            for victim in &hits {
                log::info!("Player tagged '{victim}'");
            }
        }

        // An occasional hop keeps the vertical axis in play.
        if scheduler.clock().frame() % 120 == 0 {
            if let Some(player) = registry.player() {
                movement::try_jump(&mut player.lock());
            }
        }

        for event in scheduler.events().drain() {
            let FrameEvent::Completed {
                frame,
                jobs,
                faults,
                duration,
            } = event;
            if frame % 60 == 0 {
                log::info!(
                    "Frame {frame}: {jobs} job(s) in {duration:?}, {} packet(s), {faults} fault(s)",
                    packets.len()
                );
            }
        }

        last_snapshot = packets;
    }

    // --- Step 5: Final report ---
    let stats = scheduler.pool_stats();
    log::info!(
        "Match over after {} frame(s): {} actor(s) standing, {} job(s) run, {} faulted",
        scheduler.clock().frame(),
        registry.len(),
        stats.completed,
        stats.faulted
    );

    let wire = NetworkReplicator::encode_frame(&last_snapshot)?;
    log::info!(
        " -> Final snapshot: {} packet(s), {} byte(s) on the wire",
        last_snapshot.len(),
        wire.len()
    );
    if let Some(packet) = last_snapshot.iter().find(|p| p.id == "player_1") {
        log::info!(" -> Player state: {}", packet.to_json()?);
    }

    Ok(())
}

/// Spawns the player, a ring of bots around the bunker, and some cover.
fn build_arena(config: &MatchConfig) -> Result<ActorRegistry> {
    let mut registry = ActorRegistry::new();

    registry.spawn(Actor::player("player_1", Vec3::new(500.0, 0.0, 500.0)))?;
    registry.designate_player(&ActorId::new("player_1"))?;

    let mut placement = SeededRng::with_stream(config.seed, PLACEMENT_STREAM);
    for slot in 0..config.bot_count {
        let angle = slot as f64 / config.bot_count as f64 * std::f64::consts::TAU;
        let radius = placement.range(60.0, 350.0);
        let position = Vec3::new(
            500.0 + radius * angle.cos(),
            0.0,
            500.0 + radius * angle.sin(),
        );
        registry.spawn(Actor::bot(format!("bot_{:02}", slot + 1), position))?;
    }

    registry.spawn(Actor::wall("wall_north", Vec3::new(500.0, 0.0, 520.0)))?;
    registry.spawn(Actor::wall("wall_east", Vec3::new(520.0, 0.0, 500.0)))?;

    Ok(registry)
}

/// Pulls the player's trigger at the nearest live bot, when one exists.
fn fire_at_nearest_bot(
    controller: &mut FireRateController,
    registry: &ActorRegistry,
    now: f64,
) -> Result<Option<FireOutcome>> {
    let Some(player) = registry.player() else {
        return Ok(None);
    };
    let origin = player.lock().position;

    let mut nearest: Option<(f64, Vec3)> = None;
    for handle in registry.iter() {
        if handle.same_actor(&player) {
            continue;
        }
        let actor = handle.lock();
        if !actor.is_bot || !actor.is_alive() {
            continue;
        }
        let dist_sq = actor.position.distance_squared(origin);
        if nearest.as_ref().is_none_or(|(best, _)| dist_sq < *best) {
            nearest = Some((dist_sq, actor.position));
        }
    }
    let Some((_, target)) = nearest else {
        return Ok(None);
    };

    let raycaster = RegistryRaycaster::new(registry, player.clone());
    let mut shooter = player.lock();
    let outcome = controller.try_fire(&mut shooter, target - origin, now, &raycaster)?;
    Ok(Some(outcome))
}
