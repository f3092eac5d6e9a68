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

//! Simulation time for the frame pipeline.

use serde::{Deserialize, Serialize};

/// The accumulated simulation clock.
///
/// Unlike a wall-clock stopwatch, this clock only moves when the frame
/// driver advances it, by exactly the delta it was handed. Every consumer
/// of "now" inside a frame (fire-rate cooldowns, AI seeds, telemetry
/// stamps) reads the same value, and replaying the same sequence of deltas
/// reproduces the same timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    /// Creates a clock at time `0.0`, before any frame has run.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advances the clock by one frame of `dt` seconds and returns the new
    /// current time.
    ///
    /// `dt` must be non-negative; the driver hands in its fixed timestep.
    #[inline]
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt;
        self.frame += 1;
        self.elapsed
    }

    /// The current simulation time in seconds.
    #[inline]
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    /// The number of frames that have been advanced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
