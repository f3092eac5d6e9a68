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

//! Match configuration: built-in defaults, an optional JSON file, and
//! environment overrides layered on top.

use std::str::FromStr;

use anyhow::Context;
use serde::Deserialize;

/// Tunables for one headless match.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Worker threads backing the frame scheduler.
    pub worker_count: usize,
    /// Fixed simulation timestep in seconds.
    pub timestep: f64,
    /// Frames to run before the match ends.
    pub frame_count: u64,
    /// Bots spawned around the arena at match start.
    pub bot_count: usize,
    /// Seed behind every deterministic random stream in the match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            worker_count: 4,
            timestep: 1.0 / 60.0,
            frame_count: 300,
            bot_count: 6,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Loads the configuration, lowest priority first: built-in defaults,
    /// then the JSON file at `path` when one is given, then the
    /// `STRATA_WORKERS` and `STRATA_FRAMES` environment variables.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let mut config: Self = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read config file '{path}'"))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("could not parse config file '{path}'"))?
            }
            None => Self::default(),
        };

        if let Some(workers) = env_override("STRATA_WORKERS") {
            config.worker_count = workers;
        }
        if let Some(frames) = env_override("STRATA_FRAMES") {
            config.frame_count = frames;
        }

        Ok(config)
    }
}

/// Reads an environment variable, skipping values that do not parse.
fn env_override<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {name}={raw}: not a valid value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_standard_match() {
        let config = MatchConfig::default();
        assert_eq!(config.worker_count, 4);
        assert_eq!(config.frame_count, 300);
        assert_eq!(config.bot_count, 6);
        assert!((config.timestep - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "worker_count": 8, "bot_count": 12 }"#)
                .expect("valid config JSON");

        assert_eq!(config.worker_count, 8);
        assert_eq!(config.bot_count, 12);
        assert_eq!(
            config.frame_count, 300,
            "fields missing from the file keep their defaults"
        );
    }

    #[test]
    fn environment_overrides_beat_the_defaults() {
        std::env::set_var("STRATA_WORKERS", "2");
        let config = MatchConfig::load(None).expect("defaults always load");
        std::env::remove_var("STRATA_WORKERS");

        assert_eq!(config.worker_count, 2);
    }
}
