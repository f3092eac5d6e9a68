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

//! The post-barrier snapshot pass over the actor registry.

use bincode::config;
use bincode::error::{DecodeError, EncodeError};

use strata_data::ActorRegistry;

use crate::packet::StatePacket;

/// Produces the per-frame authoritative snapshot for remote observers.
///
/// The frame pipeline invokes [`sync`](Self::sync) strictly after its
/// barrier has returned, so every actor lock is uncontended and the
/// snapshot is frame-consistent: it contains either all of a frame's
/// writes or none of them, never an interleaving.
pub struct NetworkReplicator {
    sync_count: u64,
}

impl NetworkReplicator {
    /// Creates a replicator that has not synced yet.
    pub fn new() -> Self {
        Self { sync_count: 0 }
    }

    /// Captures one packet per live actor, in registry insertion order.
    ///
    /// Read-only over the actors: the same registry snapshot always yields
    /// the same packet list. Whoever despawns the dead decides what "live"
    /// means here; the pipeline sweeps before it syncs.
    pub fn sync(&mut self, registry: &ActorRegistry) -> Vec<StatePacket> {
        let packets: Vec<StatePacket> = registry
            .iter()
            .map(|handle| StatePacket::capture(&handle.lock()))
            .collect();

        self.sync_count += 1;
        log::debug!(
            "Replicator: sync #{} captured {} packet(s)",
            self.sync_count,
            packets.len()
        );
        packets
    }

    /// How many syncs this replicator has performed.
    pub fn sync_count(&self) -> u64 {
        self.sync_count
    }

    /// Serializes a frame's packet list for a transport to ship.
    pub fn encode_frame(packets: &[StatePacket]) -> Result<Vec<u8>, EncodeError> {
        bincode::encode_to_vec(packets, config::standard())
    }

    /// Reassembles a packet list from transport bytes.
    pub fn decode_frame(bytes: &[u8]) -> Result<Vec<StatePacket>, DecodeError> {
        let (packets, _) = bincode::decode_from_slice(bytes, config::standard())?;
        Ok(packets)
    }
}

impl Default for NetworkReplicator {
    fn default() -> Self {
        Self::new()
    }
}
