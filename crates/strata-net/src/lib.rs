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

//! # Strata Net
//!
//! Authoritative state replication. This crate defines what goes on the
//! wire (the [`StatePacket`] shape) and when it is captured (the
//! [`NetworkReplicator`]'s post-barrier snapshot pass). Actually moving
//! bytes between machines is a transport's job, not this crate's.

#![warn(missing_docs)]

pub mod packet;
pub mod replicator;

pub use packet::StatePacket;
pub use replicator::NetworkReplicator;
