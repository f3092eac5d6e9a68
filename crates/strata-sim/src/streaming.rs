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

//! # Streaming Field
//!
//! Level-of-detail classification over the map's named zones. The frame's
//! streaming job reruns the classification against the player-position
//! snapshot it captured; nothing here ever touches an actor.

use strata_core::math::Vec2;

/// Horizontal distance under which a zone streams at full detail.
pub const FULL_DETAIL_RANGE: f64 = 100.0;
/// Horizontal distance under which a zone keeps medium detail.
pub const MEDIUM_DETAIL_RANGE: f64 = 500.0;

/// How much of a zone's content is resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneLod {
    /// The observer is inside or next to the zone; everything is loaded.
    Full,
    /// Near enough to matter; coarse assets only.
    Medium,
    /// Far away; the zone is little more than a silhouette.
    Minimal,
}

impl ZoneLod {
    /// Classifies a horizontal observer distance into a detail level.
    pub fn for_distance(distance: f64) -> Self {
        if distance < FULL_DETAIL_RANGE {
            ZoneLod::Full
        } else if distance < MEDIUM_DETAIL_RANGE {
            ZoneLod::Medium
        } else {
            ZoneLod::Minimal
        }
    }
}

/// One named region of the map.
#[derive(Debug, Clone)]
pub struct Zone {
    /// Display name of the zone.
    pub name: String,
    /// Center of the zone on the ground plane.
    pub center: Vec2,
    /// Current detail level, owned by the streaming job.
    pub lod: ZoneLod,
}

/// The set of zones the streaming job re-classifies every frame.
#[derive(Debug, Clone)]
pub struct StreamingField {
    zones: Vec<Zone>,
}

impl StreamingField {
    /// Creates a field with no zones.
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Adds a zone; it starts at minimal detail until the first update.
    pub fn add_zone(&mut self, name: impl Into<String>, center: Vec2) {
        self.zones.push(Zone {
            name: name.into(),
            center,
            lod: ZoneLod::Minimal,
        });
    }

    /// Re-classifies every zone against the observer's ground position.
    pub fn update(&mut self, observer: Vec2) {
        for zone in &mut self.zones {
            let distance = zone.center.distance(observer);
            let lod = ZoneLod::for_distance(distance);
            if lod != zone.lod {
                log::debug!(
                    "Streaming: zone '{}' {:?} -> {:?} ({distance:.1} m)",
                    zone.name,
                    zone.lod,
                    lod
                );
            }
            zone.lod = lod;
        }
    }

    /// The zones in declaration order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Looks up one zone's current detail level by name.
    pub fn lod_of(&self, name: &str) -> Option<ZoneLod> {
        self.zones.iter().find(|z| z.name == name).map(|z| z.lod)
    }
}

impl Default for StreamingField {
    /// The built-in map: three zones on a kilometer-square field.
    fn default() -> Self {
        let mut field = Self::new();
        field.add_zone("downtown", Vec2::new(100.0, 100.0));
        field.add_zone("bunker", Vec2::new(500.0, 500.0));
        field.add_zone("cavern", Vec2::new(800.0, 200.0));
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries_are_half_open() {
        assert_eq!(ZoneLod::for_distance(0.0), ZoneLod::Full);
        assert_eq!(ZoneLod::for_distance(99.9), ZoneLod::Full);
        assert_eq!(ZoneLod::for_distance(100.0), ZoneLod::Medium);
        assert_eq!(ZoneLod::for_distance(499.9), ZoneLod::Medium);
        assert_eq!(ZoneLod::for_distance(500.0), ZoneLod::Minimal);
        assert_eq!(ZoneLod::for_distance(10_000.0), ZoneLod::Minimal);
    }

    #[test]
    fn update_classifies_the_default_map() {
        let mut field = StreamingField::default();
        // Standing in the bunker: downtown is ~566 m away, the cavern ~424 m.
        field.update(Vec2::new(500.0, 500.0));

        assert_eq!(field.lod_of("bunker"), Some(ZoneLod::Full));
        assert_eq!(field.lod_of("cavern"), Some(ZoneLod::Medium));
        assert_eq!(field.lod_of("downtown"), Some(ZoneLod::Minimal));
    }

    #[test]
    fn moving_observer_reshuffles_detail() {
        let mut field = StreamingField::default();
        field.update(Vec2::new(500.0, 500.0));
        assert_eq!(field.lod_of("downtown"), Some(ZoneLod::Minimal));

        // Walk over to downtown.
        field.update(Vec2::new(120.0, 100.0));
        assert_eq!(field.lod_of("downtown"), Some(ZoneLod::Full));
        assert_eq!(field.lod_of("bunker"), Some(ZoneLod::Minimal));
    }

    #[test]
    fn zones_keep_declaration_order() {
        let field = StreamingField::default();
        let names: Vec<&str> = field.zones().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["downtown", "bunker", "cavern"]);
    }

    #[test]
    fn unknown_zone_lookup_misses() {
        let field = StreamingField::default();
        assert_eq!(field.lod_of("atlantis"), None);
    }
}
