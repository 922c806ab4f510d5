//! Clip-duration catalog and the reference animation player.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::ports::AnimationPort;

/// Clip-name → duration table, shared read-only between players.
///
/// Unknown clips (and a player that has not played anything yet) resolve to
/// the fallback duration so behavior timing never divides by a missing clip.
pub struct ClipCatalog {
    durations:     FxHashMap<String, f32>,
    fallback_secs: f32,
}

impl ClipCatalog {
    pub fn new(fallback_secs: f32) -> Self {
        Self {
            durations: FxHashMap::default(),
            fallback_secs: fallback_secs.max(0.0),
        }
    }

    /// Register `name` with a duration in seconds (clamped to ≥ 0).
    pub fn insert(&mut self, name: impl Into<String>, secs: f32) {
        self.durations.insert(name.into(), secs.max(0.0));
    }

    /// Duration of `name`, or the fallback when unregistered.
    pub fn duration_of(&self, name: &str) -> f32 {
        self.durations
            .get(name)
            .copied()
            .unwrap_or(self.fallback_secs)
    }

    pub fn fallback_secs(&self) -> f32 {
        self.fallback_secs
    }
}

/// Reference [`AnimationPort`]: remembers the current clip and reports its
/// catalog duration.
pub struct ClipPlayer {
    catalog: Arc<ClipCatalog>,
    current: Option<String>,
}

impl ClipPlayer {
    pub fn new(catalog: Arc<ClipCatalog>) -> Self {
        Self { catalog, current: None }
    }

    /// Name of the clip most recently played, if any.
    pub fn current_clip(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl AnimationPort for ClipPlayer {
    fn play(&mut self, clip: &str) {
        self.current = Some(clip.to_owned());
    }

    fn current_clip_duration(&self) -> f32 {
        match &self.current {
            Some(clip) => self.catalog.duration_of(clip),
            None => self.catalog.fallback_secs,
        }
    }
}
