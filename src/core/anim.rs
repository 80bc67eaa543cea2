//=========================================================================
// Sprite Animation
//=========================================================================
//
// Frame-index animation over a sprite sheet.
//
// Architecture:
//   AnimationSet (shared definitions, keyed by name)
//       ↓ play(key)
//   Animator (per sprite: current key, frame cursor, elapsed time)
//
// Only frame indices are produced; what a frame looks like is up to the
// scene's renderer.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

//=== AnimationDef ========================================================

/// Loop forever.
pub const REPEAT_FOREVER: i32 = -1;

/// A named sequence of sheet frames played at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub key: String,
    pub frames: Vec<u32>,
    /// Frames per second.
    pub frame_rate: f32,
    /// Extra plays after the first one; [`REPEAT_FOREVER`] loops.
    pub repeat: i32,
}

impl AnimationDef {
    pub fn new(key: impl Into<String>, frames: Vec<u32>, frame_rate: f32, repeat: i32) -> Self {
        Self {
            key: key.into(),
            frames,
            frame_rate,
            repeat,
        }
    }

    fn frame_duration(&self) -> f32 {
        if self.frame_rate > 0.0 {
            1.0 / self.frame_rate
        } else {
            f32::INFINITY
        }
    }
}

/// Inclusive run of sheet frame numbers, `start..=end`.
pub fn generate_frame_numbers(start: u32, end: u32) -> Vec<u32> {
    (start..=end).collect()
}

//=== AnimationSet ========================================================

/// Registry of animation definitions shared by every [`Animator`].
#[derive(Debug, Default)]
pub struct AnimationSet {
    defs: HashMap<String, Arc<AnimationDef>>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition. An existing key is kept and `false` returned.
    pub fn create(&mut self, def: AnimationDef) -> bool {
        if def.frames.is_empty() {
            warn!("Animation {:?} has no frames, ignored", def.key);
            return false;
        }
        if self.defs.contains_key(&def.key) {
            warn!("Animation {:?} already exists, ignored", def.key);
            return false;
        }
        self.defs.insert(def.key.clone(), Arc::new(def));
        true
    }

    pub fn get(&self, key: &str) -> Option<Arc<AnimationDef>> {
        self.defs.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

//=== Animator ============================================================

/// Per-sprite playback state.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    current: Option<Arc<AnimationDef>>,
    index: usize,
    elapsed: f32,
    repeats_left: i32,
    playing: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `key` from its first frame.
    ///
    /// With `ignore_if_playing`, a call for the animation that is already
    /// running is a no-op so it keeps cycling instead of restarting.
    pub fn play(&mut self, set: &AnimationSet, key: &str, ignore_if_playing: bool) {
        if ignore_if_playing && self.playing && self.current_key() == Some(key) {
            return;
        }

        let Some(def) = set.get(key) else {
            warn!("Missing animation {:?}", key);
            return;
        };

        self.repeats_left = def.repeat;
        self.current = Some(def);
        self.index = 0;
        self.elapsed = 0.0;
        self.playing = true;
    }

    /// Halts on the current frame.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Advances playback by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(def) = self.current.clone() else {
            return;
        };

        self.elapsed += dt;
        let step = def.frame_duration();

        while self.playing && self.elapsed >= step {
            self.elapsed -= step;
            self.advance(&def);
        }
    }

    fn advance(&mut self, def: &AnimationDef) {
        if self.index + 1 < def.frames.len() {
            self.index += 1;
            return;
        }

        // End of sequence
        if self.repeats_left == REPEAT_FOREVER {
            self.index = 0;
        } else if self.repeats_left > 0 {
            self.repeats_left -= 1;
            self.index = 0;
        } else {
            self.playing = false;
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref().map(|d| d.key.as_str())
    }

    /// Sheet frame currently shown, `None` before the first `play`.
    pub fn current_frame(&self) -> Option<u32> {
        self.current.as_ref().map(|d| d.frames[self.index])
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
