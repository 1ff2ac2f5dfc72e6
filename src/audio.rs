//! Sound cues driven by simulation events
//!
//! The simulation reports what happened; this module decides which cue to
//! play and how loud, then hands it to whatever backend the platform has.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall or paddle
    PaddleHit,
    /// Ball goes past a paddle
    Score,
    /// Laser fired
    Laser,
    /// Laser upgraded or segment healed
    PowerUp,
    /// Laser breaks paddle segments (once per hit)
    Destroy,
}

impl SoundEffect {
    /// Mix level of each cue before master/sfx volume
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::PaddleHit => 0.5,
            SoundEffect::Score => 0.7,
            SoundEffect::Laser => 0.5,
            SoundEffect::PowerUp => 0.6,
            SoundEffect::Destroy => 0.6,
        }
    }

    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Bounce { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::Fire { .. } => Some(SoundEffect::Laser),
            GameEvent::Upgrade { .. } | GameEvent::Heal { .. } => Some(SoundEffect::PowerUp),
            GameEvent::SegmentDestroyed { lead: true, .. } => Some(SoundEffect::Destroy),
            GameEvent::Score {
                reason: crate::sim::ScoreReason::Goal,
                ..
            } => Some(SoundEffect::Score),
            _ => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend for headless runs: cues go to the log
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sound {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend = LogBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play the cues for one tick's events, in order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
