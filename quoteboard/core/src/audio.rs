//! Audio Cue Abstraction
//!
//! The board drives a single looping sound (the "typing" cue) in lockstep
//! with the typewriter reveal. This trait is the seam between the headless
//! core and whatever audio backend a surface provides - the core never
//! links an audio library.
//!
//! # Ownership
//!
//! Exactly one component mutates the cue: the reveal cycle. Surfaces hand
//! the cue over at construction time and never touch it again, which is
//! what makes the pause/rewind bookkeeping safe without any locking.

/// A loop-playable sound with a variable playback rate.
///
/// Implementations are not required to be `Send`: the board runs on the
/// surface's event-loop task and is never moved across threads.
pub trait AudioCue {
    /// Set the playback rate (1.0 = natural speed).
    fn set_rate(&mut self, rate: f32);

    /// Start (or resume) looping playback.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Rewind to the start of the sample.
    fn rewind(&mut self);

    /// Whether the cue is currently paused (or has never played).
    fn is_paused(&self) -> bool;
}

/// A cue that plays nothing but tracks what it was told to do.
///
/// Default cue for headless operation and the workhorse of the core's
/// tests, which assert against its recorded state.
#[derive(Clone, Debug)]
pub struct NullCue {
    paused: bool,
    rate: f32,
    rewinds: u32,
}

impl NullCue {
    /// Create a silent cue in the paused position.
    pub fn new() -> Self {
        Self {
            paused: true,
            rate: 1.0,
            rewinds: 0,
        }
    }

    /// The last rate set via [`AudioCue::set_rate`].
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// How many times the cue has been rewound.
    pub fn rewind_count(&self) -> u32 {
        self.rewinds
    }
}

impl Default for NullCue {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCue for NullCue {
    fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn rewind(&mut self) {
        self.rewinds += 1;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_cue_starts_paused() {
        let cue = NullCue::new();
        assert!(cue.is_paused());
    }

    #[test]
    fn null_cue_tracks_play_pause() {
        let mut cue = NullCue::new();
        cue.play();
        assert!(!cue.is_paused());
        cue.pause();
        assert!(cue.is_paused());
    }

    #[test]
    fn null_cue_records_rate_and_rewinds() {
        let mut cue = NullCue::new();
        cue.set_rate(0.5);
        cue.rewind();
        cue.rewind();
        assert!((cue.rate() - 0.5).abs() < f32::EPSILON);
        assert_eq!(cue.rewind_count(), 2);
    }
}
