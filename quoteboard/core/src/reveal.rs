//! Typewriter Reveal Cycle
//!
//! Drives the character-by-character reveal of the active quote and keeps
//! the audio cue in sync with it. The cycle is a small state machine:
//!
//! ```text
//!        start(text)                 last char appended
//! Idle ───────────────▶ Revealing ───────────────────────▶ Done
//!   ▲                       │                               │
//!   │       cancel()        │        start(new text)        │
//!   └───────────────────────┴───────────────────────────────┘
//! ```
//!
//! # Design
//!
//! Ticks use `std::time::Instant` against a configurable period rather
//! than a spawned timer task: the owner calls [`RevealCycle::tick`] from
//! its frame loop and the cycle advances at most one character per call
//! once the period has elapsed. Cancellation is therefore synchronous -
//! replacing or cancelling the cycle can never race a pending callback,
//! and no tick belonging to a superseded quote can ever land.
//!
//! The cue's playback rate scales inversely with quote length so short
//! quotes chatter quickly and long ones drawl: `clamp(20 / len, 0.5, 2.0)`.

use std::time::{Duration, Instant};

use crate::audio::AudioCue;

/// Base length (in characters) at which the cue plays at natural speed.
const RATE_BASE_CHARS: f32 = 20.0;

/// Playback rate bounds.
const RATE_MIN: f32 = 0.5;
const RATE_MAX: f32 = 2.0;

/// Phase of the reveal cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// No quote is being revealed.
    Idle,
    /// Characters are being appended on each tick.
    Revealing,
    /// The full quote is on screen; the cue is paused and rewound.
    Done,
}

/// Outcome of a single reveal tick.
#[derive(Clone, Debug)]
pub struct RevealTick {
    /// The revealed prefix after this tick.
    pub revealed: String,
    /// Mouth flag after this tick (flips every tick, false once done).
    pub mouth_open: bool,
    /// Whether this tick completed the reveal.
    pub finished: bool,
}

/// Compute the cue playback rate for a quote of `len` characters.
pub fn playback_rate(len: usize) -> f32 {
    if len == 0 {
        return 1.0;
    }
    (RATE_BASE_CHARS / len as f32).clamp(RATE_MIN, RATE_MAX)
}

/// The typewriter state machine. Owns the audio cue for its lifetime -
/// no other component may touch play/pause/rate/position state.
pub struct RevealCycle {
    /// The audio cue, exclusively owned by this cycle.
    cue: Box<dyn AudioCue>,
    /// Characters of the text being revealed.
    chars: Vec<char>,
    /// How many characters have been revealed so far.
    revealed: usize,
    /// Current phase.
    phase: RevealPhase,
    /// Tick period (50ms in production, often zero in tests).
    period: Duration,
    /// When the last tick fired.
    last_tick: Instant,
    /// Avatar mouth flag, flipped on every tick.
    mouth_open: bool,
}

impl RevealCycle {
    /// Create an idle cycle that ticks at `period`.
    pub fn new(cue: Box<dyn AudioCue>, period: Duration) -> Self {
        Self {
            cue,
            chars: Vec::new(),
            revealed: 0,
            phase: RevealPhase::Idle,
            period,
            last_tick: Instant::now(),
            mouth_open: false,
        }
    }

    /// Begin revealing `text`, superseding any cycle in flight.
    ///
    /// Cancels the previous reveal first (audio paused and rewound, tick
    /// schedule dropped), so at most one reveal is ever live. Empty text
    /// goes straight to `Done`.
    pub fn start(&mut self, text: &str) {
        self.silence();

        self.chars = text.chars().collect();
        self.revealed = 0;
        self.mouth_open = false;
        self.last_tick = Instant::now();

        if self.chars.is_empty() {
            self.phase = RevealPhase::Done;
            return;
        }

        self.cue.set_rate(playback_rate(self.chars.len()));
        self.phase = RevealPhase::Revealing;
    }

    /// Cancel the reveal and return to `Idle`.
    pub fn cancel(&mut self) {
        self.silence();
        self.chars.clear();
        self.revealed = 0;
        self.mouth_open = false;
        self.phase = RevealPhase::Idle;
    }

    /// Advance the reveal if the tick period has elapsed.
    ///
    /// Call this from the frame loop; returns `None` while idle, done, or
    /// between ticks. Advances at most one character per call.
    pub fn tick(&mut self) -> Option<RevealTick> {
        if self.phase != RevealPhase::Revealing {
            return None;
        }
        if self.last_tick.elapsed() < self.period {
            return None;
        }
        self.last_tick = Instant::now();

        self.revealed += 1;
        self.mouth_open = !self.mouth_open;
        if self.cue.is_paused() {
            self.cue.play();
        }

        let finished = self.revealed == self.chars.len();
        if finished {
            self.phase = RevealPhase::Done;
            self.mouth_open = false;
            self.silence();
        }

        Some(RevealTick {
            revealed: self.revealed_text(),
            mouth_open: self.mouth_open,
            finished,
        })
    }

    /// The revealed prefix of the active text.
    pub fn revealed_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Current mouth flag.
    pub fn mouth_open(&self) -> bool {
        self.mouth_open
    }

    /// Pause and rewind the cue.
    fn silence(&mut self) {
        self.cue.pause();
        self.cue.rewind();
    }
}

impl Drop for RevealCycle {
    fn drop(&mut self) {
        // Teardown mirrors cancellation: never leave the cue looping.
        self.silence();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullCue;

    fn cycle() -> RevealCycle {
        RevealCycle::new(Box::new(NullCue::new()), Duration::ZERO)
    }

    #[test]
    fn rate_clamps_for_long_and_short_quotes() {
        assert!((playback_rate(40) - 0.5).abs() < f32::EPSILON);
        assert!((playback_rate(5) - 2.0).abs() < f32::EPSILON);
        assert!((playback_rate(20) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rate_for_empty_text_is_natural() {
        assert!((playback_rate(0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn two_character_quote_finishes_in_two_ticks() {
        let mut reveal = cycle();
        reveal.start("Hi");

        let first = reveal.tick().expect("first tick");
        assert_eq!(first.revealed, "H");
        assert!(first.mouth_open);
        assert!(!first.finished);

        let second = reveal.tick().expect("second tick");
        assert_eq!(second.revealed, "Hi");
        assert!(!second.mouth_open);
        assert!(second.finished);
        assert_eq!(reveal.phase(), RevealPhase::Done);

        assert!(reveal.tick().is_none());
    }

    #[test]
    fn revealed_is_always_a_prefix() {
        let mut reveal = cycle();
        reveal.start("abc");
        while let Some(tick) = reveal.tick() {
            assert!("abc".starts_with(&tick.revealed));
        }
        assert_eq!(reveal.revealed_text(), "abc");
    }

    #[test]
    fn restart_discards_old_characters() {
        let mut reveal = cycle();
        reveal.start("old quote");
        reveal.tick();
        reveal.tick();

        reveal.start("new");
        assert_eq!(reveal.revealed_text(), "");
        let tick = reveal.tick().expect("tick after restart");
        assert_eq!(tick.revealed, "n");
    }

    #[test]
    fn empty_text_is_immediately_done() {
        let mut reveal = cycle();
        reveal.start("");
        assert_eq!(reveal.phase(), RevealPhase::Done);
        assert!(reveal.tick().is_none());
    }

    #[test]
    fn multibyte_characters_step_one_at_a_time() {
        let mut reveal = cycle();
        reveal.start("héllo");
        let first = reveal.tick().expect("tick");
        assert_eq!(first.revealed, "h");
        let second = reveal.tick().expect("tick");
        assert_eq!(second.revealed, "hé");
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut reveal = cycle();
        reveal.start("something");
        reveal.tick();
        reveal.cancel();
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        assert_eq!(reveal.revealed_text(), "");
        assert!(!reveal.mouth_open());
    }

    #[test]
    fn nonzero_period_throttles_ticks() {
        let mut reveal = RevealCycle::new(Box::new(NullCue::new()), Duration::from_secs(60));
        reveal.start("Hi");
        // Period has not elapsed yet, so no character lands.
        assert!(reveal.tick().is_none());
        assert_eq!(reveal.revealed_text(), "");
    }
}
