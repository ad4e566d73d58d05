use serde::{Deserialize, Serialize};

use crate::timing::{AnimationTiming, Keyframes};

/// Entrance envelope of the hero panel (short hold, then the 3D settle).
pub const PANEL_TIMING: AnimationTiming = AnimationTiming {
    delay: 0.2,
    duration: 0.8,
};

/// Envelope of the introduction copy fade.
pub const INTRO_COPY_TIMING: AnimationTiming = AnimationTiming {
    delay: 0.0,
    duration: 3.0,
};

/// Stagger between introduction copy children.
pub const INTRO_COPY_STAGGER: f32 = 0.01;

/// Ordered phases of the hero reveal. Exactly one is active; a phase only
/// hands over on the explicit completion signal of its own visual, so slow
/// rendering can stall the sequence but never reorder or skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeroPhase {
    Hidden,
    PanelRevealed,
    TextRevealing,
    TextRevealed,
    RingSpinning,
}

/// Completion signals reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroSignal {
    DividerSettled,
    PanelSettled,
    WaveTextFinished,
    IntroCopyFinished,
}

/// State machine for the hero composite view.
#[derive(Debug, Clone)]
pub struct HeroChoreography {
    phase: HeroPhase,
}

impl HeroChoreography {
    pub fn new() -> Self {
        Self {
            phase: HeroPhase::Hidden,
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    /// Advances iff `signal` completes the currently active phase. Anything
    /// else is dropped: a stale or out-of-order completion must not move the
    /// machine. Returns whether the phase changed.
    pub fn signal(&mut self, signal: HeroSignal) -> bool {
        let next = match (self.phase, signal) {
            (HeroPhase::Hidden, HeroSignal::DividerSettled) => HeroPhase::PanelRevealed,
            (HeroPhase::PanelRevealed, HeroSignal::PanelSettled) => HeroPhase::TextRevealing,
            (HeroPhase::TextRevealing, HeroSignal::WaveTextFinished) => HeroPhase::TextRevealed,
            (HeroPhase::TextRevealed, HeroSignal::IntroCopyFinished) => HeroPhase::RingSpinning,
            _ => return false,
        };
        self.phase = next;
        true
    }

    /// The panel entrance has been unlocked (it is animating or settled).
    pub fn panel_revealed(&self) -> bool {
        self.phase >= HeroPhase::PanelRevealed
    }

    /// The name wave and the introduction copy are animating or done.
    pub fn text_revealing(&self) -> bool {
        self.phase >= HeroPhase::TextRevealing
    }

    pub fn text_revealed(&self) -> bool {
        self.phase >= HeroPhase::TextRevealed
    }

    /// Terminal phase; the skills ring spins for the component's lifetime.
    pub fn ring_spinning(&self) -> bool {
        self.phase == HeroPhase::RingSpinning
    }
}

impl Default for HeroChoreography {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-letter schedule of the animated name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTiming {
    pub stagger: f32,
    pub letter_duration: f32,
}

impl Default for WaveTiming {
    fn default() -> Self {
        Self {
            stagger: 0.08,
            letter_duration: 0.5,
        }
    }
}

impl WaveTiming {
    pub fn letter_delay(&self, index: usize) -> f32 {
        index as f32 * self.stagger
    }

    /// Seconds until the last letter settles.
    pub fn total(&self, letters: usize) -> f32 {
        if letters == 0 {
            0.0
        } else {
            (letters - 1) as f32 * self.stagger + self.letter_duration
        }
    }
}

/// Visual treatment of the header divider for this page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividerStyle {
    /// One-time multi-stage colour sweep, played on a cold load only.
    Sweep,
    /// Quick settle to whatever the scroll-threshold colour currently is.
    Settle,
}

/// The header divider animation. Its completion is what unlocks the hero
/// panel, so the divider is the root of the reveal chain.
#[derive(Debug, Clone)]
pub struct DividerMotion {
    style: DividerStyle,
    settled: bool,
}

impl DividerMotion {
    /// Starts the divider for this page view; the style is decided once,
    /// from the first-visit latch.
    pub fn begin(first_visit: bool) -> Self {
        let style = if first_visit {
            DividerStyle::Sweep
        } else {
            DividerStyle::Settle
        };
        Self {
            style,
            settled: false,
        }
    }

    pub fn style(&self) -> DividerStyle {
        self.style
    }

    /// Keyframe schedule the presentation plays for this style.
    pub fn keyframes(&self) -> Keyframes {
        match self.style {
            DividerStyle::Sweep => {
                Keyframes::new(vec![0.0, 0.87, 1.0], AnimationTiming::new(0.35, 1.0))
            }
            DividerStyle::Settle => Keyframes::new(vec![0.0, 1.0], AnimationTiming::new(0.0, 0.2)),
        }
    }

    /// Marks the animation complete. Returns false if it already settled.
    pub fn complete(&mut self) -> bool {
        if self.settled {
            return false;
        }
        self.settled = true;
        true
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order_on_matching_signals() {
        let mut hero = HeroChoreography::new();
        assert_eq!(hero.phase(), HeroPhase::Hidden);

        assert!(hero.signal(HeroSignal::DividerSettled));
        assert_eq!(hero.phase(), HeroPhase::PanelRevealed);
        assert!(hero.signal(HeroSignal::PanelSettled));
        assert_eq!(hero.phase(), HeroPhase::TextRevealing);
        assert!(hero.signal(HeroSignal::WaveTextFinished));
        assert_eq!(hero.phase(), HeroPhase::TextRevealed);
        assert!(hero.signal(HeroSignal::IntroCopyFinished));
        assert_eq!(hero.phase(), HeroPhase::RingSpinning);
    }

    #[test]
    fn out_of_order_completions_never_advance_later_phases() {
        let mut hero = HeroChoreography::new();

        // Text and ring completions before their prerequisites: no effect.
        assert!(!hero.signal(HeroSignal::WaveTextFinished));
        assert!(!hero.signal(HeroSignal::IntroCopyFinished));
        assert!(!hero.signal(HeroSignal::PanelSettled));
        assert_eq!(hero.phase(), HeroPhase::Hidden);
        assert!(!hero.text_revealing());

        assert!(hero.signal(HeroSignal::DividerSettled));
        assert!(!hero.signal(HeroSignal::IntroCopyFinished));
        assert_eq!(hero.phase(), HeroPhase::PanelRevealed);
        assert!(!hero.ring_spinning());

        // Only the prerequisite chain unlocks the ring.
        assert!(hero.signal(HeroSignal::PanelSettled));
        assert!(hero.signal(HeroSignal::WaveTextFinished));
        assert!(!hero.ring_spinning());
        assert!(hero.signal(HeroSignal::IntroCopyFinished));
        assert!(hero.ring_spinning());
    }

    #[test]
    fn dropped_completion_stalls_the_view_in_place() {
        let mut hero = HeroChoreography::new();
        hero.signal(HeroSignal::DividerSettled);

        // The panel completion never arrives; repeated later signals leave
        // the machine exactly where it was.
        for _ in 0..3 {
            assert!(!hero.signal(HeroSignal::WaveTextFinished));
            assert!(!hero.signal(HeroSignal::IntroCopyFinished));
        }
        assert_eq!(hero.phase(), HeroPhase::PanelRevealed);
    }

    #[test]
    fn duplicate_signals_are_ignored() {
        let mut hero = HeroChoreography::new();
        assert!(hero.signal(HeroSignal::DividerSettled));
        assert!(!hero.signal(HeroSignal::DividerSettled));
        assert_eq!(hero.phase(), HeroPhase::PanelRevealed);
    }

    #[test]
    fn wave_schedule_staggers_each_letter() {
        let wave = WaveTiming::default();
        assert_eq!(wave.letter_delay(0), 0.0);
        assert!((wave.letter_delay(5) - 0.4).abs() < 1e-6);

        let name_len = "Malhar Singh".chars().count();
        let total = wave.total(name_len);
        assert!((total - (11.0 * 0.08 + 0.5)).abs() < 1e-6);
        assert_eq!(wave.total(0), 0.0);
    }

    #[test]
    fn cold_load_sweeps_and_return_visits_settle() {
        let sweep = DividerMotion::begin(true);
        assert_eq!(sweep.style(), DividerStyle::Sweep);
        let frames = sweep.keyframes();
        assert_eq!(frames.times, vec![0.0, 0.87, 1.0]);
        assert!((frames.timing.delay - 0.35).abs() < 1e-6);

        let settle = DividerMotion::begin(false);
        assert_eq!(settle.style(), DividerStyle::Settle);
        assert!((settle.keyframes().timing.duration - 0.2).abs() < 1e-6);
    }

    #[test]
    fn divider_completion_latches_once() {
        let mut divider = DividerMotion::begin(true);
        assert!(!divider.is_settled());
        assert!(divider.complete());
        assert!(!divider.complete());
        assert!(divider.is_settled());
    }
}
