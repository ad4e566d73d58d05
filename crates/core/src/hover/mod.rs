use std::collections::HashMap;
use std::time::Duration;

use crate::timing::MotionClock;

/// Dwell a pointer must hold over an item before the hover counts as intent.
/// Incidental passes shorter than this never activate anything.
pub const DWELL: Duration = Duration::from_millis(500);

#[derive(Debug, Default)]
struct HoverState {
    deadline: Option<Duration>,
    activated: bool,
}

/// Per-item hover-intent debouncer. Pointer-enter arms a cancellable
/// deadline against the motion clock; pointer-leave cancels it and clears
/// the activation with no exit debounce. [`HoverIntents::tick`] reports the
/// items whose deadline elapsed so the caller can run the centering side
/// effect exactly once per activation.
#[derive(Debug)]
pub struct HoverIntents {
    dwell: Duration,
    items: HashMap<u32, HoverState>,
}

impl HoverIntents {
    pub fn new() -> Self {
        Self::with_dwell(DWELL)
    }

    pub fn with_dwell(dwell: Duration) -> Self {
        Self {
            dwell,
            items: HashMap::new(),
        }
    }

    /// Arms the dwell timer for an item. Re-entering always restarts the
    /// full delay; prior dwell time is not remembered.
    pub fn pointer_enter(&mut self, item: u32, clock: &MotionClock) {
        let state = self.items.entry(item).or_default();
        state.deadline = Some(clock.elapsed() + self.dwell);
    }

    /// Cancels any pending timer and clears the activation immediately.
    pub fn pointer_leave(&mut self, item: u32) {
        if let Some(state) = self.items.get_mut(&item) {
            state.deadline = None;
            state.activated = false;
        }
    }

    /// Fires every deadline that elapsed, returning the newly activated
    /// items in ascending order. Each armed timer fires at most once.
    pub fn tick(&mut self, clock: &MotionClock) -> Vec<u32> {
        let now = clock.elapsed();
        let mut fired = Vec::new();
        for (item, state) in self.items.iter_mut() {
            if let Some(deadline) = state.deadline {
                if now >= deadline {
                    state.deadline = None;
                    state.activated = true;
                    fired.push(*item);
                }
            }
        }
        fired.sort_unstable();
        fired
    }

    pub fn is_activated(&self, item: u32) -> bool {
        self.items
            .get(&item)
            .map(|state| state.activated)
            .unwrap_or(false)
    }

    /// True while the item has an armed, unfired timer.
    pub fn is_pending(&self, item: u32) -> bool {
        self.items
            .get(&item)
            .map(|state| state.deadline.is_some())
            .unwrap_or(false)
    }
}

impl Default for HoverIntents {
    fn default() -> Self {
        Self::new()
    }
}
