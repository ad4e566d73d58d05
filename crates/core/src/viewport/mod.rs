use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::{MotionError, Result};

/// How a tracked element's visibility should be judged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserveOptions {
    /// Latch `is_visible` the first time the element qualifies.
    pub trigger_once: bool,
    /// Minimum fraction of the element's area that must intersect the
    /// viewport. Zero fires on any pixel overlap.
    pub area_threshold: f32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            area_threshold: 0.1,
        }
    }
}

impl ObserveOptions {
    /// Fires as soon as a single pixel intersects the viewport.
    pub fn any_overlap() -> Self {
        Self {
            trigger_once: true,
            area_threshold: 0.0,
        }
    }
}

#[derive(Debug)]
struct WatchEntry {
    options: ObserveOptions,
    ever_visible: bool,
    currently_visible: bool,
}

impl WatchEntry {
    fn is_visible(&self) -> bool {
        if self.options.trigger_once {
            self.ever_visible
        } else {
            self.currently_visible
        }
    }
}

/// Shared registry of viewport-intersection state, one entry per tracked
/// element. Intersection callbacks write; views only read.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    entries: Arc<Mutex<HashMap<String, WatchEntry>>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide observer shared by every view.
    pub fn global() -> &'static ViewportObserver {
        static SHARED: OnceLock<ViewportObserver> = OnceLock::new();
        SHARED.get_or_init(ViewportObserver::new)
    }

    /// Starts tracking an element. Re-observing an element resets its state.
    pub fn observe(&self, element: impl Into<String>, options: ObserveOptions) -> Result<()> {
        let mut entries = self.lock()?;
        entries.insert(
            element.into(),
            WatchEntry {
                options,
                ever_visible: false,
                currently_visible: false,
            },
        );
        Ok(())
    }

    /// Stops tracking an element when its owning view is discarded.
    pub fn unobserve(&self, element: &str) -> Result<()> {
        let mut entries = self.lock()?;
        entries.remove(element);
        Ok(())
    }

    /// Feeds a precomputed visible-area fraction for an element and returns
    /// its visibility afterwards. Unknown elements read as not visible.
    pub fn update_fraction(&self, element: &str, fraction: f32) -> Result<bool> {
        let mut entries = self.lock()?;
        let entry = match entries.get_mut(element) {
            Some(entry) => entry,
            None => return Ok(false),
        };

        let qualifies = fraction > 0.0 && fraction >= entry.options.area_threshold;
        entry.currently_visible = qualifies;
        if qualifies {
            entry.ever_visible = true;
        }
        Ok(entry.is_visible())
    }

    /// Feeds raw element/viewport rectangles instead of a fraction.
    pub fn update_rects(&self, element: &str, bounds: Rect, viewport: Rect) -> Result<bool> {
        self.update_fraction(element, bounds.visible_fraction(&viewport))
    }

    /// Reactive visibility flag. An element nobody observed, or a poisoned
    /// registry, degrades to `false` rather than failing.
    pub fn is_visible(&self, element: &str) -> bool {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(element).map(WatchEntry::is_visible))
            .unwrap_or(false)
    }

    /// True while at least one element is registered.
    pub fn is_running(&self) -> bool {
        self.entries
            .lock()
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, WatchEntry>>> {
        self.entries
            .lock()
            .map_err(|_| MotionError::msg("viewport registry has been poisoned"))
    }
}
