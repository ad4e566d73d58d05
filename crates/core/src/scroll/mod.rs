use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::observable::{Subject, Subscription};
use crate::Result;

/// Progress below which the page counts as unscrolled and the divider stays
/// bright.
pub const UNSCROLLED_MAX: f32 = 0.012;
/// Progress at which the nav backdrop blur engages.
pub const BLUR_THRESHOLD: f32 = 0.05;
/// Progress at which the nav background reaches its fully dimmed state.
pub const DIM_THRESHOLD: f32 = 0.06;
/// Alpha of the fully dimmed nav background.
pub const DIM_ALPHA: f32 = 0.5;

/// Threshold bands that turn raw scroll progress into nav visual state.
/// These are configuration, not hidden logic; the defaults match the site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollBands {
    pub unscrolled_max: f32,
    pub blur_threshold: f32,
    pub dim_threshold: f32,
    pub dim_alpha: f32,
}

impl Default for ScrollBands {
    fn default() -> Self {
        Self {
            unscrolled_max: UNSCROLLED_MAX,
            blur_threshold: BLUR_THRESHOLD,
            dim_threshold: DIM_THRESHOLD,
            dim_alpha: DIM_ALPHA,
        }
    }
}

impl ScrollBands {
    /// Derives the nav visual state for a progress reading.
    pub fn style_at(&self, progress: f32) -> NavStyle {
        let p = progress.clamp(0.0, 1.0);
        NavStyle {
            dimmed: p >= self.dim_threshold,
            blurred: p >= self.blur_threshold,
            divider_bright: p < self.unscrolled_max,
            overlay_alpha: self.overlay_alpha(p),
        }
    }

    /// Nav overlay alpha: 0 while unscrolled, ramping linearly across the
    /// interpolation band, pinned at `dim_alpha` past the dim threshold.
    pub fn overlay_alpha(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        if p < self.unscrolled_max {
            0.0
        } else if p >= self.dim_threshold {
            self.dim_alpha
        } else {
            let band = self.dim_threshold - self.unscrolled_max;
            self.dim_alpha * (p - self.unscrolled_max) / band
        }
    }
}

/// Visual state of the sticky nav and the header divider for one progress
/// reading. Purely declarative; the presentation layer maps it to classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavStyle {
    pub dimmed: bool,
    pub blurred: bool,
    pub divider_bright: bool,
    pub overlay_alpha: f32,
}

impl NavStyle {
    /// Derives the style using the default bands.
    pub fn at(progress: f32) -> NavStyle {
        ScrollBands::default().style_at(progress)
    }

    pub fn transparent(&self) -> bool {
        !self.dimmed
    }
}

/// Subscription handle for scroll progress readings.
pub type ScrollSubscription = Subscription<f32>;

/// Publishes normalised page-scroll progress in [0, 1] to any number of
/// subscribed views. Consumers only ever read; the platform scroll callback
/// is the single writer.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    progress: Subject<f32>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide tracker shared by every view.
    pub fn global() -> &'static ScrollTracker {
        static SHARED: OnceLock<ScrollTracker> = OnceLock::new();
        SHARED.get_or_init(ScrollTracker::new)
    }

    /// Registers a callback for every progress change. Dropping the returned
    /// subscription releases it.
    pub fn subscribe<F>(&self, callback: F) -> Result<ScrollSubscription>
    where
        F: FnMut(&f32) + Send + 'static,
    {
        self.progress.subscribe(callback)
    }

    /// Publishes an already-normalised progress reading, clamped to [0, 1].
    pub fn publish_progress(&self, progress: f32) -> Result<f32> {
        let progress = progress.clamp(0.0, 1.0);
        self.progress.publish(progress)?;
        Ok(progress)
    }

    /// Publishes a reading from a raw scroll offset against the total
    /// scrollable height. A page with nothing to scroll reads as 0.
    pub fn publish_offset(&self, offset: f32, scrollable_height: f32) -> Result<f32> {
        let progress = if scrollable_height > 0.0 {
            offset / scrollable_height
        } else {
            0.0
        };
        self.publish_progress(progress)
    }

    /// Latest published progress, or 0 before the first scroll event.
    pub fn progress(&self) -> Result<f32> {
        Ok(self.progress.latest()?.unwrap_or(0.0))
    }

    /// True while at least one subscriber is attached.
    pub fn is_running(&self) -> bool {
        self.progress.live_subscribers() > 0
    }
}

/// Latches whether the page opened at the top, from the very first progress
/// reading and never again. Unresolved (no reading ever) counts as a first
/// visit so the cold-start divider sweep still plays.
#[derive(Debug, Default, Clone)]
pub struct FirstVisitLatch {
    resolved: Option<bool>,
}

impl FirstVisitLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a progress reading. Only the first one resolves the latch.
    pub fn observe(&mut self, progress: f32) {
        if self.resolved.is_none() {
            self.resolved = Some(progress == 0.0);
        }
    }

    pub fn is_first_visit(&self) -> bool {
        self.resolved.unwrap_or(true)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}
