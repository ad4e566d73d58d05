//! Core library for the portfolio motion layer.
//!
//! The crate models the choreography of a single-page portfolio site:
//! entrance sequencing, scroll-driven nav state, hover-intent reveals,
//! cursor-following overlays, and slide-visibility tracking. Each module
//! owns a distinct subsystem and exposes purely declarative flags for the
//! presentation layer to map onto styling; nothing in here renders.

pub mod assets;
pub mod choreography;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod nav;
pub mod observable;
pub mod scroll;
pub mod slides;
pub mod timing;
pub mod viewport;

pub use assets::{AssetCatalog, IconPlacement, SkillIcon};
pub use choreography::{
    DividerMotion, DividerStyle, HeroChoreography, HeroPhase, HeroSignal, WaveTiming,
};
pub use config::{HoverConfig, MotionConfig};
pub use contact::{ContactForm, ContactMessage, MessageSender, Notice};
pub use cursor::CursorTracker;
pub use error::{MotionError, Result};
pub use geometry::{Point, Rect};
pub use hover::HoverIntents;
pub use nav::{NavItem, NavReveal, NavSide, NavTarget, Navigator};
pub use observable::{Subject, Subscription};
pub use scroll::{FirstVisitLatch, NavStyle, ScrollBands, ScrollTracker};
pub use slides::{CardEntrance, SlideLedger};
pub use timing::{AnimationTiming, Keyframes, MotionClock};
pub use viewport::{ObserveOptions, ViewportObserver};
