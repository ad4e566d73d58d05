use serde::{Deserialize, Serialize};

use crate::Result;

/// Seconds the nav entries hold before their entrance plays.
pub const ENTRANCE_HOLD_SECS: f32 = 1.3;
/// Resting opacity of the separator glyph.
pub const SEPARATOR_OPACITY: f32 = 0.4;
/// Smooth-scroll duration for nav links, in milliseconds.
pub const NAV_SCROLL_MS: u64 = 500;
/// Smooth-scroll duration for the in-copy contact link.
pub const COPY_LINK_SCROLL_MS: u64 = 1000;

/// Direction a nav entry enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavSide {
    Left,
    Center,
    Right,
}

impl NavSide {
    /// Off-screen starting offset in viewport units (vw, vh).
    pub fn entrance_offset(self) -> (f32, f32) {
        match self {
            NavSide::Left => (-100.0, 0.0),
            NavSide::Right => (100.0, 0.0),
            NavSide::Center => (0.0, -100.0),
        }
    }

    pub fn resting_opacity(self) -> f32 {
        match self {
            NavSide::Center => SEPARATOR_OPACITY,
            _ => 1.0,
        }
    }
}

/// Where a nav entry leads: an in-page section or a separate page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    Section(String),
    Page(String),
}

/// One entry of the sticky navigation bar. The separator carries no target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub id: u32,
    pub title: String,
    pub side: NavSide,
    pub target: Option<NavTarget>,
}

/// The site's navigation inventory.
pub fn default_navigation() -> Vec<NavItem> {
    fn item(id: u32, title: &str, side: NavSide, target: Option<NavTarget>) -> NavItem {
        NavItem {
            id,
            title: title.to_string(),
            side,
            target,
        }
    }

    vec![
        item(
            0,
            "Home",
            NavSide::Left,
            Some(NavTarget::Section("home".to_string())),
        ),
        item(
            1,
            "Projects",
            NavSide::Right,
            Some(NavTarget::Section("projects".to_string())),
        ),
        item(
            2,
            "Contact",
            NavSide::Left,
            Some(NavTarget::Section("contact".to_string())),
        ),
        item(3, "|", NavSide::Center, None),
        item(
            4,
            "Side Projects",
            NavSide::Right,
            Some(NavTarget::Page("/side-projects".to_string())),
        ),
    ]
}

/// Routing seam. The real implementation smooth-scrolls the document or
/// swaps the route; the core only decides what to ask for.
pub trait Navigator {
    fn scroll_to_section(&mut self, section: &str, duration_ms: u64) -> Result<()>;
    fn open_page(&mut self, path: &str) -> Result<()>;
    /// Centers an interactive item in the viewport (hover-intent side
    /// effect).
    fn center_item(&mut self, item: u32) -> Result<()>;
}

/// Dispatches a nav activation to the routing seam. The separator is inert.
pub fn follow(navigator: &mut dyn Navigator, item: &NavItem) -> Result<()> {
    match &item.target {
        Some(NavTarget::Section(section)) => navigator.scroll_to_section(section, NAV_SCROLL_MS),
        Some(NavTarget::Page(path)) => navigator.open_page(path),
        None => Ok(()),
    }
}

/// One-shot entrance of the nav bar: the entries slide in after a fixed
/// hold, once per page view, and never replay.
#[derive(Debug, Default, Clone)]
pub struct NavReveal {
    entered: bool,
}

impl NavReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entrance complete. Returns false if it already played.
    pub fn complete(&mut self) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn scroll_to_section(&mut self, section: &str, duration_ms: u64) -> Result<()> {
            self.calls.push(format!("scroll:{section}:{duration_ms}"));
            Ok(())
        }

        fn open_page(&mut self, path: &str) -> Result<()> {
            self.calls.push(format!("page:{path}"));
            Ok(())
        }

        fn center_item(&mut self, item: u32) -> Result<()> {
            self.calls.push(format!("center:{item}"));
            Ok(())
        }
    }

    #[test]
    fn inventory_mixes_sections_pages_and_the_separator() {
        let navigation = default_navigation();
        assert_eq!(navigation.len(), 5);

        assert_eq!(
            navigation[0].target,
            Some(NavTarget::Section("home".to_string()))
        );
        assert_eq!(
            navigation[4].target,
            Some(NavTarget::Page("/side-projects".to_string()))
        );
        assert_eq!(navigation[3].target, None);
        assert_eq!(navigation[3].side, NavSide::Center);
    }

    #[test]
    fn follow_routes_by_target_kind() {
        let mut navigator = RecordingNavigator::default();
        let navigation = default_navigation();

        for item in &navigation {
            follow(&mut navigator, item).unwrap();
        }

        assert_eq!(
            navigator.calls,
            vec![
                "scroll:home:500",
                "scroll:projects:500",
                "scroll:contact:500",
                "page:/side-projects",
            ]
        );
    }

    #[test]
    fn sides_pick_the_entrance_direction() {
        assert_eq!(NavSide::Left.entrance_offset(), (-100.0, 0.0));
        assert_eq!(NavSide::Right.entrance_offset(), (100.0, 0.0));
        assert_eq!(NavSide::Center.entrance_offset(), (0.0, -100.0));
        assert_eq!(NavSide::Center.resting_opacity(), SEPARATOR_OPACITY);
        assert_eq!(NavSide::Left.resting_opacity(), 1.0);
    }

    #[test]
    fn entrance_plays_once() {
        let mut reveal = NavReveal::new();
        assert!(!reveal.is_entered());
        assert!(reveal.complete());
        assert!(!reveal.complete());
        assert!(reveal.is_entered());
    }
}
