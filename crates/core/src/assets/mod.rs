use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{MotionError, Result};

/// Icons past this position in the inventory land on the inner ring.
pub const OUTER_RING_CAPACITY: usize = 9;
pub const OUTER_RADIUS_REM: f32 = 12.5;
pub const INNER_RADIUS_REM: f32 = 8.0;
/// Seconds per full revolution of the skills wheel.
pub const RING_REVOLUTION_SECS: f32 = 60.0;

/// Which ring of the skills wheel an icon sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ring {
    Outer,
    Inner,
}

impl Ring {
    pub fn radius_rem(self) -> f32 {
        match self {
            Ring::Outer => OUTER_RADIUS_REM,
            Ring::Inner => INNER_RADIUS_REM,
        }
    }
}

/// Accent drop-shadow colour, alternating by item id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Cyan,
    Violet,
}

impl Accent {
    pub fn for_item(id: u32) -> Self {
        if id % 2 == 0 {
            Accent::Cyan
        } else {
            Accent::Violet
        }
    }
}

/// One entry of the skills wheel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillIcon {
    pub id: u32,
    pub asset_key: String,
    pub title: String,
    pub link: String,
}

/// Resting placement of one icon: rotate by `angle`, translate out by the
/// ring radius, rotate back so the glyph stays upright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconPlacement {
    pub ring: Ring,
    pub angle: f32,
    pub radius_rem: f32,
    pub accent: Accent,
}

/// Computes each icon's resting placement from its position in the
/// inventory: the first nine fan the outer ring, the rest the inner one.
pub fn ring_placements(icons: &[SkillIcon]) -> Vec<IconPlacement> {
    let total = icons.len();
    icons
        .iter()
        .enumerate()
        .map(|(index, icon)| {
            let ring = if index >= OUTER_RING_CAPACITY {
                Ring::Inner
            } else {
                Ring::Outer
            };
            let ring_len = match ring {
                Ring::Outer => total.min(OUTER_RING_CAPACITY),
                Ring::Inner => total - OUTER_RING_CAPACITY,
            };
            let angle = index as f32 * (360.0 / ring_len as f32);
            IconPlacement {
                ring,
                angle: angle % 360.0,
                radius_rem: ring.radius_rem(),
                accent: Accent::for_item(icon.id),
            }
        })
        .collect()
}

/// Wheel rotation at a point in time, in degrees.
pub fn spin_angle(elapsed_secs: f32) -> f32 {
    (elapsed_secs / RING_REVOLUTION_SECS * 360.0) % 360.0
}

/// Per-icon counter-rotation that keeps glyphs upright while the wheel
/// spins.
pub fn upright_correction(spin: f32) -> f32 {
    -spin
}

/// Registry mapping logical asset keys to URLs.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    urls: HashMap<String, String>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(key.into(), url.into());
    }

    pub fn resolve(&self, key: &str) -> Result<&str> {
        self.urls
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| MotionError::msg(format!("unknown asset key `{key}`")))
    }

    /// Checks that every icon in the inventory has a registered URL.
    pub fn resolve_icons(&self, icons: &[SkillIcon]) -> Result<()> {
        for icon in icons {
            self.resolve(&icon.asset_key)?;
        }
        Ok(())
    }

    /// Catalog pre-loaded with the site's icon and card imagery.
    pub fn site_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, url) in [
            ("python", "/assets/skills_icons/python.webp"),
            ("cpp", "/assets/skills_icons/c_plus_plus.png"),
            ("c", "/assets/skills_icons/c.png"),
            ("github", "/assets/skills_icons/git.png"),
            ("vite", "/assets/skills_icons/vitejs.svg"),
            ("react", "/assets/skills_icons/react.webp"),
            ("tailwind", "/assets/skills_icons/tailwind.webp"),
            ("framer", "/assets/skills_icons/framer.png"),
            ("typescript", "/assets/skills_icons/ts.png"),
            ("java", "/assets/skills_icons/java.png"),
            ("linux", "/assets/skills_icons/linux.png"),
            ("postgresql", "/assets/skills_icons/postgresql.png"),
            ("flutter", "/assets/skills_icons/flutter.png"),
            ("dart", "/assets/skills_icons/dart.png"),
            ("card-front/mobile", "/assets/card_front_img/mobile_dev.png"),
            ("card-back/mobile", "/assets/card_back_img/phone_big.png"),
            ("card-front/data", "/assets/card_front_img/co2_emissions.png"),
            ("card-back/data", "/assets/card_back_img/data_big.png"),
            ("card-front/sockets", "/assets/card_front_img/server.png"),
            ("card-back/sockets", "/assets/card_back_img/web_soc_big.png"),
            ("card-front/rocket", "/assets/card_front_img/rocket.png"),
            ("card-back/rocket", "/assets/card_back_img/rocket_big.png"),
        ] {
            catalog.register(key, url);
        }
        catalog
    }
}

/// The skills wheel inventory: nine outer icons, five inner ones.
pub fn default_skill_icons() -> Vec<SkillIcon> {
    fn icon(id: u32, asset_key: &str, title: &str, link: &str) -> SkillIcon {
        SkillIcon {
            id,
            asset_key: asset_key.to_string(),
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    vec![
        icon(0, "python", "Python", "https://www.python.org/"),
        icon(1, "cpp", "C++", "https://devdocs.io/cpp/"),
        icon(2, "c", "C", "https://devdocs.io/c/"),
        icon(3, "github", "Github", "https://github.com/"),
        icon(4, "vite", "Vite", "https://vite.dev/"),
        icon(5, "react", "React", "https://react.dev/"),
        icon(6, "tailwind", "Tailwind CSS", "https://tailwindcss.com/"),
        icon(7, "framer", "Framer-motion", "https://motion.dev/"),
        icon(8, "typescript", "Typescript", "https://www.typescriptlang.org/"),
        icon(9, "java", "Java", "https://www.java.com/en/"),
        icon(10, "linux", "Linux", "https://www.linux.org/"),
        icon(11, "postgresql", "PostgreSQL", "https://www.postgresql.org/"),
        icon(12, "flutter", "Flutter", "https://flutter.dev/"),
        icon(13, "dart", "Dart", "https://dart.dev/"),
    ]
}
