use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scroll::ScrollBands;
use crate::viewport::ObserveOptions;
use crate::Result;

/// Top-level configuration for the motion layer. Defaults reproduce the
/// site's tuned values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MotionConfig {
    pub scroll: ScrollBands,
    pub hover: HoverConfig,
    pub viewport: ObserveOptions,
}

impl MotionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Hover-intent tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverConfig {
    pub dwell_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self { dwell_ms: 500 }
    }
}

impl HoverConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }
}
