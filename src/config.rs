// Tunables for the particle background. Constructed from JS either field by field
// or from a JSON object; every field falls back to its default.

use crate::color::Color;
use crate::error::{BackgroundError, BackgroundResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    pub(crate) count: u32,
    pub(crate) max_speed: f64,
    pub(crate) min_size: f64,
    pub(crate) max_size: f64,
    pub(crate) color: Color,
    pub(crate) seed: Option<u64>,
    pub(crate) profile: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        BackgroundConfig {
            count: 50,
            max_speed: 0.1,
            min_size: 0.5,
            max_size: 1.0,
            color: Color::AMBIENT,
            seed: None,
            profile: false,
        }
    }
}

#[wasm_bindgen]
impl BackgroundConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> BackgroundConfig {
        BackgroundConfig::default()
    }

    pub fn from_json(json: &str) -> Result<BackgroundConfig, JsValue> {
        Ok(BackgroundConfig::parse(json)?)
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn set_max_speed(&mut self, max_speed: f64) {
        self.max_speed = max_speed;
    }

    pub fn set_min_size(&mut self, min_size: f64) {
        self.min_size = min_size;
    }

    pub fn set_max_size(&mut self, max_size: f64) {
        self.max_size = max_size;
    }

    // Packed as 0xRRGGBBAA
    pub fn set_color(&mut self, color: u32) {
        self.color = Color::from_u32(color);
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
    }

    pub fn clear_seed(&mut self) {
        self.seed = None;
    }

    pub fn set_profile(&mut self, profile: bool) {
        self.profile = profile;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }
}

impl BackgroundConfig {
    // Well past anything an ambient background needs, and small enough to allocate
    pub const MAX_COUNT: u32 = 10_000;

    pub fn parse(json: &str) -> BackgroundResult<BackgroundConfig> {
        let config: BackgroundConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BackgroundResult<()> {
        if self.count > BackgroundConfig::MAX_COUNT {
            return Err(BackgroundError::invalid_config(format!(
                "count must be at most {}, got {}",
                BackgroundConfig::MAX_COUNT,
                self.count
            )));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(BackgroundError::invalid_config(format!(
                "max_speed must be a non-negative number, got {}",
                self.max_speed
            )));
        }
        if !self.min_size.is_finite() || !self.max_size.is_finite() {
            return Err(BackgroundError::invalid_config("particle sizes must be finite"));
        }
        if self.min_size < 0.0 || self.min_size > self.max_size {
            return Err(BackgroundError::invalid_config(format!(
                "size range [{}, {}] is empty or negative",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }
}
