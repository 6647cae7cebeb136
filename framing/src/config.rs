//! Framing limits parsed from environment variables.

use std::collections::HashMap;
use std::env::VarError;

use crate::consts::{
    DEFAULT_BORDER_HEIGHT, DEFAULT_BORDER_WIDTH, MAX_BORDER_SIZE, MAX_SCALE, MAX_ZOOM, MIN_BORDER_SIZE, MIN_ZOOM,
    ZOOM_STEP,
};
use crate::geometry::Dimensions;

const ENV_VARS: [&str; 7] = [
    "PHOTOWALL_SCALE_MAX",
    "PHOTOWALL_MIN_BORDER",
    "PHOTOWALL_MAX_BORDER",
    "PHOTOWALL_DEFAULT_BORDER",
    "PHOTOWALL_MIN_ZOOM",
    "PHOTOWALL_MAX_ZOOM",
    "PHOTOWALL_ZOOM_STEP",
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    #[error("{what} must be positive and finite, got {value}")]
    NonPositive { what: &'static str, value: f64 },
    #[error("{what} range is inverted: min {min} > max {max}")]
    InvalidRange { what: &'static str, min: f64, max: f64 },
}

/// Limits applied to every framed image on a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameConfig {
    /// Ceiling for the image scale factor.
    pub scale_max: f64,
    pub min_border: Dimensions,
    pub max_border: Dimensions,
    /// Border size given to newly placed photos.
    pub default_border: Dimensions,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            scale_max: MAX_SCALE,
            min_border: Dimensions::new(MIN_BORDER_SIZE, MIN_BORDER_SIZE),
            max_border: Dimensions::new(MAX_BORDER_SIZE, MAX_BORDER_SIZE),
            default_border: Dimensions::new(DEFAULT_BORDER_WIDTH, DEFAULT_BORDER_HEIGHT),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }
}

impl FrameConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `PHOTOWALL_SCALE_MAX`
    /// - `PHOTOWALL_MIN_BORDER`, `PHOTOWALL_MAX_BORDER`, `PHOTOWALL_DEFAULT_BORDER`:
    ///   `WIDTHxHEIGHT` or a single number for both axes
    /// - `PHOTOWALL_MIN_ZOOM`, `PHOTOWALL_MAX_ZOOM`, `PHOTOWALL_ZOOM_STEP`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for var in ENV_VARS {
            if let Some(value) = env_value(var, std::env::var(var))? {
                vars.insert(var, value);
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build config from an arbitrary key lookup. Used by `from_env` and by hosts
    /// that carry their settings elsewhere.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            scale_max: parse_f64(&lookup, "PHOTOWALL_SCALE_MAX", defaults.scale_max)?,
            min_border: parse_dimensions(&lookup, "PHOTOWALL_MIN_BORDER", defaults.min_border)?,
            max_border: parse_dimensions(&lookup, "PHOTOWALL_MAX_BORDER", defaults.max_border)?,
            default_border: parse_dimensions(&lookup, "PHOTOWALL_DEFAULT_BORDER", defaults.default_border)?,
            min_zoom: parse_f64(&lookup, "PHOTOWALL_MIN_ZOOM", defaults.min_zoom)?,
            max_zoom: parse_f64(&lookup, "PHOTOWALL_MAX_ZOOM", defaults.max_zoom)?,
            zoom_step: parse_f64(&lookup, "PHOTOWALL_ZOOM_STEP", defaults.zoom_step)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every limit is positive and every range is ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scale_max", self.scale_max)?;
        positive("min_border.width", self.min_border.width)?;
        positive("min_border.height", self.min_border.height)?;
        positive("min_zoom", self.min_zoom)?;
        positive("zoom_step", self.zoom_step)?;
        ordered("border width", self.min_border.width, self.max_border.width)?;
        ordered("border height", self.min_border.height, self.max_border.height)?;
        ordered("zoom", self.min_zoom, self.max_zoom)?;
        positive("default_border.width", self.default_border.width)?;
        positive("default_border.height", self.default_border.height)?;
        Ok(())
    }

    /// Clamp a requested border size into the configured range.
    #[must_use]
    pub fn clamp_border(&self, requested: Dimensions) -> Dimensions {
        Dimensions {
            width: crate::geometry::clamp(self.min_border.width, self.max_border.width, requested.width),
            height: crate::geometry::clamp(self.min_border.height, self.max_border.height, requested.height),
        }
    }
}

fn positive(what: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { what, value })
    }
}

fn ordered(what: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min <= max { Ok(()) } else { Err(ConfigError::InvalidRange { what, min, max }) }
}

fn parse_f64<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}

fn parse_dimensions<F>(lookup: &F, var: &'static str, default: Dimensions) -> Result<Dimensions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    parse_size(&raw).map_err(|_| ConfigError::Parse { var, value: raw })
}

/// Parse `"WIDTHxHEIGHT"` or a single number used for both axes.
pub fn parse_size(raw: &str) -> Result<Dimensions, std::num::ParseFloatError> {
    let raw = raw.trim();
    match raw.split_once(['x', 'X']) {
        Some((w, h)) => Ok(Dimensions::new(w.trim().parse()?, h.trim().parse()?)),
        None => {
            let side = raw.parse()?;
            Ok(Dimensions::new(side, side))
        }
    }
}

/// An unset variable falls back to its default; one that is set but not
/// valid unicode is a parse error.
fn env_value(var: &'static str, raw: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match raw {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(ConfigError::Parse { var, value: value.to_string_lossy().into_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
