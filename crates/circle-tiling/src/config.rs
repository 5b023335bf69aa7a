//! Tiling configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{validate_radius, Result, TilingError};

/// Largest radius, in kilometers, the downstream search API accepts.
pub const DEFAULT_RADIUS_KM: f64 = 40.0;

/// Knobs for a tiling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Tile radius in kilometers
    pub radius_km: f64,

    /// Sides of the polygon that stands in for a tile circle in
    /// intersection tests
    pub circle_segments: usize,

    /// Walk the grid and fill gaps on the rayon pool
    pub parallel: bool,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            circle_segments: polygon_ops::DEFAULT_CIRCLE_SEGMENTS,
            parallel: false,
        }
    }
}

impl TilingConfig {
    /// Defaults overlaid with `TILE_RADIUS_KM`, `TILE_CIRCLE_SEGMENTS` and
    /// `TILE_PARALLEL`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overwrite fields whose environment variable is set. Unparseable
    /// values are errors, not silently ignored.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(v) = env::var("TILE_RADIUS_KM") {
            self.radius_km = v.parse().map_err(|_| {
                TilingError::InvalidConfig(format!("TILE_RADIUS_KM is not a number: {}", v))
            })?;
        }

        if let Ok(v) = env::var("TILE_CIRCLE_SEGMENTS") {
            self.circle_segments = v.parse().map_err(|_| {
                TilingError::InvalidConfig(format!("TILE_CIRCLE_SEGMENTS is not an integer: {}", v))
            })?;
        }

        if let Ok(v) = env::var("TILE_PARALLEL") {
            self.parallel = v == "true" || v == "1";
        }

        Ok(())
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_radius(self.radius_km)?;
        if self.circle_segments < 4 {
            return Err(TilingError::InvalidConfig(format!(
                "circle_segments must be at least 4, got {}",
                self.circle_segments
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TilingConfig::default();
        assert_eq!(config.radius_km, 40.0);
        assert_eq!(config.circle_segments, 64);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            TilingConfig::default().with_radius_km(0.0).validate(),
            Err(TilingError::InvalidRadius(_))
        ));

        let config = TilingConfig {
            circle_segments: 3,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TilingError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: TilingConfig = serde_json::from_str(r#"{"radius_km": 5.0}"#).unwrap();
        assert_eq!(config.radius_km, 5.0);
        assert_eq!(config.circle_segments, 64);
        assert!(!config.parallel);
    }

    #[test]
    fn test_apply_env() {
        std::env::set_var("TILE_RADIUS_KM", "12.5");
        std::env::set_var("TILE_PARALLEL", "true");
        let mut config = TilingConfig::default();
        config.apply_env().unwrap();
        assert_eq!(config.radius_km, 12.5);
        assert!(config.parallel);

        std::env::set_var("TILE_CIRCLE_SEGMENTS", "many");
        assert!(matches!(config.apply_env(), Err(TilingError::InvalidConfig(_))));

        std::env::remove_var("TILE_RADIUS_KM");
        std::env::remove_var("TILE_PARALLEL");
        std::env::remove_var("TILE_CIRCLE_SEGMENTS");
    }
}
