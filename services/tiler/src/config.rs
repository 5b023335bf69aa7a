//! Tiler configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an
//! optional YAML file (with `${VAR}` and `${VAR:-default}` substitution),
//! environment variables, and command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use circle_tiling::TilingConfig;

/// Top-level tiler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilerConfig {
    /// Tile radius and circle approximation
    pub tiling: TilingConfig,

    /// Distance to grow each polygon before tiling, in miles
    pub buffer_miles: f64,

    /// Feature property whose value groups polygons for merging
    pub group_property: String,
}

impl Default for TilerConfig {
    fn default() -> Self {
        Self {
            tiling: TilingConfig::default(),
            buffer_miles: 0.0,
            group_property: "city".to_string(),
        }
    }
}

impl TilerConfig {
    /// Load from an optional YAML file, then overlay the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_yaml(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML file. Missing sections fall back to defaults.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read tiler config from {:?}", path.as_ref()))?;

        let expanded = expand_env_vars(&content)?;

        serde_yaml::from_str(&expanded)
            .with_context(|| format!("Failed to parse tiler config from {:?}", path.as_ref()))
    }

    /// Overlay `TILE_*`, `TILER_BUFFER_MILES` and `TILER_GROUP_PROPERTY`.
    pub fn apply_env(&mut self) -> Result<()> {
        self.tiling.apply_env()?;

        if let Ok(v) = env::var("TILER_BUFFER_MILES") {
            self.buffer_miles = v
                .parse()
                .with_context(|| format!("TILER_BUFFER_MILES is not a number: {}", v))?;
        }
        if let Ok(v) = env::var("TILER_GROUP_PROPERTY") {
            self.group_property = v;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.tiling.validate()?;
        anyhow::ensure!(
            self.buffer_miles.is_finite() && self.buffer_miles >= 0.0,
            "buffer_miles must be a non-negative number, got {}",
            self.buffer_miles
        );
        anyhow::ensure!(
            !self.group_property.is_empty(),
            "group_property cannot be empty"
        );
        Ok(())
    }
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand `${VAR}` and `${VAR:-default}` in YAML content.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .with_context(|| format!("Unclosed variable substitution: ${{{}", after))?;

        result.push_str(&resolve_var_expr(&after[..end])?);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((var_name, default)) = expr.split_once(":-") {
        match env::var(var_name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        env::var(expr.trim()).with_context(|| format!("Environment variable {} not set", expr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TilerConfig::default();
        assert_eq!(config.tiling.radius_km, 40.0);
        assert_eq!(config.buffer_miles, 0.0);
        assert_eq!(config.group_property, "city");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_expand_env_vars() {
        env::set_var("TILER_TEST_RADIUS", "12");
        env::remove_var("TILER_TEST_UNSET");

        let expanded =
            expand_env_vars("radius_km: ${TILER_TEST_RADIUS}\nmiles: ${TILER_TEST_UNSET:-0.5}")
                .unwrap();
        assert_eq!(expanded, "radius_km: 12\nmiles: 0.5");

        assert!(expand_env_vars("${TILER_TEST_UNSET}").is_err());
        assert!(expand_env_vars("${TILER_TEST_RADIUS").is_err());
    }

    #[test]
    fn test_from_yaml_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tiling:\n  radius_km: 5\nbuffer_miles: 1.5").unwrap();

        let config = TilerConfig::from_yaml(file.path()).unwrap();
        assert_eq!(config.tiling.radius_km, 5.0);
        assert_eq!(config.tiling.circle_segments, 64);
        assert_eq!(config.buffer_miles, 1.5);
        assert_eq!(config.group_property, "city");
    }

    #[test]
    fn test_validate_rejects_negative_buffer() {
        let config = TilerConfig {
            buffer_miles: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(TilerConfig::from_yaml("/nonexistent/tiler.yaml").is_err());
    }
}
