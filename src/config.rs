//! Donut parameters, loadable from TOML.
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! [torus]
//! major_segments = 28
//! minor_segments = 12
//! major_radius = 0.05
//! minor_radius = 0.026
//!
//! [icing]
//! axis = "z"
//! keep_band = 0.01
//! ```

use crate::bounding_box::CutAxis;
use crate::float_types::Real;
use crate::selector::HalfSpaceSelector;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Torus primitive parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TorusConfig {
    /// Rings around the donut
    pub major_segments: usize,
    /// Vertices per ring
    pub minor_segments: usize,
    /// Distance from the centre to the tube centre
    pub major_radius: Real,
    /// Tube radius
    pub minor_radius: Real,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            major_segments: 28,
            minor_segments: 12,
            major_radius: 0.05,
            minor_radius: 0.026,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DonutConfig {
    pub torus: TorusConfig,
    /// How the icing is cut from the duplicated torus
    pub icing: HalfSpaceSelector,
}

impl DonutConfig {
    /// Parse without validating; pair with [`validate`](Self::validate).
    pub fn parse_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_toml_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse `path` without validating.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml_str(&text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the icing settings that are given, then validate the result.
    pub fn with_overrides(
        mut self,
        axis: Option<CutAxis>,
        keep_band: Option<Real>,
    ) -> Result<Self, ConfigError> {
        if let Some(axis) = axis {
            self.icing.axis = axis;
        }
        if let Some(keep_band) = keep_band {
            self.icing.keep_band = keep_band;
        }
        self.validate()?;
        Ok(self)
    }

    /// Radii must be positive and finite, and the tube must fit inside the
    /// ring.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.torus;
        if !(t.major_radius.is_finite() && t.major_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "major_radius must be positive, got {}",
                t.major_radius
            )));
        }
        if !(t.minor_radius.is_finite() && t.minor_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "minor_radius must be positive, got {}",
                t.minor_radius
            )));
        }
        if t.minor_radius >= t.major_radius {
            return Err(ConfigError::Invalid(format!(
                "minor_radius ({}) must be smaller than major_radius ({})",
                t.minor_radius, t.major_radius
            )));
        }
        if t.major_segments < 3 || t.minor_segments < 3 {
            return Err(ConfigError::Invalid(
                "segment counts must be at least 3".to_string(),
            ));
        }
        if !self.icing.keep_band.is_finite() {
            return Err(ConfigError::Invalid("keep_band must be finite".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = DonutConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, DonutConfig::default());
        assert_eq!(config.torus.major_segments, 28);
        assert_eq!(config.icing.axis, CutAxis::Z);
        assert_eq!(config.icing.keep_band, 0.01);
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = DonutConfig::from_toml_str(
            r#"
            [torus]
            minor_segments = 16

            [icing]
            axis = "x"
            "#,
        )
        .expect("partial config parses");
        assert_eq!(config.torus.minor_segments, 16);
        assert_eq!(config.torus.major_segments, 28);
        assert_eq!(config.icing.axis, CutAxis::X);
        assert_eq!(config.icing.keep_band, 0.01);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = DonutConfig::from_toml_str("[torus]\nsprinkles = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn fat_tube_is_invalid() {
        let err = DonutConfig::from_toml_str("[torus]\nminor_radius = 0.2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn overrides_apply_before_validation() {
        let text = "[icing]\nkeep_band = nan\n";
        assert!(matches!(
            DonutConfig::from_toml_str(text),
            Err(ConfigError::Invalid(_))
        ));

        let config = DonutConfig::parse_toml_str(text)
            .expect("parses")
            .with_overrides(Some(CutAxis::Y), Some(0.02))
            .expect("override replaces the bad band");
        assert_eq!(config.icing.axis, CutAxis::Y);
        assert_eq!(config.icing.keep_band, 0.02);
    }

    #[test]
    fn read_skips_validation_and_load_does_not() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("donut.toml");
        std::fs::write(&path, "[icing]\nkeep_band = inf\n").expect("config written");

        assert!(matches!(DonutConfig::load(&path), Err(ConfigError::Invalid(_))));
        let config = DonutConfig::read(&path)
            .expect("parses")
            .with_overrides(None, Some(0.01))
            .expect("valid after override");
        assert_eq!(config.icing, crate::selector::HalfSpaceSelector::default());

        let missing = dir.path().join("missing.toml");
        assert!(matches!(DonutConfig::read(&missing), Err(ConfigError::Io { .. })));
    }
}
