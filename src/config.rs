use crate::error::ConfigError;
use crate::turn::TurnSide;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for one simulated actor. Every key is optional in the TOML form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Walk speed in scene units per second at character scale 1.
    pub walk_speed: f64,
    pub character_scale: f64,
    /// Corner turn rate in degrees per second.
    pub turn_speed_deg: f64,
    /// Radius of the anchor arc around the edge.
    pub distance: f64,
    pub corner_angle_deg: f64,
    /// Cross-fade between locomotion clips, in seconds.
    pub crossfade: f64,
    pub about_face_duration: f64,
    /// Unscaled local height of the sole below the root.
    pub sole_height: f64,
    pub initial_side: TurnSide,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            walk_speed: 60.0,
            character_scale: 0.01,
            turn_speed_deg: 60.0,
            distance: 1.0,
            corner_angle_deg: 90.0,
            crossfade: 0.18,
            about_face_duration: 1.5,
            sole_height: 0.0,
            initial_side: TurnSide::Left,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Corner turn rate in radians per second.
    pub fn angular_speed(&self) -> f64 {
        self.turn_speed_deg.to_radians()
    }

    pub fn corner_angle(&self) -> f64 {
        self.corner_angle_deg.to_radians()
    }

    pub fn scaled_walk_speed(&self) -> f64 {
        self.walk_speed * self.character_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = SimulationConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn partial_toml_overrides_keys() {
        let config = SimulationConfig::from_toml_str(
            r#"
            distance = 2.5
            turn_speed_deg = 90.0
            initial_side = "right"
            "#,
        )
        .unwrap();

        assert_eq!(config.distance, 2.5);
        assert_eq!(config.initial_side, TurnSide::Right);
        assert!((config.angular_speed() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(config.character_scale, 0.01);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SimulationConfig::from_toml_str("distance = \"far\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SimulationConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn derived_speeds() {
        let config = SimulationConfig::default();
        assert!((config.scaled_walk_speed() - 0.6).abs() < 1e-12);
        assert!((config.corner_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
