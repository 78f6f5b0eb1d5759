//! Coprocessor configuration file parsing.
//!
//! The schema is the standard `/boot/frc.json` layout: a team number, an
//! optional network-table mode, a camera list, and an optional `target`
//! section overriding the field geometry. Camera entries keep their raw
//! property blocks untouched so the capture collaborator can forward them
//! verbatim to the device; only the fields this runtime interprets are
//! typed out.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tape_targets_core::{FrameGeometry, GateParams, GeometryError, TargetGeometry, TargetSpec};

/// Network-table session mode. Session bootstrap itself happens in the
/// network collaborator; the runtime only carries the choice through.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NtMode {
    #[default]
    Client,
    Server,
}

/// One camera entry. Unrecognized keys ride along in `properties`-style
/// raw values instead of failing the parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub name: String,
    pub path: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub fps: Option<u32>,
    /// Device property block, passed through to the capture collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    /// MJPEG relay settings, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<Value>,
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

impl CameraConfig {
    /// Session resolution as seen by the pipeline.
    pub fn frame_geometry(&self) -> FrameGeometry {
        FrameGeometry {
            width_px: self.width,
            height_px: self.height,
        }
    }
}

/// Parsed coprocessor configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisionConfig {
    pub team: u32,
    #[serde(default)]
    pub ntmode: NtMode,
    pub cameras: Vec<CameraConfig>,
    #[serde(default)]
    pub target: TargetSpec,
    #[serde(default)]
    pub gate: GateParams,
}

/// Startup configuration failures. All of these are fatal before the first
/// frame; none can occur afterwards.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("config error in '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("config lists no cameras")]
    MissingCameras,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl VisionConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        info!(
            "loaded config for team {} with {} camera(s)",
            config.team,
            config.cameras.len()
        );
        Ok(config)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: VisionConfig =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: String::new(),
                source,
            })?;
        if config.cameras.is_empty() {
            return Err(ConfigError::MissingCameras);
        }
        // Fail here, before any capture starts, rather than when the first
        // frame reaches the pipeline.
        for camera in &config.cameras {
            TargetGeometry::derive(&config.target, camera.frame_geometry())?;
        }
        Ok(config)
    }

    /// Resolution of the primary (first) camera.
    pub fn primary_frame(&self) -> FrameGeometry {
        self.cameras[0].frame_geometry()
    }
}
