//! Portfolio configuration
//!
//! Everything the page used to read from module-level constants lives here:
//! the profile shown in the page sections and the particle field constants.
//! All fields are defaulted, so a JSON override only needs the keys it changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level configuration record
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub profile: Profile,
    pub field: FieldConfig,
}

impl PortfolioConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.field.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Profile - page content
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Paragraph shown in the About section
    pub about: String,
    pub skills: Vec<String>,
    pub education: Education,
    pub projects: Vec<Project>,
    /// Footer year; the browser build falls back to the current year
    pub copyright_year: Option<u32>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Avirup Ghosh".into(),
            title: "Software Developer".into(),
            bio: "Passionate developer focused on creating innovative solutions".into(),
            email: "your.email@example.com".into(),
            github: "https://github.com/yourusername".into(),
            linkedin: "https://www.linkedin.com/in/avirup-ghosh-thebetterone".into(),
            about: "I'm a software developer passionate about creating innovative solutions. \
                    With expertise in modern web technologies, I focus on building responsive \
                    and interactive applications."
                .into(),
            skills: ["React", "Three.js", "Tailwind CSS", "JavaScript", "Node.js"]
                .into_iter()
                .map(String::from)
                .collect(),
            education: Education::default(),
            projects: vec![Project::default()],
            copyright_year: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub years: String,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            institution: "SRMIST".into(),
            degree: "BTech - Electronics and Computer Engineering".into(),
            years: "2022-2026".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            title: "Project 1".into(),
            description: "Description of project 1".into(),
            tech: ["React", "Three.js", "Tailwind"]
                .into_iter()
                .map(String::from)
                .collect(),
            link: "#".into(),
        }
    }
}

// ============================================================================
// FieldConfig - particle field constants
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Edge length of the cube the particles are scattered in
    pub spread: f32,
    /// Point size in world units
    pub point_size: f32,
    pub color: Rgb,
    /// Mesh rotation per frame around the vertical axis (radians)
    pub rotation_step: f32,
    pub camera: CameraSettings,
    pub controls: ControlSettings,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 5000,
            spread: 5.0,
            point_size: 0.005,
            color: Rgb([0x21, 0x96, 0xf3]),
            rotation_step: 0.001,
            camera: CameraSettings::default(),
            controls: ControlSettings::default(),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if self.particle_count == 0 {
            return Err(invalid("particle_count", "must be at least 1"));
        }
        if !(self.spread > 0.0) {
            return Err(invalid("spread", format!("{} is not positive", self.spread)));
        }
        if !(self.point_size > 0.0) {
            return Err(invalid("point_size", format!("{} is not positive", self.point_size)));
        }
        if !self.rotation_step.is_finite() {
            return Err(invalid("rotation_step", "must be finite"));
        }

        let camera = &self.camera;
        if !(camera.fov_deg > 0.0 && camera.fov_deg < 180.0) {
            return Err(invalid("camera.fov_deg", format!("{} outside (0, 180)", camera.fov_deg)));
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(invalid(
                "camera.near",
                format!("need 0 < near < far, got near={} far={}", camera.near, camera.far),
            ));
        }
        if !(camera.distance > 0.0) {
            return Err(invalid("camera.distance", format!("{} is not positive", camera.distance)));
        }

        let factor = self.controls.damping_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(invalid("controls.damping_factor", format!("{factor} outside (0, 1]")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z
    pub distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per frame
    pub damping_factor: f32,
    pub enable_zoom: bool,
    pub rotate_speed: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            enable_zoom: false,
            rotate_speed: 1.0,
        }
    }
}

// ============================================================================
// Rgb - hex color
// ============================================================================

/// 8-bit RGB color, (de)serialized as `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("expected #rrggbb color, got {value:?}"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
