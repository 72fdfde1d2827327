pub mod content;

pub use content::*;

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("{0}")]
    WriteToml(#[from] toml::ser::Error),
    #[error("invalid field `{0}`: {1}")]
    InvalidField(&'static str, String),
}

/// Everything the site needs besides the rendering engine. Missing tables fall back to the stock content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub viewport: ViewportConfig,
    pub seeds: SeedConfig,
    pub sections: Vec<SectionConfig>,
    pub contact: ContactConfig,
    pub preloader: PreloaderConfig,
    pub projects: Vec<ProjectEntry>,
    pub showcase: ShowcaseConfig,
    pub carousel: CarouselConfig,
    pub helix: HelixConfig,
    pub network: NetworkConfig,
    pub polyhedron: PolyhedronConfig,
    pub orbit: OrbitConfig,
    pub cube: CubeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            viewport: ViewportConfig::default(),
            seeds: SeedConfig::default(),
            sections: default_sections(),
            contact: ContactConfig::default(),
            preloader: PreloaderConfig::default(),
            projects: default_projects(),
            showcase: ShowcaseConfig::default(),
            carousel: CarouselConfig::default(),
            helix: HelixConfig::default(),
            network: NetworkConfig::default(),
            polyhedron: PolyhedronConfig::default(),
            orbit: OrbitConfig::default(),
            cube: CubeConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("loaded site config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ProjectError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ProjectError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ProjectError> {
        positive("helix.radius", self.helix.radius)?;
        positive("helix.pitch", self.helix.pitch)?;
        positive("helix.length", self.helix.length)?;
        positive("network.layer_spacing", self.network.layer_spacing)?;
        positive("polyhedron.radius", self.polyhedron.radius)?;
        positive("showcase.radius", self.showcase.radius)?;
        positive("carousel.radius", self.carousel.radius)?;
        positive("cube.tile_size", self.cube.tile_size)?;

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ProjectError::InvalidField(
                "viewport",
                "width and height must be greater than 0".to_string(),
            ));
        }
        if self.helix.samples == 0 {
            return Err(ProjectError::InvalidField(
                "helix.samples",
                "must be at least 1".to_string(),
            ));
        }
        if self.cube.texture_size == 0 {
            return Err(ProjectError::InvalidField(
                "cube.texture_size",
                "must be greater than 0".to_string(),
            ));
        }
        if self.showcase.colors.is_empty() {
            return Err(ProjectError::InvalidField(
                "showcase.colors",
                "needs at least one color".to_string(),
            ));
        }
        if !(self.preloader.camera_damping > 0.0 && self.preloader.camera_damping < 1.0) {
            return Err(ProjectError::InvalidField(
                "preloader.camera_damping",
                "must lie strictly between 0 and 1".to_string(),
            ));
        }
        if self.preloader.progress_interval_ms == 0
            || self.preloader.type_interval_ms == 0
            || self.contact.typing_interval_ms == 0
        {
            return Err(ProjectError::InvalidField(
                "intervals",
                "timer intervals must be greater than 0".to_string(),
            ));
        }
        if !self.contact.recipient.contains('@') {
            return Err(ProjectError::InvalidField(
                "contact.recipient",
                format!("`{}` is not an email address", self.contact.recipient),
            ));
        }
        for section in &self.sections {
            if !(0.0..=1.0).contains(&section.threshold) {
                return Err(ProjectError::InvalidField(
                    "sections.threshold",
                    format!("`{}` threshold must lie in [0, 1]", section.name),
                ));
            }
        }
        Ok(())
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.width < self.viewport.mobile_breakpoint
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ProjectError> {
    if value > 0.0 && value.is_finite() {
        return Ok(());
    }
    Err(ProjectError::InvalidField(
        field,
        format!("must be a positive number, got {value}"),
    ))
}
