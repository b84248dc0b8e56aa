use std::{fs::File, path::PathBuf, sync::Arc};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ContextExt, LuminaErr};

pub const CONFIG_FILE: &str = "config.yaml";

fn default_title() -> Arc<str> {
    "LUMINA.".into()
}

fn default_description() -> Arc<str> {
    "Digital gardener. Code, design and the space between.".into()
}

fn default_email() -> Arc<str> {
    "alex@lumina.dev".into()
}

fn default_copyright() -> Arc<str> {
    "Designed & Built by Alex. © 2024 LUMINA.".into()
}

fn default_dist_path() -> PathBuf {
    PathBuf::from("dist")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: Arc<str>,
    #[serde(default = "default_description")]
    pub description: Arc<str>,
    /// Address behind the envelope icon in the navigation bar.
    #[serde(default = "default_email")]
    pub email: Arc<str>,
    #[serde(default = "default_copyright")]
    pub copyright: Arc<str>,
    #[serde(default = "default_dist_path")]
    pub dist_path: PathBuf,
    /// Replaces the bundled content table when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,
    /// Directory with tera templates, replaces the bundled ones when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            email: default_email(),
            copyright: default_copyright(),
            dist_path: default_dist_path(),
            content_path: None,
            template: None,
        }
    }
}

impl TryFrom<PathBuf> for Config {
    type Error = LuminaErr;
    fn try_from(value: PathBuf) -> Result<Self, LuminaErr> {
        let config_path = value.join(CONFIG_FILE);
        if !config_path.exists() {
            info!("{} not found, using defaults", config_path.display());
            return Ok(Config::default());
        }
        let f = File::open(&config_path)
            .with_context(|| format!("config file: {}", config_path.display()))?;
        serde_yaml::from_reader::<_, Config>(f)
            .with_context(|| format!("config file: {}", config_path.display()))
    }
}
