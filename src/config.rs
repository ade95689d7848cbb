use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Site-wide settings used for the fixed page chrome around every recipe
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Site owner, shown in the page title and the navigation brand
    #[serde(default = "default_author")]
    pub author: String,
    /// Stylesheet linked from every page
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    /// Home page the navigation brand links to
    #[serde(default = "default_index_page")]
    pub index_page: String,
    /// Recipe listing page the back links point to
    #[serde(default = "default_listing_page")]
    pub listing_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            stylesheet: default_stylesheet(),
            index_page: default_index_page(),
            listing_page: default_listing_page(),
        }
    }
}

// Default value functions
fn default_author() -> String {
    "Cristian Villatoro".to_string()
}

fn default_stylesheet() -> String {
    "styles.css".to_string()
}

fn default_index_page() -> String {
    "index.html".to_string()
}

fn default_listing_page() -> String {
    "cooking.html".to_string()
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the source priority.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with COOKLANG_HTML__ prefix
/// 2. cooklang-html.toml file in current directory
/// 3. Default values
///
/// Environment variable format: COOKLANG_HTML__AUTHOR
pub fn load_config() -> Result<SiteConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cooklang-html").required(false))
        .add_source(Environment::with_prefix("COOKLANG_HTML").separator("__"))
        .build()?;

    settings.try_deserialize()
}
