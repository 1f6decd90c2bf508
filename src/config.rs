use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u16,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u16,
    /// Simulated candidate-fetch latency in milliseconds
    #[serde(default = "default_fetch_latency_ms")]
    pub fetch_latency_ms: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            fetch_latency_ms: default_fetch_latency_ms(),
        }
    }
}

fn default_page_size() -> u16 { 10 }
fn default_max_page_size() -> u16 { 100 }
fn default_fetch_latency_ms() -> u64 { 300 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Configurable scoring weight vector. The key set mirrors ScoringWeights
/// exactly: every factor has a coefficient and nothing else is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_niche_overlap")]
    pub niche_overlap: f64,
    #[serde(default = "default_geo_affinity")]
    pub geo_affinity: f64,
    #[serde(default = "default_age_gender_affinity")]
    pub age_gender_affinity: f64,
    #[serde(default = "default_engagement_norm")]
    pub engagement_norm: f64,
    #[serde(default = "default_content_quality")]
    pub content_quality: f64,
    #[serde(default = "default_price_fit")]
    pub price_fit: f64,
    #[serde(default = "default_platform_fit")]
    pub platform_fit: f64,
    #[serde(default = "default_past_brand_similarity")]
    pub past_brand_similarity: f64,
    #[serde(default = "default_availability_fit")]
    pub availability_fit: f64,
    #[serde(default = "default_fraud_risk_penalty")]
    pub fraud_risk_penalty: f64,
    #[serde(default = "default_brand_safety_penalty")]
    pub brand_safety_penalty: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            niche_overlap: default_niche_overlap(),
            geo_affinity: default_geo_affinity(),
            age_gender_affinity: default_age_gender_affinity(),
            engagement_norm: default_engagement_norm(),
            content_quality: default_content_quality(),
            price_fit: default_price_fit(),
            platform_fit: default_platform_fit(),
            past_brand_similarity: default_past_brand_similarity(),
            availability_fit: default_availability_fit(),
            fraud_risk_penalty: default_fraud_risk_penalty(),
            brand_safety_penalty: default_brand_safety_penalty(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        ScoringWeights {
            niche_overlap: config.niche_overlap,
            geo_affinity: config.geo_affinity,
            age_gender_affinity: config.age_gender_affinity,
            engagement_norm: config.engagement_norm,
            content_quality: config.content_quality,
            price_fit: config.price_fit,
            platform_fit: config.platform_fit,
            past_brand_similarity: config.past_brand_similarity,
            availability_fit: config.availability_fit,
            fraud_risk_penalty: config.fraud_risk_penalty,
            brand_safety_penalty: config.brand_safety_penalty,
        }
    }
}

fn default_niche_overlap() -> f64 { 0.22 }
fn default_geo_affinity() -> f64 { 0.18 }
fn default_age_gender_affinity() -> f64 { 0.12 }
fn default_engagement_norm() -> f64 { 0.14 }
fn default_content_quality() -> f64 { 0.10 }
fn default_price_fit() -> f64 { 0.10 }
fn default_platform_fit() -> f64 { 0.06 }
fn default_past_brand_similarity() -> f64 { 0.04 }
fn default_availability_fit() -> f64 { 0.02 }
fn default_fraud_risk_penalty() -> f64 { 0.06 }
fn default_brand_safety_penalty() -> f64 { 0.06 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MATCHFORGE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MATCHFORGE_)
            // e.g., MATCHFORGE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MATCHFORGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MATCHFORGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
