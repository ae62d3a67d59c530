mod app_config;
mod config;
mod error;
mod labels;
mod vocabulary;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use labels::{LabelPair, NormalizedLabel, QuantityShape, QuantityToken};
pub use vocabulary::{load_vocabulary, Vocabulary, DEFAULT_BRANDS, DEFAULT_UNITS};
