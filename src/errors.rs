use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
