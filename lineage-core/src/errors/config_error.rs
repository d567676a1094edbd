/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse narration config: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}
