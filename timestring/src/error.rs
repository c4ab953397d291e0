use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("unknown formatter style `{0}`, expected one of: absolute, short-process, long-process")]
pub struct ParseStyleError(pub String);

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error(
    "unknown formatter option `{0}`, expected one of: \
     no-spaces, no-unit-spaces, abbreviated, show-millis-on-seconds"
)]
pub struct ParseOptionError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse formatter config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Style(#[from] ParseStyleError),
    #[error(transparent)]
    Option(#[from] ParseOptionError),
}
