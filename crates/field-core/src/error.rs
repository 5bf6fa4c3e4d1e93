use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown variant `{0}` (expected `parallax` or `uniform`)")]
    UnknownVariant(String),
}
