use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unknown renderer `{0}`, expected one of: minimal, simple, full")]
    UnknownRenderer(String),
    #[error("invalid render configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
