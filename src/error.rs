use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("duplicate project id {0}")]
    DuplicateId(u32),

    #[error("project {id} has no {field}")]
    MissingField { id: u32, field: &'static str },

    #[error("project {id} has invalid {field} {url:?}: {reason}")]
    InvalidUrl {
        id: u32,
        field: &'static str,
        url: String,
        reason: String,
    },
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("leptos configuration error: {0}")]
    Leptos(#[from] leptos::config::errors::LeptosConfigError),

    #[error("invalid listen address: {0}")]
    Listen(#[from] std::net::AddrParseError),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
