use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MainError {
    #[error("Invalid configuration")]
    Config,
    #[error("Webserver failed")]
    Server,
}

pub trait AsConfigError<T> {
    fn into_config_error(self) -> Result<T, MainError>;
}

impl<T> AsConfigError<T> for anyhow::Result<T> {
    #[inline]
    fn into_config_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "Configuration error");
            MainError::Config
        })
    }
}

pub trait AsServerError<T> {
    fn into_server_error(self) -> Result<T, MainError>;
}

impl<T> AsServerError<T> for anyhow::Result<T> {
    #[inline]
    fn into_server_error(self) -> Result<T, MainError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "{}", MainError::Server);
            MainError::Server
        })
    }
}
