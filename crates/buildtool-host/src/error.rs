//! Errors surfaced to the host environment.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to open '{path}' in editor: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] buildtool_core::NotifyError),
}

pub type Result<T> = std::result::Result<T, HostError>;
