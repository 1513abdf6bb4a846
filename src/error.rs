// dmglayout/src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the settings record: parsing defines, building,
/// rendering and writing settings files, and launching the bundled binary.
///
/// Resolving settings from defines never fails; everything the external
/// builder checks (missing bundle, bad format code) is left to it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid define {0:?}: expected key=value with an identifier key")]
    InvalidDefine(String),

    #[error("file list is empty; at least the application must be included")]
    EmptyFileList,

    #[error("{0} is already present in the image root")]
    DuplicateEntry(String),

    #[error("path {0:?} is not valid UTF-8")]
    NonUtf8Path(PathBuf),

    #[error("failed to launch {path:?}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
