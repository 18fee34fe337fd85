//! Error types for the navigator and its I/O helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while processing a frame.
///
/// These indicate broken sequencing rather than poor sensor data: bad frames
/// degrade to "no target" and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("turn initiated with an empty plan ({paths} paths visible)")]
    EmptyPlan { paths: usize },

    #[error("failed to spawn frame worker: {reason}")]
    WorkerSpawn { reason: String },

    #[error("frame worker disconnected")]
    WorkerDisconnected,
}

/// Failures while reading configs, recordings and images or writing reports.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize JSON for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, NavError>;
