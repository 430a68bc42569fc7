// SPDX-License-Identifier: MPL-2.0
//! Application error types.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Local file access failed (manifest or photo path).
    Io(String),
    /// Remote fetch failed (network, TLS, or HTTP status).
    Http(String),
    /// Image bytes could not be decoded.
    Image(String),
    /// Portfolio manifest could not be parsed or validated.
    Manifest(String),
    /// Configuration file could not be read or written.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Http(msg) => write!(f, "HTTP error: {msg}"),
            Error::Image(msg) => write!(f, "Image decode error: {msg}"),
            Error::Manifest(msg) => write!(f, "Manifest error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
