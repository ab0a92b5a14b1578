// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Preview(PreviewError),
}

/// Failures reported by a seek-preview source.
///
/// None of these are fatal: the preview bridge swallows them and disables
/// previews for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// `frame_at` was called before a successful `open`.
    NotOpened,

    /// The media could not be opened by the decoder.
    OpenFailed(String),

    /// Decoding or scaling the frame failed.
    DecodeFailed(String),

    /// The decoder is gone (worker thread exited, library missing).
    Unavailable,
}

impl PreviewError {
    /// Attempts to categorize a raw decoder message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("no such file")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("failed to open")
            || msg_lower.contains("no video stream")
        {
            return PreviewError::OpenFailed(msg.to_string());
        }

        if msg_lower.contains("not running") || msg_lower.contains("disconnected") {
            return PreviewError::Unavailable;
        }

        PreviewError::DecodeFailed(msg.to_string())
    }
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::NotOpened => write!(f, "Preview decoder not opened"),
            PreviewError::OpenFailed(msg) => write!(f, "Failed to open media: {}", msg),
            PreviewError::DecodeFailed(msg) => write!(f, "Decoding failed: {}", msg),
            PreviewError::Unavailable => write!(f, "Preview decoder unavailable"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Preview(e) => write!(f, "Preview Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PreviewError> for Error {
    fn from(err: PreviewError) -> Self {
        Error::Preview(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn preview_error_wraps_into_error() {
        let err: Error = PreviewError::NotOpened.into();
        assert_eq!(
            format!("{}", err),
            "Preview Error: Preview decoder not opened"
        );
    }

    #[test]
    fn preview_error_from_message_open() {
        let err = PreviewError::from_message("No such file or directory");
        assert!(matches!(err, PreviewError::OpenFailed(_)));
    }

    #[test]
    fn preview_error_from_message_unavailable() {
        let err = PreviewError::from_message("worker channel disconnected");
        assert_eq!(err, PreviewError::Unavailable);
    }

    #[test]
    fn preview_error_from_message_decode() {
        let err = PreviewError::from_message("Scaling failed: invalid argument");
        assert!(matches!(err, PreviewError::DecodeFailed(_)));
    }
}
