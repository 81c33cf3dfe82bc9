//! Error types for the newspost utility library.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when using the library.
#[derive(Debug)]
pub enum Error {
    /// A server address specification could not be parsed.
    MalformedAddress {
        /// The address specification as supplied by the user
        spec: String,
        /// What was wrong with it
        reason: MalformedAddressReason,
    },

    /// A data directory could not be created.
    PathCreation {
        /// The path that could not be created
        path: PathBuf,
        /// The underlying OS error
        source: io::Error,
    },

    /// The current user's home directory could not be determined,
    /// so no data-home fallback is available.
    NoHomeDirectory,
}

/// The specific defect in a malformed address specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedAddressReason {
    /// The specification was empty, or the host part was empty
    EmptyHost,
    /// A `[` had no matching `]`
    UnmatchedBracket,
    /// Text other than an optional `:port` followed the closing `]`
    TrailingGarbage,
    /// The port part was empty, contained a non-digit, or exceeded 65535
    InvalidPort,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedAddress { spec, reason } => {
                write!(f, "malformed server address {spec:?}: {reason}")
            }
            Error::PathCreation { path, source } => {
                write!(f, "cannot create data directory {}: {source}", path.display())
            }
            Error::NoHomeDirectory => write!(f, "cannot determine home directory"),
        }
    }
}

impl fmt::Display for MalformedAddressReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedAddressReason::EmptyHost => "empty host",
            MalformedAddressReason::UnmatchedBracket => "unmatched bracket",
            MalformedAddressReason::TrailingGarbage => "unexpected text after ']'",
            MalformedAddressReason::InvalidPort => "invalid port number",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PathCreation { source, .. } => Some(source),
            _ => None,
        }
    }
}
