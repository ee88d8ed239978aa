//! Error types for the lander core.
//!
//! Flight and landing logic are total functions and never fail.  The only
//! fallible surface is the highscore file, so every variant here describes a
//! storage problem.  A missing or corrupt file is *not* an error: the store
//! re-initialises it (see [`crate::highscore::HighscoreStore::load_or_init`]).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lander::error::LanderResult;
//!
//! fn save(store: &HighscoreStore) -> LanderResult<()> {
//!     store.append("Buzz", 420)?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error enum for the lander.
#[derive(Debug)]
pub enum LanderError {
    /// The highscore file exists but could not be read for a reason other
    /// than absence (permissions, a directory in its place, …).
    StorageRead {
        path: PathBuf,
        source: io::Error,
    },

    /// Writing the highscore table failed.  The previous table on disk is
    /// left untouched because writes go through a temporary sibling file.
    StorageWrite {
        path: PathBuf,
        source: io::Error,
    },

    /// The in-memory table could not be serialised.
    StorageEncode {
        /// Human-readable encoder message.
        reason: String,
    },
}

impl fmt::Display for LanderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanderError::StorageRead { path, source } => {
                write!(f, "failed to read highscores from {}: {}", path.display(), source)
            }
            LanderError::StorageWrite { path, source } => {
                write!(f, "failed to write highscores to {}: {}", path.display(), source)
            }
            LanderError::StorageEncode { reason } => {
                write!(f, "failed to encode highscore table: {}", reason)
            }
        }
    }
}

impl std::error::Error for LanderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LanderError::StorageRead { source, .. } | LanderError::StorageWrite { source, .. } => {
                Some(source)
            }
            LanderError::StorageEncode { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `LanderError` as the error type.
pub type LanderResult<T> = Result<T, LanderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn write_error_names_the_path() {
        let err = LanderError::StorageWrite {
            path: PathBuf::from("/tmp/scores.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/tmp/scores.toml"), "got {text}");
        assert!(text.contains("denied"), "got {text}");
        assert!(err.source().is_some());
    }

    #[test]
    fn encode_error_has_no_source() {
        let err = LanderError::StorageEncode {
            reason: "bad".to_string(),
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "failed to encode highscore table: bad");
    }
}
