// src/error.rs
use std::io;
use std::path::PathBuf;

/// Usage text printed whenever the arguments cannot be understood.
pub const USAGE: &str = "Please enter a valid input.\nExample:\nwfreq 5 /test/ /test-two/new.txt";

/// Failures that decide how the process reports and exits.
#[derive(Debug, thiserror::Error)]
pub enum WordCountError {
    #[error("{}", USAGE)]
    Usage(String),

    #[error("Error parsing path.")]
    Path { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl WordCountError {
    #[inline]
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Path { .. } | Self::Read { .. } | Self::Config { .. } => 1,
        }
    }

    /// Whether skip-and-continue may swallow this error for a single file.
    #[inline]
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        matches!(self, Self::Path { .. } | Self::Read { .. })
    }
}
