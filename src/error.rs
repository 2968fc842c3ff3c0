use std::process::ExitCode;
use thiserror::Error;

use crate::page::PageId;
use crate::table::MAX_FRAMES;

/// Type Alias: A rebranding of the `Result` enum from the standard library which focuses on errors
/// that may result from preparing, running, or presenting a simulation.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the simulator can report. Validation errors are raised before any simulation work
/// happens, so a caller either receives a complete trace or one of these values, never a partial
/// result.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty, or the frame count was not a positive integer.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// One or more reference tokens are absent from the available pages.
    #[error("'{}' not found in available pages", join(.tokens))]
    InvalidReference { tokens: Vec<PageId> },

    /// The step generator was handed a frame count it cannot simulate.
    #[error(
        "invalid configuration: frame count must be between 1 and {max}, got {0}",
        max = MAX_FRAMES
    )]
    InvalidConfig(usize),

    /// `index` is zero based; the message uses the one-based step number.
    #[error("step {number} is out of range for a trace of {len} steps", number = .index + 1)]
    StepOutOfRange { index: usize, len: usize },

    #[error("failed to serialize trace: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid progress template: {0}")]
    Template(#[from] indicatif::style::TemplateError),
}

impl Error {
    /// Numeric status reported by the command line front end.
    pub fn code(&self) -> u8 {
        match self {
            Self::MissingInput(_) => 2,
            Self::InvalidReference { .. } => 3,
            Self::InvalidConfig(_) => 4,
            Self::StepOutOfRange { .. } => 5,
            Self::Json(_) | Self::Template(_) => 6,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn join(tokens: &[PageId]) -> String {
    tokens
        .iter()
        .map(PageId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
