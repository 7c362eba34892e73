//! Error types for the planning pipeline.

use rencana_abstraction::ModelError;
use thiserror::Error;

/// Which pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Objectives,
    Sequence,
    Plan,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Objectives => "Tujuan Pembelajaran",
            Self::Sequence => "Alur Tujuan Pembelajaran",
            Self::Plan => "Perencanaan Pembelajaran Mendalam",
        })
    }
}

/// Core error type for planning operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Session or selection input rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The model call failed for one curriculum standard in Stage 1.
    #[error("Failed to generate {stage} for standard \"{standard}\": {source}")]
    StandardFailed {
        stage: Stage,
        standard: String,
        #[source]
        source: Box<PlannerError>,
    },

    /// The model call failed.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// The model answered, but not in the agreed shape.
    #[error("Malformed {stage} response: {source}")]
    MalformedResponse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    /// Selector matched no objective.
    #[error("Objective not found: {0}")]
    ObjectiveNotFound(String),

    /// The objective exists but no sequence entry refers to it.
    #[error("No learning sequence entry for objective: \"{0}\"")]
    NoSequenceForObjective(String),

    /// A stored artifact the requested step depends on is missing.
    #[error("Missing {artifact}; run `{command}` first")]
    MissingArtifact { artifact: String, command: &'static str },

    /// Document rendering failed.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact (de)serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<handlebars::RenderError> for PlannerError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<handlebars::TemplateError> for PlannerError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlannerError>;
