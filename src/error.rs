//! Error types for the dashboard.
//!
//! [`DashboardError`] covers everything that can go wrong between a slider
//! value and a rendered plot. The first three variants are contract
//! violations (bounded controls should never let them through) and replace
//! the result text; [`DashboardError::RenderFailure`] only costs the image.

use thiserror::Error;

/// Error raised by the signal model, the controller, or the plot renderer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// A parameter is out of its allowed range or not finite.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Stable input name (`n_points`, `amplitude_1`, `amplitude_2`).
        name: &'static str,
        /// Offending value, formatted for display.
        value: String,
    },

    /// Two series that must be compared elementwise differ in length.
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// A metric was requested over zero samples.
    #[error("cannot compute a metric over empty series")]
    EmptyInput,

    /// Building, rasterizing or encoding the plot failed.
    #[error("plot rendering failed: {0}")]
    RenderFailure(String),
}

impl DashboardError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        DashboardError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    /// `true` for the errors that only cost the image and keep the result text.
    pub fn is_render_failure(&self) -> bool {
        matches!(self, DashboardError::RenderFailure(_))
    }
}

/// Error raised while loading or saving a [`DashboardConfig`](crate::config::DashboardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME env var not set")]
    NoHome,

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
