//! Error types for the dashboard

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that abort a render pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Theme selection outside Light/Dark.
    #[error("Invalid theme '{0}', expected 'Light' or 'Dark'")]
    InvalidTheme(String),

    /// Dataset handed to a chart does not have the declared shape.
    #[error(
        "Chart '{chart}' expected {expected_rows}x{expected_cols} data, got {rows}x{cols}"
    )]
    ChartShape {
        chart: String,
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Palette token that is not a recognised color literal.
    #[error("Invalid color for token '{token}': {value}")]
    InvalidColor { token: String, value: String },
}

impl DashboardError {
    /// Create a theme error.
    pub fn invalid_theme(label: impl Into<String>) -> Self {
        Self::InvalidTheme(label.into())
    }

    /// Create a color error.
    pub fn invalid_color(token: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
            value: value.into(),
        }
    }
}
