use thiserror::Error;

/// Failures raised while composing a control. All of them are caller or
/// configuration mistakes; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// Label size keyword outside large/medium/small/regular
    #[error("invalid size {value}, must be one of large, medium, small or regular")]
    InvalidLabelSize { value: String },

    /// Label weight keyword outside bold/regular
    #[error("invalid weight {value}, must be bold or regular")]
    InvalidLabelWeight { value: String },

    /// Legend size keyword outside xl/l/m/s
    #[error("invalid size {value}, must be one of xl, l, m or s")]
    InvalidLegendSize { value: String },

    /// Legend heading tag outside h1..h6
    #[error("invalid tag {value}, must be one of h1, h2, h3, h4, h5 or h6")]
    InvalidLegendTag { value: String },

    /// An entry point that wraps caller content was given none
    #[error("no block given to {entry_point}")]
    NoContent { entry_point: String },
}
