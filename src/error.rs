use enough::StopReason;

/// Errors from BMP decoding, encoding, and the filter catalogue.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RetouchError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("declared file size ({declared}) does not match computed geometry ({computed})")]
    GeometryMismatch { declared: u64, computed: u64 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("cannot encode an empty image")]
    EmptyImage,

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RetouchError {
    fn from(r: StopReason) -> Self {
        RetouchError::Cancelled(r)
    }
}
