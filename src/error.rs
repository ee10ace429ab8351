use thiserror::Error;

/// Top-level error type for the planar geometry library.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors raised by polygon mutation. The polygon is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("polygon is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("vertex index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors related to SVG export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("failed to write svg: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to reading polygon fixture files.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad point format in polygon {record}: {token:?}")]
    BadPoint { record: usize, token: String },

    #[error("missing {field} in polygon {record}")]
    MissingField { record: usize, field: &'static str },

    #[error("invalid {field} in polygon {record}: {token:?}")]
    BadNumber {
        record: usize,
        field: &'static str,
        token: String,
    },

    #[error("polygon {record}: {source}")]
    Polygon {
        record: usize,
        #[source]
        source: PolygonError,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
