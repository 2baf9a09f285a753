use thiserror::Error;

/// Top-level error type for region operations.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Degeneracy(#[from] DegeneracyError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Malformed inputs, rejected before any geometry is computed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("point {index} of path {path} has {found} coordinates, expected 2")]
    Dimension {
        path: usize,
        index: usize,
        found: usize,
    },

    #[error("{what} needs at least {min} points, got {found}")]
    TooFewPoints {
        what: &'static str,
        min: usize,
        found: usize,
    },

    #[error("exactly one of `r` and `delta` must be given")]
    OffsetDistance,

    #[error("path has repeated points at index {0}")]
    RepeatedPoint(usize),
}

/// Numerical degeneracies hit while constructing geometry.
#[derive(Debug, Error)]
pub enum DegeneracyError {
    #[error("path reverses direction (180 degree turn) at corner {0}")]
    ParallelCorner(usize),

    #[error("offset of path is degenerate: no segment survived validity pruning")]
    CollapsedOffset,
}

/// Sub-path reassembly failures, caused by inconsistent or invalid inputs.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("open chain of {fragments} sub-paths ending at ({x}, {y}) cannot be closed")]
    OpenChain { fragments: usize, x: f64, y: f64 },
}

/// Convenience type alias for results using [`RegionError`].
pub type Result<T> = std::result::Result<T, RegionError>;
