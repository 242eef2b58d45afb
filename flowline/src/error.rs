//! Layout error types.

use thiserror::Error;

use crate::layout::LayoutConstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A constant was passed where it is not legal, e.g. `ALIGNMENT_TOP`
    /// as the horizontal alignment or an alignment as the size mode.
    #[error("unsupported value {value} passed for {parameter}")]
    InvalidConfiguration {
        parameter: &'static str,
        value: LayoutConstant,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
