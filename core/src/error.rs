use crate::types::Coord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid motion ({dx}, {dy}): axis-constrained walkers may move along at most one axis per step")]
    InvalidMotion { dx: Coord, dy: Coord },

    #[error("Dimension {axis} = {value} outside [{min}, {max}]")]
    DimensionOutOfRange {
        axis: &'static str,
        value: Coord,
        min: Coord,
        max: Coord,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
