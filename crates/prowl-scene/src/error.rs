//! Scene-construction error type.

use thiserror::Error;

use prowl_core::Vec3;

/// Errors produced by `prowl-scene` builders.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("walkable field has no boxes")]
    EmptyField,

    #[error("walkable box has inverted extents: min {min}, max {max}")]
    InvertedBox { min: Vec3, max: Vec3 },
}

pub type SceneResult<T> = Result<T, SceneError>;
