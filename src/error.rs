//! Errors raised while setting up an experience.

use thiserror::Error;

/// Everything that can go wrong before the render loop starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExperienceError {
    /// A timing parameter is zero, negative, or not finite.
    #[error("invalid parameter `{name}`: {value} (must be finite and positive)")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The animation needs at least one active row.
    #[error("at least one active row is required")]
    NoActiveRows,
    /// The ring layout would not produce any segment.
    #[error("ring layout is empty (count: {count}, rows: {rows}, radius: {radius})")]
    EmptyRing {
        /// Segments per ring.
        count: usize,
        /// Number of rings.
        rows: usize,
        /// Ring radius.
        radius: f32,
    },
    /// The camera frustum is unusable.
    #[error("invalid frustum (fov: {fov}, znear: {znear}, zfar: {zfar})")]
    InvalidFrustum {
        /// Vertical field of view, in radians.
        fov: f32,
        /// Near clipping plane distance.
        znear: f32,
        /// Far clipping plane distance.
        zfar: f32,
    },
    /// The multisampling level is not one the renderer supports.
    #[error("unsupported sample count {0} (expected 0, 1, 2, 4, 8 or 16)")]
    InvalidSampleCount(u32),
    /// The mount selector did not match any element of the document.
    #[error("no element matches the container selector `{0}`")]
    MissingContainer(String),
    /// Any other failure reported by the DOM while mounting the canvas.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ExperienceError>;
