#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AabbError {
    #[error("Attempted to create an AABB whose lower corner lies above or right of its upper corner")]
    AabbInvertedCorners,

    #[error("Attempted to create an AABB with a NaN coordinate")]
    AabbNanCoordinate,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SilhouetteError {
    #[error("Target radius must be a number")]
    NanRadius,

    #[error("Target radius must be finite, got {0}")]
    InfiniteRadius(f32),

    #[error("Target radius must not be negative, got {0}")]
    NegativeRadius(f32),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("AAbb error: {}", _0)]
    Aabb(#[from] AabbError),

    #[error("Silhouette error: {}", _0)]
    Silhouette(#[from] SilhouetteError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
