//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::Component;

type Vector = Vector3D<Component>;

/// Weights applied to red, green and blue when computing luminance.
pub const LUMINANCE_WEIGHTS: [Component; 3] = [0.21, 0.72, 0.07];

/// The weighted sum of the three given channels.
pub fn weighted_sum(channels: [Component; 3], weights: [Component; 3]) -> Component {
    Vector::from(channels).dot(Vector::from(weights))
}

/// Round to the nearest integer, with halves rounded towards positive
/// infinity.
pub fn round_half_up(value: Component) -> Component {
    (value + 0.5).floor()
}

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
