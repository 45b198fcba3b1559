/// Check for equality between two components allowing for floating point
/// rounding errors, or for an explicit `epsilon`.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr, $expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1e-9);
    }};
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
