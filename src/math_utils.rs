/// Mathematical helpers shared by the lattice geometry and the color sampler.

use glam::DVec2;

/// Assert that two points are within `epsilon` of each other on both axes
///
/// Test helper for geometry code where float accumulation rules out exact equality.
///
/// # Examples
/// See the test cases below for usage examples.
#[macro_export]
macro_rules! assert_point_near {
    ($actual:expr, $expected:expr, $epsilon:expr) => {
        {
            let actual_val: ::glam::DVec2 = $actual;
            let expected_val: ::glam::DVec2 = $expected;
            let eps: f64 = $epsilon;
            let delta = (actual_val - expected_val).abs();

            if delta.x > eps || delta.y > eps {
                panic!(
                    "assertion failed: points differ by {:?} > {}\n  actual: {:?},\n  expected: {:?}",
                    delta, eps, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $epsilon:expr, $($arg:tt)+) => {
        {
            let actual_val: ::glam::DVec2 = $actual;
            let expected_val: ::glam::DVec2 = $expected;
            let eps: f64 = $epsilon;
            let delta = (actual_val - expected_val).abs();

            if delta.x > eps || delta.y > eps {
                panic!(
                    "assertion failed: points differ by {:?} > {}: {}\n  actual: {:?},\n  expected: {:?}",
                    delta, eps, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Unit vector for an angle given in whole degrees
///
/// Goes through `to_radians` so the results match a degree-stepped loop
/// bit for bit, which the lattice termination checks rely on.
///
/// # Examples
/// ```
/// use hex_overlay::math_utils::unit_at_degrees;
///
/// let east = unit_at_degrees(0);
/// assert_eq!(east.x, 1.0);
/// assert_eq!(east.y, 0.0);
/// ```
pub fn unit_at_degrees(angle_deg: u32) -> DVec2 {
    let radians = (angle_deg as f64).to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

/// Polar offset with a radius and an angle in radians
pub fn polar_offset(radius: f64, angle_rad: f64) -> DVec2 {
    DVec2::new(angle_rad.cos() * radius, angle_rad.sin() * radius)
}

/// Euclidean parity of a lattice row: 0 for even rows, 1 for odd rows,
/// including negative rows (row -1 is odd).
pub fn row_parity(row: i64) -> i64 {
    row.rem_euclid(2)
}

/// Integer mean of a channel sum, truncating toward zero
///
/// # Examples
/// ```
/// use hex_overlay::math_utils::truncated_mean;
///
/// assert_eq!(truncated_mean(299, 2), 149);
/// assert_eq!(truncated_mean(0, 0), 0);
/// ```
pub fn truncated_mean(sum: u64, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    (sum / count as u64).min(u8::MAX as u64) as u8
}
