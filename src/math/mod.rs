pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default geometric tolerance for floating-point comparisons.
///
/// Every operation takes its own `eps`; this is only the value used when the
/// caller does not override it.
pub const EPSILON: f64 = 1e-9;

/// 2D cross product (z component of the 3D cross product).
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` if two points coincide within `eps`.
#[must_use]
pub fn approx_eq(a: &Point2, b: &Point2, eps: f64) -> bool {
    (a - b).norm() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sign_follows_turn_direction() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(cross(&x, &y) > 0.0);
        assert!(cross(&y, &x) < 0.0);
        assert!(cross(&x, &x).abs() < EPSILON);
    }

    #[test]
    fn approx_eq_within_tolerance() {
        let a = Point2::new(1.0, 1.0);
        let b = Point2::new(1.0 + 1e-12, 1.0);
        assert!(approx_eq(&a, &b, EPSILON));
        assert!(!approx_eq(&a, &Point2::new(1.1, 1.0), EPSILON));
    }
}
