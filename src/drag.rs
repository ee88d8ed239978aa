//! Scalar aerodynamic drag.
//!
//! F = ½ ρ v² C_d A, signed so the force always opposes the direction of
//! motion.  Applied per velocity axis by [`crate::motion::apply_forces`].

/// Drag force for a single velocity component.
///
/// Positive `velocity` yields a positive force, negative yields negative and
/// zero yields exactly zero, so subtracting the result from the velocity
/// always decelerates.  The function is odd in `velocity`.
pub fn drag(density: f32, velocity: f32, drag_coefficient: f32, area: f32) -> f32 {
    let magnitude = 0.5 * density * velocity * velocity * drag_coefficient * area;
    if velocity > 0.0 {
        magnitude
    } else if velocity < 0.0 {
        -magnitude
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_velocity_matches_formula() {
        let f = drag(1.2, 3.0, 0.5, 2.0);
        assert!((f - 0.5 * 1.2 * 9.0 * 0.5 * 2.0).abs() < 1e-6, "got {f}");
    }

    #[test]
    fn negative_velocity_opposes_motion() {
        let f = drag(1.2, -3.0, 0.5, 2.0);
        assert!(f < 0.0, "drag on upward motion must be negative, got {f}");
    }

    #[test]
    fn zero_velocity_has_no_drag() {
        assert_eq!(drag(5.0, 0.0, 1.0, 10.0), 0.0);
        assert_eq!(drag(5.0, -0.0, 1.0, 10.0), 0.0);
    }

    #[test]
    fn drag_is_odd_in_velocity() {
        for &v in &[0.01_f32, 0.5, 1.0, 7.25, 42.0] {
            for &(p, c, a) in &[(1.0_f32, 1.0_f32, 1.0_f32), (0.02, 0.8, 12.0), (9.3, 0.3, 0.5)] {
                assert_eq!(drag(p, -v, c, a), -drag(p, v, c, a), "v={v} p={p} c={c} a={a}");
            }
        }
    }

    #[test]
    fn vacuum_has_no_drag() {
        assert_eq!(drag(0.0, 12.0, 0.8, 12.0), 0.0);
    }
}
