use crate::dynamics::state::G0;

/// Gravitational acceleration magnitude (m/s^2, acting down).
///
/// Flat, non-rotating Earth: constant standard gravity at every altitude the
/// ascent reaches.
pub fn gravity_accel(_altitude: f64) -> f64 {
    G0
}

/// Weight of a body of the given mass (N).
pub fn weight(altitude: f64, mass: f64) -> f64 {
    gravity_accel(altitude) * mass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_gravity() {
        assert_eq!(gravity_accel(0.0), 9.80665);
    }

    #[test]
    fn gravity_is_constant_with_altitude() {
        assert_eq!(gravity_accel(0.0), gravity_accel(150_000.0));
    }

    #[test]
    fn weight_scales_with_mass() {
        assert!((weight(0.0, 7700.0) - 7700.0 * G0).abs() < 1e-9);
    }
}
