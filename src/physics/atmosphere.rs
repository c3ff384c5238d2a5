// ---------------------------------------------------------------------------
// Exponential atmosphere
// ---------------------------------------------------------------------------

pub const RHO0: f64 = 1.225; // sea-level density, kg/m^3
pub const SCALE_HEIGHT: f64 = 8_500.0; // density scale height, m

/// Air density at a geometric altitude: rho = rho0 * exp(-h / H).
///
/// Negative altitudes are treated as sea level, so RK4 sub-stages that dip
/// below the ground still see a finite density.
pub fn density(altitude_m: f64) -> f64 {
    let h = altitude_m.max(0.0);
    RHO0 * (-h / SCALE_HEIGHT).exp()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_density_is_exact() {
        assert_eq!(density(0.0), 1.225);
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        assert_eq!(density(-100.0), density(0.0));
    }

    #[test]
    fn one_scale_height_is_one_e_fold() {
        let expected = RHO0 / std::f64::consts::E;
        assert_relative_eq!(density(SCALE_HEIGHT), expected, max_relative = 1e-12);
    }

    #[test]
    fn density_monotonically_decreases() {
        let mut prev = density(0.0);
        for i in 1..=200 {
            let rho = density(i as f64 * 500.0);
            assert!(rho <= prev, "density rose at {} m", i * 500);
            assert!(rho > 0.0);
            prev = rho;
        }
    }
}
