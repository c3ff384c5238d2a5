use nalgebra::Vector2;

/// Dynamic pressure q = 0.5 * rho * v^2 (Pa).
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}

/// Drag force magnitude (N). Always non-negative; the caller resolves the
/// direction.
pub fn drag_force(density: f64, speed: f64, cd: f64, area: f64) -> f64 {
    dynamic_pressure(density, speed) * cd * area
}

/// Drag acceleration opposing `vel` for a body of the given mass.
/// Zero below 1e-6 m/s, where the direction is undefined.
pub fn drag_accel(vel: &Vector2<f64>, drag: f64, mass: f64) -> Vector2<f64> {
    let speed = vel.x.hypot(vel.y);
    if speed < 1e-6 {
        Vector2::zeros()
    } else {
        vel * (-drag / (speed * mass))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::atmosphere;
    use approx::assert_relative_eq;

    #[test]
    fn drag_matches_formula() {
        let f = drag_force(1.225, 100.0, 0.35, 0.9);
        assert_relative_eq!(f, 0.5 * 1.225 * 100.0 * 100.0 * 0.35 * 0.9, max_relative = 1e-12);
    }

    #[test]
    fn drag_is_non_negative() {
        let rho = atmosphere::density(0.0);
        assert!(drag_force(rho, -300.0, 0.3, 0.01) >= 0.0);
        assert_eq!(drag_force(rho, 0.0, 0.3, 0.01), 0.0);
    }

    #[test]
    fn drag_opposes_velocity() {
        let vel = Vector2::new(30.0, 40.0);
        let a = drag_accel(&vel, 500.0, 100.0);
        assert_relative_eq!(a.x, -3.0, max_relative = 1e-12);
        assert_relative_eq!(a.y, -4.0, max_relative = 1e-12);
    }

    #[test]
    fn no_drag_direction_at_rest() {
        let a = drag_accel(&Vector2::new(1e-8, 0.0), 10.0, 1.0);
        assert_eq!(a, Vector2::zeros());
    }
}
