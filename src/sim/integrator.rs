use crate::dynamics;
use crate::dynamics::state::State;
use crate::gnc::GuidanceParams;
use crate::vehicle::Rocket;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta, fixed step
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `state` from `t` to `t + dt`.
pub fn rk4_step(
    t: f64,
    state: &State,
    rocket: &Rocket,
    guidance: &GuidanceParams,
    dt: f64,
) -> State {
    let half = dt * 0.5;
    let k1 = dynamics::derivatives(t, state, rocket, guidance);
    let k2 = dynamics::derivatives(t + half, &state.apply(&k1, half), rocket, guidance);
    let k3 = dynamics::derivatives(t + half, &state.apply(&k2, half), rocket, guidance);
    let k4 = dynamics::derivatives(t + dt, &state.apply(&k3, dt), rocket, guidance);

    State {
        pos: state.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        vel: state.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
        mass: state.mass + (k1.dmass + 2.0 * k2.dmass + 2.0 * k3.dmass + k4.dmass) * (dt / 6.0),
    }
}
