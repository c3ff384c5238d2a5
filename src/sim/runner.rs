use crate::dynamics::state::{SimConfig, State};
use crate::vehicle::Rocket;
use super::event::{
    ApogeeDetector, BurnoutDetector, EventDetector, EventKind, Sample, SeparationEvent, SimEvent,
};
use super::integrator::rk4_step;
use super::telemetry::Telemetry;

// ---------------------------------------------------------------------------
// Simulation output
// ---------------------------------------------------------------------------

/// Time, state and telemetry series of one run, all of equal length.
/// Sample `i` of every series belongs to `time[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOutput {
    pub time: Vec<f64>,
    pub states: Vec<State>,
    pub telemetry: Telemetry,
    pub events: Vec<SimEvent>,
}

impl SimOutput {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn final_state(&self) -> Option<&State> {
        self.states.last()
    }

    /// First recorded event of the given kind.
    pub fn event(&self, kind: EventKind) -> Option<&SimEvent> {
        self.events.iter().find(|e| e.kind == kind)
    }
}

// ---------------------------------------------------------------------------
// Ground contact
// ---------------------------------------------------------------------------

/// Keep the vehicle at or above the pad. Idealised floor, not an impact
/// model: a descending vehicle is stopped, not bounced.
fn clamp_to_ground(state: &mut State) {
    if state.pos.y < 0.0 {
        state.pos.y = 0.0;
        if state.vel.y < 0.0 {
            state.vel.y = 0.0;
        }
    }
}

// ---------------------------------------------------------------------------
// Full ascent simulation
// ---------------------------------------------------------------------------

/// Run the fixed-step ascent for `floor(t_final / dt) + 1` samples.
///
/// Sample 0 is the vehicle at rest on the pad at `t = 0`. Every later sample
/// is one RK4 step, followed by the ground clamp, the stage separation mass
/// drop and telemetry evaluation, in that order.
pub fn simulate(rocket: &Rocket, config: &SimConfig) -> SimOutput {
    let guidance = &config.guidance;
    let n = config.sample_count();

    let mut time = Vec::with_capacity(n);
    let mut states = Vec::with_capacity(n);
    let mut telemetry = Telemetry::with_capacity(n);
    let mut events = Vec::new();

    let mut separation = SeparationEvent::new(rocket);
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(BurnoutDetector::new(2, rocket.final_burnout_time())),
        Box::new(ApogeeDetector),
    ];

    let mut state = State::on_pad(rocket.initial_mass());
    time.push(0.0);
    states.push(state);
    telemetry.record(0.0, &state, rocket, guidance);

    for i in 1..n {
        let t_prev = config.sample_time(i - 1);
        let t = config.sample_time(i);
        let prev = Sample { time: t_prev, state };

        // Integrate
        state = rk4_step(t_prev, &state, rocket, guidance, config.dt);

        clamp_to_ground(&mut state);

        // Stage separation
        if separation.apply(t_prev, t, &mut state) {
            events.push(SimEvent { time: t, kind: EventKind::Separation, state });
        }

        telemetry.record(t, &state, rocket, guidance);

        let current = Sample { time: t, state };
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&prev, &current) {
                events.push(SimEvent { time: t, kind, state });
            }
        }

        time.push(t);
        states.push(state);
    }

    SimOutput { time, states, telemetry, events }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
