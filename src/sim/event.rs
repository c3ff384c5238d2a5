use std::fmt;

use crate::dynamics::state::State;
use crate::vehicle::Rocket;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Stage 1 dry mass dropped.
    Separation,
    /// Stage stopped burning.
    Burnout { stage: u8 },
    Apogee,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Separation => write!(f, "SEPARATION"),
            EventKind::Burnout { stage } => write!(f, "S{stage} BURNOUT"),
            EventKind::Apogee => write!(f, "APOGEE"),
        }
    }
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// One stored sample, as seen by event detectors.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub time: f64,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

// ---------------------------------------------------------------------------
// Stage separation (mutates mass)
// ---------------------------------------------------------------------------

/// Drops stage 1 dry mass the first time a step boundary straddles the
/// stage 1 burn time (`prev < burn_time <= current`). Fires at most once.
#[derive(Debug, Clone)]
pub struct SeparationEvent {
    burn_time: f64,
    dry_mass: f64,
    fired: bool,
}

impl SeparationEvent {
    pub fn new(rocket: &Rocket) -> Self {
        Self {
            burn_time: rocket.stage1.burn_time,
            dry_mass: rocket.stage1.dry_mass,
            fired: false,
        }
    }

    /// Apply the mass drop if this step crosses separation. Returns true on
    /// the step where it fires.
    pub fn apply(&mut self, prev_time: f64, time: f64, state: &mut State) -> bool {
        if self.fired || !(prev_time < self.burn_time && self.burn_time <= time) {
            return false;
        }
        state.mass -= self.dry_mass;
        self.fired = true;
        true
    }
}

// ---------------------------------------------------------------------------
// Passive detectors
// ---------------------------------------------------------------------------

/// Detects apogee (vertical velocity going from positive to non-positive).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if prev.state.vel.y > 0.0 && current.state.vel.y <= 0.0 && current.state.pos.y > 100.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Detects the step on which a stage's burn window closes.
pub struct BurnoutDetector {
    pub stage: u8,
    pub burnout_time: f64,
    fired: bool,
}

impl BurnoutDetector {
    pub fn new(stage: u8, burnout_time: f64) -> Self {
        Self { stage, burnout_time, fired: false }
    }
}

impl EventDetector for BurnoutDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if prev.time <= self.burnout_time && current.time > self.burnout_time {
            self.fired = true;
            Some(EventKind::Burnout { stage: self.stage })
        } else {
            None
        }
    }
}
