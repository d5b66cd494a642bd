use rand::Rng;
use serde::Serialize;

/// Upper clamp for the simulated joint angle, in degrees.
pub const MAX_ANGLE: u32 = 80;
/// Per-tick angle change is drawn from `0..MAX_STEP`.
pub const MAX_STEP: u32 = 5;
/// Direction flips after this many ticks (2 s at the default period).
pub const TICKS_PER_PHASE: u64 = 20;
pub const REP_PROBABILITY: f64 = 0.02;
pub const CUE_PROBABILITY: f64 = 0.05;
/// Used when no exercise target is given.
pub const DEFAULT_TARGET_REPS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feedback {
    Align,
    GreatExtension,
    SteadyForearm,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Align => "Align your body in the frame",
            Feedback::GreatExtension => "Great extension! Hold it.",
            Feedback::SteadyForearm => "Keep your forearm steady.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorFrame {
    pub tick: u64,
    pub angle: u32,
    pub peak_angle: u32,
    pub reps: u32,
    pub feedback: Feedback,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub peak_rom: u32,
    pub reps: u32,
    pub ticks: u64,
    /// True when the rep target was reached, false when stopped early.
    pub completed: bool,
}

pub struct SensorFeed<R> {
    rng: R,
    angle: u32,
    peak: u32,
    reps: u32,
    target_reps: u32,
    tick: u64,
    feedback: Feedback,
    complete: bool,
}

impl<R: Rng> SensorFeed<R> {
    pub fn new(rng: R, target_reps: Option<u32>) -> Self {
        Self {
            rng,
            angle: 0,
            peak: 0,
            reps: 0,
            target_reps: target_reps.unwrap_or(DEFAULT_TARGET_REPS).max(1),
            tick: 0,
            feedback: Feedback::Align,
            complete: false,
        }
    }

    pub fn target_reps(&self) -> u32 {
        self.target_reps
    }

    /// Advance one tick. Once the target is reached the feed stops moving
    /// and keeps returning the final frame.
    pub fn step(&mut self) -> SensorFrame {
        if self.complete {
            return self.frame();
        }

        let delta = self.rng.gen_range(0..MAX_STEP);
        let increasing = (self.tick / TICKS_PER_PHASE) % 2 == 0;
        self.angle = if increasing {
            (self.angle + delta).min(MAX_ANGLE)
        } else {
            self.angle.saturating_sub(delta)
        };
        self.peak = self.peak.max(self.angle);

        if self.rng.gen_bool(REP_PROBABILITY) {
            self.reps += 1;
            self.feedback = Feedback::GreatExtension;
            if self.reps >= self.target_reps {
                self.complete = true;
            }
        } else if self.rng.gen_bool(CUE_PROBABILITY) {
            self.feedback = Feedback::SteadyForearm;
        }

        self.tick += 1;
        self.frame()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            peak_rom: self.peak,
            reps: self.reps,
            ticks: self.tick,
            completed: self.complete,
        }
    }

    fn frame(&self) -> SensorFrame {
        SensorFrame {
            tick: self.tick,
            angle: self.angle,
            peak_angle: self.peak,
            reps: self.reps,
            feedback: self.feedback,
            complete: self.complete,
        }
    }
}
