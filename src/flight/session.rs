//! Flight session driver
//!
//! Owns the route and the per-frame animation state. Progress comes from an
//! injected [`Clock`] in timed mode, or from an explicit step counter in
//! stepped mode, so ticks can be driven without a window or a real timer.

use bevy::math::DVec3;
use bevy::prelude::*;
use std::time::Duration;

use crate::core::config::FlightConfig;
use crate::flight::heading::{Heading, compute_heading};
use crate::flight::route::Route;

/// Source of elapsed time for timed progress.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

impl Clock for Time {
    fn elapsed(&self) -> Duration {
        Time::elapsed(self)
    }
}

/// Clock advanced by hand.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    elapsed: Duration,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_secs(secs: f64) -> Self {
        Self {
            elapsed: Duration::from_secs_f64(secs),
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressMode {
    /// Ratio follows wall-clock time, one trip per period
    #[default]
    Timed,
    /// Ratio only moves when a step is requested
    Stepped,
}

impl ProgressMode {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressMode::Timed => "timed",
            ProgressMode::Stepped => "stepped",
        }
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub ratio: f64,
    pub position: DVec3,
    /// Position on the previous tick, only used to derive heading
    pub previous: DVec3,
}

impl AnimationState {
    fn at(position: DVec3) -> Self {
        Self {
            ratio: 0.0,
            position,
            previous: position,
        }
    }
}

/// Result of one tick, handed to the scene.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    pub ratio: f64,
    pub position: DVec3,
    pub previous: DVec3,
    /// `None` means keep the current orientation
    pub heading: Option<Heading>,
}

#[derive(Resource, Debug)]
pub struct FlightSession {
    route: Route,
    period_secs: f64,
    steps: u32,
    mode: ProgressMode,
    step: u64,
    /// Clock time at which the current timed lap began
    time_offset_secs: f64,
    state: AnimationState,
    revision: u64,
}

impl FlightSession {
    pub fn new(route: Route, config: &FlightConfig) -> Self {
        let state = AnimationState::at(route.path.start());
        Self {
            route,
            period_secs: config.period_secs,
            steps: config.manual_steps.max(1),
            mode: ProgressMode::Timed,
            step: 0,
            time_offset_secs: 0.0,
            state,
            revision: 0,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn mode(&self) -> ProgressMode {
        self.mode
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Bumped every time the route is replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn progress(&self, clock: &impl Clock) -> f64 {
        match self.mode {
            ProgressMode::Timed => {
                let t = clock.elapsed().as_secs_f64() - self.time_offset_secs;
                t.rem_euclid(self.period_secs) / self.period_secs
            }
            ProgressMode::Stepped => {
                let steps = u64::from(self.steps);
                (self.step % steps) as f64 / steps as f64
            }
        }
    }

    /// Advance the animation to the clock's current time (or current step).
    pub fn tick(&mut self, clock: &impl Clock) -> FrameUpdate {
        let ratio = self.progress(clock);
        let position = self.route.path.interpolate(ratio);

        // Going backwards means the lap restarted; a heading from the end
        // of the arc back to its start would flip the airplane for a frame.
        let previous = if ratio < self.state.ratio {
            position
        } else {
            self.state.position
        };
        let heading = compute_heading(previous, position);

        self.state = AnimationState {
            ratio,
            position,
            previous,
        };
        FrameUpdate {
            ratio,
            position,
            previous,
            heading,
        }
    }

    /// Switch progress mode, continuing from the current ratio.
    pub fn set_mode(&mut self, mode: ProgressMode, clock: &impl Clock) {
        if mode == self.mode {
            return;
        }
        match mode {
            ProgressMode::Stepped => {
                self.step = (self.state.ratio * f64::from(self.steps)).floor() as u64;
            }
            ProgressMode::Timed => {
                self.time_offset_secs =
                    clock.elapsed().as_secs_f64() - self.state.ratio * self.period_secs;
            }
        }
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self, clock: &impl Clock) -> ProgressMode {
        let next = match self.mode {
            ProgressMode::Timed => ProgressMode::Stepped,
            ProgressMode::Stepped => ProgressMode::Timed,
        };
        self.set_mode(next, clock);
        next
    }

    /// Request one step. Ignored outside stepped mode.
    pub fn step(&mut self) -> bool {
        if self.mode != ProgressMode::Stepped {
            return false;
        }
        self.step += 1;
        true
    }

    /// Replace the route and restart from its departure.
    pub fn set_route(&mut self, route: Route, clock: &impl Clock) {
        self.state = AnimationState::at(route.path.start());
        self.route = route;
        self.step = 0;
        self.time_offset_secs = clock.elapsed().as_secs_f64();
        self.revision += 1;
    }
}
