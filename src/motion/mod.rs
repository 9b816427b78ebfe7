//! Scroll-triggered and on-load entrance motion, independent of the DOM.

mod controller;
mod ease;
mod looping;
mod timeline;
mod visual;

pub use controller::{
    AnimationController, BindingPhase, BindingSpec, PhaseChange, RegistrationHandle,
    ReplayPolicy, StyleWrite, TargetId, Trigger,
};
pub use ease::Ease;
pub use looping::LoopingTween;
pub use timeline::Timeline;
pub use visual::{VisualState, ANIMATED_PROPERTIES};

/// Animation clock whose elapsed time advances by `delta * time_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionClock {
    elapsed_ms: f64,
    time_scale: f64,
}

impl Default for MotionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionClock {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0.0,
            time_scale: 1.0,
        }
    }

    pub fn frozen() -> Self {
        Self {
            elapsed_ms: 0.0,
            time_scale: 0.0,
        }
    }

    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.time_scale = time_scale.max(0.0);
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms / 1_000.0
    }

    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        self.elapsed_ms += delta_ms.max(0.0) * self.time_scale;
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_clock_never_advances() {
        let mut clock = MotionClock::frozen();
        clock.advance(1_000.0);
        clock.advance(1_000.0);
        assert_eq!(clock.elapsed_ms(), 0.0);
        assert!(clock.is_frozen());
    }

    #[test]
    fn time_scale_multiplies_deltas() {
        let mut clock = MotionClock::new();
        clock.set_time_scale(0.5);
        assert_eq!(clock.advance(200.0), 100.0);
        assert_eq!(clock.advance(-50.0), 100.0);
    }
}
