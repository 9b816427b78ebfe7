use super::ease::Ease;
use super::visual::VisualState;

/// An endlessly repeating yoyo tween sampled from the scaled motion clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopingTween {
    pub from: VisualState,
    pub to: VisualState,
    pub period_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
}

impl LoopingTween {
    pub fn new(from: VisualState, to: VisualState, period_ms: f64) -> Self {
        Self {
            from,
            to,
            period_ms: period_ms.max(1.0),
            delay_ms: 0.0,
            ease: Ease::SineInOut,
        }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn sample(&self, elapsed_ms: f64) -> VisualState {
        let running = elapsed_ms - self.delay_ms;
        if running <= 0.0 {
            return self.from;
        }

        let cycle = (running / self.period_ms).floor();
        let local = (running - cycle * self.period_ms) / self.period_ms;
        let progress = if cycle as u64 % 2 == 0 { local } else { 1.0 - local };

        self.from.lerp(&self.to, self.ease.apply(progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift() -> LoopingTween {
        LoopingTween::new(VisualState::new().y(0.0), VisualState::new().y(10.0), 1_000.0)
            .delay(500.0)
    }

    #[test]
    fn holds_the_from_state_during_the_delay() {
        assert_eq!(drift().sample(0.0), VisualState::new().y(0.0));
        assert_eq!(drift().sample(500.0), VisualState::new().y(0.0));
    }

    #[test]
    fn yoyo_returns_on_odd_cycles() {
        let tween = drift();
        let peak = tween.sample(1_499.0).y.expect("y is animated");
        let back = tween.sample(2_250.0).y.expect("y is animated");
        let forward = tween.sample(750.0).y.expect("y is animated");

        assert!(peak > 9.9);
        assert!((back - forward).abs() < 1e-9);
        assert!(back < peak);
    }
}
