use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    Power3InOut,
    BackOut(f64),
    SineInOut,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` onto the curve. The end points are exact.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power3InOut => {
                if t < 0.5 {
                    (2.0 * t).powi(4) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(4) / 2.0
                }
            }
            Self::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power3Out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::BackOut(1.7),
        Ease::SineInOut,
    ];

    #[test]
    fn every_curve_starts_at_zero_and_lands_on_one() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
            assert_eq!(ease.apply(-3.0), 0.0, "{ease:?}");
            assert_eq!(ease.apply(7.0), 1.0, "{ease:?}");
        }
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|step| Ease::BackOut(1.7).apply(f64::from(step) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn in_out_curves_are_symmetric_at_midpoint() {
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::SineInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
