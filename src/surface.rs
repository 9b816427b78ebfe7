//! Pointer-driven transforms for the tilt card and the magnetic button.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_angle: f64,
    pub scale_on_hover: f64,
    pub perspective: f64,
    pub transition_ms: u32,
    pub glare_enabled: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle: 15.0,
            scale_on_hover: 1.02,
            perspective: 1000.0,
            transition_ms: 400,
            glare_enabled: true,
        }
    }
}

impl TiltConfig {
    pub fn transition(&self) -> String {
        format!(
            "transform {}ms cubic-bezier(0.03, 0.98, 0.52, 0.99)",
            self.transition_ms
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub glare_x: f64,
    pub glare_y: f64,
}

impl Tilt {
    pub fn identity() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            glare_x: 50.0,
            glare_y: 50.0,
        }
    }

    /// Tilt for a pointer at client coordinates `(x, y)` over `rect`.
    pub fn at(pointer: (f64, f64), rect: Rect, config: &TiltConfig) -> Self {
        if rect.is_degenerate() {
            return Self::identity();
        }

        let (center_x, center_y) = rect.center();
        let offset_x = (pointer.0 - center_x) / (rect.width / 2.0);
        let offset_y = (pointer.1 - center_y) / (rect.height / 2.0);
        let max = config.max_angle.abs();

        Self {
            rotate_x: (-offset_y * max).clamp(-max, max),
            rotate_y: (offset_x * max).clamp(-max, max),
            scale: config.scale_on_hover,
            glare_x: ((pointer.0 - rect.left) / rect.width * 100.0).clamp(0.0, 100.0),
            glare_y: ((pointer.1 - rect.top) / rect.height * 100.0).clamp(0.0, 100.0),
        }
    }

    pub fn transform(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.3})",
            config.perspective, self.rotate_x, self.rotate_y, self.scale
        )
    }

    pub fn glare_background(&self) -> String {
        format!(
            "radial-gradient(circle at {:.2}% {:.2}%, rgba(255,255,255,0.25) 0%, transparent 60%)",
            self.glare_x, self.glare_y
        )
    }

    pub fn shine_angle(&self) -> f64 {
        105.0 + (self.glare_x - 50.0) * 0.5
    }

    pub fn shine_background(&self) -> String {
        format!(
            "linear-gradient({:.2}deg, transparent 40%, rgba(255,255,255,0.1) 45%, \
             rgba(255,255,255,0.2) 50%, rgba(255,255,255,0.1) 55%, transparent 60%)",
            self.shine_angle()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub strength: f64,
    pub radius: f64,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            strength: 0.3,
            radius: 150.0,
        }
    }
}

pub const MAGNETIC_TRANSITION: &str = "transform 200ms ease-out";
pub const MAGNETIC_NEAR_SCALE: f64 = 1.05;

pub fn pull_strength(distance: f64, config: &MagneticConfig) -> f64 {
    if config.radius <= 0.0 || distance >= config.radius {
        return 0.0;
    }
    (1.0 - distance.max(0.0) / config.radius) * config.strength
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticPull {
    pub dx: f64,
    pub dy: f64,
    pub strength: f64,
    pub near: bool,
}

impl MagneticPull {
    pub fn rest() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            strength: 0.0,
            near: false,
        }
    }

    pub fn at(pointer: (f64, f64), rect: Rect, config: &MagneticConfig) -> Self {
        let (center_x, center_y) = rect.center();
        let distance_x = pointer.0 - center_x;
        let distance_y = pointer.1 - center_y;
        let distance = distance_x.hypot(distance_y);

        if distance >= config.radius {
            return Self::rest();
        }

        let strength = pull_strength(distance, config);
        Self {
            dx: distance_x * strength,
            dy: distance_y * strength,
            strength,
            near: true,
        }
    }

    pub fn transform(&self) -> String {
        let scale = if self.near { MAGNETIC_NEAR_SCALE } else { 1.0 };
        format!(
            "translate({:.2}px, {:.2}px) scale({scale})",
            self.dx, self.dy
        )
    }

    pub fn glow_opacity(&self) -> f64 {
        if self.near {
            0.6
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn center_of_the_card_has_no_rotation() {
        let tilt = Tilt::at((250.0, 300.0), CARD, &TiltConfig::default());
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!((tilt.glare_x, tilt.glare_y), (50.0, 50.0));
    }

    #[test]
    fn edges_reach_the_configured_maximum() {
        let config = TiltConfig {
            max_angle: 10.0,
            ..TiltConfig::default()
        };

        let right = Tilt::at((400.0, 300.0), CARD, &config);
        assert_eq!(right.rotate_y, 10.0);
        let top = Tilt::at((250.0, 200.0), CARD, &config);
        assert_eq!(top.rotate_x, 10.0);
        let bottom = Tilt::at((250.0, 400.0), CARD, &config);
        assert_eq!(bottom.rotate_x, -10.0);
    }

    #[test]
    fn rotation_is_clamped_outside_the_card() {
        let config = TiltConfig::default();
        for pointer in [(-5_000.0, 9_000.0), (5_000.0, -9_000.0), (401.0, 401.0)] {
            let tilt = Tilt::at(pointer, CARD, &config);
            assert!(tilt.rotate_x.abs() <= config.max_angle);
            assert!(tilt.rotate_y.abs() <= config.max_angle);
            assert!((0.0..=100.0).contains(&tilt.glare_x));
            assert!((0.0..=100.0).contains(&tilt.glare_y));
        }
    }

    #[test]
    fn collapsed_card_stays_flat() {
        let flat = Rect {
            width: 0.0,
            ..CARD
        };
        assert_eq!(Tilt::at((10.0, 10.0), flat, &TiltConfig::default()), Tilt::identity());
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let config = TiltConfig::default();
        assert_eq!(
            Tilt::at((120.0, 220.0), CARD, &config),
            Tilt::at((120.0, 220.0), CARD, &config)
        );
    }

    #[test]
    fn pull_is_zero_at_the_radius_and_full_at_the_center() {
        let config = MagneticConfig::default();
        assert_eq!(pull_strength(config.radius, &config), 0.0);
        assert_eq!(pull_strength(0.0, &config), config.strength);

        let (cx, cy) = CARD.center();
        let edge = MagneticPull::at((cx + config.radius, cy), CARD, &config);
        assert_eq!(edge, MagneticPull::rest());

        let centered = MagneticPull::at((cx, cy), CARD, &config);
        assert_eq!(centered.strength, config.strength);
        assert!(centered.near);
    }

    #[test]
    fn pull_moves_toward_the_pointer() {
        let config = MagneticConfig::default();
        let (cx, cy) = CARD.center();
        let pull = MagneticPull::at((cx + 75.0, cy), CARD, &config);

        assert!((pull.strength - 0.15).abs() < 1e-12);
        assert!((pull.dx - 75.0 * 0.15).abs() < 1e-12);
        assert_eq!(pull.dy, 0.0);
        assert_eq!(pull.glow_opacity(), 0.6);
    }
}
