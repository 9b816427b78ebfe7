/// Independently optional visual parameters of one element. Unset fields are
/// left alone when written to the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualState {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotate_x: Option<f64>,
    pub rotate_y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_y: Option<f64>,
    pub blur: Option<f64>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resting() -> Self {
        Self::new().opacity(1.0).x(0.0).y(0.0)
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn rotate_x(mut self, value: f64) -> Self {
        self.rotate_x = Some(value);
        self
    }

    pub fn rotate_y(mut self, value: f64) -> Self {
        self.rotate_y = Some(value);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn scale_y(mut self, value: f64) -> Self {
        self.scale_y = Some(value);
        self
    }

    pub fn blur(mut self, value: f64) -> Self {
        self.blur = Some(value);
        self
    }

    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);

        Self {
            opacity: mix(self.opacity, to.opacity, 1.0, t),
            x: mix(self.x, to.x, 0.0, t),
            y: mix(self.y, to.y, 0.0, t),
            rotate_x: mix(self.rotate_x, to.rotate_x, 0.0, t),
            rotate_y: mix(self.rotate_y, to.rotate_y, 0.0, t),
            scale: mix(self.scale, to.scale, 1.0, t),
            scale_y: mix(self.scale_y, to.scale_y, 1.0, t),
            blur: mix(self.blur, to.blur, 0.0, t),
        }
    }

    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();

        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({:.3}px, {:.3}px, 0)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(value) = self.rotate_x {
            parts.push(format!("rotateX({value:.3}deg)"));
        }
        if let Some(value) = self.rotate_y {
            parts.push(format!("rotateY({value:.3}deg)"));
        }
        if let Some(value) = self.scale {
            parts.push(format!("scale({value:.4})"));
        }
        if let Some(value) = self.scale_y {
            parts.push(format!("scaleY({value:.4})"));
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// CSS property/value pairs for the fields that are set.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut properties = Vec::new();

        if let Some(opacity) = self.opacity {
            properties.push(("opacity", format!("{:.4}", opacity.clamp(0.0, 1.0))));
        }
        if let Some(transform) = self.transform() {
            properties.push(("transform", transform));
        }
        if let Some(blur) = self.blur {
            properties.push(("filter", format!("blur({:.2}px)", blur.max(0.0))));
        }

        properties
    }
}

pub const ANIMATED_PROPERTIES: [&str; 3] = ["opacity", "transform", "filter"];

fn mix(from: Option<f64>, to: Option<f64>, identity: f64, t: f64) -> Option<f64> {
    if from.is_none() && to.is_none() {
        return None;
    }

    let a = from.unwrap_or(identity);
    let b = to.unwrap_or(identity);
    Some(a * (1.0 - t) + b * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_end_points_are_exact() {
        let from = VisualState::new().opacity(0.1).y(60.0).rotate_y(-15.0).scale(0.9);
        let to = VisualState::resting().rotate_y(0.0).scale(1.0);

        assert_eq!(from.lerp(&to, 0.0), VisualState { x: Some(0.0), ..from });
        assert_eq!(from.lerp(&to, 1.0), to);
    }

    #[test]
    fn one_sided_fields_interpolate_from_identity() {
        let from = VisualState::new().opacity(0.0);
        let to = VisualState::new().opacity(1.0).scale(0.5);

        let halfway = from.lerp(&to, 0.5);
        assert_eq!(halfway.opacity, Some(0.5));
        assert_eq!(halfway.scale, Some(0.75));
        assert_eq!(halfway.blur, None);
    }

    #[test]
    fn css_only_mentions_set_fields() {
        let state = VisualState::new().opacity(0.5);
        assert_eq!(state.css_properties(), vec![("opacity", "0.5000".to_string())]);

        let moved = VisualState::new().y(20.0).blur(10.0);
        let properties = moved.css_properties();
        assert_eq!(properties[0].0, "transform");
        assert_eq!(properties[0].1, "translate3d(0.000px, 20.000px, 0)");
        assert_eq!(properties[1], ("filter", "blur(10.00px)".to_string()));
    }
}
