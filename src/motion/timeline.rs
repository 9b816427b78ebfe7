use super::controller::{BindingSpec, Trigger};

/// Sequences entrance steps one after another, each optionally overlapping
/// the end of the previous one, and flattens them into immediate bindings.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    delay_ms: f64,
    cursor_ms: f64,
    steps: Vec<BindingSpec>,
}

impl Timeline {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            cursor_ms: 0.0,
            steps: Vec::new(),
        }
    }

    pub fn then(self, step: BindingSpec) -> Self {
        self.overlapping(step, 0.0)
    }

    /// Starts `step` `overlap_ms` before the previous step ends. Steps without
    /// targets are dropped and do not move the cursor.
    pub fn overlapping(mut self, mut step: BindingSpec, overlap_ms: f64) -> Self {
        if step.targets.is_empty() {
            return self;
        }

        let start = (self.cursor_ms - overlap_ms.max(0.0)).max(0.0);
        let own_span = step.span_ms();

        step.delay_ms += self.delay_ms + start;
        step.trigger = Trigger::Immediate;
        self.cursor_ms = start + own_span;
        self.steps.push(step);
        self
    }

    pub fn duration_ms(&self) -> f64 {
        self.delay_ms + self.cursor_ms
    }

    pub fn into_bindings(self) -> Vec<BindingSpec> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{TargetId, VisualState};

    fn step(targets: Vec<TargetId>, duration_ms: f64) -> BindingSpec {
        BindingSpec::new(
            targets,
            VisualState::new().opacity(0.0),
            VisualState::new().opacity(1.0),
        )
        .duration(duration_ms)
        .trigger(Trigger::top_at(TargetId(0), 0.5))
    }

    #[test]
    fn overlaps_pull_steps_back_from_the_previous_end() {
        let bindings = Timeline::new(200.0)
            .then(step(vec![TargetId(1)], 600.0))
            .overlapping(step(vec![TargetId(2)], 700.0), 300.0)
            .overlapping(step(vec![TargetId(3)], 600.0), 400.0)
            .into_bindings();

        let delays: Vec<f64> = bindings.iter().map(|b| b.delay_ms).collect();
        assert_eq!(delays, vec![200.0, 500.0, 800.0]);
        assert!(bindings.iter().all(|b| b.trigger == Trigger::Immediate));
    }

    #[test]
    fn staggered_steps_occupy_their_whole_span() {
        let timeline = Timeline::new(0.0)
            .then(step(vec![TargetId(1), TargetId(2), TargetId(3)], 400.0).stagger(100.0))
            .then(step(vec![TargetId(4)], 100.0));

        assert_eq!(timeline.duration_ms(), 700.0);
        assert_eq!(timeline.into_bindings()[1].delay_ms, 600.0);
    }

    #[test]
    fn empty_steps_are_skipped() {
        let timeline = Timeline::new(0.0)
            .then(step(vec![TargetId(1)], 500.0))
            .overlapping(step(Vec::new(), 900.0), 100.0)
            .overlapping(step(vec![TargetId(2)], 500.0), 200.0);

        let bindings = timeline.into_bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[1].delay_ms, 300.0);
    }

    #[test]
    fn overlap_never_starts_before_the_timeline() {
        let bindings = Timeline::new(100.0)
            .overlapping(step(vec![TargetId(1)], 300.0), 1_000.0)
            .into_bindings();
        assert_eq!(bindings[0].delay_ms, 100.0);
    }
}
