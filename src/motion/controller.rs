use std::collections::{BTreeMap, HashMap};

use super::ease::Ease;
use super::looping::LoopingTween;
use super::visual::VisualState;
use super::MotionClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Starts playing as soon as it is registered.
    Immediate,
    /// Plays once the top edge of `element` reaches `threshold` of the viewport height.
    Viewport { element: TargetId, threshold: f64 },
}

impl Trigger {
    pub fn top_at(element: TargetId, threshold: f64) -> Self {
        Self::Viewport {
            element,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplayPolicy {
    #[default]
    Reverse,
    Once,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BindingSpec {
    pub targets: Vec<TargetId>,
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
    pub trigger: Trigger,
    pub replay: ReplayPolicy,
}

impl BindingSpec {
    pub fn new(targets: Vec<TargetId>, from: VisualState, to: VisualState) -> Self {
        Self {
            targets,
            from,
            to,
            duration_ms: 800.0,
            delay_ms: 0.0,
            stagger_ms: 0.0,
            ease: Ease::Power3Out,
            trigger: Trigger::Immediate,
            replay: ReplayPolicy::Reverse,
        }
    }

    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn once(mut self) -> Self {
        self.replay = ReplayPolicy::Once;
        self
    }

    /// Time from the binding starting until its last target settles.
    pub fn span_ms(&self) -> f64 {
        let followers = self.targets.len().saturating_sub(1) as f64;
        self.delay_ms + self.stagger_ms * followers + self.duration_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingPhase {
    Dormant,
    PlayingForward,
    Settled,
    PlayingReverse,
}

/// Proof of a live registration. Consumed by [`AnimationController::dispose`],
/// so a registration can be disposed at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle leaks the registration until the controller is cleared"]
pub struct RegistrationHandle(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct StyleWrite {
    pub target: TargetId,
    pub state: VisualState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    pub binding: u64,
    pub phase: BindingPhase,
}

struct Binding {
    spec: BindingSpec,
    // Original stagger slot per target; slots survive targets being taken over.
    slots: Vec<(TargetId, usize)>,
    phase: BindingPhase,
    elapsed_ms: f64,
}

impl Binding {
    fn state_for_slot(&self, slot: usize) -> VisualState {
        let start = self.spec.delay_ms + self.spec.stagger_ms * slot as f64;
        let local = if self.spec.duration_ms <= 0.0 {
            if self.elapsed_ms >= start {
                1.0
            } else {
                0.0
            }
        } else {
            ((self.elapsed_ms - start) / self.spec.duration_ms).clamp(0.0, 1.0)
        };

        self.spec.from.lerp(&self.spec.to, self.spec.ease.apply(local))
    }

    fn writes(&self) -> impl Iterator<Item = StyleWrite> + '_ {
        self.slots.iter().map(|(target, slot)| StyleWrite {
            target: *target,
            state: self.state_for_slot(*slot),
        })
    }
}

struct LoopBinding {
    target: TargetId,
    tween: LoopingTween,
}

/// Owns every scroll/entrance registration of a page. Bindings are explicit
/// state machines advanced by viewport changes and by the frame clock.
pub struct AnimationController {
    bindings: BTreeMap<u64, Binding>,
    loops: BTreeMap<u64, LoopBinding>,
    owners: HashMap<TargetId, u64>,
    pending: Vec<StyleWrite>,
    clock: MotionClock,
    reduced_motion: bool,
    next_id: u64,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AnimationController {
    pub fn new(reduced_motion: bool) -> Self {
        let mut clock = MotionClock::new();
        if reduced_motion {
            clock.set_time_scale(0.0);
        }

        Self {
            bindings: BTreeMap::new(),
            loops: BTreeMap::new(),
            owners: HashMap::new(),
            pending: Vec::new(),
            clock,
            reduced_motion,
            next_id: 1,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn clock(&self) -> &MotionClock {
        &self.clock
    }

    pub fn register(&mut self, spec: BindingSpec) -> RegistrationHandle {
        let id = self.allocate_id();
        if spec.targets.is_empty() {
            return RegistrationHandle(id);
        }

        for target in &spec.targets {
            self.release_target(*target);
            self.owners.insert(*target, id);
        }

        let slots = spec
            .targets
            .iter()
            .enumerate()
            .map(|(slot, target)| (*target, slot))
            .collect();
        let mut binding = Binding {
            spec,
            slots,
            phase: BindingPhase::Dormant,
            elapsed_ms: 0.0,
        };
        self.pending.extend(binding.writes());

        if binding.spec.trigger == Trigger::Immediate {
            self.start_forward(&mut binding);
        }

        self.bindings.insert(id, binding);
        RegistrationHandle(id)
    }

    pub fn register_loop(&mut self, target: TargetId, tween: LoopingTween) -> RegistrationHandle {
        let id = self.allocate_id();
        self.release_target(target);
        self.owners.insert(target, id);
        self.pending.push(StyleWrite {
            target,
            state: tween.sample(self.clock.elapsed_ms()),
        });
        self.loops.insert(id, LoopBinding { target, tween });
        RegistrationHandle(id)
    }

    /// Removes the registration and returns the targets it still owned.
    pub fn dispose(&mut self, handle: RegistrationHandle) -> Vec<TargetId> {
        let RegistrationHandle(id) = handle;
        let mut released = Vec::new();

        if let Some(binding) = self.bindings.remove(&id) {
            for (target, _) in binding.slots {
                if self.owners.get(&target) == Some(&id) {
                    self.owners.remove(&target);
                }
                released.push(target);
            }
        }

        if let Some(looping) = self.loops.remove(&id) {
            self.owners.remove(&looping.target);
            released.push(looping.target);
        }

        self.pending.retain(|write| !released.contains(&write.target));
        released
    }

    pub fn clear(&mut self) -> Vec<TargetId> {
        let mut released: Vec<TargetId> = self
            .bindings
            .values()
            .flat_map(|binding| binding.slots.iter().map(|(target, _)| *target))
            .chain(self.loops.values().map(|looping| looping.target))
            .collect();
        released.sort();
        released.dedup();

        self.bindings.clear();
        self.loops.clear();
        self.owners.clear();
        self.pending.clear();
        released
    }

    pub fn active_registrations(&self) -> usize {
        self.bindings.len() + self.loops.len()
    }

    pub fn is_bound(&self, target: TargetId) -> bool {
        self.owners.contains_key(&target)
    }

    pub fn phase(&self, handle: &RegistrationHandle) -> Option<BindingPhase> {
        self.bindings.get(&handle.0).map(|binding| binding.phase)
    }

    /// Elements whose position has to be measured on the next viewport change.
    pub fn trigger_elements(&self) -> Vec<TargetId> {
        let mut elements: Vec<TargetId> = self
            .bindings
            .values()
            .filter_map(|binding| match binding.spec.trigger {
                Trigger::Viewport { element, .. } => Some(element),
                Trigger::Immediate => None,
            })
            .collect();
        elements.sort();
        elements.dedup();
        elements
    }

    /// Re-evaluates every viewport trigger. `measure` returns the client-space
    /// top edge of a trigger element, or `None` if it is not mounted.
    pub fn on_viewport_change(
        &mut self,
        mut measure: impl FnMut(TargetId) -> Option<f64>,
        viewport_height: f64,
    ) -> Vec<PhaseChange> {
        let mut changes = Vec::new();
        let reduced_motion = self.reduced_motion;

        for (id, binding) in self.bindings.iter_mut() {
            let Trigger::Viewport { element, threshold } = binding.spec.trigger else {
                continue;
            };
            let Some(top) = measure(element) else {
                continue;
            };

            let inside = top <= threshold * viewport_height;
            let next = match (inside, binding.phase) {
                (true, BindingPhase::Dormant | BindingPhase::PlayingReverse) => {
                    Some(BindingPhase::PlayingForward)
                }
                (false, BindingPhase::Settled | BindingPhase::PlayingForward)
                    if binding.spec.replay == ReplayPolicy::Reverse =>
                {
                    Some(BindingPhase::PlayingReverse)
                }
                _ => None,
            };

            let Some(mut phase) = next else {
                continue;
            };

            if reduced_motion {
                if phase == BindingPhase::PlayingForward {
                    binding.elapsed_ms = binding.spec.span_ms();
                    phase = BindingPhase::Settled;
                } else {
                    binding.elapsed_ms = 0.0;
                    phase = BindingPhase::Dormant;
                }
                self.pending.extend(binding.writes());
            }

            binding.phase = phase;
            changes.push(PhaseChange {
                binding: *id,
                phase,
            });
        }

        changes
    }

    /// Advances every tween by `delta_ms` and returns the style writes for this frame.
    pub fn tick(&mut self, delta_ms: f64) -> Vec<StyleWrite> {
        let delta_ms = delta_ms.max(0.0);
        let mut writes = std::mem::take(&mut self.pending);

        for binding in self.bindings.values_mut() {
            match binding.phase {
                BindingPhase::PlayingForward => {
                    let span = binding.spec.span_ms();
                    binding.elapsed_ms = (binding.elapsed_ms + delta_ms).min(span);
                    if binding.elapsed_ms >= span {
                        binding.phase = BindingPhase::Settled;
                    }
                }
                BindingPhase::PlayingReverse => {
                    binding.elapsed_ms = (binding.elapsed_ms - delta_ms).max(0.0);
                    if binding.elapsed_ms <= 0.0 {
                        binding.phase = BindingPhase::Dormant;
                    }
                }
                BindingPhase::Dormant | BindingPhase::Settled => continue,
            }
            writes.extend(binding.writes());
        }

        let before = self.clock.elapsed_ms();
        let now = self.clock.advance(delta_ms);
        if now != before {
            for looping in self.loops.values() {
                writes.push(StyleWrite {
                    target: looping.target,
                    state: looping.tween.sample(now),
                });
            }
        }

        writes
    }

    fn start_forward(&mut self, binding: &mut Binding) {
        if self.reduced_motion {
            binding.elapsed_ms = binding.spec.span_ms();
            binding.phase = BindingPhase::Settled;
            self.pending.extend(binding.writes());
        } else {
            binding.phase = BindingPhase::PlayingForward;
        }
    }

    /// Hands `target` over to the next registration: an entrance keeps its
    /// other targets, a loop has only the one and is dropped.
    fn release_target(&mut self, target: TargetId) {
        let Some(owner) = self.owners.remove(&target) else {
            return;
        };
        if let Some(binding) = self.bindings.get_mut(&owner) {
            binding.slots.retain(|(existing, _)| *existing != target);
        }
        self.loops.remove(&owner);
        self.pending.retain(|write| write.target != target);
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn hidden() -> VisualState {
        VisualState::new().opacity(0.0).y(50.0)
    }

    fn shown() -> VisualState {
        VisualState::new().opacity(1.0).y(0.0)
    }

    fn heading_spec(target: TargetId) -> BindingSpec {
        BindingSpec::new(vec![target], hidden(), shown())
            .duration(800.0)
            .trigger(Trigger::top_at(target, 0.85))
    }

    fn last_state(writes: &[StyleWrite], target: TargetId) -> Option<VisualState> {
        writes
            .iter()
            .rev()
            .find(|write| write.target == target)
            .map(|write| write.state)
    }

    #[test]
    fn registration_renders_the_from_state_immediately() {
        let mut controller = AnimationController::new(false);
        let _handle = controller.register(heading_spec(TargetId(1)));

        let writes = controller.tick(0.0);
        assert_eq!(last_state(&writes, TargetId(1)), Some(hidden()));
    }

    #[test]
    fn entering_plays_forward_and_settles_on_the_to_state() {
        let target = TargetId(1);
        let mut controller = AnimationController::new(false);
        let handle = controller.register(heading_spec(target));
        controller.tick(16.0);

        let changes = controller.on_viewport_change(|_| Some(900.0), VIEWPORT);
        assert!(changes.is_empty(), "900px is below the 85% line");
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Dormant));

        let changes = controller.on_viewport_change(|_| Some(840.0), VIEWPORT);
        assert_eq!(changes.len(), 1);
        assert_eq!(controller.phase(&handle), Some(BindingPhase::PlayingForward));

        let mid = controller.tick(400.0);
        let mid_state = last_state(&mid, target).expect("tween writes while playing");
        assert!(mid_state.opacity.expect("opacity is animated") > 0.0);

        let end = controller.tick(400.0);
        assert_eq!(last_state(&end, target), Some(shown()));
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Settled));
        assert!(controller.tick(16.0).is_empty());
    }

    #[test]
    fn leaving_back_reverses_to_the_from_state() {
        let target = TargetId(4);
        let mut controller = AnimationController::new(false);
        let handle = controller.register(heading_spec(target));

        controller.on_viewport_change(|_| Some(100.0), VIEWPORT);
        controller.tick(1_000.0);
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Settled));

        controller.on_viewport_change(|_| Some(990.0), VIEWPORT);
        assert_eq!(controller.phase(&handle), Some(BindingPhase::PlayingReverse));

        let writes = controller.tick(2_000.0);
        assert_eq!(last_state(&writes, target), Some(hidden()));
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Dormant));

        controller.on_viewport_change(|_| Some(10.0), VIEWPORT);
        assert_eq!(controller.phase(&handle), Some(BindingPhase::PlayingForward));
    }

    #[test]
    fn once_policy_never_reverses() {
        let target = TargetId(2);
        let mut controller = AnimationController::new(false);
        let handle = controller.register(heading_spec(target).once());

        controller.on_viewport_change(|_| Some(0.0), VIEWPORT);
        controller.tick(900.0);
        let changes = controller.on_viewport_change(|_| Some(VIEWPORT), VIEWPORT);

        assert!(changes.is_empty());
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Settled));
    }

    #[test]
    fn mount_then_unmount_leaves_nothing_that_can_fire() {
        let target = TargetId(9);
        let mut controller = AnimationController::new(false);
        let handle = controller.register(heading_spec(target));

        let released = controller.dispose(handle);
        assert_eq!(released, vec![target]);
        assert_eq!(controller.active_registrations(), 0);
        assert!(!controller.is_bound(target));

        let mut measured = false;
        let changes = controller.on_viewport_change(
            |_| {
                measured = true;
                Some(0.0)
            },
            VIEWPORT,
        );
        assert!(changes.is_empty());
        assert!(!measured);
        assert!(controller.tick(500.0).is_empty());
    }

    #[test]
    fn empty_target_list_is_a_no_op() {
        let mut controller = AnimationController::new(false);
        let handle = controller.register(BindingSpec::new(Vec::new(), hidden(), shown()));

        assert_eq!(controller.active_registrations(), 0);
        assert_eq!(controller.phase(&handle), None);
        assert!(controller.dispose(handle).is_empty());
    }

    #[test]
    fn missing_trigger_element_stays_dormant() {
        let mut controller = AnimationController::new(false);
        let handle = controller.register(heading_spec(TargetId(3)));

        assert!(controller.on_viewport_change(|_| None, VIEWPORT).is_empty());
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Dormant));
    }

    #[test]
    fn stagger_fires_items_in_list_order() {
        let targets = vec![TargetId(10), TargetId(11), TargetId(12)];
        let mut controller = AnimationController::new(false);
        let _handle = controller.register(
            BindingSpec::new(targets.clone(), hidden(), shown())
                .duration(400.0)
                .stagger(100.0)
                .ease(Ease::Linear),
        );
        controller.tick(0.0);

        let writes = controller.tick(150.0);
        let opacity = |target| {
            last_state(&writes, target)
                .and_then(|state| state.opacity)
                .expect("staggered target is written")
        };

        assert!(opacity(TargetId(10)) > opacity(TargetId(11)));
        assert!(opacity(TargetId(11)) > 0.0);
        assert_eq!(opacity(TargetId(12)), 0.0);
    }

    #[test]
    fn rebinding_a_target_cancels_the_previous_tween() {
        let shared = TargetId(20);
        let other = TargetId(21);
        let mut controller = AnimationController::new(false);
        let first = controller.register(
            BindingSpec::new(vec![shared, other], hidden(), shown()).duration(1_000.0),
        );
        controller.tick(200.0);

        let replay_from = VisualState::new().opacity(0.0).scale(0.95);
        let replay_to = VisualState::new().opacity(1.0).scale(1.0);
        let second = controller
            .register(BindingSpec::new(vec![shared], replay_from, replay_to).duration(500.0));

        let writes = controller.tick(100.0);
        let shared_writes: Vec<_> = writes.iter().filter(|w| w.target == shared).collect();
        assert_eq!(shared_writes.len(), 2, "from-state render plus one tween frame");
        assert!(shared_writes.iter().all(|w| w.state.y.is_none()));
        assert!(writes.iter().any(|w| w.target == other));

        assert_eq!(controller.dispose(first), vec![other]);
        assert!(controller.is_bound(shared));
        assert_eq!(controller.dispose(second), vec![shared]);
    }

    #[test]
    fn loops_and_entrances_take_targets_over_from_each_other() {
        let target = TargetId(22);
        let bob = LoopingTween::new(VisualState::new().y(0.0), VisualState::new().y(15.0), 3_000.0);
        let mut controller = AnimationController::new(false);
        let entrance = controller
            .register(BindingSpec::new(vec![target], hidden(), shown()).duration(1_000.0));
        controller.tick(100.0);

        let looping = controller.register_loop(target, bob);
        let writes = controller.tick(100.0);
        let frame: Vec<_> = writes.iter().filter(|w| w.target == target).collect();
        assert_eq!(frame.len(), 2, "loop start sample plus one loop frame");
        assert!(frame.iter().all(|w| w.state.opacity.is_none()));
        assert!(controller.dispose(entrance).is_empty());

        let replay = controller
            .register(BindingSpec::new(vec![target], hidden(), shown()).duration(1_000.0));
        let writes = controller.tick(100.0);
        assert!(writes
            .iter()
            .filter(|w| w.target == target)
            .all(|w| w.state.opacity.is_some()));
        assert!(controller.dispose(looping).is_empty());
        assert_eq!(controller.active_registrations(), 1);
        assert_eq!(controller.dispose(replay), vec![target]);
        assert!(!controller.is_bound(target));
    }

    #[test]
    fn disposing_drops_the_trigger_element() {
        let mut controller = AnimationController::new(false);
        let container = TargetId(40);
        let cards = vec![TargetId(41), TargetId(42)];
        let handle = controller.register(
            BindingSpec::new(cards, hidden(), shown()).trigger(Trigger::top_at(container, 0.8)),
        );
        assert_eq!(controller.trigger_elements(), vec![container]);
        assert!(!controller.is_bound(container));

        controller.dispose(handle);
        assert!(controller.trigger_elements().is_empty());
    }

    #[test]
    fn reduced_motion_snaps_entrances_and_freezes_loops() {
        let target = TargetId(30);
        let floating = TargetId(31);
        let mut controller = AnimationController::new(true);
        let handle = controller.register(heading_spec(target));
        let _looping = controller.register_loop(
            floating,
            LoopingTween::new(VisualState::new().y(0.0), VisualState::new().y(15.0), 3_000.0),
        );
        controller.tick(16.0);

        controller.on_viewport_change(|_| Some(0.0), VIEWPORT);
        assert_eq!(controller.phase(&handle), Some(BindingPhase::Settled));
        let writes = controller.tick(1_000.0);
        assert_eq!(last_state(&writes, target), Some(shown()));
        assert!(writes.iter().all(|write| write.target != floating));

        assert!(controller.tick(1_000.0).is_empty());
    }

    #[test]
    fn clear_releases_everything() {
        let mut controller = AnimationController::new(false);
        let _a = controller.register(heading_spec(TargetId(1)));
        let _b = controller.register(heading_spec(TargetId(2)));

        assert_eq!(controller.clear(), vec![TargetId(1), TargetId(2)]);
        assert_eq!(controller.active_registrations(), 0);
        assert!(controller.trigger_elements().is_empty());
    }
}
