use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::motion::{
    AnimationController, BindingSpec, LoopingTween, RegistrationHandle, StyleWrite, TargetId,
    Timeline, ANIMATED_PROPERTIES,
};

const TARGET_ATTRIBUTE: &str = "data-motion-id";

struct RuntimeState {
    controller: AnimationController,
    elements: HashMap<TargetId, HtmlElement>,
    next_target: u32,
    last_frame: Option<f64>,
    running: bool,
}

/// Browser driver for [`AnimationController`]: one scroll listener, one resize
/// listener and one frame loop for the whole page.
#[derive(Clone)]
pub struct MotionRuntime {
    state: Rc<RefCell<RuntimeState>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl PartialEq for MotionRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl MotionRuntime {
    pub fn start(reduced_motion: bool) -> Self {
        let runtime = Self {
            state: Rc::new(RefCell::new(RuntimeState {
                controller: AnimationController::new(reduced_motion),
                elements: HashMap::new(),
                next_target: 1,
                last_frame: None,
                running: true,
            })),
            frame: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(Vec::new())),
        };

        if let Some(win) = window() {
            let mut listeners = runtime.listeners.borrow_mut();
            for event in ["scroll", "resize"] {
                let handle = runtime.clone();
                listeners.push(EventListener::new(&win, event, move |_| {
                    handle.refresh_viewport();
                }));
            }
        }

        runtime.schedule_frame();
        gloo_console::debug!("motion runtime started, reduced motion:", reduced_motion);
        runtime
    }

    pub fn reduced_motion(&self) -> bool {
        self.state.borrow().controller.reduced_motion()
    }

    /// Stable target id for `element`, assigned on first sight.
    pub fn track(&self, element: &Element) -> Option<TargetId> {
        let element = element.dyn_ref::<HtmlElement>()?;
        let known = element
            .get_attribute(TARGET_ATTRIBUTE)
            .and_then(|value| value.parse::<u32>().ok())
            .map(TargetId);

        let mut state = self.state.borrow_mut();
        let id = match known {
            Some(id) => id,
            None => {
                let id = TargetId(state.next_target);
                state.next_target += 1;
                let _ = element.set_attribute(TARGET_ATTRIBUTE, &id.0.to_string());
                id
            }
        };
        state.elements.insert(id, element.clone());
        Some(id)
    }

    pub fn track_ref(&self, node: &NodeRef) -> Option<TargetId> {
        self.track(&node.cast::<Element>()?)
    }

    pub fn track_all(&self, root: &NodeRef, selector: &str) -> Vec<TargetId> {
        let Some(root) = root.cast::<Element>() else {
            return Vec::new();
        };
        query_all(&root, selector)
            .iter()
            .filter_map(|element| self.track(element))
            .collect()
    }

    pub fn register(&self, spec: BindingSpec) -> RegistrationHandle {
        let handle = self.state.borrow_mut().controller.register(spec);
        self.refresh_viewport();
        self.flush();
        handle
    }

    pub fn register_loop(&self, target: TargetId, tween: LoopingTween) -> RegistrationHandle {
        let handle = self
            .state
            .borrow_mut()
            .controller
            .register_loop(target, tween);
        self.flush();
        handle
    }

    pub fn dispose(&self, handle: RegistrationHandle) {
        let released = self.state.borrow_mut().controller.dispose(handle);
        self.forget(released);
    }

    /// Stops listening, cancels the frame loop and clears every inline style it wrote.
    pub fn shutdown(&self) {
        self.listeners.borrow_mut().clear();
        self.frame.borrow_mut().take();

        let released = {
            let mut state = self.state.borrow_mut();
            state.running = false;
            state.controller.clear()
        };
        self.forget(released);
        self.state.borrow_mut().elements.clear();
    }

    /// Reverts released targets and drops every element that is neither bound
    /// nor measured as a trigger anymore.
    fn forget(&self, released: Vec<TargetId>) {
        let mut state = self.state.borrow_mut();
        let RuntimeState {
            controller,
            elements,
            ..
        } = &mut *state;

        for target in released {
            if controller.is_bound(target) {
                continue;
            }
            if let Some(element) = elements.remove(&target) {
                let style = element.style();
                for property in ANIMATED_PROPERTIES {
                    let _ = style.remove_property(property);
                }
            }
        }

        let triggers = controller.trigger_elements();
        elements.retain(|target, _| controller.is_bound(*target) || triggers.contains(target));
    }

    fn refresh_viewport(&self) {
        let height = viewport_height();
        let mut state = self.state.borrow_mut();
        let RuntimeState {
            controller,
            elements,
            ..
        } = &mut *state;

        controller.on_viewport_change(
            |target| {
                elements
                    .get(&target)
                    .filter(|element| element.is_connected())
                    .map(|element| element.get_bounding_client_rect().top())
            },
            height,
        );
    }

    fn flush(&self) {
        let writes = self.state.borrow_mut().controller.tick(0.0);
        self.apply(&writes);
    }

    fn schedule_frame(&self) {
        let runtime = self.clone();
        let handle = request_animation_frame(move |timestamp| {
            runtime.frame.borrow_mut().take();
            runtime.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(&self, timestamp: f64) {
        let writes = {
            let mut state = self.state.borrow_mut();
            if !state.running {
                return;
            }
            let delta = state
                .last_frame
                .map(|last| timestamp - last)
                .unwrap_or(0.0);
            state.last_frame = Some(timestamp);
            state.controller.tick(delta)
        };

        self.apply(&writes);
        self.schedule_frame();
    }

    fn apply(&self, writes: &[StyleWrite]) {
        let state = self.state.borrow();
        for write in writes {
            let Some(element) = state.elements.get(&write.target) else {
                continue;
            };
            let style = element.style();
            for (property, value) in write.state.css_properties() {
                let _ = style.set_property(property, &value);
            }
        }
    }
}

/// Registrations owned by one mounted section, disposed when it is dropped.
pub struct SectionMotion {
    runtime: MotionRuntime,
    handles: Vec<RegistrationHandle>,
}

impl SectionMotion {
    pub fn new(runtime: &MotionRuntime) -> Self {
        Self {
            runtime: runtime.clone(),
            handles: Vec::new(),
        }
    }

    pub fn reveal(&mut self, spec: BindingSpec) {
        if spec.targets.is_empty() {
            return;
        }
        let handle = self.runtime.register(spec);
        self.handles.push(handle);
    }

    pub fn play(&mut self, timeline: Timeline) {
        for step in timeline.into_bindings() {
            self.reveal(step);
        }
    }

    pub fn drift(&mut self, target: TargetId, tween: LoopingTween) {
        let handle = self.runtime.register_loop(target, tween);
        self.handles.push(handle);
    }
}

impl Drop for SectionMotion {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            self.runtime.dispose(handle);
        }
    }
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}
