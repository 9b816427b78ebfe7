use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::f64::consts::{PI, TAU};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::scene::{
    project, Projected, Scene, ShapeKind, ViewportSize, FALLBACK_COLOR, FOLLOWER_COLOR,
    FOLLOWER_RADIUS, PARTICLE_COLOR,
};

const PARTICLE_OPACITY: f64 = 0.6;
const FOLLOWER_OPACITY: f64 = 0.6;

enum Drawable {
    Shape {
        kind: ShapeKind,
        color: &'static str,
        opacity: f64,
        radius: f64,
        rotation: [f64; 3],
    },
    Dot {
        color: &'static str,
        opacity: f64,
        radius: f64,
    },
}

struct SceneLoop {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    scene: RefCell<Scene>,
    pointer: Rc<Cell<[f64; 2]>>,
    last_frame: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    pointer_listener: RefCell<Option<EventListener>>,
}

impl SceneLoop {
    fn attach(canvas: HtmlCanvasElement, reduced_motion: bool) -> Option<Rc<Self>> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let scene = Scene::new(reduced_motion, js_sys::Math::random);
        let pointer = Rc::new(Cell::new([0.0, 0.0]));
        let pointer_listener = window().map(|win| {
            let pointer = pointer.clone();
            EventListener::new(&win, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let viewport = window_size();
                if viewport.width <= 0.0 || viewport.height <= 0.0 {
                    return;
                }
                pointer.set([
                    f64::from(event.client_x()) / viewport.width * 2.0 - 1.0,
                    -(f64::from(event.client_y()) / viewport.height * 2.0 - 1.0),
                ]);
            })
        });

        Some(Rc::new(Self {
            canvas,
            context,
            scene: RefCell::new(scene),
            pointer,
            last_frame: Cell::new(None),
            frame: RefCell::new(None),
            pointer_listener: RefCell::new(pointer_listener),
        }))
    }

    fn schedule(self: &Rc<Self>, on_painted: Option<Callback<()>>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            view.frame.borrow_mut().take();
            view.render(timestamp);
            if let Some(on_painted) = on_painted {
                on_painted.emit(());
            }
            view.schedule(None);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn stop(&self) {
        self.frame.borrow_mut().take();
        self.pointer_listener.borrow_mut().take();
    }

    fn render(&self, timestamp: f64) {
        let viewport = self.fit_canvas();
        let delta = self
            .last_frame
            .get()
            .map(|last| timestamp - last)
            .unwrap_or(0.0);
        self.last_frame.set(Some(timestamp));

        let mut scene = self.scene.borrow_mut();
        scene.advance(delta, self.pointer.get(), viewport);

        let mut drawables: Vec<(Projected, Drawable)> = Vec::new();
        for shape in &scene.shapes {
            if let Some(projected) = project(shape.pose.position, viewport) {
                drawables.push((
                    projected,
                    Drawable::Shape {
                        kind: shape.descriptor.kind,
                        color: shape.descriptor.color,
                        opacity: shape.descriptor.opacity,
                        radius: shape.descriptor.radius,
                        rotation: shape.pose.rotation,
                    },
                ));
            }
        }
        for particle in &scene.particles {
            if let Some(projected) = project(particle.position, viewport) {
                drawables.push((
                    projected,
                    Drawable::Dot {
                        color: PARTICLE_COLOR,
                        opacity: PARTICLE_OPACITY,
                        radius: particle.scale,
                    },
                ));
            }
        }
        if let Some(projected) = project(scene.follower.position, viewport) {
            drawables.push((
                projected,
                Drawable::Dot {
                    color: FOLLOWER_COLOR,
                    opacity: FOLLOWER_OPACITY,
                    radius: FOLLOWER_RADIUS,
                },
            ));
        }

        drawables.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        for (projected, drawable) in &drawables {
            match drawable {
                Drawable::Shape {
                    kind,
                    color,
                    opacity,
                    radius,
                    rotation,
                } => self.draw_shape(projected, *kind, color, *opacity, *radius, *rotation),
                Drawable::Dot {
                    color,
                    opacity,
                    radius,
                } => {
                    ctx.set_global_alpha(*opacity);
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    let _ = ctx.arc(
                        projected.x,
                        projected.y,
                        (radius * projected.pixels_per_unit).max(0.5),
                        0.0,
                        TAU,
                    );
                    ctx.fill();
                }
            }
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_shape(
        &self,
        at: &Projected,
        kind: ShapeKind,
        color: &str,
        opacity: f64,
        radius: f64,
        rotation: [f64; 3],
    ) {
        let ctx = &self.context;
        let size = radius * at.pixels_per_unit;
        ctx.set_global_alpha(opacity);
        ctx.set_fill_style_str(color);
        ctx.set_stroke_style_str(color);

        match kind {
            ShapeKind::Icosahedron => {
                let spin = rotation[1] + rotation[2];
                let squash = rotation[0].cos().abs().max(0.35);
                ctx.begin_path();
                for corner in 0..6 {
                    let angle = spin + f64::from(corner) * PI / 3.0;
                    let x = at.x + angle.cos() * size;
                    let y = at.y + angle.sin() * size * squash;
                    if corner == 0 {
                        ctx.move_to(x, y);
                    } else {
                        ctx.line_to(x, y);
                    }
                }
                ctx.close_path();
                ctx.fill();

                ctx.set_global_alpha(opacity * 0.5);
                ctx.set_stroke_style_str("#ffffff");
                ctx.set_line_width(1.0);
                ctx.begin_path();
                for corner in (0..6).step_by(2) {
                    let angle = spin + f64::from(corner) * PI / 3.0;
                    ctx.move_to(at.x, at.y);
                    ctx.line_to(
                        at.x + angle.cos() * size,
                        at.y + angle.sin() * size * squash,
                    );
                }
                ctx.stroke();
            }
            ShapeKind::Torus => {
                let ring = size * 0.35;
                ctx.set_line_width(ring);
                ctx.begin_path();
                let _ = ctx.ellipse(
                    at.x,
                    at.y,
                    size,
                    (size * rotation[0].cos().abs()).max(ring * 0.5),
                    rotation[2],
                    0.0,
                    TAU,
                );
                ctx.stroke();
            }
            ShapeKind::Sphere => {
                ctx.begin_path();
                let _ = ctx.arc(at.x, at.y, size, 0.0, TAU);
                ctx.fill();

                ctx.set_global_alpha(opacity * 0.3);
                ctx.set_fill_style_str("#ffffff");
                ctx.begin_path();
                let _ = ctx.arc(at.x - size * 0.3, at.y - size * 0.3, size * 0.3, 0.0, TAU);
                ctx.fill();
            }
        }
    }

    fn fit_canvas(&self) -> ViewportSize {
        let width = f64::from(self.canvas.client_width());
        let height = f64::from(self.canvas.client_height());
        let ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let pixel_width = (width * ratio).round() as u32;
        let pixel_height = (height * ratio).round() as u32;

        if self.canvas.width() != pixel_width || self.canvas.height() != pixel_height {
            self.canvas.set_width(pixel_width);
            self.canvas.set_height(pixel_height);
        }
        let _ = self.context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);

        ViewportSize { width, height }
    }
}

fn window_size() -> ViewportSize {
    let Some(win) = window() else {
        return ViewportSize {
            width: 0.0,
            height: 0.0,
        };
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
    };

    ViewportSize {
        width: read(win.inner_width()),
        height: read(win.inner_height()),
    }
}

#[derive(Properties, PartialEq)]
pub struct DecorativeSceneProps {
    pub reduced_motion: bool,
}

/// Background scene behind the hero. Mounted one frame after first paint; the
/// placeholder stays if the canvas cannot be drawn on.
#[function_component(DecorativeScene)]
pub fn decorative_scene(props: &DecorativeSceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let painted = use_state_eq(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let painted = painted.clone();
        let reduced_motion = props.reduced_motion;
        use_effect_with(reduced_motion, move |reduced_motion| {
            let reduced_motion = *reduced_motion;
            let active: Rc<RefCell<Option<Rc<SceneLoop>>>> = Rc::new(RefCell::new(None));

            let deferred = {
                let active = active.clone();
                request_animation_frame(move |_| {
                    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                        return;
                    };
                    match SceneLoop::attach(canvas, reduced_motion) {
                        Some(scene_loop) => {
                            let on_painted = Callback::from(move |_| painted.set(true));
                            scene_loop.schedule(Some(on_painted));
                            *active.borrow_mut() = Some(scene_loop);
                        }
                        None => {
                            gloo_console::debug!("decorative scene unavailable, keeping placeholder");
                        }
                    }
                })
            };

            move || {
                drop(deferred);
                if let Some(scene_loop) = active.borrow_mut().take() {
                    scene_loop.stop();
                }
            }
        });
    }

    html! {
        <div class="hero-scene" aria-hidden="true">
            <canvas
                ref={canvas_ref}
                class={classes!("hero-scene-canvas", (*painted).then_some("is-ready"))}
            />
            if !*painted {
                <div
                    class="hero-scene-placeholder"
                    style={format!("background: {FALLBACK_COLOR}; opacity: 0.3;")}
                />
            }
        </div>
    }
}
