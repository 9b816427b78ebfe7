use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::surface::{
    MagneticConfig, MagneticPull, Rect, Tilt, TiltConfig, MAGNETIC_TRANSITION,
};

fn element_rect(node: &NodeRef) -> Option<Rect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn pointer_of(event: &MouseEvent) -> (f64, f64) {
    (f64::from(event.client_x()), f64::from(event.client_y()))
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: Option<TiltConfig>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let tilt = use_state_eq(Tilt::identity);
    let hovering = use_state_eq(|| false);
    let config = props.config.unwrap_or_default();

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(rect) = element_rect(&node) {
                tilt.set(Tilt::at(pointer_of(&event), rect, &config));
            }
        })
    };

    let onmouseenter = {
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| hovering.set(true))
    };

    let onmouseleave = {
        let tilt = tilt.clone();
        let hovering = hovering.clone();
        Callback::from(move |_: MouseEvent| {
            hovering.set(false);
            tilt.set(Tilt::identity());
        })
    };

    let style = format!(
        "transform: {}; transition: {}; transform-style: preserve-3d;",
        tilt.transform(&config),
        config.transition()
    );
    let overlay_opacity = if *hovering { 1.0 } else { 0.0 };

    html! {
        <div
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={style}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            {props.children.clone()}
            if config.glare_enabled {
                <div
                    class="tilt-glare"
                    aria-hidden="true"
                    style={format!("background: {}; opacity: {overlay_opacity};", tilt.glare_background())}
                />
            }
            <div
                class="tilt-shine"
                aria-hidden="true"
                style={format!("background: {}; opacity: {overlay_opacity};", tilt.shine_background())}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub config: Option<MagneticConfig>,
    #[prop_or_default]
    pub children: Html,
}

/// Link that leans toward the pointer while it is within the configured radius.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let pull = use_state_eq(MagneticPull::rest);
    let config = props.config.unwrap_or_default();

    {
        let node = node.clone();
        let pull = pull.clone();
        use_effect_with(config, move |config| {
            let config = *config;
            let listener = window().map(|win| {
                EventListener::new(&win, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    if let Some(rect) = element_rect(&node) {
                        pull.set(MagneticPull::at(pointer_of(event), rect, &config));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let onmouseleave = {
        let pull = pull.clone();
        Callback::from(move |_: MouseEvent| pull.set(MagneticPull::rest()))
    };

    html! {
        <a
            ref={node}
            href={props.href.clone()}
            class={classes!("magnetic-button", props.class.clone())}
            style={format!("transform: {}; transition: {MAGNETIC_TRANSITION};", pull.transform())}
            onmouseleave={onmouseleave}
        >
            <span
                class="magnetic-glow"
                aria-hidden="true"
                style={format!("opacity: {};", pull.glow_opacity())}
            />
            <span class="magnetic-label">{props.children.clone()}</span>
        </a>
    }
}
