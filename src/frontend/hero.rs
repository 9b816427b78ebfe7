use yew::prelude::*;

use super::motion::{MotionRuntime, SectionMotion};
use super::scene::DecorativeScene;
use super::surfaces::MagneticButton;
use crate::catalog::{
    GITHUB_URL, HERO_FLOATING_CHIPS, HERO_TECH_STACK, LINKEDIN_URL, OWNER_EMAIL, OWNER_NAME,
};
use crate::motion::{BindingSpec, Ease, LoopingTween, Timeline, VisualState};

const TIMELINE_DELAY_MS: f64 = 200.0;
const CHIP_ENTRANCE_DELAY_MS: f64 = 1_000.0;

fn hero_timeline(runtime: &MotionRuntime, root: &NodeRef) -> Timeline {
    let targets = |selector: &str| runtime.track_all(root, selector);

    Timeline::new(TIMELINE_DELAY_MS)
        .then(
            BindingSpec::new(
                targets(".hero-greeting"),
                VisualState::new().opacity(0.0).blur(10.0).y(20.0),
                VisualState::resting().blur(0.0),
            )
            .duration(600.0)
            .ease(Ease::Power2Out),
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-name .char"),
                VisualState::new().opacity(0.0).y(50.0).rotate_x(-90.0),
                VisualState::resting().rotate_x(0.0),
            )
            .duration(50.0)
            .stagger(30.0)
            .ease(Ease::BackOut(1.7)),
            300.0,
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-role"),
                VisualState::new().opacity(0.0).x(-30.0).blur(5.0),
                VisualState::resting().blur(0.0),
            )
            .duration(700.0)
            .ease(Ease::Power3Out),
            200.0,
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-description"),
                VisualState::new().opacity(0.0).y(30.0),
                VisualState::resting(),
            )
            .duration(600.0)
            .ease(Ease::Power2Out),
            400.0,
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-cta"),
                VisualState::new().opacity(0.0).scale(0.8),
                VisualState::new().opacity(1.0).scale(1.0),
            )
            .duration(500.0)
            .ease(Ease::BackOut(1.7)),
            300.0,
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-socials > *"),
                VisualState::new().opacity(0.0).y(20.0).scale(0.0),
                VisualState::resting().scale(1.0),
            )
            .duration(400.0)
            .stagger(100.0)
            .ease(Ease::BackOut(2.0)),
            200.0,
        )
        .overlapping(
            BindingSpec::new(
                targets(".hero-tech > *"),
                VisualState::new().opacity(0.0).y(10.0),
                VisualState::resting(),
            )
            .duration(300.0)
            .stagger(50.0)
            .ease(Ease::Power2Out),
            300.0,
        )
}

fn start_hero_motion(runtime: &MotionRuntime, root: &NodeRef) -> SectionMotion {
    let mut motion = SectionMotion::new(runtime);
    motion.play(hero_timeline(runtime, root));

    motion.reveal(
        BindingSpec::new(
            runtime.track_all(root, ".hero-chip"),
            VisualState::new().opacity(0.0).scale(0.0),
            VisualState::new().opacity(1.0).scale(1.0),
        )
        .duration(600.0)
        .stagger(150.0)
        .delay(CHIP_ENTRANCE_DELAY_MS)
        .ease(Ease::BackOut(2.0)),
    );

    for (index, target) in runtime
        .track_all(root, ".hero-chip-drift")
        .into_iter()
        .enumerate()
    {
        let phase = index as f64;
        motion.drift(
            target,
            LoopingTween::new(
                VisualState::new().x(0.0).y(0.0),
                VisualState::new().x(phase.cos() * 10.0).y(phase.sin() * 15.0),
                3_000.0 + index as f64 * 500.0,
            ),
        );
    }

    motion
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let root = use_node_ref();
    let runtime = use_context::<MotionRuntime>();
    let reduced_motion = runtime
        .as_ref()
        .map(MotionRuntime::reduced_motion)
        .unwrap_or(false);

    {
        let root = root.clone();
        use_effect_with(runtime, move |runtime| {
            let motion = runtime
                .as_ref()
                .map(|runtime| start_hero_motion(runtime, &root));
            move || drop(motion)
        });
    }

    let name_chars = OWNER_NAME.chars().map(|ch| {
        let style = if ch == ' ' { "white-space: pre;" } else { "" };
        html! { <span class="char" style={style}>{ch.to_string()}</span> }
    });

    html! {
        <section id="home" ref={root} class="hero">
            <div class="hero-glow" aria-hidden="true">
                <div class="hero-glow-indigo" />
                <div class="hero-glow-purple" />
                <div class="hero-glow-pink" />
            </div>

            <DecorativeScene reduced_motion={reduced_motion} />

            <div class="hero-chips" aria-hidden="true">
                { for HERO_FLOATING_CHIPS.iter().enumerate().map(|(index, chip)| html! {
                    <div class={classes!("hero-chip", format!("hero-chip-{index}"))}>
                        <span class="hero-chip-drift">{*chip}</span>
                    </div>
                }) }
            </div>

            <div class="hero-content">
                <p class="hero-greeting">{"Hello, I'm"}</p>
                <h1 class="hero-name">
                    <span class="text-gradient">{ for name_chars }</span>
                </h1>
                <p class="hero-role">
                    {"Data Scientist & "}
                    <span class="hero-role-accent">{"AI Engineer"}</span>
                </p>
                <p class="hero-description">
                    {"Transforming raw data into intelligent solutions. I build machine learning pipelines, \
                      deploy scalable AI models, and uncover insights that drive business impact."}
                </p>

                <div class="hero-cta">
                    <MagneticButton href="#projects" class="button-primary">
                        {"View My Work"}
                        <span class="hero-cta-arrow" aria-hidden="true">{"↓"}</span>
                    </MagneticButton>
                    <MagneticButton href={format!("mailto:{OWNER_EMAIL}")} class="button-outline">
                        {"Get In Touch"}
                    </MagneticButton>
                </div>

                <div class="hero-socials">
                    <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GH"}</a>
                    <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                    <a href={format!("mailto:{OWNER_EMAIL}")} aria-label="Email">{"@"}</a>
                </div>

                <div class="hero-tech">
                    { for HERO_TECH_STACK.iter().map(|tech| html! { <span class="hero-tech-badge">{*tech}</span> }) }
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span>{"Scroll to explore"}</span>
                <div class="scroll-indicator-track"><div class="scroll-indicator-dot" /></div>
            </div>
        </section>
    }
}
