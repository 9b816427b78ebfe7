use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::motion::{MotionRuntime, SectionMotion};
use super::surfaces::TiltCard;
use crate::catalog::{
    self, Category, CERTIFICATIONS, CONTACT_DETAILS, CORE_SKILLS, EDUCATION, EXPERIENCES,
    SKILL_GROUPS, SOCIAL_LINKS,
};
use crate::contact::{ContactField, ContactForm, DraftError, FormPhase, SubmitRejection};
use crate::motion::{BindingSpec, Ease, LoopingTween, Timeline, Trigger, VisualState};
use crate::surface::TiltConfig;

fn heading_reveal(runtime: &MotionRuntime, heading: &NodeRef) -> Option<BindingSpec> {
    let target = runtime.track_ref(heading)?;
    Some(
        BindingSpec::new(
            vec![target],
            VisualState::new().opacity(0.0).y(50.0),
            VisualState::resting(),
        )
        .duration(800.0)
        .trigger(Trigger::top_at(target, 0.85)),
    )
}

/// Reveal for every element matching `selector`, triggered by the container.
fn group_reveal(
    runtime: &MotionRuntime,
    container: &NodeRef,
    selector: &str,
    threshold: f64,
    from: VisualState,
    to: VisualState,
) -> Option<BindingSpec> {
    let trigger = runtime.track_ref(container)?;
    Some(
        BindingSpec::new(runtime.track_all(container, selector), from, to)
            .trigger(Trigger::top_at(trigger, threshold)),
    )
}

fn alternating(index: usize, even: f64, odd: f64) -> f64 {
    if index % 2 == 0 {
        even
    } else {
        odd
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    node: NodeRef,
    eyebrow: AttrValue,
    title: AttrValue,
    accent: AttrValue,
    #[prop_or_default]
    lead: Option<AttrValue>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div ref={props.node.clone()} class="section-heading">
            <p class="section-eyebrow">{props.eyebrow.clone()}</p>
            <h2>
                {props.title.clone()}{" "}
                <span class="text-gradient">{props.accent.clone()}</span>
            </h2>
            if let Some(lead) = props.lead.clone() {
                <p class="section-lead">{lead}</p>
            }
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let heading = use_node_ref();
    let cards = use_node_ref();
    let core = use_node_ref();
    let runtime = use_context::<MotionRuntime>();

    {
        let (heading, cards, core) = (heading.clone(), cards.clone(), core.clone());
        use_effect_with(runtime, move |runtime| {
            let motion = runtime.as_ref().map(|runtime| {
                let mut motion = SectionMotion::new(runtime);
                if let Some(spec) = heading_reveal(runtime, &heading) {
                    motion.reveal(spec);
                }

                for (index, card) in runtime
                    .track_all(&cards, ".skill-card")
                    .into_iter()
                    .enumerate()
                {
                    motion.reveal(
                        BindingSpec::new(
                            vec![card],
                            VisualState::new()
                                .opacity(0.0)
                                .y(60.0)
                                .rotate_y(alternating(index, -15.0, 15.0))
                                .scale(0.9),
                            VisualState::resting().rotate_y(0.0).scale(1.0),
                        )
                        .duration(700.0)
                        .trigger(Trigger::top_at(card, 0.88)),
                    );
                }

                if let Some(spec) = group_reveal(
                    runtime,
                    &core,
                    ".skill-tag",
                    0.85,
                    VisualState::new().opacity(0.0).scale(0.5).y(20.0),
                    VisualState::resting().scale(1.0),
                ) {
                    motion.reveal(spec.duration(400.0).stagger(50.0).ease(Ease::BackOut(1.7)));
                }
                motion
            });
            move || drop(motion)
        });
    }

    html! {
        <section id="skills" class="section">
            <div class="section-inner">
                <SectionHeading
                    node={heading}
                    eyebrow="Expertise"
                    title="Technical"
                    accent="Skills"
                    lead="A comprehensive toolkit for building end-to-end data science and machine learning solutions"
                />

                <div ref={cards} class="skill-grid">
                    { for SKILL_GROUPS.iter().map(|group| html! {
                        <div class="skill-card" key={group.title}>
                            <TiltCard class="card">
                                <div class="card-icon" style={format!("--accent: {};", group.accent)} />
                                <h3>{group.title}</h3>
                                <div class="chip-row">
                                    { for group.skills.iter().map(|skill| html! { <span class="chip">{*skill}</span> }) }
                                </div>
                            </TiltCard>
                        </div>
                    }) }
                </div>

                <div ref={core} class="core-skills">
                    <h3>{"Core Competencies"}</h3>
                    <div class="chip-row">
                        { for CORE_SKILLS.iter().map(|skill| html! { <span class="skill-tag">{*skill}</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let heading = use_node_ref();
    let timeline = use_node_ref();
    let runtime = use_context::<MotionRuntime>();

    {
        let (heading, timeline) = (heading.clone(), timeline.clone());
        use_effect_with(runtime, move |runtime| {
            let motion = runtime.as_ref().map(|runtime| {
                let mut motion = SectionMotion::new(runtime);
                if let Some(spec) = heading_reveal(runtime, &heading) {
                    motion.reveal(spec);
                }

                if let Some(spec) = group_reveal(
                    runtime,
                    &timeline,
                    ".timeline-line",
                    0.75,
                    VisualState::new().scale_y(0.0),
                    VisualState::new().scale_y(1.0),
                ) {
                    motion.reveal(spec.duration(2_000.0).ease(Ease::Power3InOut));
                }

                for (index, card) in runtime
                    .track_all(&timeline, ".experience-card")
                    .into_iter()
                    .enumerate()
                {
                    motion.reveal(
                        BindingSpec::new(
                            vec![card],
                            VisualState::new()
                                .opacity(0.0)
                                .x(alternating(index, -80.0, 80.0))
                                .rotate_y(alternating(index, 25.0, -25.0)),
                            VisualState::resting().rotate_y(0.0),
                        )
                        .duration(900.0)
                        .trigger(Trigger::top_at(card, 0.85)),
                    );
                }

                if let Some(container) = runtime.track_ref(&timeline) {
                    let dots = runtime.track_all(&timeline, ".timeline-dot");
                    for (index, dot) in dots.into_iter().enumerate() {
                        motion.reveal(
                            BindingSpec::new(
                                vec![dot],
                                VisualState::new().opacity(0.0).scale(0.0),
                                VisualState::new().opacity(1.0).scale(1.0),
                            )
                            .duration(500.0)
                            .delay(index as f64 * 300.0)
                            .ease(Ease::BackOut(2.0))
                            .trigger(Trigger::top_at(container, 0.75)),
                        );
                    }

                    let halos = runtime.track_all(&timeline, ".timeline-dot-halo");
                    for (index, halo) in halos.into_iter().enumerate() {
                        motion.drift(
                            halo,
                            LoopingTween::new(
                                VisualState::new().opacity(0.2),
                                VisualState::new().opacity(0.8),
                                1_500.0,
                            )
                            .delay(index as f64 * 500.0),
                        );
                    }
                }
                motion
            });
            move || drop(motion)
        });
    }

    html! {
        <section id="experience" class="section">
            <div class="section-inner">
                <SectionHeading
                    node={heading}
                    eyebrow="Career"
                    title="Work"
                    accent="Experience"
                    lead="Building data pipelines, training models, and shipping analytics in production teams"
                />

                <div ref={timeline} class="timeline">
                    <div class="timeline-track" aria-hidden="true">
                        <div class="timeline-line" style="transform-origin: top;" />
                    </div>
                    { for EXPERIENCES.iter().enumerate().map(|(index, entry)| html! {
                        <div
                            key={entry.company}
                            class={classes!("timeline-entry", if index % 2 == 0 { "is-left" } else { "is-right" })}
                        >
                            <div class="timeline-dot" aria-hidden="true">
                                <span class="timeline-dot-halo" />
                            </div>
                            <article class="experience-card card">
                                <h3>{entry.role}</h3>
                                <p class="card-meta">
                                    <span>{entry.company}</span>
                                    <span>{entry.location}</span>
                                    <span>{entry.period}</span>
                                </p>
                                <p>{entry.description}</p>
                                <ul class="achievements">
                                    { for entry.achievements.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </article>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let heading = use_node_ref();
    let filter = use_node_ref();
    let grid = use_node_ref();
    let runtime = use_context::<MotionRuntime>();
    let active = use_state_eq(|| Category::All);
    let replay = use_mut_ref(|| None::<SectionMotion>);
    let mounted = use_mut_ref(|| false);

    {
        let (heading, filter, grid) = (heading.clone(), filter.clone(), grid.clone());
        use_effect_with(runtime.clone(), move |runtime| {
            let motion = runtime.as_ref().map(|runtime| {
                let mut motion = SectionMotion::new(runtime);
                if let Some(spec) = heading_reveal(runtime, &heading) {
                    motion.reveal(spec);
                }
                if let Some(target) = runtime.track_ref(&filter) {
                    motion.reveal(
                        BindingSpec::new(
                            vec![target],
                            VisualState::new().opacity(0.0).y(30.0),
                            VisualState::resting(),
                        )
                        .duration(600.0)
                        .delay(200.0)
                        .trigger(Trigger::top_at(target, 0.85)),
                    );
                }
                if let Some(spec) = group_reveal(
                    runtime,
                    &grid,
                    ".project-card",
                    0.8,
                    VisualState::new().opacity(0.0).y(60.0).rotate_x(10.0),
                    VisualState::resting().rotate_x(0.0),
                ) {
                    motion.reveal(spec.duration(700.0).stagger(100.0));
                }
                motion
            });
            move || drop(motion)
        });
    }

    {
        let grid = grid.clone();
        let replay = replay.clone();
        let mounted = mounted.clone();
        use_effect_with((*active, runtime), move |(_, runtime)| {
            let first_render = !*mounted.borrow();
            *mounted.borrow_mut() = true;

            if let (false, Some(runtime)) = (first_render, runtime.as_ref()) {
                let mut motion = SectionMotion::new(runtime);
                motion.play(
                    Timeline::new(0.0).then(
                        BindingSpec::new(
                            runtime.track_all(&grid, ".project-card"),
                            VisualState::new().opacity(0.0).y(40.0).scale(0.95),
                            VisualState::resting().scale(1.0),
                        )
                        .duration(500.0)
                        .stagger(60.0),
                    ),
                );
                let previous = replay.borrow_mut().replace(motion);
                drop(previous);
            }
            || ()
        });
    }

    {
        let replay = replay.clone();
        use_effect_with((), move |_| move || drop(replay.borrow_mut().take()));
    }

    let project_tilt = TiltConfig {
        max_angle: 10.0,
        ..TiltConfig::default()
    };

    html! {
        <section id="projects" class="section">
            <div class="section-inner">
                <SectionHeading
                    node={heading}
                    eyebrow="Portfolio"
                    title="Featured"
                    accent="Projects"
                    lead="Showcasing my work in machine learning, computer vision, NLP, data extraction, and financial analytics"
                />

                <div ref={filter} class="project-filter" role="group" aria-label="Filter projects">
                    <span class="project-filter-label">{"Filter:"}</span>
                    { for catalog::category_counts().into_iter().map(|(category, count)| {
                        let is_active = *active == category;
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(category))
                        };
                        html! {
                            <button
                                key={category.key()}
                                type="button"
                                class={classes!("filter-button", is_active.then_some("is-active"))}
                                aria-pressed={is_active.to_string()}
                                onclick={onclick}
                            >
                                {category.filter_label()}
                                <span class="filter-count">{format!("({count})")}</span>
                            </button>
                        }
                    }) }
                </div>

                <div ref={grid} class="project-grid">
                    { for catalog::visible_projects(*active).into_iter().map(|project| html! {
                        <div class="project-card" key={project.title}>
                            <TiltCard class="card project-body" config={Some(project_tilt)}>
                                <div class="project-media">
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <span class="project-category" style={format!("--accent: {};", project.accent)}>
                                        {project.category.badge_label()}
                                    </span>
                                    if let Some(badge) = project.badge() {
                                        <span class="project-badge">{badge}</span>
                                    }
                                </div>
                                <div class="project-content">
                                    <h3>{project.title}</h3>
                                    <p class="card-meta">{project.subtitle}</p>
                                    <p class="project-description">{project.description}</p>
                                    <div class="chip-row">
                                        { for project.card_tech().iter().map(|tech| html! { <span class="chip">{*tech}</span> }) }
                                        if project.hidden_tech_count() > 0 {
                                            <span class="chip">{format!("+{}", project.hidden_tech_count())}</span>
                                        }
                                    </div>
                                    <ul class="achievements">
                                        { for project.card_highlights().iter().map(|item| html! { <li>{*item}</li> }) }
                                    </ul>
                                    <a class="link" href={project.github} target="_blank" rel="noopener noreferrer">
                                        {"View Code"}
                                    </a>
                                </div>
                            </TiltCard>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    let heading = use_node_ref();
    let content = use_node_ref();
    let certificates = use_node_ref();
    let runtime = use_context::<MotionRuntime>();

    {
        let (heading, content, certificates) =
            (heading.clone(), content.clone(), certificates.clone());
        use_effect_with(runtime, move |runtime| {
            let motion = runtime.as_ref().map(|runtime| {
                let mut motion = SectionMotion::new(runtime);
                if let Some(spec) = heading_reveal(runtime, &heading) {
                    motion.reveal(spec);
                }

                for (index, card) in runtime
                    .track_all(&content, ".education-card")
                    .into_iter()
                    .enumerate()
                {
                    motion.reveal(
                        BindingSpec::new(
                            vec![card],
                            VisualState::new()
                                .opacity(0.0)
                                .x(alternating(index, -50.0, 50.0))
                                .rotate_y(alternating(index, -10.0, 10.0)),
                            VisualState::resting().rotate_y(0.0),
                        )
                        .duration(700.0)
                        .delay(index as f64 * 100.0)
                        .trigger(Trigger::top_at(card, 0.88)),
                    );
                }

                if let Some(container) = runtime.track_ref(&certificates) {
                    motion.reveal(
                        BindingSpec::new(
                            vec![container],
                            VisualState::new().opacity(0.0).y(30.0).scale(0.95),
                            VisualState::resting().scale(1.0),
                        )
                        .duration(700.0)
                        .trigger(Trigger::top_at(container, 0.85)),
                    );
                }
                if let Some(spec) = group_reveal(
                    runtime,
                    &certificates,
                    ".cert-badge",
                    0.8,
                    VisualState::new().opacity(0.0).scale(0.5).y(20.0),
                    VisualState::resting().scale(1.0),
                ) {
                    motion.reveal(spec.duration(400.0).stagger(100.0).ease(Ease::BackOut(1.7)));
                }
                motion
            });
            move || drop(motion)
        });
    }

    html! {
        <section id="education" class="section">
            <div class="section-inner">
                <SectionHeading
                    node={heading}
                    eyebrow="Academic"
                    title="Education &"
                    accent="Certifications"
                />

                <div ref={content} class="education-grid">
                    { for EDUCATION.iter().map(|entry| html! {
                        <article class="education-card card" key={entry.degree}>
                            <h3>{entry.degree}</h3>
                            <p class="card-meta">
                                <span>{entry.institution}</span>
                                <span>{entry.period}</span>
                            </p>
                            <p class="education-score">{entry.score}</p>
                            <p>{entry.description}</p>
                        </article>
                    }) }
                </div>

                <div ref={certificates} class="cert-container card">
                    <h3>{"Certifications"}</h3>
                    <div class="cert-grid">
                        { for CERTIFICATIONS.iter().map(|name| html! {
                            <div class="cert-badge" key={*name}>{*name}</div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct FormState {
    form: ContactForm,
    error: Option<DraftError>,
}

enum FormAction {
    Edit(ContactField, String),
    Submit,
    Advance(u32),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                if next.form.update(field, value) && next.error.map(DraftError::field) == Some(field) {
                    next.error = None;
                }
            }
            FormAction::Submit => match next.form.begin_submit() {
                Ok(()) => next.error = None,
                Err(SubmitRejection::Invalid(error)) => next.error = Some(error),
                Err(SubmitRejection::Busy(_)) => {}
            },
            FormAction::Advance(delta_ms) => {
                next.form.advance(delta_ms);
            }
        }
        Rc::new(next)
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let heading = use_node_ref();
    let info = use_node_ref();
    let socials = use_node_ref();
    let form_node = use_node_ref();
    let runtime = use_context::<MotionRuntime>();
    let state = use_reducer(FormState::default);

    {
        let (heading, info, socials, form_node) =
            (heading.clone(), info.clone(), socials.clone(), form_node.clone());
        use_effect_with(runtime, move |runtime| {
            let motion = runtime.as_ref().map(|runtime| {
                let mut motion = SectionMotion::new(runtime);
                if let Some(spec) = heading_reveal(runtime, &heading) {
                    motion.reveal(spec);
                }
                if let Some(spec) = group_reveal(
                    runtime,
                    &info,
                    ".info-card",
                    0.8,
                    VisualState::new().opacity(0.0).x(-30.0),
                    VisualState::resting(),
                ) {
                    motion.reveal(spec.duration(600.0).stagger(100.0));
                }
                if let Some(spec) = group_reveal(
                    runtime,
                    &socials,
                    ".social-link",
                    0.75,
                    VisualState::new().opacity(0.0).scale(0.0),
                    VisualState::new().opacity(1.0).scale(1.0),
                ) {
                    motion.reveal(spec.duration(400.0).stagger(100.0).ease(Ease::BackOut(2.0)));
                }
                if let Some(target) = runtime.track_ref(&form_node) {
                    motion.reveal(
                        BindingSpec::new(
                            vec![target],
                            VisualState::new().opacity(0.0).y(40.0).rotate_x(10.0),
                            VisualState::resting().rotate_x(0.0),
                        )
                        .duration(800.0)
                        .trigger(Trigger::top_at(target, 0.85)),
                    );
                }
                motion
            });
            move || drop(motion)
        });
    }

    let edit = |field: ContactField| {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(FormAction::Edit(field, value)))
    };
    let on_name = edit(ContactField::Name);
    let on_email = edit(ContactField::Email);
    let on_message = edit(ContactField::Message);

    // One timer per accepted phase; rejected submits leave the key unchanged.
    {
        let dispatcher = state.dispatcher();
        let remaining = state.form.remaining_ms();
        use_effect_with(
            (state.form.phase(), state.form.submission()),
            move |_| {
                let timer = remaining.map(|wait| {
                    Timeout::new(wait, move || dispatcher.dispatch(FormAction::Advance(wait)))
                });
                move || drop(timer)
            },
        );
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let phase = state.form.phase();
    let draft = state.form.draft();
    let locked = state.form.is_locked();
    let field_error = |field: ContactField| {
        state
            .error
            .filter(|error| error.field() == field)
            .map(|error| html! { <p class="field-error" role="alert">{error.to_string()}</p> })
    };

    html! {
        <section id="contact" class="section">
            <div class="section-inner">
                <SectionHeading
                    node={heading}
                    eyebrow="Get In Touch"
                    title="Let's Work"
                    accent="Together"
                    lead="Have a project in mind or want to discuss opportunities? I'd love to hear from you."
                />

                <div class="contact-grid">
                    <div class="contact-aside">
                        <div ref={info} class="contact-info">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <a class="info-card" href={detail.href} key={detail.label}>
                                    <span class="info-label">{detail.label}</span>
                                    <span class="info-value">{detail.value}</span>
                                </a>
                            }) }
                        </div>
                        <div ref={socials} class="contact-socials">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    class="social-link"
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                    title={link.value}
                                    key={link.label}
                                >
                                    {link.label}
                                </a>
                            }) }
                        </div>
                    </div>

                    <form ref={form_node} class="contact-form card" onsubmit={onsubmit} novalidate=true>
                        <div class="form-row">
                            <label>
                                <span>{"Your Name"}</span>
                                <input
                                    type="text"
                                    placeholder="John Doe"
                                    value={draft.name.clone()}
                                    disabled={locked}
                                    oninput={on_name.reform(|event: InputEvent| event.target_unchecked_into::<HtmlInputElement>().value())}
                                />
                                { field_error(ContactField::Name) }
                            </label>
                            <label>
                                <span>{"Your Email"}</span>
                                <input
                                    type="email"
                                    placeholder="john@example.com"
                                    value={draft.email.clone()}
                                    disabled={locked}
                                    oninput={on_email.reform(|event: InputEvent| event.target_unchecked_into::<HtmlInputElement>().value())}
                                />
                                { field_error(ContactField::Email) }
                            </label>
                        </div>
                        <label>
                            <span>{"Message"}</span>
                            <textarea
                                rows="5"
                                placeholder="Tell me about your project..."
                                value={draft.message.clone()}
                                disabled={locked}
                                oninput={on_message.reform(|event: InputEvent| event.target_unchecked_into::<HtmlTextAreaElement>().value())}
                            />
                            { field_error(ContactField::Message) }
                        </label>
                        <button
                            type="submit"
                            class={classes!("submit-button", (phase == FormPhase::Submitted).then_some("is-sent"))}
                            disabled={locked}
                        >
                            {phase.button_label()}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
