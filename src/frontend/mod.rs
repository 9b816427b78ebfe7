mod hero;
mod motion;
mod scene;
mod sections;
mod surfaces;

use js_sys::{Function, Reflect};
use std::cell::RefCell;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement, Storage};
use yew::prelude::*;

use crate::catalog::{NAV_SECTIONS, OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS};
use crate::theme::{PreferenceStorage, Theme, ThemeHolder};
use hero::Hero;
use motion::MotionRuntime;
use sections::{Contact, EducationSection, ExperienceSection, Projects, Skills};

struct LocalStorage(Storage);

impl PreferenceStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
        self.0
            .set_item(key, value)
            .map_err(|_| "local storage rejected the theme preference")
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn media_matches(query: &str) -> Option<bool> {
    window()?
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
}

fn system_prefers_dark() -> Option<bool> {
    media_matches("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)").unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let start_view_transition =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition")).ok();
    let Some(start_view_transition) = start_view_transition
        .as_ref()
        .and_then(|value| value.dyn_ref::<Function>())
    else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

fn set_smooth_scroll(enabled: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let style = root.style();
    if enabled {
        let _ = style.set_property("scroll-behavior", "smooth");
    } else {
        let _ = style.remove_property("scroll-behavior");
    }
}

fn initialize_theme() -> ThemeHolder {
    let storage = local_storage()
        .map(|storage| Box::new(LocalStorage(storage)) as Box<dyn PreferenceStorage>);
    ThemeHolder::initialize(storage, system_prefers_dark())
}

#[function_component(App)]
fn app() -> Html {
    let holder = use_memo((), |_| RefCell::new(initialize_theme()));
    let theme = use_state_eq(|| holder.borrow().get());
    let runtime = use_memo((), |_| MotionRuntime::start(prefers_reduced_motion()));

    {
        let holder = holder.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            apply_theme(holder.borrow().get());
            let subscription = holder.borrow_mut().subscribe(move |next| {
                apply_theme_with_transition(next);
                theme.set(next);
            });
            move || holder.borrow_mut().unsubscribe(subscription)
        });
    }

    {
        let runtime = runtime.clone();
        use_effect_with((), move |_| {
            set_smooth_scroll(true);
            move || {
                runtime.shutdown();
                set_smooth_scroll(false);
            }
        });
    }

    let on_toggle = {
        let holder = holder.clone();
        Callback::from(move |_: MouseEvent| {
            let mut holder = holder.borrow_mut();
            let was_persistent = holder.is_persistent();
            holder.toggle();
            if was_persistent && !holder.is_persistent() {
                gloo_console::debug!("theme preference kept in memory for this session");
            }
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <ContextProvider<MotionRuntime> context={(*runtime).clone()}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <header class="site-header">
                <a class="site-mark" href="#home">{OWNER_NAME}</a>
                <nav aria-label="Sections">
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{id}")} key={*id}>{*label}</a>
                    }) }
                </nav>
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={(*theme).toggle_label()}
                    aria-pressed={(*theme).pressed().to_string()}
                    onclick={on_toggle}
                >
                    <span aria-hidden="true">{(*theme).icon()}</span>
                </button>
            </header>

            <main id="content">
                <Hero />
                <Skills />
                <ExperienceSection />
                <Projects />
                <EducationSection />
                <Contact />
            </main>

            <footer class="site-footer">
                <p>{format!("© {year} {OWNER_NAME}. {OWNER_ROLE}.")}</p>
                <div class="footer-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a href={link.href} target="_blank" rel="noopener noreferrer" key={link.label}>
                            {link.label}
                        </a>
                    }) }
                </div>
            </footer>
        </ContextProvider<MotionRuntime>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
