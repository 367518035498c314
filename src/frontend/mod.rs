mod dom;
mod lottie;
mod nav;
mod particles;
mod skills;
mod storage;
#[cfg(test)]
mod testing;
mod widgets;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::{
    config::SiteConfig,
    content::{CONTACT_EMAIL, OWNER_NAME, OWNER_ROLE, PROJECTS, SKILL_BADGES, SKILL_CARDS},
    scroll::ScrollSnapshot,
    theme::{Theme, ThemePreference},
};
use dom::EventListener;
use nav::{FragmentLink, Navbar};
use particles::ParticleRenderer;
use skills::{SkillBadgeView, SkillCardView};
use storage::BrowserStorage;
use widgets::{ContactAnimation, InputLockout, ParticlesBackground, ScrollTopButton};

/// Page-wide state that handlers share: settings, the theme preference and
/// the particle renderer.
struct AppContext {
    config: Rc<SiteConfig>,
    theme_preference: ThemePreference<BrowserStorage>,
    particles: Rc<ParticleRenderer>,
}

impl AppContext {
    fn new(config: Rc<SiteConfig>) -> Self {
        let theme_preference =
            ThemePreference::new(BrowserStorage::open(), config.theme_storage_key.clone());
        let particles = Rc::new(ParticleRenderer::new(&config));

        Self {
            config,
            theme_preference,
            particles,
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Err(error) = dom::apply_theme(theme) {
        log::warn!("could not apply {} theme: {error}", theme.as_str());
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let context = use_memo(Rc::clone(&props.config), |config| {
        AppContext::new(Rc::clone(config))
    });
    let theme = use_state_eq(|| context.theme_preference.load());
    let active_section = use_state_eq(|| None::<String>);
    let navbar_scrolled = use_state_eq(|| false);
    let scroll_top_visible = use_state_eq(|| false);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    {
        let thresholds = context.config.scroll_thresholds();
        let active_section = active_section.clone();
        let navbar_scrolled = navbar_scrolled.clone();
        let scroll_top_visible = scroll_top_visible.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::on_window("scroll", move |_| {
                let sections = dom::section_offsets();
                let snapshot = ScrollSnapshot::evaluate(
                    dom::scroll_offset(),
                    sections.iter().map(|(id, top)| (id.as_str(), *top)),
                    thresholds,
                );

                scroll_top_visible.set(snapshot.scroll_top_visible);
                navbar_scrolled.set(snapshot.navbar_scrolled);
                active_section.set(snapshot.current_section);
            })
            .map_err(|error| log::warn!("scroll tracking unavailable: {error}"))
            .ok();

            move || drop(listener)
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        let context = Rc::clone(&context);
        Callback::from(move |()| {
            let next = context.theme_preference.toggle(*theme);
            apply_theme(next);
            log::info!("switched to {} theme", next.as_str());
            context.particles.update_color(next);
            theme.set(next);
        })
    };

    let on_activate = {
        let active_section = active_section.clone();
        Callback::from(move |id: String| active_section.set(Some(id)))
    };

    let config = &context.config;
    let header_offset = config.header_offset;
    let details_page = AttrValue::from(config.details_page.clone());

    html! {
        <>
            <InputLockout />
            <ParticlesBackground renderer={Rc::clone(&context.particles)} theme={*theme} />
            <Navbar
                scrolled={*navbar_scrolled}
                active_section={(*active_section).clone()}
                header_offset={header_offset}
                theme={*theme}
                on_toggle={on_toggle}
                on_activate={on_activate.clone()}
            />

            <main>
                <section id="home" class="hero">
                    <h1>{OWNER_NAME}</h1>
                    <p class="hero-role">{OWNER_ROLE}</p>
                    <div class="hero-actions">
                        <FragmentLink
                            href="#projects"
                            class={classes!("btn", "btn-primary")}
                            header_offset={header_offset}
                            on_activate={on_activate.clone()}
                        >
                            {"See my work"}
                        </FragmentLink>
                        <FragmentLink
                            href="#contact"
                            class={classes!("btn", "btn-outline")}
                            header_offset={header_offset}
                            on_activate={on_activate.clone()}
                        >
                            {"Get in touch"}
                        </FragmentLink>
                    </div>
                </section>

                <section id="about" class="section-block">
                    <h2>{"About"}</h2>
                    <p>
                        {"I build web applications end to end, from typed APIs to the pixels on screen, \
                          and care about software that stays pleasant to change."}
                    </p>
                </section>

                <section id="skills" class="section-block">
                    <h2>{"Skills"}</h2>
                    <div class="skill-cards">
                        { for SKILL_CARDS.iter().map(|card| html! {
                            <SkillCardView
                                key={card.id}
                                id={card.id}
                                name={card.name}
                                icon={card.icon}
                                summary={card.summary}
                                details_page={details_page.clone()}
                            />
                        }) }
                    </div>
                    <div class="skill-badges">
                        { for SKILL_BADGES.iter().map(|badge| html! {
                            <SkillBadgeView
                                key={badge.name}
                                name={badge.name}
                                brand_color={badge.brand_color}
                            />
                        }) }
                    </div>
                </section>

                <section id="projects" class="section-block">
                    <h2>{"Projects"}</h2>
                    <ul class="project-list">
                        { for PROJECTS.iter().map(|project| html! {
                            <li key={project.title}>
                                <a href={project.href} target="_blank" rel="noopener noreferrer">
                                    {project.title}
                                </a>
                                <span class="muted">{": "}{project.description}</span>
                            </li>
                        }) }
                    </ul>
                </section>

                <section id="contact" class="section-block contact">
                    <h2>{"Contact"}</h2>
                    <ContactAnimation url={config.contact_animation_url.clone()} />
                    <p>
                        {"Have a project in mind? "}
                        <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                    </p>
                </section>
            </main>

            <footer class="site-footer">
                <p>{format!("© {OWNER_NAME}")}</p>
            </footer>

            <ScrollTopButton visible={*scroll_top_visible} reset_ms={config.rocket_reset_ms} />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::site_config() {
        Ok(config) => (config, None),
        Err(error) => (SiteConfig::default(), Some(error)),
    };

    let level = config.log_level.to_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    if let Some(error) = config_error {
        log::warn!("ignoring site config: {error}");
    }
    log::info!("starting portfolio page");

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
