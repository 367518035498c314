use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::{
    dom::{self, EventListener},
    lottie::{self, CONTACT_ANIMATION_ID},
    particles::ParticleRenderer,
};
use crate::{
    lockout::{is_devtools_shortcut, KeyChord},
    theme::Theme,
};

#[derive(Properties, PartialEq)]
pub struct ScrollTopProps {
    pub visible: bool,
    pub reset_ms: u32,
}

/// Scroll-to-top control that plays a short launch animation on click.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopProps) -> Html {
    let launching = use_state_eq(|| false);

    let onclick = {
        let launching = launching.clone();
        let reset_ms = props.reset_ms;
        Callback::from(move |_: MouseEvent| {
            launching.set(true);
            if let Err(error) = dom::smooth_scroll_to(0.0) {
                log::warn!("could not scroll to top: {error}");
            }

            let launching = launching.clone();
            Timeout::new(reset_ms, move || launching.set(false)).forget();
        })
    };

    html! {
        <button
            class={classes!(
                "scroll-top",
                props.visible.then_some("active"),
                launching.then_some("launch")
            )}
            type="button"
            aria-label="Back to top"
            onclick={onclick}
        >
            <i class="fas fa-rocket" aria-hidden="true"></i>
        </button>
    }
}

#[derive(Properties)]
pub struct ParticlesBackgroundProps {
    pub renderer: Rc<ParticleRenderer>,
    pub theme: Theme,
}

impl PartialEq for ParticlesBackgroundProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.renderer, &other.renderer) && self.theme == other.theme
    }
}

/// Mount point for the particle canvas. Starts the renderer once mounted;
/// later theme changes reach the renderer through the toggle.
#[function_component(ParticlesBackground)]
pub fn particles_background(props: &ParticlesBackgroundProps) -> Html {
    {
        let renderer = Rc::clone(&props.renderer);
        let theme = props.theme;
        use_effect_with((), move |_| {
            renderer.init(theme);
            || ()
        });
    }

    html! {
        <div id={props.renderer.mount_id().to_string()} class="particles-bg" aria-hidden="true"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactAnimationProps {
    pub url: AttrValue,
}

#[function_component(ContactAnimation)]
pub fn contact_animation(props: &ContactAnimationProps) -> Html {
    {
        let url = props.url.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(error) = lottie::play_animation(CONTACT_ANIMATION_ID, &url).await {
                    log::warn!("contact animation skipped: {error}");
                }
            });
            || ()
        });
    }

    html! {
        <div id={CONTACT_ANIMATION_ID} class="contact-animation" aria-hidden="true"></div>
    }
}

/// Blocks the context menu and the usual developer-tools shortcuts.
#[function_component(InputLockout)]
pub fn input_lockout() -> Html {
    use_effect_with((), |_| {
        let context_menu = EventListener::on_document("contextmenu", |event: Event| {
            event.prevent_default();
        });

        let keydown = EventListener::on_document("keydown", |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let code = event.code();
            let chord = KeyChord::new(&code, event.ctrl_key(), event.shift_key());

            if is_devtools_shortcut(chord) {
                event.prevent_default();
            }
        });

        let listeners: Vec<EventListener> = [context_menu, keydown]
            .into_iter()
            .filter_map(|listener| {
                listener
                    .map_err(|error| log::warn!("input lockout unavailable: {error}"))
                    .ok()
            })
            .collect();

        move || drop(listeners)
    });

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::testing::{keydown, mount, mouse, settle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn lockout_cancels_devtools_chords_only() {
        let (handle, _host) = mount::<InputLockout>(());
        settle().await;

        assert!(keydown("F12", false, false));
        assert!(keydown("KeyI", true, true));
        assert!(keydown("KeyJ", true, true));
        assert!(keydown("KeyU", true, false));
        assert!(!keydown("KeyS", true, false));
        assert!(!keydown("KeyI", true, false));
        assert!(!keydown("KeyA", false, false));

        handle.destroy();
        settle().await;
        assert!(!keydown("F12", false, false));
    }

    #[wasm_bindgen_test]
    async fn lockout_cancels_context_menu() {
        let (handle, host) = mount::<InputLockout>(());
        settle().await;

        assert!(mouse(&host, "contextmenu"));

        handle.destroy();
    }
}
