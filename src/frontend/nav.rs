use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::{
    content::{NAV_ITEMS, OWNER_NAME},
    scroll::{is_active_link, resolve_fragment_click, FragmentClick},
    theme::Theme,
};

#[derive(Properties, PartialEq)]
pub struct FragmentLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub active: bool,
    pub header_offset: f64,
    /// Receives the target id after a successful in-page scroll.
    pub on_activate: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

/// An anchor that smooth-scrolls to in-page targets instead of jumping.
#[function_component(FragmentLink)]
pub fn fragment_link(props: &FragmentLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let header_offset = props.header_offset;
        let on_activate = props.on_activate.clone();
        Callback::from(move |event: MouseEvent| {
            match resolve_fragment_click(&href, dom::element_offset_top, header_offset) {
                FragmentClick::PassThrough => {}
                FragmentClick::Swallow => event.prevent_default(),
                FragmentClick::ScrollTo { id, top } => {
                    event.prevent_default();
                    if let Err(error) = dom::smooth_scroll_to(top) {
                        log::warn!("could not scroll to #{id}: {error}");
                    }
                    on_activate.emit(id.to_string());
                }
            }
        })
    };

    html! {
        <a
            href={props.href.clone()}
            class={classes!(props.class.clone(), props.active.then_some("active"))}
            onclick={onclick}
        >
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            onclick={onclick}
        >
            <i class={classes!("fas", props.theme.icon_class())} aria-hidden="true"></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub scrolled: bool,
    pub active_section: Option<String>,
    pub header_offset: f64,
    pub theme: Theme,
    pub on_toggle: Callback<()>,
    pub on_activate: Callback<String>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let current = props.active_section.as_deref();

    html! {
        <nav class={classes!("navbar", props.scrolled.then_some("scrolled"))}>
            <div class="nav-inner">
                <FragmentLink
                    href="#"
                    class={classes!("nav-brand")}
                    header_offset={props.header_offset}
                    on_activate={props.on_activate.clone()}
                >
                    {OWNER_NAME}
                </FragmentLink>
                <ul class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| {
                        let href = format!("#{}", item.section);
                        let active = is_active_link(&href, current);
                        html! {
                            <li key={item.section}>
                                <FragmentLink
                                    href={href}
                                    class={classes!("nav-link")}
                                    active={active}
                                    header_offset={props.header_offset}
                                    on_activate={props.on_activate.clone()}
                                >
                                    {item.label}
                                </FragmentLink>
                            </li>
                        }
                    }) }
                </ul>
                <ThemeToggle theme={props.theme} on_toggle={props.on_toggle.clone()} />
            </div>
        </nav>
    }
}
