use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom;
use crate::{
    color::{BadgeStyle, BRANDED_CLASS},
    skills::skill_details_url,
};

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub icon: AttrValue,
    pub summary: AttrValue,
    pub details_page: AttrValue,
}

#[function_component(SkillCardView)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let onclick = {
        let url = skill_details_url(&props.details_page, &props.id);
        Callback::from(move |_: MouseEvent| {
            if let Err(error) = dom::navigate_to(&url) {
                log::warn!("could not open {url}: {error}");
            }
        })
    };

    html! {
        <div class="skill-card" data-skill={props.id.clone()} onclick={onclick}>
            <i class={classes!("fas", props.icon.to_string())} aria-hidden="true"></i>
            <h3>{props.name.clone()}</h3>
            <p>{props.summary.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBadgeProps {
    pub name: AttrValue,
    pub brand_color: AttrValue,
}

/// A badge that takes on its brand color while hovered.
#[function_component(SkillBadgeView)]
pub fn skill_badge(props: &SkillBadgeProps) -> Html {
    let hovered = use_state_eq(|| false);
    let style = use_memo(props.brand_color.clone(), |color| {
        BadgeStyle::for_brand(color)
            .map_err(|error| log::warn!("badge stays unbranded: {error}"))
            .ok()
    });

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let branded = *hovered && style.is_some();
    let css_vars = (*style).as_ref().map(|style| AttrValue::from(style.css_vars()));

    html! {
        <div
            class={classes!("skill-badge", branded.then_some(BRANDED_CLASS))}
            data-brand-color={props.brand_color.clone()}
            style={css_vars}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <span>{props.name.clone()}</span>
        </div>
    }
}
