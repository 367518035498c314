use gloo_net::http::Request;
use js_sys::{Function, Object, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};

use super::dom;
use crate::error::PageError;

pub const CONTACT_ANIMATION_ID: &str = "lottie-contact";

/// Fetches the animation definition at `url` and plays it, looping, inside
/// the element with `container_id`.
pub async fn play_animation(container_id: &str, url: &str) -> Result<(), PageError> {
    let container = dom::document()?
        .get_element_by_id(container_id)
        .ok_or_else(|| PageError::MissingElement(container_id.to_string()))?;
    let lottie = dom::global("lottie")?;
    let load_animation: Function = Reflect::get(&lottie, &JsValue::from_str("loadAnimation"))?
        .dyn_into()
        .map_err(|_| PageError::MissingGlobal("lottie"))?;

    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(PageError::Fetch(format!(
            "{url} answered {}",
            response.status()
        )));
    }
    let animation_data = JSON::parse(&response.text().await?)?;

    let options = Object::new();
    for (key, value) in [
        ("container", JsValue::from(container)),
        ("renderer", JsValue::from_str("svg")),
        ("loop", JsValue::TRUE),
        ("autoplay", JsValue::TRUE),
        ("animationData", animation_data),
    ] {
        Reflect::set(&options, &JsValue::from_str(key), &value)?;
    }

    load_animation.call1(&lottie, &options)?;
    Ok(())
}
