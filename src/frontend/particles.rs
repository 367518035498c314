//! Drives particles.js: loads it on first use, then starts or recolors the
//! background.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

use super::dom;
use crate::{
    config::SiteConfig,
    error::PageError,
    particles::ParticlesConfig,
    resource::{Acquire, LazyResource},
    theme::Theme,
};

pub struct ParticleRenderer {
    mount_id: String,
    script_url: String,
    library: Rc<RefCell<LazyResource<Theme>>>,
}

impl ParticleRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            mount_id: config.particles_mount_id.clone(),
            script_url: config.particles_script_url.clone(),
            library: Rc::new(RefCell::new(LazyResource::new())),
        }
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Starts the background in `theme`. Does nothing without a mount point.
    pub fn init(&self, theme: Theme) {
        if let Err(error) = self.try_init(theme) {
            log::warn!("particle background skipped: {error}");
        }
    }

    /// Recolors the running background, or starts a fresh one when no live
    /// instance exists yet.
    pub fn update_color(&self, theme: Theme) {
        let recolored = live_instance().and_then(|instance| recolor(&instance, theme.accent_color()));

        match recolored {
            Ok(()) => log::debug!("particle colors refreshed to {}", theme.accent_color()),
            Err(error) => {
                let library = self.library.borrow();
                if library.is_loading() {
                    log::debug!("particles.js still loading; queueing {} theme", theme.as_str());
                } else if library.is_ready() {
                    log::debug!("reinitializing particles: {error}");
                }
                drop(library);
                self.init(theme);
            }
        }
    }

    fn try_init(&self, theme: Theme) -> Result<(), PageError> {
        let document = dom::document()?;
        if document.get_element_by_id(&self.mount_id).is_none() {
            return Ok(());
        }

        let acquired = self.library.borrow_mut().acquire(theme);
        match acquired {
            Acquire::Load => self.load_library(&document),
            Acquire::Queued => Ok(()),
            Acquire::Ready(theme) => start(&self.mount_id, theme),
        }
    }

    fn load_library(&self, document: &Document) -> Result<(), PageError> {
        let script: HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| PageError::Js("created element is not a script".to_string()))?;
        script.set_src(&self.script_url);

        let library = Rc::clone(&self.library);
        let mount_id = self.mount_id.clone();
        let onload = Closure::once_into_js(move || {
            let pending = library.borrow_mut().finish();
            log::debug!("particles.js loaded with {} pending start(s)", pending.len());

            for theme in pending {
                if let Err(error) = start(&mount_id, theme) {
                    log::warn!("particle background failed to start: {error}");
                }
            }
        });

        let script_url = self.script_url.clone();
        let onerror = Closure::once_into_js(move || {
            log::warn!("could not load {script_url}; particle background disabled");
        });

        script.set_onload(Some(onload.unchecked_ref()));
        script.set_onerror(Some(onerror.unchecked_ref()));

        document
            .head()
            .ok_or_else(|| PageError::MissingElement("head".to_string()))?
            .append_child(&script)?;
        log::debug!("loading {}", self.script_url);
        Ok(())
    }
}

fn start(mount_id: &str, theme: Theme) -> Result<(), PageError> {
    let particles_js: Function = dom::global("particlesJS")?
        .dyn_into()
        .map_err(|_| PageError::MissingGlobal("particlesJS"))?;
    let options = ParticlesConfig::for_theme(theme);
    let config = JSON::parse(&options.to_json()?)?;
    log::debug!("starting particles in {}", options.accent());

    particles_js.call2(&JsValue::NULL, &JsValue::from_str(mount_id), &config)?;
    Ok(())
}

/// `pJSDom[last].pJS`, the most recently started instance.
fn live_instance() -> Result<JsValue, PageError> {
    let instances: Array = dom::global("pJSDom")?
        .dyn_into()
        .map_err(|_| PageError::MissingGlobal("pJSDom"))?;
    let last = instances
        .length()
        .checked_sub(1)
        .ok_or(PageError::MissingGlobal("pJSDom"))?;

    let instance = property(&instances.get(last), "pJS")?;
    if instance.is_object() {
        Ok(instance)
    } else {
        Err(PageError::MissingGlobal("pJSDom"))
    }
}

fn recolor(instance: &JsValue, accent: &str) -> Result<(), PageError> {
    let accent = JsValue::from_str(accent);
    let particles = property(instance, "particles")?;

    Reflect::set(&property(&particles, "color")?, &JsValue::from_str("value"), &accent)?;

    let line_linked = property(&particles, "line_linked")?;
    if line_linked.is_object() {
        Reflect::set(&line_linked, &JsValue::from_str("color"), &accent)?;
    }

    let refresh: Function = property(&property(instance, "fn")?, "particlesRefresh")?
        .dyn_into()
        .map_err(|_| PageError::Js("pJS.fn.particlesRefresh is not a function".to_string()))?;
    refresh.call0(instance)?;
    Ok(())
}

fn property(target: &JsValue, key: &str) -> Result<JsValue, PageError> {
    Ok(Reflect::get(target, &JsValue::from_str(key))?)
}
