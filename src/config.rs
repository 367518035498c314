//! Page settings, optionally overridden by a JSON block in `index.html`.
//!
//! Every field falls back to its default when missing, blank or out of
//! bounds, so a broken override never disables a feature.

use log::LevelFilter;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::PageError, scroll::ScrollThresholds};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_SCROLL_TOP_THRESHOLD: f64 = 300.0;
const DEFAULT_NAVBAR_SCROLLED_THRESHOLD: f64 = 50.0;
const DEFAULT_SECTION_ACTIVATION_LEAD: f64 = 200.0;
const DEFAULT_HEADER_OFFSET: f64 = 70.0;
const DEFAULT_DETAILS_PAGE: &str = "skill-details.html";
const DEFAULT_PARTICLES_MOUNT_ID: &str = "particles-js";
const DEFAULT_PARTICLES_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js";
const DEFAULT_CONTACT_ANIMATION_URL: &str =
    "https://assets1.lottiefiles.com/packages/lf20_puciaact.json";
const DEFAULT_ROCKET_RESET_MS: u32 = 1_000;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const PIXEL_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const ROCKET_RESET_MS_BOUNDS: (u64, u64) = (0, 10_000);

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub scroll_top_threshold: f64,
    pub navbar_scrolled_threshold: f64,
    pub section_activation_lead: f64,
    pub header_offset: f64,
    pub details_page: String,
    pub particles_mount_id: String,
    pub particles_script_url: String,
    pub contact_animation_url: String,
    pub rocket_reset_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            scroll_top_threshold: DEFAULT_SCROLL_TOP_THRESHOLD,
            navbar_scrolled_threshold: DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
            section_activation_lead: DEFAULT_SECTION_ACTIVATION_LEAD,
            header_offset: DEFAULT_HEADER_OFFSET,
            details_page: DEFAULT_DETAILS_PAGE.to_string(),
            particles_mount_id: DEFAULT_PARTICLES_MOUNT_ID.to_string(),
            particles_script_url: DEFAULT_PARTICLES_SCRIPT_URL.to_string(),
            contact_animation_url: DEFAULT_CONTACT_ANIMATION_URL.to_string(),
            rocket_reset_ms: DEFAULT_ROCKET_RESET_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Fields stay untyped so one bad value only costs that field its override.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSiteConfig {
    theme_storage_key: Option<Value>,
    scroll_top_threshold: Option<Value>,
    navbar_scrolled_threshold: Option<Value>,
    section_activation_lead: Option<Value>,
    header_offset: Option<Value>,
    details_page: Option<Value>,
    particles_mount_id: Option<Value>,
    particles_script_url: Option<Value>,
    contact_animation_url: Option<Value>,
    rocket_reset_ms: Option<Value>,
    log_level: Option<Value>,
}

impl SiteConfig {
    /// Parses an override block. Malformed JSON is an error; the caller is
    /// expected to log it and use [`SiteConfig::default`]. Individual fields
    /// that are mistyped or out of bounds keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawSiteConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawSiteConfig) -> Self {
        Self {
            theme_storage_key: non_empty_or(raw.theme_storage_key, DEFAULT_THEME_STORAGE_KEY),
            scroll_top_threshold: pixels_or(raw.scroll_top_threshold, DEFAULT_SCROLL_TOP_THRESHOLD),
            navbar_scrolled_threshold: pixels_or(
                raw.navbar_scrolled_threshold,
                DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
            ),
            section_activation_lead: pixels_or(
                raw.section_activation_lead,
                DEFAULT_SECTION_ACTIVATION_LEAD,
            ),
            header_offset: pixels_or(raw.header_offset, DEFAULT_HEADER_OFFSET),
            details_page: non_empty_or(raw.details_page, DEFAULT_DETAILS_PAGE),
            particles_mount_id: non_empty_or(raw.particles_mount_id, DEFAULT_PARTICLES_MOUNT_ID),
            particles_script_url: non_empty_or(
                raw.particles_script_url,
                DEFAULT_PARTICLES_SCRIPT_URL,
            ),
            contact_animation_url: non_empty_or(
                raw.contact_animation_url,
                DEFAULT_CONTACT_ANIMATION_URL,
            ),
            rocket_reset_ms: millis_or(raw.rocket_reset_ms, DEFAULT_ROCKET_RESET_MS),
            log_level: parse_log_level(
                raw.log_level.as_ref().and_then(Value::as_str),
                DEFAULT_LOG_LEVEL,
            ),
        }
    }

    pub fn scroll_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            scroll_top: self.scroll_top_threshold,
            navbar: self.navbar_scrolled_threshold,
            section_lead: self.section_activation_lead,
        }
    }
}

fn non_empty_or(value: Option<Value>, default: &str) -> String {
    value
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn pixels_or(value: Option<Value>, default: f64) -> f64 {
    value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|value| (PIXEL_BOUNDS.0..=PIXEL_BOUNDS.1).contains(value))
        .unwrap_or(default)
}

fn millis_or(value: Option<Value>, default: u32) -> u32 {
    value
        .as_ref()
        .and_then(Value::as_u64)
        .filter(|value| (ROCKET_RESET_MS_BOUNDS.0..=ROCKET_RESET_MS_BOUNDS.1).contains(value))
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => default,
    }
}
