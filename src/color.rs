//! Brand-color helpers for skill badge hover styling.

use crate::error::PageError;

pub const BRANDED_CLASS: &str = "is-branded";
const SHADOW_ALPHA: f64 = 0.2;

/// Converts `#rrggbb` into an `rgba(r,g,b,alpha)` string.
///
/// The first three pairs of word characters are read as hex bytes, so the
/// leading `#` is optional.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String, PageError> {
    let invalid = || PageError::InvalidColor(hex.to_string());

    let digits: Vec<char> = hex
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let mut channels = digits.chunks_exact(2).take(3).map(|pair| {
        let pair: String = pair.iter().collect();
        u8::from_str_radix(&pair, 16).map_err(|_| invalid())
    });

    let (Some(r), Some(g), Some(b)) = (channels.next(), channels.next(), channels.next()) else {
        return Err(invalid());
    };

    Ok(format!("rgba({},{},{},{alpha})", r?, g?, b?))
}

/// Inline custom properties that let the stylesheet paint a hovered badge
/// in its brand color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    color: String,
    shadow: String,
}

impl BadgeStyle {
    pub fn for_brand(color: &str) -> Result<Self, PageError> {
        let tint = hex_to_rgba(color, SHADOW_ALPHA)?;

        Ok(Self {
            color: color.to_string(),
            shadow: format!("0 10px 20px {tint}"),
        })
    }

    pub fn css_vars(&self) -> String {
        format!("--brand-color: {}; --brand-shadow: {};", self.color, self.shadow)
    }
}
