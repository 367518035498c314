//! particles.js configuration for the page background.
//!
//! Everything is fixed except the accent color, which follows the theme.

use serde::Serialize;

use crate::theme::Theme;

pub const PARTICLE_COUNT: u32 = 80;
pub const LINK_DISTANCE: u32 = 150;
pub const MOVE_SPEED: u32 = 2;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticlesConfig {
    particles: Particles,
    interactivity: Interactivity,
    retina_detect: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Particles {
    number: Number,
    color: ColorValue,
    shape: Shape,
    opacity: Opacity,
    size: Size,
    line_linked: LineLinked,
    #[serde(rename = "move")]
    movement: Movement,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Number {
    value: u32,
    density: Density,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Density {
    enable: bool,
    value_area: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct ColorValue {
    value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Shape {
    #[serde(rename = "type")]
    kind: &'static str,
    stroke: Stroke,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Stroke {
    width: u32,
    color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Opacity {
    value: f64,
    random: bool,
    anim: OpacityAnim,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct OpacityAnim {
    enable: bool,
    speed: f64,
    opacity_min: f64,
    sync: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Size {
    value: f64,
    random: bool,
    anim: SizeAnim,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct SizeAnim {
    enable: bool,
    speed: f64,
    size_min: f64,
    sync: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct LineLinked {
    enable: bool,
    distance: u32,
    color: String,
    opacity: f64,
    width: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Movement {
    enable: bool,
    speed: u32,
    direction: &'static str,
    random: bool,
    straight: bool,
    out_mode: &'static str,
    bounce: bool,
    attract: Attract,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Attract {
    enable: bool,
    #[serde(rename = "rotateX")]
    rotate_x: u32,
    #[serde(rename = "rotateY")]
    rotate_y: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Interactivity {
    detect_on: &'static str,
    events: Events,
    modes: Modes,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Events {
    onhover: EventMode,
    onclick: EventMode,
    resize: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct EventMode {
    enable: bool,
    mode: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Modes {
    grab: Grab,
    push: Push,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Grab {
    distance: u32,
    line_linked: GrabLine,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct GrabLine {
    opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Push {
    particles_nb: u32,
}

impl ParticlesConfig {
    pub fn for_theme(theme: Theme) -> Self {
        Self::with_accent(theme.accent_color())
    }

    pub fn with_accent(accent: &str) -> Self {
        Self {
            particles: Particles {
                number: Number {
                    value: PARTICLE_COUNT,
                    density: Density {
                        enable: true,
                        value_area: 800,
                    },
                },
                color: ColorValue {
                    value: accent.to_string(),
                },
                shape: Shape {
                    kind: "circle",
                    stroke: Stroke {
                        width: 0,
                        color: "#000000",
                    },
                },
                opacity: Opacity {
                    value: 0.5,
                    random: false,
                    anim: OpacityAnim {
                        enable: false,
                        speed: 1.0,
                        opacity_min: 0.1,
                        sync: false,
                    },
                },
                size: Size {
                    value: 3.0,
                    random: true,
                    anim: SizeAnim {
                        enable: false,
                        speed: 40.0,
                        size_min: 0.1,
                        sync: false,
                    },
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: LINK_DISTANCE,
                    color: accent.to_string(),
                    opacity: 0.4,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: MOVE_SPEED,
                    direction: "none",
                    random: false,
                    straight: false,
                    out_mode: "out",
                    bounce: false,
                    attract: Attract {
                        enable: false,
                        rotate_x: 600,
                        rotate_y: 1200,
                    },
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas",
                events: Events {
                    onhover: EventMode {
                        enable: true,
                        mode: "grab",
                    },
                    onclick: EventMode {
                        enable: true,
                        mode: "push",
                    },
                    resize: true,
                },
                modes: Modes {
                    grab: Grab {
                        distance: 140,
                        line_linked: GrabLine { opacity: 1.0 },
                    },
                    push: Push { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }

    pub fn accent(&self) -> &str {
        &self.particles.color.value
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
