use serde::Deserialize;

use crate::tonemap::{Clamp, Tonemapper};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum TonemapSettings {
    // clamp all colors to 0 to 1, multiplying by 10^exposure beforehand (exposure defaults to 0, not changing anything)
    Clamp { exposure: Option<f32> },
}

impl Default for TonemapSettings {
    fn default() -> Self {
        TonemapSettings::Clamp { exposure: None }
    }
}

pub fn parse_tonemapper(settings: TonemapSettings) -> Box<dyn Tonemapper> {
    match settings {
        TonemapSettings::Clamp { exposure } => Box::new(Clamp::new(exposure.unwrap_or(0.0))),
    }
}
