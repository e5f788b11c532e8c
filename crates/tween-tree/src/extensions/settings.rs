// extensions/settings.rs
//
// Data-driven tween timing. Hosts keep durations, delays and eases in JSON
// so designers can retune animations without touching code.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::composites::{Composite, Sequence};
use crate::core::{BoxedTween, Ease, Tween, TweenError};
use crate::leaves::WaitSeconds;

/// Timing for one value tween.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TweenSettings {
    /// Seconds from start to target.
    pub duration: f32,
    /// Easing curve (default: Linear).
    #[serde(default)]
    pub ease: Ease,
    /// Seconds to wait before starting (default: 0).
    #[serde(default)]
    pub delay: f32,
}

impl TweenSettings {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wrap `tween` so it starts after the configured delay.
    pub fn build(&self, tween: impl Tween + 'static) -> BoxedTween {
        if self.delay > 0.0 {
            Box::new(
                Sequence::new()
                    .with(WaitSeconds::new(self.delay))
                    .with(tween),
            )
        } else {
            Box::new(tween)
        }
    }
}

/// Named tween settings, e.g. one entry per UI transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TweenProfile {
    #[serde(default)]
    pub tweens: HashMap<String, TweenSettings>,
}

impl TweenProfile {
    /// Parse a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, name: &str) -> Option<&TweenSettings> {
        self.tweens.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweenable::Tweenable;

    #[test]
    fn parse_settings_with_defaults() {
        let s = TweenSettings::from_json(r#"{ "duration": 0.5 }"#).unwrap();
        assert_eq!(s.duration, 0.5);
        assert_eq!(s.ease, Ease::Linear);
        assert_eq!(s.delay, 0.0);
    }

    #[test]
    fn parse_profile() {
        let json = r#"{
            "tweens": {
                "fade_in": { "duration": 0.3, "ease": "SineFastSlow" },
                "slide": { "duration": 1.0, "ease": "QuadSlowFast", "delay": 0.25 }
            }
        }"#;
        let profile = TweenProfile::from_json(json).unwrap();
        assert_eq!(profile.tweens.len(), 2);
        assert_eq!(profile.get("fade_in").unwrap().ease, Ease::SineFastSlow);
        assert_eq!(profile.get("slide").unwrap().delay, 0.25);
        assert!(profile.get("missing").is_none());
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = TweenSettings::from_json(r#"{ "ease": "Linear" }"#);
        assert!(matches!(err, Err(TweenError::Settings(_))));
    }

    #[test]
    fn delay_precedes_the_tween() {
        let v = Tweenable::new(0.0f32);
        let settings = TweenSettings::new(1.0, Ease::Linear).with_delay(0.5);
        let mut t = v.tween(10.0, &settings);

        assert_eq!(t.total_duration().duration(), 1.5);
        t.update(0.5);
        assert_eq!(v.value(), 0.0);
        t.update(0.5);
        assert!((v.value() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn no_delay_builds_plain_tween() {
        let v = Tweenable::new(0.0f32);
        let mut t = v.tween(4.0, &TweenSettings::new(2.0, Ease::Linear));
        assert_eq!(t.total_duration().duration(), 2.0);
        t.update(1.0);
        assert!((v.value() - 2.0).abs() < 1e-4);
    }
}
