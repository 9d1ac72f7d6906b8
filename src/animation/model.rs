use std::collections::BTreeMap;

use crate::animation::ease::Ease;

/// Animation variants in the per-shape state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// Visibility toggle on.
    Appear,
    /// Directional clip reveal from the nearest stage edge.
    Enter,
    /// Directional clip hide toward the nearest stage edge.
    Exit,
    /// Visibility toggle off; always last.
    Disappear,
    /// Geometry and fill interpolation from the matched predecessor.
    Morph,
    /// Visibility toggle on for a morph target.
    MorphAppear,
}

impl AnimationKind {
    /// True for the near-zero-duration visibility toggles.
    pub fn is_toggle(self) -> bool {
        matches!(self, Self::Appear | Self::MorphAppear | Self::Disappear)
    }
}

/// Property addressed on a group or content handle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    /// Opacity.
    Opacity,
    /// Group x position.
    X,
    /// Group y position.
    Y,
    /// Clip rectangle left, local to the group.
    ClipX,
    /// Clip rectangle top, local to the group.
    ClipY,
    /// Clip rectangle width.
    ClipWidth,
    /// Clip rectangle height.
    ClipHeight,
    /// Content width.
    Width,
    /// Content height.
    Height,
    /// Content fill color.
    Fill,
}

/// Target value for a [`Property`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Numeric property.
    Number(f64),
    /// String property such as a color.
    Text(String),
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Property name to value.
pub type PropertyMap = BTreeMap<Property, PropertyValue>;

/// Start and end values for one handle. Missing ends mean "current value".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTween {
    /// Values at the start of the animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<PropertyMap>,
    /// Values at the end of the animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<PropertyMap>,
}

impl PropertyTween {
    /// Tween between two maps.
    pub fn between(from: PropertyMap, to: PropertyMap) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Start value for `prop`.
    pub fn from_value(&self, prop: Property) -> Option<&PropertyValue> {
        self.from.as_ref()?.get(&prop)
    }

    /// End value for `prop`.
    pub fn to_value(&self, prop: Property) -> Option<&PropertyValue> {
        self.to.as_ref()?.get(&prop)
    }
}

/// An animation whose variant and payload are decided but which is not yet on the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationStep {
    /// Variant.
    pub kind: AnimationKind,
    /// Seconds.
    pub duration: f64,
    /// Curve for the tween engine.
    pub ease: Ease,
    /// Position/clip/visibility payload.
    pub group: Option<PropertyTween>,
    /// Intrinsic size/fill payload (morph only).
    pub node: Option<PropertyTween>,
}

impl AnimationStep {
    /// Place this step on the clock.
    pub fn at(&self, start_time: f64) -> Animation {
        Animation {
            kind: self.kind,
            duration: self.duration,
            start_time,
            ease: self.ease,
            group_animation: self.group.clone(),
            node_animation: self.node.clone(),
        }
    }
}

/// A scheduled animation, the unit the playback layer consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// Variant.
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Seconds.
    pub duration: f64,
    /// Absolute clock time in seconds.
    pub start_time: f64,
    /// Curve for the tween engine.
    #[serde(default)]
    pub ease: Ease,
    /// Group-handle tween.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_animation: Option<PropertyTween>,
    /// Content-handle tween.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_animation: Option<PropertyTween>,
}

impl Animation {
    /// Clock time at which the animation completes.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Eased progress in `[0, 1]` at clock time `t`.
    pub fn progress_at(&self, t: f64) -> f64 {
        if t <= self.start_time {
            return 0.0;
        }
        if self.duration <= 0.0 || t >= self.end_time() {
            return 1.0;
        }
        self.ease.apply((t - self.start_time) / self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/model.rs"]
mod tests;
