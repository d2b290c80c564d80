//! Inline style declarations written to the popover target.

use std::collections::{BTreeMap, btree_map::Iter};

use popover_geom::{HorizontalPoint, Offset, Origin, VerticalPoint, Viewport};
use serde::{Deserialize, Serialize};

/// A set of CSS-like `property: value` declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add or replace a declaration.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Add or replace a declaration.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Iterate declarations in property order.
    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Merge style layers; declarations in later layers win.
pub fn merge_styles(layers: &[&Style]) -> Style {
    let mut out = Style::new();
    for layer in layers {
        for (k, v) in *layer {
            out.set(k.clone(), v.clone());
        }
    }
    out
}

/// Final placement written to the target, in whole non-negative pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetStyle {
    /// Top offset.
    pub top: u32,
    /// Left offset.
    pub left: u32,
    /// Maximum height; the current viewport height.
    pub max_height: u32,
}

impl TargetStyle {
    /// Build the written placement from a resolved offset and viewport.
    ///
    /// Negative components clamp to zero before rounding.
    pub fn from_offset(offset: Offset, viewport: Viewport) -> Self {
        let offset = offset.clamped();
        Self {
            top: to_px(offset.top),
            left: to_px(offset.left),
            max_height: to_px(viewport.height),
        }
    }

    /// Rendered declarations (`top`, `left`, `max-height` as `"<n>px"`).
    pub fn declarations(&self) -> Style {
        Style::new()
            .with("top", format!("{}px", self.top))
            .with("left", format!("{}px", self.left))
            .with("max-height", format!("{}px", self.max_height))
    }
}

/// Round a non-negative pixel value to a whole pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(v: f64) -> u32 {
    v.max(0.0).round().min(f64::from(u32::MAX)) as u32
}

/// Compose the root style of the target: fixed positioning, then the caller's
/// style, then the current placement.
pub fn root_style(user: &Style, placement: Option<&TargetStyle>) -> Style {
    let base = Style::new().with("position", "fixed");
    let placed = placement.map(TargetStyle::declarations).unwrap_or_default();
    merge_styles(&[&base, user, &placed])
}

/// CSS transform origin (`"<x> <y>"`) for scaling the target in from its own
/// origin point.
pub fn transform_origin(origin: Origin) -> String {
    let x = match origin.horizontal {
        HorizontalPoint::Left => "left",
        HorizontalPoint::Middle => "center",
        HorizontalPoint::Right => "right",
    };
    let y = match origin.vertical {
        VerticalPoint::Top => "top",
        VerticalPoint::Center => "center",
        VerticalPoint::Bottom => "bottom",
    };
    format!("{x} {y}")
}
