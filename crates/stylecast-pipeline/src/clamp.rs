//! Responsive size math.
//!
//! A [`ClampSize`] describes a pixel-based size as one to three
//! elements: a minimum, an optional maximum, and an optional viewport
//! range. A single value converts straight to rem; a pair becomes a
//! CSS `clamp()` expression that interpolates linearly between the two
//! across the viewport range (default 768px to 1024px, against a 16px
//! root font size).

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Root font size assumed when converting px to rem.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Viewport range used when a size omits its own.
pub const DEFAULT_VIEWPORT: (f64, f64) = (768.0, 1024.0);

/// A pixel-based size description: `[min]`, `[min, max]` or
/// `[min, max, [vMin, vMax]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampSize {
    pub min: f64,
    pub max: Option<f64>,
    pub viewport: Option<(f64, f64)>,
}

impl ClampSize {
    /// A fixed, non-responsive size.
    pub fn fixed(min: f64) -> Self {
        Self {
            min,
            max: None,
            viewport: None,
        }
    }

    /// A size interpolating between `min` and `max` over the default
    /// viewport range.
    pub fn fluid(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            viewport: None,
        }
    }

    /// Overrides the viewport range, returning `self` for chaining.
    pub fn with_viewport(mut self, v_min: f64, v_max: f64) -> Self {
        self.viewport = Some((v_min, v_max));
        self
    }

    /// Parses a size from a raw JSON value (a 1-3 element array).
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }
}

impl<'de> Deserialize<'de> for ClampSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClampSizeVisitor;

        impl<'de> Visitor<'de> for ClampSizeVisitor {
            type Value = ClampSize;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a size array of one to three elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<ClampSize, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let min: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let max: Option<f64> = seq.next_element()?;
                let viewport: Option<(f64, f64)> = seq.next_element()?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "size arrays take at most three elements",
                    ));
                }
                Ok(ClampSize { min, max, viewport })
            }
        }

        deserializer.deserialize_seq(ClampSizeVisitor)
    }
}

/// Error raised when clamp math cannot produce a finite expression.
#[derive(Debug, Error, PartialEq)]
pub enum ClampError {
    /// The viewport minimum and maximum coincide, so the slope of the
    /// interpolation is undefined.
    #[error("viewport range {0}px..{1}px is empty")]
    EmptyViewportRange(f64, f64),
}

/// A resolved size: either unitless zero or a CSS expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SizeValue {
    /// Pixel zero passes through without a unit.
    #[default]
    Zero,
    /// A rem literal or `clamp()` expression.
    Css(String),
}

impl SizeValue {
    /// The value as a custom-property token. Zero gains its unit back
    /// here, since token consumers expect a length.
    pub fn into_token(self) -> String {
        match self {
            SizeValue::Zero => "0rem".to_string(),
            SizeValue::Css(expr) => expr,
        }
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValue::Zero => f.write_str("0"),
            SizeValue::Css(expr) => f.write_str(expr),
        }
    }
}

/// Converts pixels to rem, rounded to four decimals.
pub fn px_to_rem(px: f64) -> f64 {
    round4(px / ROOT_FONT_SIZE)
}

/// Converts pixels to a rem CSS value; zero stays unitless.
pub fn px_to_rem_css(px: f64) -> SizeValue {
    if px == 0.0 {
        SizeValue::Zero
    } else {
        SizeValue::Css(format!("{}rem", px_to_rem(px)))
    }
}

/// Resolves a [`ClampSize`] into a fixed value or a `clamp()` expression.
///
/// A single-element size converts straight to rem with no responsive
/// behavior. Otherwise the result is
/// `clamp(minRem, yIntercept + slope·100vw, maxRem)` where the slope
/// is computed over the viewport range. A size whose min and max
/// coincide still produces a (degenerate) clamp expression; that is
/// deliberate pass-through, not an optimization.
pub fn clamp(size: &ClampSize) -> Result<SizeValue, ClampError> {
    let Some(max) = size.max else {
        return Ok(px_to_rem_css(size.min));
    };

    let (v_min, v_max) = size.viewport.unwrap_or(DEFAULT_VIEWPORT);
    if v_min == v_max {
        return Err(ClampError::EmptyViewportRange(v_min, v_max));
    }

    let min_rem = px_to_rem(size.min);
    let max_rem = px_to_rem(max);

    let slope = (max_rem - min_rem) / (v_max - v_min);
    let y_intercept = -v_min * slope + min_rem;
    // 16 converts the rem-per-px slope back to px terms, 100 scales to vw.
    let vw_coefficient = slope * ROOT_FONT_SIZE * 100.0;

    Ok(SizeValue::Css(format!(
        "clamp({}rem, {}rem + {}vw, {}rem)",
        min_rem, y_intercept, vw_coefficient, max_rem
    )))
}

fn round4(n: f64) -> f64 {
    (n * 10_000.0).round() / 10_000.0
}
