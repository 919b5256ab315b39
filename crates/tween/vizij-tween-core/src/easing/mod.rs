//! Easing catalog.
//!
//! Curves are addressed by a typed `(EasingFamily, EasingVariant)` pair and
//! resolved through a table fixed at compile time. Resolution happens once,
//! up front; the per-frame path only calls through the stored fn pointer.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;
use crate::Result;

type CurveFn = fn(f64) -> f64;

/// Named curve family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EasingFamily {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sinusoidal,
    Exponential,
    Circular,
    Elastic,
    Back,
    Bounce,
}

impl EasingFamily {
    pub const ALL: [EasingFamily; 11] = [
        Self::Linear,
        Self::Quadratic,
        Self::Cubic,
        Self::Quartic,
        Self::Quintic,
        Self::Sinusoidal,
        Self::Exponential,
        Self::Circular,
        Self::Elastic,
        Self::Back,
        Self::Bounce,
    ];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Quadratic => "Quadratic",
            Self::Cubic => "Cubic",
            Self::Quartic => "Quartic",
            Self::Quintic => "Quintic",
            Self::Sinusoidal => "Sinusoidal",
            Self::Exponential => "Exponential",
            Self::Circular => "Circular",
            Self::Elastic => "Elastic",
            Self::Back => "Back",
            Self::Bounce => "Bounce",
        }
    }
}

/// Acceleration profile within a family.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EasingVariant {
    In,
    Out,
    InOut,
}

impl EasingVariant {
    pub const ALL: [EasingVariant; 3] = [Self::In, Self::Out, Self::InOut];

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "InOut",
        }
    }
}

/// Lowercase and drop `_`/`-` so "in_out", "InOut" and "inout" compare equal.
fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for EasingFamily {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self> {
        let folded = fold_name(s.trim());
        Self::ALL
            .into_iter()
            .find(|f| fold_name(f.name()) == folded)
            .ok_or_else(|| TweenError::unknown_curve(s, "*"))
    }
}

impl FromStr for EasingVariant {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self> {
        let folded = fold_name(s.trim());
        Self::ALL
            .into_iter()
            .find(|v| fold_name(v.name()) == folded)
            .ok_or_else(|| TweenError::unknown_curve("*", s))
    }
}

impl fmt::Display for EasingFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for EasingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rows follow `EasingFamily` declaration order, columns `EasingVariant`.
const TABLE: [[Option<CurveFn>; 3]; 11] = {
    use functions::*;
    [
        [None, None, Some(linear as CurveFn)],
        [
            Some(quadratic_in as CurveFn),
            Some(quadratic_out as CurveFn),
            Some(quadratic_in_out as CurveFn),
        ],
        [
            Some(cubic_in as CurveFn),
            Some(cubic_out as CurveFn),
            Some(cubic_in_out as CurveFn),
        ],
        [
            Some(quartic_in as CurveFn),
            Some(quartic_out as CurveFn),
            Some(quartic_in_out as CurveFn),
        ],
        [
            Some(quintic_in as CurveFn),
            Some(quintic_out as CurveFn),
            Some(quintic_in_out as CurveFn),
        ],
        [
            Some(sinusoidal_in as CurveFn),
            Some(sinusoidal_out as CurveFn),
            Some(sinusoidal_in_out as CurveFn),
        ],
        [
            Some(exponential_in as CurveFn),
            Some(exponential_out as CurveFn),
            Some(exponential_in_out as CurveFn),
        ],
        [
            Some(circular_in as CurveFn),
            Some(circular_out as CurveFn),
            Some(circular_in_out as CurveFn),
        ],
        [
            Some(elastic_in as CurveFn),
            Some(elastic_out as CurveFn),
            Some(elastic_in_out as CurveFn),
        ],
        [
            Some(back_in as CurveFn),
            Some(back_out as CurveFn),
            Some(back_in_out as CurveFn),
        ],
        [
            Some(bounce_in as CurveFn),
            Some(bounce_out as CurveFn),
            Some(bounce_in_out as CurveFn),
        ],
    ]
};

/// Serialized form of a curve selection: `{ "family": "Cubic", "variant": "Out" }`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CurveSelector {
    pub family: EasingFamily,
    pub variant: EasingVariant,
}

/// A resolved, registered easing curve.
///
/// Only the catalog hands these out, so holding one means the pair exists.
#[derive(Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurveSelector", into = "CurveSelector")]
pub struct EasingCurve {
    family: EasingFamily,
    variant: EasingVariant,
    func: CurveFn,
}

impl EasingCurve {
    /// Evaluate the curve. `phase` is passed through unclamped.
    #[inline]
    pub fn apply(&self, phase: f64) -> f64 {
        (self.func)(phase)
    }

    #[inline]
    pub fn family(&self) -> EasingFamily {
        self.family
    }

    #[inline]
    pub fn variant(&self) -> EasingVariant {
        self.variant
    }

    #[inline]
    pub fn selector(&self) -> CurveSelector {
        CurveSelector {
            family: self.family,
            variant: self.variant,
        }
    }
}

impl Default for EasingCurve {
    /// `Linear.InOut`
    fn default() -> Self {
        Self {
            family: EasingFamily::Linear,
            variant: EasingVariant::InOut,
            func: functions::linear,
        }
    }
}

impl PartialEq for EasingCurve {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family && self.variant == other.variant
    }
}

impl Eq for EasingCurve {}

impl fmt::Debug for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EasingCurve({}.{})", self.family, self.variant)
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family, self.variant)
    }
}

impl TryFrom<CurveSelector> for EasingCurve {
    type Error = TweenError;

    fn try_from(sel: CurveSelector) -> Result<Self> {
        EasingLibrary::lookup(sel.family, sel.variant)
    }
}

impl From<EasingCurve> for CurveSelector {
    fn from(curve: EasingCurve) -> Self {
        curve.selector()
    }
}

/// Immutable curve catalog shared by every tween.
#[derive(Debug, Default, Clone, Copy)]
pub struct EasingLibrary;

impl EasingLibrary {
    /// Resolve a typed pair. Fails with `UnknownCurve` for unregistered pairs
    /// (only `Linear.In` and `Linear.Out`).
    pub fn lookup(
        family: EasingFamily,
        variant: EasingVariant,
    ) -> Result<EasingCurve> {
        TABLE[family as usize][variant as usize]
            .map(|func| EasingCurve {
                family,
                variant,
                func,
            })
            .ok_or_else(|| TweenError::unknown_curve(family.name(), variant.name()))
    }

    /// Resolve by name, e.g. `("Quadratic", "InOut")`. Case-insensitive.
    pub fn lookup_by_name(family: &str, variant: &str) -> Result<EasingCurve> {
        let unknown = || TweenError::unknown_curve(family, variant);
        let fam: EasingFamily = family.parse().map_err(|_| unknown())?;
        let var: EasingVariant = variant.parse().map_err(|_| unknown())?;
        Self::lookup(fam, var)
    }

    /// Every registered curve, family-major.
    pub fn iter() -> impl Iterator<Item = EasingCurve> {
        EasingFamily::ALL.into_iter().flat_map(|family| {
            EasingVariant::ALL
                .into_iter()
                .filter_map(move |variant| Self::lookup(family, variant).ok())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_follow_family_order() {
        for family in EasingFamily::ALL {
            let curve = EasingLibrary::lookup(family, EasingVariant::InOut).unwrap();
            assert_eq!(curve.family(), family);
        }
        assert_eq!(EasingLibrary::iter().count(), 31);
    }

    #[test]
    fn linear_only_registers_in_out() {
        assert!(EasingLibrary::lookup(EasingFamily::Linear, EasingVariant::In).is_err());
        assert!(EasingLibrary::lookup(EasingFamily::Linear, EasingVariant::Out).is_err());
        assert_eq!(
            EasingLibrary::lookup(EasingFamily::Linear, EasingVariant::InOut).unwrap(),
            EasingCurve::default()
        );
    }

    #[test]
    fn names_parse_loosely() {
        assert_eq!("quadratic".parse::<EasingFamily>().unwrap(), EasingFamily::Quadratic);
        assert_eq!("in_out".parse::<EasingVariant>().unwrap(), EasingVariant::InOut);
        assert_eq!("InOut".parse::<EasingVariant>().unwrap(), EasingVariant::InOut);
        assert!("Wobble".parse::<EasingFamily>().is_err());
    }

    #[test]
    fn lookup_by_name_reports_both_parts() {
        let err = EasingLibrary::lookup_by_name("Wobble", "In").unwrap_err();
        assert_eq!(err, TweenError::unknown_curve("Wobble", "In"));
    }

    #[test]
    fn curve_serializes_as_selector() {
        let curve = EasingLibrary::lookup(EasingFamily::Back, EasingVariant::Out).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        assert_eq!(json, r#"{"family":"Back","variant":"Out"}"#);
        let back: EasingCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
        assert!(
            serde_json::from_str::<EasingCurve>(r#"{"family":"Linear","variant":"In"}"#).is_err()
        );
    }
}
