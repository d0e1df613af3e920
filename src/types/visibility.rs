use std::fmt;

/// The unit a reported visibility distance is expressed in.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityUnit {
    /// Statute miles, used in North American reports.
    StatuteMiles,
    /// Metres, used everywhere else.
    Metres,
}

/// Prevailing horizontal visibility.
///
/// `distance_value` is always populated, including for `CAVOK` (where it is
/// implicitly "at least 10km" but the unit is not reported — `unit` is then
/// `Metres` and `distance_value` is `10000.0` by convention, matching the
/// CAVOK definition in the glossary).
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    /// The numeric distance, in `unit`. Fractional for US statute-mile
    /// reports (`1 1/2SM` decodes to `1.5`).
    pub distance_value: f32,
    /// The unit `distance_value` is expressed in.
    pub unit: VisibilityUnit,
    /// Set when the report used a `P`/`M` (greater/less-than) prefix.
    pub less_than: bool,
    /// See `less_than`.
    pub greater_than: bool,
    /// True for the `CAVOK` token (ceiling and visibility OK).
    pub is_cavok: bool,
    /// A non-numeric special condition, e.g. `"NDV"` (no directional
    /// variation) or the raw token when visibility was reported as `////`.
    pub special_condition: Option<String>,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cavok {
            return f.write_str("CAVOK");
        }
        if let Some(cond) = &self.special_condition {
            return f.write_str(cond);
        }
        if self.greater_than {
            f.write_str("P")?;
        } else if self.less_than {
            f.write_str("M")?;
        }
        match self.unit {
            VisibilityUnit::Metres => write!(f, "{:04}", self.distance_value as u32),
            VisibilityUnit::StatuteMiles => write!(f, "{}SM", self.distance_value),
        }
    }
}
