use std::fmt;

/// Whether runway visual range is trending up, down, or holding steady.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrTrend {
    /// `U` — upward tendency.
    Up,
    /// `D` — downward tendency.
    Down,
    /// `N` — no change.
    NoChange,
}

/// Runway Visual Range for a single runway.
///
/// Exactly one of `visual_range_feet`, `(variable_low, variable_high)`, or
/// `is_cleared` describes a given reading.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayVisualRange {
    /// The runway designator, e.g. `"04R"`.
    pub runway: String,
    /// A single visual range reading, in feet (or metres, depending on the
    /// report's locale — the unit is not separately tracked when absent).
    pub visual_range_feet: Option<u32>,
    /// The low end of a variable range (`RxxVyyyy`).
    pub variable_low: Option<u32>,
    /// The high end of a variable range.
    pub variable_high: Option<u32>,
    /// `P` (greater than) or `M` (less than) prefix on the range.
    pub prefix: Option<RvrPrefix>,
    /// Trend suffix, if present.
    pub trend: Option<RvrTrend>,
    /// True for the literal `CLRD` value — RVR has cleared, no range given.
    pub is_cleared: bool,
}

/// The `P`/`M` prefix on an RVR value.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrPrefix {
    /// `P` — greater than the reported value.
    GreaterThan,
    /// `M` — less than the reported value.
    LessThan,
}

impl fmt::Display for RunwayVisualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/", self.runway)?;
        if self.is_cleared {
            f.write_str("CLRD")?;
        } else {
            if let Some(prefix) = self.prefix {
                f.write_str(match prefix {
                    RvrPrefix::GreaterThan => "P",
                    RvrPrefix::LessThan => "M",
                })?;
            }
            if let Some(low) = self.variable_low {
                write!(f, "{low:04}V{:04}", self.variable_high.unwrap_or(low))?;
            } else if let Some(value) = self.visual_range_feet {
                write!(f, "{value:04}")?;
            }
        }
        if let Some(trend) = self.trend {
            f.write_str(match trend {
                RvrTrend::Up => "U",
                RvrTrend::Down => "D",
                RvrTrend::NoChange => "N",
            })?;
        }
        Ok(())
    }
}
