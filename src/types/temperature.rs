use std::fmt;

/// Air temperature and dewpoint, as reported in the body of a METAR.
///
/// Carries the derived accessors (conversions, spread, relative humidity,
/// and the weather predicates that follow from them) directly, rather than
/// as free functions elsewhere.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    /// Air temperature in degrees Celsius.
    pub celsius: i32,
    /// Dewpoint in degrees Celsius, if reported (sentinel values `//`,
    /// `XX`, `MM` decode to `None`, not a parse failure).
    pub dewpoint_celsius: Option<i32>,
}

impl Temperature {
    /// Temperature minus dewpoint, in Celsius. `None` if dewpoint is
    /// unknown.
    pub fn spread(&self) -> Option<i32> {
        self.dewpoint_celsius.map(|dp| self.celsius - dp)
    }

    /// Temperature in Fahrenheit.
    pub fn fahrenheit(&self) -> f64 {
        self.celsius as f64 * 9.0 / 5.0 + 32.0
    }

    /// Temperature in Kelvin.
    pub fn kelvin(&self) -> f64 {
        self.celsius as f64 + 273.15
    }

    /// Relative humidity as a percentage, via the Magnus-Tetens
    /// approximation. `None` if dewpoint is unknown.
    pub fn relative_humidity_percent(&self) -> Option<f64> {
        let dp = self.dewpoint_celsius? as f64;
        let t = self.celsius as f64;
        const A: f64 = 17.625;
        const B: f64 = 243.04;
        let numerator = (A * dp / (B + dp)).exp();
        let denominator = (A * t / (B + t)).exp();
        Some(100.0 * numerator / denominator)
    }

    /// True when temperature and dewpoint are within 3°C and temperature is
    /// above freezing — the conventional threshold for fog formation.
    pub fn is_fog_likely(&self) -> bool {
        match self.spread() {
            Some(spread) => spread.abs() <= 3 && self.celsius > 0,
            None => false,
        }
    }

    /// True when temperature is at or below freezing.
    pub fn is_freezing(&self) -> bool {
        self.celsius <= 0
    }

    /// True when icing conditions are plausible: freezing temperature with
    /// a close dewpoint spread (visible moisture likely present).
    pub fn is_icing_likely(&self) -> bool {
        self.is_freezing() && self.spread().is_some_and(|spread| spread.abs() <= 3)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_signed(f, self.celsius)?;
        f.write_str("/")?;
        match self.dewpoint_celsius {
            Some(dp) => fmt_signed(f, dp)?,
            None => {}
        }
        Ok(())
    }
}

fn fmt_signed(f: &mut fmt::Formatter<'_>, value: i32) -> fmt::Result {
    if value < 0 {
        write!(f, "M{:02}", -value)
    } else {
        write!(f, "{value:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_and_humidity() {
        let t = Temperature {
            celsius: 22,
            dewpoint_celsius: Some(12),
        };
        assert_eq!(t.spread(), Some(10));
        let rh = t.relative_humidity_percent().unwrap();
        assert!((50.0..55.0).contains(&rh));
    }

    #[test]
    fn unknown_dewpoint_has_no_derived_values() {
        let t = Temperature {
            celsius: 5,
            dewpoint_celsius: None,
        };
        assert_eq!(t.spread(), None);
        assert_eq!(t.relative_humidity_percent(), None);
        assert!(!t.is_icing_likely());
    }
}
