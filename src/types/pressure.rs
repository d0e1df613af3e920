use std::fmt;

/// Standard sea-level pressure, 1013.25 hPa / 29.92 inHg.
pub const STANDARD_HPA: f64 = 1013.25;

/// The unit a reported pressure is expressed in.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Inches of mercury, North American convention.
    InchesHg,
    /// Hectopascals, used everywhere else (equivalent to millibars).
    Hectopascals,
}

/// Barometric pressure, as reported via altimeter setting (`A`/`INS`) or
/// QNH (`Q`).
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// The numeric value, in `unit`.
    pub value: f64,
    /// The unit `value` is expressed in.
    pub unit: PressureUnit,
}

impl Pressure {
    /// This pressure expressed in hectopascals, regardless of `unit`.
    pub fn as_hectopascals(&self) -> f64 {
        match self.unit {
            PressureUnit::Hectopascals => self.value,
            PressureUnit::InchesHg => self.value * 33.863_886_666_67,
        }
    }

    /// This pressure expressed in inches of mercury, regardless of `unit`.
    pub fn as_inches_hg(&self) -> f64 {
        match self.unit {
            PressureUnit::InchesHg => self.value,
            PressureUnit::Hectopascals => self.value / 33.863_886_666_67,
        }
    }

    /// Deviation from standard sea-level pressure, in hectopascals.
    /// Positive when above standard.
    pub fn deviation_from_standard_hpa(&self) -> f64 {
        self.as_hectopascals() - STANDARD_HPA
    }

    /// Pressure altitude correction, in feet, using the conventional
    /// 30ft-per-hPa approximation relative to standard pressure.
    pub fn pressure_altitude_correction_feet(&self) -> f64 {
        (STANDARD_HPA - self.as_hectopascals()) * 30.0
    }

    /// Renders this pressure as a METAR altimeter token (`Annnn`), rounding
    /// to the nearest hundredth of an inch.
    pub fn to_metar_altimeter(&self) -> String {
        let hundredths = (self.as_inches_hg() * 100.0).round() as i64;
        format!("A{hundredths:04}")
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::InchesHg => write!(f, "A{:04}", (self.value * 100.0).round() as i64),
            PressureUnit::Hectopascals => write!(f, "Q{:04}", self.value.round() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altimeter_and_qnh_agree_within_a_hectopascal() {
        let altimeter = Pressure {
            value: 29.92,
            unit: PressureUnit::InchesHg,
        };
        let qnh = Pressure {
            value: 1013.0,
            unit: PressureUnit::Hectopascals,
        };
        assert!((altimeter.as_hectopascals() - qnh.as_hectopascals()).abs() < 1.0);
    }

    #[test]
    fn round_trip_through_metar_altimeter() {
        let p = Pressure {
            value: 30.15,
            unit: PressureUnit::InchesHg,
        };
        assert_eq!(p.to_metar_altimeter(), "A3015");
    }
}
