use derive_more::Display;
use std::fmt;

/// The unit a reported wind speed is expressed in.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindUnit {
    /// Knots
    #[display("KT")]
    Knots,
    /// Metres per second
    #[display("MPS")]
    MetresPerSecond,
    /// Kilometres per hour
    #[display("KMH")]
    KilometresPerHour,
}

impl WindUnit {
    pub(crate) fn from_code(code: &str) -> Self {
        match code {
            "KT" => WindUnit::Knots,
            "MPS" => WindUnit::MetresPerSecond,
            "KMH" => WindUnit::KilometresPerHour,
            other => unreachable!("pattern guarantees a known unit, got {other}"),
        }
    }
}

/// Surface wind as reported in a METAR/TAF body or TAF change group.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wind {
    /// Wind direction in degrees true, `None` for variable (`VRB`) wind.
    pub direction_degrees: Option<u16>,
    /// Sustained wind speed, in `unit`.
    pub speed: u16,
    /// Gust speed, in `unit`, if gusting.
    pub gust: Option<u16>,
    /// The unit `speed`/`gust` are expressed in.
    pub unit: WindUnit,
    /// The heading range wind direction is varying between, smaller first,
    /// when a following `dddVddd` token was present.
    pub variable_between: Option<(u16, u16)>,
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction_degrees {
            Some(d) => write!(f, "{d:03}")?,
            None => f.write_str("VRB")?,
        }
        write!(f, "{:02}", self.speed)?;
        if let Some(gust) = self.gust {
            write!(f, "G{gust:02}")?;
        }
        write!(f, "{}", self.unit)?;
        if let Some((from, to)) = self.variable_between {
            write!(f, " {from:03}V{to:03}")?;
        }
        Ok(())
    }
}
