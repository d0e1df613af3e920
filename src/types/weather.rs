use std::fmt;

/// Intensity qualifier on a present-weather group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherIntensity {
    /// `-` — light.
    Light,
    /// `+` — heavy.
    Heavy,
    /// `VC` — in the vicinity.
    InVicinity,
}

/// Descriptor qualifier on a present-weather group (how the phenomenon is
/// occurring, as opposed to what it is).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherDescriptor {
    /// Shallow (MI)
    Shallow,
    /// Partial (PR)
    Partial,
    /// Patches (BC)
    Patches,
    /// Low drifting (DR)
    LowDrifting,
    /// Blowing (BL)
    Blowing,
    /// Showers (SH)
    Showers,
    /// Thunderstorm (TS)
    Thunderstorm,
    /// Freezing (FZ)
    Freezing,
}

/// Precipitation type in a present-weather group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precipitation {
    /// Drizzle (DZ)
    Drizzle,
    /// Rain (RA)
    Rain,
    /// Snow (SN)
    Snow,
    /// Snow grains (SG)
    SnowGrains,
    /// Ice crystals (IC)
    IceCrystals,
    /// Ice pellets (PL)
    IcePellets,
    /// Hail (GR)
    Hail,
    /// Small hail/snow pellets (GS)
    SmallHail,
    /// Unknown precipitation (UP)
    Unknown,
}

/// Obscuration type in a present-weather group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Obscuration {
    /// Mist (BR)
    Mist,
    /// Fog (FG)
    Fog,
    /// Smoke (FU)
    Smoke,
    /// Volcanic ash (VA)
    VolcanicAsh,
    /// Widespread dust (DU)
    WidespreadDust,
    /// Sand (SA)
    Sand,
    /// Haze (HZ)
    Haze,
    /// Spray (PY)
    Spray,
}

/// Other weather phenomena not covered by precipitation/obscuration.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherPhenomenon {
    /// Dust/sand whirls (PO)
    DustWhirls,
    /// Squall (SQ)
    Squall,
    /// Funnel cloud (FC)
    FunnelCloud,
    /// Sandstorm (SS)
    Sandstorm,
    /// Duststorm (DS)
    Duststorm,
    /// No significant weather (NSW), used in TAF change groups.
    NoSignificantWeather,
}

/// A single present-weather group, e.g. `+TSRA` or `-SHSN`.
///
/// At least one of `descriptor`, `precipitation`, `obscuration`, `other` is
/// always `Some` on a value produced by the decoder.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentWeather {
    /// The raw matched token, preserved verbatim.
    pub raw_code: String,
    /// `-`, `+`, or `VC`, if present.
    pub intensity: Option<WeatherIntensity>,
    /// How the phenomenon is occurring.
    pub descriptor: Option<WeatherDescriptor>,
    /// What kind of precipitation, if any.
    pub precipitation: Option<Precipitation>,
    /// What is obscuring visibility, if anything.
    pub obscuration: Option<Obscuration>,
    /// Any other reported phenomenon.
    pub other: Option<OtherPhenomenon>,
}

impl PresentWeather {
    /// True if this group reports any precipitation.
    pub fn has_precipitation(&self) -> bool {
        self.precipitation.is_some()
    }

    /// True if this group reports any obscuration.
    pub fn has_obscuration(&self) -> bool {
        self.obscuration.is_some()
    }

    /// True for the `NSW` (no significant weather) sentinel.
    pub fn is_no_significant_weather(&self) -> bool {
        matches!(self.other, Some(OtherPhenomenon::NoSignificantWeather))
    }
}

impl fmt::Display for PresentWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_code)
    }
}
