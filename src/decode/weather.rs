use regex::Captures;

use crate::types::{
    Obscuration, OtherPhenomenon, PresentWeather, Precipitation, WeatherDescriptor,
    WeatherIntensity,
};

/// Decodes a `PRESENT_WEATHER` match into a [`PresentWeather`].
///
/// Returns `None` when none of the four content groups (descriptor,
/// precipitation, obscuration, other) matched — a bare, otherwise-empty
/// intensity marker is not a present-weather group at all, so the caller
/// should treat this the same as a non-match.
pub fn decode(raw_code: &str, caps: &Captures) -> Option<PresentWeather> {
    let intensity = caps.name("intensity").map(|m| match m.as_str() {
        "-" => WeatherIntensity::Light,
        "+" => WeatherIntensity::Heavy,
        "VC" => WeatherIntensity::InVicinity,
        other => unreachable!("pattern only allows -, +, VC, got {other}"),
    });

    let descriptor = caps.name("descriptor").map(|m| match m.as_str() {
        "MI" => WeatherDescriptor::Shallow,
        "PR" => WeatherDescriptor::Partial,
        "BC" => WeatherDescriptor::Patches,
        "DR" => WeatherDescriptor::LowDrifting,
        "BL" => WeatherDescriptor::Blowing,
        "SH" => WeatherDescriptor::Showers,
        "TS" => WeatherDescriptor::Thunderstorm,
        "FZ" => WeatherDescriptor::Freezing,
        other => unreachable!("pattern only allows known descriptors, got {other}"),
    });

    let precipitation = caps.name("precipitation").map(|m| match m.as_str() {
        "DZ" => Precipitation::Drizzle,
        "RA" => Precipitation::Rain,
        "SN" => Precipitation::Snow,
        "SG" => Precipitation::SnowGrains,
        "IC" => Precipitation::IceCrystals,
        "PL" => Precipitation::IcePellets,
        "GR" => Precipitation::Hail,
        "GS" => Precipitation::SmallHail,
        "UP" => Precipitation::Unknown,
        other => unreachable!("pattern only allows known precipitation codes, got {other}"),
    });

    let obscuration = caps.name("obscuration").map(|m| match m.as_str() {
        "BR" => Obscuration::Mist,
        "FG" => Obscuration::Fog,
        "FU" => Obscuration::Smoke,
        "VA" => Obscuration::VolcanicAsh,
        "DU" => Obscuration::WidespreadDust,
        "SA" => Obscuration::Sand,
        "HZ" => Obscuration::Haze,
        "PY" => Obscuration::Spray,
        other => unreachable!("pattern only allows known obscuration codes, got {other}"),
    });

    let other = caps.name("other").map(|m| match m.as_str() {
        "PO" => OtherPhenomenon::DustWhirls,
        "SQ" => OtherPhenomenon::Squall,
        "FC" => OtherPhenomenon::FunnelCloud,
        "SS" => OtherPhenomenon::Sandstorm,
        "DS" => OtherPhenomenon::Duststorm,
        "NSW" => OtherPhenomenon::NoSignificantWeather,
        other => unreachable!("pattern only allows known other codes, got {other}"),
    });

    if descriptor.is_none() && precipitation.is_none() && obscuration.is_none() && other.is_none()
    {
        return None;
    }

    Some(PresentWeather {
        raw_code: raw_code.to_string(),
        intensity,
        descriptor,
        precipitation,
        obscuration,
        other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PRESENT_WEATHER;

    fn decode_str(s: &str) -> Option<PresentWeather> {
        let caps = PRESENT_WEATHER.captures(s)?;
        let raw = caps.get(0).unwrap().as_str().trim();
        decode(raw, &caps)
    }

    #[test]
    fn heavy_thunderstorm_rain() {
        let w = decode_str("+TSRA ").unwrap();
        assert_eq!(w.intensity, Some(WeatherIntensity::Heavy));
        assert_eq!(w.descriptor, Some(WeatherDescriptor::Thunderstorm));
        assert_eq!(w.precipitation, Some(Precipitation::Rain));
    }

    #[test]
    fn no_significant_weather() {
        let w = decode_str("NSW ").unwrap();
        assert!(w.is_no_significant_weather());
    }

    #[test]
    fn bare_intensity_is_not_a_weather_group() {
        assert!(decode_str("- ").is_none());
    }
}
