use regex::Captures;

use crate::types::{RunwayVisualRange, RvrPrefix, RvrTrend};

/// Decodes a `RUNWAY` match into a [`RunwayVisualRange`].
///
/// Returns `None` for the bare `RVRNO` token (RVR equipment inoperative) —
/// there is no runway to attach a value to, so there is nothing to decode.
pub fn decode(caps: &Captures) -> Option<RunwayVisualRange> {
    let runway = caps.name("name")?.as_str().to_string();
    let lvalue = &caps["lvalue"];

    let prefix = caps.name("low").map(|m| match m.as_str() {
        "P" => RvrPrefix::GreaterThan,
        "M" => RvrPrefix::LessThan,
        _ => unreachable!("pattern only allows P or M"),
    });

    // The trailing group serves double duty: `FT` is a unit marker, while
    // `U`/`D`/`N` is a trend marker. Only one can appear per match.
    let trend = caps.name("unit").and_then(|m| match m.as_str() {
        "U" => Some(RvrTrend::Up),
        "D" => Some(RvrTrend::Down),
        "N" => Some(RvrTrend::NoChange),
        _ => None,
    });

    if lvalue == "CLRD" {
        return Some(RunwayVisualRange {
            runway,
            visual_range_feet: None,
            variable_low: None,
            variable_high: None,
            prefix,
            trend,
            is_cleared: true,
        });
    }

    let low_value: u32 = lvalue.parse().ok()?;
    let high_value = caps.name("high").and_then(|m| m.as_str().parse().ok());

    let (variable_low, variable_high, visual_range_feet) = match high_value {
        Some(high) => (Some(low_value), Some(high), None),
        None => (None, None, Some(low_value)),
    };

    Some(RunwayVisualRange {
        runway,
        visual_range_feet,
        variable_low,
        variable_high,
        prefix,
        trend,
        is_cleared: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::RUNWAY;

    fn decode_str(s: &str) -> Option<RunwayVisualRange> {
        let caps = RUNWAY.captures(s)?;
        decode(&caps)
    }

    #[test]
    fn single_reading_with_trend() {
        let r = decode_str("R04L/2600FT ").unwrap();
        assert_eq!(r.runway, "04L");
        assert_eq!(r.visual_range_feet, Some(2600));
    }

    #[test]
    fn variable_range() {
        let r = decode_str("R28/1200V2000U ").unwrap();
        assert_eq!(r.variable_low, Some(1200));
        assert_eq!(r.variable_high, Some(2000));
        assert_eq!(r.trend, Some(RvrTrend::Up));
    }

    #[test]
    fn cleared_reading() {
        let r = decode_str("R28/CLRD ").unwrap();
        assert!(r.is_cleared);
    }

    #[test]
    fn rvrno_has_no_runway_to_attach_to() {
        assert!(decode_str("RVRNO ").is_none());
    }
}
