use regex::Captures;

use crate::types::Temperature;

/// Decodes a `TEMP_DEWPOINT` match into a [`Temperature`].
///
/// Returns `None` when the temperature field itself is a sentinel (`XX`,
/// `MM`, `//`) — without a temperature there is nothing to report. A
/// sentinel dewpoint decodes to `None` on an otherwise valid temperature.
pub fn decode(caps: &Captures) -> Option<Temperature> {
    let celsius = signed_value(caps.name("signt").is_some(), &caps["temp"])?;

    let dewpoint_celsius = caps
        .name("dewpt")
        .and_then(|m| signed_value(caps.name("signd").is_some(), m.as_str()));

    Some(Temperature {
        celsius,
        dewpoint_celsius,
    })
}

fn signed_value(negative: bool, raw: &str) -> Option<i32> {
    if raw == "XX" || raw == "MM" || raw == "//" {
        return None;
    }
    let value: i32 = raw.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::TEMP_DEWPOINT;

    fn decode_str(s: &str) -> Option<Temperature> {
        let caps = TEMP_DEWPOINT.captures(s)?;
        decode(&caps)
    }

    #[test]
    fn positive_temp_and_dewpoint() {
        let t = decode_str("22/12 ").unwrap();
        assert_eq!(t.celsius, 22);
        assert_eq!(t.dewpoint_celsius, Some(12));
    }

    #[test]
    fn negative_temp_and_dewpoint() {
        let t = decode_str("M05/M10 ").unwrap();
        assert_eq!(t.celsius, -5);
        assert_eq!(t.dewpoint_celsius, Some(-10));
    }

    #[test]
    fn missing_dewpoint_sentinel() {
        let t = decode_str("05/// ").unwrap();
        assert_eq!(t.celsius, 5);
        assert_eq!(t.dewpoint_celsius, None);
    }

    #[test]
    fn missing_temperature_sentinel_skips() {
        assert!(decode_str("XX/XX ").is_none());
    }
}
