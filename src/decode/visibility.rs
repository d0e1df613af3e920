use crate::types::{Visibility, VisibilityUnit};

/// Decodes the text captured by `VISIBILITY`'s `vis` group into a
/// [`Visibility`] value.
///
/// `////` decodes to `None` — a skip, not a decoder failure.
pub fn decode(raw: &str) -> Option<Visibility> {
    if raw == "////" {
        return None;
    }
    if raw == "CAVOK" {
        return Some(Visibility {
            distance_value: 10_000.0,
            unit: VisibilityUnit::Metres,
            less_than: false,
            greater_than: false,
            is_cavok: true,
            special_condition: None,
        });
    }
    if raw == "NDV" {
        return Some(Visibility {
            distance_value: 0.0,
            unit: VisibilityUnit::Metres,
            less_than: false,
            greater_than: false,
            is_cavok: false,
            special_condition: Some("NDV".to_string()),
        });
    }

    if let Some(sm) = raw.strip_suffix("SM") {
        let (sm, greater_than) = strip_prefix_flag(sm, 'P');
        let (sm, less_than) = strip_prefix_flag(sm, 'M');
        let distance_value = parse_us_fraction(sm)?;
        return Some(Visibility {
            distance_value,
            unit: VisibilityUnit::StatuteMiles,
            less_than,
            greater_than,
            is_cavok: false,
            special_condition: None,
        });
    }

    // Metres: plain 4-digit, or M/P prefixed 4-digit.
    let (digits, greater_than) = strip_prefix_flag(raw, 'P');
    let (digits, less_than) = strip_prefix_flag(digits, 'M');
    let distance_value = digits.parse::<f32>().ok()?;
    Some(Visibility {
        distance_value,
        unit: VisibilityUnit::Metres,
        less_than,
        greater_than,
        is_cavok: false,
        special_condition: None,
    })
}

fn strip_prefix_flag(s: &str, prefix: char) -> (&str, bool) {
    match s.strip_prefix(prefix) {
        Some(rest) => (rest, true),
        None => (s, false),
    }
}

/// Parses `"1"`, `"1/2"`, or `"1 1/2"` into a decimal value.
fn parse_us_fraction(s: &str) -> Option<f32> {
    let mut total = 0.0f32;
    for part in s.split(' ') {
        if part.is_empty() {
            continue;
        }
        if let Some((n, d)) = part.split_once('/') {
            total += n.parse::<f32>().ok()? / d.parse::<f32>().ok()?;
        } else {
            total += part.parse::<f32>().ok()?;
        }
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_plain() {
        let v = decode("9999").unwrap();
        assert_eq!(v.distance_value, 9999.0);
        assert_eq!(v.unit, VisibilityUnit::Metres);
    }

    #[test]
    fn us_fraction_with_whole_part() {
        let v = decode("1 1/2SM").unwrap();
        assert_eq!(v.distance_value, 1.5);
        assert_eq!(v.unit, VisibilityUnit::StatuteMiles);
    }

    #[test]
    fn us_half_mile() {
        let v = decode("1/2SM").unwrap();
        assert_eq!(v.distance_value, 0.5);
    }

    #[test]
    fn cavok_sets_flag() {
        let v = decode("CAVOK").unwrap();
        assert!(v.is_cavok);
    }

    #[test]
    fn missing_value_skips() {
        assert!(decode("////").is_none());
    }

    #[test]
    fn greater_than_prefix() {
        let v = decode("P6SM").unwrap();
        assert!(v.greater_than);
        assert_eq!(v.distance_value, 6.0);
    }
}
