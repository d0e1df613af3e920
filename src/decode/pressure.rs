use regex::Captures;

use crate::types::{Pressure, PressureUnit};

/// Decodes an `ALTIMETER` match into a [`Pressure`].
///
/// Precedence follows the prefix/suffix markers, falling back to range
/// sniffing when neither is present:
///
/// 1. `A`/`AA` prefix — inches of mercury, value is hundredths.
/// 2. `Q`/`QNH` prefix — hectopascals, value is whole units.
/// 3. `INS` suffix — inches of mercury, value is hundredths.
/// 4. Bare digits in `900..=1100` — hectopascals (a QNH with no prefix).
///
/// An `O`/`0` OCR fixup is applied to the digit string before any of the
/// above run.
pub fn decode(caps: &Captures) -> Option<Pressure> {
    let digits: String = caps["press"]
        .chars()
        .map(|c| if c == 'O' { '0' } else { c })
        .collect();
    let value: f64 = digits.parse().ok()?;

    let unit_prefix = caps.name("unit").map(|m| m.as_str());

    match unit_prefix {
        Some("A") | Some("AA") => Some(Pressure {
            value: value / 100.0,
            unit: PressureUnit::InchesHg,
        }),
        Some("Q") | Some("QNH") => Some(Pressure {
            value,
            unit: PressureUnit::Hectopascals,
        }),
        _ => {
            if caps.name("suffix").is_some() {
                return Some(Pressure {
                    value: value / 100.0,
                    unit: PressureUnit::InchesHg,
                });
            }
            if (900.0..=1100.0).contains(&value) {
                return Some(Pressure {
                    value,
                    unit: PressureUnit::Hectopascals,
                });
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::ALTIMETER;

    fn decode_str(s: &str) -> Option<Pressure> {
        let caps = ALTIMETER.captures(s)?;
        decode(&caps)
    }

    #[test]
    fn a_prefix_is_inches_hg() {
        let p = decode_str("A2992 ").unwrap();
        assert_eq!(p.unit, PressureUnit::InchesHg);
        assert!((p.value - 29.92).abs() < 1e-9);
    }

    #[test]
    fn q_prefix_is_hectopascals() {
        let p = decode_str("Q1013 ").unwrap();
        assert_eq!(p.unit, PressureUnit::Hectopascals);
        assert_eq!(p.value, 1013.0);
    }

    #[test]
    fn ins_suffix_is_inches_hg() {
        let p = decode_str("2992INS ").unwrap();
        assert_eq!(p.unit, PressureUnit::InchesHg);
        assert!((p.value - 29.92).abs() < 1e-9);
    }

    #[test]
    fn bare_digits_in_hpa_range() {
        let p = decode_str("1013 ").unwrap();
        assert_eq!(p.unit, PressureUnit::Hectopascals);
        assert_eq!(p.value, 1013.0);
    }

    #[test]
    fn ocr_zero_fixup_applies_before_range_check() {
        let p = decode_str("1O13 ").unwrap();
        assert_eq!(p.value, 1013.0);
    }
}
