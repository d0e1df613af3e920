use regex::Captures;

use crate::types::{CloudType, SkyCondition, SkyCoverage};

/// Decodes a `SKY_CONDITION` match into a [`SkyCondition`].
///
/// Tolerates a handful of OCR mis-scans the pattern deliberately also
/// matches: `0VC` for `OVC` and `SCK` for `SKC` (a leading/trailing `O`/`0`
/// swap), and `NCD` as a synonym for `NSC`. A height of `///` decodes to
/// `None` rather than failing the whole group.
pub fn decode(caps: &Captures) -> Option<SkyCondition> {
    let coverage = match &caps["cover"] {
        "FEW" => SkyCoverage::Few,
        "SCT" => SkyCoverage::Scattered,
        "BKN" => SkyCoverage::Broken,
        "OVC" | "0VC" => SkyCoverage::Overcast,
        "SKC" | "SCK" => SkyCoverage::Skc,
        "CLR" => SkyCoverage::Clr,
        "NSC" | "NCD" => SkyCoverage::Nsc,
        "VV" => SkyCoverage::VerticalVisibility,
        other => unreachable!("pattern only allows known cover codes, got {other}"),
    };

    let height_feet = caps.name("height").and_then(|m| {
        let raw = m.as_str();
        if raw.contains('/') {
            return None;
        }
        let fixed: String = raw.chars().map(|c| if c == 'O' { '0' } else { c }).collect();
        fixed.parse::<u32>().ok().map(|hundreds| hundreds * 100)
    });

    let cloud_type = caps.name("cloud").map(|m| match m.as_str() {
        "CB" => CloudType::Cb,
        "TCU" => CloudType::Tcu,
        other => unreachable!("pattern only allows CB or TCU, got {other}"),
    });

    Some(SkyCondition {
        coverage,
        height_feet,
        cloud_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::SKY_CONDITION;

    fn decode_str(s: &str) -> Option<SkyCondition> {
        let caps = SKY_CONDITION.captures(s)?;
        decode(&caps)
    }

    #[test]
    fn broken_layer_with_height() {
        let s = decode_str("BKN025 ").unwrap();
        assert_eq!(s.coverage, SkyCoverage::Broken);
        assert_eq!(s.height_feet, Some(2500));
    }

    #[test]
    fn cumulonimbus_tag() {
        let s = decode_str("FEW015CB ").unwrap();
        assert_eq!(s.cloud_type, Some(CloudType::Cb));
    }

    #[test]
    fn ocr_zero_vc_is_overcast() {
        let s = decode_str("0VC020 ").unwrap();
        assert_eq!(s.coverage, SkyCoverage::Overcast);
    }

    #[test]
    fn clear_has_no_height() {
        let s = decode_str("SKC ").unwrap();
        assert_eq!(s.height_feet, None);
    }

    #[test]
    fn missing_height_digits_skip() {
        let s = decode_str("BKN/// ").unwrap();
        assert_eq!(s.height_feet, None);
    }
}
