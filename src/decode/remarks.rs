use regex::Captures;

use crate::types::{RemarkGroup, Temperature};

/// Decodes an `SEALVL_PRESS` match (`SLPnnn`) into hectopascals.
///
/// The reported value is the last digit(s) of the actual pressure times ten,
/// with the leading `9` or `10` dropped. Values `>= 550` are assumed to be
/// in the 900s (a low system), everything else in the 1000s.
pub fn decode_sea_level_pressure(caps: &Captures) -> Option<RemarkGroup> {
    let value: u32 = caps["value"].parse().ok()?;
    let tenths = if value >= 550 { 9000 + value } else { 10000 + value };
    Some(RemarkGroup::SeaLevelPressureHpa(tenths as f64 / 10.0))
}

/// Decodes a `PEAK_WIND` match (`PK WND dddff/(hh)mm`).
pub fn decode_peak_wind(caps: &Captures) -> Option<RemarkGroup> {
    Some(RemarkGroup::PeakWind {
        direction_degrees: caps["dir"].parse().ok()?,
        speed_kt: caps["speed"].parse().ok()?,
        hour: caps.name("hour").and_then(|m| m.as_str().parse().ok()),
        minute: caps["minute"].parse().ok()?,
    })
}

/// Decodes a `WIND_SHIFT` match (`WSHFT (hh)mm [FROPA]`).
pub fn decode_wind_shift(caps: &Captures) -> Option<RemarkGroup> {
    Some(RemarkGroup::WindShift {
        hour: caps.name("hour").and_then(|m| m.as_str().parse().ok()),
        minute: caps["minute"].parse().ok()?,
        frontal_passage: caps.name("fropa").is_some(),
    })
}

/// Decodes a `TEMP_1HR` match (`Tsnnnsnnn`), tenths of a degree.
pub fn decode_hourly_temperature(caps: &Captures) -> Option<RemarkGroup> {
    let celsius = tenths_value(&caps["signt"], &caps["temp"])?;
    let dewpoint_celsius = caps.name("dewpt").and_then(|m| {
        let signd = caps.name("signd").map(|s| s.as_str()).unwrap_or("0");
        tenths_value(signd, m.as_str()).map(|v| v.round() as i32)
    });
    Some(RemarkGroup::HourlyTemperature(Temperature {
        celsius: celsius.round() as i32,
        dewpoint_celsius,
    }))
}

fn tenths_value(sign: &str, raw: &str) -> Option<f64> {
    let magnitude: f64 = raw.parse::<f64>().ok()? / 10.0;
    Some(if sign == "1" { -magnitude } else { magnitude })
}

/// Decodes a `PRECIP_1HR` match (`Pnnnn`), hundredths of an inch.
pub fn decode_hourly_precipitation(caps: &Captures) -> Option<RemarkGroup> {
    let value: f64 = caps["value"].parse().ok()?;
    Some(RemarkGroup::HourlyPrecipitationIn(value / 100.0))
}

/// Decodes a `TEMP_6HR_MAX_MIN` match (`1snnn`/`2snnn`).
pub fn decode_six_hour_extreme(caps: &Captures) -> Option<RemarkGroup> {
    let is_max = &caps["which"] == "1";
    let celsius = tenths_value(&caps["sign"], &caps["value"])?;
    Some(RemarkGroup::SixHourExtreme { is_max, celsius })
}

/// Decodes a `PRESS_3HR` match (`5appp`), the WMO pressure-tendency group.
pub fn decode_pressure_tendency(caps: &Captures) -> Option<RemarkGroup> {
    let tendency_code: u8 = caps["tendency"].parse().ok()?;
    let value: f64 = caps["value"].parse().ok()?;
    Some(RemarkGroup::PressureTendency {
        tendency_code,
        change_hpa: value / 10.0,
    })
}

/// Decodes a `HAIL_SIZE` match (`GR [n] [n/n]`), in inches.
pub fn decode_hail_size(caps: &Captures) -> Option<RemarkGroup> {
    if let Some(fraconly) = caps.name("fraconly") {
        return Some(RemarkGroup::HailSizeInches(parse_fraction(
            fraconly.as_str(),
        )?));
    }
    let whole: f64 = caps.name("whole")?.as_str().parse().ok()?;
    let frac = caps
        .name("frac")
        .and_then(|m| parse_fraction(m.as_str()))
        .unwrap_or(0.0);
    Some(RemarkGroup::HailSizeInches(whole + frac))
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (n, d) = s.split_once('/')?;
    Some(n.parse::<f64>().ok()? / d.parse::<f64>().ok()?)
}

/// Decodes a `BEGIN_END_WEATHER` match into a begin/end weather remark.
pub fn decode_begin_end_weather(caps: &Captures) -> Option<RemarkGroup> {
    let mut phenomenon = String::new();
    if let Some(m) = caps.name("intensity") {
        phenomenon.push_str(m.as_str());
    }
    if let Some(m) = caps.name("descriptor") {
        phenomenon.push_str(m.as_str());
    }
    phenomenon.push_str(&caps["phenomenon"]);

    let mut began = false;
    let mut ended = false;
    let mut begin_hour = None;
    let mut begin_minute = None;
    let mut end_hour = None;
    let mut end_minute = None;

    for (mark_name, time_name) in [("mark1", "time1"), ("mark2", "time2")] {
        let Some(mark) = caps.name(mark_name) else {
            continue;
        };
        let (hour, minute) = caps
            .name(time_name)
            .and_then(|m| parse_hhmm(m.as_str()))
            .unzip();
        match mark.as_str() {
            "B" => {
                began = true;
                begin_hour = hour.flatten();
                begin_minute = minute;
            }
            "E" => {
                ended = true;
                end_hour = hour.flatten();
                end_minute = minute;
            }
            _ => {}
        }
    }

    Some(RemarkGroup::BeginEndWeather {
        phenomenon,
        began,
        ended,
        begin_hour,
        begin_minute,
        end_hour,
        end_minute,
    })
}

/// Splits a begin/end weather group's 2-or-4-digit time capture into an
/// optional hour and a minute, the same `HH?MM` convention `PK WND`/`WSHFT`
/// captures separately as distinct regex groups — here both digits of a
/// 4-digit capture arrive together and have to be split by hand.
fn parse_hhmm(raw: &str) -> Option<(Option<u8>, u8)> {
    if raw.len() == 4 {
        Some((Some(raw[..2].parse().ok()?), raw[2..].parse().ok()?))
    } else {
        Some((None, raw.parse().ok()?))
    }
}

/// Decodes a `LIGHTNING` match into a lightning remark.
pub fn decode_lightning(caps: &Captures) -> Option<RemarkGroup> {
    let types = caps
        .name("types")
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(crate::lightning::canonical_type_order);

    Some(RemarkGroup::Lightning {
        frequency: caps.name("freq").map(|m| m.as_str().to_string()),
        types,
        location: caps.name("loc").map(|m| m.as_str().to_string()),
        direction: caps.name("dir").map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{
        BEGIN_END_WEATHER, HAIL_SIZE, LIGHTNING, PEAK_WIND, PRESS_3HR, SEALVL_PRESS, TEMP_1HR,
        TEMP_6HR_MAX_MIN, WIND_SHIFT,
    };

    #[test]
    fn sea_level_pressure_below_threshold_is_1000s() {
        let caps = SEALVL_PRESS.captures("SLP134 ").unwrap();
        let RemarkGroup::SeaLevelPressureHpa(hpa) = decode_sea_level_pressure(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert!((hpa - 1013.4).abs() < 1e-9);
    }

    #[test]
    fn sea_level_pressure_above_threshold_is_900s() {
        let caps = SEALVL_PRESS.captures("SLP987 ").unwrap();
        let RemarkGroup::SeaLevelPressureHpa(hpa) = decode_sea_level_pressure(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert!((hpa - 998.7).abs() < 1e-9);
    }

    #[test]
    fn peak_wind_without_hour() {
        let caps = PEAK_WIND.captures("PK WND 28045/15 ").unwrap();
        let RemarkGroup::PeakWind {
            direction_degrees,
            speed_kt,
            hour,
            minute,
        } = decode_peak_wind(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(direction_degrees, 280);
        assert_eq!(speed_kt, 45);
        assert_eq!(hour, None);
        assert_eq!(minute, 15);
    }

    #[test]
    fn wind_shift_with_fropa() {
        let caps = WIND_SHIFT.captures("WSHFT 1512 FROPA ").unwrap();
        let RemarkGroup::WindShift {
            frontal_passage, ..
        } = decode_wind_shift(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert!(frontal_passage);
    }

    #[test]
    fn hourly_temperature_negative_dewpoint() {
        let caps = TEMP_1HR.captures("T00821012 ").unwrap();
        let RemarkGroup::HourlyTemperature(t) = decode_hourly_temperature(&caps).unwrap() else {
            panic!("wrong variant");
        };
        assert_eq!(t.celsius, 8);
        assert_eq!(t.dewpoint_celsius, Some(-1));
    }

    #[test]
    fn six_hour_maximum() {
        let caps = TEMP_6HR_MAX_MIN.captures("10123 ").unwrap();
        let RemarkGroup::SixHourExtreme { is_max, celsius } =
            decode_six_hour_extreme(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert!(is_max);
        assert_eq!(celsius, 12.3);
    }

    #[test]
    fn pressure_tendency_decreasing() {
        let caps = PRESS_3HR.captures("52013 ").unwrap();
        let RemarkGroup::PressureTendency {
            tendency_code,
            change_hpa,
        } = decode_pressure_tendency(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(tendency_code, 2);
        assert_eq!(change_hpa, 1.3);
    }

    #[test]
    fn hail_size_whole_and_fraction() {
        let caps = HAIL_SIZE.captures("GR1 3/4 ").unwrap();
        let RemarkGroup::HailSizeInches(size) = decode_hail_size(&caps).unwrap() else {
            panic!("wrong variant");
        };
        assert!((size - 1.75).abs() < 1e-9);
    }

    #[test]
    fn begin_end_weather_records_both_marks() {
        let caps = BEGIN_END_WEATHER.captures("RAB05E30 ").unwrap();
        let RemarkGroup::BeginEndWeather {
            phenomenon,
            began,
            ended,
            begin_hour,
            begin_minute,
            end_hour,
            end_minute,
        } = decode_begin_end_weather(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(phenomenon, "RA");
        assert!(began);
        assert!(ended);
        assert_eq!(begin_hour, None);
        assert_eq!(begin_minute, Some(5));
        assert_eq!(end_hour, None);
        assert_eq!(end_minute, Some(30));
    }

    #[test]
    fn begin_end_weather_four_digit_time_splits_hour_and_minute() {
        let caps = BEGIN_END_WEATHER.captures("RAB1645 ").unwrap();
        let RemarkGroup::BeginEndWeather {
            began,
            ended,
            begin_hour,
            begin_minute,
            end_hour,
            end_minute,
            ..
        } = decode_begin_end_weather(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert!(began);
        assert!(!ended);
        assert_eq!(begin_hour, Some(16));
        assert_eq!(begin_minute, Some(45));
        assert_eq!(end_hour, None);
        assert_eq!(end_minute, None);
    }

    #[test]
    fn lightning_remark_captures_all_fields() {
        let caps = LIGHTNING.captures("OCNL LTGCGIC DSNT NW ").unwrap();
        let RemarkGroup::Lightning {
            frequency,
            types,
            location,
            direction,
        } = decode_lightning(&caps).unwrap()
        else {
            panic!("wrong variant");
        };
        assert_eq!(frequency.as_deref(), Some("OCNL"));
        assert_eq!(types.as_deref(), Some("ICCG"));
        assert_eq!(location.as_deref(), Some("DSNT"));
        assert_eq!(direction.as_deref(), Some("NW"));
    }
}
