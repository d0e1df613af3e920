//! The METAR/SPECI report-level orchestrator.

use regex::{Captures, Regex};

use crate::clock::{self, Clock};
use crate::decode;
use crate::error::{ErrorKind, ParseError, ParseResult, UnparsedToken, NOAA_METAR};
use crate::handler::{MetarBodyHandler, MetarRemarksHandler};
use crate::parser::cursor::{skip_unparsed, Cursor};
use crate::patterns::{
    ALTIMETER, AUTO, BEGIN_END_WEATHER, EXTERNAL_TIMESTAMP, HAIL_SIZE, LIGHTNING, METAR_KEYWORD,
    NO_SIG_CHANGE, PEAK_WIND, PRECIP_1HR, PRESENT_WEATHER, PRESS_3HR, REPORT_MODIFIER, RUNWAY,
    SEALVL_PRESS, SKY_CONDITION, STATION_DAY_TIME, TEMP_1HR, TEMP_6HR_MAX_MIN, TEMP_DEWPOINT,
    VISIBILITY, WIND, WIND_SHIFT, WIND_VARIABLE,
};
use crate::types::{MetarReport, ReportModifier, ReportType};

/// Decodes a raw METAR or SPECI report into a [`MetarReport`].
///
/// `clock` anchors the reconstruction of the day-of-month/HH:MM observation
/// time into an absolute UTC instant. It is never read from the system
/// clock internally, so the same input always decodes the same way.
///
/// Anything that escapes the body loop itself (as opposed to a single
/// decoder, which is already caught locally and downgraded to a warning)
/// is wrapped as a `Failure` rather than unwinding into the caller — none
/// of this crate's decoders are expected to panic on regex-guaranteed
/// input, but the boundary is still caught defensively.
pub fn parse_metar(raw: &str, clock: Clock) -> ParseResult<MetarReport> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| parse_metar_inner(raw, clock)))
    {
        Ok(result) => result,
        Err(payload) => ParseResult::failure(ParseError::new(
            ErrorKind::Internal,
            format!("Parser internal error: {}", crate::parser::panic_message(&payload)),
            raw.trim(),
            NOAA_METAR,
        )),
    }
}

fn parse_metar_inner(raw: &str, clock: Clock) -> ParseResult<MetarReport> {
    if raw.trim().is_empty() {
        return ParseResult::failure(ParseError::new(
            ErrorKind::EmptyInput,
            "Raw data cannot be null or empty",
            raw,
            NOAA_METAR,
        ));
    }
    let trimmed = raw.trim();
    let mut text = trimmed;
    let mut clock = clock;

    if let Some(caps) = EXTERNAL_TIMESTAMP.captures(text) {
        if let Some(external) = clock::from_external_timestamp(&caps) {
            clock = external;
        }
        text = &text[caps.get(0).unwrap().end()..];
    }

    let mut report_type = ReportType::Metar;
    let mut had_keyword = false;
    if let Some(caps) = METAR_KEYWORD.captures(text) {
        had_keyword = true;
        report_type = match &caps["kind"] {
            "METAR" => ReportType::Metar,
            "SPECI" => ReportType::Speci,
            other => unreachable!("pattern only allows METAR or SPECI, got {other}"),
        };
        text = &text[caps.get(0).unwrap().end()..];
    }

    let Some(station_caps) = STATION_DAY_TIME.captures(text) else {
        return ParseResult::failure(if had_keyword {
            ParseError::new(
                ErrorKind::MissingStationId,
                "Could not extract station ID from METAR",
                trimmed,
                NOAA_METAR,
            )
        } else {
            ParseError::new(
                ErrorKind::UnsupportedFormat,
                "Data is not a valid METAR report",
                trimmed,
                NOAA_METAR,
            )
        });
    };
    let station_id = station_caps["station"].to_string();
    let zday: u32 = station_caps["zday"].parse().unwrap();
    let zhour: u32 = station_caps["zhour"].parse().unwrap();
    let zmin: u32 = station_caps["zmin"].parse().unwrap();
    text = &text[station_caps.get(0).unwrap().end()..];

    let observation_time = clock::reconstruct(&clock, zday, zhour, zmin);

    let mut report_modifier = None;
    if let Some(caps) = REPORT_MODIFIER.captures(text) {
        report_modifier = Some(match &caps["modifier"] {
            "AUTO" => ReportModifier::Auto,
            "COR" => ReportModifier::Cor,
            "AMD" => ReportModifier::Amd,
            "RTD" => ReportModifier::Rtd,
            other => unreachable!("pattern only allows known modifiers, got {other}"),
        });
        text = &text[caps.get(0).unwrap().end()..];
    }

    let mut report = MetarReport {
        station_id,
        report_type,
        report_modifier,
        observation_time,
        raw_data: trimmed.to_string(),
        wind: None,
        visibility: None,
        temperature: None,
        pressure: None,
        sky_conditions: Vec::new(),
        present_weather: Vec::new(),
        runway_visual_range: Vec::new(),
        is_nosig: false,
        remarks: None,
        remarks_detail: Vec::new(),
    };

    let mut warnings = Vec::new();
    let mut cursor = Cursor::new(text);
    let mut active: Vec<MetarBodyHandler> = MetarBodyHandler::PRIORITY.to_vec();

    while !cursor.is_empty() {
        if let Some(caps) = crate::patterns::RMK.captures(cursor.remaining()) {
            cursor.advance(caps.get(0).unwrap().end());
            break;
        }

        let mut matched = false;
        for handler in active.clone() {
            let pattern = metar_body_pattern(handler);
            if let Some(caps) = cursor.try_match(pattern) {
                let len = caps.get(0).unwrap().end();
                apply_metar_body(&mut report, handler, &caps, &mut warnings);
                cursor.advance(len);
                if !handler.can_repeat() {
                    active.retain(|h| *h != handler);
                }
                matched = true;
                break;
            }
        }
        if !matched {
            skip_unparsed(&mut cursor, &mut warnings);
        }
    }

    if !cursor.is_empty() {
        report.remarks = Some(cursor.remaining().trim().to_string());
        let mut rcursor = Cursor::new(cursor.remaining());
        let mut ractive: Vec<MetarRemarksHandler> = MetarRemarksHandler::PRIORITY.to_vec();

        while !rcursor.is_empty() {
            let mut matched = false;
            for handler in ractive.clone() {
                let pattern = metar_remarks_pattern(handler);
                if let Some(caps) = rcursor.try_match(pattern) {
                    let len = caps.get(0).unwrap().end();
                    match apply_metar_remarks(handler, &caps) {
                        Some(group) => report.remarks_detail.push(group),
                        None => warnings.push(UnparsedToken {
                            token: rcursor.next_token().to_string(),
                            kind: ErrorKind::DecoderException,
                        }),
                    }
                    rcursor.advance(len);
                    if !handler.can_repeat() {
                        ractive.retain(|h| *h != handler);
                    }
                    matched = true;
                    break;
                }
            }
            if !matched {
                skip_unparsed(&mut rcursor, &mut warnings);
            }
        }
    }

    ParseResult::success_with_warnings(report, warnings)
}

fn metar_body_pattern(handler: MetarBodyHandler) -> &'static Regex {
    match handler {
        MetarBodyHandler::Wind => &WIND,
        MetarBodyHandler::WindVariable => &WIND_VARIABLE,
        MetarBodyHandler::Visibility => &VISIBILITY,
        MetarBodyHandler::Runway => &RUNWAY,
        MetarBodyHandler::PresentWeather => &PRESENT_WEATHER,
        MetarBodyHandler::SkyCondition => &SKY_CONDITION,
        MetarBodyHandler::TempDewpoint => &TEMP_DEWPOINT,
        MetarBodyHandler::Altimeter => &ALTIMETER,
        MetarBodyHandler::NoSigChange => &NO_SIG_CHANGE,
    }
}

fn apply_metar_body(
    report: &mut MetarReport,
    handler: MetarBodyHandler,
    caps: &Captures,
    warnings: &mut Vec<UnparsedToken>,
) {
    let raw_token = || caps.get(0).unwrap().as_str().trim().to_string();
    match handler {
        MetarBodyHandler::Wind => match decode::wind::decode(caps) {
            Some(w) => report.wind = Some(w),
            None => warnings.push(UnparsedToken {
                token: raw_token(),
                kind: ErrorKind::DecoderException,
            }),
        },
        MetarBodyHandler::WindVariable => {
            if let Some(range) = decode::wind::decode_variable(caps) {
                if let Some(wind) = report.wind.as_mut() {
                    decode::wind::apply_variable(wind, range);
                }
            }
        }
        MetarBodyHandler::Visibility => {
            report.visibility = decode::visibility::decode(&caps["vis"]);
        }
        MetarBodyHandler::Runway => {
            if let Some(r) = decode::rvr::decode(caps) {
                report.runway_visual_range.push(r);
            }
        }
        MetarBodyHandler::PresentWeather => {
            let raw = caps.get(0).unwrap().as_str().trim();
            if let Some(w) = decode::weather::decode(raw, caps) {
                report.present_weather.push(w);
            }
        }
        MetarBodyHandler::SkyCondition => {
            if let Some(s) = decode::sky::decode(caps) {
                report.sky_conditions.push(s);
            }
        }
        MetarBodyHandler::TempDewpoint => match decode::temperature::decode(caps) {
            Some(t) => report.temperature = Some(t),
            None => warnings.push(UnparsedToken {
                token: raw_token(),
                kind: ErrorKind::DecoderException,
            }),
        },
        MetarBodyHandler::Altimeter => match decode::pressure::decode(caps) {
            Some(p) => report.pressure = Some(p),
            None => warnings.push(UnparsedToken {
                token: raw_token(),
                kind: ErrorKind::DecoderException,
            }),
        },
        MetarBodyHandler::NoSigChange => {
            report.is_nosig = true;
        }
    }
}

fn metar_remarks_pattern(handler: MetarRemarksHandler) -> &'static Regex {
    match handler {
        MetarRemarksHandler::Auto => &AUTO,
        MetarRemarksHandler::SeaLevelPressure => &SEALVL_PRESS,
        MetarRemarksHandler::PeakWind => &PEAK_WIND,
        MetarRemarksHandler::WindShift => &WIND_SHIFT,
        MetarRemarksHandler::HourlyTemperature => &TEMP_1HR,
        MetarRemarksHandler::HourlyPrecipitation => &PRECIP_1HR,
        MetarRemarksHandler::SixHourExtreme => &TEMP_6HR_MAX_MIN,
        MetarRemarksHandler::PressureTendency => &PRESS_3HR,
        MetarRemarksHandler::HailSize => &HAIL_SIZE,
        MetarRemarksHandler::Lightning => &LIGHTNING,
        MetarRemarksHandler::BeginEndWeather => &BEGIN_END_WEATHER,
    }
}

fn apply_metar_remarks(
    handler: MetarRemarksHandler,
    caps: &Captures,
) -> Option<crate::types::RemarkGroup> {
    match handler {
        MetarRemarksHandler::Auto => Some(crate::types::RemarkGroup::Automated),
        MetarRemarksHandler::SeaLevelPressure => decode::remarks::decode_sea_level_pressure(caps),
        MetarRemarksHandler::PeakWind => decode::remarks::decode_peak_wind(caps),
        MetarRemarksHandler::WindShift => decode::remarks::decode_wind_shift(caps),
        MetarRemarksHandler::HourlyTemperature => decode::remarks::decode_hourly_temperature(caps),
        MetarRemarksHandler::HourlyPrecipitation => {
            decode::remarks::decode_hourly_precipitation(caps)
        }
        MetarRemarksHandler::SixHourExtreme => decode::remarks::decode_six_hour_extreme(caps),
        MetarRemarksHandler::PressureTendency => decode::remarks::decode_pressure_tendency(caps),
        MetarRemarksHandler::HailSize => decode::remarks::decode_hail_size(caps),
        MetarRemarksHandler::Lightning => decode::remarks::decode_lightning(caps),
        MetarRemarksHandler::BeginEndWeather => decode::remarks::decode_begin_end_weather(caps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Clock {
        Clock::at(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn decodes_a_full_metar() {
        let raw = "KJFK 251651Z 28016G25KT 10SM FEW250 22/12 A3001 RMK AO2 SLP134 T02220122";
        let result = parse_metar(raw, clock_at(2025, 6, 25, 17, 0));
        let ParseResult::Success { data, .. } = result else {
            panic!("expected success");
        };
        assert_eq!(data.station_id, "KJFK");
        assert_eq!(data.wind.unwrap().speed, 16);
        assert_eq!(data.visibility.unwrap().distance_value, 10.0);
        assert_eq!(data.temperature.unwrap().celsius, 22);
        assert!(data.remarks.unwrap().starts_with("AO2"));
    }

    #[test]
    fn empty_input_fails() {
        let result = parse_metar("   ", Clock::now());
        assert!(result.is_failure());
        assert_eq!(
            result.error_message(),
            Some("Raw data cannot be null or empty")
        );
    }

    #[test]
    fn garbage_without_station_fails() {
        let result = parse_metar("NOT A METAR AT ALL", Clock::now());
        assert!(result.is_failure());
    }

    #[test]
    fn nosig_trend_is_recorded() {
        let raw = "EGLL 251650Z 19015KT 6000 RA SCT006 BKN009 16/14 Q1006 NOSIG";
        let result = parse_metar(raw, clock_at(2025, 6, 25, 17, 0));
        let ParseResult::Success { data, .. } = result else {
            panic!("expected success");
        };
        assert!(data.is_nosig);
    }
}
