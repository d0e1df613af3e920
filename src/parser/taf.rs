//! The TAF (terminal aerodrome forecast) report-level orchestrator.

use chrono::Datelike;
use regex::Captures;

use crate::clock::{self, Clock};
use crate::decode;
use crate::error::{ErrorKind, ParseError, ParseResult, UnparsedToken, NOAA_TAF};
use crate::handler::TafHandler;
use crate::parser::cursor::{skip_unparsed, Cursor};
use crate::patterns::{
    BECMG, EXTERNAL_TIMESTAMP, FM, PRESENT_WEATHER, PROB, REPORT_MODIFIER, SKY_CONDITION,
    STATION_DAY_TIME, TAF_KEYWORD, TEMPO, TEMP_FORECAST, VALIDITY, VISIBILITY, WIND,
    WIND_VARIABLE,
};
use crate::types::{
    ChangeIndicator, ForecastConditions, ForecastPeriod, ReportModifier, ReportType, TafReport,
    ValidityPeriod,
};

/// Decodes a raw TAF into a [`TafReport`].
///
/// `clock` anchors issue-time reconstruction the same way it anchors
/// observation time for METAR, unless the header carries its own
/// `YYYY/MM/DD HH:MM` external timestamp, which overrides it.
///
/// Anything that escapes the body loop itself is wrapped as a `Failure`
/// rather than unwinding into the caller; see `parser::metar`'s equivalent
/// entry point for the rationale.
pub fn parse_taf(raw: &str, clock: Clock) -> ParseResult<TafReport> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| parse_taf_inner(raw, clock))) {
        Ok(result) => result,
        Err(payload) => ParseResult::failure(ParseError::new(
            ErrorKind::Internal,
            format!("Parser internal error: {}", crate::parser::panic_message(&payload)),
            raw.trim(),
            NOAA_TAF,
        )),
    }
}

fn parse_taf_inner(raw: &str, clock: Clock) -> ParseResult<TafReport> {
    if raw.trim().is_empty() {
        return ParseResult::failure(ParseError::new(
            ErrorKind::EmptyInput,
            "Raw data cannot be null or empty",
            raw,
            NOAA_TAF,
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

    let mut had_keyword = false;
    if let Some(caps) = TAF_KEYWORD.captures(text) {
        had_keyword = true;
        text = &text[caps.get(0).unwrap().end()..];
    }

    let mut report_modifier = None;
    if let Some(caps) = REPORT_MODIFIER.captures(text) {
        report_modifier = Some(match &caps["modifier"] {
            "AMD" => ReportModifier::Amd,
            "COR" => ReportModifier::Cor,
            other => {
                // AUTO/RTD aren't valid TAF modifiers; leave them for the
                // body loop to flag as unparsed rather than silently eat.
                let _ = other;
                return ParseResult::failure(ParseError::new(
                    ErrorKind::UnsupportedFormat,
                    "Data is not a valid TAF report",
                    trimmed,
                    NOAA_TAF,
                ));
            }
        });
        text = &text[caps.get(0).unwrap().end()..];
    }

    let Some(station_caps) = STATION_DAY_TIME.captures(text) else {
        return ParseResult::failure(if had_keyword {
            ParseError::new(
                ErrorKind::MissingStationId,
                "Could not extract station ID from TAF",
                trimmed,
                NOAA_TAF,
            )
        } else {
            ParseError::new(
                ErrorKind::UnsupportedFormat,
                "Data is not a valid TAF report",
                trimmed,
                NOAA_TAF,
            )
        });
    };
    let station_id = station_caps["station"].to_string();
    let iday: u32 = station_caps["zday"].parse().unwrap();
    let ihour: u32 = station_caps["zhour"].parse().unwrap();
    let imin: u32 = station_caps["zmin"].parse().unwrap();
    text = &text[station_caps.get(0).unwrap().end()..];

    // A TAF's issue time is always in the recent past relative to the feed,
    // so the observation-style rollback reconstruction is correct here too.
    let issue_time = clock::reconstruct(&clock, iday, ihour, imin);

    let Some(validity_caps) = VALIDITY.captures(text) else {
        return ParseResult::failure(ParseError::new(
            ErrorKind::MissingValidityPeriod,
            "Could not extract validity period from TAF",
            trimmed,
            NOAA_TAF,
        ));
    };
    let anchor_year = issue_time.year();
    let anchor_month = issue_time.month();
    let from_day: u32 = validity_caps["from_day"].parse().unwrap();
    let from_hour: u32 = validity_caps["from_hour"].parse().unwrap();
    let to_day: u32 = validity_caps["to_day"].parse().unwrap();
    let to_hour: u32 = validity_caps["to_hour"].parse().unwrap();
    text = &text[validity_caps.get(0).unwrap().end()..];

    let (valid_from, year, month, last_day) =
        clock::resolve_taf_field(anchor_year, anchor_month, 0, from_day, from_hour, 0);
    let (valid_to, mut year, mut month, mut last_day) =
        clock::resolve_taf_field(year, month, last_day, to_day, to_hour, 0);
    let _ = last_day;

    let mut report = TafReport {
        station_id,
        report_type: ReportType::Taf,
        report_modifier,
        issue_time,
        validity_period: ValidityPeriod {
            valid_from,
            valid_to,
        },
        raw_data: trimmed.to_string(),
        forecast_periods: vec![ForecastPeriod {
            change_indicator: ChangeIndicator::Base,
            change_time: None,
            period: None,
            probability: None,
            conditions: ForecastConditions::default(),
        }],
        max_temperature: None,
        max_temperature_time: None,
        min_temperature: None,
        min_temperature_time: None,
    };

    let mut warnings = Vec::new();
    let mut cursor = Cursor::new(text);
    let mut active: Vec<TafHandler> = weather_handlers();

    while !cursor.is_empty() {
        if let Some(caps) = crate::patterns::RMK.captures(cursor.remaining()) {
            cursor.advance(caps.get(0).unwrap().end());
            break;
        }

        if let Some(caps) = cursor.try_match(&FM) {
            let len = caps.get(0).unwrap().end();
            let day: u32 = caps["day"].parse().unwrap();
            let hour: u32 = caps["hour"].parse().unwrap();
            let minute: u32 = caps["minute"].parse().unwrap();
            let (change_time, y, m, d) =
                clock::resolve_taf_field(year, month, last_day, day, hour, minute);
            year = y;
            month = m;
            last_day = d;
            report.forecast_periods.push(ForecastPeriod {
                change_indicator: ChangeIndicator::From,
                change_time: Some(change_time),
                period: None,
                probability: None,
                conditions: ForecastConditions::default(),
            });
            active = weather_handlers();
            cursor.advance(len);
            continue;
        }
        if let Some(caps) = cursor.try_match(&BECMG) {
            let len = caps.get(0).unwrap().end();
            let (period, y, m, d) = decode_period(&caps, year, month, last_day);
            year = y;
            month = m;
            last_day = d;
            report.forecast_periods.push(ForecastPeriod {
                change_indicator: ChangeIndicator::Becmg,
                change_time: None,
                period,
                probability: None,
                conditions: ForecastConditions::default(),
            });
            active = weather_handlers();
            cursor.advance(len);
            continue;
        }
        if let Some(caps) = cursor.try_match(&PROB) {
            let len = caps.get(0).unwrap().end();
            let probability: u8 = caps["prob"].parse().unwrap();
            let (period, y, m, d) = decode_period(&caps, year, month, last_day);
            year = y;
            month = m;
            last_day = d;
            report.forecast_periods.push(ForecastPeriod {
                change_indicator: ChangeIndicator::Prob,
                change_time: None,
                period,
                probability: Some(probability),
                conditions: ForecastConditions::default(),
            });
            active = weather_handlers();
            cursor.advance(len);
            continue;
        }
        if let Some(caps) = cursor.try_match(&TEMPO) {
            let len = caps.get(0).unwrap().end();
            let (period, y, m, d) = decode_period(&caps, year, month, last_day);
            year = y;
            month = m;
            last_day = d;
            report.forecast_periods.push(ForecastPeriod {
                change_indicator: ChangeIndicator::Tempo,
                change_time: None,
                period,
                probability: None,
                conditions: ForecastConditions::default(),
            });
            active = weather_handlers();
            cursor.advance(len);
            continue;
        }
        if let Some(caps) = cursor.try_match(&TEMP_FORECAST) {
            let len = caps.get(0).unwrap().end();
            apply_temp_forecast(&mut report, &caps, anchor_year, anchor_month);
            cursor.advance(len);
            continue;
        }

        let mut matched = false;
        for handler in active.clone() {
            let pattern = weather_pattern(handler);
            if let Some(caps) = cursor.try_match(pattern) {
                let len = caps.get(0).unwrap().end();
                let current = report
                    .forecast_periods
                    .last_mut()
                    .expect("base period always present");
                apply_weather(&mut current.conditions, handler, &caps, &mut warnings);
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
        // TAFs don't carry the structured METAR remarks family; the raw
        // trailer, if any, is still worth keeping for callers.
        let _ = cursor.remaining();
    }

    ParseResult::success_with_warnings(report, warnings)
}

fn weather_handlers() -> Vec<TafHandler> {
    vec![
        TafHandler::Wind,
        TafHandler::WindVariable,
        TafHandler::Visibility,
        TafHandler::PresentWeather,
        TafHandler::SkyCondition,
    ]
}

fn weather_pattern(handler: TafHandler) -> &'static regex::Regex {
    match handler {
        TafHandler::Wind => &WIND,
        TafHandler::WindVariable => &WIND_VARIABLE,
        TafHandler::Visibility => &VISIBILITY,
        TafHandler::PresentWeather => &PRESENT_WEATHER,
        TafHandler::SkyCondition => &SKY_CONDITION,
        TafHandler::From | TafHandler::Tempo | TafHandler::Becmg | TafHandler::Prob => {
            unreachable!("change indicators are matched directly, not through the weather table")
        }
        TafHandler::TempForecast => {
            unreachable!("TX/TN is matched directly, not through the weather table")
        }
    }
}

fn apply_weather(
    conditions: &mut ForecastConditions,
    handler: TafHandler,
    caps: &Captures,
    warnings: &mut Vec<UnparsedToken>,
) {
    let raw_token = || caps.get(0).unwrap().as_str().trim().to_string();
    match handler {
        TafHandler::Wind => match decode::wind::decode(caps) {
            Some(w) => conditions.wind = Some(w),
            None => warnings.push(UnparsedToken {
                token: raw_token(),
                kind: ErrorKind::DecoderException,
            }),
        },
        TafHandler::WindVariable => {
            if let Some(range) = decode::wind::decode_variable(caps) {
                if let Some(wind) = conditions.wind.as_mut() {
                    decode::wind::apply_variable(wind, range);
                }
            }
        }
        TafHandler::Visibility => {
            conditions.visibility = decode::visibility::decode(&caps["vis"]);
        }
        TafHandler::PresentWeather => {
            let raw = caps.get(0).unwrap().as_str().trim();
            if let Some(w) = decode::weather::decode(raw, caps) {
                conditions.present_weather.push(w);
            }
        }
        TafHandler::SkyCondition => {
            if let Some(s) = decode::sky::decode(caps) {
                conditions.sky_conditions.push(s);
            }
        }
        TafHandler::From | TafHandler::Tempo | TafHandler::Becmg | TafHandler::Prob => {}
        TafHandler::TempForecast => {}
    }
}

/// Resolves the `FFFF/TTTT` window on a `TEMPO`/`BECMG`/`PROB` match, if
/// present (all three carry it optionally).
fn decode_period(
    caps: &Captures,
    year: i32,
    month: u32,
    last_day: u32,
) -> (Option<(chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>)>, i32, u32, u32) {
    let (Some(from_day), Some(from_hour), Some(to_day), Some(to_hour)) = (
        caps.name("from_day"),
        caps.name("from_hour"),
        caps.name("to_day"),
        caps.name("to_hour"),
    ) else {
        return (None, year, month, last_day);
    };
    let from_day: u32 = from_day.as_str().parse().unwrap();
    let from_hour: u32 = from_hour.as_str().parse().unwrap();
    let to_day: u32 = to_day.as_str().parse().unwrap();
    let to_hour: u32 = to_hour.as_str().parse().unwrap();

    let (from, y, m, d) = clock::resolve_taf_field(year, month, last_day, from_day, from_hour, 0);
    let (to, y, m, d) = clock::resolve_taf_field(y, m, d, to_day, to_hour, 0);
    (Some((from, to)), y, m, d)
}

fn apply_temp_forecast(report: &mut TafReport, caps: &Captures, year: i32, month: u32) {
    let negative = caps.name("sign").is_some();
    let Ok(mut value) = caps["temp"].parse::<i32>() else {
        return;
    };
    if negative {
        value = -value;
    }
    let day: u32 = caps["day"].parse().unwrap_or(1);
    let hour: u32 = caps["hour"].parse().unwrap_or(0);
    let (time, _, _, _) = clock::resolve_taf_field(year, month, 0, day, hour, 0);

    match &caps["kind"] {
        "TX" => {
            report.max_temperature = Some(value);
            report.max_temperature_time = Some(time);
        }
        "TN" => {
            report.min_temperature = Some(value);
            report.min_temperature_time = Some(time);
        }
        other => unreachable!("pattern only allows TX or TN, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Clock {
        Clock::at(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    #[test]
    fn decodes_a_full_taf() {
        let raw = "TAF KJFK 251720Z 2518/2624 28015G25KT P6SM FEW250 \
                   FM260000 30010KT P6SM SCT040 \
                   TX30/2520Z TN18/2610Z";
        let result = parse_taf(raw, clock_at(2025, 6, 25, 18, 0));
        let ParseResult::Success { data, .. } = result else {
            panic!("expected success");
        };
        assert_eq!(data.station_id, "KJFK");
        assert_eq!(data.forecast_periods.len(), 2);
        assert_eq!(data.max_temperature, Some(30));
        assert_eq!(data.min_temperature, Some(18));
    }

    #[test]
    fn empty_input_fails() {
        let result = parse_taf("", Clock::now());
        assert!(result.is_failure());
    }

    #[test]
    fn missing_validity_period_fails() {
        let result = parse_taf("TAF KJFK 251720Z 28015KT P6SM FEW250", clock_at(2025, 6, 25, 18, 0));
        assert!(result.is_failure());
        assert_eq!(
            result.error_message(),
            Some("Could not extract validity period from TAF")
        );
    }
}
