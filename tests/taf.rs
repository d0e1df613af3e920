use chrono::{TimeZone, Utc};
use noaa_wx_parser::{ChangeIndicator, Clock, ParseResult, ReportModifier, TafReport};

fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Clock {
    Clock::at(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
}

fn expect_success(raw: &str, clock: Clock) -> TafReport {
    match TafReport::parse_at(raw, clock) {
        ParseResult::Success { data, .. } => data,
        ParseResult::Failure(e) => panic!("expected success, got failure: {e}"),
    }
}

#[test]
fn four_period_taf_with_fm_tempo_and_temperature_extremes() {
    let raw = "TAF KJFK 251720Z 2518/2624 28015G25KT P6SM FEW250 \
               FM260000 30010KT P6SM SCT040 \
               TEMPO 2606/2610 20015G25KT 3SM TSRA BKN020CB \
               TX30/2520Z TN18/2610Z";
    let report = expect_success(raw, clock_at(2025, 6, 25, 18, 0));

    assert_eq!(report.station_id, "KJFK");
    assert_eq!(report.report_type, noaa_wx_parser::ReportType::Taf);
    assert_eq!(report.forecast_periods.len(), 3);

    let base = &report.forecast_periods[0];
    assert_eq!(base.change_indicator, ChangeIndicator::Base);
    assert!(base.conditions.wind.is_some());
    assert_eq!(base.conditions.sky_conditions.len(), 1);

    let from = &report.forecast_periods[1];
    assert_eq!(from.change_indicator, ChangeIndicator::From);
    assert!(from.change_time.is_some());
    assert_eq!(from.conditions.wind.as_ref().unwrap().speed, 10);

    let tempo = &report.forecast_periods[2];
    assert_eq!(tempo.change_indicator, ChangeIndicator::Tempo);
    let (period_from, period_to) = tempo.period.expect("TEMPO carries an explicit window");
    assert!(period_to > period_from);
    assert_eq!(tempo.conditions.present_weather.len(), 1);

    assert_eq!(report.max_temperature, Some(30));
    assert_eq!(report.min_temperature, Some(18));
    assert!(report.max_temperature_time.unwrap() < report.min_temperature_time.unwrap());

    assert!(report.validity_period.valid_to > report.validity_period.valid_from);
}

#[test]
fn becmg_and_prob_groups_carry_their_own_window() {
    let raw = "TAF EGLL 251100Z 2512/2614 22010KT 9999 SCT020 \
               BECMG 2616/2618 28015KT 6000 \
               PROB30 TEMPO 2619/2622 1500 TSRA BKN008CB";
    let report = expect_success(raw, clock_at(2025, 6, 25, 12, 0));

    assert_eq!(report.forecast_periods.len(), 3);
    let becmg = &report.forecast_periods[1];
    assert_eq!(becmg.change_indicator, ChangeIndicator::Becmg);
    assert!(becmg.period.is_some());
    assert!(becmg.probability.is_none());

    let prob = &report.forecast_periods[2];
    assert_eq!(prob.change_indicator, ChangeIndicator::Prob);
    assert_eq!(prob.probability, Some(30));
    assert!(prob.period.is_some());
}

#[test]
fn amd_modifier_is_recorded() {
    let raw = "TAF AMD KCLT 151953Z 1520/1624 VRB02KT P6SM FEW250";
    let report = expect_success(raw, clock_at(2025, 12, 15, 20, 0));
    assert_eq!(report.report_modifier, Some(ReportModifier::Amd));
}

#[test]
fn external_timestamp_overrides_issue_time_anchor() {
    let raw = "2025/12/15 20:57 TAF AMD KCLT 151953Z 1520/1624 VRB02KT P6SM FEW250";
    // The passed-in clock is deliberately implausible; the embedded
    // external timestamp must be the one that actually anchors decoding.
    let report = expect_success(raw, clock_at(1999, 1, 1, 0, 0));
    assert_eq!(
        report.issue_time,
        Utc.with_ymd_and_hms(2025, 12, 15, 19, 53, 0).unwrap()
    );
    assert_eq!(
        report.validity_period.valid_from,
        Utc.with_ymd_and_hms(2025, 12, 15, 20, 0, 0).unwrap()
    );
    assert_eq!(
        report.validity_period.valid_to,
        Utc.with_ymd_and_hms(2025, 12, 17, 0, 0, 0).unwrap()
    );
}

#[test]
fn validity_hour_24_means_next_day_midnight() {
    let raw = "TAF KJFK 251720Z 2518/2624 28015G25KT P6SM FEW250";
    let report = expect_success(raw, clock_at(2025, 6, 25, 18, 0));
    assert_eq!(
        report.validity_period.valid_to,
        Utc.with_ymd_and_hms(2025, 6, 27, 0, 0, 0).unwrap()
    );
}

#[test]
fn month_boundary_inside_validity_period_rolls_the_anchor_forward() {
    // Issued June 30th, valid through the 1st: the to-day is numerically
    // smaller than the from-day, so the anchor must roll into July.
    let raw = "TAF KJFK 301720Z 3018/0112 28015KT P6SM FEW250";
    let report = expect_success(raw, clock_at(2025, 6, 30, 18, 0));
    assert_eq!(
        report.validity_period.valid_from.format("%Y-%m-%d").to_string(),
        "2025-06-30"
    );
    assert_eq!(
        report.validity_period.valid_to.format("%Y-%m-%d").to_string(),
        "2025-07-01"
    );
}

#[test]
fn base_period_is_always_first_and_unconditional() {
    let raw = "TAF KJFK 251720Z 2518/2624 28015KT P6SM FEW250";
    let report = expect_success(raw, clock_at(2025, 6, 25, 18, 0));
    assert_eq!(report.forecast_periods[0].change_indicator, ChangeIndicator::Base);
    assert!(report.forecast_periods[0].period.is_none());
    assert!(report.forecast_periods[0].change_time.is_none());
}

#[test]
fn empty_input_fails_with_the_documented_message() {
    let result = TafReport::parse_at("", clock_at(2025, 6, 25, 18, 0));
    assert!(result.is_failure());
    assert_eq!(
        result.error_message(),
        Some("Raw data cannot be null or empty")
    );
}

#[test]
fn missing_validity_period_fails_with_the_documented_message() {
    let raw = "TAF KJFK 251720Z 28015KT P6SM FEW250";
    let result = TafReport::parse_at(raw, clock_at(2025, 6, 25, 18, 0));
    assert!(result.is_failure());
    assert_eq!(
        result.error_message(),
        Some("Could not extract validity period from TAF")
    );
}

#[test]
fn missing_station_id_fails_with_the_documented_message() {
    let result = TafReport::parse_at("TAF 251720Z 2518/2624 28015KT", clock_at(2025, 6, 25, 18, 0));
    assert!(result.is_failure());
    assert_eq!(
        result.error_message(),
        Some("Could not extract station ID from TAF")
    );
}

#[test]
fn auto_is_not_a_valid_taf_modifier() {
    // AUTO is a METAR-only modifier; a TAF header claiming it is malformed
    // rather than silently accepted.
    let raw = "TAF KJFK AUTO 251720Z 2518/2624 28015KT P6SM FEW250";
    let result = TafReport::parse_at(raw, clock_at(2025, 6, 25, 18, 0));
    assert!(result.is_failure());
}

#[test]
fn unrecognized_garbage_is_unsupported_format() {
    let result = TafReport::parse_at("THIS IS NOT A TAF AT ALL", clock_at(2025, 6, 25, 18, 0));
    assert!(result.is_failure());
    assert_eq!(
        result.error_message(),
        Some("Data is not a valid TAF report")
    );
}
