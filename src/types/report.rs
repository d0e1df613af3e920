use chrono::{DateTime, Utc};
use derive_more::Display;

use super::{
    Pressure, PresentWeather, RemarkGroup, RunwayVisualRange, SkyCondition, Temperature,
    Visibility, Wind,
};

/// Which report kind produced a given value.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportType {
    /// Routine hourly observation.
    #[display("METAR")]
    Metar,
    /// Special, off-cycle observation.
    #[display("SPECI")]
    Speci,
    /// Terminal aerodrome forecast.
    #[display("TAF")]
    Taf,
}

/// A modifier attached to the report header.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportModifier {
    /// Fully automated station, no human oversight.
    #[display("AUTO")]
    Auto,
    /// Corrected report.
    #[display("COR")]
    Cor,
    /// Amended forecast (TAF only).
    #[display("AMD")]
    Amd,
    /// Retarded/delayed report.
    #[display("RTD")]
    Rtd,
}

/// A fully decoded METAR or SPECI report.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetarReport {
    /// 4-letter ICAO station identifier.
    pub station_id: String,
    /// `Metar` or `Speci`.
    pub report_type: ReportType,
    /// `AUTO`/`COR`/`AMD`/`RTD`, if present.
    pub report_modifier: Option<ReportModifier>,
    /// The reconstructed absolute UTC observation instant.
    pub observation_time: DateTime<Utc>,
    /// The trimmed original report text.
    pub raw_data: String,
    /// Surface wind, if decoded.
    pub wind: Option<Wind>,
    /// Prevailing visibility, if decoded.
    pub visibility: Option<Visibility>,
    /// Air temperature/dewpoint, if decoded.
    pub temperature: Option<Temperature>,
    /// Barometric pressure, if decoded.
    pub pressure: Option<Pressure>,
    /// Sky layers, in report order.
    pub sky_conditions: Vec<SkyCondition>,
    /// Present-weather groups, in report order.
    pub present_weather: Vec<PresentWeather>,
    /// Runway visual range groups, in report order.
    pub runway_visual_range: Vec<RunwayVisualRange>,
    /// True if a `NOSIG` (no significant change) trend was reported.
    pub is_nosig: bool,
    /// The raw text of the remarks trailer (after `RMK`), if any.
    pub remarks: Option<String>,
    /// The individually decoded remark groups, in report order.
    pub remarks_detail: Vec<RemarkGroup>,
}

/// The `FFFF/TTTT` validity window of a TAF.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidityPeriod {
    /// Start of validity.
    pub valid_from: DateTime<Utc>,
    /// End of validity. `HH == 24` in the source token means next-day
    /// `00:00`, already folded in here.
    pub valid_to: DateTime<Utc>,
}

/// Which kind of TAF change group a forecast period represents.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeIndicator {
    /// The initial forecast, implicit before the first change group.
    #[display("BASE")]
    Base,
    /// `FM` — abrupt change from a point in time.
    #[display("FM")]
    From,
    /// `TEMPO` — temporary fluctuation over a period.
    #[display("TEMPO")]
    Tempo,
    /// `BECMG` — gradual change over a period.
    #[display("BECMG")]
    Becmg,
    /// `PROBnn` — probability of conditions over a period.
    #[display("PROB")]
    Prob,
}

/// The decoded weather fields attached to a forecast period.
#[derive(PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastConditions {
    /// Forecast wind.
    pub wind: Option<Wind>,
    /// Forecast visibility.
    pub visibility: Option<Visibility>,
    /// Forecast present weather.
    pub present_weather: Vec<PresentWeather>,
    /// Forecast sky layers.
    pub sky_conditions: Vec<SkyCondition>,
}

/// A single period of a TAF: either the base forecast or a change group.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForecastPeriod {
    /// Which kind of period this is.
    pub change_indicator: ChangeIndicator,
    /// The instant an `FM` change takes effect. `None` for all other kinds.
    pub change_time: Option<DateTime<Utc>>,
    /// The window a `TEMPO`/`BECMG`/`PROB` group applies over. `None` for
    /// `BASE`/`FM`.
    pub period: Option<(DateTime<Utc>, DateTime<Utc>)>,
    /// `30` or `40`, for `PROB` groups only.
    pub probability: Option<u8>,
    /// The decoded conditions for this period.
    pub conditions: ForecastConditions,
}

/// A fully decoded TAF.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TafReport {
    /// 4-letter ICAO station identifier.
    pub station_id: String,
    /// Always `Taf`.
    pub report_type: ReportType,
    /// `AMD`/`COR`, if present.
    pub report_modifier: Option<ReportModifier>,
    /// When the forecast was issued.
    pub issue_time: DateTime<Utc>,
    /// The overall validity window.
    pub validity_period: ValidityPeriod,
    /// The trimmed original report text.
    pub raw_data: String,
    /// Forecast periods in report order; `[0]` is always `BASE`.
    pub forecast_periods: Vec<ForecastPeriod>,
    /// Forecast maximum temperature, Celsius, if given (`TX`).
    pub max_temperature: Option<i32>,
    /// When the forecast maximum is expected.
    pub max_temperature_time: Option<DateTime<Utc>>,
    /// Forecast minimum temperature, Celsius, if given (`TN`).
    pub min_temperature: Option<i32>,
    /// When the forecast minimum is expected.
    pub min_temperature_time: Option<DateTime<Utc>>,
}
