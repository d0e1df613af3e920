use super::Temperature;

/// A single decoded entry from the `RMK` trailer.
///
/// The report keeps a raw `remarks: Option<String>` trailer, but that gives
/// the individual remark decoders no structured home. Rather than decode
/// and discard them, each successfully matched remark group is kept here so
/// callers that want the structured form don't have to re-parse the raw
/// text themselves.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemarkGroup {
    /// `AUTO` — fully automated station.
    Automated,
    /// `SLPnnn` — sea-level pressure, hectopascals.
    SeaLevelPressureHpa(f64),
    /// `PK WND dddff/(hh)mm`.
    PeakWind {
        /// Wind direction in degrees.
        direction_degrees: u16,
        /// Wind speed in knots.
        speed_kt: u16,
        /// Hour of occurrence, if given.
        hour: Option<u8>,
        /// Minute of occurrence.
        minute: u8,
    },
    /// `WSHFT (hh)mm [FROPA]`.
    WindShift {
        /// Hour of the shift, if given.
        hour: Option<u8>,
        /// Minute of the shift.
        minute: u8,
        /// True if associated with a frontal passage.
        frontal_passage: bool,
    },
    /// `Tsnnnsnnn` — temperature/dewpoint to the nearest tenth of a degree.
    HourlyTemperature(Temperature),
    /// `Pnnnn` — hourly precipitation, hundredths of an inch.
    HourlyPrecipitationIn(f64),
    /// `1snnn`/`2snnn` — 6-hour maximum/minimum temperature.
    SixHourExtreme {
        /// True for the maximum (`1snnn`), false for the minimum (`2snnn`).
        is_max: bool,
        /// Temperature in Celsius.
        celsius: f64,
    },
    /// `5appp` — 3-hour pressure tendency.
    PressureTendency {
        /// WMO tendency code, 0-8.
        tendency_code: u8,
        /// Magnitude of the change, hectopascals.
        change_hpa: f64,
    },
    /// `GR [n] [n/n]` — largest hailstone size, inches.
    HailSizeInches(f64),
    /// Beginning/ending time of a weather phenomenon.
    BeginEndWeather {
        /// The raw phenomenon code, e.g. `"RA"`, `"+TSRA"`.
        phenomenon: String,
        /// True if this records the phenomenon beginning.
        began: bool,
        /// True if this records the phenomenon ending.
        ended: bool,
        /// Hour the phenomenon began, if given and `began` is set.
        begin_hour: Option<u8>,
        /// Minute the phenomenon began, if `began` is set.
        begin_minute: Option<u8>,
        /// Hour the phenomenon ended, if given and `ended` is set.
        end_hour: Option<u8>,
        /// Minute the phenomenon ended, if `ended` is set.
        end_minute: Option<u8>,
    },
    /// A lightning observation.
    Lightning {
        /// `OCNL`/`FRQ`/`CONS`, if reported.
        frequency: Option<String>,
        /// Concatenated type codes, fixed order IC, CC, CG, CA, CW.
        types: Option<String>,
        /// `DSNT`/`VC`/`OHD`/etc, if reported.
        location: Option<String>,
        /// Compass direction(s), if reported.
        direction: Option<String>,
    },
}
