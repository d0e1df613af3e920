//! Handler tables: the priority-ordered lists of token kinds the body loop
//! tries at each cursor position, collapsed from the source contract's
//! `MetarPatternHandler`/`TafPatternHandler` enums into one `HandlerId` set
//! per report kind plus a `can_repeat` predicate, per the shared-skeleton
//! redesign (see `parser::cursor`).

/// Token kinds recognized in the body of a METAR/SPECI, before `RMK`.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MetarBodyHandler {
    Wind,
    WindVariable,
    Visibility,
    Runway,
    PresentWeather,
    SkyCondition,
    TempDewpoint,
    Altimeter,
    NoSigChange,
}

impl MetarBodyHandler {
    /// The order handlers are tried in at each cursor position. Earlier
    /// entries win on overlapping matches (`TempDewpoint` before
    /// `Altimeter`, since both are bare-digit groups).
    pub const PRIORITY: [MetarBodyHandler; 9] = [
        MetarBodyHandler::Wind,
        MetarBodyHandler::WindVariable,
        MetarBodyHandler::Visibility,
        MetarBodyHandler::Runway,
        MetarBodyHandler::PresentWeather,
        MetarBodyHandler::SkyCondition,
        MetarBodyHandler::TempDewpoint,
        MetarBodyHandler::Altimeter,
        MetarBodyHandler::NoSigChange,
    ];

    /// Whether this token kind may legitimately appear more than once in a
    /// single report (runways, present-weather groups, and sky layers all
    /// repeat; everything else is a singleton field).
    pub fn can_repeat(&self) -> bool {
        matches!(
            self,
            MetarBodyHandler::Runway
                | MetarBodyHandler::PresentWeather
                | MetarBodyHandler::SkyCondition
        )
    }
}

/// Token kinds recognized in the remarks trailer (after `RMK`).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MetarRemarksHandler {
    Auto,
    SeaLevelPressure,
    PeakWind,
    WindShift,
    HourlyTemperature,
    HourlyPrecipitation,
    SixHourExtreme,
    PressureTendency,
    HailSize,
    Lightning,
    BeginEndWeather,
}

impl MetarRemarksHandler {
    pub const PRIORITY: [MetarRemarksHandler; 11] = [
        MetarRemarksHandler::Auto,
        MetarRemarksHandler::SeaLevelPressure,
        MetarRemarksHandler::PeakWind,
        MetarRemarksHandler::WindShift,
        MetarRemarksHandler::HourlyTemperature,
        MetarRemarksHandler::HourlyPrecipitation,
        MetarRemarksHandler::SixHourExtreme,
        MetarRemarksHandler::PressureTendency,
        MetarRemarksHandler::HailSize,
        MetarRemarksHandler::Lightning,
        MetarRemarksHandler::BeginEndWeather,
    ];

    /// `SixHourExtreme` repeats (the `1snnn` maximum and `2snnn` minimum
    /// groups both appear); `BeginEndWeather` and `Lightning` repeat because
    /// several phenomena can start/end or strike during one observation.
    /// Everything else is a singleton per report.
    pub fn can_repeat(&self) -> bool {
        matches!(
            self,
            MetarRemarksHandler::SixHourExtreme
                | MetarRemarksHandler::BeginEndWeather
                | MetarRemarksHandler::Lightning
        )
    }
}

/// Token kinds recognized in a TAF, both in the base forecast and inside
/// `FM`/`TEMPO`/`BECMG`/`PROB` change groups.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum TafHandler {
    From,
    Tempo,
    Becmg,
    Prob,
    TempForecast,
    Wind,
    WindVariable,
    Visibility,
    PresentWeather,
    SkyCondition,
}

impl TafHandler {
    pub const PRIORITY: [TafHandler; 10] = [
        TafHandler::From,
        TafHandler::Becmg,
        TafHandler::Prob,
        TafHandler::Tempo,
        TafHandler::TempForecast,
        TafHandler::Wind,
        TafHandler::WindVariable,
        TafHandler::Visibility,
        TafHandler::PresentWeather,
        TafHandler::SkyCondition,
    ];

    /// `TempForecast` (TX/TN) can appear twice (once for each), weather and
    /// sky groups repeat the same way they do in a METAR body. Change
    /// indicators (`From`/`Tempo`/`Becmg`/`Prob`) also repeat — a TAF has
    /// many change groups.
    pub fn can_repeat(&self) -> bool {
        matches!(
            self,
            TafHandler::From
                | TafHandler::Tempo
                | TafHandler::Becmg
                | TafHandler::Prob
                | TafHandler::TempForecast
                | TafHandler::PresentWeather
                | TafHandler::SkyCondition
        )
    }

    /// True for the four change-indicator kinds that start a new
    /// [`crate::types::ForecastPeriod`] rather than decorating the current
    /// one.
    pub fn starts_new_period(&self) -> bool {
        matches!(
            self,
            TafHandler::From | TafHandler::Tempo | TafHandler::Becmg | TafHandler::Prob
        )
    }
}
