//! Decoded value types, as concrete Rust structs/enums with `Display` impls
//! mirroring their METAR/TAF source encoding.

mod pressure;
mod remarks;
mod report;
mod rvr;
mod sky;
mod temperature;
mod visibility;
mod weather;
mod wind;

pub use pressure::{Pressure, PressureUnit, STANDARD_HPA};
pub use remarks::RemarkGroup;
pub use report::{
    ChangeIndicator, ForecastConditions, ForecastPeriod, MetarReport, ReportModifier, ReportType,
    TafReport, ValidityPeriod,
};
pub use rvr::{RunwayVisualRange, RvrPrefix, RvrTrend};
pub use sky::{CloudType, SkyCondition, SkyCoverage};
pub use temperature::Temperature;
pub use visibility::{Visibility, VisibilityUnit};
pub use weather::{
    Obscuration, OtherPhenomenon, Precipitation, PresentWeather, WeatherDescriptor,
    WeatherIntensity,
};
pub use wind::{Wind, WindUnit};
