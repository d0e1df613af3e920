//! Pure field decoders: each takes the `regex::Captures` of a single
//! pattern match (or the captured text directly) and returns the typed
//! value it represents, or `None` if the match did not carry a usable
//! value (a skip, not a decoder failure — see the visibility `////`
//! sentinel).

pub mod pressure;
pub mod remarks;
pub mod rvr;
pub mod sky;
pub mod temperature;
pub mod visibility;
pub mod weather;
pub mod wind;
