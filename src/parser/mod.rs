//! Report-level orchestrators: [`metar::parse_metar`] and [`taf::parse_taf`]
//! each run the header parse specific to their report kind, then drive the
//! shared body-loop skeleton in [`cursor`] over the handler priority tables
//! in [`crate::handler`].

pub mod cursor;
pub mod metar;
pub mod taf;

/// Extracts a human-readable message from a caught panic payload, the way
/// `std::panic::set_hook` callers conventionally do.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
