use regex::Captures;

use crate::types::{Wind, WindUnit};

/// Decodes a `WIND` match into a [`Wind`] value.
///
/// `VRB` direction decodes to `None` (variable); `00000` decodes to calm
/// (direction `0`, speed `0`). A `///` direction (direction unknown but
/// speed present) also decodes to `None`.
pub fn decode(caps: &Captures) -> Option<Wind> {
    let dir_raw = &caps["dir"];
    let direction_degrees = match dir_raw {
        "VRB" | "///" => None,
        digits => digits.parse::<u16>().ok(),
    };

    let speed_raw = caps["speed"].trim_start_matches('P');
    let speed = if speed_raw == "//" {
        return None;
    } else {
        speed_raw.parse::<u16>().ok()?
    };

    let gust = caps
        .name("gust")
        .map(|m| m.as_str().trim_start_matches('P'))
        .and_then(|g| g.parse::<u16>().ok());

    let unit = WindUnit::from_code(&caps["units"]);

    Some(Wind {
        direction_degrees,
        speed,
        gust,
        unit,
        variable_between: None,
    })
}

/// Decodes a `WIND_VARIABLE` match (`dddVddd`) into the `(from, to)` pair
/// that [`apply_variable`] attaches to an already-decoded [`Wind`].
pub fn decode_variable(caps: &Captures) -> Option<(u16, u16)> {
    let from = caps["from"].parse().ok()?;
    let to = caps["to"].parse().ok()?;
    Some((from, to))
}

/// Attaches a decoded variable-direction range to a wind reading.
pub fn apply_variable(wind: &mut Wind, range: (u16, u16)) {
    wind.variable_between = Some(range);
}
