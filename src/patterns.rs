//! The compiled grammar of METAR/TAF tokens.
//!
//! Every pattern here is anchored to the start of the remaining input (`^`)
//! and requires a trailing whitespace boundary or end-of-input, so the body
//! loop in [`crate::parser`] can consume tokens cleanly off the front of the
//! cursor. Patterns are compiled once, on first use, via
//! [`std::sync::LazyLock`] statics rather than a constructible type, which
//! keeps this module free of any "do not construct me" runtime guard.
//!
//! Named captures are used throughout so the decoders in [`crate::decode`]
//! can pull fields out by name instead of by position.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).unwrap_or_else(|e| panic!("bad pattern {}: {e}", stringify!($name))));
    };
}

// --- header ---------------------------------------------------------------

pattern!(
    EXTERNAL_TIMESTAMP,
    r"^(?P<year>\d{4})/(?P<month>\d{2})/(?P<day>\d{2})\s+(?P<hour>\d{2}):(?P<minute>\d{2})(?:\s+|$)"
);
pattern!(METAR_KEYWORD, r"^(?P<kind>METAR|SPECI)(?:\s+|$)");
pattern!(TAF_KEYWORD, r"^TAF(?:\s+|$)");
pattern!(
    STATION_DAY_TIME,
    r"^(?P<station>[A-Z][A-Z0-9]{3})\s+(?P<zday>\d{2})(?P<zhour>\d{2})(?P<zmin>\d{2})Z(?:\s+|$)"
);
pattern!(REPORT_MODIFIER, r"^(?P<modifier>AUTO|COR|AMD|RTD)(?:\s+|$)");

// --- body -------------------------------------------------------------------

pattern!(
    WIND,
    r"^(?P<dir>\d{3}|VRB|///)(?P<speed>P?\d{2,3}|//)(?:G(?P<gust>P?\d{2,3}))?(?P<units>KT|MPS|KMH)(?:\s+|$)"
);
pattern!(WIND_VARIABLE, r"^(?P<from>\d{3})V(?P<to>\d{3})(?:\s+|$)");
pattern!(
    VISIBILITY,
    concat!(
        r"^(?P<vis>CAVOK|NDV|////|",
        r"M?\d{1,2}\s\d{1,2}/\d{1,2}SM|",
        r"M?P?\d{1,2}/\d{1,2}SM|",
        r"M?P?\d{1,2}SM|",
        r"M\d{4}|P\d{4}|\d{4})(?:\s+|$)"
    )
);
pattern!(
    RUNWAY,
    concat!(
        r"^(?:RVRNO|R(?P<name>\d{2}[LRC]?)/",
        r"(?P<low>[PM])?(?P<lvalue>\d{4}|CLRD)(?:V(?P<high>\d{4}))?(?P<unit>FT|U|D|N)?)",
        r"(?:\s+|$)"
    )
);
pattern!(
    PRESENT_WEATHER,
    concat!(
        r"^(?P<intensity>[-+]|VC)?",
        r"(?P<descriptor>MI|PR|BC|DR|BL|SH|TS|FZ)?",
        r"(?P<precipitation>DZ|RA|SN|SG|IC|PL|GR|GS|UP)?",
        r"(?P<obscuration>BR|FG|FU|VA|DU|SA|HZ|PY)?",
        r"(?P<other>PO|SQ|FC|SS|DS|NSW)?",
        r"(?:\s+|$)"
    )
);
pattern!(
    SKY_CONDITION,
    r"^(?P<cover>FEW|SCT|BKN|OVC|SKC|CLR|NSC|NCD|VV|0VC|SCK)(?P<height>[0-9O/]{3})?(?P<cloud>CB|TCU)?(?:\s+|$)"
);
pattern!(
    TEMP_DEWPOINT,
    r"^(?P<signt>M)?(?P<temp>\d{1,2}|XX|MM|//)/(?:(?P<signd>M)?(?P<dewpt>\d{1,2}|XX|MM|//))?(?:\s+|$)"
);
pattern!(
    ALTIMETER,
    r"^(?P<unit>AA|A|QNH|Q)?(?P<press>[0-9O]{3,4})(?P<suffix>INS)?(?:\s+|$)"
);

// --- remarks ------------------------------------------------------------

pattern!(RMK, r"^RMK(?:\s+|$)");
pattern!(AUTO, r"^AUTO(?:\s+|$)");
pattern!(SEALVL_PRESS, r"^SLP(?P<value>\d{2,3})(?:\s+|$)");
pattern!(
    PEAK_WIND,
    r"^PK\s+WND\s+(?P<dir>\d{3})(?P<speed>\d{2,3})/(?P<hour>\d{2})?(?P<minute>\d{2})(?:\s+|$)"
);
pattern!(
    WIND_SHIFT,
    r"^WSHFT\s+(?P<hour>\d{2})?(?P<minute>\d{2})(?P<fropa>\s+FROPA)?(?:\s+|$)"
);
pattern!(
    TEMP_1HR,
    r"^T(?P<signt>[01])(?P<temp>\d{3})(?:(?P<signd>[01])(?P<dewpt>\d{3}))?(?:\s+|$)"
);
pattern!(PRECIP_1HR, r"^P(?P<value>\d{4})(?:\s+|$)");
pattern!(
    TEMP_6HR_MAX_MIN,
    r"^(?P<which>[12])(?P<sign>[01])(?P<value>\d{3})(?:\s+|$)"
);
pattern!(PRESS_3HR, r"^5(?P<tendency>[0-8])(?P<value>\d{3})(?:\s+|$)");
pattern!(
    HAIL_SIZE,
    r"^GR\s?(?:(?P<whole>\d+)(?:\s(?P<frac>\d/\d))?|(?P<fraconly>\d/\d))(?:\s+|$)"
);
pattern!(
    BEGIN_END_WEATHER,
    concat!(
        r"^(?P<intensity>[-+]|VC)?",
        r"(?P<descriptor>MI|PR|BC|DR|BL|SH|TS|FZ)?",
        r"(?P<phenomenon>DZ|RA|SN|SG|IC|PL|GR|GS|UP|BR|FG|FU|VA|DU|SA|HZ|PY)",
        r"(?P<mark1>[BE])(?P<time1>\d{2}|\d{4})",
        r"(?:(?P<mark2>[BE])(?P<time2>\d{2}|\d{4}))?",
        r"(?:\s+|$)"
    )
);
pattern!(
    LIGHTNING,
    concat!(
        r"^(?:(?P<freq>OCNL|FRQ|CONS)\s+)?LTG",
        r"(?P<types>(?:IC|CC|CG|CA|CW){0,5})",
        r"(?:\s+(?P<loc>DSNT|VCY|VC|OHD|AP))?",
        r"(?:\s+(?P<dir>[NSEW]{1,2}|ALQDS))?",
        r"(?:-(?P<dir2>[NSEW]{1,2}))?",
        r"(?:\s+|$)"
    )
);

// --- TAF ------------------------------------------------------------------

pattern!(
    VALIDITY,
    r"^(?P<from_day>\d{2})(?P<from_hour>\d{2})/(?P<to_day>\d{2})(?P<to_hour>\d{2})(?:\s+|$)"
);
pattern!(FM, r"^FM(?P<day>\d{2})(?P<hour>\d{2})(?P<minute>\d{2})(?:\s+|$)");
pattern!(
    TEMPO,
    r"^TEMPO(?:\s+(?P<from_day>\d{2})(?P<from_hour>\d{2})/(?P<to_day>\d{2})(?P<to_hour>\d{2}))?(?:\s+|$)"
);
pattern!(
    BECMG,
    r"^BECMG(?:\s+(?P<from_day>\d{2})(?P<from_hour>\d{2})/(?P<to_day>\d{2})(?P<to_hour>\d{2}))?(?:\s+|$)"
);
pattern!(
    PROB,
    concat!(
        r"^PROB(?P<prob>30|40)(?:\s+(?P<tempo>TEMPO))?",
        r"(?:\s+(?P<from_day>\d{2})(?P<from_hour>\d{2})/(?P<to_day>\d{2})(?P<to_hour>\d{2}))?",
        r"(?:\s+|$)"
    )
);
pattern!(
    TEMP_FORECAST,
    r"^(?P<kind>TX|TN)(?P<sign>M)?(?P<temp>\d{2})/(?P<day>\d{2})(?P<hour>\d{2})Z(?:\s+|$)"
);

// --- service ----------------------------------------------------------------

pattern!(NO_SIG_CHANGE, r"^NOSIG(?:\s+|$)");
pattern!(UNPARSED, r"^(?P<token>\S+)(?:\s+|$)");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_day_time_captures_fields() {
        let caps = STATION_DAY_TIME.captures("KJFK 251651Z ").unwrap();
        assert_eq!(&caps["station"], "KJFK");
        assert_eq!(&caps["zday"], "25");
        assert_eq!(&caps["zhour"], "16");
        assert_eq!(&caps["zmin"], "51");
    }

    #[test]
    fn wind_matches_calm() {
        let caps = WIND.captures("00000KT ").unwrap();
        assert_eq!(&caps["dir"], "000");
        assert_eq!(&caps["speed"], "00");
        assert_eq!(&caps["units"], "KT");
    }

    #[test]
    fn visibility_matches_us_fraction() {
        let caps = VISIBILITY.captures("1 1/2SM ").unwrap();
        assert_eq!(&caps["vis"], "1 1/2SM");
    }

    #[test]
    fn altimeter_matches_prefix_and_suffix() {
        assert!(ALTIMETER.is_match("A2992 "));
        assert!(ALTIMETER.is_match("Q1013 "));
        assert!(ALTIMETER.is_match("2992INS "));
    }

    #[test]
    fn unparsed_never_matches_empty() {
        assert!(!UNPARSED.is_match(""));
        assert!(UNPARSED.is_match("GARBAGE "));
    }
}
