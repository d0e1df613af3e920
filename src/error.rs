use std::fmt;

/// Source-type tag for METAR/SPECI reports, exposed as a constant string
/// for routing and error context.
pub const NOAA_METAR: &str = "NOAA_METAR";
/// Source-type tag for TAF reports.
pub const NOAA_TAF: &str = "NOAA_TAF";

/// The reason a report could not be (fully) decoded.
///
/// Only the first four variants abort a parse. [`ErrorKind::UnparsedToken`]
/// and [`ErrorKind::DecoderException`] are recovered locally by the body
/// loop and surface as warnings on a successful [`ParseResult`] instead.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ErrorKind {
    /// The input was null, empty, or whitespace-only.
    EmptyInput,
    /// `can_parse` rejected the input before header parsing began.
    UnsupportedFormat,
    /// The header regex did not capture a station identifier.
    MissingStationId,
    /// No `FFFF/TTTT` validity period followed the TAF issue time.
    MissingValidityPeriod,
    /// A token matched no active handler and was discarded.
    UnparsedToken,
    /// A field decoder panicked or returned an internal error on an
    /// otherwise-matched token.
    DecoderException,
    /// An error escaped the body loop itself, not a single decoder.
    Internal,
}

/// A single token the body loop could not turn into a decoded value.
///
/// This never aborts a parse; it rides along with a successful
/// [`ParseResult`] so a caller can tell decoding was lossy.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct UnparsedToken {
    /// The raw token text that was discarded.
    pub token: String,
    /// Why it was discarded.
    pub kind: ErrorKind,
}

/// A structured parse failure, carrying the context needed to diagnose it.
///
/// Mirrors the `ParserException` of the source contract: a message, an
/// optional cause, the raw input, and which parser produced the error.
#[derive(Clone, Debug)]
pub struct ParseError {
    /// Human-readable message. A handful of exact strings here are part of
    /// the public contract (see module docs on `parser::metar`/`parser::taf`).
    pub message: String,
    /// The kind of failure.
    pub kind: ErrorKind,
    /// The trimmed raw input that failed to parse.
    pub raw_data: String,
    /// `"NOAA_METAR"` or `"NOAA_TAF"`.
    pub parser_type: &'static str,
}

impl ParseError {
    /// Builds a new error, capturing the parser type and raw input for
    /// diagnostics.
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        raw_data: impl Into<String>,
        parser_type: &'static str,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            raw_data: raw_data.into(),
            parser_type,
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_RAW_LEN: usize = 64;
        let raw = if self.raw_data.chars().count() > MAX_RAW_LEN {
            let truncated: String = self.raw_data.chars().take(MAX_RAW_LEN).collect();
            format!("{truncated}[...]")
        } else {
            self.raw_data.clone()
        };
        write!(
            f,
            "ParserException{{parser='{}', message='{}', rawData='{}'}}",
            self.parser_type, self.message, raw
        )
    }
}

/// The outcome of decoding a report: either a fully decoded value (with any
/// non-fatal token warnings attached) or a structured failure.
#[derive(Clone, Debug)]
pub enum ParseResult<T> {
    /// Decoding completed. `warnings` lists any tokens that could not be
    /// matched or decoded along the way; the report itself is still usable.
    Success {
        /// The decoded report.
        data: T,
        /// Tokens that were discarded rather than decoded.
        warnings: Vec<UnparsedToken>,
    },
    /// Decoding could not proceed at all.
    Failure(ParseError),
}

impl<T> ParseResult<T> {
    /// Wraps a decoded value with no warnings.
    pub fn success(data: T) -> Self {
        ParseResult::Success {
            data,
            warnings: Vec::new(),
        }
    }

    /// Wraps a decoded value together with the warnings accumulated while
    /// decoding it.
    pub fn success_with_warnings(data: T, warnings: Vec<UnparsedToken>) -> Self {
        ParseResult::Success { data, warnings }
    }

    /// Wraps a failure.
    pub fn failure(error: ParseError) -> Self {
        ParseResult::Failure(error)
    }

    /// True if decoding produced a value (even with warnings).
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// True if decoding failed outright.
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure(_))
    }

    /// Returns the decoded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ParseResult::Success { data, .. } => Some(data),
            ParseResult::Failure(_) => None,
        }
    }

    /// Returns the warnings accumulated while decoding, if successful.
    pub fn warnings(&self) -> &[UnparsedToken] {
        match self {
            ParseResult::Success { warnings, .. } => warnings,
            ParseResult::Failure(_) => &[],
        }
    }

    /// Returns the failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ParseResult::Failure(e) => Some(&e.message),
            ParseResult::Success { .. } => None,
        }
    }

    /// Converts into a standard [`Result`], discarding warnings.
    pub fn into_result(self) -> Result<T, ParseError> {
        match self {
            ParseResult::Success { data, .. } => Ok(data),
            ParseResult::Failure(e) => Err(e),
        }
    }
}
