//! A small stateful wrapper around the lightning pattern, giving convenient
//! accessors for frequency, location, direction pair, and the set of
//! lightning types present in a single remark token.

use crate::patterns::LIGHTNING;
use regex::Captures;

/// The fixed order lightning type codes are reported in when concatenated
/// by [`LightningMatcher::get_types_string`].
const TYPE_ORDER: [&str; 5] = ["IC", "CC", "CG", "CA", "CW"];
const TYPE_GROUP_NAMES: [&str; 5] = ["typeic", "typecc", "typecg", "typeca", "typecw"];

/// Concatenates whichever of the five lightning type codes appear in
/// `types` into fixed order IC, CC, CG, CA, CW, regardless of the order
/// they were written in the raw remark. Shared by [`LightningMatcher`] and
/// the remark decoder that reads a `LIGHTNING` capture directly, so the two
/// call sites can't drift apart on what "canonical order" means.
pub(crate) fn canonical_type_order(types: &str) -> String {
    TYPE_ORDER
        .into_iter()
        .filter(|code| types.contains(code))
        .collect()
}

/// Binds a lightning regex match against a backing string, the way a
/// `java.util.regex.Matcher` would, but scoped to the one pattern this
/// crate cares about.
///
/// The underlying pattern captures all type codes present (in whatever
/// order they were written) into a single `types` group rather than one
/// group per code — METAR remarks write lightning types in any order
/// (`LTGCGIC`, `LTGICCG`, ...) so a fixed per-code group would miss
/// permutations. [`LightningMatcher::group`] still exposes the per-code
/// names the source contract specifies (`typeic`, `typecc`, ...) by
/// synthesizing them from that capture.
pub struct LightningMatcher<'a> {
    input: &'a str,
    pos: usize,
    caps: Option<Captures<'a>>,
}

impl<'a> LightningMatcher<'a> {
    /// Creates a matcher over `input`, not yet positioned on a match.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            caps: None,
        }
    }

    /// Attempts to find the next lightning match starting at the current
    /// position. Returns `true` and advances past the match on success.
    pub fn find(&mut self) -> bool {
        if self.pos > self.input.len() {
            return false;
        }
        match LIGHTNING.captures(&self.input[self.pos..]) {
            Some(caps) => {
                let whole = caps.get(0).unwrap();
                self.pos += whole.end().max(1);
                self.caps = Some(caps);
                true
            }
            None => {
                self.caps = None;
                false
            }
        }
    }

    fn types_str(&self) -> Option<&str> {
        self.caps
            .as_ref()
            .and_then(|c| c.name("types"))
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
    }

    /// The text captured by a named group in the most recent match, if any.
    ///
    /// The five type groups (`typeic`, `typecc`, `typecg`, `typeca`,
    /// `typecw`) are synthesized from the pattern's single `types` capture
    /// rather than being distinct regex groups (see struct docs).
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of the lightning pattern's group names —
    /// this mirrors the source contract's `InvalidArgument` on an unknown
    /// group name, which in Rust is a programmer error rather than a
    /// recoverable one.
    pub fn group(&self, name: &str) -> Option<&str> {
        if let Some(idx) = TYPE_GROUP_NAMES.iter().position(|g| *g == name) {
            let code = TYPE_ORDER[idx];
            return self
                .types_str()
                .filter(|types| types.contains(code))
                .map(|_| code);
        }
        const KNOWN: [&str; 4] = ["freq", "loc", "dir", "dir2"];
        if !KNOWN.contains(&name) {
            panic!("unknown lightning group name: {name}");
        }
        self.caps.as_ref().and_then(|c| c.name(name)).map(|m| m.as_str())
    }

    /// True iff any of the five lightning type groups matched.
    pub fn has_any_types(&self) -> bool {
        self.types_str().is_some()
    }

    /// The matched type codes, concatenated in fixed order IC, CC, CG, CA,
    /// CW; `None` if no type group matched.
    pub fn get_types_string(&self) -> Option<String> {
        self.types_str().map(canonical_type_order)
    }

    /// True iff `code` (e.g. `"CG"`) appears among the matched types.
    pub fn has_type(&self, code: &str) -> bool {
        self.get_types_string()
            .is_some_and(|types| types.contains(code))
    }

    /// Replaces the first lightning match in `input` with `replacement`.
    pub fn replace_first(input: &str, replacement: &str) -> String {
        LIGHTNING.replacen(input, 1, replacement).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_types_in_any_order() {
        let mut m = LightningMatcher::new("OCNL LTGCGIC DSNT NW");
        assert!(m.find());
        assert!(m.has_any_types());
        assert_eq!(m.get_types_string().as_deref(), Some("ICCG"));
        assert_eq!(m.group("freq"), Some("OCNL"));
        assert_eq!(m.group("loc"), Some("DSNT"));
    }

    #[test]
    fn has_type_checks_membership() {
        let mut m = LightningMatcher::new("LTGCG OHD");
        assert!(m.find());
        assert!(m.has_type("CG"));
        assert!(!m.has_type("CA"));
    }

    #[test]
    #[should_panic]
    fn unknown_group_panics() {
        let mut m = LightningMatcher::new("LTGCG OHD");
        m.find();
        let _ = m.group("bogus");
    }
}
