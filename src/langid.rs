// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use core::str::FromStr;

use crate::parser::{Error, ParseError, SubtagIterator};
use crate::subtags;

/// The typed base tuple of a BCP-47 language tag: language, script, region
/// and variants.
///
/// # Parsing
///
/// Parsing normalizes a well-formed language identifier, converting `_`
/// separators to `-` and adjusting casing to the canonical one per subtag
/// type. Any syntactically invalid subtag will cause the parsing to fail
/// with an error; the lenient, truncating behavior lives in
/// [`LanguageTag::parse`](crate::LanguageTag::parse).
///
/// # Examples
///
/// ```
/// use uniloc::subtags::{language, region};
/// use uniloc::LanguageIdentifier;
///
/// let li: LanguageIdentifier = "en-US".parse().expect("Parsing failed");
///
/// assert_eq!(li.language, language!("en"));
/// assert_eq!(li.script, None);
/// assert_eq!(li.region, Some(region!("US")));
/// assert_eq!(li.variants.len(), 0);
/// ```
#[derive(PartialEq, Eq, Clone, Hash)]
#[allow(clippy::exhaustive_structs)] // stable public structure
pub struct LanguageIdentifier {
    /// Language subtag of the language identifier.
    pub language: subtags::Language,
    /// Script subtag of the language identifier.
    pub script: Option<subtags::Script>,
    /// Region subtag of the language identifier.
    pub region: Option<subtags::Region>,
    /// Variant subtags of the language identifier, in wire order.
    pub variants: subtags::Variants,
}

impl LanguageIdentifier {
    /// The unknown language identifier "und".
    pub const UNKNOWN: Self = Self {
        language: subtags::Language::UNKNOWN,
        script: None,
        region: None,
        variants: subtags::Variants::new(),
    };

    /// A constructor which takes a utf8 slice, parses it and
    /// produces a well-formed [`LanguageIdentifier`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::LanguageIdentifier;
    ///
    /// LanguageIdentifier::try_from_str("en-US").expect("Parsing failed");
    /// ```
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, Error> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, Error> {
        let mut iter = SubtagIterator::new(code_units);
        let (id, err) = crate::parser::parse_base_from_iter(&mut iter);
        if let Some((offset, kind)) = err {
            return Err(Error::IllFormedLanguageTag { offset, kind });
        }
        // Whatever the base scan stopped in front of is a singleton, which a
        // bare language identifier has no use for.
        if iter.peek().is_some() {
            return Err(Error::IllFormedLanguageTag {
                offset: iter.offset(),
                kind: ParseError::InvalidExtension,
            });
        }
        Ok(id)
    }

    /// Whether this [`LanguageIdentifier`] equals [`LanguageIdentifier::UNKNOWN`].
    pub fn is_unknown(&self) -> bool {
        self.language.is_unknown()
            && self.script.is_none()
            && self.region.is_none()
            && self.variants.is_empty()
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        f(self.language.as_str())?;
        if let Some(ref script) = self.script {
            f(script.as_str())?;
        }
        if let Some(ref region) = self.region {
            f(region.as_str())?;
        }
        self.variants.for_each_subtag_str(f)?;
        Ok(())
    }
}

impl FromStr for LanguageIdentifier {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl core::fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeable::Writeable::write_to(self, f)
    }
}

impl Default for LanguageIdentifier {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl From<subtags::Language> for LanguageIdentifier {
    fn from(language: subtags::Language) -> Self {
        Self {
            language,
            ..Self::UNKNOWN
        }
    }
}

impl_writeable_for_each_subtag_str_no_test!(LanguageIdentifier, selff, selff.script.is_none() && selff.region.is_none() && selff.variants.is_empty() => std::borrow::Cow::Borrowed(selff.language.as_str()));

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    #[test]
    fn test_writeable() {
        assert_writeable_eq!(LanguageIdentifier::UNKNOWN, "und");
        assert_writeable_eq!("und-001".parse::<LanguageIdentifier>().unwrap(), "und-001");
        assert_writeable_eq!(
            "und-Mymr".parse::<LanguageIdentifier>().unwrap(),
            "und-Mymr"
        );
        assert_writeable_eq!(
            "my-Mymr-MM".parse::<LanguageIdentifier>().unwrap(),
            "my-Mymr-MM"
        );
        assert_writeable_eq!(
            "my-Mymr-MM-posix".parse::<LanguageIdentifier>().unwrap(),
            "my-Mymr-MM-POSIX",
        );
    }

    #[test]
    fn test_casing_normalization() {
        let li: LanguageIdentifier = "eN-latn-Us-Valencia".parse().unwrap();
        assert_eq!(li.to_string(), "en-Latn-US-VALENCIA");
    }

    #[test]
    fn test_underscore_separator() {
        let li: LanguageIdentifier = "en_Latn_US".parse().unwrap();
        assert_eq!(li.to_string(), "en-Latn-US");
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert!(LanguageIdentifier::try_from_str("en-US-$$").is_err());
        assert!(LanguageIdentifier::try_from_str("x2").is_err());
    }

    #[test]
    fn test_variant_order_is_preserved() {
        let li: LanguageIdentifier = "sl-rozaj-biske".parse().unwrap();
        assert_eq!(li.to_string(), "sl-ROZAJ-BISKE");
    }
}
