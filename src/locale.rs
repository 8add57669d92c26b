// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use core::str::FromStr;
use std::sync::OnceLock;

use crate::cache;
use crate::interchange;
use crate::legacy::{self, LegacyParts};
use crate::parser::{Error, LanguageTag};

/// An immutable locale identifier, wrapping one canonical legacy-format
/// string (`lang[_Script][_REGION][_VARIANT][@key=value;…]`).
///
/// The wrapped name is the identity of the value: equality, ordering and
/// hashing all go through it. The decomposition into language, script,
/// region, variant and keywords is derived lazily and is the same for every
/// construction from the same canonical string.
///
/// # Construction
///
/// The entry points are deliberately distinct:
///
/// * [`Locale::try_from_str`] parses leniently and normalizes casing and
///   separators, but applies no alias rewriting.
/// * [`Locale::create_canonical`] additionally runs the full
///   [canonicalization](Locale::canonicalize) rules (legacy aliases,
///   variant-keyword rules, the Norwegian rewrite).
/// * [`Locale::from_language_tag`] converts a BCP-47 tag, truncating at the
///   first ill-formed subtag.
///
/// # Examples
///
/// ```
/// use uniloc::Locale;
///
/// let locale: Locale = "de-DE-u-co-phonebk".parse().unwrap();
/// assert_eq!(locale.name(), "de_DE@collation=phonebook");
/// assert_eq!(locale.language(), "de");
/// assert_eq!(locale.region(), "DE");
/// assert_eq!(locale.keyword_value("collation"), Some("phonebook"));
/// ```
#[derive(Debug, Clone)]
pub struct Locale {
    name: Box<str>,
    parts: OnceLock<LegacyParts>,
}

impl Locale {
    /// The root locale, whose name is the empty string.
    pub fn root() -> Self {
        Self::from_canonical_name(String::new())
    }

    /// Parses an identifier in either format, leniently.
    ///
    /// The input is taken to be a BCP-47 language tag when the shortest
    /// `-`/`_`-delimited field before any `@` has length exactly one (a
    /// singleton), and a legacy identifier otherwise. This heuristic is
    /// documented behavior, not a grammar check; single-character legacy
    /// subtags outside of extensions are assumed never to occur here (see
    /// the `"C"` edge case test — [`Locale::canonicalize`] parses legacy
    /// directly and is unaffected).
    ///
    /// Results are memoized in a process-wide cache keyed by the raw input.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::Locale;
    ///
    /// let a = Locale::try_from_str("en-US").unwrap();
    /// assert_eq!(a.name(), "en_US");
    ///
    /// let b = Locale::try_from_str("en-u-ca-buddhist").unwrap();
    /// assert_eq!(b.name(), "en@calendar=buddhist");
    /// ```
    pub fn try_from_str(s: &str) -> Result<Self, Error> {
        let name = cache::normalized(s, || {
            if looks_like_language_tag(s) {
                let (tag, _) = LanguageTag::parse(s);
                Ok(interchange::tag_to_name(&tag))
            } else {
                legacy::parse_name(s).map(|parts| legacy::write_name(&parts))
            }
        })?;
        Ok(Self {
            name,
            parts: OnceLock::new(),
        })
    }

    /// Rewrites an identifier into its canonical form. Never fails:
    /// unmatched or ill-formed inputs are returned unchanged, and the empty
    /// string stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::Locale;
    ///
    /// assert_eq!(Locale::canonicalize("C"), "en_US_POSIX");
    /// assert_eq!(Locale::canonicalize("de__PHONEBOOK"), "de@collation=phonebook");
    /// assert_eq!(Locale::canonicalize(""), "");
    /// ```
    pub fn canonicalize(s: &str) -> String {
        crate::aliases::canonicalize(s)
    }

    /// Parses and fully canonicalizes an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::Locale;
    ///
    /// let locale = Locale::create_canonical("th_TH_TRADITIONAL");
    /// assert_eq!(locale.name(), "th_TH@calendar=buddhist");
    /// ```
    pub fn create_canonical(s: &str) -> Self {
        Self::from_canonical_name(Self::canonicalize(s))
    }

    /// Converts a BCP-47 language tag, truncating at the first ill-formed
    /// subtag. Use [`LanguageTag::parse`] directly to learn how much of the
    /// tag was consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::Locale;
    ///
    /// let locale = Locale::from_language_tag("en-US-u-va-posix");
    /// assert_eq!(locale.name(), "en_US_POSIX");
    /// ```
    pub fn from_language_tag(s: &str) -> Self {
        let (tag, _) = LanguageTag::parse(s);
        Self::from_canonical_name(interchange::tag_to_name(&tag))
    }

    /// Builds the BCP-47 language tag for this locale.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::Locale;
    ///
    /// let locale: Locale = "th_TH@calendar=buddhist".parse().unwrap();
    /// assert_eq!(locale.to_language_tag(), "th-TH-u-ca-buddhist");
    /// ```
    pub fn to_language_tag(&self) -> String {
        use writeable::Writeable;
        interchange::name_to_tag(self.parts())
            .write_to_string()
            .into_owned()
    }

    /// The canonical identifier string this locale wraps.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowercase language code, or the empty string.
    pub fn language(&self) -> &str {
        &self.parts().language
    }

    /// The titlecase script code, or the empty string.
    pub fn script(&self) -> &str {
        &self.parts().script
    }

    /// The uppercase region code, or the empty string.
    pub fn region(&self) -> &str {
        &self.parts().region
    }

    /// The uppercase, `_`-joined variant field, or the empty string.
    pub fn variant(&self) -> &str {
        &self.parts().variant
    }

    /// Iterates over the keywords in ascending key order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parts()
            .keywords
            .iter()
            .map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    /// Looks up a keyword value by its (case-insensitive) legacy key.
    pub fn keyword_value(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.parts().keywords.get(key.as_str()).map(|v| v.as_ref())
    }

    /// Wraps an already-normalized name without reparsing it.
    pub(crate) fn from_canonical_name(name: String) -> Self {
        Self {
            name: name.into(),
            parts: OnceLock::new(),
        }
    }

    fn parts(&self) -> &LegacyParts {
        // The name only ever comes from our own serializer, which
        // `parse_name` accepts by construction.
        self.parts
            .get_or_init(|| legacy::parse_name(&self.name).unwrap_or_default())
    }
}

/// The tag-vs-legacy dispatch heuristic: a singleton-length field before
/// any `@` marks a language tag.
fn looks_like_language_tag(s: &str) -> bool {
    let base = s.split('@').next().unwrap_or(s);
    !base.is_empty() && base.split(['-', '_']).any(|field| field.len() == 1)
}

impl FromStr for Locale {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Locale {}

impl core::hash::Hash for Locale {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Locale {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.name.as_ref() == *other
    }
}
