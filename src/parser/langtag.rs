// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use core::str::FromStr;

use super::errors::{Error, ParseError};
use super::SubtagIterator;
use crate::extensions::{self, ExtensionType, Extensions};
use crate::subtags;
use crate::LanguageIdentifier;

/// Grandfathered tags predate the BCP-47 grammar and are rewritten to their
/// registered replacements before structural parsing. Matched
/// case-insensitively against the whole input.
static GRANDFATHERED: &[(&str, &str)] = &[
    ("art-lojban", "jbo"),
    ("cel-gaulish", "xtg-x-cel-gaulish"),
    ("en-GB-oed", "en-GB-x-oed"),
    ("i-ami", "ami"),
    ("i-bnn", "bnn"),
    ("i-default", "en-x-i-default"),
    ("i-enochian", "und-x-i-enochian"),
    ("i-hak", "hak"),
    ("i-klingon", "tlh"),
    ("i-lux", "lb"),
    ("i-mingo", "see-x-i-mingo"),
    ("i-navajo", "nv"),
    ("i-pwn", "pwn"),
    ("i-tao", "tao"),
    ("i-tay", "tay"),
    ("i-tsu", "tsu"),
    ("no-bok", "nb"),
    ("no-nyn", "nn"),
    ("sgn-BE-FR", "sfb"),
    ("sgn-BE-NL", "vgt"),
    ("sgn-CH-DE", "sgg"),
    ("zh-guoyu", "cmn"),
    ("zh-hakka", "hak"),
    ("zh-min", "nan-x-zh-min"),
    ("zh-min-nan", "nan"),
    ("zh-xiang", "hsn"),
];

fn grandfathered(s: &str) -> Option<&'static str> {
    GRANDFATHERED
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(s))
        .map(|(_, to)| *to)
}

#[derive(PartialEq, Clone, Copy)]
enum ParserPosition {
    Script,
    Region,
    Variant,
}

/// Scans language-script-region-variants from `iter`, stopping in front of
/// the first single-character subtag (the start of the extension sequence).
///
/// Returns whatever was well-formed up to the first offending subtag, along
/// with that subtag's offset and validator error. Callers choose the policy:
/// the strict entry points reject on any error, the lenient tag parser keeps
/// the prefix.
pub(crate) fn parse_base_from_iter(
    iter: &mut SubtagIterator,
) -> (LanguageIdentifier, Option<(usize, ParseError)>) {
    let mut id = LanguageIdentifier::UNKNOWN;

    let language = match iter.peek() {
        // A leading singleton starts the extension sequence directly, as in
        // a privateuse-only tag ("x-foo"); the language stays unknown.
        Some(subtag) if subtag.len() == 1 => {
            return (id, None);
        }
        Some(subtag) => match subtags::Language::try_from_utf8(subtag) {
            Ok(l) => {
                iter.next();
                l
            }
            Err(e) => return (id, Some((iter.offset(), e))),
        },
        None => return (id, Some((0, ParseError::InvalidLanguage))),
    };
    id.language = language;

    let mut position = ParserPosition::Script;

    while let Some(subtag) = iter.peek() {
        if subtag.len() == 1 {
            break;
        }

        if position == ParserPosition::Script {
            if let Ok(s) = subtags::Script::try_from_utf8(subtag) {
                id.script = Some(s);
                position = ParserPosition::Region;
            } else if let Ok(r) = subtags::Region::try_from_utf8(subtag) {
                id.region = Some(r);
                position = ParserPosition::Variant;
            } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
                id.variants.push(v);
                position = ParserPosition::Variant;
            } else {
                return (id, Some((iter.offset(), ParseError::InvalidSubtag)));
            }
        } else if position == ParserPosition::Region {
            if let Ok(r) = subtags::Region::try_from_utf8(subtag) {
                id.region = Some(r);
                position = ParserPosition::Variant;
            } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
                id.variants.push(v);
                position = ParserPosition::Variant;
            } else {
                return (id, Some((iter.offset(), ParseError::InvalidSubtag)));
            }
        } else if let Ok(v) = subtags::Variant::try_from_utf8(subtag) {
            if !id.variants.push(v) {
                // duplicate variant
                return (id, Some((iter.offset(), ParseError::InvalidSubtag)));
            }
        } else {
            return (id, Some((iter.offset(), ParseError::InvalidSubtag)));
        }
        iter.next();
    }

    (id, None)
}

/// Scans the extension sequence, filling `exts`. Returns the offset and
/// error of the first ill-formed subtag, leaving everything scanned before
/// it in place.
fn parse_extensions_from_iter(
    iter: &mut SubtagIterator,
    exts: &mut Extensions,
) -> Option<(usize, ParseError)> {
    while let Some(subtag) = iter.peek() {
        let singleton_offset = iter.offset();

        let &[byte] = subtag else {
            return Some((singleton_offset, ParseError::InvalidExtension));
        };

        match ExtensionType::try_from_byte(byte) {
            Ok(ExtensionType::Unicode) => {
                if !exts.unicode.is_empty() {
                    return Some((singleton_offset, ParseError::DuplicatedExtension));
                }
                iter.next();

                while let Some(st) = iter.peek() {
                    if let Ok(attr) = extensions::unicode::Attribute::try_from_utf8(st) {
                        exts.unicode.attributes.insert(attr);
                        iter.next();
                    } else {
                        break;
                    }
                }

                // A well-formed keyword in front of the offending subtag is
                // kept; truncation only discards from the error on.
                let mut pending = None;
                let mut current_keyword = None;
                let mut current_value = Vec::new();
                while let Some(st) = iter.peek() {
                    if st.len() == 1 {
                        break;
                    }
                    if st.len() == 2 {
                        match extensions::unicode::Key::try_from_utf8(st) {
                            Ok(k) => {
                                if let Some(kw) = current_keyword.take() {
                                    exts.unicode.keywords.set_default(
                                        kw,
                                        extensions::unicode::Value::from_vec_unchecked(
                                            current_value,
                                        ),
                                    );
                                    current_value = Vec::new();
                                }
                                current_keyword = Some(k);
                            }
                            Err(e) => {
                                pending = Some((iter.offset(), e));
                                break;
                            }
                        }
                    } else if current_keyword.is_some() {
                        match extensions::unicode::Value::parse_subtag_from_utf8(st) {
                            Ok(Some(t)) => current_value.push(t),
                            Ok(None) => {}
                            Err(e) => {
                                pending = Some((iter.offset(), e));
                                break;
                            }
                        }
                    } else {
                        pending = Some((iter.offset(), ParseError::InvalidExtension));
                        break;
                    }
                    iter.next();
                }
                if let Some(kw) = current_keyword.take() {
                    exts.unicode.keywords.set_default(
                        kw,
                        extensions::unicode::Value::from_vec_unchecked(current_value),
                    );
                }

                if pending.is_none() && exts.unicode.is_empty() {
                    pending = Some((singleton_offset, ParseError::InvalidExtension));
                }
                if pending.is_some() {
                    return pending;
                }
            }
            Ok(ExtensionType::Private) => {
                if !exts.private.is_empty() {
                    return Some((singleton_offset, ParseError::DuplicatedExtension));
                }
                iter.next();

                let mut any = false;
                while let Some(st) = iter.peek() {
                    match extensions::private::Subtag::try_from_utf8(st) {
                        Ok(s) => {
                            exts.private.push(s);
                            any = true;
                            iter.next();
                        }
                        Err(e) => return Some((iter.offset(), e)),
                    }
                }
                if !any {
                    return Some((singleton_offset, ParseError::InvalidExtension));
                }
            }
            Ok(ExtensionType::Other(ext)) => {
                if exts.other.iter().any(|o| o.get_ext_byte() == ext) {
                    return Some((singleton_offset, ParseError::DuplicatedExtension));
                }
                iter.next();

                let mut pending = None;
                let mut keys = Vec::new();
                while let Some(st) = iter.peek() {
                    if st.len() == 1 {
                        break;
                    }
                    match subtags::Subtag::try_from_utf8(st) {
                        Ok(key) => {
                            keys.push(key);
                            iter.next();
                        }
                        Err(e) => {
                            pending = Some((iter.offset(), e));
                            break;
                        }
                    }
                }
                if keys.is_empty() {
                    return pending.or(Some((singleton_offset, ParseError::InvalidExtension)));
                }
                exts.set_other(extensions::other::Other::from_vec_unchecked(ext, keys));
                if pending.is_some() {
                    return pending;
                }
            }
            Err(e) => return Some((singleton_offset, e)),
        }
    }
    None
}

fn parse_tag_from_utf8(code_units: &[u8]) -> (LanguageTag, Option<(usize, ParseError)>) {
    let mut iter = SubtagIterator::new(code_units);
    let mut tag = LanguageTag::default();

    let (id, err) = parse_base_from_iter(&mut iter);
    tag.id = id;
    if err.is_some() {
        return (tag, err);
    }

    let err = parse_extensions_from_iter(&mut iter, &mut tag.extensions);
    (tag, err)
}

/// The outcome of a lenient tag parse: either the whole input was
/// well-formed, or parsing stopped at the reported byte offset and the
/// returned tag holds only the well-formed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStatus {
    error: Option<(usize, ParseError)>,
}

impl ParseStatus {
    /// `true` if the whole input was consumed.
    pub fn is_well_formed(&self) -> bool {
        self.error.is_none()
    }

    /// Byte offset of the first subtag that failed its positional grammar,
    /// if any. Everything before it was parsed; everything from it on was
    /// discarded.
    pub fn error_offset(&self) -> Option<usize> {
        self.error.map(|(offset, _)| offset)
    }

    /// The validator error for the offending subtag, if any.
    pub fn error_kind(&self) -> Option<ParseError> {
        self.error.map(|(_, kind)| kind)
    }
}

/// A structural BCP-47 language tag: a [`LanguageIdentifier`] plus
/// [`Extensions`].
///
/// Two parsing policies are available over the same grammar:
///
/// * [`LanguageTag::parse`] is lenient: it stops at the first ill-formed
///   subtag and returns everything parsed so far, with the stopping point
///   in [`ParseStatus`].
/// * [`FromStr`] is strict: the first ill-formed subtag fails the whole
///   parse with a positioned [`Error`].
///
/// # Examples
///
/// ```
/// use uniloc::LanguageTag;
///
/// let (tag, status) = LanguageTag::parse("de-DE-u-co-phonebk-gibber$ish");
/// assert_eq!(status.error_offset(), Some(19));
/// assert_eq!(tag.to_string(), "de-DE-u-co-phonebk");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LanguageTag {
    /// The language-script-region-variants portion of the tag.
    pub id: LanguageIdentifier,
    /// The extension sequences of the tag.
    pub extensions: Extensions,
}

impl LanguageTag {
    /// Parses a tag leniently, truncating at the first ill-formed subtag.
    ///
    /// Grandfathered tags are rewritten to their registered replacements
    /// before structural parsing:
    ///
    /// ```
    /// use uniloc::LanguageTag;
    ///
    /// let (tag, status) = LanguageTag::parse("art-lojban");
    /// assert!(status.is_well_formed());
    /// assert_eq!(tag.to_string(), "jbo");
    /// ```
    pub fn parse(s: &str) -> (Self, ParseStatus) {
        let t = grandfathered(s).unwrap_or(s);
        let (tag, error) = parse_tag_from_utf8(t.as_bytes());
        (tag, ParseStatus { error })
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        self.id.for_each_subtag_str(f)?;
        self.extensions.for_each_subtag_str(f)?;
        Ok(())
    }
}

impl FromStr for LanguageTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = grandfathered(s).unwrap_or(s);
        match parse_tag_from_utf8(t.as_bytes()) {
            (tag, None) => Ok(tag),
            (_, Some((offset, kind))) => Err(Error::IllFormedLanguageTag { offset, kind }),
        }
    }
}

impl_writeable_for_each_subtag_str_no_test!(LanguageTag, selff, selff.extensions.is_empty() => selff.id.write_to_string());

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    fn parse_ok(s: &str) -> LanguageTag {
        let (tag, status) = LanguageTag::parse(s);
        assert!(status.is_well_formed(), "unexpected truncation in {s:?}");
        tag
    }

    #[test]
    fn test_writeable() {
        assert_writeable_eq!(parse_ok("und"), "und");
        assert_writeable_eq!(parse_ok("my-Mymr-MM"), "my-Mymr-MM");
        assert_writeable_eq!(parse_ok("ar-SA-u-ca-islamic-civil"), "ar-SA-u-ca-islamic-civil");
        assert_writeable_eq!(parse_ok("en-001-x-foo-bar"), "en-001-x-foo-bar");
        assert_writeable_eq!(parse_ok("und-t-m0-true"), "und-t-m0-true");
        assert_writeable_eq!(
            parse_ok("und-a-foo-t-foo-u-foo-w-foo-z-foo-x-foo"),
            "und-a-foo-t-foo-u-foo-w-foo-z-foo-x-foo"
        );
    }

    #[test]
    fn test_truncate_on_error() {
        let (tag, status) = LanguageTag::parse("en-US-$$");
        assert_eq!(tag.to_string(), "en-US");
        assert_eq!(status.error_offset(), Some(6));

        let (tag, status) = LanguageTag::parse("en-u");
        assert_eq!(tag.to_string(), "en");
        assert_eq!(status.error_offset(), Some(3));

        let (tag, status) = LanguageTag::parse("x2");
        assert_eq!(tag.to_string(), "und");
        assert_eq!(status.error_offset(), Some(0));
        assert_eq!(status.error_kind(), Some(ParseError::InvalidLanguage));
    }

    #[test]
    fn test_strict_policy() {
        assert!("en-US".parse::<LanguageTag>().is_ok());
        assert_eq!(
            "en-US-$$".parse::<LanguageTag>(),
            Err(Error::IllFormedLanguageTag {
                offset: 6,
                kind: ParseError::InvalidSubtag
            })
        );
    }

    #[test]
    fn test_grandfathered() {
        assert_eq!(parse_ok("no-nyn").to_string(), "nn");
        assert_eq!(parse_ok("i-klingon").to_string(), "tlh");
        assert_eq!(parse_ok("zh-min-nan").to_string(), "nan");
        assert_eq!(parse_ok("ZH-GUOYU").to_string(), "cmn");
        assert_eq!(parse_ok("cel-gaulish").to_string(), "xtg-x-cel-gaulish");
    }

    #[test]
    fn test_duplicated_singleton_truncates() {
        let (tag, status) = LanguageTag::parse("und-u-hc-h12-u-ca-buddhist");
        assert_eq!(tag.to_string(), "und-u-hc-h12");
        assert_eq!(status.error_kind(), Some(ParseError::DuplicatedExtension));
    }
}
