// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! The legacy identifier grammar:
//! `lang[_Script][_REGION][_VARIANT][@key=value[;key=value...]]`.
//!
//! Parsing here is deliberately lenient: the portion before `@` is split on
//! `_`/`-` into up to four positional fields by a length heuristic, and
//! whatever does not fit a position is folded into the variant field. The
//! strict validation lives in the typed [`subtags`](crate::subtags) and the
//! [`LocaleBuilder`](crate::LocaleBuilder); this module's job is to accept
//! what historical callers produce and put it into canonical casing.

use crate::parser::{Error, Field};
use litemap::LiteMap;

/// The legacy `@key=value` keyword map, sorted by key. Sorted order is also
/// the serialization order, making the serialized form canonical regardless
/// of the order keywords arrived in.
pub(crate) type KeywordMap = LiteMap<Box<str>, Box<str>>;

/// Reserved keyword carrying `-`-joined Unicode locale attributes.
pub(crate) const ATTRIBUTE_KEY: &str = "attribute";
/// Reserved keyword carrying `-`-joined private use subtags.
pub(crate) const PRIVATE_KEY: &str = "x";

/// A lenient decomposition of a legacy identifier, all fields in canonical
/// casing: language lowercase, script titlecase, region uppercase, variant
/// uppercase and `_`-joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LegacyParts {
    pub language: String,
    pub script: String,
    pub region: String,
    pub variant: String,
    pub keywords: KeywordMap,
}

fn is_script(t: &str) -> bool {
    t.len() == 4 && t.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(t: &str) -> bool {
    (t.len() == 2 && t.bytes().all(|b| b.is_ascii_alphabetic()))
        || (t.len() == 3 && t.bytes().all(|b| b.is_ascii_digit()))
}

fn titlecase(t: &str) -> String {
    let mut out = String::with_capacity(t.len());
    let mut bytes = t.bytes();
    if let Some(first) = bytes.next() {
        out.push(first.to_ascii_uppercase() as char);
    }
    for b in bytes {
        out.push(b.to_ascii_lowercase() as char);
    }
    out
}

/// Canonical casing for a keyword value. Keys are always lowercased; most
/// values are too, except where the legacy type carries required casing:
/// currency codes are uppercase, and timezone ids, private use and
/// attributes keep the casing they arrived with.
pub(crate) fn keyword_value_casing(key: &str, value: &str) -> String {
    match key {
        "currency" => value.to_ascii_uppercase(),
        "timezone" | PRIVATE_KEY | ATTRIBUTE_KEY => value.to_owned(),
        _ => value.to_ascii_lowercase(),
    }
}

/// Splits a legacy identifier into positional fields and keywords.
///
/// The positional scan: the first field is the language; a 4-alpha field in
/// script position is the script; a 2-alpha or 3-digit field in region
/// position is the region; everything left over is folded into the variant,
/// joined by `_`. Unknown keyword keys pass through untouched; a keyword
/// pair without `=`, or with an empty key or value, is ill-formed.
pub(crate) fn parse_name(text: &str) -> Result<LegacyParts, Error> {
    let mut parts = LegacyParts::default();
    if text.is_empty() {
        return Ok(parts);
    }

    let (base, keywords) = match text.split_once('@') {
        Some((base, keywords)) => (base, Some(keywords)),
        None => (text, None),
    };

    let mut fields = base.split(['_', '-']);

    if let Some(first) = fields.next() {
        if !first.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::ill_formed(Field::Language, first));
        }
        // "und" and the empty language are the same thing; the legacy
        // spelling of both is empty.
        if !first.eq_ignore_ascii_case("und") {
            parts.language = first.to_ascii_lowercase();
        }
    }

    let mut fields = fields.peekable();
    if let Some(&t) = fields.peek() {
        if is_script(t) {
            parts.script = titlecase(t);
            fields.next();
        }
    }
    if let Some(&t) = fields.peek() {
        if is_region(t) {
            parts.region = t.to_ascii_uppercase();
            fields.next();
        }
    }

    let mut variant = String::new();
    for t in fields {
        if t.is_empty() {
            continue;
        }
        if !t.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(Error::ill_formed(Field::Variant, t));
        }
        if !variant.is_empty() {
            variant.push('_');
        }
        variant.push_str(&t.to_ascii_uppercase());
    }
    parts.variant = variant;

    if let Some(keywords) = keywords {
        for pair in keywords.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(Error::ill_formed(Field::Key, pair));
            };
            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(Error::ill_formed(Field::Key, key));
            }
            if value.is_empty()
                || !value
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'/'))
            {
                return Err(Error::ill_formed(Field::Type, value));
            }
            let key = key.to_ascii_lowercase();
            let value = keyword_value_casing(&key, value);
            parts.keywords.insert(key.into(), value.into());
        }
    }

    Ok(parts)
}

/// Serializes positional fields only: `language[_script][_region][_variant]`,
/// with a doubled separator in front of the variant when the region is
/// empty.
pub(crate) fn write_base_name(parts: &LegacyParts) -> String {
    let mut out = String::with_capacity(
        parts.language.len() + parts.script.len() + parts.region.len() + parts.variant.len() + 4,
    );
    out.push_str(&parts.language);
    if !parts.script.is_empty() {
        out.push('_');
        out.push_str(&parts.script);
    }
    if !parts.region.is_empty() {
        out.push('_');
        out.push_str(&parts.region);
    }
    if !parts.variant.is_empty() {
        if parts.region.is_empty() {
            out.push('_');
        }
        out.push('_');
        out.push_str(&parts.variant);
    }
    out
}

/// Appends `@key=value;…` to a base name, in ascending key order.
pub(crate) fn append_keywords(mut base: String, keywords: &KeywordMap) -> String {
    if keywords.is_empty() {
        return base;
    }
    base.push('@');
    let mut initial = true;
    for (key, value) in keywords.iter() {
        if initial {
            initial = false;
        } else {
            base.push(';');
        }
        base.push_str(key);
        base.push('=');
        base.push_str(value);
    }
    base
}

/// The exact inverse of [`parse_name`]: `_`-delimited subtags and
/// `;`-delimited, alphabetically sorted keywords.
pub(crate) fn write_name(parts: &LegacyParts) -> String {
    append_keywords(write_base_name(parts), &parts.keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(input: &str, expected: &str) {
        let parts = parse_name(input).expect("parse failed");
        assert_eq!(write_name(&parts), expected, "for input {input:?}");
    }

    #[test]
    fn test_positional_heuristic() {
        roundtrip("en", "en");
        roundtrip("en_US", "en_US");
        roundtrip("EN-us", "en_US");
        roundtrip("zh_Hans_CN", "zh_Hans_CN");
        roundtrip("zh-hant-tw", "zh_Hant_TW");
        roundtrip("en_US_POSIX", "en_US_POSIX");
        roundtrip("und_419", "_419");
        roundtrip("_419", "_419");
        roundtrip("az_cyrl", "az_Cyrl");
    }

    #[test]
    fn test_variant_fold() {
        // No region: the variant takes a doubled separator.
        roundtrip("de__PHONEBOOK", "de__PHONEBOOK");
        roundtrip("de__phonebook", "de__PHONEBOOK");
        // Region slot is positional; a non-region field falls through.
        roundtrip("en__US", "en__US");
        roundtrip("sl_IT_ROZAJ_BISKE", "sl_IT_ROZAJ_BISKE");
    }

    #[test]
    fn test_single_letter_language() {
        // "C" never reaches a tag grammar here; the lenient scan keeps it.
        roundtrip("C", "c");
    }

    #[test]
    fn test_keywords() {
        roundtrip("de@collation=phonebook", "de@collation=phonebook");
        roundtrip(
            "de@COLLATION=PHONEBOOK;calendar=gregorian",
            "de@calendar=gregorian;collation=phonebook",
        );
        roundtrip("en_US@currency=eur", "en_US@currency=EUR");
        roundtrip(
            "en@timezone=America/New_York",
            "en@timezone=America/New_York",
        );
        roundtrip("en@attribute=Foo-bar", "en@attribute=Foo-bar");
    }

    #[test]
    fn test_keywords_sorted_regardless_of_origin() {
        roundtrip(
            "zh@collation=pinyin;calendar=chinese",
            "zh@calendar=chinese;collation=pinyin",
        );
    }

    #[test]
    fn test_empty() {
        roundtrip("", "");
    }

    #[test]
    fn test_ill_formed_keywords() {
        assert!(parse_name("en@foo").is_err());
        assert!(parse_name("en@=bar").is_err());
        assert!(parse_name("en@foo=").is_err());
        assert!(parse_name("en@fo!o=bar").is_err());
    }

    #[test]
    fn test_unknown_keywords_pass_through() {
        roundtrip("en@zzzz=yes", "en@zzzz=yes");
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(parse_name("dé_DE").is_err());
    }
}
