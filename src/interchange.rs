// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! Reconstruction between the two representations: a structural
//! [`LanguageTag`] and the legacy identifier string.
//!
//! Both directions are total. Going to the legacy form, every extension
//! lands in the keyword map (Unicode key/type pairs under their legacy
//! keys, attributes under the synthetic `attribute` keyword, private use
//! under `x`, anything else under its singleton character) and the keyword
//! map serializes sorted. Going to the tag, a legacy variant with no
//! well-formed tag representation rides along in the private use extension
//! behind the `lvariant` marker so the round trip stays lossless.

use std::borrow::Cow;

use crate::extensions::{other::Other, private, unicode, ExtensionType};
use crate::keymap;
use crate::legacy::{self, LegacyParts, ATTRIBUTE_KEY, PRIVATE_KEY};
use crate::parser::LanguageTag;
use crate::subtags;

/// Marker subtag separating carried-over legacy variants from ordinary
/// private use subtags.
const LVARIANT: &str = "lvariant";

/// Builds the canonical legacy identifier for a parsed tag.
pub(crate) fn tag_to_name(tag: &LanguageTag) -> String {
    let mut parts = LegacyParts::default();

    if !tag.id.language.is_unknown() {
        parts.language = tag.id.language.as_str().to_owned();
    }
    if let Some(script) = tag.id.script {
        parts.script = script.as_str().to_owned();
    }
    if let Some(region) = tag.id.region {
        parts.region = region.as_str().to_owned();
    }

    let mut variant_tokens: Vec<String> = tag
        .id
        .variants
        .iter()
        .map(|v| v.as_str().to_owned())
        .collect();

    // Private use subtags behind the `lvariant` marker rejoin the variant
    // field; the ones in front of it stay private.
    let mut private_subtags: Vec<&str> = tag.extensions.private.iter().map(|s| s.as_str()).collect();
    if let Some(pos) = private_subtags.iter().position(|s| *s == LVARIANT) {
        for carried in private_subtags.split_off(pos).into_iter().skip(1) {
            variant_tokens.push(carried.to_ascii_uppercase());
        }
    }

    let mut posix = false;
    for (key, value) in tag.extensions.unicode.keywords.iter() {
        let Some(lkey) = keymap::to_legacy_key(key.as_str()) else {
            continue;
        };
        let ltype: Cow<str> = if value.is_empty() {
            Cow::Borrowed("yes")
        } else {
            let bcp_type = value.to_string();
            match keymap::to_legacy_type(&lkey, &bcp_type) {
                Some(t) => t,
                None => Cow::Owned(bcp_type),
            }
        };
        if lkey == "va" && ltype == "posix" && variant_tokens.is_empty() {
            // The POSIX locale collapses into the variant field instead of
            // staying a keyword, but only when the variant is free.
            posix = true;
        } else {
            let value = legacy::keyword_value_casing(&lkey, &ltype);
            parts.keywords.insert(lkey.into_owned().into(), value.into());
        }
    }
    if posix {
        variant_tokens.push("POSIX".to_owned());
    }
    parts.variant = variant_tokens.join("_");

    let attributes = &tag.extensions.unicode.attributes;
    if !attributes.is_empty() {
        let joined = attributes
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join("-");
        parts.keywords.insert(ATTRIBUTE_KEY.into(), joined.into());
    }

    for other in &tag.extensions.other {
        let joined = other.iter().map(|s| s.as_str()).collect::<Vec<_>>().join("-");
        parts
            .keywords
            .insert(other.get_ext_str().into(), joined.into());
    }

    if !private_subtags.is_empty() {
        parts
            .keywords
            .insert(PRIVATE_KEY.into(), private_subtags.join("-").into());
    }

    legacy::write_name(&parts)
}

/// Builds a structural tag for a legacy identifier decomposition.
///
/// Ill-formed positional fields degrade instead of failing: an ill-formed
/// language becomes `und`, ill-formed script/region are dropped, and
/// ill-formed variant tokens are carried through private use behind
/// `lvariant` (tokens too long even for that are dropped). Keywords with no
/// tag representation are skipped.
pub(crate) fn name_to_tag(parts: &LegacyParts) -> LanguageTag {
    let mut tag = LanguageTag::default();

    if let Ok(language) = subtags::Language::try_from_str(&parts.language) {
        tag.id.language = language;
    }
    tag.id.script = subtags::Script::try_from_str(&parts.script).ok();
    tag.id.region = subtags::Region::try_from_str(&parts.region).ok();

    let tokens: Vec<&str> = parts.variant.split('_').filter(|t| !t.is_empty()).collect();
    let posix = tokens == ["POSIX"] && !parts.keywords.contains_key("va");
    let mut carried: Vec<&str> = Vec::new();
    if !posix {
        for token in tokens {
            match subtags::Variant::try_from_str(token) {
                Ok(v) => {
                    tag.id.variants.push(v);
                }
                Err(_) => carried.push(token),
            }
        }
    }

    for (key, value) in parts.keywords.iter() {
        match key.as_ref() {
            ATTRIBUTE_KEY => {
                for attr in value.split('-') {
                    if let Ok(attr) = unicode::Attribute::try_from_str(attr) {
                        tag.extensions.unicode.attributes.insert(attr);
                    }
                }
            }
            PRIVATE_KEY => {
                for subtag in value.split('-') {
                    if let Ok(subtag) = private::Subtag::try_from_str(subtag) {
                        tag.extensions.private.push(subtag);
                    }
                }
            }
            k if k.len() == 1 => {
                let Some(&byte) = k.as_bytes().first() else {
                    continue;
                };
                let Ok(ExtensionType::Other(ext)) = ExtensionType::try_from_byte(byte) else {
                    continue;
                };
                let keys: Vec<subtags::Subtag> = value
                    .split('-')
                    .filter_map(|s| subtags::Subtag::try_from_str(s).ok())
                    .collect();
                if !keys.is_empty() {
                    tag.extensions.set_other(Other::from_vec_unchecked(ext, keys));
                }
            }
            k => {
                let Some(bcp_key) = keymap::to_bcp47_key(k) else {
                    continue;
                };
                let Ok(ukey) = unicode::Key::try_from_str(&bcp_key) else {
                    continue;
                };
                let Some(bcp_type) = keymap::to_bcp47_type(k, value) else {
                    continue;
                };
                let Ok(uvalue) = unicode::Value::try_from_str(&bcp_type) else {
                    continue;
                };
                tag.extensions.unicode.keywords.set(ukey, uvalue);
            }
        }
    }

    if posix {
        if let (Ok(key), Ok(value)) = (
            unicode::Key::try_from_str("va"),
            unicode::Value::try_from_str("posix"),
        ) {
            tag.extensions.unicode.keywords.set(key, value);
        }
    }

    if !carried.is_empty() {
        if let Ok(marker) = private::Subtag::try_from_str(LVARIANT) {
            tag.extensions.private.push(marker);
            for token in carried {
                if let Ok(subtag) = private::Subtag::try_from_str(&token.to_ascii_lowercase()) {
                    tag.extensions.private.push(subtag);
                }
            }
        }
    }

    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::parse_name;

    fn name_of(tag_text: &str) -> String {
        let (tag, _) = LanguageTag::parse(tag_text);
        tag_to_name(&tag)
    }

    fn tag_of(name: &str) -> String {
        use writeable::Writeable;
        name_to_tag(&parse_name(name).expect("parse failed")).write_to_string().into_owned()
    }

    #[test]
    fn test_tag_to_name_base() {
        assert_eq!(name_of("en"), "en");
        assert_eq!(name_of("und"), "");
        assert_eq!(name_of("en-US"), "en_US");
        assert_eq!(name_of("zh-Hant-TW"), "zh_Hant_TW");
        assert_eq!(name_of("sl-rozaj-biske"), "sl__ROZAJ_BISKE");
    }

    #[test]
    fn test_tag_to_name_unicode_keywords() {
        assert_eq!(name_of("en-u-ca-buddhist"), "en@calendar=buddhist");
        assert_eq!(
            name_of("th-TH-u-ca-buddhist-co-pinyin"),
            "th_TH@calendar=buddhist;collation=pinyin"
        );
        assert_eq!(name_of("de-DE-u-co-phonebk"), "de_DE@collation=phonebook");
        assert_eq!(name_of("en-u-cu-eur"), "en@currency=EUR");
        // An empty type means "true", spelled "yes" in the legacy form.
        assert_eq!(name_of("en-u-kn"), "en@colnumeric=yes");
        assert_eq!(name_of("en-u-kn-true"), "en@colnumeric=yes");
    }

    #[test]
    fn test_tag_to_name_posix() {
        assert_eq!(name_of("en-US-u-va-posix"), "en_US_POSIX");
        // A tag variant occupies the variant field, so `va=posix` stays a
        // keyword.
        assert_eq!(name_of("en-US-valencia-u-va-posix"), "en_US_VALENCIA@va=posix");
    }

    #[test]
    fn test_tag_to_name_attributes_and_private() {
        assert_eq!(
            name_of("und-u-attr2-attr1-ca-buddhist"),
            "@attribute=attr1-attr2;calendar=buddhist"
        );
        assert_eq!(name_of("en-x-foo-bar"), "en@x=foo-bar");
        assert_eq!(name_of("en-a-bar-baz"), "en@a=bar-baz");
        assert_eq!(name_of("my-t-my-d0-zawgyi"), "my@t=my-d0-zawgyi");
    }

    #[test]
    fn test_name_to_tag_base() {
        assert_eq!(tag_of(""), "und");
        assert_eq!(tag_of("en_US"), "en-US");
        assert_eq!(tag_of("zh_Hans_CN"), "zh-Hans-CN");
        // BuildTag casing: variants are emitted uppercase.
        assert_eq!(tag_of("sl_IT_ROZAJ"), "sl-IT-ROZAJ");
    }

    #[test]
    fn test_name_to_tag_posix() {
        assert_eq!(tag_of("en_US_POSIX"), "en-US-u-va-posix");
    }

    #[test]
    fn test_name_to_tag_keywords() {
        assert_eq!(tag_of("de@collation=phonebook"), "de-u-co-phonebk");
        assert_eq!(
            tag_of("th_TH@calendar=buddhist;collation=pinyin"),
            "th-TH-u-ca-buddhist-co-pinyin"
        );
        assert_eq!(tag_of("en@colnumeric=yes"), "en-u-kn");
        assert_eq!(tag_of("en@x=foo-bar"), "en-x-foo-bar");
        assert_eq!(tag_of("en@a=bar-baz"), "en-a-bar-baz");
        // Keys and values with no tag representation are skipped.
        assert_eq!(tag_of("en@zzzz=yes"), "en");
        assert_eq!(tag_of("en@timezone=America/New_York"), "en");
    }

    #[test]
    fn test_lvariant_carries_legacy_variants() {
        assert_eq!(tag_of("en_US_ABC"), "en-US-x-lvariant-abc");
        assert_eq!(name_of("en-US-x-lvariant-abc"), "en_US_ABC");
        // Private use in front of the marker survives unscathed.
        assert_eq!(name_of("en-x-foo-lvariant-abc"), "en_ABC@x=foo");
    }

    #[test]
    fn test_ill_formed_fields_degrade() {
        assert_eq!(tag_of("c"), "und");
        assert_eq!(tag_of("en_US@attribute=foobar"), "en-US-u-foobar");
    }
}
