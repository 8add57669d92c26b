// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! Canonicalization of legacy identifiers.
//!
//! The tables below are consulted in order and the first match wins. They
//! encode the historically accumulated alias set: POSIX-era names, the
//! pre-euro currency locales, script aliases that predate the script
//! subtag, and variant suffixes that turned into keywords.

use crate::legacy::{self, LegacyParts};

struct VariantAlias {
    /// Uppercase variant token the base name must end with.
    variant: &'static str,
    key: &'static str,
    value: &'static str,
}

/// Variant-suffix rules: strip the suffix, default-inject the keyword.
/// At most one of these ever applies to a given identifier.
static VARIANT_ALIASES: &[VariantAlias] = &[
    VariantAlias {
        variant: "EURO",
        key: "currency",
        value: "EUR",
    },
    VariantAlias {
        variant: "PHONEBOOK",
        key: "collation",
        value: "phonebook",
    },
    VariantAlias {
        variant: "PINYIN",
        key: "collation",
        value: "pinyin",
    },
    VariantAlias {
        variant: "STROKE",
        key: "collation",
        value: "stroke",
    },
];

struct IdAlias {
    /// Whole base name to match, ASCII case-insensitively.
    id: &'static str,
    canonical: &'static str,
    keyword: Option<(&'static str, &'static str)>,
}

macro_rules! alias {
    ($id:literal => $canonical:literal) => {
        IdAlias {
            id: $id,
            canonical: $canonical,
            keyword: None,
        }
    };
    ($id:literal => $canonical:literal, $key:literal = $value:literal) => {
        IdAlias {
            id: $id,
            canonical: $canonical,
            keyword: Some(($key, $value)),
        }
    };
}

/// Exact-match aliases for whole base names, consulted after the variant
/// suffix rules. First match wins; no attempt is made to find a "best"
/// match.
///
/// Source ids are spelled in the normalized form the lenient parser
/// produces, with the doubled separator in front of a variant that has no
/// region.
static ID_ALIASES: &[IdAlias] = &[
    alias!("C" => "en_US_POSIX"),
    alias!("POSIX" => "en_US_POSIX"),
    alias!("art__LOJBAN" => "jbo"),
    alias!("az_AZ_CYRL" => "az_Cyrl_AZ"),
    alias!("az_AZ_LATN" => "az_Latn_AZ"),
    alias!("ca_ES_PREEURO" => "ca_ES", "currency" = "ESP"),
    alias!("de_AT_PREEURO" => "de_AT", "currency" = "ATS"),
    alias!("de_DE_PREEURO" => "de_DE", "currency" = "DEM"),
    alias!("de_LU_PREEURO" => "de_LU", "currency" = "LUF"),
    alias!("el_GR_PREEURO" => "el_GR", "currency" = "GRD"),
    alias!("en_BE_PREEURO" => "en_BE", "currency" = "BEF"),
    alias!("en_IE_PREEURO" => "en_IE", "currency" = "IEP"),
    alias!("es__TRADICIONAL" => "es", "collation" = "traditional"),
    alias!("es_ES_PREEURO" => "es_ES", "currency" = "ESP"),
    alias!("eu_ES_PREEURO" => "eu_ES", "currency" = "ESP"),
    alias!("fi_FI_PREEURO" => "fi_FI", "currency" = "FIM"),
    alias!("fr_BE_PREEURO" => "fr_BE", "currency" = "BEF"),
    alias!("fr_FR_PREEURO" => "fr_FR", "currency" = "FRF"),
    alias!("fr_LU_PREEURO" => "fr_LU", "currency" = "LUF"),
    alias!("ga_IE_PREEURO" => "ga_IE", "currency" = "IEP"),
    alias!("gl_ES_PREEURO" => "gl_ES", "currency" = "ESP"),
    alias!("hi__DIRECT" => "hi", "collation" = "direct"),
    alias!("it_IT_PREEURO" => "it_IT", "currency" = "ITL"),
    alias!("ja_JP_TRADITIONAL" => "ja_JP", "calendar" = "japanese"),
    alias!("nl_BE_PREEURO" => "nl_BE", "currency" = "BEF"),
    alias!("nl_NL_PREEURO" => "nl_NL", "currency" = "NLG"),
    alias!("pt_PT_PREEURO" => "pt_PT", "currency" = "PTE"),
    alias!("sr_SP_CYRL" => "sr_Cyrl_RS"),
    alias!("sr_SP_LATN" => "sr_Latn_RS"),
    alias!("sr_YU_CYRILLIC" => "sr_Cyrl_RS"),
    alias!("th_TH_TRADITIONAL" => "th_TH", "calendar" = "buddhist"),
    alias!("uz_UZ_CYRILLIC" => "uz_Cyrl_UZ"),
    alias!("uz_UZ_CYRL" => "uz_Cyrl_UZ"),
    alias!("uz_UZ_LATN" => "uz_Latn_UZ"),
    alias!("zh__CHS" => "zh_Hans"),
    alias!("zh__CHT" => "zh_Hant"),
    alias!("zh__GUOYU" => "zh"),
    alias!("zh__MIN_NAN" => "zh__MINNAN"),
];

fn default_inject(parts: &mut LegacyParts, key: &str, value: &str) {
    if !parts.keywords.contains_key(key) {
        parts
            .keywords
            .insert(key.into(), legacy::keyword_value_casing(key, value).into());
    }
}

/// Strips `_` + `variant` off the end of `base`, along with any stray `_`
/// left behind by a doubled separator.
fn strip_variant_suffix(base: &str, variant: &str) -> Option<String> {
    let suffix_len = variant.len() + 1;
    if base.len() < suffix_len {
        return None;
    }
    let (head, tail) = base.split_at(base.len() - suffix_len);
    let mut rest = tail.bytes();
    if rest.next() != Some(b'_') || !tail[1..].eq_ignore_ascii_case(variant) {
        return None;
    }
    Some(head.trim_end_matches('_').to_owned())
}

/// Rewrites an identifier into its canonical form.
///
/// Never fails: ill-formed or unmatched inputs are returned unchanged, and
/// the empty string canonicalizes to the empty string (it is not an alias
/// for any default locale).
pub(crate) fn canonicalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let Ok(mut parts) = legacy::parse_name(text) else {
        return text.to_owned();
    };
    let mut base = legacy::write_base_name(&parts);

    let mut matched = false;
    for rule in VARIANT_ALIASES {
        if let Some(stripped) = strip_variant_suffix(&base, rule.variant) {
            base = stripped;
            default_inject(&mut parts, rule.key, rule.value);
            matched = true;
            break;
        }
    }

    if !matched {
        for rule in ID_ALIASES {
            if base.eq_ignore_ascii_case(rule.id) {
                base = rule.canonical.to_owned();
                if let Some((key, value)) = rule.keyword {
                    default_inject(&mut parts, key, value);
                }
                matched = true;
                break;
            }
        }
    }

    if !matched && parts.language == "nb" && parts.variant == "NY" {
        // The legacy Norwegian exception: Nynorsk was spelled as a variant
        // of Bokmål before it had its own language code.
        parts.language = "nn".to_owned();
        parts.variant.clear();
        base = legacy::write_base_name(&parts);
    }

    legacy::append_keywords(base, &parts.keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_aliases() {
        assert_eq!(canonicalize("C"), "en_US_POSIX");
        assert_eq!(canonicalize("POSIX"), "en_US_POSIX");
        assert_eq!(canonicalize("en_US_POSIX"), "en_US_POSIX");
    }

    #[test]
    fn test_empty_is_not_posix() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_variant_suffix_rules() {
        assert_eq!(canonicalize("de__PHONEBOOK"), "de@collation=phonebook");
        assert_eq!(canonicalize("zh_TW_STROKE"), "zh_TW@collation=stroke");
        assert_eq!(canonicalize("fr_FR_EURO"), "fr_FR@currency=EUR");
        // An explicit keyword wins over the injected default.
        assert_eq!(
            canonicalize("de__PHONEBOOK@collation=standard"),
            "de@collation=standard"
        );
    }

    #[test]
    fn test_exact_aliases() {
        assert_eq!(canonicalize("az_AZ_CYRL"), "az_Cyrl_AZ");
        assert_eq!(canonicalize("zh_CHS"), "zh_Hans");
        assert_eq!(canonicalize("zh_chs"), "zh_Hans");
        assert_eq!(canonicalize("th_TH_TRADITIONAL"), "th_TH@calendar=buddhist");
        assert_eq!(canonicalize("ca_ES_PREEURO"), "ca_ES@currency=ESP");
        assert_eq!(canonicalize("hi__DIRECT"), "hi@collation=direct");
    }

    #[test]
    fn test_norwegian_exception() {
        assert_eq!(canonicalize("nb_NO_NY"), "nn_NO");
        // No such rule for other languages.
        assert_eq!(canonicalize("fr_FR_NY"), "fr_FR_NY");
    }

    #[test]
    fn test_unmatched_is_identity() {
        assert_eq!(canonicalize("en_US"), "en_US");
        assert_eq!(canonicalize("xx_YY_ZZZZ"), "xx_YY_ZZZZ");
    }

    #[test]
    fn test_idempotence() {
        for input in [
            "C",
            "",
            "de__PHONEBOOK",
            "nb_NO_NY",
            "fr_FR_EURO",
            "th_TH_TRADITIONAL",
            "en_US",
            "sr_SP_CYRL",
            "de@collation=phonebook",
        ] {
            let once = canonicalize(input);
            assert_eq!(canonicalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_exact_match_is_whole_name() {
        // "zh_MIN_NAN" normalizes to the doubled-separator form before the
        // table scan; the alias rewrites the variant spelling.
        assert_eq!(canonicalize("zh_MIN_NAN"), "zh__MINNAN");
        assert_eq!(canonicalize("art_LOJBAN"), "jbo");
        // A rule source is never treated as a prefix.
        assert_eq!(canonicalize("zh_CHS_FOOBAR"), "zh__CHS_FOOBAR");
    }
}
