// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use uniloc::{Error, Field, LanguageTag, Locale, LocaleBuilder};

#[test]
fn test_lenient_parse_both_formats() {
    for (input, expected) in [
        ("en", "en"),
        ("EN-us", "en_US"),
        ("en_US", "en_US"),
        ("zh-hant-tw", "zh_Hant_TW"),
        ("en-u-ca-buddhist", "en@calendar=buddhist"),
        ("de-DE-u-co-phonebk", "de_DE@collation=phonebook"),
        ("en_US@Currency=eur", "en_US@currency=EUR"),
        ("en-US-u-va-posix", "en_US_POSIX"),
        ("x-foo", "@x=foo"),
        ("", ""),
    ] {
        let locale = Locale::try_from_str(input).expect(input);
        assert_eq!(locale.name(), expected, "for input {input:?}");
    }
}

#[test]
fn test_tag_round_trip_preserves_fields_and_keywords() {
    for name in [
        "en",
        "en_US",
        "zh_Hant_TW",
        "en_US_POSIX",
        "sl_IT_ROZAJ",
        "en_US_ABC",
        "de@collation=phonebook",
        "th_TH@calendar=buddhist;collation=pinyin",
        "en@colnumeric=yes",
        "az_Cyrl_AZ@currency=AZN",
        "en@x=foo-bar",
        "en@a=bar-baz",
        "_419",
        "",
    ] {
        let id: Locale = name.parse().expect(name);
        let tag = id.to_language_tag();
        let back = Locale::from_language_tag(&tag);

        assert_eq!(back.language(), id.language(), "language via {tag:?}");
        assert_eq!(back.script(), id.script(), "script via {tag:?}");
        assert_eq!(back.region(), id.region(), "region via {tag:?}");
        assert_eq!(back.variant(), id.variant(), "variant via {tag:?}");

        let before: Vec<(&str, &str)> = id.keywords().collect();
        let after: Vec<(&str, &str)> = back.keywords().collect();
        assert_eq!(before, after, "keywords via {tag:?}");
    }
}

#[test]
fn test_to_language_tag_casing() {
    let locale: Locale = "sr_Latn_RS".parse().unwrap();
    assert_eq!(locale.to_language_tag(), "sr-Latn-RS");

    // BuildTag casing per subtag type: language lower, script title,
    // region upper, variant upper, extensions lower.
    let locale: Locale = "sl_IT_ROZAJ@calendar=gregorian".parse().unwrap();
    assert_eq!(locale.to_language_tag(), "sl-IT-ROZAJ-u-ca-gregory");
}

#[test]
fn test_from_language_tag_truncates() {
    // The lenient tag parser keeps the well-formed prefix.
    let locale = Locale::from_language_tag("en-US-$$-u-ca-buddhist");
    assert_eq!(locale.name(), "en_US");

    let (tag, status) = LanguageTag::parse("en-US-$$-u-ca-buddhist");
    assert_eq!(status.error_offset(), Some(6));
    assert_eq!(tag.to_string(), "en-US");
}

#[test]
fn test_grandfathered_tags() {
    assert_eq!(Locale::from_language_tag("no-nyn").name(), "nn");
    assert_eq!(Locale::from_language_tag("art-lojban").name(), "jbo");
    assert_eq!(Locale::from_language_tag("i-klingon").name(), "tlh");
}

#[test]
fn test_builder_strict_policy() {
    let mut builder = LocaleBuilder::new();
    assert!(builder.set_language("en").is_ok());
    assert_eq!(
        builder.set_language("englishlang"),
        Err(Error::IllFormedSubtag {
            field: Field::Language,
            value: "englishlang".into(),
        })
    );
    // The failed call left the previous value in place.
    assert_eq!(builder.build().name(), "en");
}

#[test]
fn test_builder_full_surface() {
    let mut builder = LocaleBuilder::new();
    builder.set_language("zh").unwrap();
    builder.set_script("Hant").unwrap();
    builder.set_region("TW").unwrap();
    builder.set_unicode_keyword("co", "stroke").unwrap();
    builder.add_unicode_attribute("foobar").unwrap();
    builder.set_extension('x', "private").unwrap();

    let locale = builder.build();
    assert_eq!(
        locale.name(),
        "zh_Hant_TW@attribute=foobar;collation=stroke;x=private"
    );
    assert_eq!(
        locale.to_language_tag(),
        "zh-Hant-TW-u-foobar-co-stroke-x-private"
    );

    builder.clear_extensions();
    assert_eq!(builder.build().name(), "zh_Hant_TW");

    builder.clear();
    assert_eq!(builder.build().name(), "");
}

#[test]
fn test_posix_special_cases() {
    // va=posix with an empty variant collapses into _POSIX with no keyword.
    let locale = Locale::from_language_tag("en-US-u-va-posix");
    assert_eq!(locale.name(), "en_US_POSIX");
    assert_eq!(locale.keyword_value("va"), None);

    // With the variant occupied it stays a keyword.
    let locale = Locale::from_language_tag("en-US-valencia-u-va-posix");
    assert_eq!(locale.name(), "en_US_VALENCIA@va=posix");

    // And back out again.
    let locale: Locale = "en_US_POSIX".parse().unwrap();
    assert_eq!(locale.to_language_tag(), "en-US-u-va-posix");
}

#[test]
fn test_keyword_output_is_key_sorted() {
    let locale = Locale::from_language_tag("und-u-co-pinyin-ca-buddhist");
    assert_eq!(locale.name(), "@calendar=buddhist;collation=pinyin");

    // Insertion order through the builder doesn't matter either.
    let mut builder = LocaleBuilder::new();
    builder.set_unicode_keyword("co", "pinyin").unwrap();
    builder.set_unicode_keyword("ca", "buddhist").unwrap();
    assert_eq!(
        builder.build().name(),
        "@calendar=buddhist;collation=pinyin"
    );
}

#[test]
fn test_unknown_keywords_pass_through() {
    let locale: Locale = "en@zzzz=yes".parse().unwrap();
    assert_eq!(locale.keyword_value("zzzz"), Some("yes"));
    assert_eq!(locale.name(), "en@zzzz=yes");
}

#[test]
fn test_cache_is_transparent() {
    // Two lookups of the same raw input agree with a fresh computation
    // through a different entry point.
    let first = Locale::try_from_str("fr-CA-u-ca-gregory").unwrap();
    let second = Locale::try_from_str("fr-CA-u-ca-gregory").unwrap();
    assert_eq!(first, second);

    let fresh = Locale::from_language_tag("fr-CA-u-ca-gregory");
    assert_eq!(first.name(), fresh.name());
}

#[test]
fn test_locale_in_collections() {
    use std::collections::{BTreeSet, HashSet};

    let mut hashed = HashSet::new();
    hashed.insert(Locale::try_from_str("en_US").unwrap());
    assert!(hashed.contains(&Locale::try_from_str("en-us").unwrap()));

    let mut sorted = BTreeSet::new();
    sorted.insert(Locale::try_from_str("fr").unwrap());
    sorted.insert(Locale::try_from_str("de").unwrap());
    let names: Vec<&str> = sorted.iter().map(|l| l.name()).collect();
    assert_eq!(names, ["de", "fr"]);
}
