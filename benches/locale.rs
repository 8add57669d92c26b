// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use uniloc::Locale;

static NAMES: &[&str] = &[
    "en",
    "en_US",
    "en_US_POSIX",
    "zh_Hant_TW@collation=stroke",
    "de_DE@collation=phonebook",
    "az_Cyrl_AZ",
    "th_TH@calendar=buddhist;numbers=thai",
    "sr_Latn_RS",
    "und_419",
    "fr_FR_EURO",
];

static TAGS: &[&str] = &[
    "en",
    "en-US",
    "en-US-u-va-posix",
    "zh-Hant-TW-u-co-stroke",
    "de-DE-u-co-phonebk",
    "az-Cyrl-AZ",
    "th-TH-u-ca-buddhist-nu-thai",
    "sr-Latn-RS",
    "und-419",
    "art-lojban",
];

fn locale_benches(c: &mut Criterion) {
    c.bench_function("locale/canonicalize", |b| {
        b.iter(|| {
            for name in NAMES {
                let _ = Locale::canonicalize(black_box(name));
            }
        })
    });

    c.bench_function("locale/from_language_tag", |b| {
        b.iter(|| {
            for tag in TAGS {
                let _ = Locale::from_language_tag(black_box(tag));
            }
        })
    });

    c.bench_function("locale/to_language_tag", |b| {
        let locales: Vec<Locale> = NAMES.iter().map(|s| s.parse().unwrap()).collect();
        b.iter(|| {
            for locale in &locales {
                let _ = locale.to_language_tag();
            }
        })
    });
}

criterion_group!(benches, locale_benches);
criterion_main!(benches);
