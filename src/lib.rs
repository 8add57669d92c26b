// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! Parsing, validation, canonicalization and interchange of locale
//! identifiers.
//!
//! This crate handles the two textual representations a locale-sensitive
//! stack has to key its data on:
//!
//! * the legacy underscore format,
//!   `lang[_Script][_REGION][_VARIANT][@key=value;…]`, e.g.
//!   `zh_Hant_TW@collation=stroke`;
//! * the IETF BCP-47 language tag, e.g. `zh-Hant-TW-u-co-stroke`.
//!
//! It produces canonical, comparable identifier strings; it does not
//! resolve any data for a locale.
//!
//! # Examples
//!
//! ```
//! use uniloc::Locale;
//!
//! let locale = Locale::try_from_str("en-US-u-ca-buddhist").unwrap();
//! assert_eq!(locale.name(), "en_US@calendar=buddhist");
//! assert_eq!(locale.to_language_tag(), "en-US-u-ca-buddhist");
//!
//! assert_eq!(Locale::canonicalize("de__PHONEBOOK"), "de@collation=phonebook");
//! assert_eq!(Locale::canonicalize("nb_NO_NY"), "nn_NO");
//! ```
//!
//! Strict, field-by-field construction goes through the builder:
//!
//! ```
//! use uniloc::LocaleBuilder;
//!
//! let mut builder = LocaleBuilder::new();
//! builder.set_language("sr").unwrap();
//! builder.set_script("Cyrl").unwrap();
//! builder.set_region("RS").unwrap();
//! assert_eq!(builder.build().name(), "sr_Cyrl_RS");
//! ```
//!
//! # Strict and lenient by design
//!
//! The two policies are separate, intentional behaviors: the
//! [`LocaleBuilder`] fails immediately on the first ill-formed field, while
//! [`LanguageTag::parse`] truncates at the first ill-formed subtag and
//! returns the well-formed prefix. Canonicalization never fails; unmatched
//! input comes back unchanged.

#![warn(missing_docs)]

#[macro_use]
mod helpers;

mod aliases;
mod builder;
mod cache;
pub mod extensions;
mod interchange;
mod keymap;
mod langid;
mod legacy;
mod locale;
mod parser;
pub mod subtags;

pub use builder::LocaleBuilder;
pub use keymap::{to_bcp47_key, to_bcp47_type, to_legacy_key, to_legacy_type};
pub use langid::LanguageIdentifier;
pub use locale::Locale;
pub use parser::{Error, Field, LanguageTag, ParseError, ParseStatus};
