// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// An attribute used in a set of [`Attributes`](super::Attributes).
    ///
    /// An attribute has to be a sequence of alphanumerical characters no
    /// shorter than three and no longer than eight characters.
    ///
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::{attribute, Attribute};
    ///
    /// let attr: Attribute =
    ///     "Buddhist".parse().expect("Failed to parse an Attribute.");
    ///
    /// assert_eq!(attr, attribute!("buddhist"));
    /// ```
    Attribute,
    extensions::unicode,
    attribute,
    extensions_unicode_attribute,
    3..=8,
    s,
    s.is_ascii_alphanumeric(),
    s.to_ascii_lowercase(),
    InvalidExtension,
    ["foo12"],
    ["no", "toolooong"],
);
