// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A variant subtag (examples: `"POSIX"`, `"1996"` etc.)
    ///
    /// [`Variant`] represents a well-formed variant adjustment of a locale
    /// identifier: five to eight alphanumerics, or four starting with a
    /// digit. Variants normalize to uppercase, the canonical casing of the
    /// legacy identifier format, which is also the casing the tag builder
    /// emits.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Variant;
    ///
    /// let variant: Variant =
    ///     "posix".parse().expect("Failed to parse a variant subtag.");
    /// assert_eq!(variant.as_str(), "POSIX");
    /// ```
    Variant,
    subtags,
    variant,
    subtags_variant,
    4..=8,
    s,
    s.is_ascii_alphanumeric() && (s.len() != 4 || s.all_bytes()[0].is_ascii_digit()),
    s.to_ascii_uppercase(),
    InvalidSubtag,
    ["POSIX", "1996"],
    ["yes"],
);
