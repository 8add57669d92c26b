// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A language subtag (examples: `"en"`, `"csb"`, `"zh"`, `"und"`, etc.)
    ///
    /// [`Language`] represents the primary language code of a locale
    /// identifier, a two-to-eight letter ASCII code stored lowercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Language;
    ///
    /// let language: Language =
    ///     "en".parse().expect("Failed to parse a language subtag.");
    /// ```
    ///
    /// If the [`Language`] has no value assigned, it serializes to a string `"und"`, which
    /// can be then parsed back to an empty [`Language`] field.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Language;
    ///
    /// assert_eq!(Language::UNKNOWN.as_str(), "und");
    /// ```
    Language,
    subtags,
    language,
    subtags_language,
    2..=8,
    s,
    s.is_ascii_alphabetic(),
    s.to_ascii_lowercase(),
    InvalidLanguage,
    ["en", "foo"],
    ["419", "germangerman", "en1"],
);

impl Language {
    /// The unknown language "und".
    pub const UNKNOWN: Self = language!("und");

    /// Whether this [`Language`] equals [`Language::UNKNOWN`].
    #[inline]
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::UNKNOWN)
    }
}
