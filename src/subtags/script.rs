// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A script subtag (examples: `"Latn"`, `"Arab"`, etc.)
    ///
    /// [`Script`] represents the written script of a locale identifier,
    /// a four letter ASCII code stored titlecase.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Script;
    ///
    /// let script: Script =
    ///     "Latn".parse().expect("Failed to parse a script subtag.");
    /// ```
    Script,
    subtags,
    script,
    subtags_script,
    4..=4,
    s,
    s.is_ascii_alphabetic(),
    s.to_ascii_titlecase(),
    InvalidSubtag,
    ["Latn"],
    ["Latin"],
);
