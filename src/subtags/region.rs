// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

impl_tinystr_subtag!(
    /// A region subtag (examples: `"US"`, `"CN"`, `"AR"` etc.)
    ///
    /// [`Region`] represents the region of a locale identifier: either a
    /// two letter ASCII code stored uppercase, or a three digit numeric
    /// area code.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Region;
    ///
    /// let region: Region =
    ///     "DE".parse().expect("Failed to parse a region subtag.");
    /// ```
    Region,
    subtags,
    region,
    subtags_region,
    2..=3,
    s,
    if s.len() == 2 {
        s.is_ascii_alphabetic()
    } else {
        s.is_ascii_numeric()
    },
    if s.len() == 2 {
        s.to_ascii_uppercase()
    } else {
        s
    },
    InvalidSubtag,
    ["FR", "123"],
    ["12", "FRA", "b2"],
);

impl Region {
    /// Returns true if the Region has an alphabetic code.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::region;
    ///
    /// assert!(region!("us").is_alphabetic());
    /// ```
    pub fn is_alphabetic(&self) -> bool {
        self.0.len() == 2
    }
}
