// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use displaydoc::Display;

/// List of parser errors that can be generated while validating individual
/// [`subtags`](crate::subtags) or [`extensions`](crate::extensions).
///
/// These are deliberately payload-free so that subtag constructors stay
/// `const`; the public entry points wrap them into [`Error`] with the field
/// and offset context attached.
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone)]
#[non_exhaustive]
pub enum ParseError {
    /// Invalid language subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Language;
    /// use uniloc::ParseError;
    ///
    /// assert_eq!("x2".parse::<Language>(), Err(ParseError::InvalidLanguage));
    /// ```
    #[displaydoc("The given language subtag is invalid")]
    InvalidLanguage,

    /// Invalid script, region or variant subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::subtags::Region;
    /// use uniloc::ParseError;
    ///
    /// assert_eq!("#@2X".parse::<Region>(), Err(ParseError::InvalidSubtag));
    /// ```
    #[displaydoc("Invalid subtag")]
    InvalidSubtag,

    /// Invalid extension subtag.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::Key;
    /// use uniloc::ParseError;
    ///
    /// assert_eq!("#@2X".parse::<Key>(), Err(ParseError::InvalidExtension));
    /// ```
    #[displaydoc("Invalid extension")]
    InvalidExtension,

    /// Duplicated extension.
    #[displaydoc("Duplicated extension")]
    DuplicatedExtension,
}

impl core::error::Error for ParseError {}

/// The positional field a subtag was being validated against.
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum Field {
    /// language
    #[displaydoc("language")]
    Language,
    /// script
    #[displaydoc("script")]
    Script,
    /// region
    #[displaydoc("region")]
    Region,
    /// variant
    #[displaydoc("variant")]
    Variant,
    /// extension
    #[displaydoc("extension")]
    Extension,
    /// private use
    #[displaydoc("private use")]
    PrivateUse,
    /// Unicode extension attribute
    #[displaydoc("attribute")]
    Attribute,
    /// keyword key
    #[displaydoc("key")]
    Key,
    /// keyword type
    #[displaydoc("type")]
    Type,
}

/// Errors returned by the strict entry points: the
/// [`LocaleBuilder`](crate::LocaleBuilder) setters and fail-fast tag
/// parsing.
///
/// The lenient tag parser does not produce this error; it truncates at the
/// first ill-formed subtag and reports the position through
/// [`ParseStatus`](crate::ParseStatus) instead. Canonicalization never
/// fails at all. Unknown keywords are not an error anywhere; they pass
/// through unchanged.
#[derive(Display, Debug, PartialEq, Eq, Clone)]
#[non_exhaustive]
pub enum Error {
    /// the {field} subtag "{value}" is ill-formed
    IllFormedSubtag {
        /// Which positional field rejected the input.
        field: Field,
        /// The offending input, as given.
        value: Box<str>,
    },
    /// the language tag is ill-formed at offset {offset}: {kind}
    IllFormedLanguageTag {
        /// Byte offset of the first subtag that failed its positional grammar.
        offset: usize,
        /// The validator error for that subtag.
        kind: ParseError,
    },
}

impl core::error::Error for Error {}

impl Error {
    pub(crate) fn ill_formed(field: Field, value: &str) -> Self {
        Self::IllFormedSubtag {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ill_formed(Field::Language, "englishlang");
        assert_eq!(
            err.to_string(),
            "the language subtag \"englishlang\" is ill-formed"
        );

        let err = Error::IllFormedLanguageTag {
            offset: 3,
            kind: ParseError::InvalidSubtag,
        };
        assert_eq!(
            err.to_string(),
            "the language tag is ill-formed at offset 3: Invalid subtag"
        );
    }
}
