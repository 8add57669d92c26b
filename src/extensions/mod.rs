// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! Extensions provide a mechanism to extend a locale identifier with
//! additional bits of information beyond the base language, script, region
//! and variants.
//!
//! There are three representations of extensions here:
//!
//!  * [`Unicode Extensions`] - marked as `u`.
//!  * [`Private Use Extensions`] - marked as `x`.
//!  * [`Other Extensions`] - marked as any `a-z` except of `u` and `x`.
//!
//! In the legacy identifier format extensions surface as `@key=value`
//! keywords: the Unicode extension contributes key/type pairs (plus the
//! synthetic `attribute` keyword), the private use extension becomes the
//! `x` keyword, and every other singleton becomes a keyword named after its
//! single character.
//!
//! # Examples
//!
//! ```
//! use uniloc::extensions::unicode::Key;
//! use uniloc::LanguageTag;
//!
//! let (tag, status) = LanguageTag::parse("en-US-u-ca-buddhist-t-en-us-x-foo");
//! assert!(status.is_well_formed());
//!
//! assert_eq!(tag.id.language, "en".parse().unwrap());
//! assert_eq!(tag.id.region, Some("US".parse().unwrap()));
//!
//! let key: Key = "ca".parse().unwrap();
//! assert_eq!(
//!     tag.extensions.unicode.keywords.get(&key),
//!     Some(&"buddhist".parse().unwrap())
//! );
//! ```
//!
//! [`Other Extensions`]: other
//! [`Private Use Extensions`]: private
//! [`Unicode Extensions`]: unicode
pub mod other;
pub mod private;
pub mod unicode;

use other::Other;
use private::{Private, PRIVATE_EXT_CHAR};
use unicode::{Unicode, UNICODE_EXT_CHAR};

use crate::parser::{ParseError, SubtagIterator};

/// Defines the type of extension.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, Copy)]
#[non_exhaustive]
pub enum ExtensionType {
    /// Unicode Extension Type marked as `u`.
    Unicode,
    /// Private Extension Type marked as `x`.
    Private,
    /// All other extension types, including the transform extension `t`.
    Other(u8),
}

impl ExtensionType {
    pub(crate) const fn try_from_byte_slice(key: &[u8]) -> Result<Self, ParseError> {
        if let [b] = key {
            Self::try_from_byte(*b)
        } else {
            Err(ParseError::InvalidExtension)
        }
    }

    pub(crate) const fn try_from_byte(key: u8) -> Result<Self, ParseError> {
        let key = key.to_ascii_lowercase();
        match key as char {
            UNICODE_EXT_CHAR => Ok(Self::Unicode),
            PRIVATE_EXT_CHAR => Ok(Self::Private),
            'a'..='z' => Ok(Self::Other(key)),
            _ => Err(ParseError::InvalidExtension),
        }
    }
}

/// A map of extensions associated with a given locale identifier.
#[derive(Debug, Default, PartialEq, Eq, Clone, Hash)]
#[non_exhaustive]
pub struct Extensions {
    /// A representation of the data for a Unicode extension, when present in the locale identifier.
    pub unicode: Unicode,
    /// A representation of the data for a private-use extension, when present in the locale identifier.
    pub private: Private,
    /// A sequence of any other extensions that are present in the locale identifier but are not
    /// represented explicitly as [`Unicode`] and [`Private`] are. Kept sorted by singleton.
    pub other: Vec<Other>,
}

impl Extensions {
    /// Returns a new empty map of extensions. Same as [`default()`](Default::default()), but is `const`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::Extensions;
    ///
    /// assert_eq!(Extensions::new(), Extensions::default());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            unicode: Unicode::new(),
            private: Private::new(),
            other: Vec::new(),
        }
    }

    /// Function to create a new map of extensions containing exactly one unicode extension.
    #[inline]
    pub fn from_unicode(unicode: Unicode) -> Self {
        Self {
            unicode,
            private: Private::new(),
            other: Vec::new(),
        }
    }

    /// Returns whether there are no extensions present.
    pub fn is_empty(&self) -> bool {
        self.unicode.is_empty() && self.private.is_empty() && self.other.is_empty()
    }

    /// Clears all extensions.
    pub fn clear(&mut self) {
        self.unicode.clear();
        self.private.clear();
        self.other.clear();
    }

    /// Stores an [`Other`] extension, keeping the list sorted by singleton.
    /// Returns `false` if the singleton was already present.
    pub(crate) fn set_other(&mut self, other: Other) -> bool {
        match self
            .other
            .binary_search_by_key(&other.get_ext_byte(), |o| o.get_ext_byte())
        {
            Ok(_) => false,
            Err(idx) => {
                self.other.insert(idx, other);
                true
            }
        }
    }

    pub(crate) fn try_from_iter(iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        let mut unicode = None;
        let mut private = None;
        let mut other = Vec::<Other>::new();

        while let Some(subtag) = iter.next() {
            if subtag.is_empty() {
                return Err(ParseError::InvalidExtension);
            }

            let &[subtag] = subtag else {
                return Err(ParseError::InvalidExtension);
            };

            match ExtensionType::try_from_byte(subtag) {
                Ok(ExtensionType::Unicode) => {
                    if unicode.is_some() {
                        return Err(ParseError::DuplicatedExtension);
                    }
                    unicode = Some(Unicode::try_from_iter(iter)?);
                }
                Ok(ExtensionType::Private) => {
                    if private.is_some() {
                        return Err(ParseError::DuplicatedExtension);
                    }
                    private = Some(Private::try_from_iter(iter)?);
                }
                Ok(ExtensionType::Other(ext)) => {
                    if other.iter().any(|o: &Other| o.get_ext_byte() == ext) {
                        return Err(ParseError::DuplicatedExtension);
                    }
                    let parsed = Other::try_from_iter(ext, iter)?;
                    if let Err(idx) = other.binary_search(&parsed) {
                        other.insert(idx, parsed);
                    } else {
                        return Err(ParseError::InvalidExtension);
                    }
                }
                _ => return Err(ParseError::InvalidExtension),
            }
        }

        Ok(Self {
            unicode: unicode.unwrap_or_default(),
            private: private.unwrap_or_default(),
            other,
        })
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        // Alphabetic by singleton; `u` slots in among the others.
        let mut wrote_unicode = false;
        self.other.iter().try_for_each(|other| {
            if other.get_ext() > UNICODE_EXT_CHAR && !wrote_unicode {
                self.unicode.for_each_subtag_str(f, true)?;
                wrote_unicode = true;
            }
            other.for_each_subtag_str(f, true)?;
            Ok(())
        })?;

        if !wrote_unicode {
            self.unicode.for_each_subtag_str(f, true)?;
        }

        // Private must be written last, since it allows single character
        // keys. Extensions must also be written in alphabetical order,
        // which would seem to imply that other extensions `y` and `z` are
        // invalid, but this is not specified.
        self.private.for_each_subtag_str(f, true)?;
        Ok(())
    }
}

impl_writeable_for_each_subtag_str_no_test!(Extensions);

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    fn exts(s: &str) -> Extensions {
        let mut iter = SubtagIterator::new(s.as_bytes());
        Extensions::try_from_iter(&mut iter).expect("Failed to parse extensions")
    }

    #[test]
    fn test_writeable() {
        assert_writeable_eq!(Extensions::new(), "");
        assert_writeable_eq!(exts("u-ca-islamic-civil"), "u-ca-islamic-civil");
        assert_writeable_eq!(exts("x-foo-bar"), "x-foo-bar");
        assert_writeable_eq!(exts("t-m0-true"), "t-m0-true");
        assert_writeable_eq!(
            exts("a-foo-t-foo-u-foo-w-foo-z-foo-x-foo"),
            "a-foo-t-foo-u-foo-w-foo-z-foo-x-foo",
        );
    }

    #[test]
    fn test_duplicated_extension() {
        let mut iter = SubtagIterator::new(b"u-hc-h12-u-ca-buddhist");
        assert_eq!(
            Extensions::try_from_iter(&mut iter),
            Err(ParseError::DuplicatedExtension)
        );
    }
}
