// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use super::Attribute;

use crate::parser::{ParseError, SubtagIterator};
use core::ops::Deref;
use core::str::FromStr;

/// A set of [`Attribute`] elements as defined in the Unicode extension
/// grammar.
///
/// The set is stored sorted and deduplicated; sorted order is the canonical
/// order of attributes.
///
/// # Examples
///
/// ```
/// use uniloc::extensions::unicode::{Attribute, Attributes};
///
/// let attribute1: Attribute =
///     "foobar".parse().expect("Failed to parse an attribute.");
///
/// let attribute2: Attribute = "testing"
///     .parse()
///     .expect("Failed to parse an attribute.");
/// let mut v = vec![attribute1, attribute2];
/// v.sort();
/// v.dedup();
///
/// let attributes: Attributes = Attributes::from_vec_unchecked(v);
/// assert_eq!(attributes.to_string(), "foobar-testing");
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Returns a new empty set of attributes. Same as [`default()`](Default::default()), but is `const`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::Attributes;
    ///
    /// assert_eq!(Attributes::new(), Attributes::default());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A constructor which takes a pre-sorted list of [`Attribute`] elements.
    ///
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::{Attribute, Attributes};
    ///
    /// let attribute1: Attribute = "foobar".parse().expect("Parsing failed.");
    /// let attribute2: Attribute = "testing".parse().expect("Parsing failed.");
    /// let mut v = vec![attribute1, attribute2];
    /// v.sort();
    /// v.dedup();
    ///
    /// let attributes = Attributes::from_vec_unchecked(v);
    /// ```
    pub fn from_vec_unchecked(input: Vec<Attribute>) -> Self {
        Self(input)
    }

    /// Inserts an attribute in sorted position; duplicates are ignored.
    pub(crate) fn insert(&mut self, attribute: Attribute) {
        if let Err(idx) = self.0.binary_search(&attribute) {
            self.0.insert(idx, attribute);
        }
    }

    /// Removes an attribute, returning whether it was present.
    pub(crate) fn remove(&mut self, attribute: &Attribute) -> bool {
        if let Ok(idx) = self.0.binary_search(attribute) {
            self.0.remove(idx);
            true
        } else {
            false
        }
    }

    /// Empties the [`Attributes`] list.
    ///
    /// Returns the old list.
    pub fn clear(&mut self) -> Self {
        core::mem::take(self)
    }

    pub(crate) fn try_from_iter(iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        let mut attributes = Self::new();

        while let Some(subtag) = iter.peek() {
            if let Ok(attr) = Attribute::try_from_utf8(subtag) {
                attributes.insert(attr);
            } else {
                break;
            }
            iter.next();
        }
        Ok(attributes)
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        self.deref().iter().map(|t| t.as_str()).try_for_each(f)
    }
}

impl FromStr for Attributes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut iter = SubtagIterator::new(s.as_bytes());
        Self::try_from_iter(&mut iter)
    }
}

impl_writeable_for_subtag_list!(Attributes, "foobar", "testing");

impl Deref for Attributes {
    type Target = [Attribute];

    fn deref(&self) -> &[Attribute] {
        self.0.deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_fromstr() {
        let attrs: Attributes = "foo-bar".parse().expect("Failed to parse Attributes");
        assert_eq!(attrs.to_string(), "bar-foo");
    }
}
