// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use core::borrow::Borrow;
use core::iter::FromIterator;
use core::str::FromStr;
use litemap::LiteMap;

use super::Key;
use super::Value;
use crate::parser::{ParseError, SubtagIterator};

/// A list of [`Key`]-[`Value`] pairs representing functional information
/// about locale's internationalization preferences.
///
/// Here are examples of fields used in Unicode:
/// - `hc` - Hour Cycle (`h11`, `h12`, `h23`, `h24`)
/// - `ca` - Calendar (`buddhist`, `gregory`, ...)
/// - `fw` - First Day Of the Week (`sun`, `mon`, `sat`, ...)
///
/// # Examples
///
/// Manually build up a [`Keywords`] object:
///
/// ```
/// use uniloc::extensions::unicode::{Key, Keywords, Value};
///
/// let key: Key = "hc".parse().unwrap();
/// let value: Value = "h23".parse().unwrap();
/// let keywords = [(key, value)].into_iter().collect::<Keywords>();
///
/// assert_eq!(&keywords.to_string(), "hc-h23");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, PartialOrd, Ord)]
pub struct Keywords(LiteMap<Key, Value>);

impl Keywords {
    /// Returns a new empty list of key-value pairs. Same as [`default()`](Default::default()), but is `const`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::Keywords;
    ///
    /// assert_eq!(Keywords::new(), Keywords::default());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self(LiteMap::new())
    }

    /// Returns `true` if there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the list contains a [`Value`] for the specified [`Key`].
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Key: Borrow<Q>,
        Q: Ord,
    {
        self.0.contains_key(key)
    }

    /// Returns a reference to the [`Value`] corresponding to the [`Key`].
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::extensions::unicode::{Key, Keywords, Value};
    ///
    /// let key: Key = "ca".parse().unwrap();
    /// let value: Value = "buddhist".parse().unwrap();
    /// let keywords = [(key, value.clone())].into_iter().collect::<Keywords>();
    ///
    /// assert_eq!(keywords.get(&key), Some(&value));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Key: Borrow<Q>,
        Q: Ord,
    {
        self.0.get(key)
    }

    /// Sets the specified keyword, returning the old value if it already existed.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Sets the specified keyword only if it is not present yet.
    pub(crate) fn set_default(&mut self, key: Key, value: Value) {
        if !self.0.contains_key(&key) {
            self.0.insert(key, value);
        }
    }

    /// Removes the specified keyword, returning the old value if it existed.
    pub fn remove<Q: Borrow<Key>>(&mut self, key: Q) -> Option<Value> {
        self.0.remove(key.borrow())
    }

    /// Clears all Unicode extension keywords, leaving Unicode attributes.
    ///
    /// Returns the old Unicode extension keywords.
    pub fn clear(&mut self) -> Self {
        core::mem::take(self)
    }

    pub(crate) fn try_from_iter(iter: &mut SubtagIterator) -> Result<Self, ParseError> {
        let mut keywords = LiteMap::new();

        let mut current_keyword = None;
        let mut current_value = Vec::new();

        while let Some(subtag) = iter.peek() {
            let slen = subtag.len();
            if slen == 2 {
                if let Some(kw) = current_keyword.take() {
                    if !keywords.contains_key(&kw) {
                        keywords.insert(kw, Value::from_vec_unchecked(current_value));
                    }
                    current_value = Vec::new();
                }
                current_keyword = Some(Key::try_from_utf8(subtag)?);
            } else if current_keyword.is_some() {
                match Value::parse_subtag_from_utf8(subtag) {
                    Ok(Some(t)) => current_value.push(t),
                    Ok(None) => {}
                    Err(_) => break,
                }
            } else {
                break;
            }
            iter.next();
        }

        if let Some(kw) = current_keyword.take() {
            if !keywords.contains_key(&kw) {
                keywords.insert(kw, Value::from_vec_unchecked(current_value));
            }
        }

        Ok(keywords.into())
    }

    /// Produce an ordered iterator over key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.0.iter()
    }

    pub(crate) fn for_each_subtag_str<E, F>(&self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        for (k, v) in self.0.iter() {
            f(k.as_str())?;
            v.for_each_subtag_str(f)?;
        }
        Ok(())
    }

    /// This needs to be its own method to help with type inference in helpers.rs
    #[cfg(test)]
    pub(crate) fn from_tuple_vec(v: Vec<(Key, Value)>) -> Self {
        v.into_iter().collect()
    }
}

impl From<LiteMap<Key, Value>> for Keywords {
    fn from(map: LiteMap<Key, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(Key, Value)> for Keywords {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        LiteMap::from_iter(iter).into()
    }
}

impl FromStr for Keywords {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut iter = SubtagIterator::new(s.as_bytes());
        Self::try_from_iter(&mut iter)
    }
}

impl_writeable_for_key_value!(Keywords, "ca", "islamic-civil", "mm", "mm");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_fromstr() {
        let kw: Keywords = "hc-h12".parse().expect("Failed to parse Keywords");
        assert_eq!(kw.to_string(), "hc-h12");
    }

    #[test]
    fn test_keywords_first_occurrence_wins() {
        let kw: Keywords = "ca-buddhist-ca-gregory".parse().unwrap();
        let key: Key = "ca".parse().unwrap();
        assert_eq!(kw.get(&key), Some(&"buddhist".parse().unwrap()));
    }
}
