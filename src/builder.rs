// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

use crate::extensions::{other::Other, private, unicode, Extensions, ExtensionType};
use crate::parser::{Error, Field, LanguageTag, SubtagIterator};
use crate::subtags;
use crate::Locale;

/// The single mutable assembler of [`Locale`] values.
///
/// Every setter validates its argument and fails immediately with a
/// positioned [`Error::IllFormedSubtag`] on the first ill-formed input.
/// This is the strict counterpart of the lenient, truncating
/// [`LanguageTag::parse`](crate::LanguageTag::parse): the parser accepts
/// whatever prefix it can, the builder accepts nothing it cannot validate.
///
/// # Examples
///
/// ```
/// use uniloc::LocaleBuilder;
///
/// let mut builder = LocaleBuilder::new();
/// builder
///     .set_language("th")
///     .and_then(|b| b.set_region("TH"))
///     .and_then(|b| b.set_unicode_keyword("ca", "buddhist"))
///     .expect("well-formed subtags");
///
/// let locale = builder.build();
/// assert_eq!(locale.name(), "th_TH@calendar=buddhist");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleBuilder {
    language: subtags::Language,
    script: Option<subtags::Script>,
    region: Option<subtags::Region>,
    variants: subtags::Variants,
    extensions: Extensions,
}

impl Default for LocaleBuilder {
    fn default() -> Self {
        Self {
            language: subtags::Language::UNKNOWN,
            script: None,
            region: None,
            variants: subtags::Variants::new(),
            extensions: Extensions::new(),
        }
    }
}

impl LocaleBuilder {
    /// Creates an empty builder, equivalent to the root locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language subtag. An empty string clears it.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniloc::LocaleBuilder;
    ///
    /// let mut builder = LocaleBuilder::new();
    /// assert!(builder.set_language("en").is_ok());
    /// assert!(builder.set_language("englishlang").is_err());
    /// ```
    pub fn set_language(&mut self, language: &str) -> Result<&mut Self, Error> {
        if language.is_empty() {
            self.language = subtags::Language::UNKNOWN;
            return Ok(self);
        }
        self.language = subtags::Language::try_from_str(language)
            .map_err(|_| Error::ill_formed(Field::Language, language))?;
        Ok(self)
    }

    /// Sets the script subtag. An empty string clears it.
    pub fn set_script(&mut self, script: &str) -> Result<&mut Self, Error> {
        if script.is_empty() {
            self.script = None;
            return Ok(self);
        }
        self.script = Some(
            subtags::Script::try_from_str(script)
                .map_err(|_| Error::ill_formed(Field::Script, script))?,
        );
        Ok(self)
    }

    /// Sets the region subtag. An empty string clears it.
    pub fn set_region(&mut self, region: &str) -> Result<&mut Self, Error> {
        if region.is_empty() {
            self.region = None;
            return Ok(self);
        }
        self.region = Some(
            subtags::Region::try_from_str(region)
                .map_err(|_| Error::ill_formed(Field::Region, region))?,
        );
        Ok(self)
    }

    /// Sets the variant field from a `_`/`-`-delimited sequence of variant
    /// subtags, replacing any previous variants. An empty string clears it.
    pub fn set_variant(&mut self, variant: &str) -> Result<&mut Self, Error> {
        let mut variants = subtags::Variants::new();
        for token in variant.split(['_', '-']).filter(|t| !t.is_empty()) {
            let parsed = subtags::Variant::try_from_str(token)
                .map_err(|_| Error::ill_formed(Field::Variant, token))?;
            if !variants.push(parsed) {
                return Err(Error::ill_formed(Field::Variant, token));
            }
        }
        self.variants = variants;
        Ok(self)
    }

    /// Sets an extension by its singleton character. The Unicode singleton
    /// `u` is parsed into attributes and keywords, `x` into private use
    /// subtags; any other singleton is stored as an opaque sequence. An
    /// empty value clears that extension.
    pub fn set_extension(&mut self, singleton: char, value: &str) -> Result<&mut Self, Error> {
        let err = || Error::ill_formed(Field::Extension, value);
        let byte = u8::try_from(singleton).map_err(|_| err())?;
        match ExtensionType::try_from_byte(byte).map_err(|_| err())? {
            ExtensionType::Unicode => {
                if value.is_empty() {
                    self.extensions.unicode.clear();
                    return Ok(self);
                }
                let mut iter = SubtagIterator::new(value.as_bytes());
                self.extensions.unicode =
                    unicode::Unicode::try_from_iter(&mut iter).map_err(|_| err())?;
                if iter.peek().is_some() {
                    return Err(err());
                }
            }
            ExtensionType::Private => {
                if value.is_empty() {
                    self.extensions.private.clear();
                    return Ok(self);
                }
                let mut iter = SubtagIterator::new(value.as_bytes());
                self.extensions.private =
                    private::Private::try_from_iter(&mut iter).map_err(|_| err())?;
            }
            ExtensionType::Other(ext) => {
                self.extensions.other.retain(|o| o.get_ext_byte() != ext);
                if value.is_empty() {
                    return Ok(self);
                }
                let mut iter = SubtagIterator::new(value.as_bytes());
                let other = Other::try_from_iter(ext, &mut iter).map_err(|_| err())?;
                if iter.peek().is_some() {
                    return Err(err());
                }
                self.extensions.set_other(other);
            }
        }
        Ok(self)
    }

    /// Sets a Unicode extension keyword. An empty type, or the type
    /// `"true"`, stores the empty value.
    pub fn set_unicode_keyword(&mut self, key: &str, value: &str) -> Result<&mut Self, Error> {
        let key =
            unicode::Key::try_from_str(key).map_err(|_| Error::ill_formed(Field::Key, key))?;
        let value = unicode::Value::try_from_str(value)
            .map_err(|_| Error::ill_formed(Field::Type, value))?;
        self.extensions.unicode.keywords.set(key, value);
        Ok(self)
    }

    /// Removes a Unicode extension keyword, returning whether it was set.
    pub fn remove_unicode_keyword(&mut self, key: &str) -> Result<bool, Error> {
        let key =
            unicode::Key::try_from_str(key).map_err(|_| Error::ill_formed(Field::Key, key))?;
        Ok(self.extensions.unicode.keywords.remove(key).is_some())
    }

    /// Adds a Unicode extension attribute to the (sorted) attribute set.
    pub fn add_unicode_attribute(&mut self, attribute: &str) -> Result<&mut Self, Error> {
        let attribute = unicode::Attribute::try_from_str(attribute)
            .map_err(|_| Error::ill_formed(Field::Attribute, attribute))?;
        self.extensions.unicode.attributes.insert(attribute);
        Ok(self)
    }

    /// Removes a Unicode extension attribute.
    pub fn remove_unicode_attribute(&mut self, attribute: &str) -> Result<&mut Self, Error> {
        let attribute = unicode::Attribute::try_from_str(attribute)
            .map_err(|_| Error::ill_formed(Field::Attribute, attribute))?;
        self.extensions.unicode.attributes.remove(&attribute);
        Ok(self)
    }

    /// Resets the builder to the empty state.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Clears all extensions, keeping the base fields.
    pub fn clear_extensions(&mut self) -> &mut Self {
        self.extensions.clear();
        self
    }

    /// Assembles the [`Locale`]. Everything was validated on the way in, so
    /// this cannot fail; the identifier is produced by the same
    /// reconstruction the tag parser uses.
    pub fn build(&self) -> Locale {
        let tag = LanguageTag {
            id: crate::LanguageIdentifier {
                language: self.language,
                script: self.script,
                region: self.region,
                variants: self.variants.clone(),
            },
            extensions: self.extensions.clone(),
        };
        Locale::from_canonical_name(crate::interchange::tag_to_name(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_happy_path() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("ZH").unwrap();
        builder.set_script("hans").unwrap();
        builder.set_region("cn").unwrap();
        assert_eq!(builder.build().name(), "zh_Hans_CN");
    }

    #[test]
    fn test_builder_rejects_ill_formed() {
        let mut builder = LocaleBuilder::new();
        assert_eq!(
            builder.set_language("englishlang"),
            Err(Error::ill_formed(Field::Language, "englishlang"))
        );
        assert!(builder.set_script("Latin").is_err());
        assert!(builder.set_region("USA1").is_err());
        assert!(builder.set_variant("po six").is_err());
        assert!(builder.set_unicode_keyword("calendar", "buddhist").is_err());
        // The failed setters left no partial state behind.
        assert_eq!(builder.build().name(), "");
    }

    #[test]
    fn test_builder_posix_reconstruction() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en").unwrap();
        builder.set_region("US").unwrap();
        builder.set_unicode_keyword("va", "posix").unwrap();
        let locale = builder.build();
        assert_eq!(locale.name(), "en_US_POSIX");
        assert!(!locale.name().contains("va"));
    }

    #[test]
    fn test_builder_keyword_sorted_output() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("th").unwrap();
        builder.set_unicode_keyword("co", "pinyin").unwrap();
        builder.set_unicode_keyword("ca", "buddhist").unwrap();
        assert_eq!(
            builder.build().name(),
            "th@calendar=buddhist;collation=pinyin"
        );
    }

    #[test]
    fn test_builder_extensions() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en").unwrap();
        builder.set_extension('x', "foo-bar").unwrap();
        builder.set_extension('a', "baz").unwrap();
        assert_eq!(builder.build().name(), "en@a=baz;x=foo-bar");

        builder.set_extension('a', "").unwrap();
        assert_eq!(builder.build().name(), "en@x=foo-bar");

        builder.clear_extensions();
        assert_eq!(builder.build().name(), "en");
    }

    #[test]
    fn test_builder_unicode_extension_value() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en").unwrap();
        builder.set_extension('u', "foobar-ca-japanese").unwrap();
        assert_eq!(
            builder.build().name(),
            "en@attribute=foobar;calendar=japanese"
        );
    }

    #[test]
    fn test_builder_attributes() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en").unwrap();
        builder.add_unicode_attribute("zebra").unwrap();
        builder.add_unicode_attribute("aardvark").unwrap();
        assert_eq!(builder.build().name(), "en@attribute=aardvark-zebra");

        builder.remove_unicode_attribute("zebra").unwrap();
        assert_eq!(builder.build().name(), "en@attribute=aardvark");

        assert!(builder.add_unicode_attribute("no").is_err());
    }

    #[test]
    fn test_builder_clear() {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en").unwrap();
        builder.set_region("US").unwrap();
        builder.clear();
        assert_eq!(builder.build().name(), "");
    }
}
