// This file is part of uniloc. For terms of use, please see the file
// called LICENSE at the top level of the uniloc source tree
// (online at: https://github.com/uniloc-rs/uniloc/blob/main/LICENSE ).

//! The BCP-47 ↔ legacy key/type registry.
//!
//! The tables cover the stable CLDR aliases; anything else flows through
//! the fallback grammars, and a miss is an expected outcome (`None`), not
//! an error. Larger CLDR-derived data (notably the timezone id mappings)
//! belongs to the consuming key/type registry collaborator, not to this
//! engine.

use std::borrow::Cow;

/// (BCP-47 key, legacy key)
static KEY_MAP: &[(&str, &str)] = &[
    ("ca", "calendar"),
    ("co", "collation"),
    ("cu", "currency"),
    ("hc", "hours"),
    ("kb", "colbackwards"),
    ("kf", "colcasefirst"),
    ("kn", "colnumeric"),
    ("ks", "colstrength"),
    ("ms", "measure"),
    ("nu", "numbers"),
    ("tz", "timezone"),
    ("va", "va"),
];

/// (legacy key, BCP-47 type, legacy type)
static TYPE_MAP: &[(&str, &str, &str)] = &[
    ("calendar", "ethioaa", "ethiopic-amete-alem"),
    ("calendar", "gregory", "gregorian"),
    ("calendar", "islamicc", "islamic-civil"),
    ("collation", "dict", "dictionary"),
    ("collation", "gb2312", "gb2312han"),
    ("collation", "phonebk", "phonebook"),
    ("collation", "trad", "traditional"),
    ("measure", "uksystem", "imperial"),
    ("numbers", "finance", "financial"),
    ("numbers", "traditio", "traditional"),
];

fn is_fallback_key(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_fallback_type(s: &str) -> bool {
    // One or more alphanumeric chunks joined by `-`, `_` or `/`, which
    // keeps timezone-id-like values (`America/New_York`) representable.
    !s.is_empty()
        && !s.starts_with(['-', '_', '/'])
        && !s.ends_with(['-', '_', '/'])
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'/'))
        && !s.contains("--")
        && !s.contains("__")
        && !s.contains("//")
}

/// Maps a BCP-47 extension key to its legacy keyword key.
///
/// Unknown keys fall back to themselves (lowercased) when they fit the
/// keyword grammar; anything else is a miss.
///
/// # Examples
///
/// ```
/// use uniloc::to_legacy_key;
///
/// assert_eq!(to_legacy_key("co").as_deref(), Some("collation"));
/// assert_eq!(to_legacy_key("zzzz").as_deref(), Some("zzzz"));
/// assert_eq!(to_legacy_key("a=b"), None);
/// ```
pub fn to_legacy_key(key: &str) -> Option<Cow<'static, str>> {
    if let Some(&(_, legacy)) = KEY_MAP.iter().find(|(bcp, _)| bcp.eq_ignore_ascii_case(key)) {
        return Some(Cow::Borrowed(legacy));
    }
    is_fallback_key(key).then(|| Cow::Owned(key.to_ascii_lowercase()))
}

/// Maps a BCP-47 extension type to its legacy keyword type under the given
/// legacy key.
///
/// # Examples
///
/// ```
/// use uniloc::to_legacy_type;
///
/// assert_eq!(
///     to_legacy_type("calendar", "gregory").as_deref(),
///     Some("gregorian")
/// );
/// assert_eq!(
///     to_legacy_type("calendar", "buddhist").as_deref(),
///     Some("buddhist")
/// );
/// assert_eq!(to_legacy_type("calendar", "not valid"), None);
/// ```
pub fn to_legacy_type(key: &str, ty: &str) -> Option<Cow<'static, str>> {
    if let Some(&(_, _, legacy)) = TYPE_MAP
        .iter()
        .find(|(k, bcp, _)| *k == key && bcp.eq_ignore_ascii_case(ty))
    {
        return Some(Cow::Borrowed(legacy));
    }
    is_fallback_type(ty).then(|| Cow::Owned(ty.to_ascii_lowercase()))
}

/// Maps a legacy keyword key to its BCP-47 extension key.
///
/// Unknown keys fall back to themselves when they already look like a
/// two-character extension key; everything else is a miss.
pub fn to_bcp47_key(key: &str) -> Option<Cow<'static, str>> {
    if let Some(&(bcp, _)) = KEY_MAP
        .iter()
        .find(|(_, legacy)| legacy.eq_ignore_ascii_case(key))
    {
        return Some(Cow::Borrowed(bcp));
    }
    (key.len() == 2 && is_fallback_key(key)).then(|| Cow::Owned(key.to_ascii_lowercase()))
}

/// Maps a legacy keyword type to its BCP-47 extension type under the given
/// legacy key. The legacy `yes` maps to `true`, which the Unicode extension
/// expresses by omitting the type.
pub fn to_bcp47_type(key: &str, ty: &str) -> Option<Cow<'static, str>> {
    if ty.eq_ignore_ascii_case("yes") {
        return Some(Cow::Borrowed("true"));
    }
    if let Some(&(_, bcp, _)) = TYPE_MAP
        .iter()
        .find(|(k, _, legacy)| *k == key && legacy.eq_ignore_ascii_case(ty))
    {
        return Some(Cow::Borrowed(bcp));
    }
    let well_formed = !ty.is_empty()
        && ty
            .split('-')
            .all(|chunk| (3..=8).contains(&chunk.len()) && chunk.bytes().all(|b| b.is_ascii_alphanumeric()));
    well_formed.then(|| Cow::Owned(ty.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_registry() {
        assert_eq!(to_legacy_key("co").as_deref(), Some("collation"));
        assert_eq!(to_legacy_key("CO").as_deref(), Some("collation"));
        assert_eq!(to_legacy_key("ca").as_deref(), Some("calendar"));
        assert_eq!(to_bcp47_key("collation").as_deref(), Some("co"));
        assert_eq!(to_bcp47_key("timezone").as_deref(), Some("tz"));
    }

    #[test]
    fn test_key_fallback() {
        assert_eq!(to_legacy_key("zzzz").as_deref(), Some("zzzz"));
        assert_eq!(to_legacy_key("ZzZz").as_deref(), Some("zzzz"));
        assert_eq!(to_legacy_key("a=b"), None);
        assert_eq!(to_legacy_key(""), None);
        // The reverse fallback only accepts something that can actually be
        // an extension key.
        assert_eq!(to_bcp47_key("zz").as_deref(), Some("zz"));
        assert_eq!(to_bcp47_key("notakey"), None);
    }

    #[test]
    fn test_type_registry() {
        assert_eq!(
            to_legacy_type("collation", "phonebk").as_deref(),
            Some("phonebook")
        );
        assert_eq!(
            to_bcp47_type("collation", "phonebook").as_deref(),
            Some("phonebk")
        );
        assert_eq!(
            to_legacy_type("calendar", "gregory").as_deref(),
            Some("gregorian")
        );
        assert_eq!(to_bcp47_type("calendar", "yes").as_deref(), Some("true"));
    }

    #[test]
    fn test_type_fallback() {
        assert_eq!(
            to_legacy_type("timezone", "usnyc").as_deref(),
            Some("usnyc")
        );
        assert_eq!(
            to_legacy_type("timezone", "America/New_York").as_deref(),
            Some("america/new_york")
        );
        assert_eq!(to_legacy_type("calendar", "not valid"), None);
        assert_eq!(to_bcp47_type("timezone", "America/New_York"), None);
        assert_eq!(to_bcp47_type("calendar", "buddhist").as_deref(), Some("buddhist"));
    }
}
