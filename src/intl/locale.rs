//! BCP 47 tag handling for the formatting primitive.
//!
//! Locale identifiers are treated as opaque: anything `icu` can parse is
//! accepted, and anything it cannot is degraded to its base subtags rather
//! than rejected. Unicode extension keywords (`-u-nu-…`) are extracted here
//! because the decimal formatter operates on the base locale and digit
//! transliteration happens as a post-pass.

use icu::locale::Locale as IcuLocale;

/// Locale used when the caller passes none and the environment gives no hint.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Determine the host locale from `LC_ALL`/`LC_NUMERIC`/`LANG`, normalized to
/// a BCP 47 tag (`en_US.UTF-8` -> `en-US`). Falls back to [`FALLBACK_LOCALE`].
pub fn host_locale() -> String {
    for var in ["LC_ALL", "LC_NUMERIC", "LANG"] {
        if let Ok(raw) = std::env::var(var) {
            let tag = raw.split('.').next().unwrap_or("").replace('_', "-");
            if !tag.is_empty() && tag != "C" && tag != "POSIX" {
                return tag;
            }
        }
    }
    FALLBACK_LOCALE.to_string()
}

/// Resolve an optional caller-supplied locale against the host locale.
pub fn resolve(locale: Option<&str>) -> String {
    match locale {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => host_locale(),
    }
}

pub(crate) fn lang_of(locale: &str) -> &str {
    locale
        .split('-')
        .next()
        .unwrap_or(locale)
        .split('_')
        .next()
        .unwrap_or(locale)
}

/// Extract the value of a `-u-` extension keyword, e.g. `nu` from
/// `zh-Hans-CN-u-nu-hanidec`. Private-use (`-x-`) sections are ignored.
pub(crate) fn extension_keyword(locale: &str, key: &str) -> Option<String> {
    let lower = locale.to_lowercase();
    let search = match lower.find("-x-") {
        Some(idx) => &lower[..idx],
        None => &lower[..],
    };
    let u_idx = search.find("-u-")?;
    let tokens: Vec<&str> = search[u_idx + 3..].split('-').collect();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == key {
            return match tokens.get(i + 1) {
                Some(v) if v.len() > 2 => Some((*v).to_string()),
                _ => Some("true".to_string()),
            };
        }
        i += 1;
    }
    None
}

/// Drop the `-u-` extension sequence from a tag, keeping any later singleton
/// sections intact.
pub(crate) fn strip_extensions(locale: &str) -> String {
    let search_end = locale.find("-x-").unwrap_or(locale.len());
    let Some(idx) = locale[..search_end].find("-u-") else {
        return locale.to_string();
    };
    let before = &locale[..idx];
    let tokens: Vec<&str> = locale[idx + 3..].split('-').collect();
    let resume = tokens
        .iter()
        .position(|t| t.len() == 1 && *t != "u")
        .unwrap_or(tokens.len());
    if resume < tokens.len() {
        format!("{}-{}", before, tokens[resume..].join("-"))
    } else {
        before.to_string()
    }
}

/// Canonical base locale accepted by `icu`, with extensions removed.
pub(crate) fn base_locale(locale: &str) -> String {
    let stripped = strip_extensions(locale);
    match stripped.parse::<IcuLocale>() {
        Ok(loc) => loc.to_string(),
        Err(_) => stripped,
    }
}

pub(crate) fn parse_icu(locale: &str) -> IcuLocale {
    base_locale(locale)
        .parse()
        .unwrap_or_else(|_| "en".parse().unwrap())
}

/// Numbering system requested by the tag, defaulting to `latn`.
pub(crate) fn numbering_system(locale: &str) -> String {
    extension_keyword(locale, "nu").unwrap_or_else(|| "latn".to_string())
}

/// Zero code point of a decimal-digit numbering system. `hanidec` is absent
/// here since its digits are not contiguous; see [`transliterate_digits`].
pub(crate) fn numbering_system_zero(ns: &str) -> Option<char> {
    match ns {
        "arab" => Some('\u{0660}'),
        "arabext" => Some('\u{06F0}'),
        "beng" => Some('\u{09E6}'),
        "deva" => Some('\u{0966}'),
        "fullwide" => Some('\u{FF10}'),
        "gujr" => Some('\u{0AE6}'),
        "guru" => Some('\u{0A66}'),
        "khmr" => Some('\u{17E0}'),
        "knda" => Some('\u{0CE6}'),
        "laoo" => Some('\u{0ED0}'),
        "mlym" => Some('\u{0D66}'),
        "mong" => Some('\u{1810}'),
        "mymr" => Some('\u{1040}'),
        "orya" => Some('\u{0B66}'),
        "sinh" => Some('\u{0DE6}'),
        "tamldec" => Some('\u{0BE6}'),
        "telu" => Some('\u{0C66}'),
        "thai" => Some('\u{0E50}'),
        "tibt" => Some('\u{0F20}'),
        _ => None,
    }
}

/// Rewrite ASCII digits (and, for Arabic systems, separators) in a formatted
/// string into the requested numbering system. Unknown systems pass through.
pub(crate) fn transliterate_digits(s: &str, ns: &str) -> String {
    if ns == "hanidec" {
        const HANIDEC: [char; 10] = [
            '\u{3007}', '\u{4E00}', '\u{4E8C}', '\u{4E09}', '\u{56DB}',
            '\u{4E94}', '\u{516D}', '\u{4E03}', '\u{516B}', '\u{4E5D}',
        ];
        return s
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => HANIDEC[d as usize],
                None => c,
            })
            .collect();
    }

    let arabic = ns == "arab" || ns == "arabext";
    let translated = match numbering_system_zero(ns) {
        None => s.to_string(),
        Some(zero) => s
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => char::from_u32(zero as u32 + d).unwrap_or(c),
                None => c,
            })
            .collect(),
    };
    if arabic {
        translated
            .chars()
            .map(|c| match c {
                '.' => '\u{066B}',
                ',' => '\u{066C}',
                other => other,
            })
            .collect()
    } else {
        translated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_keyword_finds_numbering_system() {
        assert_eq!(
            extension_keyword("zh-Hans-CN-u-nu-hanidec", "nu").as_deref(),
            Some("hanidec")
        );
        assert_eq!(extension_keyword("en-US", "nu"), None);
        assert_eq!(
            extension_keyword("th-TH-u-ca-buddhist-nu-thai", "nu").as_deref(),
            Some("thai")
        );
    }

    #[test]
    fn strip_extensions_removes_u_section() {
        assert_eq!(strip_extensions("zh-Hans-CN-u-nu-hanidec"), "zh-Hans-CN");
        assert_eq!(strip_extensions("en-US"), "en-US");
        assert_eq!(strip_extensions("de-DE-u-co-phonebk-x-priv"), "de-DE-x-priv");
    }

    #[test]
    fn base_locale_canonicalizes() {
        assert_eq!(base_locale("en-US"), "en-US");
        assert_eq!(base_locale("zh-Hans-CN-u-nu-hanidec"), "zh-Hans-CN");
    }

    #[test]
    fn transliterates_hanidec_and_deva() {
        assert_eq!(transliterate_digits("111", "hanidec"), "\u{4E00}\u{4E00}\u{4E00}");
        assert_eq!(transliterate_digits("10", "deva"), "\u{0967}\u{0966}");
        assert_eq!(transliterate_digits("1,234.5", "latn"), "1,234.5");
    }

    #[test]
    fn lang_subtag() {
        assert_eq!(lang_of("de-DE"), "de");
        assert_eq!(lang_of("zh_Hans_CN"), "zh");
        assert_eq!(lang_of("th"), "th");
    }
}
