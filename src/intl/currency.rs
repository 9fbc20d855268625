//! Currency data: minor-unit digits, per-locale symbol selection, localized
//! display names, and placement.
//!
//! The tables cover the currencies the library is exercised against; anything
//! outside them degrades the way `Intl.NumberFormat` does for an unknown
//! code: the code itself is used as symbol and name.

use tinystr::TinyAsciiStr;

use super::locale::lang_of;
use crate::intl::CurrencyDisplay;

/// An ISO 4217 alphabetic code, stored uppercased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(TinyAsciiStr<3>);

impl CurrencyCode {
    /// Accepts exactly three ASCII letters, normalizing case. Anything else
    /// is rejected so malformed codes never reach the data tables.
    pub fn parse(code: &str) -> Option<Self> {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        code.to_ascii_uppercase().parse().ok().map(CurrencyCode)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 4217 minor-unit digit count. Drives the default fraction digits of
/// currency-styled formatting.
pub(crate) fn minor_unit_digits(code: &str) -> u32 {
    match code {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG"
        | "RWF" | "UGX" | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        _ => 2,
    }
}

/// Whether the locale places the currency symbol after the number
/// (`50.000 $` rather than `$50,000`). Name display is always suffixed and
/// handled separately.
pub(crate) fn position_after(locale: &str) -> bool {
    matches!(
        lang_of(locale),
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb"
            | "nn" | "no" | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg"
            | "hr" | "sl" | "sr" | "tr" | "el" | "uk" | "ru" | "be" | "et"
            | "lv" | "lt" | "vi" | "id" | "ms"
    )
}

/// Symbol (or code) for a currency in a locale. The dollar sign is locale
/// dependent: ambiguous locales disambiguate USD as `US$`.
pub(crate) fn symbol(code: &CurrencyCode, display: CurrencyDisplay, locale: &str) -> String {
    if display == CurrencyDisplay::Code {
        return code.as_str().to_string();
    }
    let narrow = display == CurrencyDisplay::NarrowSymbol;
    let lang = lang_of(locale);
    match code.as_str() {
        "USD" => {
            if narrow || matches!(lang, "en" | "ja" | "de" | "fr" | "th") {
                "$".to_string()
            } else {
                "US$".to_string()
            }
        }
        "EUR" => "\u{20AC}".to_string(),
        "GBP" => "\u{00A3}".to_string(),
        "JPY" | "CNY" => "\u{00A5}".to_string(),
        "KRW" => "\u{20A9}".to_string(),
        "INR" => "\u{20B9}".to_string(),
        "RUB" => "\u{20BD}".to_string(),
        "BRL" => "R$".to_string(),
        "THB" => "\u{0E3F}".to_string(),
        "TRY" => "\u{20BA}".to_string(),
        "ILS" => "\u{20AA}".to_string(),
        "PLN" => "z\u{0142}".to_string(),
        "ZAR" => "R".to_string(),
        "CHF" => "CHF".to_string(),
        "SEK" | "NOK" | "DKK" | "ISK" | "CZK" => "kr".to_string(),
        "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "ARS" | "CLP" | "COP" => {
            if narrow {
                "$".to_string()
            } else {
                format!("{}$", &code.as_str()[..2])
            }
        }
        "TWD" => {
            if narrow {
                "$".to_string()
            } else {
                "NT$".to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Localized display name, singular or plural per the value's cardinal
/// category. Languages without grammatical number in currency names return
/// one form for both.
pub(crate) fn display_name(code: &CurrencyCode, locale: &str, one: bool) -> String {
    let lang = lang_of(locale);
    let pick = |sing: &str, plur: &str| -> String {
        if one { sing.to_string() } else { plur.to_string() }
    };
    match (lang, code.as_str()) {
        ("de", "USD") => "US-Dollar".to_string(),
        ("de", "EUR") => "Euro".to_string(),
        ("de", "GBP") => pick("Britisches Pfund", "Britische Pfund"),
        ("de", "JPY") => pick("Japanischer Yen", "Japanische Yen"),
        ("de", "CHF") => "Schweizer Franken".to_string(),
        ("fr", "USD") => pick("dollar des \u{00C9}tats-Unis", "dollars des \u{00C9}tats-Unis"),
        ("fr", "EUR") => pick("euro", "euros"),
        ("zh", "USD") => "\u{7F8E}\u{5143}".to_string(),
        ("zh", "CNY") => "\u{4EBA}\u{6C11}\u{5E01}".to_string(),
        ("zh", "EUR") => "\u{6B27}\u{5143}".to_string(),
        ("zh", "JPY") => "\u{65E5}\u{5143}".to_string(),
        ("ja", "USD") => "\u{7C73}\u{30C9}\u{30EB}".to_string(),
        ("ja", "JPY") => "\u{65E5}\u{672C}\u{5186}".to_string(),
        ("th", "THB") => "\u{0E1A}\u{0E32}\u{0E17}\u{0E44}\u{0E17}\u{0E22}".to_string(),
        ("th", "USD") => {
            "\u{0E14}\u{0E2D}\u{0E25}\u{0E25}\u{0E32}\u{0E23}\u{0E4C}\u{0E2A}\u{0E2B}\u{0E23}\u{0E31}\u{0E10}"
                .to_string()
        }
        (_, "USD") => pick("US dollar", "US dollars"),
        (_, "EUR") => pick("euro", "euros"),
        (_, "GBP") => pick("British pound", "British pounds"),
        (_, "JPY") => "Japanese yen".to_string(),
        (_, "CNY") => pick("Chinese yuan", "Chinese yuan"),
        (_, "KRW") => "South Korean won".to_string(),
        (_, "INR") => pick("Indian rupee", "Indian rupees"),
        (_, "CAD") => pick("Canadian dollar", "Canadian dollars"),
        (_, "AUD") => pick("Australian dollar", "Australian dollars"),
        (_, "CHF") => pick("Swiss franc", "Swiss francs"),
        (_, "BRL") => pick("Brazilian real", "Brazilian reais"),
        (_, "THB") => pick("Thai baht", "Thai baht"),
        (_, other) => other.to_string(),
    }
}
