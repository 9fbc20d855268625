//! Locale format rules, derived empirically.
//!
//! Formatting APIs do not expose separator characters or symbol placement
//! directly, so everything here is reverse-engineered from probe values: a
//! multi-digit integer (111111) for grouping, a forced fraction (1.11) for
//! the decimal separator, and 1/11 for singular/plural affix forms. The
//! probe is translated into the locale's own numeral script first, which
//! keeps the strip-and-trim technique working for non-Latin digits.

use rustc_hash::FxHashMap;

use crate::intl::{self, CurrencyCode, CurrencyDisplay, FormatError, FormatOptions, UnitDisplay};

const GROUPING_PROBE: f64 = 111111.0;
const DECIMAL_PROBE: f64 = 1.11;
const PLURAL_PROBE: f64 = 11.0;

/// Digit-grouping convention of a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupingStyle {
    /// Groups of three: `111,111`.
    Thousand,
    /// South-Asian 2-3 grouping: `1,11,111`.
    Lakh,
    /// East-Asian four-digit grouping: `11,1111`.
    Wan,
}

/// Separator and grouping metadata for a locale. Derived once and cached by
/// the caller; never recomputed per keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatMetadata {
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub grouping_style: GroupingStyle,
}

/// A symbol or name attached to a formatted number. Exactly one side is ever
/// populated; recomputation replaces the whole value, so exclusivity holds
/// structurally.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Affix {
    #[default]
    None,
    Prefix(String),
    Suffix(String),
}

impl Affix {
    pub fn is_none(&self) -> bool {
        matches!(self, Affix::None)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Affix::None => None,
            Affix::Prefix(text) | Affix::Suffix(text) => Some(text),
        }
    }

    /// Attach the affix to a rendered number.
    pub fn apply(&self, num: &str) -> String {
        match self {
            Affix::None => num.to_string(),
            Affix::Prefix(text) => format!("{text}{num}"),
            Affix::Suffix(text) => format!("{num}{text}"),
        }
    }

    /// Remove the affix text from user input before numeric parsing.
    pub fn strip<'a>(&self, input: &'a str) -> std::borrow::Cow<'a, str> {
        match self.text() {
            Some(text) if !text.is_empty() && input.contains(text) => {
                std::borrow::Cow::Owned(input.replacen(text, "", 1))
            }
            _ => std::borrow::Cow::Borrowed(input),
        }
    }
}

/// Padding class for [`affix_format`]. Collapses the currency and unit
/// display modes down to the two bits the spacing rule cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixPadding {
    Standard,
    Narrow,
    Code,
}

impl From<CurrencyDisplay> for AffixPadding {
    fn from(display: CurrencyDisplay) -> Self {
        match display {
            CurrencyDisplay::Code => AffixPadding::Code,
            _ => AffixPadding::Standard,
        }
    }
}

impl From<UnitDisplay> for AffixPadding {
    fn from(display: UnitDisplay) -> Self {
        match display {
            UnitDisplay::Narrow => AffixPadding::Narrow,
            _ => AffixPadding::Standard,
        }
    }
}

fn bare_probe(options: FormatOptions) -> FormatOptions {
    FormatOptions {
        use_grouping: false,
        minimum_fraction_digits: 0,
        maximum_fraction_digits: Some(0),
        ..options
    }
}

/// Render an integer in the locale's numeral script with no formatting.
/// Fractions are rounded away by the zero fraction-digit constraint, the
/// same way the probe renderings round, so strip-and-trim stays aligned.
pub fn translate_integer(value: f64, locale: Option<&str>) -> String {
    let tag = intl::resolve(locale);
    intl::format_value(value, &tag, &bare_probe(FormatOptions::decimal()))
        .unwrap_or_else(|_| "1".to_string())
}

fn grouped_probe(locale: &str) -> String {
    let options = FormatOptions {
        maximum_fraction_digits: Some(0),
        ..FormatOptions::decimal()
    };
    intl::format_value(GROUPING_PROBE, locale, &options).unwrap_or_else(|_| "111,111".to_string())
}

/// Character used to group large numbers in the locale.
pub fn thousands_separator(locale: Option<&str>) -> char {
    let tag = intl::resolve(locale);
    let one = translate_integer(1.0, Some(&tag));
    grouped_probe(&tag)
        .replace(&one, "")
        .trim()
        .chars()
        .next()
        .unwrap_or(',')
}

/// Grouping style, inferred from where the first separator lands in the
/// probe value. Index 1 means 2-3 lakh grouping, 2 means four-digit wan
/// grouping, anything else is standard thousands. The heuristic is tied to
/// the magnitude of [`GROUPING_PROBE`].
pub fn grouping_style(locale: Option<&str>) -> GroupingStyle {
    let tag = intl::resolve(locale);
    let sep = thousands_separator(Some(&tag));
    match grouped_probe(&tag).chars().position(|c| c == sep) {
        Some(1) => GroupingStyle::Lakh,
        Some(2) => GroupingStyle::Wan,
        _ => GroupingStyle::Thousand,
    }
}

/// Character that begins the fractional part in the locale.
pub fn decimal_separator(locale: Option<&str>) -> char {
    let tag = intl::resolve(locale);
    let options = FormatOptions {
        use_grouping: false,
        minimum_fraction_digits: 2,
        maximum_fraction_digits: Some(2),
        ..FormatOptions::decimal()
    };
    let formatted =
        intl::format_value(DECIMAL_PROBE, &tag, &options).unwrap_or_else(|_| "1.11".to_string());
    let one = translate_integer(1.0, Some(&tag));
    formatted
        .replace(&one, "")
        .trim()
        .chars()
        .next()
        .unwrap_or('.')
}

/// Combined separator/grouping metadata with the distinctness invariant
/// enforced.
pub fn metadata(locale: Option<&str>) -> FormatMetadata {
    let tag = intl::resolve(locale);
    let thousands = thousands_separator(Some(&tag));
    let mut decimal = decimal_separator(Some(&tag));
    if thousands == decimal {
        decimal = if thousands == '.' { ',' } else { '.' };
    }
    FormatMetadata {
        thousands_separator: thousands,
        decimal_separator: decimal,
        grouping_style: grouping_style(Some(&tag)),
    }
}

fn currency_probe(
    value: f64,
    code: &CurrencyCode,
    locale: &str,
    display: CurrencyDisplay,
) -> String {
    let options = bare_probe(FormatOptions::currency(*code, display));
    intl::format_value(value, locale, &options).unwrap_or_default()
}

fn strip_translated(formatted: &str, value: f64, locale: &str) -> String {
    let digits = translate_integer(value, Some(locale));
    formatted.replace(&digits, "").trim().to_string()
}

/// Symbol used for a currency code in the locale, e.g. `US$` for `USD` in
/// Simplified Chinese.
pub fn currency_symbol(code: &CurrencyCode, locale: Option<&str>) -> String {
    let tag = intl::resolve(locale);
    strip_translated(
        &currency_probe(1.0, code, &tag, CurrencyDisplay::Symbol),
        1.0,
        &tag,
    )
}

/// Full name for a currency code. The value matters only for plural
/// selection ("dollar" vs "dollars").
pub fn currency_name(value: f64, code: &CurrencyCode, locale: Option<&str>) -> String {
    let tag = intl::resolve(locale);
    strip_translated(
        &currency_probe(value, code, &tag, CurrencyDisplay::Name),
        value,
        &tag,
    )
}

/// Whether the currency annotation precedes the number in the locale.
pub fn currency_is_prefixed(locale: Option<&str>, display: CurrencyDisplay) -> bool {
    let tag = intl::resolve(locale);
    let Some(code) = CurrencyCode::parse("USD") else {
        return true;
    };
    let formatted = currency_probe(1.0, &code, &tag, display);
    let one = translate_integer(1.0, Some(&tag));
    formatted.find(&one).is_some_and(|idx| idx > 0)
}

fn unit_probe(
    value: f64,
    unit: &str,
    locale: &str,
    display: UnitDisplay,
) -> Result<String, FormatError> {
    let options = bare_probe(FormatOptions::unit(unit, display));
    intl::format_value(value, locale, &options)
}

/// Symbol for a unit in the locale (`in` for `inch` in en-US, `Zoll` in
/// de-DE long display). Unsupported units fail distinguishably.
pub fn unit_symbol(
    unit: &str,
    locale: Option<&str>,
    display: UnitDisplay,
) -> Result<String, FormatError> {
    let tag = intl::resolve(locale);
    Ok(strip_translated(
        &unit_probe(1.0, unit, &tag, display)?,
        1.0,
        &tag,
    ))
}

/// Long name for a unit, pluralized per the value.
pub fn unit_name(value: f64, unit: &str, locale: Option<&str>) -> Result<String, FormatError> {
    let tag = intl::resolve(locale);
    Ok(strip_translated(
        &unit_probe(value, unit, &tag, UnitDisplay::Long)?,
        value,
        &tag,
    ))
}

/// Whether the unit annotation precedes the number in the locale.
pub fn unit_is_prefixed(
    unit: &str,
    locale: Option<&str>,
    display: UnitDisplay,
) -> Result<bool, FormatError> {
    let tag = intl::resolve(locale);
    let formatted = unit_probe(1.0, unit, &tag, display)?;
    let one = translate_integer(1.0, Some(&tag));
    Ok(formatted.find(&one).is_some_and(|idx| idx > 0))
}

/// Whether unit-styled formatting is available at all. Callers drop the
/// unit annotation when this is false.
pub fn supports_units() -> bool {
    unit_symbol("inch", Some(intl::FALLBACK_LOCALE), UnitDisplay::Short).is_ok()
}

/// Pad an affix symbol for display next to a number. Suffixes get a leading
/// space unless the display is narrow; prefixes get a trailing space only
/// for code display, since plain symbols sit flush against the number.
pub fn affix_format(symbol: &str, prefixed: bool, padding: AffixPadding) -> String {
    if prefixed {
        match padding {
            AffixPadding::Code => format!("{symbol} "),
            _ => symbol.to_string(),
        }
    } else {
        match padding {
            AffixPadding::Narrow => symbol.to_string(),
            _ => format!(" {symbol}"),
        }
    }
}

/// Affix for a currency in the locale, placed and padded. Name display uses
/// the plural form; a value-tracking caller recomputes per edit instead.
pub fn currency_affix(code: &CurrencyCode, locale: Option<&str>, display: CurrencyDisplay) -> Affix {
    let symbol = match display {
        CurrencyDisplay::Code => code.as_str().to_string(),
        CurrencyDisplay::Name => currency_name(PLURAL_PROBE, code, locale),
        _ => currency_symbol(code, locale),
    };
    place_affix(symbol, currency_is_prefixed(locale, display), display.into())
}

/// Affix for a unit in the locale. Long display uses the plural form.
pub fn unit_affix(
    unit: &str,
    locale: Option<&str>,
    display: UnitDisplay,
) -> Result<Affix, FormatError> {
    let symbol = match display {
        UnitDisplay::Long => unit_name(PLURAL_PROBE, unit, locale)?,
        _ => unit_symbol(unit, locale, display)?,
    };
    Ok(place_affix(
        symbol,
        unit_is_prefixed(unit, locale, display)?,
        display.into(),
    ))
}

/// Place an already-derived symbol, applying the padding rule. Used directly
/// by value-tracking callers that recompute the name per edit.
pub fn place_affix(symbol: String, prefixed: bool, padding: AffixPadding) -> Affix {
    let text = affix_format(&symbol, prefixed, padding);
    if prefixed {
        Affix::Prefix(text)
    } else {
        Affix::Suffix(text)
    }
}

/// Percent affix, taken verbatim from the probe remainder so the locale's
/// own spacing (none in en-US, a non-breaking space in de-DE) is preserved.
/// The probe is 0.01 because percent styling scales by 100: it renders as a
/// lone translated "1" plus the affix.
pub fn percent_affix(locale: Option<&str>) -> Affix {
    let tag = intl::resolve(locale);
    let formatted = intl::format_value(0.01, &tag, &bare_probe(FormatOptions::percent()))
        .unwrap_or_else(|_| "1%".to_string());
    let one = translate_integer(1.0, Some(&tag));
    match formatted.find(&one) {
        Some(idx) => {
            let prefix = &formatted[..idx];
            let suffix = &formatted[idx + one.len()..];
            if !suffix.is_empty() {
                Affix::Suffix(suffix.to_string())
            } else if !prefix.is_empty() {
                Affix::Prefix(prefix.to_string())
            } else {
                Affix::Suffix("%".to_string())
            }
        }
        None => Affix::Suffix("%".to_string()),
    }
}

/// Per-locale metadata cache. Owned by a component instance, never shared:
/// lookups return copies, so a caller mutating its copy cannot poison other
/// consumers.
#[derive(Debug, Default)]
pub struct RulesCache {
    metadata: FxHashMap<String, FormatMetadata>,
}

impl RulesCache {
    pub fn new() -> Self {
        RulesCache::default()
    }

    pub fn metadata(&mut self, locale: Option<&str>) -> FormatMetadata {
        let tag = intl::resolve(locale);
        match self.metadata.get(&tag) {
            Some(meta) => *meta,
            None => {
                let meta = metadata(Some(&tag));
                self.metadata.insert(tag, meta);
                meta
            }
        }
    }
}
