//! Locale-aware number formatting primitive.
//!
//! This is the layer the rest of the crate treats as "the platform
//! formatter": render a finite float for a locale in decimal, currency,
//! percent, or unit style. Digit grouping and separator selection come from
//! ICU4X's [`DecimalFormatter`]; fraction-digit rounding runs through
//! [`fixed_decimal::Decimal`] so halfway cases round away from zero exactly;
//! currency/unit affixes and digit transliteration are applied as
//! post-passes over the formatted number.
//!
//! Higher layers never match on this module's output. They introspect it
//! empirically (see [`crate::rules`]), so they stay correct even where the
//! underlying data surprises.

pub(crate) mod currency;
pub(crate) mod locale;
pub(crate) mod unit;

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::plurals::{
    PluralCategory, PluralOperands, PluralRuleType, PluralRules, PluralRulesOptions,
    PluralRulesPreferences,
};

pub use currency::CurrencyCode;
pub use locale::{FALLBACK_LOCALE, host_locale, resolve};

/// How a currency annotation is rendered, mirroring `currencyDisplay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
    Name,
}

/// How a unit annotation is rendered, mirroring `unitDisplay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    #[default]
    Short,
    Narrow,
    Long,
}

/// Formatting style for [`format_value`].
#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    Decimal,
    Currency {
        code: CurrencyCode,
        display: CurrencyDisplay,
    },
    Percent,
    Unit {
        unit: String,
        display: UnitDisplay,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub style: Style,
    pub use_grouping: bool,
    pub minimum_fraction_digits: u32,
    /// Defaults per style when unset: the currency's minor-unit count for
    /// currency, 0 for percent, 3 otherwise.
    pub maximum_fraction_digits: Option<u32>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            style: Style::Decimal,
            use_grouping: true,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
        }
    }
}

impl FormatOptions {
    pub fn decimal() -> Self {
        FormatOptions::default()
    }

    pub fn currency(code: CurrencyCode, display: CurrencyDisplay) -> Self {
        FormatOptions {
            style: Style::Currency { code, display },
            ..FormatOptions::default()
        }
    }

    pub fn percent() -> Self {
        FormatOptions {
            style: Style::Percent,
            ..FormatOptions::default()
        }
    }

    pub fn unit(unit: impl Into<String>, display: UnitDisplay) -> Self {
        FormatOptions {
            style: Style::Unit {
                unit: unit.into(),
                display,
            },
            ..FormatOptions::default()
        }
    }

    fn default_max_fraction_digits(&self) -> u32 {
        match &self.style {
            Style::Currency { code, .. } => currency::minor_unit_digits(code.as_str()),
            Style::Percent => 0,
            _ => 3,
        }
    }
}

/// Failures of the formatting primitive. `UnsupportedUnit` is recoverable:
/// callers fall back to unit-less display. `NonFinite` marks inputs that
/// should have been normalized to "no value" before reaching the formatter.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatError {
    UnsupportedUnit(String),
    NonFinite,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::UnsupportedUnit(unit) => {
                write!(f, "unit `{unit}` is not formattable")
            }
            FormatError::NonFinite => write!(f, "value is not a finite number"),
        }
    }
}

impl std::error::Error for FormatError {}

fn plural_operands(value: f64) -> PluralOperands {
    if !value.is_finite() {
        return PluralOperands::from(0u64);
    }
    let abs = value.abs();
    if abs == abs.floor() && abs < u64::MAX as f64 {
        return PluralOperands::from(abs as u64);
    }
    let text = format!("{}", abs);
    match text.parse::<Decimal>() {
        Ok(dec) => PluralOperands::from(&dec),
        Err(_) => PluralOperands::from(0u64),
    }
}

/// Whether the value selects the `one` cardinal category in the locale.
/// Drives singular vs plural currency/unit names.
pub(crate) fn plural_is_one(locale: &str, value: f64) -> bool {
    let icu_locale = locale::parse_icu(locale);
    let prefs = PluralRulesPreferences::from(&icu_locale);
    let mut opts = PluralRulesOptions::default();
    opts.rule_type = Some(PluralRuleType::Cardinal);
    match PluralRules::try_new(prefs, opts) {
        Ok(rules) => rules.category_for(plural_operands(value)) == PluralCategory::One,
        Err(_) => value.abs() == 1.0,
    }
}

fn locale_percent_has_space(locale: &str) -> bool {
    matches!(
        locale::lang_of(locale),
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb"
            | "nn" | "no" | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg"
            | "hr" | "sl" | "sr" | "tr" | "el" | "uk" | "ru" | "be" | "et"
            | "lv" | "lt" | "ar" | "he" | "fa" | "hy" | "ka" | "az" | "kk"
            | "uz" | "ky" | "mn" | "sq" | "mk" | "bs" | "mt" | "is"
    )
}

fn wrap_style(num: &str, value: f64, locale: &str, style: &Style) -> Result<String, FormatError> {
    match style {
        Style::Decimal => Ok(num.to_string()),
        Style::Percent => {
            if locale_percent_has_space(locale) {
                Ok(format!("{num}\u{00A0}%"))
            } else {
                Ok(format!("{num}%"))
            }
        }
        Style::Currency { code, display } => {
            if *display == CurrencyDisplay::Name {
                let one = plural_is_one(locale, value);
                return Ok(format!("{num} {}", currency::display_name(code, locale, one)));
            }
            let sym = currency::symbol(code, *display, locale);
            if currency::position_after(locale) {
                Ok(format!("{num}\u{00A0}{sym}"))
            } else if let Some(rest) = num.strip_prefix('-') {
                Ok(format!("-{sym}{rest}"))
            } else {
                Ok(format!("{sym}{num}"))
            }
        }
        Style::Unit { unit, display } => {
            let one = plural_is_one(locale, value);
            let suffix = unit::suffix(unit, *display, locale, one)?;
            Ok(format!("{num}{suffix}"))
        }
    }
}

fn decimal_from_f64(value: f64) -> Decimal {
    match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
        Ok(dec) => dec,
        Err(_) => match Decimal::try_from_str(&format!("{}", value)) {
            Ok(dec) => dec,
            Err(_) => Decimal::from(0),
        },
    }
}

/// Format a finite float for a locale. Percent style scales by 100 before
/// rounding, matching `Intl.NumberFormat`.
pub fn format_value(value: f64, locale: &str, options: &FormatOptions) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite);
    }

    let work = match options.style {
        Style::Percent => value * 100.0,
        _ => value,
    };

    let max_fd = options
        .maximum_fraction_digits
        .unwrap_or_else(|| options.default_max_fraction_digits());
    let mut dec = decimal_from_f64(work);
    dec.round_with_mode(
        -(max_fd as i16),
        SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
    );
    dec.absolute.trim_end();
    if options.minimum_fraction_digits > 0 {
        dec.absolute.pad_end(-(options.minimum_fraction_digits as i16));
    }

    let icu_locale = locale::parse_icu(locale);
    let prefs = DecimalFormatterPreferences::from(&icu_locale);
    let mut fmt_opts = DecimalFormatterOptions::default();
    fmt_opts.grouping_strategy = Some(if options.use_grouping {
        GroupingStrategy::Auto
    } else {
        GroupingStrategy::Never
    });
    let formatter = DecimalFormatter::try_new(prefs, fmt_opts)
        .unwrap_or_else(|_| DecimalFormatter::try_new(Default::default(), fmt_opts).unwrap());

    let num = formatter.format(&dec).to_string();
    let wrapped = wrap_style(&num, work, locale, &options.style)?;
    Ok(locale::transliterate_digits(
        &wrapped,
        &locale::numbering_system(locale),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    #[test]
    fn plain_grouping_per_locale() {
        let opts = FormatOptions::decimal();
        assert_eq!(format_value(111111.0, "en-US", &opts).unwrap(), "111,111");
        assert_eq!(format_value(111111.0, "de-DE", &opts).unwrap(), "111.111");
        assert_eq!(format_value(111111.0, "hi-IN", &opts).unwrap(), "1,11,111");
    }

    #[test]
    fn grouping_can_be_disabled() {
        let opts = FormatOptions {
            use_grouping: false,
            ..FormatOptions::decimal()
        };
        assert_eq!(format_value(111111.0, "en-US", &opts).unwrap(), "111111");
    }

    #[test]
    fn fraction_digit_rounding_is_half_expand() {
        let opts = FormatOptions {
            maximum_fraction_digits: Some(2),
            ..FormatOptions::decimal()
        };
        assert_eq!(format_value(50000.4444, "en-US", &opts).unwrap(), "50,000.44");
        assert_eq!(format_value(50000.7777, "en-US", &opts).unwrap(), "50,000.78");
        assert_eq!(format_value(50000.665, "en-US", &opts).unwrap(), "50,000.67");
    }

    #[test]
    fn minimum_fraction_digits_pad() {
        let opts = FormatOptions {
            minimum_fraction_digits: 2,
            maximum_fraction_digits: Some(2),
            use_grouping: false,
            ..FormatOptions::decimal()
        };
        assert_eq!(format_value(1.11, "en-US", &opts).unwrap(), "1.11");
        assert_eq!(format_value(1.11, "de-DE", &opts).unwrap(), "1,11");
        assert_eq!(format_value(5.0, "en-US", &opts).unwrap(), "5.00");
    }

    #[test]
    fn currency_placement() {
        let usd = FormatOptions::currency(code("USD"), CurrencyDisplay::Symbol);
        assert_eq!(format_value(50000.0, "en-US", &usd).unwrap(), "$50,000");
        assert_eq!(
            format_value(50000.0, "de-DE", &usd).unwrap(),
            "50.000\u{00A0}$"
        );
        assert_eq!(format_value(-5.0, "en-US", &usd).unwrap(), "-$5");
    }

    #[test]
    fn currency_name_pluralizes_with_value() {
        let usd = FormatOptions::currency(code("USD"), CurrencyDisplay::Name);
        assert_eq!(format_value(1.0, "en-US", &usd).unwrap(), "1 US dollar");
        assert_eq!(format_value(111.0, "en-US", &usd).unwrap(), "111 US dollars");
    }

    #[test]
    fn percent_scales_and_spaces() {
        let opts = FormatOptions::percent();
        assert_eq!(format_value(0.85, "en-US", &opts).unwrap(), "85%");
        assert_eq!(format_value(0.85, "de-DE", &opts).unwrap(), "85\u{00A0}%");
    }

    #[test]
    fn unit_style_formats_and_degrades() {
        let opts = FormatOptions::unit("liter", UnitDisplay::Long);
        assert_eq!(format_value(2.0, "en-US", &opts).unwrap(), "2 liters");
        let bad = FormatOptions::unit("parsec", UnitDisplay::Short);
        assert_eq!(
            format_value(2.0, "en-US", &bad),
            Err(FormatError::UnsupportedUnit("parsec".to_string()))
        );
    }

    #[test]
    fn hanidec_numbering_system_transliterates() {
        let opts = FormatOptions {
            use_grouping: false,
            ..FormatOptions::decimal()
        };
        assert_eq!(
            format_value(1111.0, "zh-Hans-CN-u-nu-hanidec", &opts).unwrap(),
            "\u{4E00}\u{4E00}\u{4E00}\u{4E00}"
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        let opts = FormatOptions::decimal();
        assert_eq!(
            format_value(f64::NAN, "en-US", &opts),
            Err(FormatError::NonFinite)
        );
    }
}
