//! Measurement-unit data: the sanctioned identifier set and localized
//! symbol/name forms.
//!
//! Only sanctioned single units (and `-per-` compounds of them) are
//! formattable; anything else is an [`FormatError::UnsupportedUnit`] so the
//! caller can drop the unit annotation instead of printing garbage.

use super::FormatError;
use super::UnitDisplay;
use super::locale::lang_of;

pub(crate) fn is_sanctioned_single(unit: &str) -> bool {
    matches!(
        unit,
        "acre" | "bit" | "byte" | "celsius" | "centimeter" | "day" | "degree"
            | "fahrenheit" | "fluid-ounce" | "foot" | "gallon" | "gigabit"
            | "gigabyte" | "gram" | "hectare" | "hour" | "inch" | "kilobit"
            | "kilobyte" | "kilogram" | "kilometer" | "liter" | "megabit"
            | "megabyte" | "meter" | "microsecond" | "mile"
            | "mile-scandinavian" | "milliliter" | "millimeter"
            | "millisecond" | "minute" | "month" | "nanosecond" | "ounce"
            | "percent" | "petabyte" | "pound" | "second" | "stone"
            | "terabit" | "terabyte" | "week" | "yard" | "year"
    )
}

/// Whether the identifier is formattable: a sanctioned single unit or a
/// `numerator-per-denominator` compound of two sanctioned units.
pub(crate) fn is_supported(unit: &str) -> bool {
    if let Some((num, den)) = unit.split_once("-per-") {
        return is_sanctioned_single(num) && is_sanctioned_single(den);
    }
    is_sanctioned_single(unit)
}

/// English forms: (narrow, short, long singular, long plural).
/// Short and long forms want a space between number and unit; narrow forms
/// and the percent/degree signs attach directly.
fn english_forms(unit: &str) -> (&str, &str, &str, &str) {
    match unit {
        "celsius" => ("\u{00B0}C", "\u{00B0}C", "degree Celsius", "degrees Celsius"),
        "fahrenheit" => ("\u{00B0}F", "\u{00B0}F", "degree Fahrenheit", "degrees Fahrenheit"),
        "kilometer" => ("km", "km", "kilometer", "kilometers"),
        "meter" => ("m", "m", "meter", "meters"),
        "centimeter" => ("cm", "cm", "centimeter", "centimeters"),
        "millimeter" => ("mm", "mm", "millimeter", "millimeters"),
        "mile" => ("mi", "mi", "mile", "miles"),
        "mile-scandinavian" => ("smi", "smi", "Scandinavian mile", "Scandinavian miles"),
        "foot" => ("ft", "ft", "foot", "feet"),
        "inch" => ("\u{2033}", "in", "inch", "inches"),
        "yard" => ("yd", "yd", "yard", "yards"),
        "kilogram" => ("kg", "kg", "kilogram", "kilograms"),
        "gram" => ("g", "g", "gram", "grams"),
        "pound" => ("lb", "lb", "pound", "pounds"),
        "ounce" => ("oz", "oz", "ounce", "ounces"),
        "fluid-ounce" => ("fl oz", "fl oz", "fluid ounce", "fluid ounces"),
        "stone" => ("st", "st", "stone", "stone"),
        "liter" => ("L", "L", "liter", "liters"),
        "milliliter" => ("mL", "mL", "milliliter", "milliliters"),
        "gallon" => ("gal", "gal", "gallon", "gallons"),
        "hour" => ("h", "hr", "hour", "hours"),
        "minute" => ("min", "min", "minute", "minutes"),
        "second" => ("s", "sec", "second", "seconds"),
        "millisecond" => ("ms", "ms", "millisecond", "milliseconds"),
        "microsecond" => ("\u{03BC}s", "\u{03BC}s", "microsecond", "microseconds"),
        "nanosecond" => ("ns", "ns", "nanosecond", "nanoseconds"),
        "day" => ("d", "day", "day", "days"),
        "week" => ("w", "wk", "week", "weeks"),
        "month" => ("mo", "mth", "month", "months"),
        "year" => ("y", "yr", "year", "years"),
        "byte" => ("B", "byte", "byte", "bytes"),
        "kilobyte" => ("kB", "kB", "kilobyte", "kilobytes"),
        "megabyte" => ("MB", "MB", "megabyte", "megabytes"),
        "gigabyte" => ("GB", "GB", "gigabyte", "gigabytes"),
        "terabyte" => ("TB", "TB", "terabyte", "terabytes"),
        "petabyte" => ("PB", "PB", "petabyte", "petabytes"),
        "bit" => ("bit", "bit", "bit", "bits"),
        "kilobit" => ("kbit", "kbit", "kilobit", "kilobits"),
        "megabit" => ("Mbit", "Mbit", "megabit", "megabits"),
        "gigabit" => ("Gbit", "Gbit", "gigabit", "gigabits"),
        "terabit" => ("Tbit", "Tbit", "terabit", "terabits"),
        "acre" => ("ac", "ac", "acre", "acres"),
        "hectare" => ("ha", "ha", "hectare", "hectares"),
        "percent" => ("%", "%", "percent", "percent"),
        "degree" => ("\u{00B0}", "\u{00B0}", "degree", "degrees"),
        other => (other, other, other, other),
    }
}

/// Per-locale overrides for the single-unit forms. Returns the bare symbol
/// or name; spacing is applied by the pattern assembly.
fn locale_forms(unit: &str, display: UnitDisplay, lang: &str, one: bool) -> Option<String> {
    let form = match (lang, unit, display) {
        ("de", "inch", UnitDisplay::Long) => "Zoll".to_string(),
        ("de", "inch", UnitDisplay::Short) => "in".to_string(),
        ("de", "inch", UnitDisplay::Narrow) => "in".to_string(),
        ("de", "foot", UnitDisplay::Long) => "Fu\u{00DF}".to_string(),
        ("de", "liter", UnitDisplay::Long) => "Liter".to_string(),
        ("de", "liter", UnitDisplay::Short) => "l".to_string(),
        ("de", "hour", UnitDisplay::Long) => {
            if one { "Stunde".to_string() } else { "Stunden".to_string() }
        }
        ("de", "hour", UnitDisplay::Short) => "Std.".to_string(),
        ("de", "hour", UnitDisplay::Narrow) => "Std.".to_string(),
        ("de", "mile", UnitDisplay::Long) => {
            if one { "Meile".to_string() } else { "Meilen".to_string() }
        }
        ("de", "kilometer", UnitDisplay::Long) => "Kilometer".to_string(),
        ("de", "meter", UnitDisplay::Long) => "Meter".to_string(),
        ("hi", "inch", UnitDisplay::Long) => "\u{0907}\u{0902}\u{091A}".to_string(),
        ("hi", "liter", UnitDisplay::Long) => "\u{0932}\u{0940}\u{091F}\u{0930}".to_string(),
        ("hi", "foot", UnitDisplay::Long) => "\u{092B}\u{093C}\u{0941}\u{091F}".to_string(),
        ("hi", "mile", UnitDisplay::Long) => "\u{092E}\u{0940}\u{0932}".to_string(),
        ("hi", "hour", UnitDisplay::Long) => "\u{0918}\u{0902}\u{091F}\u{093E}".to_string(),
        ("ja", "hour", UnitDisplay::Long) => "\u{6642}\u{9593}".to_string(),
        ("ja", "hour", UnitDisplay::Short) => "\u{6642}\u{9593}".to_string(),
        ("ja", "kilometer", UnitDisplay::Long) => {
            "\u{30AD}\u{30ED}\u{30E1}\u{30FC}\u{30C8}\u{30EB}".to_string()
        }
        _ => return None,
    };
    Some(form)
}

fn single_form(unit: &str, display: UnitDisplay, lang: &str, one: bool) -> String {
    if let Some(form) = locale_forms(unit, display, lang, one) {
        return form;
    }
    let (narrow, short, long_one, long_other) = english_forms(unit);
    match display {
        UnitDisplay::Narrow => narrow.to_string(),
        UnitDisplay::Short => short.to_string(),
        UnitDisplay::Long => {
            if one { long_one.to_string() } else { long_other.to_string() }
        }
    }
}

fn attaches_directly(form: &str) -> bool {
    form.starts_with('%') || form.starts_with('\u{00B0}') || form.starts_with('\u{2033}')
}

/// Locale-specific connector for long compound units ("miles per hour").
fn per_connector(lang: &str) -> &'static str {
    match lang {
        "de" => "pro",
        "fr" => "par",
        "es" | "pt" => "por",
        "hi" => "\u{092A}\u{094D}\u{0930}\u{0924}\u{093F}",
        _ => "per",
    }
}

/// Suffix to append to a formatted number for the given unit, including the
/// number/unit spacing convention. Prefixed (circumfix) unit patterns do not
/// occur in the supported set, so placement is always suffix.
pub(crate) fn suffix(
    unit: &str,
    display: UnitDisplay,
    locale: &str,
    one: bool,
) -> Result<String, FormatError> {
    if !is_supported(unit) {
        return Err(FormatError::UnsupportedUnit(unit.to_string()));
    }
    let lang = lang_of(locale);

    if let Some((num, den)) = unit.split_once("-per-") {
        return Ok(match display {
            UnitDisplay::Long => {
                let num_form = single_form(num, UnitDisplay::Long, lang, one);
                let den_form = single_form(den, UnitDisplay::Long, lang, true);
                format!(" {} {} {}", num_form, per_connector(lang), den_form)
            }
            UnitDisplay::Short => {
                let num_form = single_form(num, UnitDisplay::Narrow, lang, false);
                let den_form = single_form(den, UnitDisplay::Narrow, lang, true);
                format!(" {}/{}", num_form, den_form)
            }
            UnitDisplay::Narrow => {
                let num_form = single_form(num, UnitDisplay::Narrow, lang, false);
                let den_form = single_form(den, UnitDisplay::Narrow, lang, true);
                format!("{}/{}", num_form, den_form)
            }
        });
    }

    let form = single_form(unit, display, lang, one);
    Ok(match display {
        UnitDisplay::Narrow => form,
        _ if attaches_directly(&form) => form,
        _ => format!(" {}", form),
    })
}
