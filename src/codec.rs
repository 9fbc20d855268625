//! Value codec: conversions between canonical domain values and the text a
//! field displays.
//!
//! Everything here is a pure function over a value plus options; state lives
//! in [`crate::field`]. Two rendering paths exist on purpose: programmatic
//! values are rounded to the decimal scale, while as-typed text is truncated
//! at the typing boundary instead (you cannot type past the scale). Scaled
//! conversion keeps the observed asymmetry between directions: an absent
//! float maps to no scaled value, while an absent scaled value renders as
//! zero.

use fixed_decimal::{Decimal, FloatPrecision, SignedRoundingMode, UnsignedRoundingMode};

use crate::rules::{Affix, FormatMetadata, GroupingStyle};

/// Fixed multiplier between whole currency units and their subunit
/// representation (dollars and pennies).
pub const SUBUNIT_SCALE: f64 = 100.0;

/// Convert a fractional value into an integer multiple of the scale factor,
/// rounding halfway cases away from zero. Absent and non-finite inputs
/// propagate as `None`; a caller distinguishing "no value" from zero never
/// receives a silent zero here.
pub fn to_scaled(value: Option<f64>, scale: f64) -> Option<i64> {
    let v = value.filter(|v| v.is_finite())?;
    Some((v * scale).round() as i64)
}

/// Inverse of [`to_scaled`]. An absent scaled value yields `0.0`: the
/// default-rendering case treats a missing subunit count as zero-valued
/// display, not "no value".
pub fn from_scaled(scaled: Option<i64>, scale: f64) -> f64 {
    match scaled {
        Some(s) => s as f64 / scale,
        None => 0.0,
    }
}

/// Convert a domain value into the percentage the display layer shows.
/// With `precision > 0` the domain value is an integer scaled to
/// `10^precision`, so the percentage is `v / 10^(precision-2)` (percent
/// formatting itself contributes the factor of 100). Without precision the
/// plain `v * 100` conversion applies.
pub fn to_percent(value: Option<f64>, precision: Option<u32>) -> Option<f64> {
    let v = value.filter(|v| v.is_finite())?;
    match precision {
        Some(p) if p > 0 => Some(v / 10f64.powi(p as i32 - 2)),
        _ => Some(v * 100.0),
    }
}

/// Convert a displayed percentage back to the normalized 0–1 domain
/// fraction. Precision never affects this direction; the precision-scaled
/// integer is computed separately via [`percent_integer`].
pub fn from_percent(value: f64) -> f64 {
    value / 100.0
}

/// The precision-scaled integer representation of a domain fraction.
pub fn percent_integer(fraction: f64, precision: u32) -> i64 {
    (fraction * 10f64.powi(precision as i32)).round() as i64
}

/// Shortest round-trip text for a float, matching `String(number)` output
/// (`5`, not `5.0`).
pub fn float_to_text(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(value).to_string()
}

/// Display constraints for rendering and parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum fraction digits. Programmatic values round to this; typed
    /// text is truncated at it.
    pub decimal_scale: Option<u32>,
    /// Pad the fraction with zeros up to `decimal_scale`.
    pub fixed_decimal_scale: bool,
}

/// Unformatted numeric text plus its parsed float. `float_value` is `None`
/// for empty or unparseable input, never zero and never NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedInput {
    pub value: String,
    pub float_value: Option<f64>,
}

fn group_integer(digits: &str, sep: char, style: GroupingStyle) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 2);
    for (i, ch) in digits.chars().enumerate() {
        let from_right = n - i;
        let at_boundary = match style {
            GroupingStyle::Thousand => from_right % 3 == 0,
            GroupingStyle::Wan => from_right % 4 == 0,
            GroupingStyle::Lakh => {
                from_right == 3 || (from_right > 3 && (from_right - 3) % 2 == 0)
            }
        };
        if i > 0 && at_boundary {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Assemble a formatted string from canonical numeric text (ASCII digits,
/// optional leading `-`, optional `.`).
fn assemble(canonical: &str, meta: &FormatMetadata, affix: &Affix) -> String {
    let (sign, unsigned) = match canonical.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", canonical),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    let mut body = group_integer(int_part, meta.thousands_separator, meta.grouping_style);
    if let Some(frac) = frac_part {
        body.push(meta.decimal_separator);
        body.push_str(frac);
    }
    format!("{sign}{}", affix.apply(&body))
}

fn canonical_from_f64(value: f64, options: &RenderOptions) -> String {
    match options.decimal_scale {
        Some(scale) => {
            let mut dec = match Decimal::try_from_f64(value, FloatPrecision::RoundTrip) {
                Ok(dec) => dec,
                Err(_) => match Decimal::try_from_str(&float_to_text(value)) {
                    Ok(dec) => dec,
                    Err(_) => Decimal::from(0),
                },
            };
            dec.round_with_mode(
                -(scale as i16),
                SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
            );
            dec.absolute.trim_end();
            if options.fixed_decimal_scale && scale > 0 {
                dec.absolute.pad_end(-(scale as i16));
            }
            let magnitude = dec.absolute.to_string();
            if value < 0.0 {
                format!("-{magnitude}")
            } else {
                magnitude
            }
        }
        None => float_to_text(value),
    }
}

/// Render a programmatic domain value: round to the decimal scale, group,
/// and attach the affix. Non-finite values render empty, since they mean
/// "no value" by the time they reach the codec.
pub fn render_value(
    value: f64,
    meta: &FormatMetadata,
    affix: &Affix,
    options: &RenderOptions,
) -> String {
    if !value.is_finite() {
        return String::new();
    }
    assemble(&canonical_from_f64(value, options), meta, affix)
}

/// Render canonical as-typed text: fraction digits beyond the scale are
/// truncated, not rounded, and a trailing decimal point survives so typing
/// `1234.` keeps its separator.
pub fn render_text(
    canonical: &str,
    meta: &FormatMetadata,
    affix: &Affix,
    options: &RenderOptions,
) -> String {
    if canonical.is_empty() || canonical == "-" {
        return canonical.to_string();
    }
    let truncated = match (options.decimal_scale, canonical.split_once('.')) {
        (Some(scale), Some((int_part, frac_part))) => {
            let frac: String = frac_part.chars().take(scale as usize).collect();
            if frac.is_empty() && scale == 0 {
                int_part.to_string()
            } else {
                format!("{int_part}.{frac}")
            }
        }
        _ => canonical.to_string(),
    };
    assemble(&truncated, meta, affix)
}

/// Parse display text back into canonical numeric text and a float. Affix
/// text and grouping separators are stripped, the locale decimal separator
/// maps to `.`, and anything unrecognized is dropped so stray input can
/// never poison the numeric value.
pub fn parse_text(
    text: &str,
    meta: &FormatMetadata,
    affix: &Affix,
    options: &RenderOptions,
) -> ParsedInput {
    let stripped = affix.strip(text);
    let mut value = String::with_capacity(stripped.len());
    let mut seen_decimal = false;
    for ch in stripped.chars() {
        if ch.is_ascii_digit() {
            value.push(ch);
        } else if ch == '-' && value.is_empty() {
            value.push('-');
        } else if ch == meta.decimal_separator && !seen_decimal {
            seen_decimal = true;
            value.push('.');
        }
        // thousands separators and any other character fall through
    }

    if let (Some(scale), Some(idx)) = (options.decimal_scale, value.find('.')) {
        value.truncate(idx + 1 + scale as usize);
        if scale == 0 {
            value.truncate(idx);
        }
    }

    let float_value = match value.as_str() {
        "" | "-" | "." | "-." => None,
        text => text.parse::<f64>().ok().filter(|v| v.is_finite()),
    };
    ParsedInput { value, float_value }
}

/// Positional pattern formatting (`#` consumes one digit), used for masked
/// inputs like phone numbers. Without a mask the output stops at the last
/// typed digit; with one, remaining positions are filled.
pub fn format_pattern(digits: &str, pattern: &str, mask: Option<char>) -> String {
    let mut source = digits.chars().filter(|c| c.is_ascii_digit());
    let mut out = String::with_capacity(pattern.len());
    let mut exhausted = false;
    for ch in pattern.chars() {
        if ch == '#' {
            match source.next() {
                Some(d) => out.push(d),
                None => match mask {
                    Some(m) => out.push(m),
                    None => {
                        exhausted = true;
                        break;
                    }
                },
            }
        } else {
            out.push(ch);
        }
    }
    if exhausted {
        while out
            .chars()
            .last()
            .is_some_and(|c| !c.is_ascii_digit())
        {
            out.pop();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> FormatMetadata {
        FormatMetadata {
            thousands_separator: ',',
            decimal_separator: '.',
            grouping_style: GroupingStyle::Thousand,
        }
    }

    fn de() -> FormatMetadata {
        FormatMetadata {
            thousands_separator: '.',
            decimal_separator: ',',
            grouping_style: GroupingStyle::Thousand,
        }
    }

    fn hi() -> FormatMetadata {
        FormatMetadata {
            thousands_separator: ',',
            decimal_separator: '.',
            grouping_style: GroupingStyle::Lakh,
        }
    }

    fn scale2() -> RenderOptions {
        RenderOptions {
            decimal_scale: Some(2),
            ..RenderOptions::default()
        }
    }

    #[test]
    fn scaled_conversions_keep_the_asymmetry() {
        assert_eq!(to_scaled(Some(111.22), SUBUNIT_SCALE), Some(11122));
        assert_eq!(to_scaled(Some(111.225), SUBUNIT_SCALE), Some(11123));
        assert_eq!(to_scaled(None, SUBUNIT_SCALE), None);
        assert_eq!(to_scaled(Some(f64::NAN), SUBUNIT_SCALE), None);
        assert_eq!(from_scaled(Some(11122), SUBUNIT_SCALE), 111.22);
        assert_eq!(from_scaled(None, SUBUNIT_SCALE), 0.0);
    }

    #[test]
    fn percent_forward_honors_precision() {
        assert_eq!(to_percent(Some(8500.0), Some(4)), Some(85.0));
        assert_eq!(to_percent(Some(0.9), None), Some(90.0));
        assert_eq!(to_percent(Some(90.0), Some(5)), Some(0.09));
        assert_eq!(to_percent(None, Some(4)), None);
    }

    #[test]
    fn percent_reverse_always_divides_by_100() {
        assert_eq!(from_percent(44.0), 0.44);
        assert_eq!(from_percent(85.0), 0.85);
        assert_eq!(percent_integer(0.44, 4), 4400);
        assert_eq!(percent_integer(0.85, 4), 8500);
    }

    #[test]
    fn float_text_is_shortest_form() {
        assert_eq!(float_to_text(5.0), "5");
        assert_eq!(float_to_text(0.44), "0.44");
        assert_eq!(float_to_text(3456.78), "3456.78");
    }

    #[test]
    fn renders_grouped_values() {
        let none = Affix::None;
        assert_eq!(
            render_value(50000.0, &en(), &none, &RenderOptions::default()),
            "50,000"
        );
        assert_eq!(
            render_value(50000.6666, &en(), &none, &RenderOptions::default()),
            "50,000.6666"
        );
        assert_eq!(render_value(50000.6666, &en(), &none, &scale2()), "50,000.67");
        assert_eq!(render_value(50000.4444, &en(), &none, &scale2()), "50,000.44");
        assert_eq!(
            render_value(50000.6666, &de(), &none, &scale2()),
            "50.000,67"
        );
        assert_eq!(render_value(5000000.0, &hi(), &none, &RenderOptions::default()), "50,00,000");
        assert_eq!(render_value(5000000.4444, &hi(), &none, &scale2()), "50,00,000.44");
    }

    #[test]
    fn renders_wan_grouping() {
        let meta = FormatMetadata {
            thousands_separator: ',',
            decimal_separator: '.',
            grouping_style: GroupingStyle::Wan,
        };
        assert_eq!(
            render_value(123456789.0, &meta, &Affix::None, &RenderOptions::default()),
            "1,2345,6789"
        );
    }

    #[test]
    fn renders_affixes() {
        let prefix = Affix::Prefix("$".to_string());
        let suffix = Affix::Suffix(" $".to_string());
        assert_eq!(render_value(50000.0, &en(), &prefix, &scale2()), "$50,000");
        assert_eq!(
            render_value(50000.6666, &de(), &suffix, &scale2()),
            "50.000,67 $"
        );
        assert_eq!(render_value(5.0, &en(), &prefix, &scale2()), "$5");
    }

    #[test]
    fn fixed_scale_pads_trailing_zeros() {
        let opts = RenderOptions {
            decimal_scale: Some(2),
            fixed_decimal_scale: true,
        };
        assert_eq!(render_value(5.0, &en(), &Affix::None, &opts), "5.00");
    }

    #[test]
    fn negative_sign_stays_outside_the_affix() {
        let prefix = Affix::Prefix("$".to_string());
        assert_eq!(render_value(-5.0, &en(), &prefix, &scale2()), "-$5");
    }

    #[test]
    fn as_typed_text_truncates_instead_of_rounding() {
        let none = Affix::None;
        assert_eq!(render_text("3456.789", &en(), &none, &scale2()), "3,456.78");
        assert_eq!(render_text("3456.", &en(), &none, &scale2()), "3,456.");
        assert_eq!(render_text("", &en(), &none, &scale2()), "");
    }

    #[test]
    fn parses_formatted_input() {
        let parsed = parse_text(
            "$3,344.66",
            &en(),
            &Affix::Prefix("$".to_string()),
            &scale2(),
        );
        assert_eq!(parsed.value, "3344.66");
        assert_eq!(parsed.float_value, Some(3344.66));

        let parsed = parse_text("1.234.567,89", &de(), &Affix::None, &RenderOptions::default());
        assert_eq!(parsed.value, "1234567.89");
        assert_eq!(parsed.float_value, Some(1234567.89));
    }

    #[test]
    fn empty_and_junk_input_yield_no_value() {
        let parsed = parse_text("", &en(), &Affix::None, &RenderOptions::default());
        assert_eq!(parsed.value, "");
        assert_eq!(parsed.float_value, None);

        let parsed = parse_text("abc", &en(), &Affix::None, &RenderOptions::default());
        assert_eq!(parsed.float_value, None);

        let parsed = parse_text("-", &en(), &Affix::None, &RenderOptions::default());
        assert_eq!(parsed.float_value, None);
    }

    #[test]
    fn round_trips_within_scale() {
        let meta = en();
        let opts = scale2();
        for value in [0.0, 1.0, 50000.44, 1234567.89, 0.07] {
            let rendered = render_value(value, &meta, &Affix::None, &opts);
            let parsed = parse_text(&rendered, &meta, &Affix::None, &opts);
            assert_eq!(parsed.float_value, Some(value), "round trip of {value}");
        }
    }

    #[test]
    fn pattern_formatting() {
        assert_eq!(
            format_pattern("5551234567", "(###) ###-####", None),
            "(555) 123-4567"
        );
        assert_eq!(format_pattern("555", "(###) ###-####", None), "(555");
        assert_eq!(
            format_pattern("555", "(###) ###-####", Some('_')),
            "(555) ___-____"
        );
    }
}
