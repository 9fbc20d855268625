//! Field state: reconciling an externally owned value, the internal edit
//! buffer, and a default-value fallback across mount, edit, and blur.
//!
//! A [`NumberField`] owns no rendering; it is the state machine a text-input
//! surface drives. The surface feeds typed text into [`NumberField::handle_edit`],
//! blur into [`NumberField::handle_blur`], and externally owned updates into
//! [`NumberField::set_value`]; change notifications come back as
//! [`EditEvent`]s, emitted exactly once per logical change even when a
//! value-dependent affix (a unit or currency name crossing the
//! singular/plural boundary) forces a secondary reformat.

use log::warn;

use crate::codec::{self, RenderOptions, SUBUNIT_SCALE};
use crate::intl::{CurrencyCode, CurrencyDisplay, FormatError, UnitDisplay};
use crate::rules::{self, Affix, FormatMetadata, RulesCache};

/// What triggered a change notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Synthetic event describing the default value being applied at mount.
    Mount,
    /// A user edit (or the default being substituted on blur).
    Event,
    /// Reformatting on loss of focus without a value change.
    Blur,
}

/// A change notification. `float_value` is `None` when the field was
/// explicitly emptied, as distinct from a field that was never set, which
/// emits nothing at all.
#[derive(Clone, Debug, PartialEq)]
pub struct EditEvent {
    /// The localized text the user sees, affix included.
    pub formatted_value: String,
    /// Unformatted numeric text in the canonical domain.
    pub value: String,
    /// Canonical domain value (a 0–1 fraction for percent fields).
    pub float_value: Option<f64>,
    /// Scaled-integer representation: pennies for currency fields, the
    /// precision-scaled integer for percent fields with a precision.
    pub scaled: Option<i64>,
    pub source: Source,
}

/// An externally supplied value. `Unset` (never provided) and `Cleared`
/// (explicitly null) are different states: a cleared field is controlled
/// and renders empty, an unset one falls back to the default value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ValueProp {
    #[default]
    Unset,
    Cleared,
    Number(f64),
    Text(String),
}

impl ValueProp {
    /// Empty text behaves exactly like an absent value.
    fn normalized(self) -> ValueProp {
        match self {
            ValueProp::Text(t) if t.trim().is_empty() => ValueProp::Unset,
            other => other,
        }
    }
}

/// What kind of number the field holds, with the per-kind display options.
#[derive(Clone, Debug, PartialEq)]
pub enum Kind {
    Number,
    Currency {
        code: CurrencyCode,
        display: CurrencyDisplay,
        /// Interpret the domain value as an integer subunit count.
        pennies: bool,
    },
    Percent {
        precision: Option<u32>,
    },
    Unit {
        unit: String,
        display: UnitDisplay,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldOptions {
    pub locale: Option<String>,
    pub kind: Kind,
    pub render: RenderOptions,
    /// Deliver the synthetic default-value event after the first commit.
    /// Input-style fields do; display-style fields only record it.
    pub notify_on_mount: bool,
    /// Whether the consumer registered a change listener. Only used for the
    /// misconfigured-consumer warning in controlled mode.
    pub has_change_listener: bool,
    /// Recompute the name affix from the current value on every edit
    /// (singular/plural tracking for name/long display).
    pub track_value_name: bool,
}

impl FieldOptions {
    fn base(kind: Kind) -> Self {
        FieldOptions {
            locale: None,
            kind,
            render: RenderOptions::default(),
            notify_on_mount: false,
            has_change_listener: true,
            track_value_name: false,
        }
    }

    /// A plain locale-formatted number.
    pub fn number() -> Self {
        FieldOptions::base(Kind::Number)
    }

    /// A currency amount with its symbol, two fraction digits by default.
    pub fn currency(code: CurrencyCode) -> Self {
        FieldOptions {
            render: RenderOptions {
                decimal_scale: Some(2),
                ..RenderOptions::default()
            },
            ..FieldOptions::base(Kind::Currency {
                code,
                display: CurrencyDisplay::Symbol,
                pennies: false,
            })
        }
    }

    /// Currency with its full name, pluralized against the current value.
    pub fn currency_name(code: CurrencyCode) -> Self {
        FieldOptions {
            track_value_name: true,
            ..FieldOptions::currency(code).currency_display(CurrencyDisplay::Name)
        }
    }

    /// A 0–1 domain fraction displayed as a percentage, optionally held as
    /// a precision-scaled integer.
    pub fn percent(precision: Option<u32>) -> Self {
        FieldOptions::base(Kind::Percent { precision })
    }

    /// A measurement with its unit symbol.
    pub fn unit(unit: impl Into<String>, display: UnitDisplay) -> Self {
        FieldOptions::base(Kind::Unit {
            unit: unit.into(),
            display,
        })
    }

    /// A measurement with its long unit name, pluralized against the
    /// current value.
    pub fn unit_name(unit: impl Into<String>) -> Self {
        FieldOptions {
            track_value_name: true,
            ..FieldOptions::base(Kind::Unit {
                unit: unit.into(),
                display: UnitDisplay::Long,
            })
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Mark the field as an input surface: the synthetic mount event is
    /// delivered, not just recorded.
    pub fn input(mut self) -> Self {
        self.notify_on_mount = true;
        self
    }

    pub fn decimal_scale(mut self, scale: u32) -> Self {
        self.render.decimal_scale = Some(scale);
        self
    }

    pub fn fixed_decimal_scale(mut self) -> Self {
        self.render.fixed_decimal_scale = true;
        self
    }

    pub fn currency_display(mut self, display: CurrencyDisplay) -> Self {
        if let Kind::Currency { display: d, .. } = &mut self.kind {
            *d = display;
        }
        self
    }

    pub fn pennies(mut self) -> Self {
        if let Kind::Currency { pennies, .. } = &mut self.kind {
            *pennies = true;
        }
        self
    }

    pub fn without_change_listener(mut self) -> Self {
        self.has_change_listener = false;
        self
    }
}

/// Monotonic id generator, injected by the application context so ids never
/// leak across tests or unrelated component trees through a global.
#[derive(Debug, Default)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    pub fn new() -> Self {
        IdSource::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

/// Outcome of a blur: either the default value was substituted (the normal
/// blur handler must not run), the text was renormalized, or nothing, in
/// which case the normal blur handling runs.
#[derive(Clone, Debug, PartialEq)]
pub enum BlurOutcome {
    DefaultApplied(EditEvent),
    Normalized(EditEvent),
    Passthrough,
}

/// Reconciles external value, edit buffer, and default value. Created on
/// first render, destroyed with the owning component.
#[derive(Debug)]
pub struct NumberField {
    id: u64,
    options: FieldOptions,
    meta: FormatMetadata,
    affix: Affix,
    current_raw: String,
    formatted: String,
    display_float: Option<f64>,
    last_emitted: Option<EditEvent>,
    pending: Option<EditEvent>,
    controlled: bool,
    default_value: Option<f64>,
    warned_missing_listener: bool,
}

impl NumberField {
    pub fn mount(
        options: FieldOptions,
        value: ValueProp,
        default_value: Option<f64>,
        ids: &mut IdSource,
        cache: &mut RulesCache,
    ) -> NumberField {
        let value = value.normalized();
        let controlled = value != ValueProp::Unset;
        let meta = cache.metadata(options.locale.as_deref());

        let external_float = match &value {
            ValueProp::Number(v) if v.is_finite() => Some(*v),
            ValueProp::Text(t) => t.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        };
        let used_default = !controlled && default_value.is_some();
        let domain_float = match &value {
            ValueProp::Cleared => None,
            _ => external_float.or(if used_default { default_value } else { None }),
        };
        let display_float = domain_float.map(|v| display_value(&options.kind, v));

        let mut field = NumberField {
            id: ids.next_id(),
            affix: initial_affix(&options, display_float),
            meta,
            current_raw: display_float.map(codec::float_to_text).unwrap_or_default(),
            formatted: String::new(),
            display_float,
            last_emitted: None,
            pending: None,
            controlled,
            default_value,
            warned_missing_listener: false,
            options,
        };
        field.formatted = match field.display_float {
            Some(f) => codec::render_value(f, &field.meta, &field.affix, &field.options.render),
            None => String::new(),
        };

        let snapshot = field.make_event(
            field.formatted.clone(),
            field.current_raw.clone(),
            field.display_float,
            Source::Mount,
        );
        if used_default && field.options.notify_on_mount {
            field.pending = Some(snapshot.clone());
        }
        field.last_emitted = Some(snapshot);
        field
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The localized text to display, affix included.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The canonical unformatted buffer.
    pub fn raw(&self) -> &str {
        &self.current_raw
    }

    pub fn float_value(&self) -> Option<f64> {
        self.display_float
    }

    /// The deferred synthetic mount event, if any. The rendering layer
    /// drains this once after its first commit, never during construction,
    /// so consumers have subscribed by the time it is observable.
    pub fn poll_pending(&mut self) -> Option<EditEvent> {
        self.pending.take()
    }

    /// Apply a user edit of the display text. Returns the change event to
    /// deliver, or `None` when the edit is a no-op for consumers (identical
    /// value, or the secondary render of a value-dependent affix change).
    pub fn handle_edit(&mut self, typed: &str) -> Option<EditEvent> {
        if self.controlled && !self.options.has_change_listener && !self.warned_missing_listener {
            self.warned_missing_listener = true;
            warn!(
                "field {}: controlled value without a change listener; edits are shown locally but the external value wins on the next render",
                self.id
            );
        }

        let parsed = codec::parse_text(typed, &self.meta, &self.affix, &self.options.render);

        if self.options.track_value_name {
            self.refresh_value_affix(parsed.float_value);
        }

        let formatted =
            codec::render_text(&parsed.value, &self.meta, &self.affix, &self.options.render);

        // Buffer and last-emitted are replaced together; no observer can see
        // one without the other.
        self.current_raw = parsed.value.clone();
        self.display_float = parsed.float_value;
        self.formatted = formatted.clone();

        let event = self.make_event(formatted, parsed.value, parsed.float_value, Source::Event);
        if self.duplicates_last(&event) {
            return None;
        }
        self.last_emitted = Some(event.clone());
        Some(event)
    }

    /// Handle loss of focus. When the canonical value is empty and a default
    /// exists, the default is substituted and emitted and the normal blur
    /// handler must not run; otherwise the text is renormalized in place.
    pub fn handle_blur(&mut self) -> BlurOutcome {
        let Some(display) = self.display_float else {
            if let Some(default) = self.default_value {
                let display = display_value(&self.options.kind, default);
                if self.options.track_value_name {
                    self.refresh_value_affix(Some(display));
                }
                self.formatted =
                    codec::render_value(display, &self.meta, &self.affix, &self.options.render);
                self.current_raw = codec::float_to_text(display);
                self.display_float = Some(display);
                let event = self.make_event(
                    self.formatted.clone(),
                    self.current_raw.clone(),
                    Some(display),
                    Source::Event,
                );
                self.last_emitted = Some(event.clone());
                return BlurOutcome::DefaultApplied(event);
            }
            return BlurOutcome::Passthrough;
        };

        let normalized =
            codec::render_value(display, &self.meta, &self.affix, &self.options.render);
        if normalized != self.formatted {
            self.formatted = normalized.clone();
            self.current_raw = codec::float_to_text(display);
            let event = self.make_event(
                normalized,
                self.current_raw.clone(),
                Some(display),
                Source::Blur,
            );
            if !self.duplicates_last(&event) {
                self.last_emitted = Some(event.clone());
                return BlurOutcome::Normalized(event);
            }
        }
        BlurOutcome::Passthrough
    }

    /// Apply an externally owned value update (the controlled re-render).
    /// No event is emitted: the value came from the owner.
    pub fn set_value(&mut self, value: ValueProp) {
        let value = value.normalized();
        self.controlled = value != ValueProp::Unset;
        let domain_float = match &value {
            ValueProp::Number(v) if v.is_finite() => Some(*v),
            ValueProp::Text(t) => t.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        };
        match &value {
            // Losing the value prop leaves the buffer alone for display
            // continuity; the field just becomes uncontrolled.
            ValueProp::Unset => {}
            ValueProp::Cleared => {
                self.display_float = None;
                self.current_raw = String::new();
                self.formatted = String::new();
                self.last_emitted = Some(self.make_event(
                    String::new(),
                    String::new(),
                    None,
                    Source::Mount,
                ));
            }
            _ => {
                let display = domain_float.map(|v| display_value(&self.options.kind, v));
                if self.options.track_value_name {
                    self.refresh_value_affix(display);
                }
                self.display_float = display;
                self.current_raw = display.map(codec::float_to_text).unwrap_or_default();
                self.formatted = match display {
                    Some(f) => {
                        codec::render_value(f, &self.meta, &self.affix, &self.options.render)
                    }
                    None => String::new(),
                };
                self.last_emitted = Some(self.make_event(
                    self.formatted.clone(),
                    self.current_raw.clone(),
                    display,
                    Source::Mount,
                ));
            }
        }
    }

    fn duplicates_last(&self, event: &EditEvent) -> bool {
        self.last_emitted
            .as_ref()
            .is_some_and(|last| last.value == event.value && last.float_value == event.float_value)
    }

    fn refresh_value_affix(&mut self, display_float: Option<f64>) {
        let next = value_affix(&self.options, display_float);
        if next != self.affix {
            self.affix = next;
        }
    }

    /// Translate the display-domain float into the canonical event fields
    /// for this field kind.
    fn make_event(
        &self,
        formatted_value: String,
        raw: String,
        display_float: Option<f64>,
        source: Source,
    ) -> EditEvent {
        match &self.options.kind {
            Kind::Number | Kind::Unit { .. } => EditEvent {
                formatted_value,
                value: raw,
                float_value: display_float,
                scaled: None,
                source,
            },
            Kind::Currency { .. } => EditEvent {
                formatted_value,
                value: raw,
                float_value: display_float,
                scaled: codec::to_scaled(display_float, SUBUNIT_SCALE),
                source,
            },
            Kind::Percent { precision } => {
                let fraction = display_float.map(codec::from_percent);
                EditEvent {
                    formatted_value,
                    value: fraction.map(codec::float_to_text).unwrap_or_default(),
                    float_value: fraction,
                    scaled: match (fraction, precision) {
                        (Some(f), Some(p)) if *p > 0 => Some(codec::percent_integer(f, *p)),
                        _ => None,
                    },
                    source,
                }
            }
        }
    }
}

/// Domain value -> the float the display layer shows.
fn display_value(kind: &Kind, domain: f64) -> f64 {
    match kind {
        Kind::Currency { pennies: true, .. } => {
            codec::from_scaled(Some(domain.round() as i64), SUBUNIT_SCALE)
        }
        Kind::Percent { precision } => {
            codec::to_percent(Some(domain), *precision).unwrap_or(domain)
        }
        _ => domain,
    }
}

fn initial_affix(options: &FieldOptions, display_float: Option<f64>) -> Affix {
    if options.track_value_name {
        return value_affix(options, display_float);
    }
    match &options.kind {
        Kind::Number => Affix::None,
        Kind::Currency { code, display, .. } => {
            rules::currency_affix(code, options.locale.as_deref(), *display)
        }
        Kind::Percent { .. } => rules::percent_affix(options.locale.as_deref()),
        Kind::Unit { unit, display } => {
            match rules::unit_affix(unit, options.locale.as_deref(), *display) {
                Ok(affix) => affix,
                // Unsupported unit/locale: fall back to a bare number
                // rather than surfacing an error to the user.
                Err(FormatError::UnsupportedUnit(_) | FormatError::NonFinite) => Affix::None,
            }
        }
    }
}

/// Value-tracking name affix for currency-name and unit-name fields.
fn value_affix(options: &FieldOptions, display_float: Option<f64>) -> Affix {
    let locale = options.locale.as_deref();
    match &options.kind {
        Kind::Currency { code, display, .. } => {
            let value = display_float.unwrap_or(1.0);
            let name = rules::currency_name(value, code, locale);
            rules::place_affix(
                name,
                rules::currency_is_prefixed(locale, *display),
                (*display).into(),
            )
        }
        Kind::Unit { unit, display } => {
            let value = display_float.unwrap_or(0.0);
            match rules::unit_name(value, unit, locale) {
                Ok(name) => match rules::unit_is_prefixed(unit, locale, *display) {
                    Ok(prefixed) => rules::place_affix(name, prefixed, (*display).into()),
                    Err(_) => Affix::None,
                },
                Err(_) => Affix::None,
            }
        }
        _ => Affix::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyCode {
        CurrencyCode::parse("USD").unwrap()
    }

    fn mount(
        options: FieldOptions,
        value: ValueProp,
        default_value: Option<f64>,
    ) -> NumberField {
        let mut ids = IdSource::new();
        let mut cache = RulesCache::new();
        NumberField::mount(options, value, default_value, &mut ids, &mut cache)
    }

    #[test]
    fn external_value_mounts_silently() {
        let mut field = mount(
            FieldOptions::currency(usd()).locale("en-US").input(),
            ValueProp::Number(50000.0),
            None,
        );
        assert_eq!(field.formatted(), "$50,000");
        assert!(field.is_controlled());
        assert_eq!(field.poll_pending(), None);
    }

    #[test]
    fn default_value_shows_without_event_on_display_fields() {
        let mut field = mount(
            FieldOptions::number().locale("en-US"),
            ValueProp::Unset,
            Some(2000.0),
        );
        assert_eq!(field.formatted(), "2,000");
        assert_eq!(field.poll_pending(), None);
    }

    #[test]
    fn default_value_emits_mount_event_on_input_fields() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Unset,
            Some(2000.0),
        );
        assert_eq!(field.formatted(), "2,000");
        let event = field.poll_pending().expect("mount event");
        assert_eq!(event.source, Source::Mount);
        assert_eq!(event.float_value, Some(2000.0));
        assert_eq!(event.formatted_value, "2,000");
        // Delivered once only.
        assert_eq!(field.poll_pending(), None);
    }

    #[test]
    fn cleared_value_stays_empty_despite_default() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Cleared,
            Some(2000.0),
        );
        assert_eq!(field.formatted(), "");
        assert!(field.is_controlled());
        assert_eq!(field.poll_pending(), None);
    }

    #[test]
    fn empty_text_value_falls_back_to_default() {
        let field = mount(
            FieldOptions::number().locale("en-US"),
            ValueProp::Text(String::new()),
            Some(2000.0),
        );
        assert_eq!(field.formatted(), "2,000");
        assert!(!field.is_controlled());
    }

    #[test]
    fn currency_edit_emits_values_and_pennies() {
        let mut field = mount(
            FieldOptions::currency(usd()).locale("en-US").input(),
            ValueProp::Number(50000.6666),
            None,
        );
        assert_eq!(field.formatted(), "$50,000.67");

        let event = field.handle_edit("3344.66").expect("change event");
        assert_eq!(event.formatted_value, "$3,344.66");
        assert_eq!(event.value, "3344.66");
        assert_eq!(event.float_value, Some(3344.66));
        assert_eq!(event.scaled, Some(334466));
        assert_eq!(event.source, Source::Event);
    }

    #[test]
    fn german_currency_is_suffixed() {
        let field = mount(
            FieldOptions::currency(usd()).locale("de-DE"),
            ValueProp::Number(50000.6666),
            None,
        );
        assert_eq!(field.formatted(), "50.000,67 $");
    }

    #[test]
    fn currency_code_display() {
        let field = mount(
            FieldOptions::currency(usd())
                .locale("en-US")
                .currency_display(CurrencyDisplay::Code),
            ValueProp::Number(50000.4444),
            None,
        );
        assert_eq!(field.formatted(), "USD 50,000.44");
    }

    #[test]
    fn lakh_grouping_flows_through() {
        let field = mount(
            FieldOptions::number().locale("hi-IN"),
            ValueProp::Number(5000000.0),
            None,
        );
        assert_eq!(field.formatted(), "50,00,000");
    }

    #[test]
    fn pennies_value_renders_in_whole_units() {
        let field = mount(
            FieldOptions::currency(usd()).locale("en-US").pennies(),
            ValueProp::Number(500.0),
            None,
        );
        assert_eq!(field.formatted(), "$5");
    }

    #[test]
    fn identical_edits_emit_once() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Unset,
            None,
        );
        assert!(field.handle_edit("3456.78").is_some());
        assert_eq!(field.handle_edit("3456.78"), None);
        assert!(field.handle_edit("3456.79").is_some());
    }

    #[test]
    fn blur_substitutes_default_when_emptied() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Unset,
            Some(2000.0),
        );
        field.poll_pending();
        assert!(field.handle_edit("").is_some());
        match field.handle_blur() {
            BlurOutcome::DefaultApplied(event) => {
                assert_eq!(event.float_value, Some(2000.0));
                assert_eq!(event.formatted_value, "2,000");
                assert_eq!(event.source, Source::Event);
            }
            other => panic!("expected default substitution, got {other:?}"),
        }
        // Field is no longer empty, so the next blur passes through.
        assert_eq!(field.handle_blur(), BlurOutcome::Passthrough);
    }

    #[test]
    fn blur_without_default_passes_through() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Unset,
            None,
        );
        field.handle_edit("");
        assert_eq!(field.handle_blur(), BlurOutcome::Passthrough);
    }

    #[test]
    fn blur_renormalizes_trailing_separator() {
        let mut field = mount(
            FieldOptions::number().locale("en-US").input(),
            ValueProp::Unset,
            None,
        );
        field.handle_edit("3456.");
        assert_eq!(field.formatted(), "3,456.");
        match field.handle_blur() {
            BlurOutcome::Normalized(event) => {
                assert_eq!(event.formatted_value, "3,456");
                assert_eq!(event.source, Source::Blur);
            }
            other => panic!("expected normalization, got {other:?}"),
        }
    }

    #[test]
    fn percent_mount_and_edit_with_precision() {
        let mut field = mount(
            FieldOptions::percent(Some(4)).locale("en-US").input(),
            ValueProp::Number(8500.0),
            None,
        );
        assert_eq!(field.formatted(), "85%");

        let event = field.handle_edit("44.00").expect("change event");
        assert_eq!(event.value, "0.44");
        assert_eq!(event.float_value, Some(0.44));
        assert_eq!(event.scaled, Some(4400));
    }

    #[test]
    fn percent_without_precision_multiplies() {
        let field = mount(
            FieldOptions::percent(None).locale("en-US"),
            ValueProp::Number(0.9),
            None,
        );
        assert_eq!(field.formatted(), "90%");
    }

    #[test]
    fn unit_name_tracks_plural_boundary_with_one_event() {
        let mut field = mount(
            FieldOptions::unit_name("liter").locale("en-US").input(),
            ValueProp::Number(1.0),
            None,
        );
        assert_eq!(field.formatted(), "1 liter");

        // Crossing the singular/plural boundary changes the affix; the
        // consumer still sees exactly one event for the edit.
        let event = field.handle_edit("2").expect("change event");
        assert_eq!(event.formatted_value, "2 liters");
        assert_eq!(event.float_value, Some(2.0));
        assert_eq!(field.handle_edit("2"), None);
    }

    #[test]
    fn currency_name_tracks_plural_boundary() {
        let mut field = mount(
            FieldOptions::currency_name(usd()).locale("en-US").input(),
            ValueProp::Number(1.0),
            None,
        );
        assert_eq!(field.formatted(), "1 US dollar");

        let event = field.handle_edit("2").expect("change event");
        assert_eq!(event.formatted_value, "2 US dollars");
    }

    #[test]
    fn unsupported_unit_degrades_to_bare_number() {
        let field = mount(
            FieldOptions::unit("parsec", UnitDisplay::Short).locale("en-US"),
            ValueProp::Number(50000.0),
            None,
        );
        assert_eq!(field.formatted(), "50,000");
    }

    #[test]
    fn controlled_updates_come_from_the_owner() {
        let mut field = mount(
            FieldOptions::currency(usd()).locale("en-US").input(),
            ValueProp::Number(1.0),
            None,
        );
        assert_eq!(field.formatted(), "$1");
        field.set_value(ValueProp::Number(2.5));
        assert_eq!(field.formatted(), "$2.5");
        field.set_value(ValueProp::Cleared);
        assert_eq!(field.formatted(), "");
        assert!(field.is_controlled());
    }

    #[test]
    fn controlled_without_listener_still_echoes_locally() {
        let mut field = mount(
            FieldOptions::number()
                .locale("en-US")
                .input()
                .without_change_listener(),
            ValueProp::Number(5.0),
            None,
        );
        // Warns once, keeps working.
        assert!(field.handle_edit("6").is_some());
        assert!(field.handle_edit("7").is_some());
        assert_eq!(field.formatted(), "7");
    }
}
