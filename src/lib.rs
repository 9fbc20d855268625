//! Locale-aware numeric field formatting.
//!
//! `numfield` is the value layer of a numeric input component: it derives
//! formatting metadata from a locale ([`rules`]), converts between canonical
//! domain values and display text ([`codec`]), and reconciles controlled
//! values, edit buffers, and default-value fallbacks ([`field`]). The
//! locale-aware formatting primitive itself lives in [`intl`], built on
//! ICU4X.
//!
//! ```
//! use numfield::field::{FieldOptions, IdSource, NumberField, ValueProp};
//! use numfield::intl::CurrencyCode;
//! use numfield::rules::RulesCache;
//!
//! let mut ids = IdSource::new();
//! let mut cache = RulesCache::new();
//! let usd = CurrencyCode::parse("USD").unwrap();
//! let field = NumberField::mount(
//!     FieldOptions::currency(usd).locale("en-US"),
//!     ValueProp::Number(50000.0),
//!     None,
//!     &mut ids,
//!     &mut cache,
//! );
//! assert_eq!(field.formatted(), "$50,000");
//! ```

pub mod codec;
pub mod field;
pub mod intl;
pub mod rules;

pub use codec::{ParsedInput, RenderOptions};
pub use field::{BlurOutcome, EditEvent, FieldOptions, IdSource, NumberField, Source, ValueProp};
pub use intl::{CurrencyCode, CurrencyDisplay, FormatError, UnitDisplay};
pub use rules::{Affix, FormatMetadata, GroupingStyle, RulesCache};
