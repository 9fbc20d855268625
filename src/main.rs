use clap::Parser;
use std::process::ExitCode;

use numfield::field::{FieldOptions, IdSource, NumberField, ValueProp};
use numfield::intl::{CurrencyCode, CurrencyDisplay, UnitDisplay};
use numfield::rules::{self, RulesCache};

#[derive(Parser)]
#[command(name = "numfield", version, about = "Locale-aware number formatting inspector")]
struct Cli {
    /// Value to format
    value: Option<f64>,

    /// BCP 47 locale tag (defaults to the host locale)
    #[arg(short, long)]
    locale: Option<String>,

    /// Format as a currency with this ISO 4217 code
    #[arg(long)]
    currency: Option<String>,

    /// Currency display: symbol, narrow-symbol, code, or name
    #[arg(long, default_value = "symbol")]
    currency_display: String,

    /// Format with this measurement unit
    #[arg(long)]
    unit: Option<String>,

    /// Unit display: short, narrow, or long
    #[arg(long, default_value = "short")]
    unit_display: String,

    /// Treat the value as a 0-1 fraction and format as a percentage
    #[arg(long)]
    percent: bool,

    /// Precision for percent values held as scaled integers
    #[arg(long)]
    precision: Option<u32>,

    /// Maximum fraction digits to display
    #[arg(long)]
    decimal_scale: Option<u32>,

    /// Print the derived separator/grouping metadata for the locale
    #[arg(long)]
    probe: bool,
}

fn parse_currency_display(s: &str) -> Result<CurrencyDisplay, String> {
    match s {
        "symbol" => Ok(CurrencyDisplay::Symbol),
        "narrow-symbol" => Ok(CurrencyDisplay::NarrowSymbol),
        "code" => Ok(CurrencyDisplay::Code),
        "name" => Ok(CurrencyDisplay::Name),
        other => Err(format!("unknown currency display `{other}`")),
    }
}

fn parse_unit_display(s: &str) -> Result<UnitDisplay, String> {
    match s {
        "short" => Ok(UnitDisplay::Short),
        "narrow" => Ok(UnitDisplay::Narrow),
        "long" => Ok(UnitDisplay::Long),
        other => Err(format!("unknown unit display `{other}`")),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let locale = cli.locale.as_deref();

    if cli.probe {
        let meta = rules::metadata(locale);
        println!("thousands separator: {:?}", meta.thousands_separator);
        println!("decimal separator:   {:?}", meta.decimal_separator);
        println!("grouping style:      {:?}", meta.grouping_style);
        if cli.value.is_none() {
            return Ok(());
        }
    }

    let Some(value) = cli.value else {
        return Err("no value given (pass a number, or --probe with --locale)".to_string());
    };

    let mut options = if let Some(code) = &cli.currency {
        let code = CurrencyCode::parse(code)
            .ok_or_else(|| format!("`{code}` is not a well-formed currency code"))?;
        FieldOptions::currency(code).currency_display(parse_currency_display(&cli.currency_display)?)
    } else if let Some(unit) = &cli.unit {
        FieldOptions::unit(unit.clone(), parse_unit_display(&cli.unit_display)?)
    } else if cli.percent {
        FieldOptions::percent(cli.precision)
    } else {
        FieldOptions::number()
    };
    if let Some(tag) = &cli.locale {
        options = options.locale(tag.clone());
    }
    if let Some(scale) = cli.decimal_scale {
        options = options.decimal_scale(scale);
    }

    let mut ids = IdSource::new();
    let mut cache = RulesCache::new();
    let field = NumberField::mount(options, ValueProp::Number(value), None, &mut ids, &mut cache);
    println!("{}", field.formatted());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("numfield: {message}");
            ExitCode::from(1)
        }
    }
}
