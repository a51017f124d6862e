//! Runs one rate computation against a recorded carrier response.
//!
//! ```text
//! correios-quote --fixture fixtures/sample_quote.json --pretty
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use correios_rates::application::dto::ShippingOptionRequest;
use correios_rates::application::services::CorreiosRateProvider;
use correios_rates::domain::entities::ServiceQuote;
use correios_rates::infrastructure::carrier::StaticQuoteRequestor;
use correios_rates::infrastructure::cart::StackedCartCalculator;
use correios_rates::infrastructure::measures::UnitTableMeasureService;
use correios_rates::infrastructure::origin::StaticOriginAddress;
use correios_rates::infrastructure::settings::CorreiosSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrimaryUnits {
    /// Centimeters and kilograms.
    Metric,
    /// Inches and pounds.
    Imperial,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "correios-quote")]
#[command(about = "Compute Correios shipping options from a recorded carrier response")]
struct Args {
    /// JSON fixture with the cart, origin and carrier response
    #[arg(short, long)]
    fixture: PathBuf,

    /// Settings file; CORREIOS__* variables override it
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Primary measure units of the cart
    #[arg(long, value_enum, default_value = "metric")]
    units: PrimaryUnits,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

/// Input recorded for one computation.
#[derive(Debug, Deserialize)]
struct Fixture {
    origin_postal_code: String,
    request: ShippingOptionRequest,
    /// `null` replays a carrier that returned nothing.
    carrier_response: Option<Vec<ServiceQuote>>,
}

fn init_logger(format: LogFormat, verbose: bool) {
    let default = if verbose { "correios_rates=debug,info" } else { "correios_rates=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_format, args.verbose);

    let settings = match &args.settings {
        Some(path) => CorreiosSettings::load_from(path),
        None => CorreiosSettings::load(),
    }
    .context("failed to load settings")?;

    let raw = std::fs::read_to_string(&args.fixture)
        .with_context(|| format!("failed to read fixture {}", args.fixture.display()))?;
    let fixture: Fixture = serde_json::from_str(&raw).context("invalid fixture")?;

    let measures = match args.units {
        PrimaryUnits::Metric => UnitTableMeasureService::metric_primary(),
        PrimaryUnits::Imperial => UnitTableMeasureService::imperial_primary(),
    };
    let requestor = match fixture.carrier_response {
        Some(quotes) => StaticQuoteRequestor::with_quotes(quotes),
        None => StaticQuoteRequestor::empty(),
    };

    let provider = CorreiosRateProvider::new(
        settings,
        Arc::new(measures),
        Arc::new(StackedCartCalculator::new()),
        Arc::new(StaticOriginAddress::postal_code(fixture.origin_postal_code)),
        Arc::new(requestor),
    );

    let response = provider.get_shipping_options(&fixture.request).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{output}");

    Ok(())
}
