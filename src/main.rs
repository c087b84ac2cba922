//! cardoc — build a car configuration and write it out as a report.
//!
//! With no flags it builds the reference V6 configuration and saves it as
//! `car_report.html`. Every part of the car, the format and the output path
//! can be overridden:
//!
//! `cardoc --engine V8 --transmission manual --safety ABS -f pdf -o car.pdf`

use anyhow::{Context, Result};
use cardoc::{report, CarBuilder, DocumentFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cardoc",
    about = "Build a car configuration and render it as a PDF, Word or HTML report"
)]
struct Cli {
    /// Engine description, stored verbatim
    #[arg(long, default_value = "V6")]
    engine: String,

    /// Transmission: manual or automatic (exact spelling)
    #[arg(long, default_value = "automatic")]
    transmission: String,

    /// Interior feature (repeatable)
    #[arg(long = "interior", default_values = ["Leather Seats", "GPS Navigation"])]
    interior: Vec<String>,

    /// Exterior feature (repeatable)
    #[arg(long = "exterior", default_values = ["Blue Color", "Alloy Wheels"])]
    exterior: Vec<String>,

    /// Safety feature (repeatable)
    #[arg(long = "safety", default_values = ["ABS", "Rear Camera"])]
    safety: Vec<String>,

    /// Output format: pdf, word or html (case-insensitive)
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Output file. Defaults to car_report.<ext> for the chosen format.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the preview without writing a file
    #[arg(long, conflicts_with = "output")]
    no_save: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A bad -f fails before anything is printed or written
    let format: DocumentFormat = cli.format.parse()?;

    let mut builder = CarBuilder::new();
    builder.engine(&cli.engine).transmission(&cli.transmission)?;
    for feature in &cli.interior {
        builder.interior(feature);
    }
    for feature in &cli.exterior {
        builder.exterior(feature);
    }
    for feature in &cli.safety {
        builder.safety(feature);
    }
    let car = builder.build()?;

    println!("Car Built Successfully:\n");
    println!("{}", car);

    let output = if cli.no_save {
        None
    } else {
        Some(
            cli.output
                .unwrap_or_else(|| PathBuf::from(format!("car_report.{}", format.file_extension()))),
        )
    };

    let document = report::create_car_document(&car, &cli.format, output.as_deref())
        .context("failed to create car report")?;

    println!("\nDocument Preview:\n");
    println!("{}", document.display());

    if let Some(path) = output {
        println!("\n{} file saved as: {}", format, path.display());
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
