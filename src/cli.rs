/*!
easing-gradients Command Line Interface

Generates eased `linear-gradient` stop lists and rewrites stylesheets that use
easing gradient functions.
*/

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easing_gradients::curve::SUPPORTED_GRADIENTS;
use easing_gradients::{color_stops, rewrite_css, sample, EasingCurve, GradientOptions, VERSION};

#[derive(Parser)]
#[command(name = "easing-gradients")]
#[command(about = "Approximate easing curves with linear-gradient color stops")]
#[command(version = VERSION)]
pub struct Cli {
    /// JSON file with `precision` and `alphaDecimals` settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Minimum distance between consecutive curve samples
    #[arg(long, global = true)]
    precision: Option<f64>,

    /// Decimal places kept in generated alpha values
    #[arg(long, global = true)]
    alpha_decimals: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the color stop list for two colors
    Stops {
        /// Start color (any CSS notation or `transparent`)
        start: String,

        /// End color (any CSS notation or `transparent`)
        end: String,

        /// Easing curve name
        #[arg(long, default_value = "ease-in-out-sine-gradient")]
        curve: String,
    },

    /// Print the sampled coordinates of a curve
    Coords {
        /// Easing curve name
        #[arg(long, default_value = "ease-in-out-sine-gradient")]
        curve: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Rewrite easing gradient calls in a stylesheet
    Rewrite {
        /// CSS file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Output file path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List supported gradient function names
    Curves,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Defaults, overlaid by the config file, overlaid by explicit flags
    fn options(&self) -> anyhow::Result<GradientOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => GradientOptions::default(),
        };

        if let Some(precision) = self.precision {
            options.precision = precision;
        }
        if let Some(alpha_decimals) = self.alpha_decimals {
            options.alpha_decimals = alpha_decimals;
        }
        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "easing_gradients=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let options = cli.options()?;
    tracing::debug!(?options, "resolved options");

    match &cli.command {
        Commands::Stops { start, end, curve } => {
            let curve: EasingCurve = curve.parse()?;
            let stops = color_stops([start.as_str(), end.as_str()], curve, &options)?;
            let list = stops
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("{}", list);
        }

        Commands::Coords { curve, format } => {
            let curve: EasingCurve = curve.parse()?;
            let coordinates = sample(curve, options.precision)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&coordinates)?),
                OutputFormat::Text => {
                    for coordinate in &coordinates {
                        println!("{}\t{}", coordinate.amount, coordinate.position);
                    }
                }
            }
        }

        Commands::Rewrite { file, output } => {
            let source = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read stdin")?;
                    buffer
                }
            };

            let rewritten = rewrite_css(&source, &options)?;
            match output {
                Some(path) => std::fs::write(path, rewritten)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", rewritten),
            }
        }

        Commands::Curves => {
            for name in SUPPORTED_GRADIENTS {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
