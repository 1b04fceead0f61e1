// Modules are shared with the library target; not every public helper is
// reachable from the binary.
#![allow(dead_code)]

mod cli;
mod contrast;
mod docs;
mod error;
mod palette;
mod report;
mod types;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docs::{DocFormat, PaletteDocs};
use palette::Palette;
use report::AccessibilityReport;
use types::ContrastLevel;

#[derive(Parser)]
#[command(name = "paleta")]
#[command(version, about = "Design-system color palette analyzer and documentation generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate palette documentation files
    Generate {
        /// Output directory for generated files
        #[arg(long, default_value = "./docs")]
        output: PathBuf,

        /// Which document format(s) to write
        #[arg(long, value_enum, default_value = "all")]
        format: OutputFormat,
    },

    /// Run the WCAG contrast audit and print the results
    Check,

    /// List the palette colors grouped by category
    List,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Markdown, JSON, and CSS
    All,
    /// Markdown style-guide page
    Markdown,
    /// JSON document with metadata
    Json,
    /// CSS custom-property block
    Css,
}

impl OutputFormat {
    fn doc_formats(self) -> Vec<DocFormat> {
        match self {
            OutputFormat::All => DocFormat::all().to_vec(),
            OutputFormat::Markdown => vec![DocFormat::Markdown],
            OutputFormat::Json => vec![DocFormat::Json],
            OutputFormat::Css => vec![DocFormat::Css],
        }
    }
}

/// Display the audit table with level-based styling
fn display_report(report: &AccessibilityReport) {
    println!();
    println!("{}", "🎨 WCAG Contrast Audit".bright_cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    for entry in &report.entries {
        let line = cli::report_entry_line(entry);
        match entry.contrast.level {
            ContrastLevel::Fail => println!("  {}", line.bright_red()),
            ContrastLevel::AaLarge => println!("  {}", line.yellow()),
            _ => println!("  {}", line.green()),
        }
    }

    println!("{}", "─".repeat(60).dimmed());
    println!("  {}", cli::report_summary_line(&report.summary).bold());

    if !report.summary.warnings.is_empty() {
        println!();
        println!("{}", "⚠️  Warnings".yellow().bold());
        for warning in &report.summary.warnings {
            println!("  - {}", warning.yellow());
        }
    }
    println!();
}

fn cmd_generate(output: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    println!(
        "{}",
        "🎨 Generating palette documentation...".bright_cyan().bold()
    );
    println!();

    let palette = Palette::standard()?;
    let docs = PaletteDocs::new(&palette)?;

    for doc_format in format.doc_formats() {
        let path = docs.save(&output, doc_format)?;
        println!("  {} {}", "✓".bright_green(), path.display());
    }

    println!();
    println!("{}", cli::palette_summary(&palette).bold());
    Ok(())
}

fn cmd_check() -> anyhow::Result<()> {
    let palette = Palette::standard()?;
    let report = AccessibilityReport::generate(&palette)?;
    display_report(&report);

    if report.summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    let palette = Palette::standard()?;

    println!();
    for category in types::ColorCategory::all() {
        println!("{}", format!("{}", category).bright_cyan().bold());
        for color in palette.by_category(category) {
            let swatch = "██".truecolor(color.rgb.r, color.rgb.g, color.rgb.b);
            println!(
                "  {} {:14} {:9} {}",
                swatch,
                color.name,
                color.hex,
                color.variable.dimmed()
            );
        }
        println!();
    }
    println!("{}", cli::palette_summary(&palette).bold());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Paleta v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate { output, format } => {
            info!("Generating documentation into {:?}", output);
            cmd_generate(output, format)?;
        }
        Commands::Check => {
            info!("Running contrast audit");
            cmd_check()?;
        }
        Commands::List => {
            info!("Listing palette");
            cmd_list()?;
        }
    }

    Ok(())
}
