//! Tonematch - skin tone color matching and recommendations
//!
//! Command-line interface for matching colors against the Monk skin tone
//! reference scale, printing curated color recommendations, and querying
//! product catalogs. The REST API lives in the `tonematch-web` binary.

use clap::{Parser, Subcommand};

use tonematch::cli::{ColorsArgs, MatchArgs, ProductsArgs};

/// Tonematch - skin tone color matching and recommendations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Match a color against the Monk skin tone reference scale
    Match(MatchArgs),
    /// Show color recommendations for a skin tone color
    Colors(ColorsArgs),
    /// Query a product catalog file for makeup products
    Products(ProductsArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Match(args) => args.execute(),
        Commands::Colors(args) => args.execute(),
        Commands::Products(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code() as i32);
    }
}
