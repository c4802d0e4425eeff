//! Color matching and recommendation commands.

use crate::cli::common::{CliError, CliResult};
use crate::matcher::{self, Context, Tier};
use crate::models::Swatch;
use clap::Args;
use serde::Serialize;

/// Match a color against the Monk skin tone reference scale
#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    /// Color to match, in #RRGGBB format
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct MatchResult {
    input: String,
    monk_index: u8,
    monk_hex: &'static str,
    tier: Tier,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self) -> CliResult<()> {
        let monk_index = matcher::nearest_reference_index(&self.color)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let tier = Tier::for_index(monk_index);
        let monk_hex = matcher::MONK_SCALE[usize::from(monk_index) - 1].hex;

        let result = MatchResult {
            input: self.color.clone(),
            monk_index,
            monk_hex,
            tier,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Input:      {}", result.input);
            println!("Monk tone:  {} ({})", result.monk_index, result.monk_hex);
            println!("Tier:       {}", result.tier);
        }

        Ok(())
    }
}

/// Show color recommendations for a skin tone color
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Color to match, in #RRGGBB format
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Recommendation context ("general" or "outfit")
    #[arg(short, long, default_value = "general")]
    pub context: String,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorsResult {
    input: String,
    monk_index: u8,
    tier: Tier,
    context: Context,
    recommended: &'static [Swatch],
    avoid: &'static [Swatch],
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let context: Context = self.context.parse().map_err(CliError::validation)?;

        let monk_index = matcher::nearest_reference_index(&self.color)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let tier = Tier::for_index(monk_index);
        let bundle = matcher::bundle_for(tier, context);

        let result = ColorsResult {
            input: self.color.clone(),
            monk_index,
            tier,
            context,
            recommended: bundle.recommended,
            avoid: bundle.avoid,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Input:     {}", result.input);
            println!("Monk tone: {} ({})", result.monk_index, result.tier);
            println!();
            println!("Recommended:");
            for swatch in result.recommended {
                println!("  {}  {}", swatch.color, swatch.name);
            }
            println!();
            println!("Avoid:");
            for swatch in result.avoid {
                println!("  {}  {}", swatch.color, swatch.name);
            }
        }

        Ok(())
    }
}
