use clap::{Parser, Subcommand};

use crate::optimizer::constants::DEFAULT_MAX_RATIO;

/// SmartGrocer — finds cheaper, nutritionally equivalent grocery swaps.
#[derive(Parser, Debug)]
#[command(name = "smart_grocer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file; the builtin tables are used if omitted.
    #[arg(short, long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the current price of an ingredient.
    Price { name: String },

    /// List cheaper, nutritionally equivalent substitutes for an ingredient.
    Swaps {
        name: String,

        /// Maximum substitute/original price ratio.
        #[arg(long, default_value_t = DEFAULT_MAX_RATIO)]
        max_ratio: f64,
    },

    /// Analyze a grocery list and recommend money-saving swaps.
    Analyze {
        /// Items to analyze; prompts interactively when empty.
        items: Vec<String>,

        /// Dietary goal label, e.g. weight_loss or muscle_gain.
        #[arg(long, default_value = "weight_loss")]
        goal: String,
    },

    /// Rewrite a grocery list with cheaper substitutes applied.
    Optimize {
        /// Items to optimize; prompts interactively when empty.
        items: Vec<String>,

        /// Swap whenever any cheaper candidate exists, ignoring the
        /// savings floor.
        #[arg(long)]
        aggressive: bool,
    },

    /// Scan for price rises versus a baseline history file.
    Alerts {
        /// JSON file mapping ingredient names to baseline prices.
        #[arg(long)]
        history: String,
    },

    /// Import refreshed prices from a CSV file into the catalog.
    Import {
        /// CSV file with name,price,unit,source,last_updated columns.
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Analyze {
            items: Vec::new(),
            goal: "weight_loss".to_string(),
        }
    }
}
