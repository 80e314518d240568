use clap::{Parser, Subcommand};
use shelf::model::Category;

/// Returns the version string, with the commit hash appended for builds made
/// from a git checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{} ({})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version = get_version(),
    about = "Track warehouse inventory from the command line",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List items, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Search term matched against item names and SKUs
        query: Option<String>,

        /// Only show this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show the dashboard summary
    #[command(display_order = 2)]
    Stats,

    /// Add a new item
    #[command(alias = "a", display_order = 3)]
    Add {
        /// Item name
        #[arg(long)]
        name: String,

        /// Stock keeping unit
        #[arg(long)]
        sku: String,

        /// Category (e.g. electronics, office-supplies)
        #[arg(long)]
        category: Category,

        /// Units on hand
        #[arg(long, value_name = "QTY")]
        qty: u32,

        /// Unit price
        #[arg(long, value_parser = parse_price)]
        price: f64,

        /// Storage location (e.g. "Aisle 4, Bin 2")
        #[arg(long)]
        location: String,
    },

    /// Update fields on an existing item
    #[command(alias = "e", display_order = 4)]
    Update {
        /// Item to update: a position from `list` or a SKU
        selector: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long, value_name = "QTY")]
        qty: Option<u32>,

        #[arg(long, value_parser = parse_price)]
        price: Option<f64>,

        #[arg(long)]
        location: Option<String>,
    },

    /// Delete one or more items
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Items to delete: positions from `list` or SKUs
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the data directory
    #[command(display_order = 7)]
    Init,
}

fn parse_price(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }
    Ok(value)
}
