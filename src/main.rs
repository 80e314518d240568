use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::{
    CmdMessage, ConfigAction, ItemDraft, ItemFilter, ItemPatch, MessageLevel, ShelfApi,
};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::index::DisplayItem;
use shelf::model::{Category, Status};
use shelf::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Warnings from the tolerated persistence paths land on stderr; `--verbose`
/// (or RUST_LOG) raises the level to watch loads and saves.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

struct AppContext {
    api: ShelfApi<FileStore>,
    config: ShelfConfig,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { query, category }) => handle_list(&ctx, query, category),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Add {
            name,
            sku,
            category,
            qty,
            price,
            location,
        }) => handle_add(
            &mut ctx,
            ItemDraft {
                name,
                sku,
                category,
                quantity: qty,
                price,
                location,
            },
        ),
        Some(Commands::Update {
            selector,
            name,
            sku,
            category,
            qty,
            price,
            location,
        }) => {
            let patch = ItemPatch {
                name,
                sku,
                category,
                quantity: qty,
                price,
                location,
            };
            handle_update(&mut ctx, selector, patch)
        }
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir();
    let config = ShelfConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());
    let api = ShelfApi::new(store, data_dir);
    Ok(AppContext { api, config })
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SHELF_DATA_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".shelf"))
}

fn handle_list(ctx: &AppContext, query: Option<String>, category: Option<Category>) -> Result<()> {
    let filter = ItemFilter {
        search: query,
        category,
    };
    let result = ctx.api.list_items(filter)?;

    print_items(&result.listed_items, &ctx.config);
    if let Some(total) = result.total_items {
        println!(
            "{}",
            format!("Showing {} of {} items", result.listed_items.len(), total).dimmed()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = result.stats {
        println!("{:<18} {}", "Total Items", stats.total_items);
        println!(
            "{:<18} {}{}",
            "Inventory Value",
            ctx.config.currency_symbol,
            format_money(stats.total_value)
        );
        println!(
            "{:<18} {}",
            "Low Stock",
            stats.low_stock_count.to_string().yellow()
        );
        println!(
            "{:<18} {}",
            "Out of Stock",
            stats.out_of_stock_count.to_string().red()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, mut draft: ItemDraft) -> Result<()> {
    draft.name = require_nonempty("name", draft.name)?;
    draft.sku = require_nonempty("sku", draft.sku)?;
    draft.location = require_nonempty("location", draft.location)?;

    let result = ctx.api.add_item(draft)?;
    print_messages(&result.messages);
    print_stats_line(&result, &ctx.config);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, selector: String, mut patch: ItemPatch) -> Result<()> {
    patch.name = patch.name.map(|v| require_nonempty("name", v)).transpose()?;
    patch.sku = patch.sku.map(|v| require_nonempty("sku", v)).transpose()?;
    patch.location = patch
        .location
        .map(|v| require_nonempty("location", v))
        .transpose()?;
    if patch.is_empty() {
        return Err(ShelfError::Api(
            "Nothing to update: pass at least one field flag".into(),
        ));
    }

    let result = ctx.api.update_item(&selector, patch)?;
    print_messages(&result.messages);
    print_stats_line(&result, &ctx.config);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    let result = ctx.api.delete_items(&selectors, yes)?;
    print_messages(&result.messages);
    print_stats_line(&result, &ctx.config);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("currency"), None) => ConfigAction::ShowKey("currency".to_string()),
        (Some("currency"), Some(v)) => ConfigAction::SetCurrencySymbol(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("currency = {}", config.currency_symbol);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn require_nonempty(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShelfError::Api(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One dim summary line after a mutation, so the dashboard numbers are always
/// in sight without a separate `stats` call.
fn print_stats_line(result: &shelf::api::CmdResult, config: &ShelfConfig) {
    if let Some(stats) = result.stats {
        println!(
            "{}",
            format!(
                "{} items · value {}{} · {} low · {} out",
                stats.total_items,
                config.currency_symbol,
                format_money(stats.total_value),
                stats.low_stock_count,
                stats.out_of_stock_count
            )
            .dimmed()
        );
    }
}

const NAME_WIDTH: usize = 26;
const SKU_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 16;
const QTY_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 10;
const LOCATION_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 12;

fn print_items(items: &[DisplayItem], config: &ShelfConfig) {
    if items.is_empty() {
        println!("No items match your search.");
        return;
    }

    for di in items {
        let idx_str = format!("{:>3}. ", di.position);

        let name = pad_to_width(&di.item.name, NAME_WIDTH);
        let sku = pad_to_width(&di.item.sku, SKU_WIDTH);
        let category = pad_to_width(di.item.category.label(), CATEGORY_WIDTH);
        let qty = format!("{:>width$}", di.item.quantity, width = QTY_WIDTH);
        let price = format!(
            "{:>width$}",
            format!("{}{}", config.currency_symbol, format_money(di.item.price)),
            width = PRICE_WIDTH
        );
        let location = pad_to_width(&di.item.location, LOCATION_WIDTH);
        let status_text = pad_to_width(di.item.status.label(), STATUS_WIDTH);
        let status = match di.item.status {
            Status::InStock => status_text.green(),
            Status::LowStock => status_text.yellow(),
            Status::OutOfStock => status_text.red(),
        };
        let updated = format_time_ago(di.item.last_updated).dimmed();

        println!(
            "{}{}  {}  {}  {}  {}  {}  {}  {}",
            idx_str.normal(),
            name,
            sku.dimmed(),
            category,
            qty,
            price,
            location,
            status,
            updated
        );
    }
}

/// Truncate to `width` (with an ellipsis) or pad with spaces, display-width
/// aware so wide characters line up.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// Two decimals, thousands separated: 8536.43 -> "8,536.43".
fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = whole.strip_prefix('-').map_or(("", whole), |d| ("-", d));

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}.{}", sign, grouped, cents)
}

fn format_time_ago(date: chrono::NaiveDate) -> String {
    let days = (Utc::now().date_naive() - date).num_days().max(0);
    if days == 0 {
        return "today".to_string();
    }
    let formatter = timeago::Formatter::new();
    formatter.convert(std::time::Duration::from_secs(days as u64 * 86_400))
}
