/// Console presentation of token records, watchlists, and trending tables
///
/// Renderers return `String`s so they can be tested; the `print_*` wrappers
/// write them to stdout. Nothing outside this module formats user output.
use crate::errors::ResolveError;
use crate::tokens::types::TokenRecord;
use chrono::Local;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use std::time::Duration;

const RULE_WIDTH: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 100;

// ============================================================================
// NUMBER FORMATTING
// ============================================================================

/// Price with precision scaled to magnitude
pub fn format_price(value: f64) -> String {
    if value < 0.000001 {
        format!("{:.2e}", value)
    } else if value < 0.01 {
        format!("{:.6}", value)
    } else if value < 1.0 {
        format!("{:.4}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Large amounts with B/M/K suffixes
pub fn format_large_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.2}K", value / 1e3)
    } else {
        format!("{:.2}", value)
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        let head: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

// ============================================================================
// TOKEN RECORD
// ============================================================================

pub fn render_token(record: &TokenRecord) -> String {
    let rule = "─".repeat(RULE_WIDTH).bright_black().to_string();
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(
        format!("📊 {} ({})", record.name, record.symbol)
            .green()
            .bold()
            .to_string(),
    );
    lines.push(rule.clone());
    lines.push(format!("{} {}", "Contract Address:".blue(), record.address.white()));
    lines.push(format!(
        "{} {}",
        "Price:".blue(),
        format!("${}", format_price(record.price_usd)).green()
    ));
    lines.push(format!(
        "{} {}",
        "Market Cap:".blue(),
        format!("${}", format_large_number(record.market_cap_usd)).yellow()
    ));
    lines.push(format!(
        "{} {}",
        "24h Volume:".blue(),
        format!("${}", format_large_number(record.volume_24h_usd)).cyan()
    ));
    lines.push(format!(
        "{} {}",
        "Holders:".blue(),
        record.holder_count.to_string().magenta()
    ));

    if !record.description.is_empty() {
        lines.push(format!(
            "{} {}",
            "Description:".blue(),
            truncate_description(&record.description).bright_black()
        ));
    }

    let mut socials = Vec::new();
    if record.website.is_some() {
        socials.push("🌐 Website");
    }
    if record.twitter.is_some() {
        socials.push("🐦 Twitter");
    }
    if record.telegram.is_some() {
        socials.push("💬 Telegram");
    }
    if !socials.is_empty() {
        lines.push(format!("{} {}", "Socials:".blue(), socials.join(" | ").blue()));
    }

    lines.push(format!(
        "{} {}",
        "Source:".blue(),
        record.source.as_str().bright_black()
    ));
    lines.push(rule);
    lines.push(
        format!("Last updated: {}", Local::now().format("%H:%M:%S"))
            .bright_black()
            .to_string(),
    );

    lines.join("\n")
}

pub fn print_token(record: &TokenRecord) {
    println!("{}\n", render_token(record));
}

/// Watch mode frame: clear screen, header, record
pub fn print_watch_frame(record: &TokenRecord, period: Duration) {
    print!("\x1B[2J\x1B[1;1H");
    println!(
        "{}",
        format!("🔄 Live Data (Updates every {}s)", period.as_secs())
            .cyan()
            .bold()
    );
    println!("{}", "Press Ctrl+C to stop".bright_black());
    print_token(record);
}

pub fn print_watch_error(address: &str, error: &ResolveError) {
    eprintln!(
        "{}",
        format!("❌ Error fetching data for {}: {}", address, error).red()
    );
}

pub fn print_watch_stopped() {
    println!("{}", "\n👋 Stopped watching token".yellow());
}

// ============================================================================
// WATCHLIST
// ============================================================================

pub fn print_watchlist_empty() {
    println!("{}", "📝 Your watchlist is empty".yellow());
    println!(
        "{}",
        "Add tokens with: terkode watchlist --add <address>".bright_black()
    );
}

pub fn print_watchlist_header(count: usize) {
    println!(
        "{}",
        format!("\n👀 Your Watchlist ({} tokens)\n", count).green().bold()
    );
}

pub fn print_watchlist_added(address: &str, added: bool) {
    if added {
        println!("{}", format!("✓ Added {} to watchlist", address).green());
    } else {
        println!("{}", format!("• {} is already in your watchlist", address).bright_black());
    }
}

pub fn print_watchlist_removed(address: &str, removed: bool) {
    if removed {
        println!("{}", format!("✓ Removed {} from watchlist", address).yellow());
    } else {
        println!("{}", format!("• {} was not in your watchlist", address).bright_black());
    }
}

// ============================================================================
// TRENDING
// ============================================================================

pub fn render_trending_table(records: &[TokenRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header([
        "#",
        "Name",
        "Symbol",
        "Price",
        "Market Cap",
        "24h Volume",
        "Source",
    ]);

    for (index, record) in records.iter().enumerate() {
        table.add_row([
            (index + 1).to_string(),
            record.name.clone(),
            record.symbol.clone(),
            format!("${}", format_price(record.price_usd)),
            format!("${}", format_large_number(record.market_cap_usd)),
            format!("${}", format_large_number(record.volume_24h_usd)),
            record.source.to_string(),
        ]);
    }

    table.to_string()
}

pub fn print_trending(records: &[TokenRecord]) {
    if records.is_empty() {
        println!("{}", "No trending tokens available right now".yellow());
        return;
    }

    println!("{}", "\n🔥 Trending Solana Tokens\n".green().bold());
    println!("{}", render_trending_table(records));
}

// ============================================================================
// MISC
// ============================================================================

pub fn print_banner() {
    println!("{}", "TERKODE".green().bold());
    println!(
        "{}",
        "> The terminal memecoin tracker that speaks your language\n".bright_black()
    );
}

pub fn print_search_stub(query: &str) {
    println!("{}", format!("🔍 Searching for: {}", query).blue());
    println!("{}", "Search functionality coming soon...".bright_black());
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::types::ProviderId;

    fn record() -> TokenRecord {
        TokenRecord {
            name: "Popcat".to_string(),
            symbol: "POPCAT".to_string(),
            address: "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr".to_string(),
            price_usd: 0.5123,
            market_cap_usd: 502_000_000.0,
            volume_24h_usd: 1_234_567.0,
            holder_count: 98765,
            description: "x".repeat(150),
            website: Some("https://popcat.example".to_string()),
            twitter: None,
            telegram: Some("https://t.me/popcat".to_string()),
            source: ProviderId::DexScreener,
        }
    }

    #[test]
    fn test_format_price_ranges() {
        assert_eq!(format_price(0.0), "0.00e0");
        assert_eq!(format_price(0.0000001234), "1.23e-7");
        assert_eq!(format_price(0.001234), "0.001234");
        assert_eq!(format_price(0.5123), "0.5123");
        assert_eq!(format_price(42.0), "42.00");
    }

    #[test]
    fn test_format_large_number_suffixes() {
        assert_eq!(format_large_number(999.0), "999.00");
        assert_eq!(format_large_number(1_500.0), "1.50K");
        assert_eq!(format_large_number(2_340_000.0), "2.34M");
        assert_eq!(format_large_number(7_000_000_000.0), "7.00B");
    }

    #[test]
    fn test_render_token_contains_fields() {
        let output = render_token(&record());

        assert!(output.contains("Popcat (POPCAT)"));
        assert!(output.contains("$0.5123"));
        assert!(output.contains("$502.00M"));
        assert!(output.contains("$1.23M"));
        assert!(output.contains("98765"));
        assert!(output.contains("🌐 Website | 💬 Telegram"));
        assert!(!output.contains("Twitter"));
        assert!(output.contains(&format!("{}...", "x".repeat(100))));
        assert!(!output.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_short_description_is_not_marked_truncated() {
        assert_eq!(truncate_description("short"), "short");
    }

    #[test]
    fn test_trending_table_lists_rows_in_order() {
        let mut second = record();
        second.name = "Bonk".to_string();
        let table = render_trending_table(&[record(), second]);

        let popcat = table.find("Popcat").unwrap();
        let bonk = table.find("Bonk").unwrap();
        assert!(popcat < bonk);
        assert!(table.contains("Market Cap"));
    }
}
