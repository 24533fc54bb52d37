//! Output formatting for the CLI.

use console::style;
use stk_commerce::notice::{Notice, NoticeLevel};
use stk_commerce::search::{PageMarker, Pagination};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print queued shop notices as toasts.
    pub fn notices(&self, notices: &[Notice]) {
        for notice in notices {
            match notice.level {
                NoticeLevel::Success => self.success(&notice.message),
                NoticeLevel::Error => self.error(&notice.message),
                NoticeLevel::Info => self.info(&notice.message),
            }
        }
    }

    /// Print the page selector.
    pub fn pages(&self, pagination: &Pagination) {
        if self.json {
            return;
        }
        let window = pagination.page_window();
        if window.is_empty() {
            return;
        }
        println!("\n  {}", page_selector(&window, pagination.page));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Render page markers, highlighting the current page.
pub fn page_selector(window: &[PageMarker], current: usize) -> String {
    window
        .iter()
        .map(|marker| match marker {
            PageMarker::Page(n) if *n == current => style(format!("[{}]", n)).bold().to_string(),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => style("...").dim().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stock badge for a product.
pub fn stock_badge(in_stock: bool) -> String {
    if in_stock {
        style("In Stock").green().to_string()
    } else {
        style("Coming Soon").yellow().to_string()
    }
}

/// Truncate text to a column width, adding an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
