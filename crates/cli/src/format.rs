//! Result → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): numbered and quoted, e.g. `1) "선반"`, `(empty set)`
//! - **JSON** (`--json`): one compact object per title, pretty objects otherwise
//! - **Raw** (`--raw`): bare values, one per line

use keyword_core::Error;
use keyword_store::ExtractStats;
use keyword_tokenizer::KeywordSet;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format the keyword set of one title.
///
/// JSON output stays on a single line so that pipe mode emits JSON Lines.
pub fn format_keywords(title: &str, keywords: &KeywordSet, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string(&serde_json::json!({
            "title": title,
            "keywords": keywords,
        }))
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Raw => keywords
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            let mut lines = vec![format!("(title) {}", title)];
            if keywords.is_empty() {
                lines.push("(empty set)".to_string());
            } else {
                lines.extend(
                    keywords
                        .iter()
                        .enumerate()
                        .map(|(i, k)| format!("{}) \"{}\"", i + 1, k)),
                );
            }
            lines.join("\n")
        }
    }
}

/// Format a title echoed by `extract --dry-run`.
pub fn format_title(title: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            serde_json::to_string(title).unwrap_or_else(|_| format!("\"{}\"", title))
        }
        OutputMode::Raw | OutputMode::Human => title.to_string(),
    }
}

/// Format the outcome of an `extract` run.
pub fn format_extract_summary(
    stats: &ExtractStats,
    skipped_rows: u64,
    new_keywords: usize,
    stored_keywords: usize,
    mode: OutputMode,
) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "titles": stats.titles,
            "rejected": stats.rejected,
            "skipped_rows": skipped_rows,
            "keywords": stats.keywords,
            "new_keywords": new_keywords,
            "stored_keywords": stored_keywords,
        }))
        .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Raw => format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            stats.titles, stats.rejected, skipped_rows, stats.keywords, new_keywords, stored_keywords
        ),
        OutputMode::Human => format!(
            "(titles) {}\n(rejected) {}\n(skipped rows) {}\n(keywords) {}\n(new keywords) {}\n(stored keywords) {}",
            stats.titles, stats.rejected, skipped_rows, stats.keywords, new_keywords, stored_keywords
        ),
    }
}

/// Format store entries for `export --json`.
pub fn format_entries_json(entries: &[(String, u64)]) -> String {
    let rows: Vec<serde_json::Value> = entries
        .iter()
        .map(|(keyword, count)| serde_json::json!({ "keyword": keyword, "count": count }))
        .collect();
    serde_json::to_string_pretty(&rows).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}
