//! Renderer module
//!
//! Renders a `TextStats` value to the supported export formats: json, csv,
//! html, markdown, txt. Pure formatting; writing the output anywhere is the
//! caller's job.

use std::path::Path;

use crate::core::model::{TextStats, WdError};

/// Tool name stamped into export metadata
const TOOL_NAME: &str = "wdc";

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Txt,
    Json,
    Csv,
    Html,
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = WdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "html" | "htm" => Ok(ExportFormat::Html),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            _ => Err(WdError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "md",
        };
        write!(f, "{}", name)
    }
}

impl ExportFormat {
    /// Infer the format from a file extension, if recognized
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: ExportFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: ExportFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for statistics results
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: ExportFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a statistics result to a string
    pub fn render(&self, stats: &TextStats) -> String {
        match self.config.format {
            ExportFormat::Json => self.render_json(stats),
            ExportFormat::Csv => render_csv(stats),
            ExportFormat::Html => render_html(stats),
            ExportFormat::Markdown => render_markdown(stats),
            ExportFormat::Txt => render_txt(stats),
        }
    }

    /// Render as a JSON envelope: metadata plus the full statistics object
    fn render_json(&self, stats: &TextStats) -> String {
        let envelope = serde_json::json!({
            "metadata": {
                "exported_at": chrono::Local::now().to_rfc3339(),
                "tool": TOOL_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            },
            "statistics": stats,
        });

        if self.config.pretty {
            serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&envelope).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

/// How float scalars are rendered per format
///
/// CSV must round-trip into the same scalar values, so it gets the full
/// shortest-round-trip Display form; the human-facing formats round to two
/// decimals.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FloatStyle {
    Exact,
    Rounded,
}

impl FloatStyle {
    fn render(self, value: f64) -> String {
        match self {
            FloatStyle::Exact => value.to_string(),
            FloatStyle::Rounded => format!("{:.2}", value),
        }
    }
}

/// Scalar fields in the order every format reports them
fn scalar_rows(stats: &TextStats, floats: FloatStyle) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("words", stats.words.to_string()),
        ("characters", stats.characters.to_string()),
        ("characters_no_spaces", stats.characters_no_spaces.to_string()),
        ("sentences", stats.sentences.to_string()),
        ("paragraphs", stats.paragraphs.to_string()),
        ("unique_words", stats.unique_words.to_string()),
        ("avg_word_length", floats.render(stats.avg_word_length)),
        (
            "reading_time_seconds",
            stats.reading_time_seconds.to_string(),
        ),
    ];
    if let Some(score) = stats.flesch_reading_ease {
        rows.push(("flesch_reading_ease", floats.render(score)));
    }
    rows
}

/// Frequency entries sorted by (count desc, word asc) for stable output
fn sorted_frequency(stats: &TextStats) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = stats
        .word_frequency
        .iter()
        .map(|(w, c)| (w.as_str(), *c))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn render_csv(stats: &TextStats) -> String {
    let mut out = String::from("category,metric,value\n");

    for (metric, value) in scalar_rows(stats, FloatStyle::Exact) {
        out.push_str(&format!("summary,{},{}\n", metric, csv_escape(&value)));
    }

    for (word, count) in sorted_frequency(stats) {
        out.push_str(&format!("frequency,{},{}\n", csv_escape(word), count));
    }

    out
}

/// Minimal HTML escaping for text nodes
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_html(stats: &TextStats) -> String {
    let mut body = String::new();

    for (metric, value) in scalar_rows(stats, FloatStyle::Rounded) {
        body.push_str(&format!(
            "        <div class=\"stat\"><strong>{}:</strong> <span class=\"highlight\">{}</span></div>\n",
            metric,
            html_escape(&value)
        ));
    }

    let mut freq_rows = String::new();
    for (word, count) in sorted_frequency(stats) {
        freq_rows.push_str(&format!(
            "            <tr><td>{}</td><td>{}</td></tr>\n",
            html_escape(word),
            count
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>wdc - Statistics</title>
    <style>
        body {{ font-family: 'Consolas', monospace; background: #0a0a0a; color: #00ff00; margin: 40px; }}
        .container {{ max-width: 800px; margin: 0 auto; border: 1px solid #333; padding: 20px; background: #111; }}
        h1 {{ color: #00ff00; border-bottom: 2px solid #333; padding-bottom: 10px; }}
        .stat {{ margin: 10px 0; padding: 10px; background: #1a1a1a; border-left: 3px solid #00aa00; }}
        .highlight {{ color: #00ffff; font-weight: bold; }}
        table {{ border-collapse: collapse; margin-top: 10px; }}
        td, th {{ border: 1px solid #333; padding: 4px 12px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>wdc - Analysis Report</h1>
        <p>Generated: {generated}</p>
{body}        <h2>Word Frequency</h2>
        <table>
            <tr><th>word</th><th>count</th></tr>
{freq_rows}        </table>
        <p><em>Report generated by wdc v{version}</em></p>
    </div>
</body>
</html>
"#,
        generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        body = body,
        freq_rows = freq_rows,
        version = env!("CARGO_PKG_VERSION"),
    )
}

fn render_markdown(stats: &TextStats) -> String {
    let mut out = String::new();

    out.push_str("# wdc - Analysis Report\n\n");
    out.push_str(&format!(
        "*Generated: {}*\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("## Key Statistics\n\n");
    for (metric, value) in scalar_rows(stats, FloatStyle::Rounded) {
        out.push_str(&format!("- **{}**: `{}`\n", metric, value));
    }

    let frequency = sorted_frequency(stats);
    if !frequency.is_empty() {
        out.push_str("\n## Word Frequency\n\n");
        out.push_str("| word | count |\n|:---|---:|\n");
        for (word, count) in frequency {
            out.push_str(&format!("| {} | {} |\n", word.replace('|', "\\|"), count));
        }
    }

    out.push_str(&format!(
        "\n*--- Report generated by wdc v{} ---*\n",
        env!("CARGO_PKG_VERSION")
    ));
    out
}

fn render_txt(stats: &TextStats) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&rule);
    out.push_str("\nWDC - STATISTICS EXPORT\n");
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Export Date: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("STATISTICS:\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for (metric, value) in scalar_rows(stats, FloatStyle::Rounded) {
        out.push_str(&format!("{}: {}\n", metric, value));
    }

    let frequency = sorted_frequency(stats);
    if !frequency.is_empty() {
        out.push_str("\nWORD FREQUENCY:\n");
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for (word, count) in frequency {
            out.push_str(&format!("  {}: {}\n", word, count));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends;

    fn sample_stats() -> TextStats {
        backends::fallback::analyze("Cat, cat, CAT. A dog!")
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
    }

    #[test]
    fn test_unknown_format_is_unsupported() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, WdError::UnsupportedFormat(ref s) if s == "xml"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/stats.JSON")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("report.md")),
            Some(ExportFormat::Markdown)
        );
        assert_eq!(ExportFormat::from_path(Path::new("stats.xml")), None);
        assert_eq!(ExportFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_json_round_trips_scalars() {
        let stats = sample_stats();
        let renderer = Renderer::with_config(RenderConfig::with_pretty(ExportFormat::Json, true));
        let out = renderer.render(&stats);

        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        let parsed: TextStats = serde_json::from_value(v["statistics"].clone()).unwrap();
        assert_eq!(parsed, stats);
        assert_eq!(v["metadata"]["tool"], "wdc");
    }

    #[test]
    fn test_csv_has_summary_and_frequency_rows() {
        let out = render_csv(&sample_stats());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "category,metric,value");
        assert!(lines.contains(&"summary,words,5"));
        // frequency sorted by count desc, then word asc
        let freq: Vec<&str> = lines
            .iter()
            .filter(|l| l.starts_with("frequency,"))
            .copied()
            .collect();
        assert_eq!(freq, vec!["frequency,cat,3", "frequency,a,1", "frequency,dog,1"]);
    }

    #[test]
    fn test_csv_round_trips_scalars_exactly() {
        // a longer text so the floats carry a full fractional tail
        let stats = backends::fallback::analyze(
            "The quick brown fox jumps over the lazy dog. Pack my box with five dozen jugs!",
        );
        let out = render_csv(&stats);

        let scalars: std::collections::HashMap<&str, &str> = out
            .lines()
            .filter_map(|line| line.strip_prefix("summary,"))
            .filter_map(|row| row.split_once(','))
            .collect();

        assert_eq!(scalars["words"].parse::<usize>().unwrap(), stats.words);
        assert_eq!(
            scalars["characters"].parse::<usize>().unwrap(),
            stats.characters
        );
        assert_eq!(
            scalars["characters_no_spaces"].parse::<usize>().unwrap(),
            stats.characters_no_spaces
        );
        assert_eq!(
            scalars["sentences"].parse::<usize>().unwrap(),
            stats.sentences
        );
        assert_eq!(
            scalars["paragraphs"].parse::<usize>().unwrap(),
            stats.paragraphs
        );
        assert_eq!(
            scalars["unique_words"].parse::<usize>().unwrap(),
            stats.unique_words
        );
        assert_eq!(
            scalars["reading_time_seconds"].parse::<usize>().unwrap(),
            stats.reading_time_seconds
        );
        assert_eq!(
            scalars["avg_word_length"].parse::<f64>().unwrap(),
            stats.avg_word_length
        );
        assert_eq!(
            scalars["flesch_reading_ease"].parse::<f64>().unwrap(),
            stats.flesch_reading_ease.unwrap()
        );
    }

    #[test]
    fn test_csv_escapes_delimiters() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_html_escapes_words() {
        let mut stats = sample_stats();
        stats.word_frequency.insert("a<b".to_string(), 1);
        let out = render_html(&stats);
        assert!(out.contains("a&lt;b"));
        assert!(!out.contains("<b</td>"));
    }

    #[test]
    fn test_markdown_contains_frequency_table() {
        let out = render_markdown(&sample_stats());
        assert!(out.contains("| word | count |"));
        assert!(out.contains("| cat | 3 |"));
        assert!(out.contains("- **words**: `5`"));
    }

    #[test]
    fn test_txt_banner_layout() {
        let out = render_txt(&sample_stats());
        assert!(out.starts_with(&"=".repeat(60)));
        assert!(out.contains("words: 5"));
        assert!(out.contains("  cat: 3"));
    }
}
