//! Doctor - backend diagnostics
//!
//! Reports which counting backend is bound for this process and why. Display
//! only; selection itself happens in the probe and is never affected here.

use colored::Colorize;

use crate::backends::{self, Backend};

/// Status of one counting backend
#[derive(Debug, Clone)]
pub struct BackendStatus {
    pub name: &'static str,
    pub available: bool,
    pub active: bool,
    pub notes: Option<String>,
}

impl BackendStatus {
    pub fn render_line(&self, color: bool) -> String {
        let mark = if self.available { "✓" } else { "✗" };
        let mark = if !color {
            mark.to_string()
        } else if self.available {
            mark.green().to_string()
        } else {
            mark.red().to_string()
        };

        let active = if self.active { " (active)" } else { "" };
        let notes = self
            .notes
            .as_deref()
            .map(|n| format!(" - {}", n))
            .unwrap_or_default();

        format!("{} {}{}{}", mark, self.name, active, notes)
    }
}

/// Check both backends and report their status
pub fn check_backends() -> Vec<BackendStatus> {
    let accelerated_notes = if !cfg!(feature = "parallel") {
        "not compiled in (enable the `parallel` feature)".to_string()
    } else if let Some(threads) = backends::accelerated_threads() {
        format!("rayon pool with {} worker threads", threads)
    } else {
        "thread pool could not be created".to_string()
    };

    vec![
        BackendStatus {
            name: "accelerated",
            available: backends::accelerated_available(),
            active: backends::is_accelerated(),
            notes: Some(accelerated_notes),
        },
        BackendStatus {
            name: "fallback",
            available: true,
            active: backends::active() == Backend::Fallback,
            notes: Some("serial counting, always available".to_string()),
        },
    ]
}
