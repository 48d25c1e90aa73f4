//! Colorful console output for search events.
//!
//! Provides a `tracing` layer that formats `loadforge_solver` events with
//! colors. Initialized by [`search`](crate::search) when the `console`
//! feature is enabled.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const SOLVER_TARGET: &str = "loadforge_solver";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "loadforge_solver=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    target_class: Option<String>,
    slot_counts: Option<String>,
    combinations: Option<String>,
    empty_slot: Option<String>,
    best_score: Option<String>,
    max_results: Option<u64>,
    results: Option<u64>,
    nodes_expanded: Option<u64>,
    builds_evaluated: Option<u64>,
    branches_pruned: Option<u64>,
    duration_ms: Option<u64>,
    terminated_early: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "target_class" => self.target_class = Some(value),
            "slot_counts" => self.slot_counts = Some(value),
            "combinations" => self.combinations = Some(value),
            "empty_slot" => self.empty_slot = Some(value),
            "best_score" => self.best_score = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "max_results" => self.max_results = Some(value),
            "results" => self.results = Some(value),
            "nodes_expanded" => self.nodes_expanded = Some(value),
            "builds_evaluated" => self.builds_evaluated = Some(value),
            "branches_pruned" => self.branches_pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "terminated_early" {
            self.terminated_early = Some(value);
        }
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_infeasible" => format_search_infeasible(v),
        "search_end" => format_search_end(v),
        _ => String::new(),
    }
}

fn format_search_start(v: &EventVisitor) -> String {
    let target_class = v.target_class.as_deref().unwrap_or("Unknown");
    let slot_counts = v.slot_counts.as_deref().unwrap_or("[]");
    let combinations = v.combinations.as_deref().unwrap_or("0");

    format!(
        "{} {} {} {} candidates per slot ({}), search space ({}), keeping ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        target_class.white().bold(),
        slot_counts.bright_yellow(),
        format_search_space(combinations).bright_magenta(),
        v.max_results.unwrap_or(0).to_string().yellow()
    )
}

fn format_search_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} {} no candidates for slot ({})",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        "[Search]".bright_cyan(),
        v.empty_slot.as_deref().unwrap_or("?").bright_red()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let results = v.results.unwrap_or(0);
    let best_score = v.best_score.as_deref().unwrap_or("none");

    let mut output = format!(
        "{} {} {} Search ended: time spent ({}), builds ({}), best score ({}), nodes ({}), pruned ({}), scored ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        results.to_string().white().bold(),
        format_score(best_score),
        v.nodes_expanded
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        v.branches_pruned.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.builds_evaluated.unwrap_or(0).to_formatted_string(&Locale::en).white()
    );

    if v.terminated_early == Some(true) {
        output.push_str(&format!(" {}", "terminated early".bright_yellow()));
    }
    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: &str) -> String {
    match score.parse::<i64>() {
        Ok(n) if n < 0 => score.bright_red().to_string(),
        Ok(n) if n > 0 => score.bright_green().to_string(),
        _ => score.white().to_string(),
    }
}

/// Formats a combination count, switching to scientific notation past
/// a million.
fn format_search_space(combinations: &str) -> String {
    match combinations.parse::<u128>() {
        Ok(n) if n < 1_000_000 => (n as u64).to_formatted_string(&Locale::en),
        Ok(n) => {
            let log_scale = (n as f64).log10();
            let exponent = log_scale.floor() as i32;
            let mantissa = 10f64.powf(log_scale - exponent as f64);
            format!("{:.3} x 10^{}", mantissa, exponent)
        }
        Err(_) => combinations.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_search_space() {
        assert_eq!(format_search_space("243"), "243");
        assert_eq!(format_search_space("12500"), "12,500");
        assert_eq!(format_search_space("20000000"), "2.000 x 10^7");
        assert_eq!(format_search_space("many"), "many");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("candidates_normalized".to_string()),
            ..Default::default()
        };
        assert!(format_search_event(&visitor).is_empty());
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
    }
}
