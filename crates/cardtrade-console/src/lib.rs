//! Colorful console output for allocation runs.
//!
//! Provides a custom `tracing` layer that formats solver events with colors,
//! and a plain-text report of a finished population.
//!
//! ## Log Levels
//!
//! - **INFO**: Batch construction start/end, committed batches
//! - **WARN**: Batch construction halted (written to stderr)
//! - **DEBUG**: Rejected solve passes, exhausted or already-solved allocations
//! - **TRACE**: Individual candidate cycles and duplicate batches

mod report;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub use report::{
    describe_contest, describe_participant, describe_reward, format_report, format_statistics,
    print_report,
};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "cardtrade_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CardTradeConsoleLayer)
            .try_init();
    });
}

// Marks the start of a run for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let version_line = format!("cardtrade v{} - trade-cycle reward allocation", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = writeln!(stdout);
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct CardTradeConsoleLayer;

impl<S: Subscriber> Layer<S> for CardTradeConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("cardtrade") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if output.is_empty() {
            return;
        }
        if is_diagnostic(level) {
            let _ = writeln!(io::stderr(), "{}", output);
        } else {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

// Warnings and errors go to stderr; progress goes to stdout.
fn is_diagnostic(level: Level) -> bool {
    level == Level::WARN || level == Level::ERROR
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    participant: Option<String>,
    contest: Option<String>,
    tier: Option<String>,
    members: Option<String>,
    participants: Option<u64>,
    number_of_contests: Option<u64>,
    size_of_contests: Option<u64>,
    batch_size: Option<u64>,
    contests: Option<u64>,
    rewards: Option<u64>,
    remaining: Option<u64>,
    committed: Option<u64>,
    rolled_back: Option<u64>,
    duration_ms: Option<u64>,
    solve_passes: Option<u64>,
    cycles_tried: Option<u64>,
    rollbacks: Option<u64>,
    halted: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "message" => self.message = Some(s),
            "participant" => self.participant = Some(s),
            "contest" => self.contest = Some(s),
            "tier" => self.tier = Some(s),
            "members" => self.members = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "participants" => self.participants = Some(value),
            "number_of_contests" => self.number_of_contests = Some(value),
            "size_of_contests" => self.size_of_contests = Some(value),
            "batch_size" => self.batch_size = Some(value),
            "contests" => self.contests = Some(value),
            "rewards" => self.rewards = Some(value),
            "remaining" => self.remaining = Some(value),
            "committed" => self.committed = Some(value),
            "rolled_back" => self.rolled_back = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "solve_passes" => self.solve_passes = Some(value),
            "cycles_tried" => self.cycles_tried = Some(value),
            "rollbacks" => self.rollbacks = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "halted" {
            self.halted = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "tier" => self.tier = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "add_contests_start" => format_run_start(v),
        "batch_committed" => format_batch_committed(v),
        "batch_halt" => format_batch_halt(v),
        "add_contests_end" => format_run_end(v),
        "solve_pass_rejected" => format_solve_pass_rejected(v),
        "already_solved" | "allocation_exhausted" => format_allocation(v),
        "cycle_rejected" if level == Level::TRACE => format_cycle_rejected(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_run_start(v: &EventVisitor) -> String {
    mark_run_start();
    format!(
        "{} {} Adding contests │ {} participants │ {} contests of {} │ batches of {} │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(v.participants).bright_yellow(),
        count(v.number_of_contests).bright_yellow(),
        count(v.size_of_contests).bright_yellow(),
        count(v.batch_size).bright_yellow(),
        v.tier.as_deref().unwrap_or("bronze").bright_magenta(),
    )
}

fn format_batch_committed(v: &EventVisitor) -> String {
    format!(
        "{} {} Batch committed │ {} contests │ {} rewards │ {} left",
        format_elapsed(),
        "✓".bright_green(),
        count(v.contests).white(),
        count(v.rewards).white(),
        count(v.remaining).bright_black(),
    )
}

fn format_batch_halt(v: &EventVisitor) -> String {
    let message = v.message.as_deref().unwrap_or("Batch construction halted");
    format!(
        "{} {} {} │ {} committed",
        format_elapsed(),
        "!".bright_yellow().bold(),
        message.yellow(),
        count(v.committed).white(),
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let status = if v.halted.unwrap_or(false) {
        "HALTED".bright_yellow().bold().to_string()
    } else {
        "COMPLETE".bright_green().bold().to_string()
    };
    format!(
        "{} {} Done │ {} │ {} contests │ {} rewards │ {} │ {} passes │ {} cycles │ {} rollbacks",
        format_elapsed(),
        "■".bright_cyan().bold(),
        status,
        count(v.contests).bright_yellow(),
        count(v.rewards).bright_yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.solve_passes).white(),
        count(v.cycles_tried).bright_magenta(),
        count(v.rollbacks).white(),
    )
}

fn format_solve_pass_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Solve pass rejected at {} / {} │ {} rewards rolled back",
        format_elapsed(),
        "✗".bright_red(),
        v.participant.as_deref().unwrap_or("?"),
        v.contest.as_deref().unwrap_or("?"),
        count(v.rolled_back),
    )
}

fn format_allocation(v: &EventVisitor) -> String {
    let (icon, label) = match v.event.as_deref() {
        Some("already_solved") => ("=".bright_cyan().to_string(), "already solved"),
        _ => ("✗".bright_red().to_string(), "exhausted"),
    };
    format!(
        "{} {} {} {} for {} │ {}",
        format_elapsed(),
        icon,
        v.tier.as_deref().unwrap_or("?"),
        label,
        v.participant.as_deref().unwrap_or("?"),
        v.contest.as_deref().unwrap_or("?"),
    )
    .bright_black()
    .to_string()
}

fn format_cycle_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Cycle {} │ {}",
        format_elapsed(),
        "✗".bright_red(),
        v.members.as_deref().unwrap_or("[]"),
        v.contest.as_deref().unwrap_or("?"),
    )
    .bright_black()
    .to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("phase_start".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_cycle_rejections_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("cycle_rejected".to_string()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(!format_event(&visitor, Level::TRACE).is_empty());
    }

    #[test]
    fn test_halt_carries_message() {
        let visitor = EventVisitor {
            event: Some("batch_halt".to_string()),
            message: Some("Can't add any more batches of 3 contests".to_string()),
            committed: Some(3),
            ..Default::default()
        };
        let line = format_event(&visitor, Level::WARN);
        assert!(line.contains("Can't add any more batches of 3 contests"));
    }

    #[test]
    fn test_only_warnings_and_errors_go_to_stderr() {
        assert!(is_diagnostic(Level::WARN));
        assert!(is_diagnostic(Level::ERROR));
        assert!(!is_diagnostic(Level::INFO));
        assert!(!is_diagnostic(Level::TRACE));
    }
}
