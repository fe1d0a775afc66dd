use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::conflict::{
    ConflictResult, check_break_time_conflict, find_all_break_conflicts,
};
use crate::errors::AppResult;
use crate::models::break_window::BreakSchedule;
use crate::models::interval::Interval;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{color_for_break, color_for_conflict, paint};

/// Report which break window, if any, an interval runs into.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { start, end, all } = cmd {
        let schedule = BreakSchedule::from_config(cfg)?;
        let interval = Interval::parse(start, end)?;

        if *all {
            let hits = find_all_break_conflicts(&interval, &schedule);
            if hits.is_empty() {
                success(format!("{} has no break conflict", interval));
            }
            for w in hits {
                warning(format!(
                    "{} overlaps {}",
                    interval,
                    paint(&w.to_string(), color_for_break(Some(w.kind)))
                ));
            }
            return Ok(());
        }

        let result = check_break_time_conflict(&interval, &schedule);
        let label = paint(
            if result.is_conflict() { "CONFLICT" } else { "OK" },
            color_for_conflict(result.is_conflict()),
        );

        match result {
            ConflictResult::NoConflict => {
                success(format!("{} {} has no break conflict", label, interval));
            }
            ConflictResult::Conflict { kind, suggestion } => {
                warning(format!(
                    "{} {} conflicts with the {} break",
                    label, interval, kind
                ));
                println!(
                    "  suggested break: {}-{} ({} min)",
                    suggestion.start,
                    suggestion.end,
                    suggestion.duration_minutes()
                );
            }
        }
    }

    Ok(())
}
