use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::split::SplitResult;
use crate::core::logic::{BreakChoice, Core};
use crate::errors::AppResult;
use crate::models::break_window::BreakSchedule;
use crate::models::interval::Interval;
use crate::ui::messages::{field, info, success};
use crate::utils::mins2readable;

/// Preview how an interval would be stored by `book`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Split {
        start,
        end,
        break_kind,
        skip_break,
    } = cmd
    {
        let schedule = BreakSchedule::from_config(cfg)?;
        let interval = Interval::parse(start, end)?;
        let choice = BreakChoice::from_flags(*break_kind, *skip_break);

        let plan = Core::plan_booking(&interval, &schedule, choice);

        match plan.split {
            SplitResult::NoSplit => {
                success(format!("{} needs no split", interval));
            }
            SplitResult::Split {
                first,
                second,
                break_window,
            } => {
                info(format!("{} is split around the {} break", interval, break_window.kind));
                field("first", first.map(|i| i.to_string()).unwrap_or_else(|| "--".into()));
                field("break", format!("{}-{}", break_window.start, break_window.end));
                field("second", second.map(|i| i.to_string()).unwrap_or_else(|| "--".into()));
            }
        }

        field("effective", mins2readable(plan.effective_minutes, false, false));
    }

    Ok(())
}
