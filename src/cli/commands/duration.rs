use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::effective::calculate_effective_work_time;
use crate::errors::AppResult;
use crate::models::break_window::BreakSchedule;
use crate::models::interval::Interval;
use crate::ui::messages::field;
use crate::utils::mins2readable;

/// Print worked minutes for an interval, minus an optional break.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Duration {
        start,
        end,
        break_kind,
    } = cmd
    {
        let schedule = BreakSchedule::from_config(cfg)?;
        let interval = Interval::parse(start, end)?;
        let window = break_kind.map(|k| schedule.get(k));

        let total = interval.length_minutes();
        let effective = calculate_effective_work_time(&interval, window.as_ref());

        field("interval", interval);
        if let Some(w) = window {
            field("break", w);
        }
        field("total", format!("{} min", total));
        field(
            "effective",
            format!(
                "{} min ({})",
                effective,
                mins2readable(effective, false, false)
            ),
        );
    }

    Ok(())
}
