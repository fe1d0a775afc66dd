use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::book::{BookLogic, BookingRequest};
use crate::core::logic::BreakChoice;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::break_window::BreakSchedule;
use crate::models::interval::Interval;
use crate::models::role::Role;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::mins2readable;

/// Book a studio slot.
pub fn handle(cmd: &Commands, cfg: &Config, role: Role) -> AppResult<()> {
    if let Commands::Book {
        date,
        start,
        end,
        studio,
        title,
        break_kind,
        skip_break,
    } = cmd
    {
        //
        // 1. Parse input
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let interval = Interval::parse(start, end)?;

        let req = BookingRequest {
            date: d,
            interval,
            studio: studio.clone().unwrap_or_else(|| cfg.default_studio.clone()),
            title: title.clone().unwrap_or_default(),
            role,
            choice: BreakChoice::from_flags(*break_kind, *skip_break),
        };

        //
        // 2. Open DB and execute logic
        //
        let schedule = BreakSchedule::from_config(cfg)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let (group, plan) = BookLogic::apply(&mut pool, &schedule, &req)?;

        //
        // 3. Report
        //
        if let Some(w) = plan.conflict.suggestion()
            && *skip_break
        {
            info(format!("Break skipped: booking keeps the {} window ({}-{})", w.kind, w.start, w.end));
        }

        for seg in &plan.segments {
            success(format!("Booked studio {} on {}: {}", req.studio, d, seg));
        }

        if let Some(w) = plan.break_window.filter(|_| plan.split.is_split()) {
            info(format!("Break: {}-{} ({})", w.start, w.end, w.kind));
        }

        info(format!(
            "Group {} | effective {}",
            group,
            mins2readable(plan.effective_minutes, false, false)
        ));
    }

    Ok(())
}
