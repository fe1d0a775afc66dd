use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::{DeleteLogic, DeleteTarget};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, role: Role) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        group,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let target = match (id, group) {
            (Some(i), _) => DeleteTarget::Row(*i),
            (None, Some(g)) => DeleteTarget::Group(*g),
            (None, None) => DeleteTarget::All,
        };

        let prompt = match target {
            DeleteTarget::Row(i) => format!("Delete booking #{} for {}? This action is irreversible.", i, d),
            DeleteTarget::Group(g) => format!("Delete booking group {} for {}? This action is irreversible.", g, d),
            DeleteTarget::All => format!("Delete ALL bookings for {}? This action is irreversible.", d),
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, role, d, target)?;

        success(format!("{} booking row(s) deleted for {}.", removed, d));
    }

    Ok(())
}
