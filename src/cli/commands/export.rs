use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Role;

pub fn handle(cmd: &Commands, cfg: &Config, role: Role) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, role, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
