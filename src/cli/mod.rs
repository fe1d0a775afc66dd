pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::models::role::Role;
use crate::ui::messages::warning;

/// Role for this invocation: `--role`, else `default_role` from the config.
/// Unknown codes fall back to the read-only default role.
pub fn resolve_role(flag: Option<&str>, cfg: &Config) -> Role {
    let code = flag.unwrap_or(&cfg.default_role);

    match Role::from_code(code) {
        Some(role) => role,
        None => {
            let fallback = Role::default();
            warning(format!(
                "Unknown role '{}', continuing as '{}'",
                code, fallback
            ));
            fallback
        }
    }
}
