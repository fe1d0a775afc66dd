use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_TARGET_MAX: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour for each audited operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)` cut to `max` visible characters, op coloured.
fn render_op_target(entry: &LogEntry, max: usize) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > max {
        let mut s: String = plain.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<String> = entries
            .iter()
            .map(|e| render_op_target(e, OP_TARGET_MAX))
            .collect();

        let op_w = rendered
            .iter()
            .map(|r| strip_ansi(r).chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, op_target) in entries.iter().zip(&rendered) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op_target).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                op_target,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2025-01-01T10:00:00+01:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn long_targets_are_truncated_without_counting_colour_codes() {
        let e = entry("book", &"x".repeat(100));
        let out = render_op_target(&e, 20);
        let visible = strip_ansi(&out);
        assert_eq!(visible.chars().count(), 20);
        assert!(visible.starts_with("book ("));
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn short_entries_are_kept() {
        assert_eq!(strip_ansi(&render_op_target(&entry("init", ""), 60)), "init");
    }
}
