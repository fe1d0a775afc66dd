use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_bookings, load_bookings_by_date, load_bookings_in_range};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_break, paint};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now,
        studio,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let mut bookings = if *now {
            load_bookings_by_date(&pool.conn, &date::today())?
        } else {
            match date::resolve_period(period.as_deref())? {
                Some((from, to)) => load_bookings_in_range(&pool.conn, &from, &to)?,
                None => load_all_bookings(&pool.conn)?,
            }
        };

        if let Some(s) = studio {
            bookings.retain(|b| &b.studio == s);
        }

        if bookings.is_empty() {
            info("No bookings for the selected period.");
            return Ok(());
        }

        print_bookings(&bookings, cfg);
    }
    Ok(())
}

fn print_bookings(bookings: &[Booking], cfg: &Config) {
    let separator = cfg.separator_char.chars().next().unwrap_or('-');

    let mut table = Table::new(
        ["ID", "Date", "Studio", "Start", "End", "Break", "Group", "Effective", "Role", "Title"]
            .into_iter()
            .map(Column::new)
            .collect(),
        separator,
    );

    for b in bookings {
        table.add_row(vec![
            b.id.to_string(),
            b.date_str(),
            b.studio.clone(),
            b.start.as_hhmm(),
            b.end.as_hhmm(),
            b.segment_label(),
            b.group_id.to_string(),
            mins2readable(b.effective_minutes, false, false),
            b.role.to_string(),
            b.title.clone(),
        ]);
    }

    // Colour after layout so escape codes do not skew column widths.
    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{}", bold(header));
    }
    if let Some(rule) = lines.next() {
        println!("{}", rule);
    }
    for (line, b) in lines.zip(bookings) {
        if b.break_kind.is_some() {
            println!("{}", paint(line, color_for_break(b.break_kind)));
        } else {
            println!("{}", line);
        }
    }

    let total: i64 = bookings.iter().map(|b| b.effective_minutes).sum();
    println!();
    info(format!(
        "{} row(s), {} effective",
        bookings.len(),
        mins2readable(total, false, false)
    ));
}
