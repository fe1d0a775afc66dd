//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(240, false, false), "04h 00m");
        assert_eq!(mins2readable(145, true, true), "+02:25");
        assert_eq!(mins2readable(-70, false, true), "-01:10");
        assert_eq!(mins2readable(0, true, false), "00h 00m");
    }
}
