use crate::core::calculator::conflict::{
    ConflictResult, check_break_time_conflict, find_all_break_conflicts,
};
use crate::core::calculator::effective::calculate_effective_work_time;
use crate::core::calculator::split::{SplitResult, calculate_schedule_split};
use crate::models::break_window::{BreakKind, BreakSchedule, BreakWindow};
use crate::models::interval::Interval;
use serde::Serialize;

/// How the user wants the break handled for one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakChoice {
    /// Split around the first enabled window the booking runs into, if any.
    #[default]
    Auto,
    /// Keep the booking whole, break minutes included.
    Skip,
    /// Split around this window.
    Use(BreakKind),
}

impl BreakChoice {
    pub fn from_flags(kind: Option<BreakKind>, skip: bool) -> Self {
        match (kind, skip) {
            (_, true) => BreakChoice::Skip,
            (Some(k), false) => BreakChoice::Use(k),
            (None, false) => BreakChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingPlan {
    pub requested: Interval,
    pub conflict: ConflictResult,
    pub split: SplitResult,
    pub break_window: Option<BreakWindow>,
    /// Intervals to persist, in order.
    pub segments: Vec<Interval>,
    pub effective_minutes: i64,
}

pub struct Core;

impl Core {
    pub fn plan_booking(
        interval: &Interval,
        schedule: &BreakSchedule,
        choice: BreakChoice,
    ) -> BookingPlan {
        let conflict = check_break_time_conflict(interval, schedule);

        let break_window = match choice {
            // `conflict` stays the first-match report; a disabled lunch must
            // not hide an enabled dinner window further along.
            BreakChoice::Auto => find_all_break_conflicts(interval, schedule)
                .into_iter()
                .find(|w| w.enabled),
            BreakChoice::Skip => conflict.suggestion().map(BreakWindow::disabled),
            BreakChoice::Use(kind) => Some(schedule.get(kind).with_enabled(true)),
        };

        let split = match &break_window {
            Some(w) => calculate_schedule_split(interval, w),
            None => SplitResult::NoSplit,
        };

        let effective_minutes = calculate_effective_work_time(interval, break_window.as_ref());

        let segments = if split.is_split() {
            split.parts()
        } else {
            vec![*interval]
        };

        BookingPlan {
            requested: *interval,
            conflict,
            split,
            break_window,
            segments,
            effective_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: &str, b: &str) -> Interval {
        Interval::parse(a, b).unwrap()
    }

    #[test]
    fn auto_splits_around_the_conflicting_window() {
        let plan = Core::plan_booking(&iv("10:00", "15:00"), &BreakSchedule::default(), BreakChoice::Auto);
        assert!(plan.conflict.is_conflict());
        assert_eq!(plan.segments, vec![iv("10:00", "12:00"), iv("13:00", "15:00")]);
        assert_eq!(plan.effective_minutes, 240);
    }

    #[test]
    fn skip_keeps_the_booking_whole() {
        let plan = Core::plan_booking(&iv("10:00", "15:00"), &BreakSchedule::default(), BreakChoice::Skip);
        assert!(plan.conflict.is_conflict());
        assert_eq!(plan.split, SplitResult::NoSplit);
        assert_eq!(plan.segments, vec![iv("10:00", "15:00")]);
        assert_eq!(plan.effective_minutes, 300);
    }

    #[test]
    fn explicit_dinner_choice_ignores_lunch_priority() {
        let plan = Core::plan_booking(
            &iv("16:00", "20:00"),
            &BreakSchedule::default(),
            BreakChoice::Use(BreakKind::Dinner),
        );
        assert_eq!(plan.segments, vec![iv("16:00", "18:00"), iv("19:00", "20:00")]);
        assert_eq!(plan.effective_minutes, 180);
    }

    #[test]
    fn disabled_lunch_in_schedule_does_not_split_on_auto() {
        let schedule = BreakSchedule {
            lunch: BreakWindow::default_lunch().disabled(),
            ..BreakSchedule::default()
        };
        let plan = Core::plan_booking(&iv("10:00", "15:00"), &schedule, BreakChoice::Auto);
        assert_eq!(plan.segments.len(), 1);
        assert_eq!(plan.effective_minutes, 300);
    }

    #[test]
    fn disabled_lunch_still_splits_around_enabled_dinner() {
        let schedule = BreakSchedule {
            lunch: BreakWindow::default_lunch().disabled(),
            ..BreakSchedule::default()
        };
        let plan = Core::plan_booking(&iv("11:00", "20:00"), &schedule, BreakChoice::Auto);

        assert_eq!(plan.conflict.suggestion().map(|w| w.kind), Some(BreakKind::Lunch));
        assert_eq!(plan.break_window.map(|w| w.kind), Some(BreakKind::Dinner));
        assert_eq!(plan.segments, vec![iv("11:00", "18:00"), iv("19:00", "20:00")]);
        assert_eq!(plan.effective_minutes, 480);
    }

    #[test]
    fn no_conflict_means_one_segment() {
        let plan = Core::plan_booking(&iv("08:00", "11:00"), &BreakSchedule::default(), BreakChoice::Auto);
        assert_eq!(plan.conflict, ConflictResult::NoConflict);
        assert_eq!(plan.break_window, None);
        assert_eq!(plan.segments, vec![iv("08:00", "11:00")]);
    }

    #[test]
    fn flags_map_to_choice() {
        assert_eq!(BreakChoice::from_flags(None, false), BreakChoice::Auto);
        assert_eq!(BreakChoice::from_flags(Some(BreakKind::Lunch), true), BreakChoice::Skip);
        assert_eq!(
            BreakChoice::from_flags(Some(BreakKind::Dinner), false),
            BreakChoice::Use(BreakKind::Dinner)
        );
    }
}
