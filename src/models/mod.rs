pub mod booking;
pub mod break_window;
pub mod interval;
pub mod role;
pub mod time_of_day;
