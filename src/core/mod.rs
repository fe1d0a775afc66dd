pub mod book;
pub mod calculator;
pub mod del;
pub mod export;
pub mod log;
pub mod logic;
