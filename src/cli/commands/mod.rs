pub mod book;
pub mod check;
pub mod config;
pub mod del;
pub mod duration;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod split;
