pub mod backup;
pub mod check;
pub mod check_offs;
pub mod config;
pub mod create;
pub mod db;
pub mod delete;
pub mod details;
pub mod export;
pub mod generate;
pub mod init;
pub mod last;
pub mod list;
pub mod log;
pub mod streak;
