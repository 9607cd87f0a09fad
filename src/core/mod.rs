pub mod backup;
pub mod calculator;
pub mod checkoff;
pub mod generate;
pub mod habit;
pub mod log;
pub mod streak;
