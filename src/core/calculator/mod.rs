pub mod streak;
