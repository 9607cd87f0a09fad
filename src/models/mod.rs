pub mod check_off;
pub mod habit;
pub mod periodicity;
