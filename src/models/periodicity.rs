use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Daily,  // 1
    Weekly, // 2
}

impl Periodicity {
    /// Minimum spacing between check-offs, which is also the exact gap that
    /// keeps a streak alive.
    pub fn interval_days(&self) -> i64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Periodicity::Daily),
            "weekly" => Some(Periodicity::Weekly),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (name, initial or legacy number)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "daily" | "d" | "1" => Some(Periodicity::Daily),
            "weekly" | "w" | "2" => Some(Periodicity::Weekly),
            _ => None,
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
