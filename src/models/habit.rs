use super::periodicity::Periodicity;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::Serialize;

pub const MAX_NAME_LEN: usize = 150;
pub const MAX_DESCRIPTION_LEN: usize = 400;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Habit {
    pub id: i64,                     // ⇔ habits.id
    pub name: String,                // ⇔ habits.name (TEXT NOT NULL)
    pub description: Option<String>, // ⇔ habits.description
    pub periodicity: Periodicity,    // ⇔ habits.periodicity ('daily' | 'weekly')
    pub created_at: NaiveDateTime,   // ⇔ habits.created_at (set once)
}

impl Habit {
    pub fn created_at_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn description_or_dash(&self) -> &str {
        self.description.as_deref().unwrap_or("--")
    }
}

/// Validated input for habit creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub periodicity: Periodicity,
}

impl NewHabit {
    /// Trims the inputs and checks them against the column limits.
    /// An empty description is stored as NULL.
    pub fn new(
        name: &str,
        description: Option<&str>,
        periodicity: Periodicity,
    ) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName("name must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::InvalidName(format!(
                "name is longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        if let Some(d) = &description
            && d.chars().count() > MAX_DESCRIPTION_LEN
        {
            return Err(AppError::InvalidDescription(format!(
                "description is longer than {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        Ok(Self {
            name: name.to_string(),
            description,
            periodicity,
        })
    }
}
