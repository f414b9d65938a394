use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub location: String,
    pub is_verified: bool,
    pub created_at: String,
}

impl Company {
    pub fn new(name: String, domain: String, location: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            domain,
            location,
            is_verified: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The set of ISO weekdays (1 = Monday .. 7 = Sunday) a company treats as
/// normally worked. Invariant: non-empty subset of 1..=7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWeek {
    pub company_id: String,
    working_days: BTreeSet<u8>,
}

impl WorkWeek {
    pub fn new(company_id: String, days: &[u8]) -> DomainResult<Self> {
        let working_days: BTreeSet<u8> = days.iter().copied().collect();
        if working_days.is_empty() {
            return Err(DomainError::Validation(
                "Working-day set must not be empty".to_string(),
            ));
        }
        if let Some(bad) = working_days.iter().find(|d| !(1..=7).contains(*d)) {
            return Err(DomainError::Validation(format!(
                "Invalid ISO weekday {} (expected 1=Monday..7=Sunday)",
                bad
            )));
        }
        Ok(Self {
            company_id,
            working_days,
        })
    }

    /// Monday to Friday, the fallback when a company has not configured one.
    pub fn standard(company_id: String) -> Self {
        Self {
            company_id,
            working_days: (1..=5).collect(),
        }
    }

    pub fn working_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.working_days.iter().copied()
    }

    pub fn is_working_weekday(&self, iso_weekday: u8) -> bool {
        self.working_days.contains(&iso_weekday)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.is_working_weekday(date.weekday().number_from_monday() as u8)
    }
}
