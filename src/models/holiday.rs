use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Company holiday calendar entry.
///
/// Recurring entries repeat every year on the stored month and day; the
/// stored year is ignored when matching. Optional holidays are observed
/// but not mandatorily non-working, so classification treats them as
/// informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub company_id: String,
    pub date: NaiveDate,
    pub name: String,
    pub recurring: bool,
    pub is_optional: bool,
    pub created_at: String,
}

impl Holiday {
    pub fn new(company_id: String, date: NaiveDate, name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_id,
            date,
            name,
            recurring: false,
            is_optional: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// The date this holiday is observed in `year`.
    ///
    /// Non-recurring entries keep their stored date regardless of `year`.
    /// A recurring Feb 29 clamps to Feb 28 in non-leap years.
    pub fn observed_date(&self, year: i32) -> NaiveDate {
        if !self.recurring {
            return self.date;
        }
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.date)
    }

    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.observed_date(date.year()) == date
    }
}

/// DTO for creating a holiday entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHolidayRequest {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default)]
    pub is_optional: bool,
}

/// Outcome of a bulk holiday import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HolidayImportSummary {
    pub created: usize,
    pub updated: usize,
}
