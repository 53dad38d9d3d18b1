use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{TimelyError, TimelyResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// A finished multiple choice module, ready to hand to the backend.
///
/// Serializes as `{question, options, date: "YYYY-MM-DD", time: "HH:MM", guestIds}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleSubmission {
    pub question: String,
    pub options: Vec<String>,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub guest_ids: Vec<String>,
}

impl ModuleSubmission {
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// The same presence checks the wizard gates its buttons on, for
    /// submissions that did not come through a wizard.
    pub fn validate(&self) -> TimelyResult<()> {
        if self.question.is_empty() {
            return Err(TimelyError::InvalidInput("question is empty".into()));
        }
        if self.options.is_empty() {
            return Err(TimelyError::InvalidInput("at least one option is required".into()));
        }
        if let Some(index) = self.options.iter().position(String::is_empty) {
            return Err(TimelyError::InvalidInput(format!("option {} is empty", index + 1)));
        }
        if self.guest_ids.is_empty() {
            return Err(TimelyError::InvalidInput("no guests selected".into()));
        }
        Ok(())
    }
}

pub fn parse_date(input: &str) -> TimelyResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        TimelyError::InvalidInput(format!("Invalid date '{}'. Expected YYYY-MM-DD", input))
    })
}

pub fn parse_time(input: &str) -> TimelyResult<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
        .map_err(|_| TimelyError::InvalidInput(format!("Invalid time '{}'. Expected HH:MM", input)))
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
