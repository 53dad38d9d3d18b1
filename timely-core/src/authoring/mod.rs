//! Authoring of new homepage modules.
//!
//! [`MultipleChoiceWizard`] is a two-step flow:
//!
//! 1. Compose: a question, one or more options, and a date and time.
//! 2. Audience: the subset of the event's guests that receives the module.
//!
//! Nothing is persisted here. Submitting yields a [`ModuleSubmission`] for the
//! caller to hand to the backend; cancelling drops every collected value.

mod submission;

pub use submission::{DATE_FORMAT, ModuleSubmission, TIME_FORMAT, parse_date, parse_time};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimelyResult;
use crate::guest::Guest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Compose,
    Audience,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Compose => 1,
            WizardStep::Audience => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MultipleChoiceWizard {
    step: WizardStep,
    question: String,
    options: Vec<String>,
    date: NaiveDate,
    time: NaiveTime,
    guests: Vec<Guest>,
    /// In the order the guests were picked.
    selected: Vec<String>,
}

impl MultipleChoiceWizard {
    /// Start a wizard with date and time preset to `now` (truncated to the minute).
    pub fn new(guests: Vec<Guest>, now: NaiveDateTime) -> Self {
        let time = now.time();
        MultipleChoiceWizard {
            step: WizardStep::Compose,
            question: String::new(),
            options: vec![String::new()],
            date: now.date(),
            time: NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time),
            guests,
            selected: Vec::new(),
        }
    }

    pub fn starting_now(guests: Vec<Guest>) -> Self {
        Self::new(guests, Local::now().naive_local())
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn selected_guest_ids(&self) -> &[String] {
        &self.selected
    }

    // --- step 1 ---

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Append a blank option and return its index.
    pub fn add_option(&mut self) -> usize {
        self.options.push(String::new());
        self.options.len() - 1
    }

    /// Returns false if there is no option at `index`.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                *option = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove the option at `index`. The last remaining option cannot be removed.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.options.len() <= 1 || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.time = time;
    }

    /// Set the date from `YYYY-MM-DD`. Invalid input leaves the date unchanged.
    pub fn set_date_str(&mut self, input: &str) -> TimelyResult<()> {
        self.date = parse_date(input)?;
        Ok(())
    }

    /// Set the time from `HH:MM`. Invalid input leaves the time unchanged.
    pub fn set_time_str(&mut self, input: &str) -> TimelyResult<()> {
        self.time = parse_time(input)?;
        Ok(())
    }

    /// "Next" is enabled: the question and every option are non-empty.
    pub fn can_advance(&self) -> bool {
        !self.question.is_empty() && self.options.iter().all(|option| !option.is_empty())
    }

    /// Move from Compose to Audience. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if self.step != WizardStep::Compose || !self.can_advance() {
            return false;
        }
        self.step = WizardStep::Audience;
        true
    }

    // --- step 2 ---

    pub fn select_all(&mut self) {
        self.selected = self.guests.iter().map(|g| g.id.clone()).collect();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Flip one guest in or out of the audience. Unknown ids are ignored
    /// (returns false).
    pub fn toggle_guest(&mut self, guest_id: &str) -> bool {
        if !self.guests.iter().any(|g| g.id == guest_id) {
            return false;
        }
        match self.selected.iter().position(|id| id == guest_id) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(guest_id.to_string()),
        }
        true
    }

    pub fn is_selected(&self, guest_id: &str) -> bool {
        self.selected.iter().any(|id| id == guest_id)
    }

    /// "Save & Post" is enabled: on the audience step with at least one guest picked.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Audience && !self.selected.is_empty() && self.can_advance()
    }

    /// Package the collected values. Hands the wizard back unchanged when
    /// submission is not enabled.
    pub fn submit(self) -> Result<ModuleSubmission, Self> {
        if !self.can_submit() {
            return Err(self);
        }
        Ok(ModuleSubmission {
            question: self.question,
            options: self.options,
            date: self.date,
            time: self.time,
            guest_ids: self.selected,
        })
    }

    /// Abandon the flow. Everything collected so far is dropped.
    pub fn cancel(self) {}
}
