//! Defines the remote functions Timely calls on the backend and the JSON
//! shapes they take and return.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::authoring::ModuleSubmission;
use crate::event_id::EventId;
use crate::guest::Guest;
use crate::homepage::ContentModule;

pub trait RpcCall: Serialize {
    type Response: DeserializeOwned;
    fn function() -> RpcFunction;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcFunction {
    GetEventHomepageData,
    GetEventGuests,
    CreateMultipleChoiceModule,
}

impl RpcFunction {
    pub fn name(self) -> &'static str {
        match self {
            RpcFunction::GetEventHomepageData => "get_event_homepage_data",
            RpcFunction::GetEventGuests => "get_event_guests",
            RpcFunction::CreateMultipleChoiceModule => "create_multiple_choice_module",
        }
    }
}

/// Error body returned by the backend for a failed call.
#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub message: Option<String>,
    pub code: Option<String>,
    pub hint: Option<String>,
}

/// One homepage record as stored on the backend. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomepageRow {
    #[serde(default)]
    pub event_image: Option<String>,
    #[serde(default)]
    pub welcome_title: Option<String>,
    #[serde(default)]
    pub welcome_description: Option<String>,
    #[serde(default, deserialize_with = "crate::homepage::deserialize_modules")]
    pub modules: Option<Vec<ContentModule>>,
}

// ============================================================================
// Remote functions
// ============================================================================

/// Fetch the homepage for an event.
#[derive(Debug, Serialize)]
pub struct GetEventHomepageData {
    pub p_event_id: String,
}

impl GetEventHomepageData {
    pub fn new(event_id: &EventId) -> Self {
        GetEventHomepageData {
            p_event_id: event_id.to_string(),
        }
    }
}

impl RpcCall for GetEventHomepageData {
    type Response = Vec<HomepageRow>;
    fn function() -> RpcFunction {
        RpcFunction::GetEventHomepageData
    }
}

/// List the guests of an event.
#[derive(Debug, Serialize)]
pub struct GetEventGuests {
    pub p_event_id: String,
}

impl GetEventGuests {
    pub fn new(event_id: &EventId) -> Self {
        GetEventGuests {
            p_event_id: event_id.to_string(),
        }
    }
}

impl RpcCall for GetEventGuests {
    type Response = Vec<Guest>;
    fn function() -> RpcFunction {
        RpcFunction::GetEventGuests
    }
}

/// Store a multiple choice module and target it at the selected guests.
#[derive(Debug, Serialize)]
pub struct CreateMultipleChoiceModule {
    pub p_event_id: String,
    pub p_question: String,
    pub p_options: Vec<String>,
    /// YYYY-MM-DD
    pub p_date: String,
    /// HH:MM
    pub p_time: String,
    pub p_guest_ids: Vec<String>,
}

impl CreateMultipleChoiceModule {
    pub fn new(event_id: &EventId, submission: &ModuleSubmission) -> Self {
        CreateMultipleChoiceModule {
            p_event_id: event_id.to_string(),
            p_question: submission.question.clone(),
            p_options: submission.options.clone(),
            p_date: submission.date_string(),
            p_time: submission.time_string(),
            p_guest_ids: submission.guest_ids.clone(),
        }
    }
}

impl RpcCall for CreateMultipleChoiceModule {
    /// Id of the stored module.
    type Response = String;
    fn function() -> RpcFunction {
        RpcFunction::CreateMultipleChoiceModule
    }
}
