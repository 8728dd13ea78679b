use serde::{Deserialize, Serialize};

/// Form body for POST /1/messages.json
#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest<'a> {
    pub token: &'a str,
    pub user: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub priority: i8,
}

/// Success response from POST /1/messages.json
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub status: i32,
    pub request: String,
}
