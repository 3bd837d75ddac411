use serde::{Deserialize, Serialize};

/// Request body for `/subscribe`.
///
/// `user_id` and `plan` are required; presence is checked in the handler so
/// a missing field surfaces as a 400 with a descriptive message.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscribeRequest {
    pub user_id: Option<String>,
    pub plan: Option<String>,
    pub amount: Option<i64>,
}

/// Acknowledgement returned on a successful subscription write.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
}

impl SubscribeResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
