//! Hosted-store adapter, the single point of entry for all Supabase REST calls.
//!
//! Two tables are touched: `profiles` (read-only location lookup) and
//! `subscriptions` (insert-only). Schema ownership lives entirely with the
//! hosted store; this service defines no migrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Insert returned no representation")]
    EmptyInsert,
}

/// A new subscription row, exactly as written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubscription {
    pub user_id: String,
    pub plan: String,
    pub amount: i64,
    pub status: String,
}

impl NewSubscription {
    /// New subscriptions always start out active.
    pub fn active(user_id: String, plan: String, amount: i64) -> Self {
        Self {
            user_id,
            plan,
            amount,
            status: "active".to_string(),
        }
    }
}

/// A subscription row as returned in the store's insert representation.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRow {
    pub id: Uuid,
    pub user_id: String,
    pub plan: String,
    pub amount: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Projection used by the location lookup.
#[derive(Debug, Deserialize)]
struct ProfileLocationRow {
    location: Option<String>,
}

/// The store trait. Implement this to swap the hosted backend without
/// touching handler code.
///
/// Carried in `AppState` as `Arc<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns the stored location for `email`, or `None` when the email is
    /// empty or no profile matches. Lookup failures propagate untranslated.
    async fn location_for_email(&self, email: &str) -> Result<Option<String>, StoreError>;

    /// Inserts one subscription row and returns the stored representation.
    async fn insert_subscription(
        &self,
        new: NewSubscription,
    ) -> Result<SubscriptionRow, StoreError>;
}

/// Supabase REST adapter for the two hosted tables.
#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Store for SupabaseStore {
    async fn location_for_email(&self, email: &str) -> Result<Option<String>, StoreError> {
        if email.trim().is_empty() {
            return Ok(None);
        }

        let email_filter = format!("eq.{email}");
        let response = self
            .client
            .get(self.rest_url("profiles"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "location"), ("email", email_filter.as_str())])
            .send()
            .await?;

        let rows: Vec<ProfileLocationRow> = Self::check(response).await?.json().await?;
        debug!("Profile lookup matched {} row(s)", rows.len());

        Ok(rows.into_iter().next().and_then(|r| r.location))
    }

    async fn insert_subscription(
        &self,
        new: NewSubscription,
    ) -> Result<SubscriptionRow, StoreError> {
        let response = self
            .client
            .post(self.rest_url("subscriptions"))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&new)
            .send()
            .await?;

        let mut rows: Vec<SubscriptionRow> = Self::check(response).await?.json().await?;
        if rows.is_empty() {
            return Err(StoreError::EmptyInsert);
        }
        Ok(rows.remove(0))
    }
}
