pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::billing::handlers::handle_subscribe;
use crate::mealplan::handlers::handle_mealplan;
use crate::recommendations::handlers::handle_recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/mealplan", post(handle_mealplan))
        .route("/subscribe", post(handle_subscribe))
        .route("/recommendations", post(handle_recommendations))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::errors::AppError;
    use crate::mealplan::generator::PlanGenerator;
    use crate::store::{NewSubscription, Store, StoreError, SubscriptionRow};

    /// Plan generator double: returns a canned plan, counts invocations and
    /// captures the location it was called with.
    struct MockPlanner {
        calls: AtomicUsize,
        last_location: Mutex<Option<String>>,
    }

    impl MockPlanner {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                last_location: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PlanGenerator for MockPlanner {
        async fn generate(
            &self,
            _ingredients: &str,
            _diet: &str,
            location: &str,
        ) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_location.lock().unwrap() = Some(location.to_string());
            Ok(format!("Day 1: breakfast, lunch, dinner near {location}"))
        }
    }

    /// Store double: scripted lookup result, optionally failing insert,
    /// records every call.
    struct MockStore {
        profile_location: Option<String>,
        fail_insert: bool,
        lookups: AtomicUsize,
        inserts: Mutex<Vec<NewSubscription>>,
    }

    impl MockStore {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                profile_location: None,
                fail_insert: false,
                lookups: AtomicUsize::new(0),
                inserts: Mutex::new(Vec::new()),
            })
        }

        fn with_profile(location: &str) -> Arc<Self> {
            Arc::new(Self {
                profile_location: Some(location.to_string()),
                fail_insert: false,
                lookups: AtomicUsize::new(0),
                inserts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                profile_location: None,
                fail_insert: true,
                lookups: AtomicUsize::new(0),
                inserts: Mutex::new(Vec::new()),
            })
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Store for MockStore {
        async fn location_for_email(&self, email: &str) -> Result<Option<String>, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if email.trim().is_empty() {
                return Ok(None);
            }
            Ok(self.profile_location.clone())
        }

        async fn insert_subscription(
            &self,
            new: NewSubscription,
        ) -> Result<SubscriptionRow, StoreError> {
            if self.fail_insert {
                return Err(StoreError::EmptyInsert);
            }
            self.inserts.lock().unwrap().push(new.clone());
            Ok(SubscriptionRow {
                id: uuid::Uuid::new_v4(),
                user_id: new.user_id,
                plan: new.plan,
                amount: new.amount,
                status: new.status,
                created_at: chrono::Utc::now(),
            })
        }
    }

    fn app(planner: Arc<MockPlanner>, store: Arc<MockStore>) -> Router {
        build_router(AppState { planner, store })
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await
    }

    async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read_json(response).await
    }

    async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn root_returns_liveness_message() {
        let (status, body) = get_path(app(MockPlanner::new(), MockStore::new()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("running"));
    }

    #[tokio::test]
    async fn mealplan_with_explicit_location_skips_profile_lookup() {
        let planner = MockPlanner::new();
        let store = MockStore::with_profile("Nairobi");
        let (status, body) = post_json(
            app(planner.clone(), store.clone()),
            "/mealplan",
            json!({"ingredients": "rice, beans", "diet": "vegetarian", "location": "Lagos"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body["plan"].as_str().unwrap().is_empty());
        assert_eq!(store.lookups(), 0);
        assert_eq!(planner.calls(), 1);
        assert_eq!(
            planner.last_location.lock().unwrap().as_deref(),
            Some("Lagos")
        );
    }

    #[tokio::test]
    async fn mealplan_falls_back_to_profile_location() {
        let planner = MockPlanner::new();
        let store = MockStore::with_profile("Nairobi");
        let (status, _body) = post_json(
            app(planner.clone(), store.clone()),
            "/mealplan",
            json!({"ingredients": "rice", "diet": "vegan", "email": "a@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.lookups(), 1);
        assert_eq!(
            planner.last_location.lock().unwrap().as_deref(),
            Some("Nairobi")
        );
    }

    #[tokio::test]
    async fn mealplan_blank_location_falls_through_to_lookup() {
        let planner = MockPlanner::new();
        let store = MockStore::with_profile("Nairobi");
        let (status, _body) = post_json(
            app(planner.clone(), store.clone()),
            "/mealplan",
            json!({"ingredients": "rice", "diet": "vegan", "location": "  ", "email": "a@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.lookups(), 1);
        assert_eq!(
            planner.last_location.lock().unwrap().as_deref(),
            Some("Nairobi")
        );
    }

    #[tokio::test]
    async fn mealplan_without_location_or_email_is_rejected() {
        let planner = MockPlanner::new();
        let store = MockStore::new();
        let (status, body) = post_json(
            app(planner.clone(), store.clone()),
            "/mealplan",
            json!({"ingredients": "rice", "diet": "vegan"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Location required"));
        assert_eq!(store.lookups(), 0);
        assert_eq!(planner.calls(), 0);
    }

    #[tokio::test]
    async fn mealplan_with_unresolvable_email_is_rejected() {
        let planner = MockPlanner::new();
        let store = MockStore::new(); // no profile row
        let (status, _body) = post_json(
            app(planner.clone(), store.clone()),
            "/mealplan",
            json!({"ingredients": "rice", "diet": "vegan", "email": "nobody@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.lookups(), 1);
        assert_eq!(planner.calls(), 0);
    }

    #[tokio::test]
    async fn mealplan_missing_diet_is_rejected() {
        let planner = MockPlanner::new();
        let (status, body) = post_json(
            app(planner.clone(), MockStore::new()),
            "/mealplan",
            json!({"ingredients": "rice", "location": "Lagos"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("diet"));
        assert_eq!(planner.calls(), 0);
    }

    #[tokio::test]
    async fn subscribe_records_active_row() {
        let store = MockStore::new();
        let (status, body) = post_json(
            app(MockPlanner::new(), store.clone()),
            "/subscribe",
            json!({"user_id": "u1", "plan": "pro", "amount": 10}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));

        let inserts = store.inserts.lock().unwrap();
        assert_eq!(
            *inserts,
            vec![NewSubscription::active("u1".to_string(), "pro".to_string(), 10)]
        );
    }

    #[tokio::test]
    async fn subscribe_defaults_amount_to_zero() {
        let store = MockStore::new();
        let (status, _body) = post_json(
            app(MockPlanner::new(), store.clone()),
            "/subscribe",
            json!({"user_id": "u1", "plan": "free"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.inserts.lock().unwrap()[0].amount, 0);
    }

    #[tokio::test]
    async fn subscribe_missing_user_id_is_rejected_without_store_call() {
        let store = MockStore::new();
        let (status, body) = post_json(
            app(MockPlanner::new(), store.clone()),
            "/subscribe",
            json!({"plan": "pro"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("user_id and plan are required"));
        assert!(store.inserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscribe_missing_plan_is_rejected_without_store_call() {
        let store = MockStore::new();
        let (status, _body) = post_json(
            app(MockPlanner::new(), store.clone()),
            "/subscribe",
            json!({"user_id": "u1"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.inserts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscribe_insert_failure_maps_to_server_error() {
        let store = MockStore::failing();
        let (status, body) = post_json(
            app(MockPlanner::new(), store.clone()),
            "/subscribe",
            json!({"user_id": "u1", "plan": "pro"}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("status").is_none());
        assert_eq!(
            body["error"]["message"].as_str().unwrap(),
            "Failed to record subscription"
        );
    }

    #[tokio::test]
    async fn recommendations_require_location() {
        let (status, body) = post_json(
            app(MockPlanner::new(), MockStore::new()),
            "/recommendations",
            json!({"ingredients": ["rice"]}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("location"));
    }

    #[tokio::test]
    async fn recommendations_price_by_location_and_budget() {
        let (status, body) = post_json(
            app(MockPlanner::new(), MockStore::new()),
            "/recommendations",
            json!({
                "location": "New York",
                "ingredients": ["rice", "eggs"],
                "budget_preference": "budget"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stores"].as_array().unwrap().len(), 3);

        let rice = &body["ingredient_pricing"][0];
        assert!((rice["local_price"].as_f64().unwrap() - 2.99 * 1.3).abs() < 1e-9);
        assert_eq!(body["ingredient_pricing"][1]["unit"], "dozen");

        // 2 ingredients * 2.5 base * 1.5 budget multiplier
        assert!((body["cost_optimization"]["total_savings"].as_f64().unwrap() - 7.5).abs() < 1e-9);
        assert_eq!(body["cost_optimization"]["tips"].as_array().unwrap().len(), 6);
    }
}
