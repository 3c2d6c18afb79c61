//! Remote API Client
//!
//! Every call goes through [`ApiClient::authorized`], which asks the
//! identity provider for a current bearer token and attaches it.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{Food, FoodRequest, FoodUpdate, NewFood, NewFoodRequest};
use crate::error::{ApiError, ApiResult};
use crate::identity::IdentityProvider;

/// HTTP client bound to the remote API and an identity provider
pub struct ApiClient<P: IdentityProvider> {
    http: reqwest::Client,
    base_url: String,
    identity: P,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl<P: IdentityProvider> ApiClient<P> {
    pub fn new(config: &Config, identity: P) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
            identity,
        }
    }

    pub fn identity(&self) -> &P {
        &self.identity
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer` when a session exists
    async fn authorized(&self, builder: RequestBuilder) -> ApiResult<RequestBuilder> {
        match self.identity.fresh_token(false).await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("[api] {} {}", method, path);
        self.http.request(method, self.url(path))
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = self.authorized(builder).await?.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().path().to_string();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&text).ok().and_then(|b| b.message);
        log::warn!("[api] {} failed with {}", url, status);
        Err(ApiError::Status { status: status.as_u16(), message })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: Serialize>(&self, method: Method, path: &str, body: &B) -> ApiResult<()> {
        self.execute(self.request(method, path).json(body)).await?;
        Ok(())
    }

    // ========================
    // Session
    // ========================

    /// Present the current bearer token to the API root
    pub async fn verify_session(&self) -> ApiResult<serde_json::Value> {
        let response = self.execute(self.request(Method::GET, "/")).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
    }

    // ========================
    // Listings
    // ========================

    pub async fn list_available_foods(&self) -> ApiResult<Vec<Food>> {
        self.get_json("/available-foods").await
    }

    pub async fn get_food(&self, id: &str) -> ApiResult<Food> {
        self.get_json(&format!("/food/{}", id)).await
    }

    pub async fn add_food(&self, food: &NewFood) -> ApiResult<()> {
        self.send_json(Method::POST, "/add-food", food).await
    }

    pub async fn update_food(&self, id: &str, update: &FoodUpdate) -> ApiResult<()> {
        self.send_json(Method::PATCH, &format!("/food/{}", id), update).await
    }

    pub async fn delete_food(&self, id: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, &format!("/food/{}", id))).await?;
        Ok(())
    }

    /// Listings donated by the current identity
    pub async fn my_foods(&self) -> ApiResult<Vec<Food>> {
        self.get_json("/my-foods").await
    }

    // ========================
    // Requests
    // ========================

    pub async fn request_food(&self, request: &NewFoodRequest) -> ApiResult<()> {
        self.send_json(Method::POST, "/food-request", request).await
    }

    /// Requests made by the current identity
    pub async fn my_requests(&self) -> ApiResult<Vec<FoodRequest>> {
        self.get_json("/my-requests").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FoodStatus, Session};
    use crate::error::{AuthError, AuthResult};
    use crate::identity::IdpCredential;
    use async_trait::async_trait;
    use mockito::Matcher;
    use serde_json::json;

    /// Identity stub handing out a fixed token
    struct StaticToken(Option<&'static str>);

    #[async_trait(?Send)]
    impl IdentityProvider for StaticToken {
        async fn sign_up(&self, _: &str, _: &str, _: &str, _: Option<&str>) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_in(&self, _: &str, _: &str) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_in_with_idp(&self, _: &IdpCredential) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn update_profile(&self, _: Option<&str>, _: Option<&str>) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_out(&self) -> AuthResult<()> {
            Ok(())
        }
        fn current_session(&self) -> Option<Session> {
            None
        }
        async fn fresh_token(&self, _: bool) -> AuthResult<Option<String>> {
            Ok(self.0.map(str::to_string))
        }
    }

    /// Identity stub whose token exchange always fails
    struct BrokenIdentity;

    #[async_trait(?Send)]
    impl IdentityProvider for BrokenIdentity {
        async fn sign_up(&self, _: &str, _: &str, _: &str, _: Option<&str>) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_in(&self, _: &str, _: &str) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_in_with_idp(&self, _: &IdpCredential) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn update_profile(&self, _: Option<&str>, _: Option<&str>) -> AuthResult<Session> {
            Err(AuthError::NotSignedIn)
        }
        async fn sign_out(&self) -> AuthResult<()> {
            Ok(())
        }
        fn current_session(&self) -> Option<Session> {
            None
        }
        async fn fresh_token(&self, _: bool) -> AuthResult<Option<String>> {
            Err(AuthError::provider("TOKEN_EXPIRED"))
        }
    }

    fn client<P: IdentityProvider>(server: &mockito::Server, identity: P) -> ApiClient<P> {
        ApiClient::new(&Config::single_host(&server.url()), identity)
    }

    fn food_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "_id": id,
            "name": name,
            "quantity": 2,
            "expireDate": "2026-05-01T10:00:00.000Z",
            "donorEmail": "ana@example.com",
            "status": "available"
        })
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/my-foods")
            .match_header("authorization", "Bearer tok-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([food_json("1", "Bread")]).to_string())
            .create_async()
            .await;

        let foods = client(&server, StaticToken(Some("tok-1"))).my_foods().await.unwrap();

        mock.assert_async().await;
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Bread");
        assert_eq!(foods[0].status, FoodStatus::Available);
    }

    #[tokio::test]
    async fn test_anonymous_request_has_no_authorization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/available-foods")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let foods = client(&server, StaticToken(None)).list_available_foods().await.unwrap();

        mock.assert_async().await;
        assert!(foods.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/food-request")
            .with_status(409)
            .with_body(r#"{"message":"You already requested this food"}"#)
            .create_async()
            .await;

        let request = NewFoodRequest {
            food_id: "1".into(),
            donor_name: "Ana".into(),
            donor_email: "ana@example.com".into(),
            user_email: "bo@example.com".into(),
            request_date: "2026-02-01T08:30:00.000Z".into(),
            expire_date: "2026-05-01T10:00:00.000Z".into(),
            location: "Main St".into(),
            notes: String::new(),
        };
        let err = client(&server, StaticToken(Some("t"))).request_food(&request).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status { status: 409, message: Some("You already requested this food".into()) }
        );
        assert_eq!(err.user_message_or("Failed to send request."), "You already requested this food");
    }

    #[tokio::test]
    async fn test_error_without_message_body() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/food/missing").with_status(404).create_async().await;

        let err = client(&server, StaticToken(Some("t"))).get_food("missing").await.unwrap_err();
        assert_eq!(err, ApiError::Status { status: 404, message: None });
        assert_eq!(err.user_message_or("Failed to load food details."), "Failed to load food details.");
    }

    #[tokio::test]
    async fn test_update_sends_only_mutable_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/food/f1")
            .match_header("authorization", "Bearer t")
            .match_body(Matcher::Json(json!({ "name": "Soup", "quantity": 4, "location": "Hall" })))
            .with_status(200)
            .with_body(r#"{"modifiedCount":1}"#)
            .create_async()
            .await;

        let update = FoodUpdate { name: "Soup".into(), quantity: 4, location: "Hall".into() };
        client(&server, StaticToken(Some("t"))).update_food("f1", &update).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_and_add() {
        let mut server = mockito::Server::new_async().await;
        let delete = server.mock("DELETE", "/food/f9").with_status(200).create_async().await;
        let add = server
            .mock("POST", "/add-food")
            .match_body(Matcher::PartialJson(json!({ "name": "Rice", "requestCount": 0 })))
            .with_status(201)
            .with_body(r#"{"insertedId":"f10"}"#)
            .create_async()
            .await;

        let api = client(&server, StaticToken(Some("t")));
        api.delete_food("f9").await.unwrap();
        api.add_food(&NewFood {
            name: "Rice".into(),
            image: String::new(),
            quantity: 1,
            location: "Depot".into(),
            expire_date: "2026-05-01T10:00:00.000Z".into(),
            notes: String::new(),
            status: FoodStatus::Available,
            donor_name: "Ana".into(),
            donor_email: "ana@example.com".into(),
            donor_image: None,
            request_count: 0,
        })
        .await
        .unwrap();

        delete.assert_async().await;
        add.assert_async().await;
    }

    #[tokio::test]
    async fn test_my_requests_decodes() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/my-requests")
            .with_status(200)
            .with_body(
                json!([{
                    "_id": "r1",
                    "foodId": "f1",
                    "userEmail": "bo@example.com",
                    "donorName": "Ana",
                    "requestDate": "2026-02-01T08:30:00.000Z",
                    "location": "Main St"
                }])
                .to_string(),
            )
            .create_async()
            .await;

        let requests = client(&server, StaticToken(Some("t"))).my_requests().await.unwrap();
        assert_eq!(requests[0].food_id, "f1");
        assert_eq!(requests[0].notes, None);
    }

    #[tokio::test]
    async fn test_token_failure_aborts_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/my-foods").expect(0).create_async().await;

        let err = client(&server, BrokenIdentity).my_foods().await.unwrap_err();

        assert!(matches!(err, ApiError::Auth(_)));
        assert!(err.is_session_dead());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_verify_session_accepts_plain_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_header("authorization", "Bearer t")
            .with_status(200)
            .with_body("Server is running")
            .create_async()
            .await;

        let value = client(&server, StaticToken(Some("t"))).verify_session().await.unwrap();
        assert_eq!(value, serde_json::Value::String("Server is running".into()));
    }
}
