//! # `HttpApi` — reqwest client for the recipe backend
//!
//! Every method maps one endpoint. Responses are classified in one place,
//! [`read_json`] / [`expect_success`]: 2xx bodies are decoded, non-2xx bodies
//! are parsed for the backend's `{ "message": ... }` and returned as
//! [`ApiError::Rejected`]. Transport and decode failures become
//! [`ApiError::Transport`]. Rejections are logged at `warn`, decode failures
//! at `error`.
//!
//! `reqwest` uses `fetch` on WASM and hyper natively, so the same client works
//! in the browser and in native tooling.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::auth::ErrorBody;
use crate::models::{AuthResponse, LoginRequest, Recipe, RegisterRequest, UserInfo};
use crate::RecipeApi;

/// REST client bound to a base URL such as `http://127.0.0.1:5000/api`.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("api request: {url}");
        url
    }
}

async fn rejection(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let url = response.url().path().to_string();
    let body = response.text().await.unwrap_or_default();
    classify_rejection(&url, status, &body)
}

/// Build the error for a non-2xx answer; the body may carry `{ "message" }`.
fn classify_rejection(path: &str, status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message);
    tracing::warn!(path, status, message = message.as_deref(), "request rejected");
    ApiError::Rejected { status, message }
}

fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(path, "failed to decode response: {e}");
        ApiError::Transport(format!("invalid response from {path}: {e}"))
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    let path = response.url().path().to_string();
    let body = response.text().await?;
    decode_body(&path, &body)
}

async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    Ok(())
}

impl RecipeApi for HttpApi {
    async fn health(&self) -> Result<(), ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        expect_success(response).await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn profile(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response = self
            .client
            .get(self.url("/users/profile"))
            .bearer_auth(token)
            .send()
            .await?;
        read_json(response).await
    }

    async fn recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let response = self.client.get(self.url("/recipes")).send().await?;
        read_json(response).await
    }

    async fn delete_recipe(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/recipes/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = HttpApi::new("http://localhost:5000/api/");
        assert_eq!(api.base_url(), "http://localhost:5000/api");
        assert_eq!(api.url("/recipes"), "http://localhost:5000/api/recipes");
    }

    #[test]
    fn test_rejection_reads_server_message() {
        let err = classify_rejection("/auth/login", 401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 401,
                message: Some("Invalid credentials".to_string())
            }
        );
    }

    #[test]
    fn test_rejection_with_html_body_has_no_message() {
        let err = classify_rejection("/recipes", 502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_undecodable_success_body_is_transport_error() {
        let err = decode_body::<Vec<Recipe>>("/recipes", r#"{"recipes":[]}"#).unwrap_err();
        match err {
            ApiError::Transport(message) => assert!(message.contains("/recipes")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
