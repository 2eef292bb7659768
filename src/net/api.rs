//! HTTP calls to the answering/authentication service.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! inert stubs, since these endpoints are only meaningful in the browser.
//!
//! Authenticated requests carry the stored session token as a bearer
//! credential; when no token is stored the header is omitted entirely.
//! Failures come back as `Err(String)`/`None` so callers can degrade to a
//! form error or a fallback message without panicking.

#![allow(clippy::unused_async)]

use super::types::{QueryResponse, SignupRequest, User};

/// Ask the answering service a question. `thread_id` is echoed back by the
/// caller-side commit, never interpreted by this function.
///
/// # Errors
///
/// Returns a human-readable error string on transport failure, non-2xx
/// status, or an unparseable body.
pub async fn post_query(question: &str, thread_id: &str) -> Result<QueryResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::QueryRequest {
            question: question.to_owned(),
            thread_id: thread_id.to_owned(),
        };
        let resp = authorized(gloo_net::http::Request::post("/query"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp).await);
        }
        resp.json::<QueryResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (question, thread_id);
        Err("not available on server".to_owned())
    }
}

/// Exchange credentials for a session token via `POST /login`.
///
/// # Errors
///
/// Returns the service's `detail` message, or a generic status string, on
/// invalid credentials or transport failure.
pub async fn login(email: &str, password: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp).await);
        }
        let body: super::types::LoginResponse =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// Returns the service's `detail` message on rejection.
pub async fn signup(request: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/signup")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_detail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Re-validate the stored session token against `GET /me`.
/// Returns `None` when the token is missing, rejected, or on the server.
pub async fn fetch_me() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/me"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Attach the bearer credential when a session token is stored.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::read_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Pull the service's `detail` message out of an error body, falling back
/// to the status code.
#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) => body
            .detail
            .unwrap_or_else(|| format!("HTTP error! status: {status}")),
        Err(_) => format!("HTTP error! status: {status}"),
    }
}
