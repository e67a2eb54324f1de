//! REST gateway for the task management API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against a base URL
//! fixed at build time. Server-side and native: inert stubs returning
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in
//! the browser.
//!
//! Every outgoing request reads the current token from the token store and,
//! when one is present, carries `Authorization: Bearer <token>`. With no
//! token the request goes out unauthenticated and the server rejects it.
//! The gateway does not retry, cache, or interpret status codes. A 401 is
//! reported like any other failure and never triggers a logout here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse, Project, RegisterRequest, Task, TaskPayload};

/// Base URL for all endpoints; empty means same-origin relative paths.
#[cfg(feature = "hydrate")]
const API_BASE: &str = match option_env!("TASKDECK_API_BASE") {
    Some(base) => base,
    None => "",
};

/// How a request can fail, as far as callers can tell.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Body(String),
    /// Called outside a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Format a token as the `Authorization` header value.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the stored bearer token, when present.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn body(err: gloo_net::Error) -> ApiError {
    ApiError::Body(err.to_string())
}

/// Check the status and parse the JSON body.
#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(body)
}

/// Check the status of a response whose body is unused.
#[cfg(feature = "hydrate")]
fn expect_ok(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// `POST /api/login/` — exchange credentials for a token and staff flag.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url("/api/login/")))
            .json(credentials)
            .map_err(body)?
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/register/` — create an account; the body of the response is
/// not used.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url("/api/register/")))
            .json(request)
            .map_err(body)?
            .send()
            .await
            .map_err(network)?;
        expect_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/tasks/` — the full task list.
pub async fn fetch_tasks() -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&api_url("/api/tasks/")))
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/tasks/{id}/` — a single task.
pub async fn fetch_task(id: i64) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/tasks/{id}/"));
        let resp = authorized(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/tasks/` — create a task, returning the created record.
pub async fn create_task(payload: &TaskPayload) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url("/api/tasks/")))
            .json(payload)
            .map_err(body)?
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/tasks/{id}/` — replace a task's fields.
pub async fn update_task(id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/tasks/{id}/"));
        let resp = authorized(gloo_net::http::Request::put(&url))
            .json(payload)
            .map_err(body)?
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/tasks/{id}/`.
pub async fn delete_task(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/tasks/{id}/"));
        let resp = authorized(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        expect_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/projects/` — the full project list.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&api_url("/api/projects/")))
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/projects/` — create a project, returning the created record.
pub async fn create_project(name: &str) -> Result<Project, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::NewProject {
            name: name.to_owned(),
        };
        let resp = authorized(gloo_net::http::Request::post(&api_url("/api/projects/")))
            .json(&payload)
            .map_err(body)?
            .send()
            .await
            .map_err(network)?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/projects/{id}/`.
pub async fn delete_project(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/projects/{id}/"));
        let resp = authorized(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        expect_ok(&resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
