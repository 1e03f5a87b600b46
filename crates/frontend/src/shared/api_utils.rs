//! API utilities for frontend-backend communication.
//!
//! Every request goes through the helpers below: they derive the backend
//! base URL from the current window location, attach the persisted bearer
//! token, and parse the response into a typed contract exactly once. Error
//! strings carry the backend's own `message` when one is present, so
//! rejections (stock conflicts, non-editable sales) reach the user verbatim.

use crate::system::auth::storage;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Generic connectivity failure message. Transport errors carry no useful
/// backend text, so the user gets this instead.
pub const CONNECTION_ERROR: &str = "No se pudo conectar con el servidor.";

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using
/// port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Extract a human-readable error from a non-2xx response: the backend's
/// `message` field when present, the HTTP status otherwise.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(body) = response.json::<serde_json::Value>().await {
        if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    format!("HTTP {}", status)
}

async fn send(builder: RequestBuilder) -> Result<Response, String> {
    let response = builder
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(response)
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, String> {
    let request = builder
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|_| CONNECTION_ERROR.to_string())?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(with_auth(Request::get(&api_url(path)))).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = send_json(with_auth(Request::post(&api_url(path))), body).await?;
    parse(response).await
}

pub async fn post_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(with_auth(Request::post(&api_url(path))), body).await?;
    Ok(())
}

pub async fn post_no_content(path: &str) -> Result<(), String> {
    send(with_auth(Request::post(&api_url(path)))).await?;
    Ok(())
}

pub async fn patch_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(with_auth(Request::patch(&api_url(path))), body).await?;
    Ok(())
}

pub async fn put_json_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    send_json(with_auth(Request::put(&api_url(path))), body).await?;
    Ok(())
}

pub async fn delete_no_content(path: &str) -> Result<(), String> {
    send(with_auth(Request::delete(&api_url(path)))).await?;
    Ok(())
}
