use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::prelude::*;

use crate::config;

pub const SIGNUP_SOURCE: &str = "landing";
pub const LOADING_MESSAGE: &str = "checking…";
pub const SUCCESS_MESSAGE: &str = "you're in. check your inbox soon.";
pub const GENERIC_FAILURE: &str = "something went wrong";
pub const TRANSPORT_FALLBACK: &str = "not eligible";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub source: &'static str,
}

impl SignupRequest {
    pub fn landing(email: &str) -> Self {
        Self {
            email: email.to_string(),
            source: SIGNUP_SOURCE,
        }
    }
}

// `detail` is usually a string, but frameworks like FastAPI send a list on
// validation errors.
#[derive(Deserialize)]
struct ErrorResponse {
    detail: Option<serde_json::Value>,
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum SignupError {
    #[error("{0}")]
    Rejected(String),
    #[error("{}", or_fallback(.0))]
    Transport(String),
}

fn or_fallback(msg: &str) -> &str {
    if msg.trim().is_empty() {
        TRANSPORT_FALLBACK
    } else {
        msg
    }
}

impl SignupError {
    /// Text shown under the form; same as `Display`.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<gloo_net::Error> for SignupError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            // Display would give JS `toString()`, i.e. "TypeError: Failed to fetch".
            gloo_net::Error::JsError(js) => SignupError::Transport(js.message),
            other => SignupError::Transport(other.to_string()),
        }
    }
}

pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the signup body somewhere and hands back the raw reply.
#[allow(async_fn_in_trait)]
pub trait SignupTransport {
    async fn post_json(&self, url: &str, body: &SignupRequest) -> Result<TransportResponse, SignupError>;
}

/// Browser fetch through gloo-net.
pub struct HttpTransport;

impl SignupTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &SignupRequest) -> Result<TransportResponse, SignupError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)?
            .send()
            .await?;

        let status = response.status();
        // Success bodies are never looked at.
        let body = if response.ok() {
            String::new()
        } else {
            match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to read signup error body: {}", e);
                    String::new()
                }
            }
        };

        Ok(TransportResponse { status, body })
    }
}

fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.detail)
        .and_then(|detail| detail.as_str().map(str::to_string))
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Issues exactly one signup request for `email` against `backend`.
pub async fn request_access<T: SignupTransport>(
    transport: &T,
    backend: &str,
    email: &str,
) -> Result<(), SignupError> {
    let url = config::signup_url(backend);
    let request = SignupRequest::landing(email);

    let response = match transport.post_json(&url, &request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Signup request failed: {}", e);
            return Err(e);
        }
    };

    if response.ok() {
        info!("Signup accepted with status {}", response.status);
        Ok(())
    } else {
        let message = rejection_message(&response.body);
        info!("Signup rejected with status {}: {}", response.status, message);
        Err(SignupError::Rejected(message))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SignupStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SignupStatus {
    pub fn message(&self) -> &str {
        match self {
            SignupStatus::Idle => "",
            SignupStatus::Loading => LOADING_MESSAGE,
            SignupStatus::Success(msg) | SignupStatus::Error(msg) => msg,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SignupStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SignupStatus::Error(_))
    }
}

pub enum FormAction {
    Edit(String),
    Submit,
    Resolved(Result<(), SignupError>),
}

/// Email field plus submission status, driven through `use_reducer`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub status: SignupStatus,
}

impl SignupForm {
    pub fn can_submit(&self) -> bool {
        !self.status.is_loading() && !self.email.trim().is_empty()
    }

    pub fn apply(&self, action: FormAction) -> Self {
        match action {
            FormAction::Edit(email) => Self {
                email,
                status: self.status.clone(),
            },
            FormAction::Submit if self.can_submit() => Self {
                email: self.email.clone(),
                status: SignupStatus::Loading,
            },
            FormAction::Submit => self.clone(),
            FormAction::Resolved(Ok(())) => Self {
                email: String::new(),
                status: SignupStatus::Success(SUCCESS_MESSAGE.to_string()),
            },
            FormAction::Resolved(Err(e)) => Self {
                email: self.email.clone(),
                status: SignupStatus::Error(e.user_message()),
            },
        }
    }
}

impl Reducible for SignupForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub fn button_label(status: &SignupStatus) -> &'static str {
    if status.is_loading() {
        LOADING_MESSAGE
    } else {
        "request access"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Error,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Muted => "status-line muted",
            Tone::Error => "status-line error",
        }
    }
}

/// What the line under the form shows, if anything.
pub fn status_line(status: &SignupStatus) -> Option<(&str, Tone)> {
    let message = status.message();
    if message.is_empty() {
        return None;
    }
    let tone = if status.is_error() { Tone::Error } else { Tone::Muted };
    Some((message, tone))
}
