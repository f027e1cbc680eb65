/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Client-side access gate for tutorial pages.
//!
//! The stored token is only checked for shape and expiry; its signature is
//! never verified. This keeps gated content from flashing for visitors who
//! are obviously signed out, it does not protect anything.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Local storage key holding the session token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the email of a visitor who registered before.
pub const REGISTERED_EMAIL_KEY: &str = "registeredEmail";
/// Local storage key holding the signed-in user as JSON.
pub const USER_KEY: &str = "user";
pub const DEFAULT_REGISTER_PATH: &str = "/register";

/// Values that end up in storage when `null`/`undefined` are stringified.
const PLACEHOLDER_TOKENS: [&str; 2] = ["null", "undefined"];

/// Accepts both the standard and the URL-safe alphabet (after
/// normalisation) with or without padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TokenError {
    #[error("no token stored")]
    Missing,

    #[error("token is blank")]
    Blank,

    #[error("token holds the placeholder {0:?}")]
    Placeholder(String),

    #[error("expected 3 token segments, found {0}")]
    SegmentCount(usize),

    #[error("token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON: {0}")]
    Json(String),

    #[error("token payload is null")]
    NullPayload,

    #[error("token expired at {expires_at_ms} ms (now {now_ms} ms)")]
    Expired { expires_at_ms: f64, now_ms: f64 },
}

/// What the gate learned from a well-formed token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    /// Expiry in milliseconds since the epoch, when the payload has one.
    pub expires_at_ms: Option<f64>,
    pub payload: Value,
}

impl TokenClaims {
    /// The payload's `sub`, when it is a string.
    pub fn subject(&self) -> Option<&str> {
        self.payload.get("sub").and_then(Value::as_str)
    }
}

/// Check a stored token's shape and expiry against `now_ms`.
pub fn validate_token(token: Option<&str>, now_ms: f64) -> Result<TokenClaims, TokenError> {
    let token = token.ok_or(TokenError::Missing)?;
    if token.trim().is_empty() {
        return Err(TokenError::Blank);
    }
    if PLACEHOLDER_TOKENS.contains(&token) {
        return Err(TokenError::Placeholder(token.to_string()));
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::SegmentCount(parts.len()));
    }

    let normalized = parts[1].replace('-', "+").replace('_', "/");
    let bytes = PAYLOAD_ENGINE.decode(normalized)?;
    let payload: Value =
        serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;
    if payload.is_null() {
        return Err(TokenError::NullPayload);
    }

    let expires_at_ms = payload.get("exp").and_then(Value::as_f64).map(|exp| exp * 1000.0);
    if let Some(expires_at_ms) = expires_at_ms {
        if expires_at_ms < now_ms {
            return Err(TokenError::Expired {
                expires_at_ms,
                now_ms,
            });
        }
    }

    Ok(TokenClaims {
        expires_at_ms,
        payload,
    })
}

/// Key/value storage the gate reads the token from.
pub trait TokenStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPolicy {
    /// When false every visitor is let in.
    pub enabled: bool,
    /// Let visitors with a known registered email in even without a valid
    /// token.
    pub allow_registered_visitors: bool,
    pub register_path: String,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            allow_registered_visitors: true,
            register_path: DEFAULT_REGISTER_PATH.to_string(),
        }
    }
}

/// `Unchecked -> {Authenticated | Redirecting}`; both outcomes are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unchecked,
    Authenticated,
    Redirecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessReason {
    AuthDisabled,
    ValidToken,
    RegisteredVisitor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Authenticated(AccessReason),
    Redirect { location: String, reason: TokenError },
}

impl GateDecision {
    pub fn state(&self) -> GateState {
        match self {
            GateDecision::Authenticated(_) => GateState::Authenticated,
            GateDecision::Redirect { .. } => GateState::Redirecting,
        }
    }
}

#[derive(Deserialize)]
struct StoredUser {
    email: Option<String>,
}

/// Decide whether the visitor on `current_path` may see the page.
///
/// Removes an invalid token from `storage`; the caller performs the
/// navigation for [`GateDecision::Redirect`].
pub fn check_access(
    policy: &AuthPolicy,
    storage: &mut impl TokenStorage,
    current_path: &str,
    now_ms: f64,
) -> GateDecision {
    if !policy.enabled {
        return GateDecision::Authenticated(AccessReason::AuthDisabled);
    }

    let token = storage.get_item(TOKEN_KEY);
    let reason = match validate_token(token.as_deref(), now_ms) {
        Ok(claims) => {
            log::debug!(
                "Token valid for {}, expires at {:?} ms",
                claims.subject().unwrap_or("unknown subject"),
                claims.expires_at_ms
            );
            return GateDecision::Authenticated(AccessReason::ValidToken);
        }
        Err(reason) => reason,
    };

    if token.is_some() {
        storage.remove_item(TOKEN_KEY);
    }

    if policy.allow_registered_visitors {
        if let Some(email) = registered_email(storage) {
            log::info!("Token rejected ({reason}) but {email} registered before, allowing access");
            return GateDecision::Authenticated(AccessReason::RegisteredVisitor);
        }
    }

    let location = registration_url(&policy.register_path, current_path);
    log::info!("Token rejected ({reason}), redirecting to {location}");
    GateDecision::Redirect { location, reason }
}

/// `<register_path>?redirect=<percent-encoded current_path>`
pub fn registration_url(register_path: &str, current_path: &str) -> String {
    format!("{register_path}?redirect={}", urlencoding::encode(current_path))
}

/// Email of a returning visitor, promoting the stored user's email to
/// [`REGISTERED_EMAIL_KEY`] when only the user object has it.
fn registered_email(storage: &mut impl TokenStorage) -> Option<String> {
    if let Some(email) = storage
        .get_item(REGISTERED_EMAIL_KEY)
        .filter(|email| !email.trim().is_empty())
    {
        return Some(email);
    }

    let user = storage.get_item(USER_KEY)?;
    let email = serde_json::from_str::<StoredUser>(&user)
        .ok()?
        .email
        .filter(|email| !email.trim().is_empty())?;
    storage.set_item(REGISTERED_EMAIL_KEY, &email);
    Some(email)
}
