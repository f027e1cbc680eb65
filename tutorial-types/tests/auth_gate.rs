// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for the tutorial auth gate.
//
// No browser needed: the gate runs against an in-memory storage and a fixed
// clock, and the redirect is asserted on the returned decision.

mod support;

use support::{token_with_payload, MemoryStorage};
use tutorial_types::auth::{
    check_access, AccessReason, AuthPolicy, GateDecision, GateState, TokenError,
    REGISTERED_EMAIL_KEY, TOKEN_KEY, USER_KEY,
};

const NOW_MS: f64 = 1_750_000_000_000.0;

fn strict() -> AuthPolicy {
    AuthPolicy {
        enabled: true,
        allow_registered_visitors: false,
        ..AuthPolicy::default()
    }
}

fn lenient() -> AuthPolicy {
    AuthPolicy {
        enabled: true,
        ..AuthPolicy::default()
    }
}

fn exp_in(seconds: i64) -> String {
    let exp = (NOW_MS / 1000.0) as i64 + seconds;
    token_with_payload(&format!(r#"{{"sub":"student@example.com","exp":{exp}}}"#))
}

// ---------------------------------------------------------------------------
// Disabled auth
// ---------------------------------------------------------------------------

#[test]
fn disabled_auth_lets_everyone_in_untouched() {
    let mut storage = MemoryStorage::with(&[(TOKEN_KEY, "null")]);
    let decision = check_access(&AuthPolicy::default(), &mut storage, "/sql", NOW_MS);
    assert_eq!(decision, GateDecision::Authenticated(AccessReason::AuthDisabled));
    assert_eq!(storage.items.get(TOKEN_KEY).map(String::as_str), Some("null"));
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[test]
fn sentinel_tokens_redirect_to_registration() {
    let cases: [Option<&str>; 4] = [None, Some(""), Some("null"), Some("undefined")];
    for token in cases {
        let mut storage = match token {
            Some(token) => MemoryStorage::with(&[(TOKEN_KEY, token)]),
            None => MemoryStorage::default(),
        };
        let decision = check_access(&strict(), &mut storage, "/sql", NOW_MS);
        assert_eq!(decision.state(), GateState::Redirecting, "token {token:?}");
        assert!(
            matches!(&decision, GateDecision::Redirect { location, .. } if location == "/register?redirect=%2Fsql"),
            "token {token:?} gave {decision:?}"
        );
        assert!(!storage.items.contains_key(TOKEN_KEY));
    }
}

#[test]
fn expired_token_is_cleared_and_redirects() {
    let token = exp_in(-10);
    let mut storage = MemoryStorage::with(&[(TOKEN_KEY, token.as_str())]);
    let decision = check_access(&strict(), &mut storage, "/sql", NOW_MS);
    match decision {
        GateDecision::Redirect { location, reason } => {
            assert_eq!(location, "/register?redirect=%2Fsql");
            assert!(matches!(reason, TokenError::Expired { .. }));
        }
        other => panic!("expected redirect, got {other:?}"),
    }
    assert!(storage.items.get(TOKEN_KEY).is_none());
}

#[test]
fn malformed_token_is_treated_like_an_invalid_one() {
    for token in ["abc", "a.b.c", "a.%%%.c"] {
        let mut storage = MemoryStorage::with(&[(TOKEN_KEY, token)]);
        let decision = check_access(&strict(), &mut storage, "/tutorials/medical-coding", NOW_MS);
        assert!(
            matches!(&decision, GateDecision::Redirect { location, .. }
                if location == "/register?redirect=%2Ftutorials%2Fmedical-coding"),
            "token {token:?} gave {decision:?}"
        );
        assert!(storage.items.is_empty());
    }
}

#[test]
fn custom_register_path_is_used() {
    let policy = AuthPolicy {
        register_path: "/signup".into(),
        ..strict()
    };
    let mut storage = MemoryStorage::default();
    assert!(matches!(
        check_access(&policy, &mut storage, "/sql", NOW_MS),
        GateDecision::Redirect { location, .. } if location == "/signup?redirect=%2Fsql"
    ));
}

// ---------------------------------------------------------------------------
// Acceptance
// ---------------------------------------------------------------------------

#[test]
fn future_or_missing_expiry_is_authenticated() {
    let no_exp = token_with_payload(r#"{"sub":"student@example.com"}"#);
    for token in [exp_in(10), no_exp] {
        let mut storage = MemoryStorage::with(&[(TOKEN_KEY, token.as_str())]);
        let decision = check_access(&strict(), &mut storage, "/sql", NOW_MS);
        assert_eq!(decision, GateDecision::Authenticated(AccessReason::ValidToken));
        assert_eq!(storage.items.get(TOKEN_KEY), Some(&token), "valid token must stay");
    }
}

#[test]
fn registered_visitor_keeps_access_but_loses_bad_token() {
    let token = exp_in(-10);
    let mut storage = MemoryStorage::with(&[
        (TOKEN_KEY, token.as_str()),
        (REGISTERED_EMAIL_KEY, "student@example.com"),
    ]);
    let decision = check_access(&lenient(), &mut storage, "/sql", NOW_MS);
    assert_eq!(decision, GateDecision::Authenticated(AccessReason::RegisteredVisitor));
    assert!(!storage.items.contains_key(TOKEN_KEY));
}

#[test]
fn stored_user_email_is_promoted_to_registered_email() {
    let mut storage = MemoryStorage::with(&[(USER_KEY, r#"{"email":"student@example.com","name":"S"}"#)]);
    let decision = check_access(&lenient(), &mut storage, "/sql", NOW_MS);
    assert_eq!(decision, GateDecision::Authenticated(AccessReason::RegisteredVisitor));
    assert_eq!(
        storage.items.get(REGISTERED_EMAIL_KEY).map(String::as_str),
        Some("student@example.com")
    );
}

#[test]
fn blank_or_unreadable_registration_does_not_count() {
    for (key, value) in [
        (REGISTERED_EMAIL_KEY, "  "),
        (USER_KEY, "{not json"),
        (USER_KEY, r#"{"email":""}"#),
        (USER_KEY, r#"{"name":"no email"}"#),
    ] {
        let mut storage = MemoryStorage::with(&[(key, value)]);
        let decision = check_access(&lenient(), &mut storage, "/sql", NOW_MS);
        assert_eq!(decision.state(), GateState::Redirecting, "{key}={value}");
    }
}
