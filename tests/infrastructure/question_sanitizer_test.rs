use tawau::infrastructure::observability::sanitize_question;

#[test]
fn given_empty_question_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_question(""), "[EMPTY]");
    assert_eq!(sanitize_question("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_unchanged() {
    let question = "Which city appears most often?";
    assert_eq!(sanitize_question(question), question);
}

#[test]
fn given_long_question_when_sanitizing_then_truncates_with_length() {
    let question = "a".repeat(200);
    let result = sanitize_question(&question);
    assert!(result.contains("... (200 chars total)"));
    assert!(result.starts_with(&"a".repeat(120)));
}

#[test]
fn given_multibyte_question_when_sanitizing_then_never_splits_a_char() {
    let question = "é".repeat(200);
    let result = sanitize_question(&question);
    assert!(result.starts_with(&"é".repeat(120)));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let question = "Authorization: Bearer sk-abc123xyz";
    let result = sanitize_question(question);
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_key() {
    let question = "Send request with api_key=secret123";
    let result = sanitize_question(question);
    assert!(result.contains("api_key=[REDACTED]"));
    assert!(!result.contains("secret123"));
}

#[test]
fn given_whitespace_padded_question_when_sanitizing_then_trims() {
    assert_eq!(sanitize_question("  Hello world  "), "Hello world");
}
