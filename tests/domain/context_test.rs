use tawau::domain::Context;

#[test]
fn given_text_under_budget_when_constructing_then_text_is_unchanged() {
    let context = Context::new("short".to_string(), 100);

    assert_eq!(context.as_str(), "short");
}

#[test]
fn given_text_over_budget_when_constructing_then_hard_cut_at_budget() {
    let context = Context::new("a".repeat(50), 10);

    assert_eq!(context.char_len(), 10);
    assert_eq!(context.as_str(), "a".repeat(10));
}

#[test]
fn given_multibyte_text_when_truncating_then_never_splits_a_char() {
    let context = Context::new("é".repeat(20), 7);

    assert_eq!(context.char_len(), 7);
    assert_eq!(context.as_str(), "é".repeat(7));
}
