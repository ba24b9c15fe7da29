use error_meta::RequestContext;

#[test]
fn background_is_default_and_empty() {
    let ctx = RequestContext::default();

    assert_eq!(ctx, RequestContext::BACKGROUND);
    assert_eq!(ctx, RequestContext::background());
    assert!(ctx.is_background());
    assert!(ctx.is_empty());
    assert_eq!(ctx.len(), 0);
    assert_eq!(ctx.iter().count(), 0);
}

#[test]
fn with_value_derives_child_without_touching_parent() {
    let parent = RequestContext::background().with_value("request_id", "r-1");
    let child = parent.with_value("tenant", "acme");

    assert_eq!(parent.len(), 1);
    assert_eq!(parent.value("tenant"), None);
    assert_eq!(child.len(), 2);
    assert_eq!(child.value("request_id"), Some("r-1"));
    assert_eq!(child.value("tenant"), Some("acme"));
    assert!(!child.is_background());
}

#[test]
fn newest_value_shadows_older_one() {
    let ctx = RequestContext::background()
        .with_value("attempt", "1")
        .with_value("attempt", "2");

    assert_eq!(ctx.value("attempt"), Some("2"));
    let values: Vec<&str> = ctx.iter().map(|entry| entry.value()).collect();
    assert_eq!(values, ["1", "2"]);
}

#[test]
fn entries_render_as_key_value() {
    let ctx = RequestContext::background().with_value("user_id", 42.to_string());
    let rendered: Vec<String> = (&ctx).into_iter().map(|entry| entry.to_string()).collect();

    assert_eq!(rendered, ["user_id=42"]);
}

#[test]
fn equality_compares_entries() {
    let left = RequestContext::background().with_value("k", "v");
    let right = RequestContext::background().with_value(String::from("k"), String::from("v"));

    assert_eq!(left, right);
    assert_ne!(left, RequestContext::BACKGROUND);
    assert_ne!(left, left.with_value("k", "w"));
}
