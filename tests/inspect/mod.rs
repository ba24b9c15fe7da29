use core::error::Error;
use error_meta::inspect::{
    chain, custom_code_of, find, find_enriched, http_code_of, is, is_same,
};
use error_meta::{
    new, with_custom_code, with_http_code, wrap_error, EnrichedError, MessageError,
    PrefixedError,
};

#[test]
fn chain_walks_outermost_first() {
    let err = wrap_error(new("root", [with_http_code(404)]), "outer", []);

    let messages: Vec<String> = chain(&*err).map(|link| link.to_string()).collect();
    assert_eq!(messages, ["root: outer", "root"]);
}

#[test]
fn chain_is_fused() {
    let err = MessageError::new("only");
    let mut links = chain(&err);

    assert!(links.next().is_some());
    assert!(links.next().is_none());
    assert!(links.next().is_none());
}

#[test]
fn find_extracts_first_matching_type() {
    let err = wrap_error(std::io::Error::other("refused"), "calling billing", [with_http_code(502)]);

    assert_eq!(find::<std::io::Error>(&*err).unwrap().to_string(), "refused");
    assert_eq!(find::<PrefixedError>(&*err).unwrap().message(), "calling billing");
    assert!(find::<MessageError>(&*err).is_none());
}

#[test]
fn find_enriched_returns_outermost() {
    let err = wrap_error(new("inner", [with_http_code(404)]), "outer", [with_custom_code(3)]);

    let outer = find_enriched(&*err).unwrap();
    assert_eq!(outer.message(), "outer");
    assert_eq!(outer.custom_code(), 3);
}

#[test]
fn is_matches_by_equality_anywhere_in_chain() {
    let err = wrap_error(MessageError::new("sentinel"), "outer", [with_http_code(500)]);

    assert!(is(&*err, &MessageError::new("sentinel")));
    assert!(!is(&*err, &MessageError::new("other")));
    assert!(!is(&*err, &EnrichedError::new("outer")));
}

#[test]
fn is_same_matches_by_identity() {
    let err = wrap_error(new("m1", [with_http_code(404)]), "m2", []);
    let inner: &(dyn Error + 'static) = find_enriched(&*err).unwrap().cause().unwrap();
    let lookalike = EnrichedError::new("m1").with_http_code(404);

    assert!(is_same(&*err, inner));
    assert!(!is_same(&*err, &lookalike));
    assert!(is(&*err, &lookalike));
}

#[test]
fn code_lookups_use_nearest_link_that_set_one() {
    let err = wrap_error(
        new("row missing", [with_http_code(404), with_custom_code(17)]),
        "loading user",
        [with_custom_code(99)],
    );

    assert_eq!(http_code_of(&*err), 404);
    assert_eq!(custom_code_of(&*err), 99);
}

#[test]
fn code_lookups_default_to_zero() {
    let plain = MessageError::new("plain");
    let unset = EnrichedError::new("unset");

    assert_eq!(http_code_of(&plain), 0);
    assert_eq!(custom_code_of(&plain), 0);
    assert_eq!(http_code_of(&unset), 0);
    assert_eq!(custom_code_of(&unset), 0);
}

#[test]
fn find_enriched_sees_through_boxed_link() {
    let inner = Box::new(EnrichedError::new("db down").with_http_code(503));
    let err = PrefixedError::new("loading user", inner);

    assert_eq!(find_enriched(&err).map(|e| e.message()), Some("db down"));
    assert_eq!(http_code_of(&err), 503);
    assert!(find::<EnrichedError>(&err).is_none());
}
