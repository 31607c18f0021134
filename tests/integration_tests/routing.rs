use tsukuyomi_router::{Matcher, PatternTrie};

#[derive(Debug, Clone, PartialEq)]
enum Route {
    Index,
    User,
    UserStatic,
    Files,
    Search,
}

fn matcher() -> Matcher<Route> {
    let mut trie = PatternTrie::new();
    trie.insert("/", Route::Index).unwrap();
    trie.insert("/users/:id", Route::User).unwrap();
    trie.insert("/users/static", Route::UserStatic).unwrap();
    trie.insert("/files/*path", Route::Files).unwrap();
    trie.insert("/search/:q", Route::Search).unwrap();
    trie.compile()
}

#[test]
fn static_pattern_has_no_params() {
    let matcher = matcher();

    for &(path, ref route) in &[("/", Route::Index), ("/users/static", Route::UserStatic)] {
        let m = matcher.lookup(path).unwrap();
        assert_eq!(m.data(), route);
        assert!(m.params().is_empty());
    }
}

#[test]
fn named_wildcard() {
    let matcher = matcher();

    let m = matcher.lookup("/users/42").unwrap();
    assert_eq!(*m.data(), Route::User);
    assert_eq!(m.params().len(), 1);
    assert_eq!(&m.params()["id"], "42");

    assert!(matcher.lookup("/users/").is_none());
}

#[test]
fn catch_all() {
    let matcher = matcher();

    let (params, data) = matcher.lookup("/files/a/b/c").unwrap().into_parts();
    assert_eq!(*data, Route::Files);
    assert_eq!(params.get("path"), Some("a/b/c"));
}

#[test]
fn literal_wins_over_wildcard() {
    let matcher = matcher();

    let m = matcher.lookup("/users/static").unwrap();
    assert_eq!(*m.data(), Route::UserStatic);
    assert!(!m.params().contains_key("id"));
}

#[test]
fn plus_sign_is_preserved() {
    let matcher = matcher();

    for path in &["/search/a%2Bb", "/search/a+b"] {
        let m = matcher.lookup(path).unwrap();
        assert_eq!(*m.data(), Route::Search);
        assert_eq!(m.params().get("q"), Some("a+b"));
    }
}

#[test]
fn negative_space() {
    let matcher = matcher();

    for path in &["", "/us", "/users", "/users/42/extra", "/search", "/unknown", "users/42"] {
        assert!(matcher.lookup(path).is_none(), "{:?} should not match", path);
    }
}

#[test]
fn recompiled_matcher_behaves_identically() {
    let mut trie = PatternTrie::new();
    trie.insert("/users/:id", 0).unwrap();
    trie.insert("/users/:id/posts/:post", 1).unwrap();
    trie.insert("/users/me", 2).unwrap();
    trie.insert("/assets/*path", 3).unwrap();

    let first = trie.compile();
    let second = trie.compile();
    assert_eq!(first, second);

    for path in &[
        "/users/1",
        "/users/me",
        "/users/1/posts/2",
        "/users/me/posts/2",
        "/assets/",
        "/assets/js/app.js",
        "/nothing",
    ] {
        let lhs = first.lookup(path);
        let rhs = second.lookup(path);
        assert_eq!(
            lhs.as_ref().map(|m| (*m.data(), m.params().clone())),
            rhs.as_ref().map(|m| (*m.data(), m.params().clone())),
        );
    }
}
