use {
    matches::assert_matches,
    tsukuyomi_router::{Config, ErrorKind, OnDuplicate, PatternTrie},
};

#[test]
fn default_is_lenient() {
    let config = Config::default();
    assert_eq!(config.on_duplicate, OnDuplicate::Overwrite);
    assert!(!config.strict_catch_all);
}

#[test]
fn from_json() {
    let config = Config::from_json(r#"{ "on_duplicate": "reject", "strict_catch_all": true }"#)
        .unwrap();
    assert_eq!(
        config,
        Config::new()
            .on_duplicate(OnDuplicate::Reject)
            .strict_catch_all(true)
    );

    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn from_json_invalid() {
    let err = Config::from_json(r#"{ "on_duplicate": "ignore" }"#).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::Custom { .. });
}

#[test]
fn last_insert_wins() {
    let mut trie = PatternTrie::new();
    trie.insert("/about", "old").unwrap();
    trie.insert("/about", "new").unwrap();
    assert_eq!(trie.len(), 1);

    let matcher = trie.compile();
    assert_eq!(*matcher.lookup("/about").unwrap().data(), "new");
}

#[test]
fn reject_duplicate() {
    let mut trie = PatternTrie::with_config(Config::new().on_duplicate(OnDuplicate::Reject));
    trie.insert("/about", "old").unwrap();
    assert!(trie.insert("/about", "new").is_err());

    let matcher = trie.compile();
    assert_eq!(*matcher.lookup("/about").unwrap().data(), "old");
}

#[test]
fn truncated_catch_all() {
    let mut trie = PatternTrie::new();
    trie.insert("/files/*path/ignored", "files").unwrap();

    let matcher = trie.compile();
    let m = matcher.lookup("/files/a/ignored").unwrap();
    assert_eq!(m.params().get("path"), Some("a/ignored"));

    let mut strict = PatternTrie::with_config(Config::new().strict_catch_all(true));
    let err = strict.insert("/files/*path/ignored", "files").unwrap_err();
    assert_matches!(err.into_kind(), ErrorKind::CatchAllNotLast { .. });
}
