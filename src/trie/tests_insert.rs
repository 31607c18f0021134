use {
    super::PatternTrie,
    crate::{
        config::{Config, OnDuplicate},
        error::ErrorKind,
        matcher::Matcher,
    },
    matches::assert_matches,
};

fn st(text: &str, depth: usize, child: Matcher<usize>) -> Matcher<usize> {
    Matcher::Static {
        text: text.into(),
        depth,
        child: Box::new(child),
    }
}

macro_rules! t {
    ($test:ident, [$($path:expr),*], $expected:expr) => {
        #[test]
        fn $test() {
            let mut trie = PatternTrie::new();
            for (i, path) in [$($path),*].iter().enumerate() {
                trie.insert(path, i).unwrap();
            }
            assert_eq!(trie.compile(), $expected);
        }
    };
    ($test:ident, [$($path:expr,)+], $expected:expr) => {
        t!($test, [$($path),*], $expected);
    };
}

#[test]
fn empty() {
    let trie = PatternTrie::<usize>::new();
    assert!(trie.is_empty());
    assert_eq!(trie.compile(), Matcher::Data(None));
}

t!(case1, ["/foo"], st("/foo", 3, Matcher::data(0)));

t!(case_root, ["/"], st("/", 3, Matcher::data(0)));

t!(
    case2,
    ["/foo", "/bar"],
    st(
        "/",
        3,
        Matcher::table(vec![("foo", Matcher::data(0)), ("bar", Matcher::data(1))]),
    )
);

t!(
    case3_nested_literals,
    ["/foo/bar/baz"],
    st("/foo/bar/baz", 7, Matcher::data(0))
);

t!(
    param_case1,
    ["/:id"],
    st("/", 3, Matcher::wild("id", Matcher::data(0)))
);

t!(
    param_case2,
    ["/users/:id", "/users/static"],
    st(
        "/users/",
        5,
        Matcher::Alternatives(vec![
            st("static", 2, Matcher::data(1)),
            Matcher::wild("id", Matcher::data(0)),
        ]),
    )
);

t!(
    param_case3_deeper_wildcard_first,
    ["/a/static", "/a/:x/y"],
    st(
        "/a/",
        7,
        Matcher::Alternatives(vec![
            Matcher::wild("x", st("/y", 3, Matcher::data(1))),
            st("static", 2, Matcher::data(0)),
        ]),
    )
);

t!(
    catch_all_case1,
    ["/*path"],
    st("/", 2, Matcher::catch_all("path", 0))
);

t!(
    catch_all_case2,
    ["/files", "/files/*path"],
    st(
        "/files",
        4,
        Matcher::Alternatives(vec![
            st("/", 2, Matcher::catch_all("path", 1)),
            Matcher::data(0),
        ]),
    )
);

t!(
    catch_all_case3_lowest_priority,
    ["/files/*path", "/files/"],
    st(
        "/files/",
        5,
        Matcher::Alternatives(vec![
            st("", 2, Matcher::data(1)),
            Matcher::catch_all("path", 0),
        ]),
    )
);

#[test]
fn insert_builds_segment_nodes() {
    let mut trie = PatternTrie::new();
    trie.insert("/users/:id/files/*path", 0).unwrap();
    trie.insert("/users/:id", 1).unwrap();

    let users = &trie.root.literals["users"];
    assert_eq!(users.data, None);
    let id = &users.params["id"];
    assert_eq!(id.data, Some(1));
    let files = &id.literals["files"];
    assert_eq!(files.catch_alls["path"].data, Some(0));
    assert_eq!(trie.len(), 2);
}

#[test]
fn prefix_pattern_shares_node() {
    let mut trie = PatternTrie::new();
    trie.insert("/a", 0).unwrap();
    trie.insert("/a/b", 1).unwrap();

    let a = &trie.root.literals["a"];
    assert_eq!(a.data, Some(0));
    assert_eq!(a.literals["b"].data, Some(1));
}

#[test]
fn different_param_names_are_kept() {
    let mut trie = PatternTrie::new();
    trie.insert("/:id", 0).unwrap();
    trie.insert("/:name", 1).unwrap();

    assert_eq!(trie.root.params.len(), 2);
    assert_eq!(trie.len(), 2);
}

#[test]
fn duplicate_overwrites_by_default() {
    let mut trie = PatternTrie::new();
    trie.insert("/a/:id", 0).unwrap();
    trie.insert("/a/:id", 1).unwrap();

    assert_eq!(trie.len(), 1);
    assert_eq!(trie.root.literals["a"].params["id"].data, Some(1));
}

#[test]
fn duplicate_rejected() {
    let mut trie = PatternTrie::with_config(Config::new().on_duplicate(OnDuplicate::Reject));
    trie.insert("/a/:id", 0).unwrap();

    let err = trie.insert("/a/:id", 1).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::DuplicatePattern { .. });
    assert_eq!(trie.root.literals["a"].params["id"].data, Some(0));
}

#[test]
fn segments_after_catch_all_are_ignored() {
    let mut trie = PatternTrie::new();
    trie.insert("/files/*path/extra", 0).unwrap();

    let files = &trie.root.literals["files"];
    assert_eq!(files.catch_alls["path"].data, Some(0));
    assert!(files.catch_alls["path"].literals.is_empty());
}

#[test]
fn segments_after_catch_all_are_rejected_in_strict_mode() {
    let mut trie = PatternTrie::with_config(Config::new().strict_catch_all(true));

    let err = trie.insert("/files/*path/extra", 0).unwrap_err();
    assert_matches!(err.kind(), ErrorKind::CatchAllNotLast { .. });
    assert!(trie.is_empty());
    assert!(trie.root.literals.is_empty());
}

#[test]
fn failcase_missing_leading_slash() {
    let mut trie = PatternTrie::new();
    assert_matches!(
        trie.insert("users", 0).unwrap_err().kind(),
        ErrorKind::MissingLeadingSlash { .. }
    );
    assert_matches!(
        trie.insert("", 0).unwrap_err().kind(),
        ErrorKind::MissingLeadingSlash { .. }
    );
}

#[test]
fn failcase_empty_param_name() {
    let mut trie = PatternTrie::new();
    assert_matches!(
        trie.insert("/users/:", 0).unwrap_err().kind(),
        ErrorKind::EmptyParamName { .. }
    );
    assert_matches!(
        trie.insert("/*", 0).unwrap_err().kind(),
        ErrorKind::EmptyParamName { .. }
    );
    assert!(trie.root.literals.is_empty());
}

#[test]
fn compile_is_deterministic() {
    let mut trie = PatternTrie::new();
    for (i, path) in [
        "/",
        "/users",
        "/users/:id",
        "/users/:id/posts/:post",
        "/users/me",
        "/files/*path",
        "/files/readme",
        "/:lang/docs",
    ]
    .iter()
    .enumerate()
    {
        trie.insert(path, i).unwrap();
    }

    assert_eq!(trie.compile(), trie.compile());
}
