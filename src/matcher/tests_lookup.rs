use {super::Matcher, crate::trie::PatternTrie};

fn compile(paths: &[&str]) -> Matcher<usize> {
    let mut trie = PatternTrie::new();
    for (i, path) in paths.iter().enumerate() {
        trie.insert(path, i).unwrap();
    }
    trie.compile()
}

fn lookup<'a>(matcher: &'a Matcher<usize>, path: &'a str) -> Option<(usize, Vec<(&'a str, String)>)> {
    let m = matcher.lookup(path)?;
    let mut params: Vec<_> = m
        .params()
        .iter()
        .map(|(name, value)| (name, value.to_owned()))
        .collect();
    params.sort();
    Some((*m.data(), params))
}

#[test]
fn case1_static() {
    let matcher = compile(&["/", "/foo", "/foo/bar"]);

    assert_eq!(lookup(&matcher, "/"), Some((0, vec![])));
    assert_eq!(lookup(&matcher, "/foo"), Some((1, vec![])));
    assert_eq!(lookup(&matcher, "/foo/bar"), Some((2, vec![])));
    assert_eq!(lookup(&matcher, "/foo/"), None);
    assert_eq!(lookup(&matcher, "/fo"), None);
    assert_eq!(lookup(&matcher, "/foobar"), None);
    assert_eq!(lookup(&matcher, "/foo/bar/baz"), None);
    assert_eq!(lookup(&matcher, ""), None);
}

#[test]
fn case2_multi_param() {
    let matcher = compile(&["/files/:name/:id"]);

    assert_eq!(
        lookup(&matcher, "/files/readme/0"),
        Some((0, vec![("id", "0".into()), ("name", "readme".into())]))
    );
    assert_eq!(lookup(&matcher, "/files/readme"), None);
    assert_eq!(lookup(&matcher, "/files/readme/"), None);
    assert_eq!(lookup(&matcher, "/files//0"), None);
}

#[test]
fn case3_wildcard_root() {
    let matcher = compile(&["/*path"]);

    assert_eq!(
        lookup(&matcher, "/path/to/readme.txt"),
        Some((0, vec![("path", "path/to/readme.txt".into())]))
    );
}

#[test]
fn case4_wildcard_subdir() {
    let matcher = compile(&["/path/to/*path"]);

    assert_eq!(
        lookup(&matcher, "/path/to/readme.txt"),
        Some((0, vec![("path", "readme.txt".into())]))
    );
    assert_eq!(lookup(&matcher, "/path/to"), None);
}

#[test]
fn case5_wildcard_empty_root() {
    let matcher = compile(&["/*path"]);

    assert_eq!(lookup(&matcher, "/"), Some((0, vec![("path", "".into())])));
}

#[test]
fn case6_wildcard_empty_subdir() {
    let matcher = compile(&["/path/to/*path"]);

    assert_eq!(
        lookup(&matcher, "/path/to/"),
        Some((0, vec![("path", "".into())]))
    );
}

#[test]
fn case7_wildcard_empty_with_param() {
    let matcher = compile(&["/path/to/:id/*path"]);

    assert_eq!(
        lookup(&matcher, "/path/to/10/"),
        Some((0, vec![("id", "10".into()), ("path", "".into())]))
    );
}

#[test]
fn static_preferred_over_param() {
    let matcher = compile(&["/users/:id", "/users/static"]);

    assert_eq!(lookup(&matcher, "/users/static"), Some((1, vec![])));
    assert_eq!(
        lookup(&matcher, "/users/42"),
        Some((0, vec![("id", "42".into())]))
    );
    assert_eq!(lookup(&matcher, "/users/"), None);
}

#[test]
fn backtrack_from_deeper_param() {
    let matcher = compile(&["/a/static", "/a/:x/y"]);

    assert_eq!(lookup(&matcher, "/a/static"), Some((0, vec![])));
    assert_eq!(
        lookup(&matcher, "/a/static/y"),
        Some((1, vec![("x", "static".into())]))
    );
    assert_eq!(lookup(&matcher, "/a/other"), None);
}

#[test]
fn data_on_prefix_node() {
    let matcher = compile(&["/files", "/files/*path", "/users/:id", "/users/:id/posts"]);

    assert_eq!(lookup(&matcher, "/files"), Some((0, vec![])));
    assert_eq!(
        lookup(&matcher, "/files/a/b/c"),
        Some((1, vec![("path", "a/b/c".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/users/1"),
        Some((2, vec![("id", "1".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/users/1/posts"),
        Some((3, vec![("id", "1".into())]))
    );
}

#[test]
fn catch_all_is_the_last_resort() {
    let matcher = compile(&["/files/*path", "/files/", "/files/:name/raw"]);

    assert_eq!(lookup(&matcher, "/files/"), Some((1, vec![])));
    assert_eq!(
        lookup(&matcher, "/files/readme/raw"),
        Some((2, vec![("name", "readme".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/files/readme"),
        Some((0, vec![("path", "readme".into())]))
    );
}

#[test]
fn earliest_param_name_wins_at_same_position() {
    let matcher = compile(&["/:id", "/:name"]);

    assert_eq!(lookup(&matcher, "/42"), Some((0, vec![("id", "42".into())])));
}

#[test]
fn innermost_capture_wins_on_name_collision() {
    let matcher = compile(&["/a/:id/b/:id"]);

    assert_eq!(
        lookup(&matcher, "/a/1/b/2"),
        Some((0, vec![("id", "2".into())]))
    );
}

#[test]
fn static_table_dispatch() {
    let matcher = compile(&["/auth/login", "/auth/recovery", "/auth/", "/auth/:provider"]);

    assert_eq!(lookup(&matcher, "/auth/login"), Some((0, vec![])));
    assert_eq!(lookup(&matcher, "/auth/recovery"), Some((1, vec![])));
    assert_eq!(lookup(&matcher, "/auth/"), Some((2, vec![])));
    assert_eq!(
        lookup(&matcher, "/auth/github"),
        Some((3, vec![("provider", "github".into())]))
    );
    assert_eq!(lookup(&matcher, "/auth/login/x"), None);
}

#[test]
fn percent_decoded_params() {
    let matcher = compile(&["/search/:q", "/files/*path"]);

    assert_eq!(
        lookup(&matcher, "/search/a%2Bb"),
        Some((0, vec![("q", "a+b".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/search/a+b"),
        Some((0, vec![("q", "a+b".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/search/a+b%20c"),
        Some((0, vec![("q", "a+b c".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/search/100%"),
        Some((0, vec![("q", "100%".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/files/my%20docs/a.txt"),
        Some((1, vec![("path", "my docs/a.txt".into())]))
    );
}

#[test]
fn encoded_separator_stays_in_segment() {
    let matcher = compile(&["/search/:q"]);

    assert_eq!(
        lookup(&matcher, "/search/a%2Fb"),
        Some((0, vec![("q", "a/b".into())]))
    );
}

#[test]
fn non_ascii_path() {
    let matcher = compile(&["/caf\u{e9}/:x"]);

    assert_eq!(
        lookup(&matcher, "/caf\u{e9}/%C3%A9"),
        Some((0, vec![("x", "\u{e9}".into())]))
    );
    assert_eq!(lookup(&matcher, "/cafe/x"), None);
}

#[test]
fn empty_matcher_never_matches() {
    let matcher = compile(&[]);

    assert_eq!(lookup(&matcher, ""), None);
    assert_eq!(lookup(&matcher, "/"), None);
}

#[test]
fn hand_built_matcher() {
    let matcher = Matcher::literal(
        "/auth/",
        Matcher::table(vec![
            ("login", Matcher::data(1)),
            ("recovery", Matcher::data(2)),
        ]),
    );

    assert_eq!(lookup(&matcher, "/auth/login"), Some((1, vec![])));
    assert_eq!(lookup(&matcher, "/auth/recovery"), Some((2, vec![])));
    assert_eq!(lookup(&matcher, "/auth/other"), None);
}

#[test]
fn alternatives_put_catch_all_last() {
    let matcher = Matcher::alternatives(vec![
        Matcher::literal("/", Matcher::catch_all("rest", 0)),
        Matcher::literal("/ping", Matcher::data(1)),
        Matcher::literal("/", Matcher::wild("id", Matcher::literal("/ping", Matcher::data(2)))),
    ]);

    assert_eq!(lookup(&matcher, "/ping"), Some((1, vec![])));
    assert_eq!(
        lookup(&matcher, "/kikka/ping"),
        Some((2, vec![("id", "kikka".into())]))
    );
    assert_eq!(
        lookup(&matcher, "/kikka"),
        Some((0, vec![("rest", "kikka".into())]))
    );

    let matcher = Matcher::alternatives(vec![Matcher::catch_all("rest", 0), Matcher::data(1)]);
    match matcher {
        Matcher::Alternatives(ref matchers) => {
            assert_eq!(matchers[0], Matcher::data(1));
        }
        ref m => panic!("unexpected matcher: {:?}", m),
    }
    assert_eq!(lookup(&matcher, ""), Some((1, vec![])));
    assert_eq!(
        lookup(&matcher, "x"),
        Some((0, vec![("rest", "x".into())]))
    );
}

#[test]
fn single_alternative_is_unwrapped() {
    assert_eq!(
        Matcher::alternatives(vec![Matcher::data(0)]),
        Matcher::data(0)
    );
    assert_eq!(Matcher::<usize>::alternatives(vec![]), Matcher::Data(None));
}

#[test]
fn depth_and_literal_len() {
    let matcher = Matcher::literal("/users/", Matcher::wild("id", Matcher::data(0)));
    assert_eq!(matcher.depth(), 3);
    assert_eq!(matcher.literal_len(), 7);

    let folded = Matcher::literal("/", Matcher::literal("users", Matcher::data(0)));
    assert_eq!(folded.depth(), 3);
    assert_eq!(folded.literal_len(), 6);

    assert_eq!(Matcher::catch_all("path", 0).depth(), 1);
    assert_eq!(Matcher::catch_all("path", 0).literal_len(), 0);
}
