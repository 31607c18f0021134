use {
    std::{sync::Arc, thread},
    tsukuyomi_router::{Matcher, PatternTrie},
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn matcher_is_send_and_sync() {
    assert_send_sync::<Matcher<String>>();
    assert_send_sync::<Matcher<Arc<dyn Fn() -> u32 + Send + Sync>>>();
}

#[test]
fn concurrent_lookups() {
    let mut trie = PatternTrie::new();
    trie.insert("/users/:id", "user".to_owned()).unwrap();
    trie.insert("/users/:id/posts/:post", "post".to_owned()).unwrap();
    let matcher = Arc::new(trie.compile());

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let matcher = matcher.clone();
            thread::spawn(move || {
                for i in 0..1000 {
                    let path = format!("/users/{}/posts/{}", n, i);
                    let m = matcher.lookup(&path).expect("should match");
                    assert_eq!(m.data(), "post");
                    assert_eq!(m.params().get("id"), Some(n.to_string().as_str()));
                    assert_eq!(m.params().get("post"), Some(i.to_string().as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
