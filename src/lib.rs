//! A path matcher compiled from a trie of path patterns.
//!
//! The patterns consist of segments separated by `'/'`:
//!
//! * a literal segment (`users`) matches the same text,
//! * a named wildcard (`:id`) matches exactly one non-empty segment,
//! * a catch-all (`*path`) matches the remainder of the path and must be
//!   located at the end of the pattern.
//!
//! The patterns are registered into a `PatternTrie` and compiled into an
//! immutable `Matcher`, which can be shared among threads.
//!
//! ```
//! # use tsukuyomi_router::PatternTrie;
//! let mut trie = PatternTrie::new();
//! trie.insert("/users/:id", "user").unwrap();
//! trie.insert("/users/me", "me").unwrap();
//! trie.insert("/static/*path", "static").unwrap();
//! let matcher = trie.compile();
//!
//! let m = matcher.lookup("/users/42").unwrap();
//! assert_eq!(*m.data(), "user");
//! assert_eq!(m.params().get("id"), Some("42"));
//!
//! assert_eq!(*matcher.lookup("/users/me").unwrap().data(), "me");
//!
//! let m = matcher.lookup("/static/css/main%2Ecss").unwrap();
//! assert_eq!(m.params().get("path"), Some("css/main.css"));
//!
//! assert!(matcher.lookup("/users/42/posts").is_none());
//! ```

#![doc(html_root_url = "https://docs.rs/tsukuyomi-router/0.4.0-dev")]
#![warn(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2018_compatibility,
    unused
)]

mod config;
mod decode;
mod error;
mod matcher;
pub mod pattern;
mod trie;

pub use crate::{
    config::{Config, OnDuplicate},
    decode::decode,
    error::{Error, ErrorKind, Result},
    matcher::{Match, Matcher, Params},
    trie::PatternTrie,
};
