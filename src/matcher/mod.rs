//! The compiled matcher tree.
//!
//! A `Matcher` is produced once by `PatternTrie::compile` and is never mutated
//! afterwards. The lookup only reads the tree and writes into a parameter set
//! owned by the caller, so the same matcher can be shared among threads.
//!
//! The path is walked as a flat sequence of bytes with a cursor; no segment
//! list is materialized during the lookup.

mod params;
#[cfg(test)]
#[path = "tests_lookup.rs"]
mod tests;

pub use self::params::{Match, Params};

use {
    crate::decode::{decode, decode_flagged},
    indexmap::IndexMap,
    std::cmp::Reverse,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Matcher<T> {
    /// A literal prefix followed by a continuation.
    Static {
        text: Box<str>,
        /// The depth of the chain of literals folded into `text`.
        depth: usize,
        child: Box<Matcher<T>>,
    },

    /// A dispatch table keyed by the whole text of the next segment.
    StaticTable(IndexMap<Box<str>, Matcher<T>>),

    /// A named wildcard which consumes a non-empty segment.
    Wild { name: Box<str>, child: Box<Matcher<T>> },

    /// A terminal which consumes the remainder of the path.
    CatchAll { name: Box<str>, data: T },

    /// A terminal which matches only at the end of the path.
    ///
    /// `Data(None)` is the matcher of an empty trie and never matches.
    Data(Option<T>),

    /// A set of matchers tried in order; the first success wins.
    Alternatives(Vec<Matcher<T>>),
}

impl<T> Matcher<T> {
    /// Creates a literal matcher.
    ///
    /// When `child` is also a literal matcher, the two are folded into a single node.
    pub fn literal(text: impl Into<String>, child: Matcher<T>) -> Self {
        let mut text = text.into();
        match child {
            Matcher::Static {
                text: rest,
                depth,
                child,
            } => {
                text.push_str(&rest);
                Matcher::Static {
                    text: text.into_boxed_str(),
                    depth: depth + 1,
                    child,
                }
            }
            child => Matcher::Static {
                text: text.into_boxed_str(),
                depth: child.depth() + 1,
                child: Box::new(child),
            },
        }
    }

    pub fn table<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Matcher<T>)>,
        S: Into<Box<str>>,
    {
        Matcher::StaticTable(
            entries
                .into_iter()
                .map(|(text, child)| (text.into(), child))
                .collect(),
        )
    }

    pub fn wild(name: impl Into<Box<str>>, child: Matcher<T>) -> Self {
        Matcher::Wild {
            name: name.into(),
            child: Box::new(child),
        }
    }

    pub fn catch_all(name: impl Into<Box<str>>, data: T) -> Self {
        Matcher::CatchAll {
            name: name.into(),
            data,
        }
    }

    pub fn data(data: T) -> Self {
        Matcher::Data(Some(data))
    }

    /// Combines a set of matchers into one, ordered by precedence.
    ///
    /// The matchers are sorted in descending order of the depth, and then of the
    /// length of leading literal. Equivalent matchers keep the given order.
    /// Catch-all matchers are always placed after the other ones.
    ///
    /// No wrapper is created if `matchers` contains only one element, and an
    /// empty set results in a matcher which never matches.
    pub fn alternatives(mut matchers: Vec<Matcher<T>>) -> Self {
        match matchers.len() {
            0 => Matcher::Data(None),
            1 => matchers.remove(0),
            _ => {
                matchers.sort_by_cached_key(|m| {
                    (m.is_catch_all(), Reverse(m.depth()), Reverse(m.literal_len()))
                });
                Matcher::Alternatives(matchers)
            }
        }
    }

    /// Returns the length of the longest chain of consuming nodes below this matcher.
    pub fn depth(&self) -> usize {
        match *self {
            Matcher::Static { depth, .. } => depth,
            Matcher::StaticTable(ref table) => {
                table.values().map(Matcher::depth).max().unwrap_or(0) + 1
            }
            Matcher::Wild { ref child, .. } => child.depth() + 1,
            Matcher::CatchAll { .. } | Matcher::Data(..) => 1,
            Matcher::Alternatives(ref matchers) => {
                matchers.iter().map(Matcher::depth).max().unwrap_or(0)
            }
        }
    }

    /// Returns the length of leading literal text, or zero if this is not a literal matcher.
    pub fn literal_len(&self) -> usize {
        match *self {
            Matcher::Static { ref text, .. } => text.len(),
            _ => 0,
        }
    }

    fn is_catch_all(&self) -> bool {
        match *self {
            Matcher::CatchAll { .. } => true,
            _ => false,
        }
    }

    /// Traverses the given path and returns the matched payload with the extracted parameters.
    ///
    /// The path is assumed to begin with `'/'`.
    pub fn lookup<'a>(&'a self, path: &'a str) -> Option<Match<'a, T>> {
        let mut params = Params::default();
        let data = self.find(path, 0, &mut params)?;
        Some(Match { params, data })
    }

    fn find<'a>(&'a self, path: &'a str, i: usize, params: &mut Params<'a>) -> Option<&'a T> {
        let bytes = path.as_bytes();
        let max = bytes.len();
        match *self {
            Matcher::Static {
                ref text,
                ref child,
                ..
            } => {
                let end = i + text.len();
                if end > max || bytes[i..end] != *text.as_bytes() {
                    return None;
                }
                child.find(path, end, params)
            }

            Matcher::StaticTable(ref table) => {
                let end = find_segment_end(bytes, i);
                table.get(&path[i..end])?.find(path, end, params)
            }

            Matcher::Wild {
                ref name,
                ref child,
            } => {
                if i >= max || bytes[i] == b'/' {
                    return None;
                }
                let mut end = max;
                let mut has_percent = false;
                for (j, &b) in bytes[i..].iter().enumerate() {
                    match b {
                        b'/' => {
                            end = i + j;
                            break;
                        }
                        b'%' => has_percent = true,
                        _ => {}
                    }
                }
                let data = child.find(path, end, params)?;
                params.insert_if_absent(name, decode_flagged(&path[i..end], has_percent));
                Some(data)
            }

            Matcher::CatchAll { ref name, ref data } => {
                if i > max {
                    return None;
                }
                params.insert_if_absent(name, decode(&path[i..]));
                Some(data)
            }

            Matcher::Data(ref data) => {
                if i == max {
                    data.as_ref()
                } else {
                    None
                }
            }

            Matcher::Alternatives(ref matchers) => {
                matchers.iter().find_map(|m| m.find(path, i, params))
            }
        }
    }
}

fn find_segment_end(bytes: &[u8], offset: usize) -> usize {
    bytes[offset..]
        .iter()
        .position(|&b| b == b'/')
        .map_or(bytes.len(), |pos| offset + pos)
}
