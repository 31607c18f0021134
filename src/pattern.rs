//! Splitting and classification of path patterns.

use std::str::Split;

/// A segment of a path pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A segment matched as-is.
    Static(&'a str),
    /// A named wildcard (`:name`) which matches exactly one non-empty segment.
    Param(&'a str),
    /// A catch-all parameter (`*name`) which matches the remainder of the path.
    CatchAll(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a segment by its leading character.
    ///
    /// The characters `':'` and `'*'` are only meaningful at the beginning of a
    /// segment; in any other position they are treated as literal characters.
    pub fn parse(segment: &'a str) -> Self {
        match segment.as_bytes().get(0) {
            Some(b':') => Segment::Param(&segment[1..]),
            Some(b'*') => Segment::CatchAll(&segment[1..]),
            _ => Segment::Static(segment),
        }
    }

    /// Returns the parameter name if this segment captures a value.
    pub fn param_name(&self) -> Option<&'a str> {
        match *self {
            Segment::Param(name) | Segment::CatchAll(name) => Some(name),
            Segment::Static(..) => None,
        }
    }
}

/// An iterator over the segments of a path, created by `segments`.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Split<'a, char>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Segment::parse)
    }
}

/// Splits a path into segments, excluding the empty leading segment.
///
/// Returns `None` if the path does not start with `'/'`.
/// The root path `"/"` consists of a single empty segment, and a trailing slash
/// adds an empty segment at the end.
pub fn segments(path: &str) -> Option<Segments<'_>> {
    if !path.starts_with('/') {
        return None;
    }
    Some(Segments {
        inner: path[1..].split('/'),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(path: &str) -> Vec<Segment<'_>> {
        segments(path).expect("invalid path").collect()
    }

    #[test]
    fn root() {
        assert_eq!(collect("/"), vec![Segment::Static("")]);
    }

    #[test]
    fn trailing_slash() {
        assert_eq!(
            collect("/users/"),
            vec![Segment::Static("users"), Segment::Static("")]
        );
    }

    #[test]
    fn mixed() {
        assert_eq!(
            collect("/users/:id/files/*path"),
            vec![
                Segment::Static("users"),
                Segment::Param("id"),
                Segment::Static("files"),
                Segment::CatchAll("path"),
            ]
        );
    }

    #[test]
    fn wildcard_characters_inside_segment() {
        assert_eq!(
            collect("/a:b/c*d"),
            vec![Segment::Static("a:b"), Segment::Static("c*d")]
        );
    }

    #[test]
    fn missing_leading_slash() {
        assert!(segments("users/:id").is_none());
        assert!(segments("").is_none());
    }

    #[test]
    fn param_name() {
        assert_eq!(Segment::parse(":id").param_name(), Some("id"));
        assert_eq!(Segment::parse("*").param_name(), Some(""));
        assert_eq!(Segment::parse("id").param_name(), None);
    }
}
