//! The mutable index of path patterns.

mod compile;
#[cfg(test)]
#[path = "tests_insert.rs"]
mod tests;

use {
    crate::{
        config::{Config, OnDuplicate},
        error::{ErrorKind, Result},
        matcher::Matcher,
        pattern::{self, Segment},
    },
    indexmap::IndexMap,
};

#[derive(Debug, Clone, PartialEq)]
struct Node<T> {
    literals: IndexMap<String, Node<T>>,
    params: IndexMap<String, Node<T>>,
    catch_alls: IndexMap<String, Node<T>>,
    data: Option<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            literals: IndexMap::new(),
            params: IndexMap::new(),
            catch_alls: IndexMap::new(),
            data: None,
        }
    }
}

/// A builder of `Matcher`.
///
/// The patterns are registered one at a time with `insert`, and then the trie
/// is converted into an immutable `Matcher` by `compile`.
///
/// # Registration policies
///
/// * A catch-all segment terminates the pattern: the segments after it are
///   ignored, or rejected when `Config::strict_catch_all` is enabled.
/// * Registering the same pattern twice replaces the previous payload
///   (last insertion wins), unless `Config::on_duplicate` is `Reject`.
/// * Two different parameter names (or two catch-alls) at the same position
///   are both stored. The ambiguity is resolved by the precedence of the
///   compiled matcher, in which the earliest registration wins among equivalent
///   candidates.
#[derive(Debug, Clone)]
pub struct PatternTrie<T> {
    root: Node<T>,
    config: Config,
    len: usize,
}

impl<T> Default for PatternTrie<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> PatternTrie<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            root: Node::default(),
            config,
            len: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of the registered patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Registers a pattern with the associated payload.
    pub fn insert(&mut self, pattern: &str, data: T) -> Result<()> {
        let path = self.parse(pattern)?;

        let mut n = &mut self.root;
        for segment in path {
            let (children, key) = match segment {
                Segment::Static(s) => (&mut n.literals, s),
                Segment::Param(name) => (&mut n.params, name),
                Segment::CatchAll(name) => (&mut n.catch_alls, name),
            };
            n = children.entry(key.to_owned()).or_insert_with(Node::default);
        }

        if n.data.is_some() {
            if self.config.on_duplicate == OnDuplicate::Reject {
                return Err(ErrorKind::DuplicatePattern {
                    pattern: pattern.to_owned(),
                }
                .into());
            }
            log::warn!("the payload of {:?} is overwritten", pattern);
        } else {
            self.len += 1;
        }
        n.data = Some(data);

        log::trace!("insert a pattern: {:?}", pattern);
        Ok(())
    }

    /// Validates a pattern and returns its segments up to the catch-all parameter.
    ///
    /// No node is created until the whole pattern has been validated.
    fn parse<'p>(&self, pattern: &'p str) -> Result<Vec<Segment<'p>>> {
        let mut segments =
            pattern::segments(pattern).ok_or_else(|| ErrorKind::MissingLeadingSlash {
                pattern: pattern.to_owned(),
            })?;

        let mut path = vec![];
        while let Some(segment) = segments.next() {
            if segment.param_name().map_or(false, str::is_empty) {
                return Err(ErrorKind::EmptyParamName {
                    pattern: pattern.to_owned(),
                }
                .into());
            }
            path.push(segment);

            if let Segment::CatchAll(..) = segment {
                if segments.next().is_some() {
                    if self.config.strict_catch_all {
                        return Err(ErrorKind::CatchAllNotLast {
                            pattern: pattern.to_owned(),
                        }
                        .into());
                    }
                    log::warn!(
                        "the segments after the catch-all parameter are ignored: {:?}",
                        pattern
                    );
                }
                break;
            }
        }

        Ok(path)
    }

    /// Compiles the registered patterns into a `Matcher`.
    ///
    /// The trie is left untouched, so compiling it again yields the equivalent matcher.
    pub fn compile(&self) -> Matcher<T>
    where
        T: Clone,
    {
        let matcher = compile::compile(&self.root).unwrap_or(Matcher::Data(None));
        log::debug!(
            "compiled {} pattern(s) into a matcher (depth = {})",
            self.len,
            matcher.depth()
        );
        matcher
    }
}
