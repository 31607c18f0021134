use {
    indexmap::IndexMap,
    std::{borrow::Cow, ops::Index},
};

/// The result of a successful lookup.
#[derive(Debug)]
pub struct Match<'a, T> {
    pub(super) params: Params<'a>,
    pub(super) data: &'a T,
}

impl<'a, T> Match<'a, T> {
    /// Returns the parameters extracted from the path.
    pub fn params(&self) -> &Params<'a> {
        &self.params
    }

    /// Returns the payload associated with the matched pattern.
    pub fn data(&self) -> &'a T {
        self.data
    }

    pub fn into_parts(self) -> (Params<'a>, &'a T) {
        (self.params, self.data)
    }
}

/// A collection of the parameters extracted from a path.
///
/// The names are borrowed from the matcher and the values are borrowed from
/// the input path unless they had to be percent-decoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params<'a> {
    inner: IndexMap<&'a str, Cow<'a, str>>,
}

impl<'a> Params<'a> {
    /// Returns the decoded value of the parameter named `name`, if exists.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(|value| &**value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the pairs of the parameter name and its decoded value.
    ///
    /// The pairs are yielded from the innermost capture to the outermost one.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &str)> + '_ {
        self.inner.iter().map(|(&name, value)| (name, &**value))
    }

    /// Adds a captured value, keeping the one already captured under the same name.
    ///
    /// Captures are added while unwinding from the leaf, so the value nearest
    /// to the leaf is retained.
    pub(super) fn insert_if_absent(&mut self, name: &'a str, value: Cow<'a, str>) {
        self.inner.entry(name).or_insert(value);
    }
}

impl<'a, 'n> Index<&'n str> for Params<'a> {
    type Output = str;

    fn index(&self, name: &'n str) -> &Self::Output {
        self.get(name).expect("no such parameter")
    }
}
