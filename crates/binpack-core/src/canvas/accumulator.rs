use std::ops::{Add, AddAssign};

use super::content::Content;

/// Staging buffer for contents that still have to be placed.
///
/// `sort` orders items widest first, then tallest first, which is the order
/// `Canvas::place` and `CanvasArray::place` expect for good results.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentAccumulator<T> {
    contents: Vec<Content<T>>,
}

impl<T> Default for ContentAccumulator<T> {
    fn default() -> Self {
        Self {
            contents: Vec::new(),
        }
    }
}

impl<T> ContentAccumulator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &[Content<T>] {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut Vec<Content<T>> {
        &mut self.contents
    }

    pub fn into_contents(self) -> Vec<Content<T>> {
        self.contents
    }

    pub fn push(&mut self, content: Content<T>) {
        self.contents.push(content);
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Sorts by width descending, then height descending. Stable for equal sizes.
    pub fn sort(&mut self) {
        self.contents.sort_by(|a, b| {
            let (sa, sb) = (a.size(), b.size());
            sb.width
                .cmp(&sa.width)
                .then_with(|| sb.height.cmp(&sa.height))
        });
    }
}

impl<T> AddAssign<Content<T>> for ContentAccumulator<T> {
    fn add_assign(&mut self, rhs: Content<T>) {
        self.contents.push(rhs);
    }
}

impl<T> AddAssign<Vec<Content<T>>> for ContentAccumulator<T> {
    fn add_assign(&mut self, rhs: Vec<Content<T>>) {
        self.contents.extend(rhs);
    }
}

impl<T> Add<Content<T>> for ContentAccumulator<T> {
    type Output = Self;
    fn add(mut self, rhs: Content<T>) -> Self {
        self += rhs;
        self
    }
}

impl<T> Add<Vec<Content<T>>> for ContentAccumulator<T> {
    type Output = Self;
    fn add(mut self, rhs: Vec<Content<T>>) -> Self {
        self += rhs;
        self
    }
}

impl<T> Extend<Content<T>> for ContentAccumulator<T> {
    fn extend<I: IntoIterator<Item = Content<T>>>(&mut self, iter: I) {
        self.contents.extend(iter);
    }
}

impl<T> FromIterator<Content<T>> for ContentAccumulator<T> {
    fn from_iter<I: IntoIterator<Item = Content<T>>>(iter: I) -> Self {
        Self {
            contents: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ContentAccumulator<T> {
    type Item = Content<T>;
    type IntoIter = std::vec::IntoIter<Content<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.contents.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ContentAccumulator<T> {
    type Item = &'a Content<T>;
    type IntoIter = std::slice::Iter<'a, Content<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.contents.iter()
    }
}
