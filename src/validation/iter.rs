use core::iter::FusedIterator;

use crate::types::alloc_type::Cow;
use crate::types::validation_error::Descriptions;

#[cfg(feature = "std")]
type MapIter<'a> = std::collections::btree_map::Iter<'a, Cow<'static, str>, Descriptions>;
#[cfg(not(feature = "std"))]
type MapIter<'a> = alloc::collections::btree_map::Iter<'a, Cow<'static, str>, Descriptions>;

/// Iterator over the `(code, descriptions)` entries of a
/// [`ValidationErrorBuilder`](crate::validation::ValidationErrorBuilder).
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: MapIter<'a>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(inner: MapIter<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [Cow<'static, str>]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(code, descriptions)| (code.as_ref(), descriptions.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(code, descriptions)| (code.as_ref(), descriptions.as_slice()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
