use std::cmp::Ordering;

/// Decoded outcome of a search.
///
/// The classic signed encoding (`i` when found, `-(insertion_point + 1)` when absent) is
/// available through [`SearchIndex::encoded`], but positional code should match on the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIndex {
    /// An entry with an equal key lives at this position
    Found(usize),
    /// No equal key, this is where one would be inserted to keep the order
    Absent(usize),
}

impl SearchIndex {
    /// Decode the signed encoding.
    pub fn from_encoded(encoded: isize) -> Self {
        if encoded >= 0 {
            Self::Found(encoded as usize)
        } else {
            Self::Absent((-(encoded + 1)) as usize)
        }
    }

    /// The signed encoding, `i` for found and `-(p + 1)` for absent.
    pub fn encoded(self) -> isize {
        match self {
            Self::Found(idx) => idx as isize,
            Self::Absent(idx) => -(idx as isize) - 1,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Position of the equal key, if any
    pub fn found(self) -> Option<usize> {
        match self {
            Self::Found(idx) => Some(idx),
            Self::Absent(_) => None,
        }
    }

    /// Position of the smallest entry >= the searched key
    #[inline]
    pub fn ceiling(self) -> usize {
        match self {
            Self::Found(idx) | Self::Absent(idx) => idx,
        }
    }

    /// Position of the smallest entry > the searched key
    #[inline]
    pub fn higher(self) -> usize {
        match self {
            Self::Found(idx) => idx + 1,
            Self::Absent(idx) => idx,
        }
    }

    /// Position of the largest entry <= the searched key
    #[inline]
    pub fn floor(self) -> Option<usize> {
        match self {
            Self::Found(idx) => Some(idx),
            Self::Absent(idx) => idx.checked_sub(1),
        }
    }

    /// Position of the largest entry < the searched key
    #[inline]
    pub fn lower(self) -> Option<usize> {
        match self {
            Self::Found(idx) | Self::Absent(idx) => idx.checked_sub(1),
        }
    }
}

impl From<Result<usize, usize>> for SearchIndex {
    fn from(r: Result<usize, usize>) -> Self {
        match r {
            Ok(idx) => Self::Found(idx),
            Err(idx) => Self::Absent(idx),
        }
    }
}

impl From<SearchIndex> for Result<usize, usize> {
    fn from(s: SearchIndex) -> Self {
        match s {
            SearchIndex::Found(idx) => Ok(idx),
            SearchIndex::Absent(idx) => Err(idx),
        }
    }
}

/// Strategy used by the store to locate a target in its sorted items.
///
/// `cmp` tells how an item compares to the target, same contract as `slice::binary_search_by`.
pub trait KeySearcher {
    fn search<T, F>(items: &[T], cmp: F) -> SearchIndex
    where
        F: FnMut(&T) -> Ordering;
}

/// Binary search, the default
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearch;

impl KeySearcher for BinarySearch {
    #[inline]
    fn search<T, F>(items: &[T], cmp: F) -> SearchIndex
    where
        F: FnMut(&T) -> Ordering,
    {
        items.binary_search_by(cmp).into()
    }
}

/// Linear scan, only wins for very small stores.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearSearch;

impl KeySearcher for LinearSearch {
    #[inline(never)]
    fn search<T, F>(items: &[T], mut cmp: F) -> SearchIndex
    where
        F: FnMut(&T) -> Ordering,
    {
        items
            .iter()
            .enumerate()
            .find_map(|(idx, item)| match cmp(item) {
                Ordering::Less => None,
                Ordering::Equal => Some(SearchIndex::Found(idx)),
                Ordering::Greater => Some(SearchIndex::Absent(idx)),
            })
            .unwrap_or(SearchIndex::Absent(items.len()))
    }
}
