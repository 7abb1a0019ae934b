mod order;
pub use order::*;

mod entry;
pub use entry::*;

pub mod key_search;
pub use key_search::{BinarySearch, KeySearcher, LinearSearch, SearchIndex};

mod comparator;
pub use comparator::*;

mod store;
pub use store::*;

mod map;
pub use map::*;

mod cursor;
pub use cursor::*;

pub mod iterator;
