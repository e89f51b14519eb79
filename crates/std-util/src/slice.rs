use std::{collections::HashSet, hash::Hash};

#[macro_export]
macro_rules! assert_unique {
    ($slice:expr) => {{
        let slice = &$slice;
        assert!(
            $crate::slice::is_unique(&slice[..]),
            "expected `{}` to be unique, but it wasn't; actual={:?}",
            stringify!($slice),
            slice,
        );
    }};
}

/// Returns `true` if the slice only contains unique values
pub fn is_unique<T: Eq + Hash>(slice: &[T]) -> bool {
    let mut s = HashSet::new();
    slice.iter().all(|el| s.insert(el))
}
