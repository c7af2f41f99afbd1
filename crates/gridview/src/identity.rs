//! Stable item identity.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// An item that carries a stable, unique identity.
///
/// Grids key each cell by this identity so hosts can diff composed views
/// across re-renders. Derive it with `#[derive(Identifiable)]`.
pub trait Identifiable {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}

/// Values that identify themselves (numbers, strings, chars).
macro_rules! impl_self_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identifiable for $ty {
                type Id = $ty;

                fn id(&self) -> Self::Id {
                    self.clone()
                }
            }
        )*
    };
}

impl_self_identified!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String,
);

impl Identifiable for &str {
    type Id = String;

    fn id(&self) -> Self::Id {
        (*self).to_string()
    }
}

impl<T: Identifiable> Identifiable for std::sync::Arc<T> {
    type Id = T::Id;

    fn id(&self) -> Self::Id {
        (**self).id()
    }
}

/// Return the identities that appear more than once, in first-repeat order.
pub fn duplicate_ids<T: Identifiable>(items: &[T]) -> Vec<T::Id> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        let id = item.id();
        if !seen.insert(id.clone()) && reported.insert(id.clone()) {
            duplicates.push(id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_identify_themselves() {
        assert_eq!(42u32.id(), 42);
        assert_eq!("tile".id(), "tile".to_string());
    }

    #[test]
    fn duplicate_ids_reports_each_repeat_once() {
        let items = [1, 2, 1, 3, 1, 2];
        assert_eq!(duplicate_ids(&items), vec![1, 2]);
    }

    #[derive(crate::Identifiable)]
    struct Card {
        id: u8,
        #[allow(dead_code)]
        face: char,
    }

    #[test]
    fn derived_identity_reads_id_field() {
        let cards = [Card { id: 1, face: 'a' }, Card { id: 1, face: 'b' }];
        assert_eq!(cards[1].id(), 1);
        assert_eq!(duplicate_ids(&cards), vec![1]);
    }

    #[test]
    fn heavily_repeated_ids_are_reported_once_each() {
        let items: Vec<u32> = (0..10_000).map(|n| n % 50).collect();
        let duplicates = duplicate_ids(&items);
        assert_eq!(duplicates, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn unique_items_have_no_duplicates() {
        let items = ["a", "b", "c"];
        assert!(duplicate_ids(&items).is_empty());
    }
}
