//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Find an entity by identifier in a loaded list.
///
/// Reference lists are small (one screen's worth), so a linear scan is fine.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let rows = [Row { id: 1, label: "a" }, Row { id: 2, label: "b" }];
        assert_eq!(find_by_id(&rows, &2).map(|r| r.label), Some("b"));
        assert!(find_by_id(&rows, &3).is_none());
    }
}
