//! The fixed set of windows a search session targets.

use crate::model::WindowId;

/// Ordered, immutable list of target windows.
///
/// Resolved once before the event loop starts. There is no way to add or
/// remove members afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaneSet(Vec<WindowId>);

impl PaneSet {
    /// No targets. Used when startup resolution failed.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Just `id`.
    pub fn single(id: WindowId) -> Self {
        Self(vec![id])
    }

    /// Build from ids in order, dropping duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = WindowId>) -> Self {
        let mut out: Vec<WindowId> = Vec::new();
        for id in ids {
            if !out.contains(&id) {
                out.push(id);
            }
        }
        Self(out)
    }

    /// Members in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.0.iter().copied()
    }

    /// Number of target windows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is nothing to search.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[WindowId] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ids_keeps_order_and_drops_duplicates() {
        let set = PaneSet::from_ids([3, 1, 3, 2].map(WindowId::from));
        assert_eq!(set.as_slice(), &[3, 1, 2].map(WindowId::from));
    }

    #[test]
    fn empty_has_no_members() {
        assert!(PaneSet::empty().is_empty());
        assert_eq!(PaneSet::empty().iter().count(), 0);
    }
}
