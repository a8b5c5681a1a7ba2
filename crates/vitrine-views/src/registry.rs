use std::sync::Arc;

/// Which view a child handle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Store,
    Cart,
    Checkout,
}

/// Identity of one registered child view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

/// Observer notified as child views come and go.
///
/// This is the test seam: production logic never reads the registry.
pub trait ViewObserver: Send + Sync {
    fn activated(&self, _id: ViewId, _kind: ViewKind) {}
    fn deactivated(&self, _id: ViewId, _kind: ViewKind) {}
}

/// Child-handle tracking owned by the parent.
///
/// Views register on activation and deregister by id on deactivation. No
/// ordering guarantee among siblings. Inspection goes through the injected
/// observer or `children()`; nothing else consumes the list.
#[derive(Default)]
pub struct ViewRegistry {
    next_id: u64,
    children: Vec<(ViewId, ViewKind)>,
    observer: Option<Arc<dyn ViewObserver>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn ViewObserver>) -> Self {
        Self {
            observer: Some(observer),
            ..Self::default()
        }
    }

    pub fn register(&mut self, kind: ViewKind) -> ViewId {
        self.next_id += 1;
        let id = ViewId(self.next_id);
        self.children.push((id, kind));
        if let Some(observer) = &self.observer {
            observer.activated(id, kind);
        }
        id
    }

    pub fn deregister(&mut self, id: ViewId) {
        let Some(pos) = self.children.iter().position(|(child, _)| *child == id) else {
            return;
        };
        let (_, kind) = self.children.remove(pos);
        if let Some(observer) = &self.observer {
            observer.deactivated(id, kind);
        }
    }

    /// Currently-registered child handles.
    pub fn children(&self) -> &[(ViewId, ViewKind)] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_appends_and_deregister_removes_by_id() {
        let mut registry = ViewRegistry::new();
        let store = registry.register(ViewKind::Store);
        let cart = registry.register(ViewKind::Cart);
        assert_eq!(
            registry.children(),
            &[(store, ViewKind::Store), (cart, ViewKind::Cart)]
        );

        registry.deregister(store);
        assert_eq!(registry.children(), &[(cart, ViewKind::Cart)]);

        // Unknown id is a no-op.
        registry.deregister(store);
        assert_eq!(registry.children().len(), 1);
    }
}
