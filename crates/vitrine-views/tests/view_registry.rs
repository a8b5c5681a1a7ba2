use std::sync::{Arc, Mutex};
use vitrine_adapters::{InMemoryStorefront, MemoryIdentityStore};
use vitrine_views::{
    CartView, StoreView, ViewId, ViewKind, ViewObserver, ViewRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Activated(ViewId, ViewKind),
    Deactivated(ViewId, ViewKind),
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl ViewObserver for RecordingObserver {
    fn activated(&self, id: ViewId, kind: ViewKind) {
        self.events.lock().unwrap().push(Event::Activated(id, kind));
    }
    fn deactivated(&self, id: ViewId, kind: ViewKind) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Deactivated(id, kind));
    }
}

#[tokio::test]
async fn observer_sees_activation_and_deactivation() {
    let observer = Arc::new(RecordingObserver::default());
    let mut registry = ViewRegistry::with_observer(observer.clone());

    let backend = Arc::new(InMemoryStorefront::new());
    let identity = Arc::new(MemoryIdentityStore::new());
    let mut view = StoreView::new(backend, identity);

    view.activate(&mut registry).await;
    assert_eq!(registry.children().len(), 1);
    let (id, kind) = registry.children()[0];
    assert_eq!(kind, ViewKind::Store);

    view.deactivate(&mut registry);
    assert!(registry.children().is_empty());

    let events = observer.events.lock().unwrap();
    assert_eq!(
        events.as_slice(),
        &[
            Event::Activated(id, ViewKind::Store),
            Event::Deactivated(id, ViewKind::Store)
        ]
    );
}

#[tokio::test]
async fn registry_enumerates_live_child_views() {
    let mut registry = ViewRegistry::new();
    let backend = Arc::new(InMemoryStorefront::new());
    let identity = Arc::new(MemoryIdentityStore::new());

    let mut store = StoreView::new(backend.clone(), identity.clone());
    let mut cart = CartView::new(backend, identity);
    store.activate(&mut registry).await;
    cart.activate(&mut registry).await;

    let kinds: Vec<ViewKind> = registry.children().iter().map(|&(_, kind)| kind).collect();
    assert_eq!(kinds, vec![ViewKind::Store, ViewKind::Cart]);

    store.deactivate(&mut registry);
    let kinds: Vec<ViewKind> = registry.children().iter().map(|&(_, kind)| kind).collect();
    assert_eq!(kinds, vec![ViewKind::Cart]);
}

#[tokio::test]
async fn deactivating_twice_is_harmless() {
    let mut registry = ViewRegistry::new();
    let backend = Arc::new(InMemoryStorefront::new());
    let identity = Arc::new(MemoryIdentityStore::new());
    let mut view = StoreView::new(backend, identity);

    view.activate(&mut registry).await;
    view.deactivate(&mut registry);
    view.deactivate(&mut registry);

    assert!(registry.children().is_empty());
}
