use vitrine_adapters::{FileIdentityStore, MemoryIdentityStore};
use vitrine_contract::{IdentityStore, WorkflowId};

#[tokio::test]
async fn memory_store_roundtrip() {
    let store = MemoryIdentityStore::new();
    assert!(store.get().await.unwrap().is_none());

    let id = WorkflowId::new("CART-7");
    store.set(&id).await.unwrap();
    assert_eq!(store.get().await.unwrap(), Some(id));

    store.clear().await.unwrap();
    assert!(store.get().await.unwrap().is_none());
}

#[tokio::test]
async fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let id = WorkflowId::new("CART-42");

    let store = FileIdentityStore::new(dir.path());
    store.set(&id).await.unwrap();

    // A fresh handle over the same directory sees the same session.
    let reopened = FileIdentityStore::new(dir.path());
    assert_eq!(reopened.get().await.unwrap(), Some(id));
}

#[tokio::test]
async fn file_store_missing_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileIdentityStore::new(dir.path());
    assert!(store.get().await.unwrap().is_none());
}

#[tokio::test]
async fn file_store_clear_leaves_an_empty_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileIdentityStore::new(dir.path());
    store.set(&WorkflowId::new("CART-1")).await.unwrap();

    store.clear().await.unwrap();
    assert!(store.get().await.unwrap().is_none());

    // The key file itself survives, holding the empty string.
    let raw = std::fs::read_to_string(dir.path().join("workflow")).unwrap();
    assert_eq!(raw, "");
}
