use puctee_realtime::PlanChannelRegistry;

#[tokio::test]
async fn broadcast_reaches_every_subscriber_of_the_plan() {
    let registry = PlanChannelRegistry::new();
    let (_, mut a) = registry.connect(1, 10);
    let (_, mut a2) = registry.connect(1, 10);
    let (_, mut b) = registry.connect(1, 20);
    let (_, mut other) = registry.connect(2, 30);

    let delivered = registry.broadcast(1, "hello");

    assert_eq!(delivered, 3);
    assert_eq!(a.recv().await.as_deref(), Some("hello"));
    assert_eq!(a2.recv().await.as_deref(), Some("hello"));
    assert_eq!(b.recv().await.as_deref(), Some("hello"));
    assert!(other.try_recv().is_err());
}

#[test]
fn broadcast_to_unknown_plan_delivers_nothing() {
    let registry = PlanChannelRegistry::new();
    assert_eq!(registry.broadcast(99, "x"), 0);
    assert_eq!(registry.plan_count(), 0);
}

#[test]
fn disconnect_prunes_empty_entries() {
    let registry = PlanChannelRegistry::new();
    let (first, _rx1) = registry.connect(1, 10);
    let (second, _rx2) = registry.connect(1, 10);
    assert_eq!(registry.subscriber_count(1), 2);

    assert!(registry.disconnect(1, 10, first));
    assert_eq!(registry.connected_users(1), vec![10]);

    assert!(registry.disconnect(1, 10, second));
    assert!(registry.connected_users(1).is_empty());
    assert_eq!(registry.plan_count(), 0);
}

#[test]
fn disconnect_unknown_connection_is_false() {
    let registry = PlanChannelRegistry::new();
    let (id, _rx) = registry.connect(1, 10);
    assert!(!registry.disconnect(1, 11, id));
    assert!(!registry.disconnect(2, 10, id));
    assert_eq!(registry.subscriber_count(1), 1);
}

#[test]
fn dropped_receivers_are_pruned_on_broadcast() {
    let registry = PlanChannelRegistry::new();
    let (_, rx) = registry.connect(1, 10);
    let (_, _kept) = registry.connect(1, 20);
    drop(rx);

    assert_eq!(registry.broadcast(1, "ping"), 1);
    assert_eq!(registry.connected_users(1), vec![20]);
}

#[test]
fn clones_share_the_same_channels() {
    let registry = PlanChannelRegistry::new();
    let handle = registry.clone();
    let (_, mut rx) = handle.connect(4, 1);
    assert_eq!(registry.broadcast(4, "shared"), 1);
    assert_eq!(rx.try_recv().unwrap(), "shared");
}
