use super::*;

#[test]
fn sequential_ids_are_deterministic() {
    let mut ids = SequentialIdSource::new("p");
    assert_eq!(ids.next_id(), NodeId::from("p-1"));
    assert_eq!(ids.next_id(), NodeId::from("p-2"));
}

#[test]
fn uuid_ids_are_simple_hex() {
    let mut ids = UuidIdSource;
    let id = ids.next_id();
    assert_eq!(id.as_str().len(), 32);
    assert!(id.as_str().chars().all(|ch| ch.is_ascii_hexdigit()));
}

#[test]
fn node_id_serializes_as_plain_string() {
    let id = NodeId::from("k3j2h1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"k3j2h1\"");
}
