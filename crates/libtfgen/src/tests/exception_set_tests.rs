use crate::ExceptionSet;

#[test]
fn insert_reports_new_entries() {
    let mut exceptions = ExceptionSet::new();
    assert!(exceptions.is_empty());
    assert!(exceptions.insert("primary_address"));
    assert!(!exceptions.insert("primary_address"));
    assert!(exceptions.insert("status_id"));
    assert_eq!(exceptions.len(), 2);
    assert!(exceptions.contains("status_id"));
    assert!(!exceptions.contains("status"));
}

#[test]
fn iterates_in_insertion_order() {
    let exceptions: ExceptionSet =
        ["status_id", "primary_address", "asn_node"].into_iter().collect();
    assert_eq!(
        exceptions.iter().collect::<Vec<_>>(),
        vec!["status_id", "primary_address", "asn_node"],
    );
}

#[test]
fn strict_extension() {
    let exceptions: ExceptionSet = ["primary_address"].into_iter().collect();
    assert!(exceptions.has_strict_extension("primary"));
    assert!(exceptions.has_strict_extension("primary_"));
    assert!(exceptions.has_strict_extension(""));
    assert!(!exceptions.has_strict_extension("primary_address"));
    assert!(!exceptions.has_strict_extension("address"));
    assert!(!ExceptionSet::new().has_strict_extension(""));
}
