pub mod paginate_tests;

use crate::storage::record::Record;
use crate::storage::store::RecordStore;
use crate::types::value::FieldValue;

pub(crate) fn client(name: &str, email: &str) -> Record {
    Record::new([
        ("name", FieldValue::from(name)),
        ("email", FieldValue::from(email)),
    ])
}

/// Alice and Alicia share an email; Bob and Charlie are unique.
pub(crate) fn sample_store() -> RecordStore {
    RecordStore::from_records(vec![
        client("Alice Johnson", "a@x.com"),
        client("Bob Smith", "b@x.com"),
        client("Alicia Stone", "a@x.com"),
        client("Charlie", "c@x.com"),
    ])
}

pub(crate) fn names(records: &[&Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get("name").map(|v| v.to_string()).unwrap_or_default())
        .collect()
}
