//! Full-sequence ordering and identifier threading.

use crate::helpers::mock_services::{CallLog, mock_playground};

/// The complete, fixed operation sequence of a successful run:
/// 19 top-level routines plus the 7 nested schema/variable calls.
const EXPECTED_SEQUENCE: [&str; 26] = [
    "users.create",
    "users.list",
    "users.delete",
    "databases.create",
    "databases.create_collection",
    "databases.create_string_attribute",
    "databases.create_integer_attribute",
    "databases.create_float_attribute",
    "databases.create_boolean_attribute",
    "databases.create_email_attribute",
    "databases.create_index",
    "databases.list_collections",
    "databases.create_document",
    "databases.list_documents",
    "databases.delete_document",
    "databases.delete_collection",
    "databases.delete",
    "functions.create",
    "functions.create_variable",
    "functions.list",
    "functions.delete",
    "storage.create_bucket",
    "storage.list_buckets",
    "storage.create_file",
    "storage.list_files",
    "storage.delete_file",
];

#[tokio::test]
async fn full_run_invokes_every_operation_in_fixed_order() {
    let log = CallLog::new();
    let playground = mock_playground(&log);

    playground.run().await.expect("full run should succeed");

    let ops = log.ops();
    assert_eq!(ops.len(), EXPECTED_SEQUENCE.len(), "no extra or missing calls");
    assert_eq!(ops, EXPECTED_SEQUENCE, "operations run in the fixed order");
}

#[tokio::test]
async fn deleted_user_id_matches_created_user_id() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let created = log.detail_of("users.create").expect("create recorded");
    let deleted = log.detail_of("users.delete").expect("delete recorded");

    let created_id = created["user_id"].as_str().expect("created id");
    assert!(!created_id.is_empty(), "client generates a non-empty id");
    assert_eq!(
        deleted["user_id"], created["user_id"],
        "delete consumes the id returned by create"
    );
}

#[tokio::test]
async fn deleted_file_id_matches_uploaded_file_id() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let uploaded = log.detail_of("storage.create_file").expect("upload recorded");
    let deleted = log.detail_of("storage.delete_file").expect("delete recorded");

    assert_eq!(
        deleted["file_id"], uploaded["file_id"],
        "delete_file consumes the id returned by the upload"
    );
    assert_eq!(
        deleted["bucket_id"], uploaded["bucket_id"],
        "delete_file targets the same bucket as the upload"
    );
}

#[tokio::test]
async fn database_id_threads_through_every_database_operation() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let database_id = log.detail_of("databases.create").expect("create recorded")["database_id"]
        .as_str()
        .expect("database id")
        .to_owned();

    for op in [
        "databases.create_collection",
        "databases.list_collections",
        "databases.create_document",
        "databases.list_documents",
        "databases.delete_document",
        "databases.delete_collection",
        "databases.delete",
    ] {
        let detail = log.detail_of(op).expect("operation recorded");
        assert_eq!(
            detail["database_id"], database_id,
            "{op} uses the created database id"
        );
    }
}

#[tokio::test]
async fn collection_id_is_the_fixed_literal() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let created = log
        .detail_of("databases.create_collection")
        .expect("create_collection recorded");
    assert_eq!(created["collection_id"], "movies", "collection id is a literal");

    let document = log
        .detail_of("databases.create_document")
        .expect("create_document recorded");
    assert_eq!(document["collection_id"], "movies");
}

#[tokio::test]
async fn schema_calls_precede_index_creation() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let ops = log.ops();
    let position = |op: &str| {
        ops.iter()
            .position(|o| o == op)
            .unwrap_or_else(|| panic!("{op} not recorded"))
    };

    let index_pos = position("databases.create_index");
    for attr_op in [
        "databases.create_string_attribute",
        "databases.create_integer_attribute",
        "databases.create_float_attribute",
        "databases.create_boolean_attribute",
        "databases.create_email_attribute",
    ] {
        assert!(
            position(attr_op) < index_pos,
            "{attr_op} must complete before index creation"
        );
    }
}
