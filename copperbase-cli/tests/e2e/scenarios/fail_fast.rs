//! Fail-fast behavior: the first fault aborts the remaining sequence.

use copperbase_core::error::{ApiError, CopperbaseError};

use crate::helpers::mock_services::{CallLog, mock_playground};

#[tokio::test]
async fn fault_on_first_step_stops_everything() {
    let log = CallLog::new();
    log.fail_on("users.create");

    let err = mock_playground(&log).run().await.unwrap_err();
    assert!(matches!(
        err,
        CopperbaseError::Api(ApiError::Remote { status: 503, .. })
    ));

    // 실패한 호출만 기록되고 이후 단계는 호출되지 않음
    assert_eq!(log.ops(), vec!["users.create"]);
}

#[tokio::test]
async fn fault_mid_sequence_stops_remaining_steps() {
    let log = CallLog::new();
    log.fail_on("databases.create_document");

    mock_playground(&log).run().await.unwrap_err();

    let ops = log.ops();
    assert_eq!(
        ops.last().map(String::as_str),
        Some("databases.create_document"),
        "the faulting call is the last one attempted"
    );
    assert!(
        !ops.iter().any(|op| op == "databases.list_documents"),
        "no step after the fault is invoked"
    );
    assert!(
        !ops.iter().any(|op| op.starts_with("functions.")),
        "later resource groups are never reached"
    );
}

#[tokio::test]
async fn fault_during_nested_schema_call_stops_index_creation() {
    let log = CallLog::new();
    log.fail_on("databases.create_float_attribute");

    mock_playground(&log).run().await.unwrap_err();

    let ops = log.ops();
    assert_eq!(
        ops.last().map(String::as_str),
        Some("databases.create_float_attribute")
    );
    assert!(
        !ops.iter().any(|op| op == "databases.create_boolean_attribute"),
        "remaining attribute calls are skipped"
    );
    assert!(
        !ops.iter().any(|op| op == "databases.create_index"),
        "the index is never requested"
    );
}

#[tokio::test]
async fn fault_on_upload_prevents_file_delete() {
    let log = CallLog::new();
    log.fail_on("storage.create_file");

    mock_playground(&log).run().await.unwrap_err();

    let ops = log.ops();
    assert!(
        !ops.iter().any(|op| op == "storage.delete_file"),
        "delete_file is never invoked without a file id from the upload"
    );
}

#[tokio::test]
async fn fault_leaves_earlier_resources_behind() {
    // 스펙이 기록한 미해결 질문: 실패 시 정리는 하지 않는다.
    // 함수 삭제 단계에서 실패하면, 이미 생성된 함수는 그대로 남는다.
    let log = CallLog::new();
    log.fail_on("functions.delete");

    mock_playground(&log).run().await.unwrap_err();

    let ops = log.ops();
    assert!(ops.iter().any(|op| op == "functions.create"));
    assert!(
        !ops.iter().any(|op| op.starts_with("storage.")),
        "no cleanup and no further steps after the fault"
    );
}
