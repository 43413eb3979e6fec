//! Demo payload contents: document data, schema parameters, permissions.

use serde_json::json;

use crate::helpers::mock_services::{CallLog, mock_playground};

#[tokio::test]
async fn document_payload_has_exact_demo_values() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let detail = log
        .detail_of("databases.create_document")
        .expect("create_document recorded");

    assert_eq!(
        detail["data"],
        json!({
            "name": "Spider Man",
            "release_year": 1920,
            "rating": 98.5,
            "kids": false,
        })
    );
}

#[tokio::test]
async fn index_covers_exactly_name_and_email() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let detail = log
        .detail_of("databases.create_index")
        .expect("create_index recorded");

    assert_eq!(detail["key"], "name_email_idx");
    assert_eq!(detail["type"], "fulltext");
    assert_eq!(detail["attributes"], json!(["name", "email"]));
}

#[tokio::test]
async fn attribute_parameters_match_the_movies_schema() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let string = log
        .detail_of("databases.create_string_attribute")
        .expect("string attribute recorded");
    assert_eq!(string["key"], "name");
    assert_eq!(string["size"], 255);
    assert_eq!(string["required"], true);

    let integer = log
        .detail_of("databases.create_integer_attribute")
        .expect("integer attribute recorded");
    assert_eq!(integer["key"], "release_year");
    assert_eq!(integer["min"], 0);
    assert_eq!(integer["max"], 9999);

    let float = log
        .detail_of("databases.create_float_attribute")
        .expect("float attribute recorded");
    assert_eq!(float["key"], "rating");
    assert_eq!(float["max"], 99.99);

    let boolean = log
        .detail_of("databases.create_boolean_attribute")
        .expect("boolean attribute recorded");
    assert_eq!(boolean["key"], "kids");
    assert_eq!(boolean["required"], true);

    let email = log
        .detail_of("databases.create_email_attribute")
        .expect("email attribute recorded");
    assert_eq!(email["key"], "email");
    assert_eq!(email["required"], false);
}

#[tokio::test]
async fn permissions_use_coarse_roles_only() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let collection = log
        .detail_of("databases.create_collection")
        .expect("create_collection recorded");
    assert_eq!(
        collection["permissions"],
        json!([
            r#"create("users")"#,
            r#"read("users")"#,
            r#"update("users")"#,
            r#"delete("users")"#,
        ])
    );
    assert_eq!(collection["document_security"], true);

    let document = log
        .detail_of("databases.create_document")
        .expect("create_document recorded");
    assert_eq!(
        document["permissions"],
        json!([r#"read("users")"#, r#"update("users")"#, r#"delete("users")"#])
    );

    let bucket = log
        .detail_of("storage.create_bucket")
        .expect("create_bucket recorded");
    assert_eq!(
        bucket["permissions"],
        json!([
            r#"read("any")"#,
            r#"create("users")"#,
            r#"update("users")"#,
            r#"delete("users")"#,
        ])
    );
    assert_eq!(bucket["file_security"], true);

    let file = log
        .detail_of("storage.create_file")
        .expect("create_file recorded");
    assert_eq!(file["permissions"], json!([r#"update("any")"#]));

    let function = log.detail_of("functions.create").expect("create recorded");
    assert_eq!(function["execute"], json!(["any"]));
    assert_eq!(function["runtime"], "php-8.0");
}

#[tokio::test]
async fn user_creation_uses_generated_email_and_demo_password() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let detail = log.detail_of("users.create").expect("create recorded");
    let email = detail["email"].as_str().expect("email string");
    assert!(
        email.ends_with("@copperbase.dev"),
        "email is generated under the demo domain"
    );
    assert_eq!(detail["password"], "user@123");
    assert_eq!(detail["name"], "Rust Player");
    assert!(detail["phone"].is_null());
}

#[tokio::test]
async fn variable_is_scoped_to_the_created_function() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let function = log.detail_of("functions.create").expect("create recorded");
    let variable = log
        .detail_of("functions.create_variable")
        .expect("create_variable recorded");

    assert_eq!(variable["function_id"], function["function_id"]);
    assert_eq!(variable["key"], "ENV");
    assert_eq!(variable["value"], "value");
}

#[tokio::test]
async fn upload_uses_configured_filename() {
    let log = CallLog::new();
    mock_playground(&log).run().await.expect("run succeeds");

    let detail = log
        .detail_of("storage.create_file")
        .expect("create_file recorded");
    assert_eq!(detail["filename"], "nature.jpg");
}
