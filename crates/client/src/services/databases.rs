//! Databases 서비스 — 데이터베이스/컬렉션/속성/인덱스/문서
//!
//! 속성과 인덱스는 컬렉션 하위 경로(`/attributes/<type>`, `/indexes`)로
//! 생성됩니다. 속성 전파가 끝나기 전에 인덱스를 만들면 서버가 거부할 수
//! 있으므로, 호출 순서는 상위 레이어(플레이그라운드 러너)가 책임집니다.

use serde_json::{Value, json};

use copperbase_core::api::DatabasesApi;
use copperbase_core::error::CopperbaseError;
use copperbase_core::permission::Permission;
use copperbase_core::types::{
    Attribute, Collection, CollectionList, Database, Document, DocumentList, Index,
};

use crate::http::ApiClient;

/// Databases 리소스 그룹의 HTTP 구현
#[derive(Debug, Clone)]
pub struct Databases {
    client: ApiClient,
}

impl Databases {
    /// 공유 클라이언트로 서비스를 만듭니다.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn collection_path(database_id: &str, collection_id: &str) -> String {
        format!("/databases/{database_id}/collections/{collection_id}")
    }
}

/// 컬렉션 생성 요청 본문
fn collection_body(
    collection_id: &str,
    name: &str,
    permissions: &[Permission],
    document_security: bool,
) -> Value {
    json!({
        "collection_id": collection_id,
        "name": name,
        "permissions": permissions,
        "document_security": document_security,
    })
}

/// 문서 생성 요청 본문
fn document_body(document_id: &str, data: &Value, permissions: &[Permission]) -> Value {
    json!({
        "document_id": document_id,
        "data": data,
        "permissions": permissions,
    })
}

impl DatabasesApi for Databases {
    async fn create(&self, database_id: &str, name: &str) -> Result<Database, CopperbaseError> {
        let body = json!({ "database_id": database_id, "name": name });
        Ok(self.client.post_json("/databases", &body).await?)
    }

    async fn delete(&self, database_id: &str) -> Result<(), CopperbaseError> {
        Ok(self
            .client
            .delete(&format!("/databases/{database_id}"))
            .await?)
    }

    async fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[Permission],
        document_security: bool,
    ) -> Result<Collection, CopperbaseError> {
        let body = collection_body(collection_id, name, permissions, document_security);
        Ok(self
            .client
            .post_json(&format!("/databases/{database_id}/collections"), &body)
            .await?)
    }

    async fn list_collections(
        &self,
        database_id: &str,
    ) -> Result<CollectionList, CopperbaseError> {
        Ok(self
            .client
            .get_json(&format!("/databases/{database_id}/collections"))
            .await?)
    }

    async fn delete_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<(), CopperbaseError> {
        Ok(self
            .client
            .delete(&Self::collection_path(database_id, collection_id))
            .await?)
    }

    async fn create_string_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        size: u32,
        required: bool,
        default: Option<&str>,
        array: bool,
    ) -> Result<Attribute, CopperbaseError> {
        let path = format!(
            "{}/attributes/string",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({
            "key": key,
            "size": size,
            "required": required,
            "default": default,
            "array": array,
        });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_integer_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: i64,
        max: i64,
    ) -> Result<Attribute, CopperbaseError> {
        let path = format!(
            "{}/attributes/integer",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({
            "key": key,
            "required": required,
            "min": min,
            "max": max,
        });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_float_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: f64,
        max: f64,
    ) -> Result<Attribute, CopperbaseError> {
        let path = format!(
            "{}/attributes/float",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({
            "key": key,
            "required": required,
            "min": min,
            "max": max,
        });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_boolean_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
    ) -> Result<Attribute, CopperbaseError> {
        let path = format!(
            "{}/attributes/boolean",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({ "key": key, "required": required });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_email_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        default: Option<&str>,
    ) -> Result<Attribute, CopperbaseError> {
        let path = format!(
            "{}/attributes/email",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({
            "key": key,
            "required": required,
            "default": default,
        });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_index(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        index_type: &str,
        attributes: &[&str],
    ) -> Result<Index, CopperbaseError> {
        let path = format!(
            "{}/indexes",
            Self::collection_path(database_id, collection_id)
        );
        let body = json!({
            "key": key,
            "type": index_type,
            "attributes": attributes,
        });
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
        permissions: &[Permission],
    ) -> Result<Document, CopperbaseError> {
        let path = format!(
            "{}/documents",
            Self::collection_path(database_id, collection_id)
        );
        let body = document_body(document_id, &data, permissions);
        Ok(self.client.post_json(&path, &body).await?)
    }

    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<DocumentList, CopperbaseError> {
        let path = format!(
            "{}/documents",
            Self::collection_path(database_id, collection_id)
        );
        Ok(self.client.get_json(&path).await?)
    }

    async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), CopperbaseError> {
        let path = format!(
            "{}/documents/{document_id}",
            Self::collection_path(database_id, collection_id)
        );
        Ok(self.client.delete(&path).await?)
    }
}
