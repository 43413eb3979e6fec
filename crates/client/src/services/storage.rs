//! Storage 서비스 — 버킷/파일
//!
//! 파일 업로드는 멀티파트 요청입니다. 파일 내용은 업로드 시점에
//! 로컬 경로에서 읽습니다.

use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use copperbase_core::api::StorageApi;
use copperbase_core::error::CopperbaseError;
use copperbase_core::permission::Permission;
use copperbase_core::types::{Bucket, BucketList, FileEntry, FileList, InputFile};

use crate::error::ClientError;
use crate::http::ApiClient;

/// Storage 리소스 그룹의 HTTP 구현
#[derive(Debug, Clone)]
pub struct Storage {
    client: ApiClient,
}

impl Storage {
    /// 공유 클라이언트로 서비스를 만듭니다.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

/// 버킷 생성 요청 본문
fn bucket_body(
    bucket_id: &str,
    name: &str,
    permissions: &[Permission],
    file_security: bool,
) -> Value {
    json!({
        "bucket_id": bucket_id,
        "name": name,
        "permissions": permissions,
        "file_security": file_security,
    })
}

impl StorageApi for Storage {
    async fn create_bucket(
        &self,
        bucket_id: &str,
        name: &str,
        permissions: &[Permission],
        file_security: bool,
    ) -> Result<Bucket, CopperbaseError> {
        let body = bucket_body(bucket_id, name, permissions, file_security);
        Ok(self.client.post_json("/storage/buckets", &body).await?)
    }

    async fn list_buckets(&self) -> Result<BucketList, CopperbaseError> {
        Ok(self.client.get_json("/storage/buckets").await?)
    }

    async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        input: &InputFile,
        permissions: &[Permission],
    ) -> Result<FileEntry, CopperbaseError> {
        let content = tokio::fs::read(input.path())
            .await
            .map_err(ClientError::Io)?;

        let permissions_json = serde_json::to_string(permissions)
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        let form = Form::new()
            .text("file_id", file_id.to_owned())
            .text("permissions", permissions_json)
            .part(
                "file",
                Part::bytes(content).file_name(input.filename.clone()),
            );

        Ok(self
            .client
            .post_multipart(&format!("/storage/buckets/{bucket_id}/files"), form)
            .await?)
    }

    async fn list_files(&self, bucket_id: &str) -> Result<FileList, CopperbaseError> {
        Ok(self
            .client
            .get_json(&format!("/storage/buckets/{bucket_id}/files"))
            .await?)
    }

    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<(), CopperbaseError> {
        Ok(self
            .client
            .delete(&format!("/storage/buckets/{bucket_id}/files/{file_id}"))
            .await?)
    }
}
