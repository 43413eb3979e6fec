//! 서비스 trait — 리소스 그룹별 확장 포인트 정의
//!
//! 네 리소스 그룹 각각에 대한 trait을 정의합니다. `copperbase-client`가
//! HTTP 구현을 제공하고, 테스트는 호출을 기록하는 목 구현을 사용합니다.

use crate::error::CopperbaseError;
use crate::permission::{Permission, Role};
use crate::types::{
    Attribute, Bucket, BucketList, Collection, CollectionList, Database, Document, DocumentList,
    FileEntry, FileList, Function, FunctionList, Index, InputFile, User, UserList, Variable,
};

/// Users 리소스 그룹
pub trait UsersApi: Send + Sync {
    /// 사용자를 생성합니다. `user_id`는 클라이언트 측에서 생성합니다.
    async fn create(
        &self,
        user_id: &str,
        email: &str,
        phone: Option<&str>,
        password: &str,
        name: &str,
    ) -> Result<User, CopperbaseError>;

    /// 모든 사용자를 조회합니다.
    async fn list(&self) -> Result<UserList, CopperbaseError>;

    /// 사용자를 삭제합니다.
    async fn delete(&self, user_id: &str) -> Result<(), CopperbaseError>;
}

/// Databases 리소스 그룹 (컬렉션/문서/속성/인덱스 포함)
pub trait DatabasesApi: Send + Sync {
    /// 데이터베이스를 생성합니다.
    async fn create(&self, database_id: &str, name: &str) -> Result<Database, CopperbaseError>;

    /// 데이터베이스를 삭제합니다.
    async fn delete(&self, database_id: &str) -> Result<(), CopperbaseError>;

    /// 컬렉션을 생성합니다.
    async fn create_collection(
        &self,
        database_id: &str,
        collection_id: &str,
        name: &str,
        permissions: &[Permission],
        document_security: bool,
    ) -> Result<Collection, CopperbaseError>;

    /// 데이터베이스의 컬렉션을 조회합니다.
    async fn list_collections(&self, database_id: &str) -> Result<CollectionList, CopperbaseError>;

    /// 컬렉션을 삭제합니다.
    async fn delete_collection(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<(), CopperbaseError>;

    /// 문자열 속성을 추가합니다.
    async fn create_string_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        size: u32,
        required: bool,
        default: Option<&str>,
        array: bool,
    ) -> Result<Attribute, CopperbaseError>;

    /// 정수 속성을 추가합니다.
    async fn create_integer_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: i64,
        max: i64,
    ) -> Result<Attribute, CopperbaseError>;

    /// 실수 속성을 추가합니다.
    async fn create_float_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        min: f64,
        max: f64,
    ) -> Result<Attribute, CopperbaseError>;

    /// 불리언 속성을 추가합니다.
    async fn create_boolean_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
    ) -> Result<Attribute, CopperbaseError>;

    /// 이메일 속성을 추가합니다.
    async fn create_email_attribute(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        required: bool,
        default: Option<&str>,
    ) -> Result<Attribute, CopperbaseError>;

    /// 인덱스를 생성합니다.
    ///
    /// 참조하는 속성이 모두 전파된 뒤에 호출해야 합니다.
    async fn create_index(
        &self,
        database_id: &str,
        collection_id: &str,
        key: &str,
        index_type: &str,
        attributes: &[&str],
    ) -> Result<Index, CopperbaseError>;

    /// 문서를 생성합니다.
    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: serde_json::Value,
        permissions: &[Permission],
    ) -> Result<Document, CopperbaseError>;

    /// 컬렉션의 문서를 조회합니다.
    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
    ) -> Result<DocumentList, CopperbaseError>;

    /// 문서를 삭제합니다.
    async fn delete_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), CopperbaseError>;
}

/// Functions 리소스 그룹
pub trait FunctionsApi: Send + Sync {
    /// 함수를 등록합니다.
    async fn create(
        &self,
        function_id: &str,
        name: &str,
        execute: &[Role],
        runtime: &str,
    ) -> Result<Function, CopperbaseError>;

    /// 함수 범위의 환경 변수를 생성합니다.
    async fn create_variable(
        &self,
        function_id: &str,
        key: &str,
        value: &str,
    ) -> Result<Variable, CopperbaseError>;

    /// 모든 함수를 조회합니다.
    async fn list(&self) -> Result<FunctionList, CopperbaseError>;

    /// 함수를 삭제합니다.
    async fn delete(&self, function_id: &str) -> Result<(), CopperbaseError>;
}

/// Storage 리소스 그룹
pub trait StorageApi: Send + Sync {
    /// 버킷을 생성합니다.
    async fn create_bucket(
        &self,
        bucket_id: &str,
        name: &str,
        permissions: &[Permission],
        file_security: bool,
    ) -> Result<Bucket, CopperbaseError>;

    /// 모든 버킷을 조회합니다.
    async fn list_buckets(&self) -> Result<BucketList, CopperbaseError>;

    /// 로컬 파일을 버킷에 업로드합니다.
    async fn create_file(
        &self,
        bucket_id: &str,
        file_id: &str,
        input: &InputFile,
        permissions: &[Permission],
    ) -> Result<FileEntry, CopperbaseError>;

    /// 버킷의 파일을 조회합니다.
    async fn list_files(&self, bucket_id: &str) -> Result<FileList, CopperbaseError>;

    /// 파일을 삭제합니다.
    async fn delete_file(&self, bucket_id: &str, file_id: &str) -> Result<(), CopperbaseError>;
}
