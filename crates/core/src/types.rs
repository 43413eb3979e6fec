//! 도메인 타입 — 원격 서비스가 반환하는 레코드의 와이어 모델
//!
//! 네 리소스 그룹(Users, Databases, Functions, Storage)의 레코드와
//! 목록 응답을 정의합니다. 목록 응답은 `{ total, <복수형> }` 형태입니다.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 클라이언트 측 고유 식별자를 생성합니다.
///
/// 생성/업로드 호출에 앞서 호출자가 ID를 만들어 전달합니다.
/// 서버가 생성한 ID는 응답 레코드의 `id` 필드로 돌아옵니다.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// 업로드할 로컬 파일
///
/// 파일 내용은 업로드 시점에 클라이언트가 읽습니다.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// 로컬 파일 경로
    pub path: PathBuf,
    /// 업로드에 사용할 파일명
    pub filename: String,
}

impl InputFile {
    /// 경로에서 InputFile을 생성합니다. 파일명은 경로의 마지막 요소입니다.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_owned());
        Self { path, filename }
    }

    /// 파일 경로를 반환합니다.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 사용자 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 ID
    pub id: String,
    /// 이메일 주소
    pub email: String,
    /// 전화번호 (없을 수 있음)
    #[serde(default)]
    pub phone: Option<String>,
    /// 표시 이름
    pub name: String,
}

/// 사용자 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    /// 전체 레코드 수
    pub total: u64,
    /// 사용자 레코드
    pub users: Vec<User>,
}

/// 데이터베이스 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    /// 데이터베이스 ID
    pub id: String,
    /// 데이터베이스 이름
    pub name: String,
}

/// 컬렉션 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// 컬렉션 ID
    pub id: String,
    /// 소속 데이터베이스 ID
    pub database_id: String,
    /// 컬렉션 이름
    pub name: String,
    /// 컬렉션 수준 권한 (와이어 문자열 형태)
    #[serde(default)]
    pub permissions: Vec<String>,
    /// 문서 단위 권한 활성화 여부
    #[serde(default)]
    pub document_security: bool,
}

/// 컬렉션 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionList {
    /// 전체 레코드 수
    pub total: u64,
    /// 컬렉션 레코드
    pub collections: Vec<Collection>,
}

/// 속성(스키마 필드) 레코드
///
/// 속성 생성은 비동기적으로 전파됩니다. `status`가 `available`이 되기 전에
/// 해당 속성을 포함하는 인덱스를 만들면 서버가 거부할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// 속성 키
    pub key: String,
    /// 속성 타입 (string, integer, float, boolean, email)
    #[serde(rename = "type")]
    pub kind: String,
    /// 전파 상태 (processing, available 등)
    #[serde(default)]
    pub status: String,
    /// 필수 여부
    #[serde(default)]
    pub required: bool,
}

/// 인덱스 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// 인덱스 키
    pub key: String,
    /// 인덱스 타입 (fulltext 등)
    #[serde(rename = "type")]
    pub kind: String,
    /// 전파 상태
    #[serde(default)]
    pub status: String,
    /// 인덱스가 커버하는 속성 키
    pub attributes: Vec<String>,
}

/// 문서 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// 문서 ID
    pub id: String,
    /// 소속 컬렉션 ID
    pub collection_id: String,
    /// 문서 데이터 (스키마 속성 키 → 값)
    pub data: serde_json::Value,
}

/// 문서 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList {
    /// 전체 레코드 수
    pub total: u64,
    /// 문서 레코드
    pub documents: Vec<Document>,
}

/// 서버리스 함수 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Function {
    /// 함수 ID
    pub id: String,
    /// 함수 이름
    pub name: String,
    /// 런타임 식별자 (예: php-8.0)
    pub runtime: String,
    /// 실행 권한 롤 (와이어 문자열 형태)
    #[serde(default)]
    pub execute: Vec<String>,
}

/// 함수 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionList {
    /// 전체 레코드 수
    pub total: u64,
    /// 함수 레코드
    pub functions: Vec<Function>,
}

/// 함수 환경 변수 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// 변수 ID
    pub id: String,
    /// 소속 함수 ID
    pub function_id: String,
    /// 변수 키
    pub key: String,
    /// 변수 값
    pub value: String,
}

/// 스토리지 버킷 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    /// 버킷 ID
    pub id: String,
    /// 버킷 이름
    pub name: String,
    /// 버킷 수준 권한 (와이어 문자열 형태)
    #[serde(default)]
    pub permissions: Vec<String>,
    /// 파일 단위 권한 활성화 여부
    #[serde(default)]
    pub file_security: bool,
}

/// 버킷 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketList {
    /// 전체 레코드 수
    pub total: u64,
    /// 버킷 레코드
    pub buckets: Vec<Bucket>,
}

/// 스토리지 파일 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// 파일 ID
    pub id: String,
    /// 소속 버킷 ID
    pub bucket_id: String,
    /// 파일명
    pub name: String,
    /// 파일 크기 (바이트)
    #[serde(default)]
    pub size: u64,
}

/// 파일 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    /// 전체 레코드 수
    pub total: u64,
    /// 파일 레코드
    pub files: Vec<FileEntry>,
}
