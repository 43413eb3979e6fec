#![doc = include_str!("../README.md")]

pub mod api;
pub mod config;
pub mod error;
pub mod permission;
pub mod types;
pub mod wait;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ApiError, ConfigError, CopperbaseError};

// 설정
pub use config::CopperbaseConfig;

// 서비스 trait
pub use api::{DatabasesApi, FunctionsApi, StorageApi, UsersApi};

// 권한
pub use permission::{Action, Permission, Role};

// 대기 정책
pub use wait::WaitPolicy;

// 도메인 타입
pub use types::{
    Attribute, Bucket, BucketList, Collection, CollectionList, Database, Document, DocumentList,
    FileEntry, FileList, Function, FunctionList, Index, InputFile, User, UserList, Variable,
    unique_id,
};
