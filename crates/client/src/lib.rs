#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`http`]: 연결 구성과 요청/응답 공통 처리 ([`ApiClient`])
//! - [`services`]: 리소스 그룹별 서비스 구현 (Users, Databases, Functions, Storage)
//! - [`error`]: 도메인 에러 타입
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), copperbase_client::ClientError> {
//! use copperbase_client::{ApiClient, Users};
//! use copperbase_core::config::ConnectionConfig;
//!
//! let conn = ConnectionConfig {
//!     endpoint: "https://api.copperbase.dev/v1".to_owned(),
//!     project: "playground".to_owned(),
//!     api_key: "standard_abc123".to_owned(),
//! };
//! let client = ApiClient::new(&conn)?;
//! let users = Users::new(client.clone());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod services;

// --- 주요 타입 re-export ---

// 전송 계층
pub use http::ApiClient;

// 에러
pub use error::ClientError;

// 서비스
pub use services::databases::Databases;
pub use services::functions::Functions;
pub use services::storage::Storage;
pub use services::users::Users;
