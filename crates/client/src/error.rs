//! 클라이언트 에러 타입
//!
//! [`ClientError`]는 HTTP 클라이언트 내부에서 발생하는 모든 에러를 표현합니다.
//! `From<ClientError> for CopperbaseError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.

use copperbase_core::error::{ApiError, ConfigError, CopperbaseError};

/// HTTP 클라이언트 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 유효하지 않은 연결 파라미터 (엔드포인트 URL, 헤더 값 등)
    #[error("invalid connection value for '{name}': {reason}")]
    InvalidConnection {
        /// 문제가 된 파라미터명
        name: String,
        /// 실패 사유
        reason: String,
    },

    /// 네트워크 전송 실패
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 원격 서비스가 요청을 거부함 (4xx/5xx 응답)
    #[error("remote service returned {status}: {kind}: {message}")]
    Remote {
        /// HTTP 상태 코드
        status: u16,
        /// 서비스가 보고한 에러 종류
        kind: String,
        /// 사람이 읽을 수 있는 메시지
        message: String,
    },

    /// 응답 본문 디코딩 실패
    #[error("response decode error: {0}")]
    Decode(String),

    /// I/O 에러 (업로드할 로컬 파일 읽기 등)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ClientError> for CopperbaseError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidConnection { name, reason } => ConfigError::InvalidValue {
                field: format!("connection.{name}"),
                reason,
            }
            .into(),
            ClientError::Transport(e) => ApiError::Transport(e.to_string()).into(),
            ClientError::Remote {
                status,
                kind,
                message,
            } => ApiError::Remote {
                status,
                kind,
                message,
            }
            .into(),
            ClientError::Decode(reason) => ApiError::Decode(reason).into(),
            ClientError::Io(e) => CopperbaseError::Io(e),
        }
    }
}
