//! 에러 타입 — 도메인별 에러 정의

/// Copperbase 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum CopperbaseError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 원격 API 호출 에러
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 원격 API 호출 에러
///
/// 플레이그라운드는 실패를 복구하지 않습니다. 원격 호출이 실패하면
/// 이 에러가 최상위까지 전파되어 실행 전체가 중단됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
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

    /// 네트워크 전송 실패 (연결 거부, 타임아웃 등)
    #[error("transport error: {0}")]
    Transport(String),

    /// 응답 본문 디코딩 실패
    #[error("response decode error: {0}")]
    Decode(String),
}
