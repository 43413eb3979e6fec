//! 설정 관리 — copperbase.toml 파싱 및 런타임 설정
//!
//! [`CopperbaseConfig`]는 플레이그라운드 전체 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`COPPERBASE_CONNECTION_ENDPOINT=...` 형식)
//! 3. 설정 파일 (`copperbase.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), copperbase_core::error::CopperbaseError> {
//! use copperbase_core::config::CopperbaseConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = CopperbaseConfig::load("copperbase.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = CopperbaseConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, CopperbaseError};

/// Copperbase 플레이그라운드 통합 설정
///
/// `copperbase.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopperbaseConfig {
    /// 원격 서비스 연결 설정
    #[serde(default)]
    pub connection: ConnectionConfig,
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 플레이그라운드 실행 설정
    #[serde(default)]
    pub playground: PlaygroundConfig,
}

impl CopperbaseConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CopperbaseError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CopperbaseError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CopperbaseError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                CopperbaseError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, CopperbaseError> {
        toml::from_str(toml_str).map_err(|e| {
            CopperbaseError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `COPPERBASE_{SECTION}_{FIELD}`
    /// 예: `COPPERBASE_CONNECTION_ENDPOINT=https://api.example.com/v1`
    pub fn apply_env_overrides(&mut self) {
        // Connection
        override_string(&mut self.connection.endpoint, "COPPERBASE_CONNECTION_ENDPOINT");
        override_string(&mut self.connection.project, "COPPERBASE_CONNECTION_PROJECT");
        override_string(&mut self.connection.api_key, "COPPERBASE_CONNECTION_API_KEY");

        // General
        override_string(&mut self.general.log_level, "COPPERBASE_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "COPPERBASE_GENERAL_LOG_FORMAT");

        // Playground
        override_string(
            &mut self.playground.upload_path,
            "COPPERBASE_PLAYGROUND_UPLOAD_PATH",
        );
        override_string(
            &mut self.playground.schema_wait,
            "COPPERBASE_PLAYGROUND_SCHEMA_WAIT",
        );
        override_u64(
            &mut self.playground.schema_wait_secs,
            "COPPERBASE_PLAYGROUND_SCHEMA_WAIT_SECS",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    ///
    /// 연결 파라미터(endpoint/project/api_key)의 완결성은 여기서 검사하지
    /// 않습니다. `config validate`가 빈 템플릿 파일에도 동작해야 하므로,
    /// 실행 직전에 [`ConnectionConfig::ensure_complete`]로 검사합니다.
    pub fn validate(&self) -> Result<(), CopperbaseError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        // endpoint가 지정된 경우 URL 스킴 검증
        if !self.connection.endpoint.is_empty()
            && !self.connection.endpoint.starts_with("http://")
            && !self.connection.endpoint.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "connection.endpoint".to_owned(),
                reason: "must start with http:// or https://".to_owned(),
            }
            .into());
        }

        // schema_wait 모드 검증
        let valid_waits = ["fixed", "none"];
        if !valid_waits.contains(&self.playground.schema_wait.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "playground.schema_wait".to_owned(),
                reason: format!("must be one of: {}", valid_waits.join(", ")),
            }
            .into());
        }

        Ok(())
    }
}

/// 원격 서비스 연결 설정
///
/// 세 연결 파라미터는 모든 원격 호출에 앞서 설정되어야 합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// API 엔드포인트 (예: `https://api.copperbase.dev/v1`)
    pub endpoint: String,
    /// 프로젝트 식별자
    pub project: String,
    /// API 키
    pub api_key: String,
}

impl ConnectionConfig {
    /// 세 연결 파라미터가 모두 채워져 있는지 검사합니다.
    ///
    /// `run` 직전에 호출됩니다. 비어 있는 필드가 있으면
    /// [`ConfigError::InvalidValue`]를 반환합니다.
    pub fn ensure_complete(&self) -> Result<(), CopperbaseError> {
        for (field, value) in [
            ("connection.endpoint", &self.endpoint),
            ("connection.project", &self.project),
            ("connection.api_key", &self.api_key),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "must be set before running the playground".to_owned(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 플레이그라운드 실행 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// 스토리지 업로드 단계에서 읽을 로컬 파일 경로
    pub upload_path: String,
    /// 스키마 전파 대기 정책 (fixed, none)
    pub schema_wait: String,
    /// fixed 모드의 대기 시간 (초)
    pub schema_wait_secs: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            upload_path: "./nature.jpg".to_owned(),
            schema_wait: "fixed".to_owned(),
            schema_wait_secs: 3,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_u64(target: &mut u64, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<u64>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse u64 from env var, ignoring"
            ),
        }
    }
}
