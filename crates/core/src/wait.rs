//! 대기 정책 — 스키마 전파를 기다리는 방식
//!
//! 속성 생성 직후 인덱스를 요청하면 백엔드의 스키마 전파가 끝나기 전이라
//! 거부될 수 있습니다. 고정 지연을 설정으로 노출하고, 테스트에서는
//! `None`으로 대기를 생략합니다.

use std::time::Duration;

use crate::config::PlaygroundConfig;
use crate::error::{ConfigError, CopperbaseError};

/// 스키마 전파 대기 정책
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitPolicy {
    /// 대기하지 않음 (테스트용)
    None,
    /// 고정 시간 대기
    Fixed(Duration),
}

impl WaitPolicy {
    /// 플레이그라운드 설정에서 대기 정책을 만듭니다.
    pub fn from_config(config: &PlaygroundConfig) -> Result<Self, CopperbaseError> {
        match config.schema_wait.as_str() {
            "none" => Ok(WaitPolicy::None),
            "fixed" => Ok(WaitPolicy::Fixed(Duration::from_secs(
                config.schema_wait_secs,
            ))),
            other => Err(ConfigError::InvalidValue {
                field: "playground.schema_wait".to_owned(),
                reason: format!("unknown wait mode '{other}'"),
            }
            .into()),
        }
    }

    /// 정책에 따라 대기합니다.
    pub async fn settle(&self) {
        match self {
            WaitPolicy::None => {}
            WaitPolicy::Fixed(duration) => {
                tracing::debug!(secs = duration.as_secs(), "waiting for schema propagation");
                tokio::time::sleep(*duration).await;
            }
        }
    }
}
