//! HTTP 전송 계층 — 연결 구성과 요청/응답 공통 처리
//!
//! [`ApiClient`]는 연결 설정으로 reqwest 클라이언트를 구성합니다.
//! 프로젝트/키 헤더는 모든 요청에 기본으로 실리고, 비정상 응답은
//! `{message, kind}` 에러 본문을 [`ClientError::Remote`]로 디코딩합니다.

use reqwest::Response;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use copperbase_core::config::ConnectionConfig;

use crate::error::ClientError;

/// 프로젝트 식별 헤더
const HEADER_PROJECT: &str = "x-copperbase-project";
/// API 키 헤더
const HEADER_KEY: &str = "x-copperbase-key";

/// 원격 서비스가 반환하는 에러 본문
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    kind: String,
}

/// Copperbase HTTP 클라이언트
///
/// 서비스 구조체들이 공유하는 얇은 전송 계층입니다. reqwest 클라이언트는
/// 내부적으로 커넥션 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// 연결 설정으로 클라이언트를 만듭니다.
    ///
    /// 엔드포인트 URL을 검증하고 프로젝트/키 헤더를 기본 헤더로 등록합니다.
    pub fn new(conn: &ConnectionConfig) -> Result<Self, ClientError> {
        let url = reqwest::Url::parse(&conn.endpoint).map_err(|e| {
            ClientError::InvalidConnection {
                name: "endpoint".to_owned(),
                reason: e.to_string(),
            }
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(HEADER_PROJECT, header_value("project", &conn.project)?);
        headers.insert(HEADER_KEY, header_value("api_key", &conn.api_key)?);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base: url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// base + path 결합. `path`는 `/`로 시작해야 합니다.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// GET 요청을 보내고 JSON 응답을 디코딩합니다.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        let resp = self.http.get(self.url(path)).send().await?;
        decode_json(resp).await
    }

    /// JSON 본문과 함께 POST 요청을 보내고 JSON 응답을 디코딩합니다.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        decode_json(resp).await
    }

    /// 멀티파트 본문과 함께 POST 요청을 보내고 JSON 응답을 디코딩합니다.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "POST (multipart)");
        let resp = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        decode_json(resp).await
    }

    /// DELETE 요청을 보냅니다. 2xx 응답이면 본문은 무시합니다.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        tracing::debug!(path, "DELETE");
        let resp = self.http.delete(self.url(path)).send().await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(remote_error(resp).await)
        }
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ClientError> {
    value
        .parse::<HeaderValue>()
        .map_err(|e| ClientError::InvalidConnection {
            name: name.to_owned(),
            reason: e.to_string(),
        })
}

/// 응답 상태를 검사하고 JSON 본문을 디코딩합니다.
async fn decode_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        return Err(remote_error(resp).await);
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// 비정상 응답을 [`ClientError::Remote`]로 변환합니다.
async fn remote_error(resp: Response) -> ClientError {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await.unwrap_or_default();
    decode_error(status, &bytes)
}

/// 에러 본문을 파싱합니다. JSON이 아니면 본문을 그대로 메시지로 씁니다.
pub(crate) fn decode_error(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => ClientError::Remote {
            status,
            kind: parsed.kind,
            message: parsed.message,
        },
        Err(_) => ClientError::Remote {
            status,
            kind: "unknown".to_owned(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
