//! Functions 서비스 — 서버리스 함수 등록/변수/조회/삭제

use serde_json::json;

use copperbase_core::api::FunctionsApi;
use copperbase_core::error::CopperbaseError;
use copperbase_core::permission::Role;
use copperbase_core::types::{Function, FunctionList, Variable};

use crate::http::ApiClient;

/// Functions 리소스 그룹의 HTTP 구현
#[derive(Debug, Clone)]
pub struct Functions {
    client: ApiClient,
}

impl Functions {
    /// 공유 클라이언트로 서비스를 만듭니다.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl FunctionsApi for Functions {
    async fn create(
        &self,
        function_id: &str,
        name: &str,
        execute: &[Role],
        runtime: &str,
    ) -> Result<Function, CopperbaseError> {
        let body = json!({
            "function_id": function_id,
            "name": name,
            "execute": execute,
            "runtime": runtime,
        });
        Ok(self.client.post_json("/functions", &body).await?)
    }

    async fn create_variable(
        &self,
        function_id: &str,
        key: &str,
        value: &str,
    ) -> Result<Variable, CopperbaseError> {
        let body = json!({ "key": key, "value": value });
        Ok(self
            .client
            .post_json(&format!("/functions/{function_id}/variables"), &body)
            .await?)
    }

    async fn list(&self) -> Result<FunctionList, CopperbaseError> {
        Ok(self.client.get_json("/functions").await?)
    }

    async fn delete(&self, function_id: &str) -> Result<(), CopperbaseError> {
        Ok(self
            .client
            .delete(&format!("/functions/{function_id}"))
            .await?)
    }
}
