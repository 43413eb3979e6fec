//! Users 서비스 — 사용자 생성/조회/삭제

use serde_json::json;

use copperbase_core::api::UsersApi;
use copperbase_core::error::CopperbaseError;
use copperbase_core::types::{User, UserList};

use crate::http::ApiClient;

/// Users 리소스 그룹의 HTTP 구현
#[derive(Debug, Clone)]
pub struct Users {
    client: ApiClient,
}

impl Users {
    /// 공유 클라이언트로 서비스를 만듭니다.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl UsersApi for Users {
    async fn create(
        &self,
        user_id: &str,
        email: &str,
        phone: Option<&str>,
        password: &str,
        name: &str,
    ) -> Result<User, CopperbaseError> {
        let body = json!({
            "user_id": user_id,
            "email": email,
            "phone": phone,
            "password": password,
            "name": name,
        });
        Ok(self.client.post_json("/users", &body).await?)
    }

    async fn list(&self) -> Result<UserList, CopperbaseError> {
        Ok(self.client.get_json("/users").await?)
    }

    async fn delete(&self, user_id: &str) -> Result<(), CopperbaseError> {
        Ok(self.client.delete(&format!("/users/{user_id}")).await?)
    }
}
