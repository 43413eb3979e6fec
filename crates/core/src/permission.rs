//! 권한 모델 — (액션, 롤) 쌍의 와이어 표현
//!
//! 원격 서비스의 권한은 `action("role")` 형태의 문자열 배열로 전송됩니다.
//! 예: `read("any")`, `update("users")`, `delete("user:abc123")`.

use std::fmt;

use serde::{Serialize, Serializer};

/// 권한이 적용되는 호출자 범위
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// 모든 호출자
    Any,
    /// 로그인한 모든 사용자
    Users,
    /// 특정 사용자
    User(String),
    /// 특정 팀
    Team(String),
}

impl Role {
    /// 모든 호출자 롤
    pub fn any() -> Self {
        Role::Any
    }

    /// 로그인 사용자 롤
    pub fn users() -> Self {
        Role::Users
    }

    /// 특정 사용자 롤
    pub fn user(id: impl Into<String>) -> Self {
        Role::User(id.into())
    }

    /// 특정 팀 롤
    pub fn team(id: impl Into<String>) -> Self {
        Role::Team(id.into())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => write!(f, "any"),
            Role::Users => write!(f, "users"),
            Role::User(id) => write!(f, "user:{id}"),
            Role::Team(id) => write!(f, "team:{id}"),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 권한이 허용하는 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 레코드 생성
    Create,
    /// 레코드 조회
    Read,
    /// 레코드 수정
    Update,
    /// 레코드 삭제
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        write!(f, "{s}")
    }
}

/// (액션, 롤) 권한 쌍
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    action: Action,
    role: Role,
}

impl Permission {
    /// `create("role")` 권한
    pub fn create(role: Role) -> Self {
        Self {
            action: Action::Create,
            role,
        }
    }

    /// `read("role")` 권한
    pub fn read(role: Role) -> Self {
        Self {
            action: Action::Read,
            role,
        }
    }

    /// `update("role")` 권한
    pub fn update(role: Role) -> Self {
        Self {
            action: Action::Update,
            role,
        }
    }

    /// `delete("role")` 권한
    pub fn delete(role: Role) -> Self {
        Self {
            action: Action::Delete,
            role,
        }
    }

    /// 권한의 액션
    pub fn action(&self) -> Action {
        self.action
    }

    /// 권한의 롤
    pub fn role(&self) -> &Role {
        &self.role
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.action, self.role)
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
