use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 클라이언트에 노출되는 사용자 정보
///
/// 비밀번호 해시와 생성 시간은 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub nick: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, email, nick, .. } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            nick,
        }
    }
}

/// 회원가입 성공 응답 (`201`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub message: String,
}

impl RegisterResponse {
    pub fn success() -> Self {
        Self {
            message: "사용자가 성공적으로 등록되었습니다".to_string(),
        }
    }
}

/// 로그인 성공 응답 (`200`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            token,
            user: UserResponse::from(user),
        }
    }
}
