//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 회원가입 시 한 번 생성되며 이후에는 변경되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `email`과 `nick`은 전체 사용자 중 유일하며,
/// `password_hash`에는 항상 bcrypt 해시만 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 닉네임 (unique, 영숫자)
    pub nick: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 저장 전의 새 사용자를 생성합니다.
    ///
    /// ID는 저장소가 할당합니다.
    pub fn new(email: String, nick: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            nick,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("a@b.com".to_string(), "abc123".to_string(), "$2b$04$hash".to_string());

        assert!(user.id.is_none());
        assert!(user.id_string().is_none());
    }

    #[test]
    fn test_serialization_skips_missing_id() {
        let user = User::new("a@b.com".to_string(), "abc123".to_string(), "$2b$04$hash".to_string());
        let document = mongodb::bson::to_document(&user).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("nick").unwrap(), "abc123");
    }

    #[test]
    fn test_id_string_is_hex() {
        let mut user = User::new("a@b.com".to_string(), "abc123".to_string(), "$2b$04$hash".to_string());
        let id = ObjectId::new();
        user.id = Some(id);

        assert_eq!(user.id_string(), Some(id.to_hex()));
    }
}
