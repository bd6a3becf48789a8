//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `email_unique`, `nick_unique` 인덱스가 유일성의 최종 기준
//! - **원자적 저장**: 사용자 생성은 단일 `insert_one`이므로 실패 시 부분 저장이 남지 않음
//! - **에러 분류**: 중복 키(11000) 에러는 [`StoreError::Duplicate`]로, 나머지는 [`StoreError::Backend`]로 변환

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    repositories::users::user_store::{StoreError, UserStore},
};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    /// 컬렉션 핸들을 만들고 유니크 인덱스를 보장합니다.
    pub async fn new(db: &Database) -> Result<Self, StoreError> {
        let store = Self {
            collection: db.get_database().collection::<User>(COLLECTION_NAME),
        };
        store.create_indexes().await?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료 ({})", db.database_name());
        Ok(store)
    }

    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 닉네임 유니크 인덱스
        let nick_index = IndexModel::builder()
            .keys(doc! { "nick": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("nick_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, nick_index])
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn create(&self, mut user: User) -> Result<User, StoreError> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    StoreError::Duplicate(e.to_string())
                } else {
                    backend_error(e)
                }
            })?;

        let id = result.inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    async fn find_by_email_or_nick(&self, email: &str, nick: &str) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "$or": [ { "email": email }, { "nick": nick } ] })
            .await
            .map_err(backend_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(backend_error)
    }
}

fn backend_error(e: mongodb::error::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
