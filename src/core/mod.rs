//! # Core Module
//!
//! 애플리케이션 구성 요소의 생성과 연결을 담당합니다.
//!
//! 서비스는 전역 싱글톤이 아닌 생성자 주입으로 의존성을 받으며,
//! [`AppServices`]가 저장소·해셔·토큰 발급기를 한 번 조립해 `web::Data`로 공유합니다.
//!
//! ```rust,ignore
//! use crate::core::AppServices;
//!
//! let store = AppServices::init_user_store(StoreBackend::current()).await?;
//! let services = AppServices::from_config(store);
//!
//! App::new().app_data(web::Data::new(services))
//! ```

pub mod container;

pub use container::AppServices;
