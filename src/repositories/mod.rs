//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 저장소 trait 객체(`Arc<dyn UserStore>`)를 생성자로 주입받습니다.
//! MongoDB를 주 저장소로 사용하며, 테스트에서는 인메모리 구현으로 대체합니다.

pub mod users;
