//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 JSON 계약을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **camelCase 키**: 모든 응답 DTO는 `#[serde(rename_all = "camelCase")]`
//! - **ISO 8601 시각**: 시각 필드는 숫자 timestamp가 아닌 문자열로 직렬화
//! - **빈 문자열 = 값 없음**: 선택 입력 필드는 빈 문자열을 `None`으로 취급
//! - **변환 패턴**: `impl From<Entity> for Response`
//!
//! ```text
//! dto/
//! ├── users/     인증 요청/응답 (카카오 로그인, 내 정보, 로그아웃)
//! └── onboard/   투자 성향 저장 요청/응답
//! ```

pub mod users;
pub mod onboard;
