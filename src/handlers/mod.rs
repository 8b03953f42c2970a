//! HTTP 요청 핸들러 모듈
//!
//! 라우트에서 호출되는 핸들러 함수들입니다. 핸들러는 `web::Data<UserService>`로
//! 주입된 서비스에 위임하고, 결과를 JSON 응답으로 변환합니다.

pub mod users;
