//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 인증 주체를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::auth::authentication_request::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::TokenService;

/// JWT 인증 미들웨어
///
/// 토큰 검증에 사용할 [`TokenService`]를 생성 시점에 주입받습니다.
pub struct AuthMiddleware {
    /// 인증 모드 (Required/Optional)
    mode: AuthMode,
    token_service: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 새로운 인증 미들웨어 생성
    pub fn new(mode: AuthMode, token_service: Arc<TokenService>) -> Self {
        Self { mode, token_service }
    }

    /// 필수 인증 미들웨어 생성
    ///
    /// 유효한 토큰이 없으면 핸들러를 호출하지 않고 401을 반환합니다.
    pub fn required(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Required, token_service)
    }

    /// 선택적 인증 미들웨어 생성
    ///
    /// 토큰이 유효하면 주체를 저장하고, 없거나 유효하지 않아도 요청을 그대로 진행합니다.
    pub fn optional(token_service: Arc<TokenService>) -> Self {
        Self::new(AuthMode::Optional, token_service)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode.clone(),
            token_service: self.token_service.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::Duration;
    use crate::domain::auth::authenticated_user::{AuthenticatedUser, OptionalUser};

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("middleware-secret", Duration::hours(1)))
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.user_id)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        match user.0 {
            Some(user) => HttpResponse::Ok().body(user.user_id),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token() {
        let tokens = token_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/secure")
                    .wrap(AuthMiddleware::required(tokens.clone()))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/secure").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_required_accepts_valid_token() {
        let tokens = token_service();
        let token = tokens.issue("42").unwrap();
        let app = test::init_service(
            App::new().service(
                web::scope("/secure")
                    .wrap(AuthMiddleware::required(tokens.clone()))
                    .route("", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/secure")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"42"));
    }

    #[actix_web::test]
    async fn test_optional_passes_invalid_token_through() {
        let tokens = token_service();
        let app = test::init_service(
            App::new().service(
                web::scope("/open")
                    .wrap(AuthMiddleware::optional(tokens.clone()))
                    .route("", web::get().to(maybe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/open")
            .insert_header(("Authorization", "Bearer garbage"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, web::Bytes::from_static(b"anonymous"));
    }
}
