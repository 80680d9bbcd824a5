//! Authentication HTTP Handlers
//!
//! 카카오 OAuth 로그인과 JWT 토큰 기반 인증 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 토큰은 상태 없이 발급되므로 로그아웃은 클라이언트의 토큰 폐기로 끝납니다.
//!
//! # Endpoints
//!
//! - **카카오 로그인**: `POST /auth/kakao`
//! - **현재 사용자**: `GET /auth/me`
//! - **로그아웃**: `POST /auth/logout`
//! - **인가 코드 전달**: `GET /auth/kakao/code`
//! - **카카오 로그인 URL**: `GET /auth/kakao/login`
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    domain::auth::authenticated_user::OptionalUser,
    domain::dto::users::{
        request::{KakaoCodeQuery, KakaoLoginRequest, AUTHORIZATION_CODE_REQUIRED},
        response::{KakaoCodeResponse, KakaoLoginUrlResponse, LoginResponse, MessageResponse},
    },
    state::AppState,
    utils::string_utils::validation_message,
};
use crate::errors::errors::AppError;

/// 카카오 로그인 핸들러
///
/// 인가 코드를 카카오 프로필로 교환하고, 사용자를 찾거나 만든 뒤 액세스 토큰을 발급합니다.
/// 코드가 없으면 토큰을 발급하지 않고 400을 반환하며, 교환/저장/토큰 단계의 모든 실패도
/// `로그인에 실패했습니다: <사유>` 메시지의 400으로 응답합니다.
///
/// # Endpoint
/// `POST /auth/kakao`
///
/// ```json
/// {"code": "abc123"}
/// ```
#[post("/kakao")]
pub async fn kakao_login(
    state: web::Data<AppState>,
    payload: web::Json<KakaoLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    let code = payload
        .into_inner()
        .code
        .ok_or_else(|| AppError::ValidationError(AUTHORIZATION_CODE_REQUIRED.to_string()))?;

    let result = async {
        let user = state.kakao_auth.process_login(&code).await?;
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let access_token = state.token_service.issue(&user_id)?;

        Ok::<_, AppError>(LoginResponse::new(user, access_token))
    }
    .await;

    match result {
        Ok(response) => {
            log::info!("✅ 카카오 로그인 성공: user_id={}", response.user.id);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::warn!("❌ 카카오 로그인 실패: {}", e);
            Err(AppError::ValidationError(format!("로그인에 실패했습니다: {}", e)))
        }
    }
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// 인증 미들웨어(선택 모드)가 저장한 주체로 최신 사용자 정보를 조회합니다.
///
/// # Endpoint
/// `GET /auth/me`
///
/// # Errors
///
/// * 401 - 주체 없음 (토큰 누락, 만료, 서명 불일치)
/// * 404 - 토큰의 사용자가 존재하지 않음
#[get("/me")]
pub async fn get_current_user(
    state: web::Data<AppState>,
    principal: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let principal = principal.0
        .ok_or_else(|| AppError::AuthenticationError("인증되지 않은 요청입니다".to_string()))?;

    let user = state.user_service
        .get_user_by_id(principal.numeric_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 로그아웃 엔드포인트
///
/// 서버에 세션이 없으므로 항상 성공합니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::logged_out())
}

/// 카카오 인가 코드 전달 핸들러
///
/// 카카오 리다이렉트로 받은 쿼리를 그대로 돌려줍니다. 로그인은 수행하지 않습니다.
///
/// # Endpoint
/// `GET /auth/kakao/code?code={code}` / `GET /auth/kakao/code?error={error}`
#[get("/kakao/code")]
pub async fn kakao_code(
    query: web::Query<KakaoCodeQuery>,
) -> Result<HttpResponse, AppError> {
    let KakaoCodeQuery { code, error, error_description } = query.into_inner();

    if let Some(error) = error {
        log::warn!("카카오 인가 에러: {} ({:?})", error, error_description);
        let message = match error_description {
            Some(description) => format!("카카오 인증 실패: {} - {}", error, description),
            None => format!("카카오 인증 실패: {}", error),
        };
        return Err(AppError::ValidationError(message));
    }

    let code = code
        .ok_or_else(|| AppError::ValidationError(AUTHORIZATION_CODE_REQUIRED.to_string()))?;

    Ok(HttpResponse::Ok().json(KakaoCodeResponse { code }))
}

/// 카카오 로그인 URL 생성 핸들러
///
/// # Endpoint
/// `GET /auth/kakao/login`
#[get("/kakao/login")]
pub async fn kakao_login_url(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(KakaoLoginUrlResponse {
        login_url: state.kakao_auth.login_url(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::handlers::testing::{test_state, ABC_CODE};
    use crate::routes::configure_all_routes;

    macro_rules! init_app {
        ($state:expr) => {{
            let state = $state.clone();
            test::init_service(App::new().configure(move |cfg| configure_all_routes(cfg, &state))).await
        }};
    }

    #[actix_web::test]
    async fn test_login_with_valid_code() {
        let state = test_state();
        let app = init_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/kakao")
            .set_json(json!({"code": ABC_CODE}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["name"], "홍길동");
        assert_eq!(body["user"]["email"], "user@example.com");
        assert_eq!(body["user"]["provider"], "KAKAO");
        assert_eq!(body["user"]["role"], "USER");

        let token = body["accessToken"].as_str().unwrap();
        let claims = state.token_service.verify(token).unwrap();
        assert_eq!(claims.sub, body["user"]["id"].as_i64().unwrap().to_string());
    }

    #[actix_web::test]
    async fn test_login_without_code() {
        let app = init_app!(test_state());

        for body in [json!({"code": ""}), json!({}), json!({"code": null})] {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/kakao")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({"error": "Authorization code is required"}));
        }
    }

    #[actix_web::test]
    async fn test_reused_code_fails_and_identity_is_stable() {
        let app = init_app!(test_state());

        let login = |code: &'static str| {
            test::TestRequest::post()
                .uri("/api/v1/auth/kakao")
                .set_json(json!({"code": code}))
                .to_request()
        };

        let first: Value = test::call_and_read_body_json(&app, login(ABC_CODE)).await;

        let resp = test::call_service(&app, login(ABC_CODE)).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("로그인에 실패했습니다: "));

        let second: Value = test::call_and_read_body_json(&app, login("def456")).await;
        assert_eq!(first["user"]["id"], second["user"]["id"]);
    }

    #[actix_web::test]
    async fn test_me_returns_login_profile() {
        let app = init_app!(test_state());

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/kakao")
            .set_json(json!({"code": ABC_CODE}))
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, req).await;
        let token = login["accessToken"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let me: Value = test::read_body_json(resp).await;
        assert_eq!(me, login["user"]);
    }

    #[actix_web::test]
    async fn test_me_without_principal_is_unauthorized() {
        let app = init_app!(test_state());

        let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);
    }

    #[actix_web::test]
    async fn test_me_unknown_user_is_not_found() {
        let state = test_state();
        let token = state.token_service.issue("9999").unwrap();
        let app = init_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_logout_always_succeeds() {
        let app = init_app!(test_state());

        let req = test::TestRequest::post().uri("/api/v1/auth/logout").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({"message": "Successfully logged out"}));
    }

    #[actix_web::test]
    async fn test_kakao_code_passthrough() {
        let app = init_app!(test_state());

        let req = test::TestRequest::get().uri("/api/v1/auth/kakao/code?code=xyz").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"code": "xyz"}));

        let req = test::TestRequest::get()
            .uri("/api/v1/auth/kakao/code?error=access_denied")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("access_denied"));

        let req = test::TestRequest::get().uri("/api/v1/auth/kakao/code").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authorization code is required");
    }

    #[actix_web::test]
    async fn test_kakao_login_url() {
        let app = init_app!(test_state());

        let req = test::TestRequest::get().uri("/api/v1/auth/kakao/login").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["loginUrl"].as_str().unwrap().contains("response_type=code"));
    }
}
