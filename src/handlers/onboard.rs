//! Onboarding HTTP Handlers
//!
//! 인증된 사용자의 투자 성향을 조회, 저장, 삭제합니다.
//! 모든 엔드포인트는 필수 인증 스코프 아래에 등록됩니다.
use actix_web::{delete, get, put, web, HttpResponse};
use crate::{
    domain::auth::authenticated_user::AuthenticatedUser,
    domain::dto::onboard::SavePreferenceRequest,
    state::AppState,
};
use crate::errors::errors::AppError;

/// 최신 투자 성향 조회
///
/// # Endpoint
/// `GET /onboard/preference`
#[get("/preference")]
pub async fn get_preference(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let preference = state.preference_service
        .get_latest(user.numeric_id()?)
        .await?;

    Ok(HttpResponse::Ok().json(preference))
}

/// 투자 성향 생성 또는 갱신
///
/// 처음 저장하면 201, 기존 값을 갱신하면 200을 반환합니다.
///
/// # Endpoint
/// `PUT /onboard/preference`
#[put("/preference")]
pub async fn save_preference(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<SavePreferenceRequest>,
) -> Result<HttpResponse, AppError> {
    let saved = state.preference_service
        .save(user.numeric_id()?, payload.into_inner())
        .await?;

    if saved.created {
        Ok(HttpResponse::Created().json(saved.preference))
    } else {
        Ok(HttpResponse::Ok().json(saved.preference))
    }
}

/// 투자 성향 삭제
///
/// # Endpoint
/// `DELETE /onboard/preference`
#[delete("/preference")]
pub async fn delete_preference(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.preference_service
        .delete(user.numeric_id()?)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::handlers::testing::test_state;
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_preference_lifecycle() {
        let state = test_state();
        let bearer = format!("Bearer {}", state.token_service.issue("1").unwrap());
        let app_state = state.clone();
        let app = test::init_service(
            App::new().configure(move |cfg| configure_all_routes(cfg, &app_state)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::put()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(json!({"riskScore": 35, "investmentPeriod": "3년"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["investmentType"], "STABLE_SEEKING");
        assert_eq!(created["investmentTypeName"], "안정추구형");

        let req = test::TestRequest::put()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(json!({"riskScore": 70, "investmentType": "AGGRESSIVE"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["id"], created["id"]);

        let req = test::TestRequest::get()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        let latest: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(latest["investmentType"], "AGGRESSIVE");
        assert_eq!(latest["riskScore"], 70);
        assert!(latest["updatedAt"].is_string());

        let req = test::TestRequest::delete()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer.clone()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);

        let req = test::TestRequest::delete()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn test_preference_requires_token() {
        let state = test_state();
        let app = test::init_service(
            App::new().configure(move |cfg| configure_all_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/onboard/preference").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_invalid_preference_is_bad_request() {
        let state = test_state();
        let bearer = format!("Bearer {}", state.token_service.issue("1").unwrap());
        let app = test::init_service(
            App::new().configure(move |cfg| configure_all_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/onboard/preference")
            .insert_header(("Authorization", bearer))
            .set_json(json!({"riskScore": 101}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "위험 점수는 0에서 100 사이여야 합니다");
    }
}
