use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedLearner,
    errors::AppError,
    models::dto::request::{QuizQueryParams, SubmitQuizRequest},
    models::dto::response::ApiResponse,
};

/// Fetch a quiz to take (session mode) or review (`include_answers=true`,
/// authors only). Session mode samples a fresh question set and strips
/// canonical answers.
#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    query: web::Query<QuizQueryParams>,
    auth: AuthenticatedLearner,
) -> Result<HttpResponse, AppError> {
    if query.include_answers {
        let response = state.quiz_service.get_quiz_review(&auth.0, &quiz_id).await?;
        Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
    } else {
        let response = state.quiz_service.get_quiz_session(&quiz_id).await?;
        Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
    }
}

#[post("/api/quizzes/{quiz_id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedLearner,
) -> Result<HttpResponse, AppError> {
    let response = state
        .submission_service
        .submit(&auth.0, &quiz_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(response)))
}

#[get("/api/quizzes/{quiz_id}/attempts")]
pub async fn list_attempts(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    auth: AuthenticatedLearner,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.list_attempts(&auth.0, &quiz_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

#[get("/api/questions/{question_id}/hint")]
pub async fn get_hint(
    state: web::Data<AppState>,
    question_id: web::Path<String>,
    _auth: AuthenticatedLearner,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.get_hint(&question_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}
