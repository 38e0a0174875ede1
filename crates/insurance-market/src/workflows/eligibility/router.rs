use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::domain::{DynamicQuestionResponse, EligibilityQuestion, QuestionSet, ResponseSet};

/// Question set plus the applicant's answers so far.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    pub questions: Vec<EligibilityQuestion>,
    #[serde(default)]
    pub responses: Vec<DynamicQuestionResponse>,
}

/// Router exposing questionnaire validation.
pub fn eligibility_router() -> Router {
    Router::new().route("/api/v1/eligibility/validate", post(validate_handler))
}

pub(crate) async fn validate_handler(
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response {
    let EligibilityRequest {
        questions,
        responses,
    } = request;

    let question_set = match QuestionSet::new(questions) {
        Ok(set) => set,
        Err(error) => {
            debug!(%error, "rejected eligibility question set");
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let responses: ResponseSet = responses.into_iter().collect();
    let evaluation = question_set.evaluate(&responses);

    debug!(
        questions = question_set.len(),
        answers = responses.len(),
        visible = evaluation.visible_question_ids.len(),
        missing = evaluation.errors.len(),
        "evaluated eligibility questionnaire"
    );

    (StatusCode::OK, axum::Json(evaluation)).into_response()
}
