//! Carrier eligibility questionnaires: which questions are showing and which
//! of those still need an answer.

pub mod domain;
pub mod router;
pub mod validation;
pub mod visibility;

pub use domain::{
    DynamicQuestionResponse, EligibilityQuestion, QuestionId, QuestionSet, QuestionSetError,
    ResponseSet, VisibilityCondition,
};
pub use router::{eligibility_router, EligibilityRequest};
pub use validation::{evaluate, required_errors, required_message, EligibilityEvaluation};
pub use visibility::resolve_visible;
