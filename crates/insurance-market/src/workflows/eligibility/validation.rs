use serde::Serialize;

use super::domain::{EligibilityQuestion, QuestionId, QuestionSet, ResponseSet};
use super::visibility::resolve_visible;

pub fn required_message(question_id: &QuestionId) -> String {
    format!("Question {question_id} is required")
}

/// One message per visible question lacking a non-blank answer, in question order.
pub fn required_errors<'q, I>(visible: I, responses: &ResponseSet) -> Vec<String>
where
    I: IntoIterator<Item = &'q EligibilityQuestion>,
{
    visible
        .into_iter()
        .filter(|question| !responses.is_answered(&question.question_id))
        .map(|question| required_message(&question.question_id))
        .collect()
}

/// Visibility and required-answer findings for one question set snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityEvaluation {
    pub visible_question_ids: Vec<QuestionId>,
    pub errors: Vec<String>,
    pub is_complete: bool,
}

pub fn evaluate(
    questions: &[EligibilityQuestion],
    responses: &ResponseSet,
) -> EligibilityEvaluation {
    let visible = resolve_visible(questions, responses);
    let errors = required_errors(visible.iter().copied(), responses);

    EligibilityEvaluation {
        visible_question_ids: visible
            .iter()
            .map(|question| question.question_id.clone())
            .collect(),
        is_complete: errors.is_empty(),
        errors,
    }
}

impl QuestionSet {
    pub fn evaluate(&self, responses: &ResponseSet) -> EligibilityEvaluation {
        evaluate(self.questions(), responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::eligibility::domain::VisibilityCondition;

    #[test]
    fn blank_and_missing_answers_are_reported_in_order() {
        let questions = vec![
            EligibilityQuestion::new("7", "Current carrier"),
            EligibilityQuestion::new("3", "Prior claims"),
            EligibilityQuestion::new("5", "Household size"),
        ];
        let responses: ResponseSet = [("3", "   "), ("5", "4")].into_iter().collect();

        assert_eq!(
            required_errors(&questions, &responses),
            ["Question 7 is required", "Question 3 is required"]
        );
    }

    #[test]
    fn empty_input_yields_no_errors() {
        let questions: Vec<EligibilityQuestion> = Vec::new();
        assert!(required_errors(&questions, &ResponseSet::new()).is_empty());
    }

    #[test]
    fn responses_for_unknown_questions_are_ignored() {
        let questions = vec![EligibilityQuestion::new("1", "Zip of residence")];
        let responses: ResponseSet = [("1", "78701"), ("404", "stray")].into_iter().collect();
        assert!(required_errors(&questions, &responses).is_empty());
    }

    #[test]
    fn evaluate_reports_hidden_follow_ups_as_not_required() {
        let questions = vec![
            EligibilityQuestion::new("1", "Tobacco?"),
            EligibilityQuestion::new("2", "Which?")
                .shown_when(VisibilityCondition::equals("1", "yes")),
        ];

        let pending = evaluate(&questions, &[("1", "yes")].into_iter().collect());
        assert_eq!(
            pending.visible_question_ids,
            vec![QuestionId::from("1"), QuestionId::from("2")]
        );
        assert_eq!(pending.errors, vec!["Question 2 is required".to_string()]);
        assert!(!pending.is_complete);

        let done = evaluate(&questions, &[("1", "no")].into_iter().collect());
        assert_eq!(done.visible_question_ids, vec![QuestionId::from("1")]);
        assert!(done.errors.is_empty());
        assert!(done.is_complete);
    }

    #[test]
    fn evaluation_serializes_camel_case() {
        let questions = [EligibilityQuestion::new("1", "Tobacco?")];
        let evaluation = evaluate(&questions, &ResponseSet::new());
        let value = serde_json::to_value(&evaluation).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({
                "visibleQuestionIds": ["1"],
                "errors": ["Question 1 is required"],
                "isComplete": false
            })
        );
    }
}
