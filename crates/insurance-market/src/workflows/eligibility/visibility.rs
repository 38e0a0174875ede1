use std::collections::HashSet;

use super::domain::{EligibilityQuestion, QuestionId, ResponseSet, VisibilityCondition};

/// Returns the questions currently shown to the applicant, in input order.
///
/// A condition may only look at questions declared before the one it guards.
/// References to later, unknown, or unanswered questions are unsatisfied and
/// hide the question; they are never errors.
pub fn resolve_visible<'q>(
    questions: &'q [EligibilityQuestion],
    responses: &ResponseSet,
) -> Vec<&'q EligibilityQuestion> {
    let mut declared: HashSet<&QuestionId> = HashSet::with_capacity(questions.len());
    let mut visible = Vec::with_capacity(questions.len());

    for question in questions {
        let shown = match &question.visibility_condition {
            None => true,
            Some(condition) => {
                let scope = ConditionScope {
                    declared: &declared,
                    responses,
                };
                scope.satisfies(condition)
            }
        };

        if shown {
            visible.push(question);
        }
        declared.insert(&question.question_id);
    }

    visible
}

struct ConditionScope<'a> {
    declared: &'a HashSet<&'a QuestionId>,
    responses: &'a ResponseSet,
}

impl ConditionScope<'_> {
    fn satisfies(&self, condition: &VisibilityCondition) -> bool {
        match condition {
            VisibilityCondition::Always => true,
            VisibilityCondition::Equals { question_id, value } => self
                .prior_response(question_id)
                .is_some_and(|response| response.trim().eq_ignore_ascii_case(value.trim())),
            VisibilityCondition::Answered { question_id } => self
                .prior_response(question_id)
                .is_some_and(|response| !response.trim().is_empty()),
            VisibilityCondition::AnyOf { conditions } => {
                conditions.iter().any(|inner| self.satisfies(inner))
            }
            VisibilityCondition::AllOf { conditions } => {
                conditions.iter().all(|inner| self.satisfies(inner))
            }
        }
    }

    fn prior_response(&self, question_id: &QuestionId) -> Option<&str> {
        if !self.declared.contains(question_id) {
            return None;
        }
        self.responses.response(question_id)
    }
}
