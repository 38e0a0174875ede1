use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a carrier eligibility question.
///
/// Carriers send ids either as JSON strings or integers; both forms become the
/// same textual id so `1` and `"1"` refer to one question.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawQuestionId {
            Text(String),
            Number(u64),
        }

        Ok(match RawQuestionId::deserialize(deserializer)? {
            RawQuestionId::Text(value) => QuestionId(value),
            RawQuestionId::Number(value) => QuestionId(value.to_string()),
        })
    }
}

/// Display rule attached to a question, evaluated against earlier answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VisibilityCondition {
    Always,
    /// The referenced question's answer matches `value` (trimmed, ASCII case-insensitive).
    Equals {
        #[serde(rename = "questionId")]
        question_id: QuestionId,
        value: String,
    },
    /// The referenced question has a non-blank answer.
    Answered {
        #[serde(rename = "questionId")]
        question_id: QuestionId,
    },
    AnyOf {
        conditions: Vec<VisibilityCondition>,
    },
    AllOf {
        conditions: Vec<VisibilityCondition>,
    },
}

impl VisibilityCondition {
    pub fn equals(question_id: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self::Equals {
            question_id: question_id.into(),
            value: value.into(),
        }
    }

    pub fn answered(question_id: impl Into<QuestionId>) -> Self {
        Self::Answered {
            question_id: question_id.into(),
        }
    }
}

/// A dynamically supplied eligibility question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityQuestion {
    pub question_id: QuestionId,
    #[serde(default)]
    pub text: String,
    /// `None` means the question is always shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_condition: Option<VisibilityCondition>,
}

impl EligibilityQuestion {
    pub fn new(question_id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            text: text.into(),
            visibility_condition: None,
        }
    }

    pub fn shown_when(mut self, condition: VisibilityCondition) -> Self {
        self.visibility_condition = Some(condition);
        self
    }
}

/// One applicant answer as posted by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicQuestionResponse {
    pub question_id: QuestionId,
    #[serde(default)]
    pub response: String,
}

/// Immutable snapshot of the applicant's answers, at most one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, String>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer for the same question.
    pub fn insert(&mut self, question_id: impl Into<QuestionId>, response: impl Into<String>) {
        self.answers.insert(question_id.into(), response.into());
    }

    pub fn response(&self, question_id: &QuestionId) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// An answer counts only when it has non-whitespace content.
    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.response(question_id)
            .is_some_and(|response| !response.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<DynamicQuestionResponse> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = DynamicQuestionResponse>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for entry in iter {
            set.insert(entry.question_id, entry.response);
        }
        set
    }
}

impl<K, V> FromIterator<(K, V)> for ResponseSet
where
    K: Into<QuestionId>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ResponseSet::new();
        for (question_id, response) in iter {
            set.insert(question_id, response);
        }
        set
    }
}

/// Ordered question set whose ids are known to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<EligibilityQuestion>,
}

impl QuestionSet {
    pub fn new(questions: Vec<EligibilityQuestion>) -> Result<Self, QuestionSetError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(&question.question_id) {
                return Err(QuestionSetError::DuplicateQuestionId(
                    question.question_id.clone(),
                ));
            }
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[EligibilityQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionSetError {
    #[error("question id {0} appears more than once in the question set")]
    DuplicateQuestionId(QuestionId),
}
