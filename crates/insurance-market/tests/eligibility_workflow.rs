//! End-to-end questionnaire scenarios through the public eligibility API.

use insurance_market::workflows::eligibility::{
    evaluate, required_errors, resolve_visible, EligibilityQuestion, QuestionId, QuestionSet,
    ResponseSet, VisibilityCondition,
};

fn tobacco_questions() -> Vec<EligibilityQuestion> {
    vec![
        EligibilityQuestion::new(1u64, "Have you used tobacco in the last 12 months?"),
        EligibilityQuestion::new(2u64, "Which tobacco products?")
            .shown_when(VisibilityCondition::equals(1u64, "yes")),
    ]
}

fn visible_ids(questions: &[EligibilityQuestion], responses: &ResponseSet) -> Vec<String> {
    resolve_visible(questions, responses)
        .into_iter()
        .map(|question| question.question_id.to_string())
        .collect()
}

#[test]
fn follow_up_required_once_triggered() {
    let questions = tobacco_questions();
    let responses: ResponseSet = [("1", "yes")].into_iter().collect();

    assert_eq!(visible_ids(&questions, &responses), ["1", "2"]);
    let visible = resolve_visible(&questions, &responses);
    assert_eq!(
        required_errors(visible, &responses),
        ["Question 2 is required"]
    );
}

#[test]
fn follow_up_not_required_when_hidden() {
    let questions = tobacco_questions();
    let responses: ResponseSet = [("1", "no")].into_iter().collect();

    assert_eq!(visible_ids(&questions, &responses), ["1"]);
    let visible = resolve_visible(&questions, &responses);
    assert!(required_errors(visible, &responses).is_empty());
}

#[test]
fn repeated_validation_is_stable() {
    let questions = tobacco_questions();
    let responses: ResponseSet = [("1", "yes"), ("2", " ")].into_iter().collect();

    let first = required_errors(resolve_visible(&questions, &responses), &responses);
    let second = required_errors(resolve_visible(&questions, &responses), &responses);
    assert_eq!(first, second);
    assert_eq!(first, ["Question 2 is required"]);
}

fn medical_questionnaire() -> Vec<EligibilityQuestion> {
    vec![
        EligibilityQuestion::new("height", "Height in inches"),
        EligibilityQuestion::new("hospital", "Hospitalized in the last 5 years?"),
        EligibilityQuestion::new("hospital_reason", "Reason for stay")
            .shown_when(VisibilityCondition::equals("hospital", "yes")),
        EligibilityQuestion::new("hospital_date", "Discharge date")
            .shown_when(VisibilityCondition::answered("hospital_reason")),
        EligibilityQuestion::new("meds", "Taking prescription medication?"),
        EligibilityQuestion::new("meds_list", "List medications").shown_when(
            VisibilityCondition::AnyOf {
                conditions: vec![
                    VisibilityCondition::equals("meds", "yes"),
                    VisibilityCondition::equals("hospital", "yes"),
                ],
            },
        ),
        EligibilityQuestion::new("pending", "Pending surgery?")
            .shown_when(VisibilityCondition::equals("later", "yes")),
        EligibilityQuestion::new("later", "Declared after its dependent"),
    ]
}

#[test]
fn error_count_matches_visible_unanswered_questions() {
    let questions = medical_questionnaire();
    let ids = [
        "height",
        "hospital",
        "hospital_reason",
        "hospital_date",
        "meds",
        "meds_list",
        "later",
    ];
    let values = ["", "  ", "yes", "no", "Knee surgery"];

    // Walk a deterministic spread of answer combinations.
    for seed in 0..512usize {
        let mut responses = ResponseSet::new();
        for (offset, id) in ids.iter().enumerate() {
            let pick = (seed >> offset) % (values.len() + 1);
            if pick < values.len() {
                responses.insert(*id, values[pick]);
            }
        }

        let visible = resolve_visible(&questions, &responses);
        let expected = visible
            .iter()
            .filter(|question| {
                responses
                    .response(&question.question_id)
                    .map_or(true, |response| response.trim().is_empty())
            })
            .count();

        let errors = required_errors(visible, &responses);
        assert_eq!(errors.len(), expected, "seed {seed}");
        assert!(
            !visible_ids(&questions, &responses).contains(&"pending".to_string()),
            "forward reference must stay hidden (seed {seed})"
        );
    }
}

#[test]
fn question_set_evaluation_combines_both_steps() {
    let set = QuestionSet::new(medical_questionnaire()).expect("unique ids");
    let responses: ResponseSet = [
        ("height", "70"),
        ("hospital", "Yes"),
        ("hospital_reason", "Appendectomy"),
        ("meds", "no"),
    ]
    .into_iter()
    .collect();

    let evaluation = set.evaluate(&responses);
    assert_eq!(evaluation, evaluate(set.questions(), &responses));
    assert_eq!(
        evaluation.visible_question_ids,
        ["height", "hospital", "hospital_reason", "hospital_date", "meds", "meds_list", "later"]
            .into_iter()
            .map(QuestionId::from)
            .collect::<Vec<_>>()
    );
    assert_eq!(
        evaluation.errors,
        [
            "Question hospital_date is required",
            "Question meds_list is required",
            "Question later is required"
        ]
    );
    assert!(!evaluation.is_complete);
}
