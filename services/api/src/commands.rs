use crate::infra::Gateways;
use clap::Args;
use insurance_market::config::AppConfig;
use insurance_market::error::AppError;
use insurance_market::workflows::address::{Address, AddressValidationResult};
use insurance_market::workflows::eligibility::{
    EligibilityEvaluation, EligibilityRequest, QuestionSet, ResponseSet,
};
use insurance_market::workflows::zip::{ZipCodeInfo, ZIP_NOT_FOUND_MESSAGE};
use insurance_market::workflows::GatewayOutcome;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ZipArgs {
    /// Five-digit ZIP code to look up
    pub(crate) zip: String,
}

#[derive(Args, Debug)]
pub(crate) struct AddressArgs {
    /// Street line
    #[arg(long, default_value = "")]
    pub(crate) line1: String,
    /// Apartment, suite, or unit
    #[arg(long)]
    pub(crate) line2: Option<String>,
    #[arg(long, default_value = "")]
    pub(crate) city: String,
    /// Two-letter state code
    #[arg(long, default_value = "")]
    pub(crate) state: String,
    #[arg(long, default_value = "")]
    pub(crate) zip: String,
}

impl From<AddressArgs> for Address {
    fn from(args: AddressArgs) -> Self {
        Address {
            line1: args.line1,
            line2: args.line2,
            city: args.city,
            state: args.state,
            zip: args.zip,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    /// JSON document with `questions` and `responses`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the evaluation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_zip_lookup(args: ZipArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gateways = Gateways::from_config(&config.upstream)?;

    match gateways.zip.get_zip_code_info(&args.zip).await {
        Ok(GatewayOutcome::Found(info)) => println!("{}", render_zip_info(&info)),
        Ok(GatewayOutcome::NotFound) => println!("{}: {}", args.zip, ZIP_NOT_FOUND_MESSAGE),
        Ok(GatewayOutcome::UpstreamFailure(diagnostic)) => {
            println!("ZIP lookup unavailable: {diagnostic}")
        }
        Err(err) => println!("Rejected '{}': {}", args.zip, err),
    }

    Ok(())
}

pub(crate) async fn run_address_check(args: AddressArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let gateways = Gateways::from_config(&config.upstream)?;
    let address = Address::from(args);

    match gateways.address.validate_address(&address).await {
        Ok(GatewayOutcome::Found(result)) => println!("{}", render_address_result(&result)),
        Ok(GatewayOutcome::NotFound) => {
            println!("{}", render_address_result(&AddressValidationResult::invalid(Vec::new())))
        }
        Ok(GatewayOutcome::UpstreamFailure(diagnostic)) => {
            println!("Address verification unavailable: {diagnostic}")
        }
        Err(err) => println!("Rejected address: {err}"),
    }

    Ok(())
}

pub(crate) fn run_eligibility_check(args: EligibilityArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let evaluation = evaluate_document(&raw)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", render_evaluation(&evaluation));
    }

    Ok(())
}

pub(crate) fn evaluate_document(raw: &str) -> Result<EligibilityEvaluation, AppError> {
    let request: EligibilityRequest = serde_json::from_str(raw)?;
    let questions = QuestionSet::new(request.questions)?;
    let responses: ResponseSet = request.responses.into_iter().collect();
    Ok(questions.evaluate(&responses))
}

fn render_zip_info(info: &ZipCodeInfo) -> String {
    format!(
        "{}: {}, {} ({} County)",
        info.zip, info.city, info.state, info.county
    )
}

fn render_address_result(result: &AddressValidationResult) -> String {
    let mut lines = Vec::new();
    if result.is_valid {
        lines.push("Address is deliverable".to_string());
    } else {
        lines.push("Address is not deliverable".to_string());
        lines.extend(result.errors.iter().map(|error| format!("- {error}")));
    }

    if let Some(address) = &result.normalized_address {
        let line2 = address
            .line2
            .as_deref()
            .map(|line| format!(", {line}"))
            .unwrap_or_default();
        lines.push(format!(
            "Provider address: {}{}, {}, {} {}",
            address.line1, line2, address.city, address.state, address.zip
        ));
    }

    lines.join("\n")
}

fn render_evaluation(evaluation: &EligibilityEvaluation) -> String {
    let visible: Vec<&str> = evaluation
        .visible_question_ids
        .iter()
        .map(|id| id.as_str())
        .collect();

    let mut lines = vec![format!("Visible questions: {}", visible.join(", "))];
    if evaluation.is_complete {
        lines.push("All visible questions answered".to_string());
    } else {
        lines.push("Missing answers".to_string());
        lines.extend(evaluation.errors.iter().map(|error| format!("- {error}")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "questions": [
            { "questionId": 1, "text": "Tobacco in the last 12 months?" },
            {
                "questionId": 2,
                "text": "Which products?",
                "visibilityCondition": { "type": "equals", "questionId": 1, "value": "yes" }
            }
        ],
        "responses": [{ "questionId": 1, "response": "yes" }]
    }"#;

    #[test]
    fn evaluates_questionnaire_documents() {
        let evaluation = evaluate_document(DOCUMENT).expect("document evaluates");
        assert_eq!(evaluation.errors, vec!["Question 2 is required".to_string()]);
        assert_eq!(
            render_evaluation(&evaluation),
            "Visible questions: 1, 2\nMissing answers\n- Question 2 is required"
        );
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let raw = r#"{ "questions": [{ "questionId": 1 }, { "questionId": "1" }] }"#;
        match evaluate_document(raw) {
            Err(AppError::Questionnaire(_)) => {}
            other => panic!("expected questionnaire error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_documents_are_input_errors() {
        assert!(matches!(
            evaluate_document("{ \"questions\": 7 }"),
            Err(AppError::Input(_))
        ));
    }

    #[test]
    fn renders_provider_corrections() {
        let result = AddressValidationResult {
            is_valid: true,
            errors: Vec::new(),
            normalized_address: Some(Address {
                line1: "123 MAIN ST".to_string(),
                line2: Some("APT 4".to_string()),
                city: "AUSTIN".to_string(),
                state: "TX".to_string(),
                zip: "78701".to_string(),
            }),
        };

        assert_eq!(
            render_address_result(&result),
            "Address is deliverable\nProvider address: 123 MAIN ST, APT 4, AUSTIN, TX 78701"
        );
    }

    #[test]
    fn renders_zip_info() {
        let info = ZipCodeInfo {
            zip: "78701".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            county: "Travis".to_string(),
        };
        assert_eq!(render_zip_info(&info), "78701: Austin, TX (Travis County)");
    }
}
