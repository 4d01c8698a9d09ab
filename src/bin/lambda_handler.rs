//! AWS Lambda handler exposing the calculators over HTTP
//!
//! Accepts an API Gateway v2 / Function URL request whose JSON body names an
//! operation, e.g. `{"operation": "quote", "service_id": "web", "complexity_tier": "high"}`,
//! and returns the calculator result as JSON.
//!
//! Set QUOTE_DESK_ASSUMPTIONS to load assumptions from a CSV directory.

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::apigw::{ApiGatewayV2httpRequest, ApiGatewayV2httpResponse};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use quote_desk::quote::{PolicyQuoteRequest, PolicyType};
use quote_desk::{Assumptions, QuoteDesk};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;

/// Calculator invocation carried in the request body
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum CalcRequest {
    Quote {
        service_id: String,
        #[serde(default)]
        complexity_tier: String,
    },
    ProjectIul {
        age: u32,
        monthly_premium: f64,
        #[serde(default)]
        initial_lump_sum: f64,
    },
    AnnuityPayout {
        principal: f64,
        annual_rate: f64,
        years: u32,
        /// Include the month-by-month schedule
        #[serde(default)]
        schedule: bool,
    },
    AcaSubsidy {
        household_income: f64,
        family_size: u32,
        plan_cost: f64,
    },
    ScorePriority {
        intake: HashMap<String, Value>,
    },
    PolicyQuote {
        policy_type: PolicyType,
        applicant: PolicyQuoteRequest,
    },
    Recommend {
        answers: Vec<String>,
    },
}

/// Form values arrive as strings or JSON scalars; the scorer reads strings
fn intake_fields(intake: HashMap<String, Value>) -> HashMap<String, String> {
    intake
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect()
}

fn dispatch(desk: &QuoteDesk, request: CalcRequest) -> Result<Value, quote_desk::Error> {
    let value = match request {
        CalcRequest::Quote {
            service_id,
            complexity_tier,
        } => json!(desk.calculate_quote(&service_id, &complexity_tier)?),
        CalcRequest::ProjectIul {
            age,
            monthly_premium,
            initial_lump_sum,
        } => {
            let result = desk.project_iul(age, monthly_premium, initial_lump_sum)?;
            json!({
                "summary": result.summary(),
                "cash_value_irr": result.cash_value_irr(),
                "rows": result.rows,
            })
        }
        CalcRequest::AnnuityPayout {
            principal,
            annual_rate,
            years,
            schedule,
        } => {
            if schedule {
                json!(desk.annuity_schedule(principal, annual_rate, years)?)
            } else {
                json!({ "monthly_income": desk.calculate_annuity_payout(principal, annual_rate, years)? })
            }
        }
        CalcRequest::AcaSubsidy {
            household_income,
            family_size,
            plan_cost,
        } => json!(desk.estimate_aca_subsidy(household_income, family_size, plan_cost)?),
        CalcRequest::ScorePriority { intake } => json!(desk.score_priority(&intake_fields(intake))),
        CalcRequest::PolicyQuote {
            policy_type,
            applicant,
        } => json!(desk.quote_policy(policy_type, &applicant)?),
        CalcRequest::Recommend { answers } => json!(desk.recommend_package(&answers)),
    };
    Ok(value)
}

fn json_response(status_code: i64, body: &Value) -> ApiGatewayV2httpResponse {
    let mut response = ApiGatewayV2httpResponse {
        status_code,
        body: Some(Body::Text(body.to_string())),
        ..Default::default()
    };
    if let Ok(value) = "application/json".parse() {
        response.headers.insert("content-type", value);
    }
    response
}

/// HTTP status for a failed calculation
fn status_for(err: &quote_desk::Error) -> i64 {
    match err {
        quote_desk::Error::NotFound(_) => 404,
        quote_desk::Error::InvalidInput { .. } | quote_desk::Error::MissingFields(_) => 400,
        _ => 500,
    }
}

/// Parse, dispatch and render one request body
fn respond(desk: &QuoteDesk, body: &str) -> ApiGatewayV2httpResponse {
    let request: CalcRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("rejected request body: {}", e);
            return json_response(400, &json!({ "error": format!("invalid request: {}", e) }));
        }
    };
    log::debug!("dispatching {:?}", request);

    match dispatch(desk, request) {
        Ok(value) => json_response(200, &value),
        Err(e) => {
            let status = status_for(&e);
            if status >= 500 {
                log::error!("calculation failed: {}", e);
            }
            json_response(status, &json!({ "error": e.to_string() }))
        }
    }
}

async fn handler(
    desk: &QuoteDesk,
    event: LambdaEvent<ApiGatewayV2httpRequest>,
) -> Result<ApiGatewayV2httpResponse, Error> {
    let body = event.payload.body.unwrap_or_default();
    Ok(respond(desk, &body))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let assumptions = match std::env::var("QUOTE_DESK_ASSUMPTIONS") {
        Ok(dir) => Assumptions::from_csv_path(Path::new(&dir))?,
        Err(_) => Assumptions::default_pricing(),
    };
    let desk = QuoteDesk::with_assumptions(assumptions);
    let desk = &desk;

    run(service_fn(move |event| async move { handler(desk, event).await })).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(body: Value) -> Result<Value, quote_desk::Error> {
        let request: CalcRequest = serde_json::from_value(body).expect("valid request");
        dispatch(&QuoteDesk::new(), request)
    }

    #[test]
    fn test_quote_operation() {
        let value = call(json!({"operation": "quote", "service_id": "web", "complexity_tier": "high"})).unwrap();
        assert_eq!(value["estimated_total"], json!(3750.0));
        assert_eq!(value["currency"], json!("USD"));
    }

    #[test]
    fn test_score_operation_accepts_numbers() {
        let value = call(json!({
            "operation": "score_priority",
            "intake": {"serviceType": "wealth", "investmentCapital": 60000, "currentCoverage": null}
        }))
        .unwrap();
        assert_eq!(value["tier"], json!("HIGH"));
    }

    #[test]
    fn test_unknown_service_is_not_found() {
        let result = call(json!({"operation": "quote", "service_id": "yacht"}));
        assert!(matches!(result, Err(quote_desk::Error::NotFound(_))));
    }

    fn body_of(response: &ApiGatewayV2httpResponse) -> Value {
        match &response.body {
            Some(Body::Text(text)) => serde_json::from_str(text).expect("json body"),
            other => panic!("expected a text body, got {:?}", other),
        }
    }

    #[test]
    fn test_success_is_json_200() {
        let response = respond(&QuoteDesk::new(), r#"{"operation": "quote", "service_id": "web"}"#);
        assert_eq!(response.status_code, 200);
        let content_type = response.headers.get("content-type").expect("content-type header");
        assert_eq!(content_type.to_str().unwrap(), "application/json");
        assert_eq!(body_of(&response)["currency"], json!("USD"));
    }

    #[test]
    fn test_malformed_body_is_400() {
        let desk = QuoteDesk::new();
        for body in ["", "not json", r#"{"operation": "teleport"}"#] {
            let response = respond(&desk, body);
            assert_eq!(response.status_code, 400, "body {:?}", body);
            assert!(response.headers.get("content-type").is_some());
            assert!(body_of(&response)["error"].is_string());
        }
    }

    #[test]
    fn test_unknown_service_is_404() {
        let response = respond(&QuoteDesk::new(), r#"{"operation": "quote", "service_id": "yacht"}"#);
        assert_eq!(response.status_code, 404);
    }

    #[test]
    fn test_out_of_range_annuity_is_400() {
        let desk = QuoteDesk::new();
        let response = respond(
            &desk,
            r#"{"operation": "annuity_payout", "principal": 100000, "annual_rate": 0.06, "years": 400000000, "schedule": true}"#,
        );
        assert_eq!(response.status_code, 400);

        let response = respond(
            &desk,
            r#"{"operation": "annuity_payout", "principal": 100000, "annual_rate": 1e-17, "years": 20}"#,
        );
        assert_eq!(response.status_code, 200);
        assert!(body_of(&response)["monthly_income"].as_f64().unwrap().is_finite());
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(status_for(&quote_desk::Error::not_found("service yacht")), 404);
        assert_eq!(status_for(&quote_desk::Error::invalid("years", "too long")), 400);
        assert_eq!(status_for(&quote_desk::Error::MissingFields(vec!["email".to_string()])), 400);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert_eq!(status_for(&quote_desk::Error::Io(io)), 500);
    }
}
