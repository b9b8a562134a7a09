use std::collections::HashMap;

use async_trait::async_trait;
use maplit::hashmap;
use serde_json::{json, Value};

use evx_core::action::{self, Pacing};
use evx_core::testing::{Expectation, Status, TestCase};
use evx_webclient::{ExtractApi, ExtractRequest, ExtractResponse};

/// Canned endpoint: responds per post id; unknown post ids behave like a
/// backend returning a non-JSON body.
struct StubApi {
    bodies: HashMap<&'static str, Value>,
}

#[async_trait]
impl ExtractApi for StubApi {
    async fn extract(&self, req: &ExtractRequest) -> evx_webclient::Result<ExtractResponse> {
        match self.bodies.get(req.post_id.as_str()) {
            Some(body) => Ok(serde_json::from_value(body.clone())?),
            None => Err(serde_json::from_str::<Value>("upstream timeout")
                .unwrap_err()
                .into()),
        }
    }
}

fn case(id: &str, post_id: &str) -> TestCase {
    TestCase::new(
        id,
        format!("stub case {}", id),
        ExtractRequest {
            caption: "SOLD OUT! December 20 concert.".to_owned(),
            location_hint: None,
            post_id: post_id.to_owned(),
            posted_at: "2025-12-15T08:00:00+00:00".to_owned(),
        },
    )
}

fn stub() -> StubApi {
    StubApi {
        bodies: hashmap! {
            "ok" => json!({
                "extraction": {
                    "isEvent": true,
                    "eventDate": "2025-12-20",
                    "confidence": 0.9,
                    "reasoning": "Concert with explicit date",
                }
            }),
            "wrong" => json!({
                "extraction": {
                    "isEvent": false,
                    "confidence": 0.4,
                }
            }),
            "no-extraction" => json!({"ok": true}),
        },
    }
}

#[tokio::test]
async fn one_outcome_per_case_in_suite_order() {
    let cases = vec![
        case("01", "ok")
            .expecting("isEvent", Expectation::Equals(json!(true)))
            .expecting("eventDate", Expectation::Equals(json!("2025-12-20")))
            .expecting("confidence", Expectation::GreaterThan(0.75)),
        case("02", "wrong")
            .expecting("isEvent", Expectation::Equals(json!(true)))
            .expecting("confidence", Expectation::GreaterThan(0.75)),
        case("03", "down"),
    ];

    let outcomes = action::run_suite(&stub(), &cases, &Pacing::none()).await;

    assert_eq!(outcomes.len(), cases.len());
    let ids: Vec<_> = outcomes.iter().map(|o| o.test_id.as_str()).collect();
    assert_eq!(ids, ["01", "02", "03"]);

    assert_eq!(outcomes[0].status, Status::Pass);
    assert!(outcomes[0].issues.is_empty());

    assert_eq!(outcomes[1].status, Status::Fail);
    assert_eq!(
        outcomes[1].issues,
        ["isEvent mismatch", "confidence validation failed"]
    );
    assert!(outcomes[1].extraction.is_some());

    assert_eq!(outcomes[2].status, Status::Error);
    assert_eq!(outcomes[2].extraction, None);
    assert_eq!(outcomes[2].issues.len(), 1);
}

#[tokio::test]
async fn missing_extraction_key_yields_fail_not_error() {
    let cases =
        vec![case("01", "no-extraction").expecting("isEvent", Expectation::Equals(json!(true)))];

    let outcomes = action::run_suite(&stub(), &cases, &Pacing::none()).await;

    assert_eq!(outcomes[0].status, Status::Fail);
    assert_eq!(outcomes[0].issues, ["isEvent mismatch"]);
    // reachable response, so the (empty) extraction is recorded
    assert!(outcomes[0].extraction.as_ref().unwrap().is_empty());
}

#[tokio::test]
async fn all_error_run_still_completes_and_persists() {
    let cases = vec![case("01", "down"), case("02", "gone"), case("03", "away")];

    let outcomes = action::run_suite(&stub(), &cases, &Pacing::none()).await;
    assert!(outcomes.iter().all(|o| o.status == Status::Error));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results").join("test-results.json");
    action::save_results(&outcomes, &path).unwrap();

    let reloaded = action::load_results(&path).unwrap();
    assert_eq!(reloaded, outcomes);
    assert_eq!(reloaded.len(), 3);
}

#[tokio::test]
async fn builtin_suite_runs_end_to_end_against_stub() {
    // Only case 07's post id is answered; the rest behave like a dead
    // backend. The run must still produce all ten outcomes in order.
    let api = StubApi {
        bodies: hashmap! {
            "test-price-01" => json!({
                "extraction": {
                    "isEvent": true,
                    "isFree": true,
                    "price": null,
                    "eventDate": "2025-12-25",
                    "confidence": 0.92,
                    "reasoning": "Free Christmas party with explicit date",
                }
            }),
        },
    };

    let cases = evx_core::suite::builtin();
    let outcomes = action::run_suite(&api, cases, &Pacing::none()).await;

    assert_eq!(outcomes.len(), 10);
    let by_id: HashMap<_, _> = outcomes.iter().map(|o| (o.test_id.as_str(), o)).collect();
    assert_eq!(by_id["07"].status, Status::Pass);
    assert!(outcomes
        .iter()
        .filter(|o| o.test_id != "07")
        .all(|o| o.status == Status::Error));
}
