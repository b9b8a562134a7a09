use once_cell::sync::Lazy;
use serde_json::{json, Value};

use evx_webclient::ExtractRequest;

use crate::testing::{Expectation, TestCase};

/// The builtin suite: ten fixed cases covering recurrence, date ranges,
/// midnight crossing, non-events, relative dates, pricing, availability,
/// and captions with no usable date.
pub fn builtin() -> &'static [TestCase] {
    &BUILTIN
}

fn eq(v: Value) -> Expectation {
    Expectation::Equals(v)
}

fn confidence(notation: &str) -> Expectation {
    Expectation::comparator(notation).unwrap()
}

fn input(
    caption: &str,
    location_hint: Option<&str>,
    post_id: &str,
    posted_at: &str,
) -> ExtractRequest {
    ExtractRequest {
        caption: caption.to_owned(),
        location_hint: location_hint.map(str::to_owned),
        post_id: post_id.to_owned(),
        posted_at: posted_at.to_owned(),
    }
}

static BUILTIN: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase::new(
            "01",
            "Recurring Event - Every Friday",
            input(
                "FREAKY FRIDAY Every Friday night at XX XX! Resident DJs spinning the best tracks. 10PM onwards. 500 presale / 800 door",
                Some("XX XX Makati"),
                "test-recurring-01",
                "2025-12-17T10:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("isRecurring", eq(json!(true)))
        .expecting("eventTime", eq(json!("22:00:00")))
        .expecting("confidence", confidence(">0.75")),

        TestCase::new(
            "02",
            "Multi-day Event - Date Range",
            input(
                "WEEKEND FESTIVAL! December 12-13, 2025 at SM Mall of Asia Concert Grounds. Two days of music, art, and fun! 1500 weekend pass",
                Some("SM Mall of Asia"),
                "test-multiday-01",
                "2025-12-10T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("eventDate", eq(json!("2025-12-12")))
        .expecting("eventEndDate", eq(json!("2025-12-13")))
        .expecting("isRecurring", eq(json!(false))),

        TestCase::new(
            "03",
            "Midnight Crossing Event",
            input(
                "ALL NIGHTER! December 20, 10PM - 4AM. The party continues till sunrise! 600 entrance",
                Some("Poblacion Social Club"),
                "test-midnight-01",
                "2025-12-15T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("eventDate", eq(json!("2025-12-20")))
        .expecting("eventTime", eq(json!("22:00:00")))
        .expecting("endTime", eq(json!("04:00:00")))
        .expecting("eventEndDate", eq(json!("2025-12-21"))),

        TestCase::new(
            "04",
            "Operating Hours - NOT AN EVENT",
            input(
                "We're open! 6PM — Tuesdays to Saturdays. Come visit us for drinks and good vibes!",
                Some("The Backroom"),
                "test-notevent-01",
                "2025-12-17T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(false)))
        .expecting("confidence", confidence("<0.6")),

        TestCase::new(
            "05",
            "Past Event Throwback",
            input(
                "What an amazing night last Saturday! Thanks everyone who came out. Can't wait for the next one!",
                Some("XX XX"),
                "test-past-01",
                "2025-12-17T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(false)))
        .expecting("confidence", confidence("<0.5")),

        TestCase::new(
            "06",
            "Relative Date - Tomorrow",
            input(
                "TOMORROW NIGHT! DJ set starting 9PM. Be there! 400 entrance",
                Some("The Grid"),
                "test-relative-01",
                "2025-12-17T10:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("eventDate", eq(json!("2025-12-18")))
        .expecting("eventTime", eq(json!("21:00:00"))),

        TestCase::new(
            "07",
            "Free Event",
            input(
                "FREE ADMISSION! December 25, Christmas Party at The Park. No cover charge. Everyone welcome!",
                Some("The Park"),
                "test-price-01",
                "2025-12-15T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("isFree", eq(json!(true)))
        .expecting("price", eq(Value::Null))
        .expecting("eventDate", eq(json!("2025-12-25"))),

        TestCase::new(
            "08",
            "Price Range - Presale/Door",
            input(
                "NEW YEAR'S EVE BASH! Dec 31. 800 presale / 1200 door. Get tickets now!",
                Some("Valkyrie Nightclub"),
                "test-price-02",
                "2025-12-15T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("isFree", eq(json!(false)))
        .expecting("eventDate", eq(json!("2025-12-31"))),

        TestCase::new(
            "09",
            "Sold Out Status",
            input(
                "SOLD OUT! December 20 concert at Smart Araneta. Join the waitlist for cancellations.",
                Some("Smart Araneta Coliseum"),
                "test-status-01",
                "2025-12-15T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(true)))
        .expecting("availabilityStatus", eq(json!("sold_out")))
        .expecting("eventDate", eq(json!("2025-12-20"))),

        TestCase::new(
            "10",
            "No Date - Should Reject",
            input(
                "BIG ANNOUNCEMENT! Amazing lineup coming to Philippine Arena. Tickets on sale soon!",
                Some("Philippine Arena"),
                "test-missing-01",
                "2025-12-17T08:00:00+00:00",
            ),
        )
        .expecting("isEvent", eq(json!(false)))
        .expecting("eventDate", eq(Value::Null))
        .expecting("confidence", confidence("<0.6")),
    ]
});

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn suite_has_ten_cases_with_unique_ids() {
        let cases = builtin();
        assert_eq!(cases.len(), 10);
        let ids: HashSet<_> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(cases[0].id, "01");
        assert_eq!(cases[9].id, "10");
    }

    #[test]
    fn every_case_has_expectations_and_input() {
        for case in builtin() {
            assert!(!case.expected.is_empty(), "case {} has no expectations", case.id);
            assert!(!case.input.caption.is_empty());
            assert!(!case.input.post_id.is_empty());
            assert!(!case.input.posted_at.is_empty());
        }
    }

    #[test]
    fn recurring_case_expectations() {
        let case = &builtin()[0];
        assert_eq!(case.description, "Recurring Event - Every Friday");
        assert_eq!(
            case.expected,
            vec![
                ("isEvent".to_owned(), eq(json!(true))),
                ("isRecurring".to_owned(), eq(json!(true))),
                ("eventTime".to_owned(), eq(json!("22:00:00"))),
                ("confidence".to_owned(), Expectation::GreaterThan(0.75)),
            ]
        );
    }

    #[test]
    fn no_date_case_expects_explicit_null_date() {
        let case = &builtin()[9];
        assert!(case
            .expected
            .iter()
            .any(|(k, e)| k == "eventDate" && *e == eq(Value::Null)));
        assert!(case
            .expected
            .iter()
            .any(|(k, e)| k == "confidence" && *e == Expectation::LessThan(0.6)));
    }
}
