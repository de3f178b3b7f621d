//! Integration tests for the full submission flow: form → session → service.

use scorecast_client::MockScoreService;
use scorecast_core::error::{ServiceError, GENERIC_FAILURE};
use scorecast_core::form::Session;
use scorecast_core::model::FormState;

fn complete_form() -> FormState {
    let mut form = FormState::default();
    for (name, value) in [
        ("gender", "male"),
        ("ethnic_group", "group B"),
        ("parent_educ", "some college"),
        ("lunch_type", "free/reduced"),
        ("test_prep", "completed"),
        ("parent_marital_status", "single"),
        ("practice_sport", "regularly"),
        ("is_first_child", "no"),
        ("nr_siblings", "0"),
        ("transport_means", "private"),
        ("wkly_study_hours", "more than 10hrs"),
        ("math_score", "88"),
        ("writing_score", "91"),
    ] {
        form.set_field(name, value).expect(name);
    }
    form
}

#[tokio::test]
async fn submit_delivers_the_form_values_unchanged() {
    let service = MockScoreService::with_prediction(84.2);
    let mut session = Session::from_form(complete_form());

    let outcome = session.submit(&service).await.unwrap();
    assert_eq!(outcome.prediction().unwrap().formatted_score(), "84.2");

    let sent = service.last_record().unwrap();
    let json = serde_json::to_value(&sent).unwrap();
    assert_eq!(json["gender"], "male");
    assert_eq!(json["lunch_type"], "free/reduced");
    assert_eq!(json["wkly_study_hours"], "more than 10hrs");
    // An explicit zero survives the trip.
    assert_eq!(json["nr_siblings"], 0);
}

#[tokio::test]
async fn zero_valued_fields_do_not_block_submission() {
    let service = MockScoreService::with_prediction(40.0);
    let mut form = complete_form();
    form.set_field("math_score", "0").unwrap();
    form.set_field("writing_score", "0").unwrap();
    let mut session = Session::from_form(form);

    let outcome = session.submit(&service).await.unwrap();
    assert!(outcome.prediction().is_some());
    assert_eq!(service.call_count(), 1);
}

#[tokio::test]
async fn failure_then_success_across_submissions() {
    let service = MockScoreService::with_error(ServiceError::Http { status: 500 });
    let mut session = Session::from_form(complete_form());

    let outcome = session.submit(&service).await.unwrap();
    assert_eq!(outcome.failure(), Some(GENERIC_FAILURE));

    service.set_response(Ok(scorecast_core::traits::Prediction {
        predicted_reading_score: 61.7,
        confidence: None,
        features_used: vec![],
    }));
    let outcome = session.submit(&service).await.unwrap();
    assert_eq!(outcome.prediction().unwrap().formatted_score(), "61.7");
    assert_eq!(service.call_count(), 2);
}

#[tokio::test]
async fn incomplete_form_never_reaches_the_service() {
    let service = MockScoreService::with_prediction(84.2);
    let mut form = complete_form();
    form.test_prep = None;
    let mut session = Session::from_form(form);

    let err = session.submit(&service).await.unwrap_err();
    assert_eq!(err.missing, vec!["test_prep"]);
    assert_eq!(service.call_count(), 0);
}
