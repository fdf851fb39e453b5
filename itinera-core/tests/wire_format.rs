//! JSON shapes exchanged with callers.
#![cfg(feature = "serde")]

use itinera_core::{
    Candidate, Category, Factor, FactorScore, Money, RankedLocation, RoutePoint, RouteRole,
    ScoreBreakdown, TravelMode, TripParams,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn museum() -> Candidate {
    Candidate {
        id: "a1".into(),
        category: Category::Activity,
        coords: itinera_core::LatLng::new(41.38, 2.17),
        estimated_cost: Money::from_minor(2_550),
        tags: ["museum".to_owned()].into(),
        popularity_rating: 4.5,
        weather_sensitive: None,
    }
}

#[rstest]
fn trip_params_read_camel_case_with_minor_unit_budget() {
    let params: TripParams = serde_json::from_value(json!({
        "totalBudget": 100_000,
        "groupSize": 2,
        "days": 5,
        "dateRange": { "start": "2026-05-01", "end": "2026-05-06" },
        "preferenceTags": ["museum", "food"],
        "anchor": { "lat": 41.3874, "lng": 2.1686 }
    }))
    .expect("deserialize trip params");
    assert_eq!(params.total_budget, Money::from_major(1000));
    assert_eq!(params.preference_tags.len(), 2);
    assert!(params.validate().is_ok());
}

#[rstest]
fn candidate_defaults_optional_fields(museum: Candidate) {
    let parsed: Candidate = serde_json::from_value(json!({
        "id": "a1",
        "category": "activity",
        "coords": { "lat": 41.38, "lng": 2.17 },
        "estimatedCost": 2_550,
        "tags": ["museum"],
        "popularityRating": 4.5
    }))
    .expect("deserialize candidate");
    assert_eq!(parsed, museum);
}

#[rstest]
fn ranked_location_exposes_id_and_ordered_breakdown(museum: Candidate) {
    let mut breakdown = ScoreBreakdown::default();
    breakdown.push(FactorScore {
        factor: Factor::BudgetFit,
        raw: 1.0,
        weighted: 0.35,
    });
    breakdown.push(FactorScore {
        factor: Factor::Popularity,
        raw: 0.9,
        weighted: 0.135,
    });
    let ranked = RankedLocation {
        candidate: museum,
        score: 0.485,
        breakdown,
        rank: 1,
    };

    let value = serde_json::to_value(&ranked).expect("serialize ranked location");
    assert_eq!(value["candidateId"], "a1");
    assert_eq!(value["rank"], 1);
    assert_eq!(value["breakdown"]["budgetFit"]["weighted"], 0.35);

    let text = serde_json::to_string(&ranked).expect("serialize ranked location");
    let budget_at = text.find("budgetFit").expect("budget factor present");
    let popularity_at = text.find("popularity").expect("popularity factor present");
    assert!(budget_at < popularity_at, "evaluation order must be kept");
}

#[rstest]
fn route_point_omits_absent_optionals() {
    let point = RoutePoint::new("Hotel", 41.0, 2.0).with_role(RouteRole::Start);
    let value = serde_json::to_value(&point).expect("serialize point");
    assert_eq!(
        value,
        json!({ "latitude": 41.0, "longitude": 2.0, "name": "Hotel", "role": "start" })
    );

    let parsed: RoutePoint = serde_json::from_value(json!({
        "latitude": 41.0,
        "longitude": 2.0,
        "name": "Beach",
        "arrivalMode": "transit"
    }))
    .expect("deserialize point");
    assert_eq!(parsed.role, RouteRole::Waypoint);
    assert_eq!(parsed.arrival_mode, Some(TravelMode::Transit));
}

#[rstest]
fn unknown_category_is_rejected() {
    let result: Result<Category, _> = serde_json::from_value(Value::from("spa"));
    assert!(result.is_err());
}
