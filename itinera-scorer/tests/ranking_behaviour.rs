//! Behavioural coverage for ranking candidate venues.

use std::cell::RefCell;

use itinera_core::test_support::{candidate, trip_params};
use itinera_core::{Candidate, Category, Factor, Money};
use itinera_scorer::{RankError, RankRequest, RankingPipeline, RankingResponse};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Request under construction; the category is set by the `when` step.
#[fixture]
fn request() -> RefCell<Option<RankRequest>> {
    RefCell::new(None)
}

/// Candidates offered to the pipeline.
#[fixture]
fn candidates() -> RefCell<Vec<Candidate>> {
    RefCell::new(Vec::new())
}

/// Captures the ranking outcome for assertions.
#[fixture]
fn outcome() -> RefCell<Option<Result<RankingResponse, RankError>>> {
    RefCell::new(None)
}

fn with_request(request: &RefCell<Option<RankRequest>>, edit: impl FnOnce(RankRequest) -> RankRequest) {
    let current = request
        .borrow_mut()
        .take()
        .unwrap_or_else(|| panic!("a trip budget must be set first"));
    *request.borrow_mut() = Some(edit(current));
}

fn response(outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) -> RankingResponse {
    match outcome.borrow().clone() {
        Some(Ok(response)) => response,
        Some(Err(err)) => panic!("ranking should succeed, got {err}"),
        None => panic!("ranking must run first"),
    }
}

#[given("a trip budget of {total} over {days} days")]
fn trip_budget(total: i64, days: u32, request: &RefCell<Option<RankRequest>>) {
    *request.borrow_mut() = Some(RankRequest::new(trip_params(total, days, &[]), Category::Hotel));
}

#[given("{spend} has already been committed")]
fn committed(spend: i64, request: &RefCell<Option<RankRequest>>) {
    with_request(request, |r| r.with_current_spend(Money::from_major(spend)));
}

#[given("weather-sensitive venues are excluded")]
fn exclude_weather(request: &RefCell<Option<RankRequest>>) {
    with_request(request, |r| r.excluding_weather_sensitive(true));
}

#[given("hotels costing {cheap} and {dear} with identical tags and popularity")]
fn two_hotels(cheap: i64, dear: i64, candidates: &RefCell<Vec<Candidate>>) {
    let mut offered = candidates.borrow_mut();
    offered.push(candidate(&format!("hotel-{dear}"), Category::Hotel, dear));
    offered.push(candidate(&format!("hotel-{cheap}"), Category::Hotel, cheap));
}

#[given("activities costing {free} and {paid}")]
fn two_activities(free: i64, paid: i64, candidates: &RefCell<Vec<Candidate>>) {
    let mut offered = candidates.borrow_mut();
    offered.push(candidate(&format!("activity-{paid}"), Category::Activity, paid));
    offered.push(candidate(&format!("activity-{free}"), Category::Activity, free));
}

#[given("an indoor museum and an outdoor kayak tour")]
fn indoor_and_outdoor(candidates: &RefCell<Vec<Candidate>>) {
    let mut museum = candidate("museum", Category::Activity, 15);
    museum.weather_sensitive = Some(false);
    let mut kayak = candidate("kayak", Category::Activity, 40);
    kayak.weather_sensitive = Some(true);
    candidates.borrow_mut().extend([museum, kayak]);
}

fn run(
    category: Category,
    request: &RefCell<Option<RankRequest>>,
    candidates: &RefCell<Vec<Candidate>>,
    outcome: &RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    with_request(request, |mut r| {
        r.category = category;
        r
    });
    let pipeline: RankingPipeline = RankingPipeline::default();
    let ranked = request
        .borrow()
        .as_ref()
        .map(|r| pipeline.rank(&candidates.borrow(), r));
    *outcome.borrow_mut() = ranked;
}

#[when("I rank hotels")]
fn rank_hotels(
    request: &RefCell<Option<RankRequest>>,
    candidates: &RefCell<Vec<Candidate>>,
    outcome: &RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    run(Category::Hotel, request, candidates, outcome);
}

#[when("I rank activities")]
fn rank_activities(
    request: &RefCell<Option<RankRequest>>,
    candidates: &RefCell<Vec<Candidate>>,
    outcome: &RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    run(Category::Activity, request, candidates, outcome);
}

#[then("{count} locations are ranked")]
fn ranked_count(count: usize, outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) {
    assert_eq!(response(outcome).ranked.len(), count);
}

#[then("the hotel costing {cost} ranks first")]
fn ranks_first(cost: i64, outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) {
    let ranked = response(outcome).ranked;
    let first = ranked.first().unwrap_or_else(|| panic!("ranking is empty"));
    assert_eq!(first.candidate.id, format!("hotel-{cost}"));
    assert_eq!(first.rank, 1);
}

#[then("the hotel costing {cost} has a lower budget fit")]
fn lower_budget_fit(cost: i64, outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) {
    let ranked = response(outcome).ranked;
    let fit = |id: &str| {
        ranked
            .iter()
            .find(|r| r.candidate.id == id)
            .and_then(|r| r.breakdown.get(Factor::BudgetFit))
            .map(|f| f.raw)
            .unwrap_or_else(|| panic!("{id} must be ranked"))
    };
    let dear = fit(&format!("hotel-{cost}"));
    let others = ranked
        .iter()
        .filter(|r| r.candidate.id != format!("hotel-{cost}"))
        .map(|r| fit(&r.candidate.id));
    for other in others {
        assert!(dear < other, "expected {dear} below {other}");
    }
}

#[then("only free activities are ranked")]
fn only_free(outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) {
    for ranked in response(outcome).ranked {
        assert_eq!(ranked.candidate.estimated_cost, Money::ZERO);
    }
}

#[then("the kayak tour is not ranked")]
fn kayak_dropped(outcome: &RefCell<Option<Result<RankingResponse, RankError>>>) {
    let response = response(outcome);
    assert!(response.ranked.iter().all(|r| r.candidate.id != "kayak"));
    assert_eq!(response.diagnostics.filtered_by_weather, 1);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn cheaper_hotel_ranks_first(
    request: RefCell<Option<RankRequest>>,
    candidates: RefCell<Vec<Candidate>>,
    outcome: RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    let _ = (request, candidates, outcome);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn exhausted_budget_admits_free_venues(
    request: RefCell<Option<RankRequest>>,
    candidates: RefCell<Vec<Candidate>>,
    outcome: RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    let _ = (request, candidates, outcome);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn weather_sensitive_venues_are_dropped(
    request: RefCell<Option<RankRequest>>,
    candidates: RefCell<Vec<Candidate>>,
    outcome: RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    let _ = (request, candidates, outcome);
}

#[scenario(path = "tests/features/ranking.feature", index = 3)]
fn no_candidates_rank_nothing(
    request: RefCell<Option<RankRequest>>,
    candidates: RefCell<Vec<Candidate>>,
    outcome: RefCell<Option<Result<RankingResponse, RankError>>>,
) {
    let _ = (request, candidates, outcome);
}
