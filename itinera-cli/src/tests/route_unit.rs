//! Focused unit tests covering route CLI configuration and execution.

use std::time::Duration;

use super::helpers::{Workspace, point_names, route_payload, write_json};
use super::*;
use crate::route::local::execute_route;
use crate::route::{RouteConfig, config_from_layers_for_test};
use itinera_core::TravelMode;
use rstest::rstest;

fn config_for(request_path: camino::Utf8PathBuf) -> RouteConfig {
    RouteConfig {
        request_path,
        default_mode: None,
        timeout: None,
        iteration_factor: None,
    }
}

#[rstest]
fn converting_route_without_request_errors() {
    let err =
        RouteConfig::try_from(RouteArgs::default()).expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ROUTE_REQUEST);
            assert_eq!(env, ENV_ROUTE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn route_config_converts_timeout() {
    let args = RouteArgs {
        request_path: Some("route.json".into()),
        default_mode: Some(TravelMode::Transit),
        timeout_ms: Some(250),
        iteration_factor: Some(2),
    };
    let config = RouteConfig::try_from(args).expect("config should build");
    assert_eq!(config.timeout, Some(Duration::from_millis(250)));
    assert_eq!(config.default_mode, Some(TravelMode::Transit));
    assert_eq!(config.iteration_factor, Some(2));
}

#[rstest]
fn route_visits_nearer_stop_first() {
    let workspace = Workspace::new();
    let request_path = workspace.path("route.json");
    write_json(&request_path, &route_payload());

    let optimized = execute_route(&config_for(request_path)).expect("route should succeed");
    let names: Vec<_> = optimized
        .route
        .points
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Hotel", "Near", "Far"]);
    assert!(!optimized.cancelled);
}

#[rstest]
fn route_output_serialises_flat_route() {
    let workspace = Workspace::new();
    let request_path = workspace.path("route.json");
    write_json(&request_path, &route_payload());

    let mut buffer = Vec::new();
    crate::route::local::run(&config_for(request_path), &mut buffer).expect("route should run");
    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("JSON output");
    assert_eq!(point_names(&value), ["Hotel", "Near", "Far"]);
    assert!(value["totalDistanceMeters"].as_f64().is_some());
    assert_eq!(value["cancelled"], false);
}

#[rstest]
fn zero_iteration_factor_is_rejected() {
    let workspace = Workspace::new();
    let request_path = workspace.path("route.json");
    write_json(&request_path, &route_payload());

    let config = RouteConfig {
        iteration_factor: Some(0),
        ..config_for(request_path)
    };
    let err = execute_route(&config).expect_err("zero factor");
    assert!(matches!(err, CliError::OptimizerConfig(_)));
}

#[rstest]
fn duplicate_start_is_a_route_error() {
    let workspace = Workspace::new();
    let request_path = workspace.path("route.json");
    let mut payload = route_payload();
    payload["points"][1]["role"] = "start".into();
    write_json(&request_path, &payload);

    let err = execute_route(&config_for(request_path)).expect_err("two starts");
    assert!(matches!(err, CliError::Route { .. }));
}

#[rstest]
fn merge_layers_reads_mode_from_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "request_path": "route.json", "timeout_ms": 100 }), None);
    composer.push_environment(json!({ "default_mode": "driving" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.default_mode, Some(TravelMode::Driving));
    assert_eq!(config.timeout, Some(Duration::from_millis(100)));
}
