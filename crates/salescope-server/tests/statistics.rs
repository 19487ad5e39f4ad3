//! Statistics endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::Value;

#[tokio::test]
async fn totals_for_march() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .get("/statistics")
        .add_query_param("month", "March")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["data"]);
    let data = &body["data"];
    assert_eq!(data["totalSaleOfTheMonth"].as_f64(), Some(200.0));
    assert_eq!(data["numberOfSoldItems"], 2);
    assert_eq!(data["numberOfUnsoldItems"], 2);
    assert_eq!(data["soldItems"].as_array().unwrap().len(), 2);
    assert_eq!(data["unsoldItems"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn numeric_and_named_month_agree() {
    let harness = TestHarness::seeded().await;

    for path in [
        "/statistics",
        "/statistics/bar-chart",
        "/statistics/bar-chart/categories",
    ] {
        let by_name: Value = harness
            .server
            .get(path)
            .add_query_param("month", "march")
            .await
            .json();
        let by_number: Value = harness
            .server
            .get(path)
            .add_query_param("month", "3")
            .await
            .json();
        assert_eq!(by_name, by_number, "mismatch on {path}");
    }
}

#[tokio::test]
async fn bar_chart_buckets_for_march() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .get("/statistics/bar-chart")
        .add_query_param("month", "March")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let buckets = body["data"].as_array().unwrap();
    assert_eq!(buckets.len(), 10);

    let counts: Vec<(String, u64)> = buckets
        .iter()
        .map(|b| {
            (
                b["priceRange"].as_str().unwrap().to_string(),
                b["count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(counts[0], ("0-100".to_string(), 1));
    assert_eq!(counts[1], ("101-200".to_string(), 2));
    assert_eq!(counts[9], ("901-above".to_string(), 1));
    assert!(counts[2..9].iter().all(|(_, c)| *c == 0));
}

#[tokio::test]
async fn category_breakdown_for_march() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .get("/statistics/bar-chart/categories")
        .add_query_param("month", "March")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let categories = body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0]["category"], "men's clothing");
    assert_eq!(categories[0]["count"], 1);
    assert_eq!(categories[1]["category"], "jewelery");
    assert_eq!(categories[1]["count"], 2);
}

#[tokio::test]
async fn combined_matches_individual_endpoints() {
    let harness = TestHarness::seeded().await;

    let combined: Value = harness
        .server
        .get("/statistics/combined")
        .add_query_param("month", "March")
        .await
        .json();

    let totals: Value = harness
        .server
        .get("/statistics")
        .add_query_param("month", "March")
        .await
        .json();
    let bar_chart: Value = harness
        .server
        .get("/statistics/bar-chart")
        .add_query_param("month", "March")
        .await
        .json();
    let pie_chart: Value = harness
        .server
        .get("/statistics/bar-chart/categories")
        .add_query_param("month", "March")
        .await
        .json();

    assert_eq!(combined["data"]["totalSales"], totals["data"]);
    assert_eq!(combined["data"]["barChart"], bar_chart["data"]);
    assert_eq!(combined["data"]["pieChart"], pie_chart["data"]);
}

#[tokio::test]
async fn invalid_month_is_rejected_everywhere() {
    let harness = TestHarness::seeded().await;

    for path in [
        "/statistics",
        "/statistics/bar-chart",
        "/statistics/bar-chart/categories",
        "/statistics/combined",
    ] {
        for month in ["13", "", "Smarch", "0"] {
            let response = harness
                .server
                .get(path)
                .add_query_param("month", month)
                .expect_failure()
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert!(
                body["error"].as_str().unwrap().contains("valid 'month'"),
                "{path}?month={month}"
            );
        }

        harness
            .server
            .get(path)
            .expect_failure()
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn empty_month_yields_zeroed_statistics() {
    let harness = TestHarness::seeded().await;

    let body: Value = harness
        .server
        .get("/statistics/combined")
        .add_query_param("month", "December")
        .await
        .json();

    let data = &body["data"];
    assert_eq!(data["totalSales"]["numberOfSoldItems"], 0);
    assert_eq!(data["totalSales"]["totalSaleOfTheMonth"].as_f64(), Some(0.0));
    assert_eq!(data["barChart"].as_array().unwrap().len(), 10);
    assert!(data["pieChart"].as_array().unwrap().is_empty());
}
