//! Live-registry integration tests.
//!
//! Run with:
//! ```bash
//! REGISTRY_BASE_URL=https://fleet.example.com/api/v1 \
//!     cargo test -p vehicle-registry-client --test registry_test -- --ignored --nocapture
//! ```

mod common;

use common::TestContext;
use vehicle_registry_client::{
    ApprovalStatus, FilterCriteria, QuickFilter, RegistryApi, VehicleQuery,
};

#[tokio::test]
#[ignore]
async fn list_first_page() {
    skip_if_no_registry!("REGISTRY_BASE_URL");

    let ctx = TestContext::from_env().expect("build test context");
    let query = VehicleQuery::build(&FilterCriteria::default(), 1, 10, None);

    let result = ctx.client.list_vehicles(&query).await;
    assert!(result.is_ok(), "list_vehicles failed: {result:?}");

    let page = result.unwrap();
    assert!(
        page.total as usize >= page.records.len(),
        "total below page length"
    );
    println!("✓ list_first_page: {} of {} vehicles", page.records.len(), page.total);
}

#[tokio::test]
#[ignore]
async fn list_rejected_quick_filter() {
    skip_if_no_registry!("REGISTRY_BASE_URL");

    let ctx = TestContext::from_env().expect("build test context");
    let criteria = FilterCriteria {
        quick_filter: Some(QuickFilter::Rejected),
        ..FilterCriteria::default()
    };
    let query = VehicleQuery::build(&criteria, 1, 10, None);

    let result = ctx.client.list_vehicles(&query).await;
    assert!(result.is_ok(), "filtered list_vehicles failed: {result:?}");
    println!("✓ list_rejected_quick_filter: {} matches", result.unwrap().total);
}

#[tokio::test]
#[ignore]
async fn highlights_match_rejected_count() {
    skip_if_no_registry!("REGISTRY_BASE_URL");

    let ctx = TestContext::from_env().expect("build test context");

    let counts = ctx.client.fetch_highlights().await;
    assert!(counts.is_ok(), "fetch_highlights failed: {counts:?}");
    let counts = counts.unwrap();

    // The rejected card total should agree with an explicit rejected query.
    let criteria = FilterCriteria {
        approval_status: Some(ApprovalStatus::Rejected),
        ..FilterCriteria::default()
    };
    let page = ctx
        .client
        .list_vehicles(&VehicleQuery::build(&criteria, 1, 1, None))
        .await
        .expect("rejected list query");

    println!(
        "✓ highlights: draft={} pending={} rejected={} (list total {})",
        counts.draft, counts.pending, counts.rejected, page.total
    );
}
