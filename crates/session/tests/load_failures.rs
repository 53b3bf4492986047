//! A failed catalog load must not disturb anything the user already sees.

use catalog::{CatalogError, StaticSource, VenueRecord, VenueSource};
use facets::PriceBound;
use session::{BrowseSession, SessionError};

struct UnreachableApi;

impl VenueSource for UnreachableApi {
    fn describe(&self) -> String {
        "http://booking.invalid/venues".to_string()
    }

    async fn fetch_venues(&self) -> catalog::Result<Vec<VenueRecord>> {
        Err(CatalogError::Unavailable {
            reason: "dns error".to_string(),
        })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_failed_first_load_reports_unavailable() {
    init_tracing();
    let mut session = BrowseSession::new();

    let err = session.load(&UnreachableApi).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Catalog(CatalogError::Unavailable { .. })
    ));
    assert!(session.visible().is_empty());
    assert!(!session.catalog().is_loaded());
}

#[tokio::test]
async fn test_failed_reload_keeps_catalog_and_filters() {
    init_tracing();
    let mut session = BrowseSession::new();
    let source = StaticSource::new(vec![
        VenueRecord::new("1").with_category("Weddings").with_price(200.0),
        VenueRecord::new("2").with_category("Conference").with_price(500.0),
        VenueRecord::new("3").with_category("Weddings").with_price(800.0),
    ]);
    session.load(&source).await.unwrap();

    session.toggle_category("Weddings", true).unwrap();
    session
        .set_price_bound(PriceBound::Max, Some(500.0))
        .unwrap();
    let before: Vec<String> = session.visible().iter().map(|v| v.id.clone()).collect();
    assert_eq!(before, vec!["1"]);
    let selection_before = session.selection().clone();

    assert!(session.load(&UnreachableApi).await.is_err());

    let after: Vec<String> = session.visible().iter().map(|v| v.id.clone()).collect();
    assert_eq!(after, before);
    assert_eq!(session.selection(), &selection_before);
    assert_eq!(session.catalog().len(), 3);
}
