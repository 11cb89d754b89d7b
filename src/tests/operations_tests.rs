use crate::core::models::{Action, EntityRef};
use crate::core::services::{MembershipListBuilder, MembershipListingService};
use crate::infrastructure::access::in_memory::GrantTable;
use crate::infrastructure::formatting::chrono_formatter::ChronoDateFormatter;
use crate::infrastructure::routing::path_links::PathLinkBuilder;
use crate::infrastructure::routing::{LinkRel, PathDestination};
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::infrastructure::translation::catalog::CatalogTranslator;
use crate::tests::{admin_grants, create_test_service, create_test_service_with, member, BASE_URL, DESTINATION};
use std::collections::BTreeMap;

fn destination() -> BTreeMap<String, String> {
    BTreeMap::from([("destination".to_string(), DESTINATION.to_string())])
}

#[tokio::test]
async fn test_admin_gets_edit_remove_and_view() {
    let grants = admin_grants().await;
    let service = create_test_service(InMemoryStorage::new(), grants.for_account("admin"));

    let operations = service.default_operations(&member("5", "g1", "u5")).await.unwrap();
    let summary: Vec<_> = operations
        .iter()
        .map(|o| (o.key.as_str(), o.title.as_str(), o.weight))
        .collect();
    assert_eq!(
        summary,
        vec![("edit", "Edit", 10), ("delete", "Remove", 100), ("view", "View", 101)]
    );
    assert_eq!(operations[0].url.as_str(), "http://localhost:3000/group/content/5/edit");
    assert_eq!(operations[2].url.as_str(), "http://localhost:3000/user/u5");
    assert!(operations.iter().all(|o| o.query == destination()));
}

#[tokio::test]
async fn test_no_access_no_operations() {
    let service = create_test_service(InMemoryStorage::new(), GrantTable::new().for_account("anonymous"));
    let operations = service.default_operations(&member("5", "g1", "u5")).await.unwrap();
    assert!(operations.is_empty());
}

#[tokio::test]
async fn test_view_only_for_viewer() {
    let grants = GrantTable::new();
    grants.grant_entity("viewer", &EntityRef::new("user", "u5"), Action::View).await;
    let service = create_test_service(InMemoryStorage::new(), grants.for_account("viewer"));

    let operations = service.default_operations(&member("5", "g1", "u5")).await.unwrap();
    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].key, "view");
    assert_eq!(operations[0].weight, 101);
    assert_eq!(operations[0].query, destination());

    // The grant is for u5 only.
    let other = service.default_operations(&member("6", "g1", "u6")).await.unwrap();
    assert!(other.is_empty());
}

#[tokio::test]
async fn test_no_view_without_canonical_link() {
    let grants = admin_grants().await;
    let service = MembershipListingService::new(
        InMemoryStorage::new(),
        ChronoDateFormatter::new("%Y"),
        grants.for_account("admin"),
        PathLinkBuilder::new(BASE_URL)
            .unwrap()
            .without_template("user", LinkRel::Canonical),
        PathDestination::new(DESTINATION),
        CatalogTranslator::new(),
    );

    let operations = service.default_operations(&member("5", "g1", "u5")).await.unwrap();
    let keys: Vec<_> = operations.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["edit", "delete"]);
}

#[tokio::test]
async fn test_operation_titles_are_translated() {
    let grants = admin_grants().await;
    let translator = CatalogTranslator::new()
        .with_entry("Edit", "Bewerken")
        .with_entry("Remove", "Verwijderen")
        .with_entry("View", "Bekijken");
    let service = create_test_service_with(InMemoryStorage::new(), grants.for_account("admin"), translator);

    let operations = service.default_operations(&member("5", "g1", "u5")).await.unwrap();
    let titles: Vec<_> = operations.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["Bewerken", "Verwijderen", "Bekijken"]);
}

#[tokio::test]
async fn test_rendered_rows_carry_operations() {
    let grants = admin_grants().await;
    let storage = crate::tests::seed_scenario().await;
    let service = create_test_service(storage, grants.for_account("admin"));

    let listing = service
        .render("g1", crate::infrastructure::storage::SortKey::Id, None, None)
        .await
        .unwrap();
    assert_eq!(listing.rows.len(), 2);
    assert!(listing.rows.iter().all(|r| r.operations.len() == 3));
}
