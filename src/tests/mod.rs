mod operations_tests;
mod row_tests;

use crate::core::models::{Action, EntityRef, Group, GROUP_MEMBERSHIP, Membership, Profile, Role};
use crate::core::services::MembershipListingService;
use crate::infrastructure::access::in_memory::{AccountPermissions, GrantTable};
use crate::infrastructure::formatting::chrono_formatter::ChronoDateFormatter;
use crate::infrastructure::routing::PathDestination;
use crate::infrastructure::routing::path_links::PathLinkBuilder;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::infrastructure::translation::catalog::CatalogTranslator;
use chrono::{DateTime, TimeZone, Utc};

pub const BASE_URL: &str = "http://localhost:3000";
pub const DESTINATION: &str = "/group/g1/members";

pub type TestService = MembershipListingService<
    InMemoryStorage,
    ChronoDateFormatter,
    AccountPermissions,
    PathLinkBuilder,
    PathDestination,
    CatalogTranslator,
>;

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
}

pub fn member(id: &str, gid: &str, user: &str) -> Membership {
    Membership::new(id, gid, EntityRef::new("user", user), GROUP_MEMBERSHIP, at(2024, 1, 1))
}

pub fn profile(user: &str, name: &str, organization: Option<&str>) -> Profile {
    Profile {
        id: format!("profile-{}", user),
        display_name: name.to_string(),
        organization: organization.map(String::from),
    }
}

/// Group g1 holds two memberships and one piece of other group content.
pub async fn seed_scenario() -> InMemoryStorage {
    let storage = InMemoryStorage::new();
    storage
        .save_group(Group {
            id: "g1".to_string(),
            label: "Gardening club".to_string(),
        })
        .await
        .unwrap();
    storage
        .save_membership(
            member("1", "g1", "u1")
                .with_roles(vec![Role::new("g1-admin", "Admin")])
                .with_profile(profile("u1", "Alice", Some("Acme"))),
        )
        .await
        .unwrap();
    storage
        .save_membership(member("2", "g1", "u2").with_profile(profile("u2", "Bob", None)))
        .await
        .unwrap();
    storage
        .save_membership(
            Membership::new("3", "g1", EntityRef::new("node", "7"), "group_node:topic", at(2024, 2, 1))
                .with_label("Spring planting"),
        )
        .await
        .unwrap();
    storage
}

pub async fn admin_grants() -> GrantTable {
    let grants = GrantTable::new();
    grants.grant_type("admin", "group_content", Action::Update).await;
    grants.grant_type("admin", "group_content", Action::Delete).await;
    grants.grant_type("admin", "user", Action::View).await;
    grants
}

pub fn create_test_service(storage: InMemoryStorage, permissions: AccountPermissions) -> TestService {
    create_test_service_with(storage, permissions, CatalogTranslator::new())
}

pub fn create_test_service_with(
    storage: InMemoryStorage,
    permissions: AccountPermissions,
    translator: CatalogTranslator,
) -> TestService {
    MembershipListingService::new(
        storage,
        ChronoDateFormatter::new("%d %B %Y %H:%M"),
        permissions,
        PathLinkBuilder::new(BASE_URL).unwrap(),
        PathDestination::new(DESTINATION),
        translator,
    )
}
