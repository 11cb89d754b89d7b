use crate::core::errors::ListingError;
use crate::core::models::{Cell, EntityRef, Membership, Role};
use crate::core::services::MembershipListBuilder;
use crate::infrastructure::access::in_memory::GrantTable;
use crate::infrastructure::formatting::chrono_formatter::ChronoDateFormatter;
use crate::infrastructure::formatting::{DateFormatter, LONG_DATE};
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use crate::infrastructure::translation::catalog::CatalogTranslator;
use crate::tests::{create_test_service, create_test_service_with, member, profile, TestService};
use chrono::{TimeZone, Utc};

fn service() -> TestService {
    create_test_service(InMemoryStorage::new(), GrantTable::new().for_account("anonymous"))
}

fn markup(cell: &Option<Cell>) -> &str {
    cell.as_ref().and_then(|c| c.as_markup()).unwrap()
}

#[test]
fn test_row_without_roles_shows_member_role() {
    let row = service()
        .build_row(&member("1", "g1", "u1").with_profile(profile("u1", "Alice", None)))
        .unwrap();
    assert_eq!(markup(&row.group_role), "Member");
}

#[test]
fn test_row_joins_roles_in_reference_order() {
    let membership = member("1", "g1", "u1")
        .with_roles(vec![Role::new("b", "Moderator"), Role::new("a", "Admin")])
        .with_profile(profile("u1", "Alice", None));
    let row = service().build_row(&membership).unwrap();
    assert_eq!(markup(&row.group_role), "Moderator, Admin");
}

#[test]
fn test_row_with_profile_has_member_and_organization() {
    let membership = member("1", "g1", "u1").with_profile(profile("u1", "Alice", Some("Acme")));
    let row = service().build_row(&membership).unwrap();

    match row.member {
        Some(Cell::Profile(summary)) => {
            assert_eq!(summary.display_name, "Alice");
            assert_eq!(summary.profile_id, "profile-u1");
        }
        other => panic!("expected profile cell, got {:?}", other),
    }
    assert_eq!(row.organization, Some(Cell::Organization("Acme".to_string())));
}

#[test]
fn test_row_profile_without_organization_omits_cell() {
    let membership = member("1", "g1", "u1").with_profile(profile("u1", "Alice", Some("  ")));
    let row = service().build_row(&membership).unwrap();
    assert!(row.member.is_some());
    assert!(row.organization.is_none());
}

#[test]
fn test_row_without_profile_leaves_member_cells_empty() {
    let row = service().build_row(&member("1", "g1", "u1")).unwrap();
    assert!(row.member.is_none());
    assert!(row.organization.is_none());
    assert!(row.created.is_some());
    assert_eq!(markup(&row.group_role), "Member");
}

#[test]
fn test_row_for_other_content_links_to_entity() {
    let content = Membership::new(
        "3",
        "g1",
        EntityRef::new("node", "7"),
        "group_node:topic",
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    )
    .with_label("Spring planting");
    let row = service().build_row(&content).unwrap();

    assert_eq!(markup(&row.member), "3");
    match row.organization {
        Some(Cell::Link(link)) => {
            assert_eq!(link.title, "Spring planting");
            assert_eq!(link.url.as_str(), "http://localhost:3000/group/content/3");
        }
        other => panic!("expected link cell, got {:?}", other),
    }
    assert!(row.group_role.is_none());
}

#[test]
fn test_row_formats_joined_date() {
    let mut membership = member("1", "g1", "u1");
    membership.created = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
    let row = service().build_row(&membership).unwrap();
    assert_eq!(markup(&row.created), "05 March 2024 14:07");
}

#[test]
fn test_row_uses_translated_default_role() {
    let service = create_test_service_with(
        InMemoryStorage::new(),
        GrantTable::new().for_account("anonymous"),
        CatalogTranslator::new().with_entry("Member", "Lid"),
    );
    let row = service.build_row(&member("1", "g1", "u1")).unwrap();
    assert_eq!(markup(&row.group_role), "Lid");
}

#[test]
fn test_header_labels() {
    let header = service().build_header();
    let keys: Vec<_> = header.columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["member", "organization", "created", "group_role", "operations"]);
    assert_eq!(header.label("member"), Some("Member"));
    assert_eq!(header.label("organization"), Some("Organization"));
    assert_eq!(header.label("group_role"), Some("Role"));
}

#[test]
fn test_date_formatter_profiles() {
    let formatter = ChronoDateFormatter::new("%Y").with_profile("month", "%B");
    let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
    assert_eq!(formatter.format(ts, LONG_DATE).unwrap(), "2024");
    assert_eq!(formatter.format(ts, "month").unwrap(), "March");
    assert!(matches!(formatter.format(ts, "unknown"), Err(ListingError::FormatError(_))));
}
