use crate::core::errors::ListingError;
use crate::core::models::{
    Action, Cell, HeaderColumn, HeaderView, LinkView, ListingPage, Membership, Operation, ProfileSummary,
    RenderedListing, RenderedRow, RowView, GROUP_MEMBERSHIP,
};
use crate::infrastructure::access::PermissionChecker;
use crate::infrastructure::formatting::{DateFormatter, LONG_DATE};
use crate::infrastructure::routing::{LinkBuilder, LinkRel, RedirectDestination};
use crate::infrastructure::storage::{MembershipFilter, MembershipStore, SortKey};
use crate::infrastructure::translation::Translator;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub const MEMBER_LABEL: &str = "Member";
pub const ORGANIZATION_LABEL: &str = "Organization";
pub const JOINED_DATE_LABEL: &str = "Joined date";
pub const ROLE_LABEL: &str = "Role";
pub const OPERATIONS_LABEL: &str = "Operations";
pub const EDIT_LABEL: &str = "Edit";
pub const DELETE_LABEL: &str = "Delete";
pub const REMOVE_LABEL: &str = "Remove";
pub const VIEW_LABEL: &str = "View";
pub const EMPTY_LABEL: &str = "There are no members yet.";

pub const EDIT_WEIGHT: i32 = 10;
pub const DELETE_WEIGHT: i32 = 100;
/// Places the view operation after the administrative ones.
pub const VIEW_WEIGHT: i32 = 101;

/// What a rendering layer needs to draw a group member table.
#[async_trait]
pub trait MembershipListBuilder: Send + Sync {
    async fn list_memberships(
        &self,
        group_id: &str,
        sort: SortKey,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<ListingPage, ListingError>;

    fn build_header(&self) -> HeaderView;

    fn build_row(&self, membership: &Membership) -> Result<RowView, ListingError>;

    async fn default_operations(&self, membership: &Membership) -> Result<Vec<Operation>, ListingError>;

    fn empty_state_label(&self) -> String;
}

pub struct MembershipListingService<S, D, P, L, R, T>
where
    S: MembershipStore,
    D: DateFormatter,
    P: PermissionChecker,
    L: LinkBuilder,
    R: RedirectDestination,
    T: Translator,
{
    storage: S,
    date_formatter: D,
    permissions: P,
    links: L,
    destination: R,
    translator: T,
}

impl<S, D, P, L, R, T> MembershipListingService<S, D, P, L, R, T>
where
    S: MembershipStore,
    D: DateFormatter,
    P: PermissionChecker,
    L: LinkBuilder,
    R: RedirectDestination,
    T: Translator,
{
    pub fn new(storage: S, date_formatter: D, permissions: P, links: L, destination: R, translator: T) -> Self {
        MembershipListingService {
            storage,
            date_formatter,
            permissions,
            links,
            destination,
            translator,
        }
    }

    /// Lists, loads and renders one page of the members of `group_id`.
    pub async fn render(
        &self,
        group_id: &str,
        sort: SortKey,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<RenderedListing, ListingError> {
        let page = self.list_memberships(group_id, sort, limit, offset).await?;
        let memberships = self.storage.load(&page.ids).await?;
        let operations = try_join_all(memberships.iter().map(|m| self.default_operations(m))).await?;

        let rows = memberships
            .iter()
            .zip(operations)
            .map(|(membership, operations)| {
                Ok(RenderedRow {
                    id: membership.id.clone(),
                    row: self.build_row(membership)?,
                    operations,
                })
            })
            .collect::<Result<Vec<_>, ListingError>>()?;
        info!(
            "Rendered {} of {} members for group {}",
            rows.len(),
            page.total,
            group_id
        );

        Ok(RenderedListing {
            header: self.build_header(),
            rows,
            total: page.total,
            offset: page.offset,
            limit: page.limit,
            empty: self.empty_state_label(),
        })
    }

    fn role_names(&self, membership: &Membership) -> String {
        let mut roles: Vec<String> = membership.roles.iter().map(|r| r.label.clone()).collect();
        if roles.is_empty() {
            roles.push(self.translator.translate(MEMBER_LABEL));
        }
        roles.join(", ")
    }

    async fn base_operations(&self, membership: &Membership) -> Result<Vec<Operation>, ListingError> {
        let entity = membership.entity_ref();
        let mut operations = Vec::new();
        for (key, action, rel, weight, title) in [
            ("edit", Action::Update, LinkRel::EditForm, EDIT_WEIGHT, EDIT_LABEL),
            ("delete", Action::Delete, LinkRel::DeleteForm, DELETE_WEIGHT, DELETE_LABEL),
        ] {
            if !self.permissions.can_access(&entity, action).await? {
                continue;
            }
            if let Some(url) = self.links.url(&entity, rel)? {
                operations.push(Operation {
                    key: key.to_string(),
                    title: self.translator.translate(title),
                    weight,
                    url,
                    query: BTreeMap::new(),
                });
            }
        }
        Ok(operations)
    }
}

#[async_trait]
impl<S, D, P, L, R, T> MembershipListBuilder for MembershipListingService<S, D, P, L, R, T>
where
    S: MembershipStore,
    D: DateFormatter,
    P: PermissionChecker,
    L: LinkBuilder,
    R: RedirectDestination,
    T: Translator,
{
    async fn list_memberships(
        &self,
        group_id: &str,
        sort: SortKey,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<ListingPage, ListingError> {
        if self.storage.get_group(group_id).await?.is_none() {
            warn!("Member listing requested for unknown group {}", group_id);
            return Err(ListingError::GroupNotFound(group_id.to_string()));
        }

        let filter = MembershipFilter {
            gid: group_id.to_string(),
            kind_contains: GROUP_MEMBERSHIP.to_string(),
        };
        // A zero limit means no pager.
        let limit = limit.filter(|l| *l > 0);
        let page = self.storage.find(&filter, sort, limit, offset).await?;
        debug!(
            "Group {} has {} memberships, returning {}",
            group_id,
            page.total,
            page.ids.len()
        );
        Ok(page)
    }

    fn build_header(&self) -> HeaderView {
        let columns = [
            ("member", MEMBER_LABEL),
            ("organization", ORGANIZATION_LABEL),
            ("created", JOINED_DATE_LABEL),
            ("group_role", ROLE_LABEL),
            ("operations", OPERATIONS_LABEL),
        ]
        .into_iter()
        .map(|(key, label)| HeaderColumn {
            key: key.to_string(),
            label: self.translator.translate(label),
        })
        .collect();
        HeaderView { columns }
    }

    fn build_row(&self, membership: &Membership) -> Result<RowView, ListingError> {
        let created = self.date_formatter.format(membership.created, LONG_DATE)?;
        let mut row = RowView {
            created: Some(Cell::Markup(created)),
            ..RowView::default()
        };

        if membership.is_membership() {
            row.group_role = Some(Cell::Markup(self.role_names(membership)));
            // Without a profile the member and organization cells stay empty.
            if let Some(profile) = &membership.profile {
                row.member = Some(Cell::Profile(ProfileSummary {
                    profile_id: profile.id.clone(),
                    display_name: profile.display_name.clone(),
                }));
                row.organization = profile
                    .organization
                    .as_ref()
                    .filter(|o| !o.trim().is_empty())
                    .map(|o| Cell::Organization(o.clone()));
            } else {
                debug!("Membership {} has no member profile", membership.id);
            }
        } else {
            let entity = membership.entity_ref();
            row.member = Some(Cell::Markup(membership.id.clone()));
            row.organization = self.links.canonical_url(&entity)?.map(|url| {
                Cell::Link(LinkView {
                    title: membership.display_label().to_string(),
                    url,
                })
            });
        }
        Ok(row)
    }

    async fn default_operations(&self, membership: &Membership) -> Result<Vec<Operation>, ListingError> {
        let mut operations = self.base_operations(membership).await?;

        for operation in operations.iter_mut() {
            match operation.key.as_str() {
                "edit" => operation.title = self.translator.translate(EDIT_LABEL),
                "delete" => operation.title = self.translator.translate(REMOVE_LABEL),
                _ => {}
            }
        }

        let target = &membership.target;
        if self.permissions.can_access(target, Action::View).await? {
            if let Some(url) = self.links.canonical_url(target)? {
                operations.push(Operation {
                    key: "view".to_string(),
                    title: self.translator.translate(VIEW_LABEL),
                    weight: VIEW_WEIGHT,
                    url,
                    query: BTreeMap::new(),
                });
            }
        }

        let destination = self.destination.as_query_params();
        for operation in operations.iter_mut() {
            operation.query = destination.clone();
        }
        Ok(operations)
    }

    fn empty_state_label(&self) -> String {
        self.translator.translate(EMPTY_LABEL)
    }
}
