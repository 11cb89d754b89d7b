use crate::{
    api::models::{ApiError, ErrorResponse, ListMembersQuery},
    config::CONFIG,
    core::{models::RenderedListing, services::MembershipListingService},
    infrastructure::{
        access::in_memory::GrantTable,
        formatting::chrono_formatter::ChronoDateFormatter,
        routing::{PathDestination, path_links::PathLinkBuilder},
        storage::{SortKey, in_memory::InMemoryStorage},
        translation::catalog::CatalogTranslator,
    },
};
use axum::{
    Json, Router,
    extract::{OriginalUri, Path, Query, State},
    http::HeaderMap,
};
use std::sync::Arc;
use tracing::debug;

/// Header naming the account the listing is rendered for.
pub const ACCOUNT_HEADER: &str = "x-account-id";
pub const ANONYMOUS: &str = "anonymous";

/// Collaborators shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub storage: InMemoryStorage,
    pub date_formatter: ChronoDateFormatter,
    pub grants: GrantTable,
    pub links: PathLinkBuilder,
    pub translator: CatalogTranslator,
}

// Define API routes
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/groups/{group_id}/members", axum::routing::get(list_group_members))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/members",
    params(
        ("group_id" = String, Path, description = "ID of the group to list members for"),
        ListMembersQuery
    ),
    responses(
        (status = 200, description = "Group members rendered", body = RenderedListing),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_group_members(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
    Query(query): Query<ListMembersQuery>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Json<RenderedListing>, ApiError> {
    let account_id = headers
        .get(ACCOUNT_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or(ANONYMOUS);
    let sort = match query.sort.as_deref() {
        Some(sort) => sort.parse::<SortKey>()?,
        None => SortKey::Id,
    };
    let limit = query.limit.or(Some(CONFIG.members_page_limit));
    debug!("Listing members of group {} for account {}", group_id, account_id);

    let service = MembershipListingService::new(
        state.storage.clone(),
        state.date_formatter.clone(),
        state.grants.for_account(account_id),
        state.links.clone(),
        PathDestination::new(uri.path()),
        state.translator.clone(),
    );
    let listing = service.render(&group_id, sort, limit, query.offset).await?;
    Ok(Json(listing))
}
