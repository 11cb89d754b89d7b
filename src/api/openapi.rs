use utoipa::OpenApi;

use crate::{
    api::models::ErrorResponse,
    core::models::{
        Cell, EntityRef, HeaderColumn, HeaderView, LinkView, Operation, ProfileSummary, RenderedListing, RenderedRow,
        RowView,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::list_group_members),
    components(schemas(
        ErrorResponse,
        RenderedListing,
        RenderedRow,
        RowView,
        Cell,
        LinkView,
        ProfileSummary,
        Operation,
        HeaderView,
        HeaderColumn,
        EntityRef
    )),
    info(
        title = "Social Group API",
        description = "API for listing the members of a group",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
