pub mod entity;
pub mod group;
pub mod listing;
pub mod membership;

pub use entity::{Action, EntityRef};
pub use group::{Group, Profile, Role};
pub use listing::{
    Cell, HeaderColumn, HeaderView, LinkView, ListingPage, Operation, ProfileSummary, RenderedListing, RenderedRow,
    RowView,
};
pub use membership::{GROUP_CONTENT, GROUP_MEMBERSHIP, Membership};
