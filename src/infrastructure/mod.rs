pub mod access;
pub mod formatting;
pub mod routing;
pub mod storage;
pub mod translation;
