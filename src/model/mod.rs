pub mod court;
pub mod feed;
pub mod slot;
