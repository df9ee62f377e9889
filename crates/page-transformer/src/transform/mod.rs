//! One module per page region.

pub mod cards;
pub mod header;
pub mod list_group;
pub mod menu;
