pub mod entity;
pub mod invariants;
pub mod list;

pub use entity::{FavoriteEntry, TitleType};
pub use invariants::{validate_favorite_entry, validate_unique_ids};
pub use list::FavoritesList;
