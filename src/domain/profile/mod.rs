pub mod entity;
pub mod invariants;

pub use entity::UserProfile;
pub use invariants::validate_profile;
