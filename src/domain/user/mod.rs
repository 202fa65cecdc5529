pub mod entity;
pub mod invariants;

pub use entity::{
    LocalProfile, LocalProfileKind, NewAccount, ProfileUpdate, User, UserAdminUpdate, UserRole,
};
pub use invariants::{validate_local_profile, validate_new_account, validate_user};
