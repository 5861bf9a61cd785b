pub mod store;
pub mod types;

pub use store::{PgUserStore, UserStore};
pub use types::{ExternalIdentity, NewUser, User, UserId};
