pub mod header_auth;
pub mod users;
