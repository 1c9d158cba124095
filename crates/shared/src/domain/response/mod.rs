pub mod auth;

pub use self::auth::SessionCheckResponse;
