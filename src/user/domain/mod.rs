//! Domain model for registered users.

mod email;
mod error;
mod ids;
mod registration;
mod status;
mod user;

pub use email::EmailAddress;
pub use error::{ParseUserIdError, UserDomainError};
pub use ids::UserId;
pub use registration::UserRegistration;
pub use status::{ReviewDecision, UserStatus};
pub use user::User;
