//! Application services for user registration and review.

mod registry;

pub use registry::{
    RegisterUserRequest, UserRegistryError, UserRegistryResult, UserRegistryService,
};
