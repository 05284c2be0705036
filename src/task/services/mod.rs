//! Application services for task assignment and progress tracking.

mod registry;

pub use registry::{
    CreateTaskRequest, TaskRegistryError, TaskRegistryResult, TaskRegistryService,
};
