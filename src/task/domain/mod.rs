//! Domain model for task assignment and progress tracking.
//!
//! Tasks are created by the operator, updated by the operator or the assigned
//! staff member, and never deleted. All infrastructure concerns stay outside
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod update;

pub use error::{ParseTaskIdError, ParseTaskStatusError, TaskDomainError};
pub use ids::{Progress, StaffIdentifier, TaskId, day_prefix};
pub use status::{OverallAssessment, TaskStatus};
pub use task::{Task, TaskDraft};
pub use update::TaskUpdate;
