//! Then steps for task assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::then;
use task_tracker::task::services::TaskRegistryError;

#[then(r#"the task identifiers are "{expected}""#)]
fn task_identifiers_are(world: &AssignmentWorld, expected: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world.created.iter().map(|task| task.id().to_string()).collect();
    let expected: Vec<&str> = expected.split(',').map(str::trim).collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the latest task identifier is "{expected}""#)]
fn latest_identifier_is(world: &AssignmentWorld, expected: String) -> Result<(), eyre::Report> {
    let latest = world
        .created
        .last()
        .ok_or_else(|| eyre::eyre!("no task created in scenario"))?;
    eyre::ensure!(
        latest.id().to_string() == expected,
        "expected {expected}, found {}",
        latest.id()
    );
    Ok(())
}

#[then(r#""{staff}" has {count:usize} tasks"#)]
fn staff_has_tasks(world: &AssignmentWorld, staff: String, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_tasks_for_user(&staff))?;
    eyre::ensure!(tasks.len() == count, "expected {count} tasks, found {}", tasks.len());
    Ok(())
}

#[then(r#"the latest task status is "{status}""#)]
fn latest_status_is(world: &AssignmentWorld, status: String) -> Result<(), eyre::Report> {
    let latest = world
        .created
        .last()
        .ok_or_else(|| eyre::eyre!("no task created in scenario"))?;
    let stored = run_async(world.service.find_task(&latest.id().to_string()))?;
    eyre::ensure!(
        stored.status().as_str() == status,
        "expected status {status}, found {}",
        stored.status()
    );
    Ok(())
}

#[then(r#"the notifications are "{expected}""#)]
fn notifications_are(world: &AssignmentWorld, expected: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world
        .sink
        .delivered()
        .iter()
        .map(|event| event.kind().as_str())
        .collect();
    let expected: Vec<&str> = expected.split(',').map(str::trim).collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the update fails because the task does not exist")]
fn update_fails_not_found(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;
    eyre::ensure!(
        matches!(result, Err(TaskRegistryError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[then("no tasks exist")]
fn no_tasks_exist(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list_all_tasks())?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}
