//! When steps for task assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use chrono::NaiveDate;
use rstest_bdd_macros::when;
use task_tracker::task::domain::{TaskStatus, TaskUpdate};

#[when("the date moves to {date}")]
fn date_moves_to(world: &mut AssignmentWorld, date: String) -> Result<(), eyre::Report> {
    let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
    world.set_date(day);
    Ok(())
}

#[when(r#"the operator assigns "{description}" to "{staff}""#)]
fn operator_assigns(
    world: &mut AssignmentWorld,
    description: String,
    staff: String,
) -> Result<(), eyre::Report> {
    world.assign(&description, &staff)
}

#[when(r#"the latest task is marked "{status}""#)]
fn latest_task_marked(world: &mut AssignmentWorld, status: String) -> Result<(), eyre::Report> {
    let id = world
        .created
        .last()
        .map(|task| task.id().to_string())
        .ok_or_else(|| eyre::eyre!("no task created in scenario"))?;
    mark(world, &id, &status)
}

#[when(r#"task "{id}" is marked "{status}""#)]
fn task_marked(world: &mut AssignmentWorld, id: String, status: String) -> Result<(), eyre::Report> {
    mark(world, &id, &status)
}

fn mark(world: &mut AssignmentWorld, id: &str, status: &str) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(status).map_err(|err| eyre::eyre!("{err}"))?;
    let result = run_async(
        world
            .service
            .update_task(id, TaskUpdate::new().with_status(status)),
    );
    if let Ok(ref updated) = result {
        if let Some(slot) = world.created.iter_mut().find(|task| task.id() == updated.id()) {
            *slot = updated.clone();
        }
    }
    world.last_update = Some(result);
    Ok(())
}
