//! Given steps for task assignment BDD scenarios.

use super::world::AssignmentWorld;
use chrono::NaiveDate;
use rstest_bdd_macros::given;

#[given("the date is {date}")]
fn the_date_is(world: &mut AssignmentWorld, date: String) -> Result<(), eyre::Report> {
    let day = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
    world.set_date(day);
    Ok(())
}

#[given(r#"the operator has assigned "{description}" to "{staff}""#)]
fn operator_has_assigned(
    world: &mut AssignmentWorld,
    description: String,
    staff: String,
) -> Result<(), eyre::Report> {
    world.assign(&description, &staff)
}
