//! Given steps for checklist BDD scenarios.

use super::world::ChecklistWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty checklist")]
fn empty_checklist(world: &mut ChecklistWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.checklist.count() == 0, "checklist should start empty");
    Ok(())
}

#[given(r#"a checklist with tasks "{first}" and "{second}""#)]
fn checklist_with_tasks(
    world: &mut ChecklistWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for title in [first, second] {
        world
            .checklist
            .add_task(title)
            .wrap_err("seed checklist task")?;
    }
    Ok(())
}
