//! When steps for checklist BDD scenarios.

use super::world::ChecklistWorld;
use checklist::task::{domain::ItemIntent, ports::ConfirmationChoice};
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn dispatch(
    world: &mut ChecklistWorld,
    title: &str,
    intent: ItemIntent,
) -> Result<(), eyre::Report> {
    let id = world.task_id(title)?;
    world.last_focus = world
        .checklist
        .dispatch(id, intent)
        .wrap_err("dispatch row intent")?;
    Ok(())
}

fn resolve(world: &mut ChecklistWorld, choice: ConfirmationChoice) -> Result<(), eyre::Report> {
    let ticket = world
        .confirmations
        .last_ticket()
        .ok_or_else(|| eyre::eyre!("no confirmation prompt was shown"))?;
    world.checklist.resolve_confirmation(ticket, choice);
    Ok(())
}

#[when(r#"the user adds the task "{title}""#)]
fn add_task(world: &mut ChecklistWorld, title: String) {
    world.last_add_error = world.checklist.add_task(title).err();
}

#[when(r#"the user toggles the task "{title}""#)]
fn toggle_task(world: &mut ChecklistWorld, title: String) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::ToggleDone)
}

#[when(r#"the user starts editing the task "{title}""#)]
fn start_editing(world: &mut ChecklistWorld, title: String) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::RequestEdit)
}

#[when(r#"the user cancels the edit of the task "{title}""#)]
fn cancel_editing(world: &mut ChecklistWorld, title: String) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::RequestEdit)
}

#[when(r#"the user types "{text}" into the task "{title}""#)]
fn type_title(
    world: &mut ChecklistWorld,
    text: String,
    title: String,
) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::TitleChanged(text))
}

#[when(r#"the user submits the edit of the task "{title}""#)]
fn submit_edit(world: &mut ChecklistWorld, title: String) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::SubmitEdit)
}

#[when(r#"the user asks to remove the task "{title}""#)]
fn ask_to_remove(world: &mut ChecklistWorld, title: String) -> Result<(), eyre::Report> {
    dispatch(world, &title, ItemIntent::RemoveRequested)
}

#[when("the user declines the confirmation")]
fn decline(world: &mut ChecklistWorld) -> Result<(), eyre::Report> {
    resolve(world, ConfirmationChoice::Decline)
}

#[when("the user affirms the confirmation")]
fn affirm(world: &mut ChecklistWorld) -> Result<(), eyre::Report> {
    resolve(world, ConfirmationChoice::Affirm)
}
