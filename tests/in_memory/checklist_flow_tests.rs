//! In-memory integration tests for checklist flows.

use checklist::task::{
    adapters::memory::{RecordingConfirmationPort, RecordingNoticePort},
    domain::{EditMode, ItemIntent, TaskId},
    ports::ConfirmationChoice,
    services::{Checklist, FocusEffect, RemovalOutcome},
};
use eyre::{OptionExt, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestChecklist = Checklist<DefaultClock, RecordingNoticePort, RecordingConfirmationPort>;

struct Harness {
    checklist: TestChecklist,
    notices: RecordingNoticePort,
    confirmations: RecordingConfirmationPort,
}

#[fixture]
fn harness() -> Harness {
    let notices = RecordingNoticePort::new();
    let confirmations = RecordingConfirmationPort::new();
    Harness {
        checklist: Checklist::new(DefaultClock, notices.clone(), confirmations.clone()),
        notices,
        confirmations,
    }
}

fn titles(checklist: &TestChecklist) -> Vec<String> {
    checklist
        .store()
        .tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}

#[rstest]
fn rapid_adds_receive_distinct_increasing_ids(harness: Harness) -> eyre::Result<()> {
    let mut checklist = harness.checklist;
    let ids: Vec<TaskId> = (0..50)
        .map(|n| checklist.add_task(format!("task {n}")).map(|task| task.id()))
        .collect::<Result<_, _>>()?;

    ensure!(ids.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
    ensure!(checklist.count() == 50);
    Ok(())
}

#[rstest]
fn duplicate_titles_are_reported_through_notice_port(harness: Harness) -> eyre::Result<()> {
    let Harness {
        mut checklist,
        notices,
        ..
    } = harness;
    checklist.add_task("Buy milk")?;
    checklist.add_task("buy milk")?;

    ensure!(checklist.add_task("Buy milk").is_err());
    ensure!(checklist.add_task("buy milk").is_err());

    ensure!(notices.notices().len() == 2);
    ensure!(notices.last().ok_or_eyre("notice")?.message() == "task already added");
    ensure!(titles(&checklist) == vec!["Buy milk".to_owned(), "buy milk".to_owned()]);
    Ok(())
}

#[rstest]
fn edited_title_can_collide_with_existing_title(harness: Harness) -> eyre::Result<()> {
    let mut checklist = harness.checklist;
    checklist.add_task("A")?;
    let b = checklist.add_task("B")?.id();

    checklist.dispatch(b, ItemIntent::RequestEdit)?;
    checklist.dispatch(b, ItemIntent::TitleChanged("A".to_owned()))?;
    checklist.dispatch(b, ItemIntent::SubmitEdit)?;

    ensure!(titles(&checklist) == vec!["A".to_owned(), "A".to_owned()]);
    ensure!(checklist.add_task("A").is_err());
    Ok(())
}

#[rstest]
fn full_row_lifecycle(harness: Harness) -> eyre::Result<()> {
    let Harness {
        mut checklist,
        confirmations,
        ..
    } = harness;
    let id = checklist.add_task("Read book")?.id();

    ensure!(checklist.dispatch(id, ItemIntent::ToggleDone)?.is_empty());
    ensure!(checklist.dispatch(id, ItemIntent::RequestEdit)? == vec![FocusEffect::Focus]);
    ensure!(checklist.dispatch(id, ItemIntent::ToggleDone)?.is_empty());
    checklist.dispatch(id, ItemIntent::TitleChanged("Read two books".to_owned()))?;
    ensure!(checklist.dispatch(id, ItemIntent::SubmitEdit)? == vec![FocusEffect::Blur]);

    let view = checklist.view();
    let row = view.find(id).ok_or_eyre("row")?;
    ensure!(row.title == "Read two books");
    ensure!(row.done);
    ensure!(row.mode == EditMode::Viewing);

    checklist.remove_task(id)?;
    ensure!(checklist.count() == 1);
    let ticket = confirmations.last_ticket().ok_or_eyre("prompt shown")?;
    ensure!(
        checklist.resolve_confirmation(ticket, ConfirmationChoice::Affirm)
            == RemovalOutcome::Removed
    );
    ensure!(checklist.count() == 0);
    ensure!(checklist.view().tasks.is_empty());
    Ok(())
}

#[rstest]
fn removal_keeps_order_of_remaining_tasks(harness: Harness) -> eyre::Result<()> {
    let Harness {
        mut checklist,
        confirmations,
        ..
    } = harness;
    let mut ids = Vec::new();
    for title in ["one", "two", "three", "four"] {
        ids.push(checklist.add_task(title)?.id());
    }

    for id in ids.iter().skip(1).step_by(2) {
        checklist.remove_task(*id)?;
        let ticket = confirmations.last_ticket().ok_or_eyre("prompt shown")?;
        checklist.resolve_confirmation(ticket, ConfirmationChoice::Affirm);
    }

    ensure!(titles(&checklist) == vec!["one".to_owned(), "three".to_owned()]);
    let striped: Vec<bool> = checklist.view().tasks.iter().map(|row| row.striped).collect();
    ensure!(striped == vec![true, false]);
    Ok(())
}

#[rstest]
fn prompts_for_different_tasks_resolve_independently(harness: Harness) -> eyre::Result<()> {
    let Harness {
        mut checklist,
        confirmations,
        ..
    } = harness;
    let a = checklist.add_task("A")?.id();
    let b = checklist.add_task("B")?.id();

    checklist.remove_task(a)?;
    checklist.remove_task(b)?;
    let prompts = confirmations.prompts();
    let for_a = prompts
        .iter()
        .find(|prompt| prompt.task_id == a)
        .ok_or_eyre("prompt for A")?
        .ticket;
    let for_b = prompts
        .iter()
        .find(|prompt| prompt.task_id == b)
        .ok_or_eyre("prompt for B")?
        .ticket;

    ensure!(
        checklist.resolve_confirmation(for_b, ConfirmationChoice::Affirm)
            == RemovalOutcome::Removed
    );
    ensure!(
        checklist.resolve_confirmation(for_a, ConfirmationChoice::Decline)
            == RemovalOutcome::Declined
    );
    ensure!(titles(&checklist) == vec!["A".to_owned()]);
    Ok(())
}
