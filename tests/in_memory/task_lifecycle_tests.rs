//! In-memory integration tests for task lifecycle operations.

use super::helpers::{ALICE, BOB, FixedClock, Stores, stores};
use eyre::ensure;
use rstest::rstest;
use taskapp::task::{
    domain::{LogEntry, TaskCode, TaskStatus, UserCode},
    ports::{LogRepository, TaskRepository},
    services::{AdvanceStatusRequest, CreateTaskRequest, ErrorKind},
};

fn entry(task: u32, user: u32, status: TaskStatus) -> LogEntry {
    LogEntry::new(
        TaskCode::new(task),
        UserCode::new(user),
        status,
        FixedClock::date(),
    )
}

#[rstest]
fn full_lifecycle_leaves_no_trace(stores: Stores) -> eyre::Result<()> {
    let Stores {
        service,
        tasks,
        logs,
    } = stores;

    service.create(CreateTaskRequest::new(1, "Design doc", ALICE, ALICE))?;
    service.advance_status(AdvanceStatusRequest::new(1, 1, BOB))?;
    let done = service.advance_status(AdvanceStatusRequest::new(1, 2, ALICE))?;
    ensure!(done.status() == TaskStatus::Done);

    ensure!(
        service.history(TaskCode::new(1))?
            == vec![
                entry(1, ALICE, TaskStatus::NotStarted),
                entry(1, BOB, TaskStatus::InProgress),
                entry(1, ALICE, TaskStatus::Done),
            ]
    );

    let name = service.delete(TaskCode::new(1))?;

    ensure!(name.as_str() == "Design doc");
    ensure!(tasks.find_all()?.is_empty());
    ensure!(logs.find_all()?.is_empty());
    Ok(())
}

#[rstest]
fn rejected_requests_change_nothing(stores: Stores) -> eyre::Result<()> {
    let Stores {
        service,
        tasks,
        logs,
    } = stores;
    service.create(CreateTaskRequest::new(1, "Design doc", ALICE, ALICE))?;
    let before_tasks = tasks.find_all()?;
    let before_logs = logs.find_all()?;

    let kinds = [
        service
            .advance_status(AdvanceStatusRequest::new(1, 2, ALICE))
            .err()
            .map(|err| err.kind()),
        service
            .advance_status(AdvanceStatusRequest::new(1, 0, ALICE))
            .err()
            .map(|err| err.kind()),
        service
            .advance_status(AdvanceStatusRequest::new(9, 1, ALICE))
            .err()
            .map(|err| err.kind()),
        service.delete(TaskCode::new(1)).err().map(|err| err.kind()),
        service
            .create(CreateTaskRequest::new(1, "Again", ALICE, ALICE))
            .err()
            .map(|err| err.kind()),
        service
            .create(CreateTaskRequest::new(2, "Orphan", 999, ALICE))
            .err()
            .map(|err| err.kind()),
        service
            .create(CreateTaskRequest::new(3, "  ", ALICE, ALICE))
            .err()
            .map(|err| err.kind()),
    ];

    ensure!(
        kinds
            == [
                Some(ErrorKind::InvalidTransition),
                Some(ErrorKind::InvalidTransition),
                Some(ErrorKind::Reference),
                Some(ErrorKind::InvalidState),
                Some(ErrorKind::Conflict),
                Some(ErrorKind::Reference),
                Some(ErrorKind::InvalidInput),
            ],
        "unexpected error kinds: {kinds:?}"
    );
    ensure!(tasks.find_all()? == before_tasks);
    ensure!(logs.find_all()? == before_logs);
    Ok(())
}

#[rstest]
fn deleting_one_task_keeps_other_histories(stores: Stores) -> eyre::Result<()> {
    let Stores { service, logs, .. } = stores;
    service.create(CreateTaskRequest::new(1, "Design doc", ALICE, ALICE))?;
    service.create(CreateTaskRequest::new(2, "Build", BOB, BOB))?;
    service.advance_status(AdvanceStatusRequest::new(1, 1, ALICE))?;
    service.advance_status(AdvanceStatusRequest::new(2, 1, BOB))?;
    service.advance_status(AdvanceStatusRequest::new(1, 2, ALICE))?;

    service.delete(TaskCode::new(1))?;

    ensure!(
        logs.find_all()?
            == vec![
                entry(2, BOB, TaskStatus::NotStarted),
                entry(2, BOB, TaskStatus::InProgress),
            ]
    );
    Ok(())
}

#[rstest]
fn deleted_code_can_be_reused(stores: Stores) -> eyre::Result<()> {
    let Stores { service, .. } = stores;
    service.create(CreateTaskRequest::new(1, "Design doc", ALICE, ALICE))?;
    service.advance_status(AdvanceStatusRequest::new(1, 1, ALICE))?;
    service.advance_status(AdvanceStatusRequest::new(1, 2, ALICE))?;
    service.delete(TaskCode::new(1))?;

    let reused = service.create(CreateTaskRequest::new(1, "Second life", BOB, BOB))?;

    ensure!(reused.status() == TaskStatus::NotStarted);
    ensure!(service.history(TaskCode::new(1))? == vec![entry(1, BOB, TaskStatus::NotStarted)]);
    Ok(())
}
