//! In-memory integration tests for task listings.

use super::helpers::{ALICE, BOB, Stores, stores};
use eyre::ensure;
use rstest::rstest;
use taskapp::task::{
    domain::{PersistedTaskData, Task, TaskCode, TaskName, TaskStatus, UserCode},
    ports::TaskRepository,
    presentation::render_listing,
    services::CreateTaskRequest,
};

#[rstest]
fn listing_marks_tasks_owned_by_the_viewer(stores: Stores) -> eyre::Result<()> {
    let Stores { service, .. } = stores;
    service.create(CreateTaskRequest::new(1, "Design doc", ALICE, BOB))?;
    service.create(CreateTaskRequest::new(2, "Build", BOB, BOB))?;

    let listings = service.list_all(UserCode::new(BOB))?;
    let flags: Vec<(u32, bool, Option<&str>)> = listings
        .iter()
        .map(|listing| {
            (
                listing.task().code().value(),
                listing.owned_by_viewer(),
                listing.owner().map(|user| user.name()),
            )
        })
        .collect();

    ensure!(flags == vec![(1, false, Some("Alice")), (2, true, Some("Bob"))]);
    Ok(())
}

#[rstest]
fn listing_survives_owner_missing_from_user_store(stores: Stores) -> eyre::Result<()> {
    let Stores { service, tasks, .. } = stores;
    tasks.save(&Task::from_persisted(PersistedTaskData {
        code: TaskCode::new(5),
        name: TaskName::new("Legacy import")?,
        status: TaskStatus::InProgress,
        owner: UserCode::new(404),
    }))?;

    let listings = service.list_all(UserCode::new(ALICE))?;
    let rendered = render_listing(&listings)?;

    ensure!(listings.first().is_some_and(|listing| listing.owner().is_none()));
    ensure!(rendered == "5. name: Legacy import, owner: unknown user 404, status: in progress\n");
    Ok(())
}

#[rstest]
fn empty_store_lists_nothing(stores: Stores) -> eyre::Result<()> {
    ensure!(stores.service.list_all(UserCode::new(ALICE))?.is_empty());
    Ok(())
}
