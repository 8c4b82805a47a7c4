//! Then steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rstest_bdd_macros::then;
use taskapp::task::{
    domain::{TaskCode, TaskStatus},
    ports::{LogRepository, TaskRepository},
    services::{ErrorKind, TaskLifecycleError},
};

fn last_result(world: &LifecycleWorld) -> Result<&Result<(), TaskLifecycleError>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))
}

#[then("the request succeeds")]
fn request_succeeds(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    if let Err(err) = last_result(world)? {
        return Err(eyre::eyre!("expected success, got {err}"));
    }
    Ok(())
}

#[then(r#"the request fails as "{kind}""#)]
fn request_fails_as(world: &LifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    let expected = match kind.as_str() {
        "reference" => ErrorKind::Reference,
        "invalid transition" => ErrorKind::InvalidTransition,
        "invalid state" => ErrorKind::InvalidState,
        "invalid input" => ErrorKind::InvalidInput,
        "conflict" => ErrorKind::Conflict,
        "storage" => ErrorKind::Storage,
        other => return Err(eyre::eyre!("unknown error kind in scenario: {other}")),
    };

    match last_result(world)? {
        Err(err) if err.kind() == expected => Ok(()),
        other => Err(eyre::eyre!("expected {expected:?} failure, got {other:?}")),
    }
}

#[then(r#"task {code:u32} has status "{status}""#)]
fn task_has_status(world: &LifecycleWorld, code: u32, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .tasks
        .find_by_code(TaskCode::new(code))?
        .ok_or_else(|| eyre::eyre!("missing task {code}"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("task {code:u32} has {count:usize} log entries")]
fn task_has_log_entries(
    world: &LifecycleWorld,
    code: u32,
    count: usize,
) -> Result<(), eyre::Report> {
    let found = world.logs.find_by_task_code(TaskCode::new(code))?.len();
    if found != count {
        return Err(eyre::eyre!("expected {count} log entries, found {found}"));
    }
    Ok(())
}

#[then("task {code:u32} no longer exists")]
fn task_is_gone(world: &LifecycleWorld, code: u32) -> Result<(), eyre::Report> {
    if world.tasks.find_by_code(TaskCode::new(code))?.is_some() {
        return Err(eyre::eyre!("task {code} still exists"));
    }
    Ok(())
}
