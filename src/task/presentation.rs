//! Display helpers for task listings.
//!
//! Kept separate from the lifecycle service: nothing here reads or writes
//! a store.

use crate::task::{domain::TaskStatus, services::TaskListing};
use minijinja::Environment;
use serde_json::{Map, Value, json};

const LISTING_TEMPLATE: &str = "{% for row in rows %}\
{{ row.code }}. name: {{ row.name }}, owner: {{ row.owner }}, status: {{ row.status }}\n\
{% endfor %}";

/// Returns the human-readable label for a status.
#[must_use]
pub const fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::NotStarted => "not started",
        TaskStatus::InProgress => "in progress",
        TaskStatus::Done => "done",
    }
}

/// Renders one line per listed task.
///
/// Tasks owned by the viewer show `you` as owner; tasks whose owner no
/// longer resolves show the raw owner code.
///
/// # Errors
///
/// Returns [`minijinja::Error`] when the listing template fails to render.
pub fn render_listing(listings: &[TaskListing]) -> Result<String, minijinja::Error> {
    let rows: Vec<Value> = listings.iter().map(listing_row).collect();
    let mut context = Map::new();
    context.insert("rows".to_owned(), Value::Array(rows));
    Environment::new().render_str(LISTING_TEMPLATE, context)
}

fn listing_row(listing: &TaskListing) -> Value {
    let task = listing.task();
    let owner = if listing.owned_by_viewer() {
        "you".to_owned()
    } else {
        listing.owner().map_or_else(
            || format!("unknown user {}", task.owner()),
            |user| user.name().to_owned(),
        )
    };
    json!({
        "code": task.code().value(),
        "name": task.name().as_str(),
        "owner": owner,
        "status": status_label(task.status()),
    })
}
