//! Read-only detail panel for the selected door.

#[cfg(test)]
#[path = "door_detail_panel_test.rs"]
mod door_detail_panel_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::types::{DoorStatus, LockStatus};
use crate::state::floor::FloorState;

/// Human label for a door's administrative status.
#[must_use]
pub fn status_label(status: DoorStatus) -> &'static str {
    match status {
        DoorStatus::Active => "Active",
        DoorStatus::Inactive => "Inactive",
        DoorStatus::Maintenance => "Under maintenance",
    }
}

/// Human label for a door's lock state. Unknown when the lock is silent.
#[must_use]
pub fn lock_label(lock_status: Option<LockStatus>) -> &'static str {
    match lock_status {
        Some(LockStatus::Open) => "Open",
        Some(LockStatus::Closed) => "Closed",
        None => "Unknown",
    }
}

/// Access-point count phrase for the panel footer.
#[must_use]
pub fn marker_count_label(count: usize) -> String {
    match count {
        0 => "No mapped access points".to_owned(),
        1 => "1 mapped access point".to_owned(),
        n => format!("{n} mapped access points"),
    }
}

/// Detail panel shown while a marker is selected. Renders nothing when the
/// selection is empty or the door has since disappeared from the list.
#[component]
pub fn DoorDetailPanel(floor: RwSignal<FloorState>, selected: RwSignal<Option<Uuid>>) -> impl IntoView {
    let detail = move || {
        let id = selected.get()?;
        floor.with(|s| {
            let door = s.door(&id)?;
            Some((
                door.name.clone(),
                status_label(door.status),
                lock_label(door.lock_status),
                marker_count_label(s.marker_count(&id)),
            ))
        })
    };

    view! {
        <Show when=move || detail().is_some()>
            <aside class="door-detail-panel">
                {move || {
                    detail().map(|(name, status, lock, markers)| {
                        view! {
                            <h2 class="door-detail-panel__name">{name}</h2>
                            <dl class="door-detail-panel__rows">
                                <dt>"Status"</dt>
                                <dd>{status}</dd>
                                <dt>"Lock"</dt>
                                <dd>{lock}</dd>
                            </dl>
                            <p class="door-detail-panel__markers">{markers}</p>
                        }
                    })
                }}
            </aside>
        </Show>
    }
}
