//! Floor page — the floor-plan door map view.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between URL floor identity
//! and the local `FloorState` cache lifecycle. Load state and the current
//! selection are owned per page instance and handed to children explicitly;
//! nothing about the floor view lives in shared context, so navigating
//! between floors can never leak one floor's state into another.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::components::door_detail_panel::DoorDetailPanel;
use crate::components::fetch_error_banner::FetchErrorBanner;
use crate::components::floor_plan_host::FloorPlanHost;
use crate::state::floor::FloorState;

/// Floor page — composes the canvas host, empty/loading states, the fetch
/// error banner, and the door detail panel. Reads building and floor ids
/// from the route parameters.
#[component]
pub fn FloorPage() -> impl IntoView {
    let params = use_params_map();
    let ids = Memo::new(move |_| {
        let map = params.read();
        let building_id = map
            .get("building_id")
            .and_then(|raw| Uuid::parse_str(&raw).ok());
        let floor_id = map.get("floor_id").and_then(|raw| Uuid::parse_str(&raw).ok());
        match (building_id, floor_id) {
            (Some(building_id), Some(floor_id)) => Some((building_id, floor_id)),
            _ => None,
        }
    });

    let floor = RwSignal::new(FloorState::default());
    let selected = RwSignal::new(None::<Uuid>);
    let on_select = Callback::new(move |selection: Option<Uuid>| selected.set(selection));

    let floor_name = move || {
        floor.with(|s| {
            s.floor
                .as_ref()
                .map_or_else(|| "Floor".to_owned(), |f| f.name.clone())
        })
    };
    let loading = move || floor.with(|s| !s.data_ready() && !s.load_failed);
    let missing_plan = move || floor.with(FloorState::missing_plan);

    view! {
        <Show
            when=move || ids.get().is_some()
            fallback=|| {
                view! {
                    <div class="floor-page floor-page--invalid">
                        <p>"This floor link is not valid."</p>
                    </div>
                }
            }
        >
            <div class="floor-page">
                <header class="floor-page__header">
                    <h1 class="floor-page__title">{floor_name}</h1>
                </header>

                <FetchErrorBanner floor=floor/>

                <main class="floor-page__map">
                    <FloorPlanHost ids=ids floor=floor on_select=on_select/>

                    <Show when=missing_plan>
                        <div class="floor-page__empty">
                            <p>"No floor plan has been uploaded for this floor."</p>
                        </div>
                    </Show>
                    <Show when=move || loading() && !missing_plan()>
                        <div class="floor-page__loading">
                            <p>"Loading floor..."</p>
                        </div>
                    </Show>
                </main>

                <DoorDetailPanel floor=floor selected=selected/>
            </div>
        </Show>
    }
}
