//! Bridge component between Leptos state and the imperative `floorplan::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The floorplan crate owns render-time concerns (transform, markers, hit
//! geometry) while this host performs the data fetches, feeds results into
//! the engine, drives the pulse ticker, and translates pointer events into
//! the selection callback.
//!
//! CONCURRENCY
//! ===========
//! Floor metadata and the door list are fetched concurrently and applied in
//! whichever order they resolve. Coordinate lookups then fan out as one
//! batch per door and join; a failed lookup degrades that door only. Every
//! response is tagged with the load generation it was issued under, so late
//! results from a previous floor selection are dropped on arrival.

use leptos::prelude::*;

use crate::state::floor::FloorState;
use uuid::Uuid;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::floor::ImageStatus;
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::pointer_point;
#[cfg(feature = "hydrate")]
use crate::util::canvas_viewport::{now_ms, sync_viewport};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use floorplan::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Milliseconds between pulse ticks. ~30 Hz is plenty for a 1.26 s sinusoid
/// and keeps hidden-tab wakeups cheap.
#[cfg(feature = "hydrate")]
const PULSE_TICK_MS: u32 = 33;

#[cfg(feature = "hydrate")]
fn render_now(engine: &Rc<RefCell<Option<Engine>>>) {
    if let Some(engine) = engine.borrow().as_ref() {
        if let Err(err) = engine.render(now_ms()) {
            log::warn!("floor plan render failed: {err:?}");
        }
    }
}

/// Coalesce redraw requests through `requestAnimationFrame` so bursts of
/// state changes cost one frame, falling back to a synchronous render when
/// no window is available.
#[cfg(feature = "hydrate")]
fn request_render(engine: &Rc<RefCell<Option<Engine>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        render_now(engine);
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        render_now(&engine_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        render_now(engine);
    }
}

/// Floor-plan host component.
///
/// On hydration, this mounts `floorplan::engine::Engine` against its canvas,
/// fetches the floor, door, and coordinate data for the `ids` selection, and
/// renders markers until unmounted. Fires `on_select` with the clicked
/// door's id, or `None` when empty space clears the selection.
#[component]
pub fn FloorPlanHost(
    /// Current `(building_id, floor_id)` selection; `None` suspends loading.
    ids: Memo<Option<(Uuid, Uuid)>>,
    floor: RwSignal<FloorState>,
    #[prop(into)] on_select: Callback<Option<Uuid>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let raf_pending = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let pulse_tick = Rc::new(RefCell::new(None::<Interval>));
    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "hydrate")]
    let engine_ready = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let last_synced_revision = RwSignal::new(0_u64);

    // Mount the engine once the canvas element exists.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = Engine::new(canvas);
            sync_viewport(&mut instance, &canvas_ref_mount);
            *engine.borrow_mut() = Some(instance);
            engine_ready.set(true);
        });
    }

    // Kick off the fetches whenever the floor selection changes.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some((building_id, floor_id)) = ids.get() else {
                return;
            };
            let generation = floor
                .try_update(|s| s.begin_load(building_id, floor_id))
                .unwrap_or(0);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                // Blank immediately so the previous floor never lingers.
                engine.clear_scene();
            }
            on_select.run(None);

            leptos::task::spawn_local(async move {
                let (floor_result, doors_result) = futures::join!(
                    api::fetch_floor(building_id, floor_id),
                    api::fetch_doors(building_id, floor_id),
                );
                let door_batch = match &doors_result {
                    Ok(doors) => doors.clone(),
                    Err(_) => Vec::new(),
                };
                floor.update(|s| {
                    s.apply_floor(generation, floor_result);
                    s.apply_doors(generation, doors_result);
                });

                // Fan out one coordinate lookup per known door, join the
                // whole batch, and merge only the successes.
                let lookups = door_batch.iter().map(|door| {
                    let door_id = door.id;
                    async move {
                        (door_id, api::fetch_door_coordinates(building_id, floor_id, door_id).await)
                    }
                });
                let results = futures::future::join_all(lookups).await;
                floor.update(|s| {
                    for (door_id, result) in results {
                        if let Err(message) = &result {
                            log::warn!("coordinates for door {door_id} unavailable: {message}");
                        }
                        s.apply_coordinates(generation, door_id, result);
                    }
                });
            });
        });
    }

    // Load the floor-plan image once metadata names one.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let pending = floor.with(|s| {
                if s.image_status != ImageStatus::Idle {
                    return None;
                }
                let url = s.floor.as_ref().filter(|f| f.has_plan())?.image_url.clone()?;
                Some((s.generation, url))
            });
            let Some((generation, url)) = pending else {
                return;
            };
            let Ok(image) = web_sys::HtmlImageElement::new() else {
                floor.update(|s| s.set_image_status(generation, ImageStatus::Failed));
                return;
            };
            floor.update(|s| s.set_image_status(generation, ImageStatus::Loading));

            let engine_for_load = Rc::clone(&engine);
            let image_for_load = image.clone();
            let onload = Closure::once_into_js(move || {
                if !floor.with_untracked(|s| s.is_current(generation)) {
                    return;
                }
                if let Some(engine) = engine_for_load.borrow_mut().as_mut() {
                    engine.set_image(image_for_load);
                }
                floor.update(|s| s.set_image_status(generation, ImageStatus::Ready));
            });
            image.set_onload(Some(onload.unchecked_ref()));

            let onerror = Closure::once_into_js(move || {
                floor.update(|s| s.set_image_status(generation, ImageStatus::Failed));
            });
            image.set_onerror(Some(onerror.unchecked_ref()));

            image.set_src(&url);
        });
    }

    // Resync the engine scene exactly once per state revision.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_sync = canvas_ref.clone();
        Effect::new(move || {
            if !engine_ready.get() {
                return;
            }
            let revision = floor.with(|s| s.revision);
            if revision == last_synced_revision.get_untracked() {
                return;
            }
            let (doors, coordinates) = floor.with_untracked(|s| (s.doors.clone(), s.coordinates.clone()));
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.load_doors(doors);
                for (door_id, list) in coordinates {
                    engine.load_coordinates(door_id, list);
                }
                sync_viewport(engine, &canvas_ref_sync);
            }
            request_render(&engine, raf_pending);
            last_synced_revision.set(revision);
        });
    }

    // Pulse ticker: runs only while there is a valid image to draw against,
    // and is dropped (cancelling the interval) the moment there isn't.
    #[cfg(feature = "hydrate")]
    {
        let pulse_tick = Rc::clone(&pulse_tick);
        let engine = Rc::clone(&engine);
        let canvas_ref_tick = canvas_ref.clone();
        Effect::new(move || {
            let animate = floor.with(|s| s.data_ready() && s.image_status == ImageStatus::Ready);
            if !animate {
                pulse_tick.borrow_mut().take();
                return;
            }
            if pulse_tick.borrow().is_some() {
                return;
            }

            let engine_for_tick = Rc::clone(&engine);
            let canvas_ref_for_tick = canvas_ref_tick.clone();
            let tick = Interval::new(PULSE_TICK_MS, move || {
                if let Some(engine) = engine_for_tick.borrow_mut().as_mut() {
                    // Tracks window resizes too; a zero-area viewport makes
                    // the engine skip drawing rather than divide by it.
                    sync_viewport(engine, &canvas_ref_for_tick);
                }
                request_render(&engine_for_tick, raf_pending);
            });
            *pulse_tick.borrow_mut() = Some(tick);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let pulse_tick = Rc::clone(&pulse_tick);
        on_cleanup(move || {
            pulse_tick.borrow_mut().take();
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let canvas_ref = canvas_ref.clone();
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let point = pointer_point(&ev);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_viewport(engine, &canvas_ref);
                    if let Action::SelectionChanged(selection) = engine.on_pointer_down(point) {
                        on_select.run(selection);
                    }
                }
                request_render(&engine, raf_pending);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ids, floor, on_select);
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <canvas
            class="floor-plan-host__canvas"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
        ></canvas>
    }
}
