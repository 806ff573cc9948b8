//! SVG stage: garment image, draggable/resizable motif, lock toggle.

use std::rc::Rc;

use gloo::events::EventListener;
use motif_core::{DesignerConfig, GestureOutcome, Point, Rect, Size};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{HandleOverlay, LockButton};
use crate::hooks::use_designer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImageState {
    Loading,
    Ready,
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct DesignerStageProps {
    pub config: Rc<DesignerConfig>,
}

/// Converts a pointer position to stage (canvas pixel) coordinates.
fn stage_point(svg_ref: &NodeRef, canvas: Size, e: &PointerEvent) -> Option<Point> {
    let el = svg_ref.cast::<web_sys::Element>()?;
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some(Point::new(
        (f64::from(e.client_x()) - rect.left()) * canvas.width / rect.width(),
        (f64::from(e.client_y()) - rect.top()) * canvas.height / rect.height(),
    ))
}

fn image_callbacks(state: &UseStateHandle<ImageState>, name: &'static str) -> (Callback<Event>, Callback<Event>) {
    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            tracing::debug!(image = name, "image loaded");
            state.set(ImageState::Ready);
        })
    };
    let onerror = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            tracing::warn!(image = name, "image failed to load, skipping it");
            state.set(ImageState::Failed);
        })
    };
    (onload, onerror)
}

fn image_at(href: &str, r: Rect, class: &'static str, onload: Callback<Event>, onerror: Callback<Event>) -> Html {
    html! {
        <image
            class={class}
            href={href.to_string()}
            x={r.x.to_string()}
            y={r.y.to_string()}
            width={r.width.to_string()}
            height={r.height.to_string()}
            preserveAspectRatio="none"
            {onload}
            {onerror}
        />
    }
}

#[function_component(DesignerStage)]
pub fn designer_stage(props: &DesignerStageProps) -> Html {
    let config = props.config.clone();
    let designer = use_designer(&config);
    let svg_ref = use_node_ref();
    let pointer = use_mut_ref(|| None::<Point>);
    let garment_state = use_state(|| ImageState::Loading);
    let motif_state = use_state(|| ImageState::Loading);

    // Escape abandons an in-flight gesture
    {
        let designer = designer.clone();
        use_effect_with((), move |_| {
            let listener = designer.and_then(|designer| {
                let document = web_sys::window()?.document()?;
                Some(EventListener::new(&document, "keydown", move |event| {
                    if let Some(e) = event.dyn_ref::<KeyboardEvent>() {
                        if e.key() == "Escape" {
                            designer.cancel();
                        }
                    }
                }))
            });
            move || drop(listener)
        });
    }

    let Some(designer) = designer else {
        return html! {
            <div class="designer-error">{ "The designer could not be started." }</div>
        };
    };

    let onpointerdown = {
        let designer = designer.clone();
        let svg_ref = svg_ref.clone();
        let canvas = config.canvas;
        Callback::from(move |e: PointerEvent| {
            let Some(p) = stage_point(&svg_ref, canvas, &e) else {
                return;
            };
            if let GestureOutcome::Started(kind) = designer.pointer_down(p) {
                tracing::trace!(?kind, "gesture started");
                e.prevent_default();
                if let Some(el) = svg_ref.cast::<web_sys::Element>() {
                    let _ = el.set_pointer_capture(e.pointer_id());
                }
            }
        })
    };

    let onpointermove = {
        let designer = designer.clone();
        let svg_ref = svg_ref.clone();
        let pointer = pointer.clone();
        let canvas = config.canvas;
        Callback::from(move |e: PointerEvent| {
            let Some(p) = stage_point(&svg_ref, canvas, &e) else {
                return;
            };
            *pointer.borrow_mut() = Some(p);
            designer.pointer_move(p);
        })
    };

    let onpointerup = {
        let designer = designer.clone();
        let svg_ref = svg_ref.clone();
        Callback::from(move |e: PointerEvent| {
            if let GestureOutcome::Committed(rect) = designer.pointer_up() {
                tracing::debug!(?rect, "motif placement committed");
            }
            if let Some(el) = svg_ref.cast::<web_sys::Element>() {
                let _ = el.release_pointer_capture(e.pointer_id());
            }
        })
    };

    let onpointercancel = {
        let designer = designer.clone();
        Callback::from(move |_: PointerEvent| designer.cancel())
    };

    let on_toggle_lock = {
        let designer = designer.clone();
        Callback::from(move |_: MouseEvent| {
            let overlay = designer.toggle_lock();
            tracing::debug!(?overlay, "handle overlay updated");
        })
    };

    let (garment_onload, garment_onerror) = image_callbacks(&garment_state, "garment");
    let (motif_onload, motif_onerror) = image_callbacks(&motif_state, "motif");

    let garment = config.garment;
    let motif = designer.display_rect();
    let locked = designer.is_locked();
    // handles attach once the motif has been drawn (or has definitely failed)
    let handles_attached = *motif_state != ImageState::Loading;
    designer.set_handles_attached(handles_attached);
    let show_handles = designer.handles_visible() && handles_attached;
    let cursor = designer.cursor(*pointer.borrow());
    let canvas = config.canvas;

    html! {
        <div class="designer-stage">
            <LockButton locked={locked} onclick={on_toggle_lock} />
            <svg
                ref={svg_ref}
                class="stage"
                width={canvas.width.to_string()}
                height={canvas.height.to_string()}
                viewBox={format!("0 0 {} {}", canvas.width, canvas.height)}
                style={format!("cursor: {cursor}; touch-action: none")}
                {onpointerdown}
                {onpointermove}
                {onpointerup}
                {onpointercancel}
            >
                <rect
                    class="stage-background"
                    width={canvas.width.to_string()}
                    height={canvas.height.to_string()}
                />
                if *garment_state != ImageState::Failed {
                    { image_at(&config.garment_image, garment, "garment", garment_onload, garment_onerror) }
                }
                if *motif_state == ImageState::Failed {
                    <rect
                        class="motif-placeholder"
                        x={motif.x.to_string()}
                        y={motif.y.to_string()}
                        width={motif.width.to_string()}
                        height={motif.height.to_string()}
                    />
                } else {
                    { image_at(&config.motif_image, motif, "motif", motif_onload, motif_onerror) }
                }
                if show_handles {
                    <HandleOverlay rect={motif} hovered={designer.hovered_handle()} />
                }
            </svg>
        </div>
    }
}
