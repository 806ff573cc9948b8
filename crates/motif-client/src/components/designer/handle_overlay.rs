//! Selection outline and resize handles drawn around the motif.

use motif_core::{HANDLE_SIZE, Rect, ResizeHandle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HandleOverlayProps {
    pub rect: Rect,
    #[prop_or_default]
    pub hovered: Option<ResizeHandle>,
}

#[function_component(HandleOverlay)]
pub fn handle_overlay(props: &HandleOverlayProps) -> Html {
    let r = props.rect;
    let half = HANDLE_SIZE / 2.0;

    html! {
        <g class="handle-overlay">
            <rect
                class="selection-outline"
                x={r.x.to_string()}
                y={r.y.to_string()}
                width={r.width.to_string()}
                height={r.height.to_string()}
            />
            { for ResizeHandle::ALL.iter().map(|handle| {
                let a = handle.anchor(&r);
                let hovered = props.hovered == Some(*handle);
                html! {
                    <rect
                        class={classes!("resize-handle", hovered.then_some("hovered"))}
                        x={(a.x - half).to_string()}
                        y={(a.y - half).to_string()}
                        width={HANDLE_SIZE.to_string()}
                        height={HANDLE_SIZE.to_string()}
                        style={format!("cursor: {}", handle.cursor())}
                    />
                }
            }) }
        </g>
    }
}
