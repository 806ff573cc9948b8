//! Lock/unlock toggle shown over the stage.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct LockButtonProps {
    pub locked: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(LockButton)]
pub fn lock_button(props: &LockButtonProps) -> Html {
    let (icon, title) = if props.locked {
        (IconData::LUCIDE_LOCK, "Unlock Motif")
    } else {
        (IconData::LUCIDE_UNLOCK, "Lock Motif")
    };

    html! {
        <button
            class={classes!("lock-btn", props.locked.then_some("locked"))}
            onclick={props.onclick.clone()}
            title={title}
            aria-pressed={props.locked.to_string()}
        >
            <Icon data={icon} width="16" height="16" />
        </button>
    }
}
