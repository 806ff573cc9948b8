//! Page layout with the navigation bar on top.

use crate::components::Navbar;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                { props.children.clone() }
            </main>
        </div>
    }
}
