//! Top navigation bar with a collapsible mobile menu.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

const NAV_LINKS: [&str; 3] = ["Home", "Library", "Create Motive"];
const LOGIN_ITEMS: [&str; 2] = ["Item 1", "Item 2"];

/// Mobile menu visibility. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Login dropdown visibility. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Collapsed,
    Expanded,
}

impl DropdownState {
    pub fn toggled(self) -> Self {
        match self {
            DropdownState::Collapsed => DropdownState::Expanded,
            DropdownState::Expanded => DropdownState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, DropdownState::Expanded)
    }
}

#[derive(Properties, PartialEq)]
struct LoginDropdownProps {
    state: DropdownState,
    ontoggle: Callback<MouseEvent>,
}

#[function_component(LoginDropdown)]
fn login_dropdown(props: &LoginDropdownProps) -> Html {
    html! {
        <div class={classes!("login-dropdown", props.state.is_expanded().then_some("open"))}>
            <button class="login-btn" onclick={props.ontoggle.clone()}>{ "Login" }</button>
            if props.state.is_expanded() {
                <ul class="dropdown-content">
                    { for LOGIN_ITEMS.iter().map(|item| html! { <li><a href="#">{ *item }</a></li> }) }
                </ul>
            }
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);
    let desktop_login = use_state(DropdownState::default);
    let mobile_login = use_state(DropdownState::default);

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let on_toggle_desktop_login = {
        let state = desktop_login.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggled()))
    };
    let on_toggle_mobile_login = {
        let state = mobile_login.clone();
        Callback::from(move |_: MouseEvent| state.set(state.toggled()))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|label| html! { <a href="#" class={class}>{ *label }</a> })
            .collect()
    };

    html! {
        <header class={classes!("navbar", menu.is_open().then_some("expanded"))}>
            <div class="navbar-background" />

            <div class="navbar-logo desktop-only">
                <img src="assets/logo.png" alt="Logo" />
            </div>

            <nav class="navbar-links desktop-only">
                { links("nav-link") }
                <LoginDropdown state={*desktop_login} ontoggle={on_toggle_desktop_login} />
            </nav>

            <div class="navbar-mobile-bar mobile-only">
                <button class="menu-toggle" onclick={on_toggle_menu} aria-label="Toggle Menu">
                    <Icon data={if menu.is_open() { IconData::LUCIDE_X } else { IconData::LUCIDE_MENU }} width="28" height="28" />
                </button>
            </div>

            if menu.is_open() {
                <div class="navbar-mobile-menu mobile-only">
                    <div class="navbar-logo">
                        <img src="assets/logo.png" alt="Logo" />
                    </div>
                    { links("mobile-link") }
                    <LoginDropdown state={*mobile_login} ontoggle={on_toggle_mobile_login} />
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn menu_toggles() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
    }

    #[wasm_bindgen_test]
    fn dropdown_toggles() {
        let dropdown = DropdownState::default();
        assert!(!dropdown.is_expanded());
        assert!(dropdown.toggled().is_expanded());
    }
}
