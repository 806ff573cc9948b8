//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DesignerPage, NotFoundPage};
use crate::routes::Route;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Designer => html! { <DesignerPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
