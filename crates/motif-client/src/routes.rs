//! Application routes.

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Sweater designer.
    #[at("/")]
    Designer,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
