//! Sweater designer page.

use yew::prelude::*;

use crate::components::{DesignerStage, Layout};
use crate::hooks::use_designer_config;

#[function_component(DesignerPage)]
pub fn designer_page() -> Html {
    let config = use_designer_config();

    html! {
        <Layout>
            <section class="page designer-page">
                <h2 class="designer-title">{ "Sweater Designer" }</h2>
                <DesignerStage config={config} />
            </section>
        </Layout>
    }
}
