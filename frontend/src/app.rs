use yew::{html, Component, Context, Html};

use crate::components::admin::AdminComponent;
use crate::components::application::ApplicationFormComponent;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let path = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default();

        if path.starts_with("/admin") {
            html! { <AdminComponent /> }
        } else {
            html! { <ApplicationFormComponent /> }
        }
    }
}
