//! Public driving-license application form: root module wiring the Yew
//! `Component` implementation with submodules for state, update logic and
//! view rendering.
//!
//! On first render the school directory is loaded, preferring the
//! session-storage cache over a network fetch so the list is not refetched on
//! every page view within one browsing session. A fetch failure leaves the
//! selector empty; the rest of the form keeps working.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::{api, helpers};

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{ApplicationFormComponent, Field, FormFields};

impl Component for ApplicationFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ApplicationFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(cached) = helpers::cached_schools() {
                ctx.link().send_message(Msg::SchoolsLoaded(cached));
                return;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_schools().await {
                    Ok(schools) => {
                        helpers::cache_schools(&schools);
                        link.send_message(Msg::SchoolsLoaded(schools));
                    }
                    Err(e) => {
                        gloo_console::error!(format!("Failed to load driving schools: {}", e));
                        link.send_message(Msg::SchoolsFailed);
                    }
                }
            });
        }
    }
}
