//! Update function for the admin page.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::AdminComponent;

/// The gate value is compiled into the public bundle, like every other piece
/// of this page. It keeps casual visitors out; it is not a security boundary.
fn admin_password() -> Option<&'static str> {
    option_env!("PUBLIC_ADMIN_PASSWORD")
}

pub fn update(component: &mut AdminComponent, ctx: &Context<AdminComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetPassword(value) => {
            component.password = value;
            true
        }
        Msg::Login => {
            component.apply_login(admin_password());
            if component.auth {
                component.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::SchoolsLoaded(api::fetch_schools().await));
                });
            }
            true
        }
        Msg::Logout => {
            component.auth = false;
            component.password.clear();
            true
        }
        Msg::Input(field, value) => {
            component.set_field(field, value);
            true
        }
        Msg::AddSchool => {
            if component.saving {
                return false;
            }
            component.begin_add();
            let registration = component.form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::AddFinished(api::add_school(&registration).await));
            });
            true
        }
        Msg::AddFinished(result) => {
            component.finish_add(result);
            true
        }
        Msg::SchoolsLoaded(result) => {
            if let Err(e) = &result {
                gloo_console::error!(format!("Failed to load driving schools: {}", e));
            }
            component.finish_schools(result);
            true
        }
    }
}
