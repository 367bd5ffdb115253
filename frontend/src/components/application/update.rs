//! Update function for the application form, Elm style: mutate the state for
//! a message and return whether the view should re-render.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::{ApplicationFormComponent, FormFields};

pub fn update(
    component: &mut ApplicationFormComponent,
    ctx: &Context<ApplicationFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::SetHasLicense(has_license) => {
            component.form.has_license = has_license;
            true
        }
        Msg::SchoolsLoaded(schools) => {
            component.schools = schools;
            component.loading_schools = false;
            true
        }
        Msg::SchoolsFailed => {
            // The selector stays empty; the applicant can still read the form.
            component.loading_schools = false;
            true
        }
        Msg::DocumentChanged {
            kind,
            side,
            url,
            mime_type,
        } => {
            component.form.set_document(kind, side, url, mime_type);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let application = component.form.to_application();
            if let Err(message) = application.validate_for_submission() {
                show_toast(&message);
                return false;
            }

            component.submitting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SubmitFinished(
                    api::submit_application(&application).await,
                ));
            });
            true
        }
        Msg::SubmitFinished(Ok(())) => {
            component.submitting = false;
            component.form = FormFields::default();
            show_toast("Application submitted successfully");
            true
        }
        Msg::SubmitFinished(Err(message)) => {
            component.submitting = false;
            show_toast(&format!("Submission failed: {}", message));
            true
        }
    }
}
