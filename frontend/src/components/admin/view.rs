//! View rendering for the admin page: the password gate, the add-school form
//! with its success/error banners, and the registered-schools list.

use common::model::school::DrivingSchool;
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AdminComponent, AdminField};

pub fn view(component: &AdminComponent, ctx: &Context<AdminComponent>) -> Html {
    let link = ctx.link();
    if !component.auth {
        login_view(component, link)
    } else {
        dashboard_view(component, link)
    }
}

fn login_view(component: &AdminComponent, link: &Scope<AdminComponent>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPassword(input.value())
    });
    let onkeydown = link.batch_callback(|e: KeyboardEvent| {
        (e.key() == "Enter").then_some(Msg::Login)
    });

    html! {
        <div class="admin-login">
            <h1>{"Admin Access"}</h1>
            <p>{"Enter your password to continue"}</p>
            <input
                type="password"
                placeholder="Admin password"
                value={component.password.clone()}
                {oninput}
                {onkeydown}
            />
            <button onclick={link.callback(|_| Msg::Login)}>{"Login"}</button>
        </div>
    }
}

fn dashboard_view(component: &AdminComponent, link: &Scope<AdminComponent>) -> Html {
    html! {
        <div class="admin-page">
            <div class="admin-header">
                <div>
                    <h1>{"Driving Schools"}</h1>
                    <p>{"Manage your driving school database"}</p>
                </div>
                <button onclick={link.callback(|_| Msg::Logout)}>{"Logout"}</button>
            </div>
            { add_school_form(component, link) }
            { schools_list(component) }
        </div>
    }
}

fn add_school_form(component: &AdminComponent, link: &Scope<AdminComponent>) -> Html {
    let form = &component.form;
    html! {
        <div class="admin-card">
            <h2>{"Add New School"}</h2>

            {
                if !component.error.is_empty() {
                    html! { <div class="alert alert-error">{component.error.clone()}</div> }
                } else {
                    html! {}
                }
            }
            {
                if !component.success.is_empty() {
                    html! { <div class="alert alert-success">{component.success.clone()}</div> }
                } else {
                    html! {}
                }
            }

            <div class="form-grid two">
                { labeled_input(link, AdminField::Code, "School Code", "e.g., ABC123", &form.code) }
                { labeled_input(link, AdminField::Name, "School Name", "e.g., Premier Driving Academy", &form.name) }
                { labeled_input(link, AdminField::Email, "Email", "e.g., contact@school.com", &form.email) }
                { labeled_input(link, AdminField::Place, "Place", "e.g., Kochi, Kerala", &form.place) }
            </div>
            { labeled_input(link, AdminField::DriveFolderId, "Drive Folder ID", "e.g., 1a2b3c4d5e6f7g8h9i0j", &form.drive_folder_id) }

            <button
                class="primary"
                disabled={component.saving}
                onclick={link.callback(|_| Msg::AddSchool)}
            >
                { if component.saving { "Adding..." } else { "Add School" } }
            </button>
        </div>
    }
}

fn schools_list(component: &AdminComponent) -> Html {
    html! {
        <div class="admin-card">
            <h2>{"All Schools"}</h2>
            <p class="card-subtitle">{format!("{} schools registered", component.schools.len())}</p>

            {
                if component.loading {
                    html! { <p class="loading">{"Loading schools..."}</p> }
                } else if component.schools.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No schools added yet"}</p>
                            <p class="hint">{"Add your first driving school above"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="school-grid">
                            { for component.schools.iter().map(school_card) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn school_card(school: &DrivingSchool) -> Html {
    html! {
        <div class="school-card" key={school.code.clone()}>
            <span class="school-code">{school.code.clone()}</span>
            <h3>{school.name.clone()}</h3>
            <p>{school.email.clone()}</p>
            <p>{school.place.clone()}</p>
        </div>
    }
}

fn labeled_input(
    link: &Scope<AdminComponent>,
    field: AdminField,
    label: &str,
    placeholder: &str,
    value: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    });
    html! {
        <div class="form-field">
            <label>{label}</label>
            <input
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </div>
    }
}
