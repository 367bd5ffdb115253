//! View rendering for the application form: the school selector, the personal
//! / contact / address sections, the document upload grid and the submit
//! button. Pure rendering; every event is forwarded as a `Msg` via `link`.

use common::model::document::{DocumentKind, DocumentSide};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::upload::FileUploadComponent;

use super::messages::Msg;
use super::state::{ApplicationFormComponent, Field};

const BLOOD_GROUPS: [&str; 9] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-", "Unknown"];

pub fn view(component: &ApplicationFormComponent, ctx: &Context<ApplicationFormComponent>) -> Html {
    let link = ctx.link();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="application-page">
            <h1 class="application-title">{"DRIVING LICENSE APPLICATION FORM"}</h1>
            <form {onsubmit} class="application-form">
                { school_selector(component, link) }
                { personal_section(component, link) }
                { contact_section(component, link) }
                { address_section(component, link) }
                { documents_section(component, link) }
                <div class="submit-row">
                    <button type="submit" disabled={component.submitting}>
                        { if component.submitting { "Submitting..." } else { "Submit Application" } }
                    </button>
                </div>
            </form>
        </div>
    }
}

fn school_selector(component: &ApplicationFormComponent, link: &Scope<ApplicationFormComponent>) -> Html {
    let placeholder = if component.loading_schools {
        "Loading driving schools..."
    } else {
        "Select driving school"
    };
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Input(Field::InstitutionCode, select.value())
    });

    html! {
        <div class="form-field">
            <label>{"Driving School *"}</label>
            <select {onchange} required={true}>
                <option value="" disabled={true} selected={component.form.institution_code.is_empty()}>
                    { placeholder }
                </option>
                {
                    for component.schools.iter().map(|school| {
                        html! {
                            <option
                                value={school.code.clone()}
                                selected={component.form.institution_code == school.code}
                            >
                                { format!("{} \u{2013} {}", school.name, school.place) }
                            </option>
                        }
                    })
                }
            </select>
        </div>
    }
}

fn personal_section(component: &ApplicationFormComponent, link: &Scope<ApplicationFormComponent>) -> Html {
    let form = &component.form;
    html! {
        <>
            <div class="form-grid two">
                { labeled("Name *", text_input(link, Field::Name, &form.name, "text", "")) }
                { labeled("Father / Husband Name *", text_input(link, Field::FatherHusbandName, &form.father_husband_name, "text", "")) }
            </div>
            <div class="form-grid three">
                { labeled("Date of Birth *", text_input(link, Field::DateOfBirth, &form.date_of_birth, "date", "")) }
                { labeled("Age", text_input(link, Field::Age, &form.age, "number", "Age")) }
                { labeled("Place of Birth", text_input(link, Field::PlaceOfBirth, &form.place_of_birth, "text", "Place of Birth")) }
            </div>
            <div class="form-grid three">
                { labeled("Class *", select_input(link, Field::Class, &form.class, "Class", &["M/C", "LMV", "M/C,LMV"])) }
                { labeled("Blood Group", select_input(link, Field::BloodGroup, &form.blood_group, "Blood Group", &BLOOD_GROUPS)) }
                { labeled("Gender *", select_input(link, Field::Gender, &form.gender, "Gender", &["Male", "Female", "Other"])) }
            </div>
            <div class="form-grid two">
                { labeled("Qualification", text_input(link, Field::Qualification, &form.qualification, "text", "Qualification")) }
                { labeled("Identification Mark 1", text_input(link, Field::IdentificationMark1, &form.identification_mark1, "text", "Identification Mark")) }
            </div>
            <div class="form-grid two">
                { labeled("Identification Mark 2", text_input(link, Field::IdentificationMark2, &form.identification_mark2, "text", "Identification Mark")) }
            </div>
        </>
    }
}

fn contact_section(component: &ApplicationFormComponent, link: &Scope<ApplicationFormComponent>) -> Html {
    let form = &component.form;
    html! {
        <>
            <div class="form-grid two">
                { labeled("Mobile *", text_input(link, Field::ApplicantMobile, &form.applicant_mobile, "text", "Mobile")) }
                { labeled("Emergency Mobile", text_input(link, Field::EmergencyMobile, &form.emergency_mobile, "text", "Emergency Mobile")) }
            </div>
            <div class="form-grid two">
                { labeled("Aadhar Number *", text_input(link, Field::AadharNo, &form.aadhar_no, "text", "Aadhar Number")) }
                { labeled("Email", text_input(link, Field::EmailId, &form.email_id, "email", "Email")) }
            </div>
        </>
    }
}

fn address_section(component: &ApplicationFormComponent, link: &Scope<ApplicationFormComponent>) -> Html {
    let form = &component.form;
    html! {
        <div class="address-section">
            <h3>{"Address"}</h3>
            <div class="form-grid two">
                { text_input(link, Field::House, &form.house, "text", "House/Building") }
                { text_input(link, Field::Place, &form.place, "text", "Place") }
                { text_input(link, Field::Village, &form.village, "text", "Village") }
                { text_input(link, Field::Taluk, &form.taluk, "text", "Taluk") }
                { text_input(link, Field::PostOffice, &form.post_office, "text", "Post Office") }
                { text_input(link, Field::PinCode, &form.pin_code, "text", "PIN Code") }
                { text_input(link, Field::District, &form.district, "text", "District") }
            </div>
        </div>
    }
}

fn documents_section(component: &ApplicationFormComponent, link: &Scope<ApplicationFormComponent>) -> Html {
    let form = &component.form;
    // A back side only makes sense once the front is uploaded and is an
    // image; a PDF front already carries both sides.
    let show_license_back =
        !form.license_url.is_empty() && form.license_file_type.starts_with("image/");
    let show_aadhar_back =
        !form.aadhar_url.is_empty() && form.aadhar_file_type.starts_with("image/");

    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetHasLicense(input.checked())
    });

    html! {
        <div class="documents-section">
            <label class="section-label">{"Documents *"}</label>
            <div class="has-license-row">
                <input type="checkbox" checked={form.has_license} {onchange} />
                <span>{"Already has license"}</span>
            </div>

            <h3>{"Personal Information"}</h3>
            <div class="form-grid two">
                <FileUploadComponent
                    kind={DocumentKind::Signature}
                    institution_code={form.institution_code.clone()}
                    current_url={form.signature_url.clone()}
                    on_complete={document_callback(link, DocumentKind::Signature, None)}
                />
                <FileUploadComponent
                    kind={DocumentKind::Photo}
                    institution_code={form.institution_code.clone()}
                    current_url={form.photo_url.clone()}
                    on_complete={document_callback(link, DocumentKind::Photo, None)}
                />
            </div>

            <h3>{"Identity Documents"}</h3>
            {
                if form.has_license {
                    html! {
                        <div class="document-pair">
                            <div class="form-grid two">
                                <FileUploadComponent
                                    kind={DocumentKind::License}
                                    side={Some(DocumentSide::Front)}
                                    institution_code={form.institution_code.clone()}
                                    current_url={form.license_url.clone()}
                                    on_complete={document_callback(link, DocumentKind::License, Some(DocumentSide::Front))}
                                />
                                {
                                    if show_license_back {
                                        html! {
                                            <FileUploadComponent
                                                kind={DocumentKind::License}
                                                side={Some(DocumentSide::Back)}
                                                institution_code={form.institution_code.clone()}
                                                current_url={form.license_back_url.clone()}
                                                on_complete={document_callback(link, DocumentKind::License, Some(DocumentSide::Back))}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            { pair_note(show_license_back, &form.license_url) }
                        </div>
                    }
                } else {
                    html! {
                        <div class="form-grid two">
                            <FileUploadComponent
                                kind={DocumentKind::Sslc}
                                institution_code={form.institution_code.clone()}
                                current_url={form.sslc_url.clone()}
                                on_complete={document_callback(link, DocumentKind::Sslc, None)}
                            />
                        </div>
                    }
                }
            }

            <div class="document-pair">
                <div class="form-grid two">
                    <FileUploadComponent
                        kind={DocumentKind::Aadhar}
                        side={Some(DocumentSide::Front)}
                        institution_code={form.institution_code.clone()}
                        current_url={form.aadhar_url.clone()}
                        on_complete={document_callback(link, DocumentKind::Aadhar, Some(DocumentSide::Front))}
                    />
                    {
                        if show_aadhar_back {
                            html! {
                                <FileUploadComponent
                                    kind={DocumentKind::Aadhar}
                                    side={Some(DocumentSide::Back)}
                                    institution_code={form.institution_code.clone()}
                                    current_url={form.aadhar_back_url.clone()}
                                    on_complete={document_callback(link, DocumentKind::Aadhar, Some(DocumentSide::Back))}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { pair_note(show_aadhar_back, &form.aadhar_url) }
            </div>
        </div>
    }
}

fn pair_note(show_back: bool, front_url: &str) -> Html {
    if show_back {
        html! { <p class="pair-note">{"Upload both front and back sides as separate images."}</p> }
    } else if !front_url.is_empty() {
        html! { <p class="pair-note">{"PDF uploaded. Back side upload is not required."}</p> }
    } else {
        html! {}
    }
}

fn document_callback(
    link: &Scope<ApplicationFormComponent>,
    kind: DocumentKind,
    side: Option<DocumentSide>,
) -> Callback<(String, Option<String>)> {
    link.callback(move |(url, mime_type): (String, Option<String>)| Msg::DocumentChanged {
        kind,
        side,
        url,
        mime_type,
    })
}

fn labeled(label: &str, inner: Html) -> Html {
    html! {
        <div class="form-field">
            <label>{label}</label>
            { inner }
        </div>
    }
}

fn text_input(
    link: &Scope<ApplicationFormComponent>,
    field: Field,
    value: &str,
    input_type: &str,
    placeholder: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    });
    html! {
        <input
            type={input_type.to_string()}
            placeholder={placeholder.to_string()}
            value={value.to_string()}
            {oninput}
        />
    }
}

fn select_input(
    link: &Scope<ApplicationFormComponent>,
    field: Field,
    value: &str,
    placeholder: &str,
    options: &[&str],
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Input(field, select.value())
    });
    html! {
        <select {onchange}>
            <option value="" disabled={true} selected={value.is_empty()}>{placeholder}</option>
            {
                for options.iter().map(|option| {
                    html! {
                        <option value={option.to_string()} selected={value == *option}>
                            { *option }
                        </option>
                    }
                })
            }
        </select>
    }
}
