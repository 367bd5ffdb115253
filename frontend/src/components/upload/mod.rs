//! One file-upload slot of the application form.
//!
//! The widget owns the full upload pipeline for its slot: the advisory
//! size/type gate, reading the chosen file, base64-encoding it, posting it to
//! the proxy and applying the slot's delivery transformation to the returned
//! URL (images only). The parent stays the source of truth for the stored
//! URL; the widget reports `(url, mime type)` upward and keeps only its own
//! transient uploading/error state.

use base64::{engine::general_purpose, Engine as _};
use common::model::document::{transformed_url, DocumentKind, DocumentSide};
use common::requests::UploadRequest;
use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;

#[derive(Properties, PartialEq, Clone)]
pub struct FileUploadProps {
    pub kind: DocumentKind,
    #[prop_or_default]
    pub side: Option<DocumentSide>,
    pub institution_code: String,
    /// URL currently stored for this slot; empty means nothing uploaded yet.
    #[prop_or_default]
    pub current_url: String,
    /// `(url, mime type)`. An empty URL clears the slot.
    pub on_complete: Callback<(String, Option<String>)>,
}

pub enum Msg {
    OpenFileDialog,
    FileSelected(web_sys::File),
    Finished(Result<(String, String), String>),
    Remove,
}

pub struct FileUploadComponent {
    uploading: bool,
    error: Option<String>,
    file_input_ref: NodeRef,
}

impl Component for FileUploadComponent {
    type Message = Msg;
    type Properties = FileUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FileUploadComponent {
            uploading: false,
            error: None,
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileSelected(file) => {
                let props = ctx.props();
                if props.institution_code.is_empty() {
                    self.error = Some("Please select driving school first".to_string());
                    return true;
                }
                let mime_type = file.type_();
                if let Err(message) = props.kind.check_file(&mime_type, file.size() as u64) {
                    self.error = Some(message);
                    return true;
                }

                self.error = None;
                self.uploading = true;
                let kind = props.kind;
                let side = props.side;
                let institution_code = props.institution_code.clone();
                let file_name = file.name();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => {
                            let request = UploadRequest {
                                file: general_purpose::STANDARD.encode(&bytes),
                                file_name,
                                mime_type: mime_type.clone(),
                                kind,
                                side,
                                institution_code,
                            };
                            api::upload_file(&request).await.map(|url| {
                                let url = if mime_type.starts_with("image/") {
                                    transformed_url(&url, kind)
                                } else {
                                    url
                                };
                                (url, mime_type)
                            })
                        }
                        Err(e) => Err(e.to_string()),
                    };
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(Ok((url, mime_type))) => {
                self.uploading = false;
                self.error = None;
                ctx.props().on_complete.emit((url, Some(mime_type)));
                true
            }
            Msg::Finished(Err(message)) => {
                self.uploading = false;
                self.error = Some(message);
                true
            }
            Msg::Remove => {
                self.error = None;
                ctx.props().on_complete.emit((String::new(), None));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        let label = match props.side {
            Some(side) => format!("{} ({})", props.kind.label(), side.label()),
            None => props.kind.label().to_string(),
        };
        let input_id = format!(
            "{}-{}-upload",
            props.kind.as_str(),
            props.side.map(|s| s.as_str()).unwrap_or("single")
        );

        let body = if self.uploading {
            html! { <p class="upload-status">{"Uploading..."}</p> }
        } else if !props.current_url.is_empty() {
            html! {
                <div class="upload-done">
                    <p>{format!("{} uploaded", label)}</p>
                    <button type="button" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                        {"Replace"}
                    </button>
                    <button type="button" title="Remove" onclick={link.callback(|_| Msg::Remove)}>
                        {"\u{2715}"}
                    </button>
                </div>
            }
        } else {
            html! {
                <div class="upload-empty">
                    <p>{format!("Upload {}", label)}</p>
                    <p class="upload-hint">{props.kind.size_hint()}</p>
                    <button type="button" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                        {"Choose File"}
                    </button>
                </div>
            }
        };

        let onchange = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::FileSelected)
        });

        html! {
            <div class="upload-slot">
                <label for={input_id.clone()}>{label.clone()}</label>
                { body }
                <input
                    id={input_id}
                    ref={self.file_input_ref.clone()}
                    type="file"
                    accept={props.kind.accept()}
                    style="display: none;"
                    disabled={self.uploading}
                    {onchange}
                />
                {
                    if let Some(message) = &self.error {
                        html! { <p class="upload-error">{message.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
