use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::env_variable_utils::MAX_UPLOAD_BYTES;
use crate::notify::Notice;
use crate::upload::api::post_upload;
use crate::upload::selection::check_file;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    /// Fired with the server-assigned id after a successful upload.
    pub on_uploaded: Callback<String>,
    pub on_notice: Callback<Notice>,
}

#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let selected = use_state(|| None::<web_sys::File>);
    let uploading = use_state(|| false);
    let last_uploaded_id = use_state(|| None::<String>);

    let on_file_change = {
        let selected = selected.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                match check_file(&file.name(), file.size() as u64, *MAX_UPLOAD_BYTES) {
                    Ok(()) => selected.set(Some(file)),
                    // Rejection keeps whatever was selected before
                    Err(e) => on_notice.emit(Notice::warn(e.to_string())),
                }
            }
        })
    };

    let on_upload = {
        let selected = selected.clone();
        let uploading = uploading.clone();
        let last_uploaded_id = last_uploaded_id.clone();
        let on_uploaded = props.on_uploaded.clone();
        let on_notice = props.on_notice.clone();

        Callback::from(move |_: MouseEvent| {
            // One upload at a time
            if *uploading {
                return;
            }
            let file = match &*selected {
                Some(file) => file.clone(),
                None => return,
            };

            let uploading = uploading.clone();
            let last_uploaded_id = last_uploaded_id.clone();
            let on_uploaded = on_uploaded.clone();
            let on_notice = on_notice.clone();

            uploading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match post_upload(&file).await {
                    Ok(id) => {
                        last_uploaded_id.set(Some(id.clone()));
                        on_uploaded.emit(id);
                    }
                    Err(e) => {
                        log::error!("Upload failed: {}", e);
                        on_notice.emit(Notice::error(e));
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="bg-white p-6 rounded-lg shadow-lg mb-6 text-center">
            {
                if *uploading {
                    html! { <div class="spinner mx-auto mb-4" /> }
                } else {
                    html! {}
                }
            }
            <label for="file-input" class="block text-gray-700 font-semibold mb-2">
                {"Choose a video"}
            </label>
            <input
                id="file-input"
                type="file"
                accept=".mp4,.avi"
                class="mb-4"
                onchange={on_file_change}
                disabled={*uploading}
            />
            {
                if let Some(file) = &*selected {
                    html! {
                        <p class="text-sm text-gray-500 mb-2">
                            {format!("Selected: {}", file.name())}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <button
                onclick={on_upload}
                disabled={*uploading || selected.is_none()}
                class="bg-blue-600 text-white px-6 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
            >
                { if *uploading { "Uploading..." } else { "Upload" } }
            </button>
            {
                if let Some(id) = &*last_uploaded_id {
                    html! {
                        <p class="text-sm text-green-600 mt-2">
                            {format!("Last upload: {}", id)}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
