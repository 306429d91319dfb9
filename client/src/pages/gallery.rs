//! Gallery page: upload form plus the signed-in user's image grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns an `ImagesHook` for its lifetime. The list is fetched once on mount;
//! uploads, deletes, and visibility toggles reconcile it in place.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::html;
use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::image_card::ImageCard;
use crate::config::ApiConfig;
use crate::hooks::images::{ImagesHook, use_images};
use crate::net::api::{SelectedFile, UploadForm};
use crate::net::types::ImageUpdate;

/// Transient upload form values.
#[derive(Clone, Debug, Default)]
pub struct UploadDraft {
    pub file: Option<SelectedFile>,
    pub description: String,
    pub is_public: bool,
}

impl UploadDraft {
    /// The multipart payload, or `None` while no file is chosen.
    pub fn submission(&self) -> Option<UploadForm> {
        let file = self.file.clone()?;
        Some(UploadForm { file, description: self.description.trim().to_owned(), is_public: self.is_public })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file.as_ref().map(SelectedFile::name)
    }
}

/// Upload the drafted file and reset the draft on success. Without a file
/// nothing is sent and `false` is returned.
pub async fn submit_upload(hook: ImagesHook, draft: RwSignal<UploadDraft, LocalStorage>) -> bool {
    let Some(form) = draft.with_untracked(UploadDraft::submission) else {
        return false;
    };
    if hook.upload_image(form).await.is_err() {
        return false;
    }
    let _ = draft.try_update(UploadDraft::reset);
    true
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let hook = use_images();
    let state = hook.state;
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());
    let draft = RwSignal::new_local(UploadDraft::default());
    let file_input = NodeRef::<html::Input>::new();
    let pending_delete = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(hook.fetch_images());
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let file = input.files().and_then(|files| files.get(0));
            draft.update(|d| d.file = file.map(SelectedFile::from_file));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            if submit_upload(hook, draft).await {
                #[cfg(feature = "hydrate")]
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    let on_delete = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let on_toggle_public = Callback::new(move |(id, is_public): (String, bool)| {
        let update = ImageUpdate { is_public: Some(is_public), ..ImageUpdate::default() };
        leptos::task::spawn_local(async move {
            let _ = hook.update_image(id, update).await;
        });
    });
    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            let _ = hook.delete_image(id).await;
        });
    });
    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));

    let error = move || state.with(|s| s.error.clone());
    let waiting = move || state.with(|s| s.loading() && s.items.is_empty());

    view! {
        <div class="page gallery-page">
            <Show
                when=move || error().is_none()
                fallback=move || {
                    view! {
                        <div class="page-error">
                            <p>{move || format!("Error: {}", error().unwrap_or_default())}</p>
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| leptos::task::spawn_local(hook.fetch_images())
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                }
            >
                <h1>"Image Gallery"</h1>
                <form class="upload-form" on:submit=on_upload>
                    <input
                        class="upload-form__file"
                        type="file"
                        accept="image/*"
                        node_ref=file_input
                        on:change=on_file_change
                    />
                    <input
                        class="upload-form__description"
                        type="text"
                        placeholder="Description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.description = value);
                        }
                    />
                    <label class="upload-form__public">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.is_public)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.is_public = checked);
                            }
                        />
                        "Public"
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || draft.with(|d| d.file_name().is_none()) || state.with(|s| s.loading())
                    >
                        "Upload"
                    </button>
                </form>

                <Show
                    when=move || !waiting()
                    fallback=|| view! { <div class="gallery-page__loading">"Loading..."</div> }
                >
                    <Show
                        when=move || state.with(|s| !s.items.is_empty())
                        fallback=|| view! { <div class="gallery-page__empty">"No images yet."</div> }
                    >
                        <div class="gallery-grid">
                            <For
                                each=move || state.get().items
                                key=|image| (image.id.clone(), image.is_public, image.description.clone())
                                children=move |image| {
                                    let src = config.with_value(|c| c.image_url(&image.filename));
                                    view! {
                                        <ImageCard
                                            image=image
                                            src=src
                                            on_delete=on_delete
                                            on_toggle_public=on_toggle_public
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Image"
                    message="Are you sure you want to delete this image? This cannot be undone."
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
