//! Card for one image in a gallery grid.

use leptos::prelude::*;

use crate::net::types::Image;
use crate::util::format::{caption, display_date};

/// Thumbnail, caption, date, and optional owner actions.
///
/// `on_delete` receives the image id; `on_toggle_public` receives the id and
/// the requested new visibility. Without callbacks the card is read-only.
#[component]
pub fn ImageCard(
    image: Image,
    src: String,
    #[prop(optional)] compact: bool,
    #[prop(optional)] on_delete: Option<Callback<String>>,
    #[prop(optional)] on_toggle_public: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    let alt = caption(image.description.as_deref()).to_owned();
    let description = image.description.clone().unwrap_or_default();
    let date = display_date(&image.created_at);
    let is_public = image.is_public;
    let delete_id = image.id.clone();
    let toggle_id = image.id.clone();

    view! {
        <article class="image-card" class:image-card--compact=compact>
            <img class="image-card__img" src=src alt=alt loading="lazy"/>
            <div class="image-card__body">
                <p class="image-card__description">{description}</p>
                <p class="image-card__meta">
                    <span>{date}</span>
                    <span class="image-card__visibility">{if is_public { "Public" } else { "Private" }}</span>
                </p>
                {on_toggle_public
                    .map(|cb| {
                        let id = toggle_id.clone();
                        view! {
                            <button
                                class="btn image-card__toggle"
                                type="button"
                                on:click=move |_| cb.run((id.clone(), !is_public))
                            >
                                {if is_public { "Make private" } else { "Make public" }}
                            </button>
                        }
                    })}
                {on_delete
                    .map(|cb| {
                        let id = delete_id.clone();
                        view! {
                            <button
                                class="btn btn--danger image-card__delete"
                                type="button"
                                on:click=move |_| cb.run(id.clone())
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </div>
        </article>
    }
}
