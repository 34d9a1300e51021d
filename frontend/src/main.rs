mod env_variable_utils;
mod models;
mod notify;
mod upload;
mod utils;
mod videos;

use web_sys::console;
use yew::prelude::*;

use crate::env_variable_utils::{get_app_name, is_debug_mode, BACKEND_URL};
use crate::models::Video;
use crate::notify::{Notice, NoticeList};
use crate::upload::components::UploadForm;
use crate::videos::api::fetch_videos;
use crate::videos::components::VideoList;
use crate::videos::playback::{apply, PlaybackEvent, PlaybackState};
use crate::videos::player::{run_commands, DomPlayers};

#[function_component(App)]
pub fn app() -> Html {
    let videos = use_state(Vec::<Video>::new);
    let notices = use_state(Vec::<Notice>::new);
    let playback = use_state(PlaybackState::default);
    let players = use_state(DomPlayers::default);

    let push_notice = {
        let notices = notices.clone();
        Callback::from(move |notice: Notice| {
            let mut updated = (*notices).clone();
            updated.push(notice);
            notices.set(updated);
        })
    };

    let on_dismiss = {
        let notices = notices.clone();
        Callback::from(move |index: usize| {
            let mut updated = (*notices).clone();
            if index < updated.len() {
                updated.remove(index);
            }
            notices.set(updated);
        })
    };

    // Replaces the catalog wholesale; on failure the stale list stays up
    let refresh_catalog = {
        let videos = videos.clone();
        let push_notice = push_notice.clone();

        move || {
            let videos = videos.clone();
            let push_notice = push_notice.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos().await {
                    Ok(list) => videos.set(list),
                    Err(e) => {
                        log::error!("Failed to load videos: {}", e);
                        push_notice.emit(Notice::error(format!("Failed to load videos: {}", e)));
                    }
                }
            });
        }
    };

    // Load the catalog once on mount
    {
        let refresh_catalog = refresh_catalog.clone();
        use_effect_with((), move |_| {
            refresh_catalog();
            || ()
        });
    }

    let on_uploaded = {
        let refresh_catalog = refresh_catalog.clone();
        Callback::from(move |_id: String| {
            refresh_catalog();
        })
    };

    let on_playback_event = {
        let playback = playback.clone();
        let players = players.clone();
        Callback::from(move |event: PlaybackEvent| {
            let (next, commands) = apply(&playback, &event);
            run_commands(&commands, &*players);
            playback.set(next);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto">
                <h1 class="text-3xl font-bold text-center text-white mb-6">
                    { get_app_name() }
                </h1>
                <NoticeList notices={(*notices).clone()} on_dismiss={on_dismiss} />
                <UploadForm on_uploaded={on_uploaded} on_notice={push_notice.clone()} />
                <h2 class="text-2xl font-semibold text-center text-white mb-4">{"All Videos"}</h2>
                <VideoList
                    videos={(*videos).clone()}
                    playback={(*playback).clone()}
                    players={(*players).clone()}
                    on_event={on_playback_event}
                />
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(
        &format!(
            "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
            get_app_name(),
            &*BACKEND_URL,
            is_debug_mode()
        )
        .into(),
    );
}
