use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::models::Video;
use crate::utils::format_timestamp;
use crate::videos::playback::{PlaybackEvent, PlaybackState};
use crate::videos::player::{DomPlayers, PlayerControl};

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<Video>,
    pub playback: PlaybackState,
    pub players: DomPlayers,
    pub on_event: Callback<PlaybackEvent>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <div class="flex justify-center mt-8">
                <p class="text-center text-gray-300">
                    {"No videos yet. Upload one to get started."}
                </p>
            </div>
        };
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            { for props.videos.iter().map(|video| {
                let playing = props.playback.playing.as_deref() == Some(video.id.as_str());
                let resume_at = props.playback.last_position.get(&video.id).copied();
                html! {
                    <VideoCard
                        key={video.id.clone()}
                        video={video.clone()}
                        playing={playing}
                        resume_at={resume_at}
                        players={props.players.clone()}
                        on_event={props.on_event.clone()}
                    />
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub playing: bool,
    pub resume_at: Option<f64>,
    pub players: DomPlayers,
    pub on_event: Callback<PlaybackEvent>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let node_ref = props.players.node_ref(&props.video.id);

    let on_play = {
        let id = props.video.id.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: Event| {
            on_event.emit(PlaybackEvent::Play { id: id.clone() });
        })
    };

    let on_pause = {
        let id = props.video.id.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |e: Event| {
            let position = e.target_unchecked_into::<HtmlVideoElement>().current_time();
            on_event.emit(PlaybackEvent::Pause {
                id: id.clone(),
                position,
            });
        })
    };

    let on_seeking = {
        let id = props.video.id.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: Event| {
            on_event.emit(PlaybackEvent::Seeking { id: id.clone() });
        })
    };

    let on_toggle = {
        let id = props.video.id.clone();
        let players = props.players.clone();
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| {
            let position = players.current_time(&id);
            on_event.emit(PlaybackEvent::Toggle {
                id: id.clone(),
                position,
            });
        })
    };

    let card_class = if props.playing {
        "p-4 bg-white rounded-lg shadow ring-2 ring-blue-500"
    } else {
        "p-4 bg-white rounded-lg shadow"
    };

    let resume_label = if props.playing {
        None
    } else {
        props
            .resume_at
            .map(|seconds| format!("Paused at {}", format_timestamp(seconds)))
    };

    html! {
        <div class={card_class}>
            <div class="cursor-pointer mb-2" onclick={on_toggle}>
                <p class="text-sm text-gray-500">{format!("Video ID: {}", props.video.id)}</p>
                <p class="font-semibold text-gray-800">{format!("Video Name: {}", props.video.name)}</p>
            </div>
            <video
                ref={node_ref}
                src={props.video.url.clone()}
                width="320"
                height="240"
                controls={true}
                onplay={on_play}
                onpause={on_pause}
                onseeking={on_seeking}
            />
            {
                if let Some(label) = &resume_label {
                    html! { <p class="text-xs text-gray-400 mt-1">{ label.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
