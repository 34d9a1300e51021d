//! Playback coordination for the video list.
//!
//! At most one video plays at a time. Each video remembers the position it
//! was paused at and resumes from there, unless the resume follows a manual
//! scrub. Transitions are pure; side effects on the actual player elements
//! come out as [`PlayerCommand`]s for the caller to run.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaybackState {
    /// Id of the video currently playing, if any.
    pub playing: Option<String>,
    /// Last known pause position per video id, in seconds.
    pub last_position: HashMap<String, f64>,
    /// Set while the user is scrubbing; suppresses position restore on the
    /// next play so a manual seek is not overridden.
    pub user_seeking: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// The player element reported it started playing.
    Play { id: String },
    /// The player element reported a pause at `position` seconds.
    Pause { id: String, position: f64 },
    /// The user started scrubbing.
    Seeking { id: String },
    /// The list entry's own play/pause affordance was clicked. `position` is
    /// the active player's current time when known.
    Toggle { id: String, position: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play(String),
    Pause(String),
    SeekTo(String, f64),
}

/// Applies one event and returns the next state plus the commands to run
/// against the player elements.
pub fn apply(state: &PlaybackState, event: &PlaybackEvent) -> (PlaybackState, Vec<PlayerCommand>) {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match event {
        PlaybackEvent::Play { id } => {
            start_playing(&mut next, &mut commands, id, false);
        }
        PlaybackEvent::Pause { id, position } => {
            // A pause for a video that is no longer current is the echo of a
            // displacement pause; it must not clobber the remembered position.
            if next.playing.as_deref() == Some(id.as_str()) {
                next.last_position.insert(id.clone(), *position);
                next.playing = None;
            }
        }
        PlaybackEvent::Seeking { .. } => {
            next.user_seeking = true;
        }
        PlaybackEvent::Toggle { id, position } => {
            if next.playing.as_deref() == Some(id.as_str()) {
                // Clicking the active video again pauses it
                if let Some(position) = position {
                    next.last_position.insert(id.clone(), *position);
                }
                next.playing = None;
                commands.push(PlayerCommand::Pause(id.clone()));
            } else {
                start_playing(&mut next, &mut commands, id, true);
            }
        }
    }

    (next, commands)
}

fn start_playing(
    next: &mut PlaybackState,
    commands: &mut Vec<PlayerCommand>,
    id: &str,
    drive_player: bool,
) {
    // Idempotent for the video that is already current
    if next.playing.as_deref() == Some(id) {
        return;
    }

    if let Some(previous) = next.playing.take() {
        commands.push(PlayerCommand::Pause(previous));
    }

    if !next.user_seeking {
        if let Some(&remembered) = next.last_position.get(id) {
            commands.push(PlayerCommand::SeekTo(id.to_string(), remembered));
        }
    }
    next.user_seeking = false;
    next.playing = Some(id.to_string());

    if drive_player {
        commands.push(PlayerCommand::Play(id.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(id: &str) -> PlaybackEvent {
        PlaybackEvent::Play { id: id.to_string() }
    }

    fn pause(id: &str, position: f64) -> PlaybackEvent {
        PlaybackEvent::Pause {
            id: id.to_string(),
            position,
        }
    }

    fn seeking(id: &str) -> PlaybackEvent {
        PlaybackEvent::Seeking { id: id.to_string() }
    }

    fn toggle(id: &str, position: Option<f64>) -> PlaybackEvent {
        PlaybackEvent::Toggle {
            id: id.to_string(),
            position,
        }
    }

    fn run(events: &[PlaybackEvent]) -> PlaybackState {
        events.iter().fold(PlaybackState::default(), |state, event| {
            apply(&state, event).0
        })
    }

    #[test]
    fn play_starts_the_requested_video() {
        let (state, commands) = apply(&PlaybackState::default(), &play("a"));
        assert_eq!(state.playing.as_deref(), Some("a"));
        assert!(commands.is_empty());
    }

    #[test]
    fn play_is_idempotent_for_the_current_video() {
        let state = run(&[play("a")]);
        let (next, commands) = apply(&state, &play("a"));
        assert_eq!(next, state);
        assert!(commands.is_empty());
    }

    #[test]
    fn second_play_displaces_the_first() {
        let state = run(&[play("a")]);
        let (next, commands) = apply(&state, &play("b"));
        assert_eq!(next.playing.as_deref(), Some("b"));
        assert_eq!(commands, vec![PlayerCommand::Pause("a".to_string())]);
    }

    #[test]
    fn displacement_pause_echo_does_not_record_a_position() {
        let state = run(&[play("a"), play("b")]);
        let (next, commands) = apply(&state, &pause("a", 17.0));
        assert_eq!(next.playing.as_deref(), Some("b"));
        assert!(next.last_position.get("a").is_none());
        assert!(commands.is_empty());
    }

    #[test]
    fn pause_records_position_and_stops() {
        let state = run(&[play("a")]);
        let (next, _) = apply(&state, &pause("a", 42.0));
        assert_eq!(next.playing, None);
        assert_eq!(next.last_position.get("a"), Some(&42.0));
    }

    #[test]
    fn resume_restores_the_remembered_position() {
        let state = run(&[play("a"), pause("a", 42.0)]);
        let (next, commands) = apply(&state, &play("a"));
        assert_eq!(next.playing.as_deref(), Some("a"));
        assert_eq!(
            commands,
            vec![PlayerCommand::SeekTo("a".to_string(), 42.0)]
        );
    }

    #[test]
    fn seeking_suppresses_position_restore_once() {
        let state = run(&[play("a"), pause("a", 42.0), seeking("a")]);
        assert!(state.user_seeking);

        let (next, commands) = apply(&state, &play("a"));
        assert!(commands.is_empty(), "a manual scrub must not be overridden");
        assert!(!next.user_seeking, "the flag is consumed by the resume");
        // The remembered position survives for later resumes
        assert_eq!(next.last_position.get("a"), Some(&42.0));
    }

    #[test]
    fn selecting_another_video_mid_seek_keeps_its_start_position() {
        // "b" has a stale remembered position; scrubbing then playing it must
        // not jump back there.
        let state = run(&[
            play("b"),
            pause("b", 30.0),
            play("a"),
            seeking("b"),
        ]);
        let (next, commands) = apply(&state, &play("b"));
        assert_eq!(next.playing.as_deref(), Some("b"));
        assert_eq!(commands, vec![PlayerCommand::Pause("a".to_string())]);
    }

    #[test]
    fn seeking_does_not_change_play_state() {
        let state = run(&[play("a")]);
        let (next, commands) = apply(&state, &seeking("a"));
        assert_eq!(next.playing.as_deref(), Some("a"));
        assert!(commands.is_empty());
    }

    #[test]
    fn toggle_off_pauses_the_current_video() {
        let state = run(&[play("a")]);
        let (next, commands) = apply(&state, &toggle("a", Some(10.0)));
        assert_eq!(next.playing, None);
        assert_eq!(next.last_position.get("a"), Some(&10.0));
        assert_eq!(commands, vec![PlayerCommand::Pause("a".to_string())]);
    }

    #[test]
    fn toggle_on_drives_the_player_and_restores() {
        let state = run(&[play("a"), pause("a", 42.0)]);
        let (next, commands) = apply(&state, &toggle("a", None));
        assert_eq!(next.playing.as_deref(), Some("a"));
        assert_eq!(
            commands,
            vec![
                PlayerCommand::SeekTo("a".to_string(), 42.0),
                PlayerCommand::Play("a".to_string()),
            ]
        );
    }

    #[test]
    fn toggle_switches_between_videos() {
        let state = run(&[toggle("a", None)]);
        let (next, commands) = apply(&state, &toggle("b", None));
        assert_eq!(next.playing.as_deref(), Some("b"));
        assert_eq!(
            commands,
            vec![
                PlayerCommand::Pause("a".to_string()),
                PlayerCommand::Play("b".to_string()),
            ]
        );
    }

    #[test]
    fn pause_of_a_stopped_video_is_a_noop() {
        let (next, commands) = apply(&PlaybackState::default(), &pause("a", 5.0));
        assert_eq!(next, PlaybackState::default());
        assert!(commands.is_empty());
    }

    #[test]
    fn at_most_one_video_plays_under_any_event_sequence() {
        let events = [
            play("a"),
            seeking("a"),
            play("b"),
            pause("b", 12.0),
            toggle("c", None),
            play("a"),
            toggle("a", Some(3.0)),
            play("c"),
            pause("c", 1.0),
        ];

        let mut state = PlaybackState::default();
        for event in &events {
            let (next, _) = apply(&state, event);
            // Option<String> makes >1 unrepresentable; check the machine
            // never claims a video it was not told about either.
            if let Some(playing) = &next.playing {
                assert!(["a", "b", "c"].contains(&playing.as_str()));
            }
            state = next;
        }
        assert_eq!(state.playing, None);
    }
}
