use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlVideoElement;
use yew::NodeRef;

use super::playback::PlayerCommand;

/// What the playback coordinator needs from a player, keyed by video id.
/// The production implementation drives `<video>` elements; tests record
/// calls instead.
pub trait PlayerControl {
    fn play(&self, id: &str);
    fn pause(&self, id: &str);
    fn seek_to(&self, id: &str, seconds: f64);
    fn current_time(&self, id: &str) -> Option<f64>;
}

pub fn run_commands(commands: &[PlayerCommand], players: &impl PlayerControl) {
    for command in commands {
        match command {
            PlayerCommand::Play(id) => players.play(id),
            PlayerCommand::Pause(id) => players.pause(id),
            PlayerCommand::SeekTo(id, seconds) => players.seek_to(id, *seconds),
        }
    }
}

/// Registry of the `<video>` elements in the list, shared between the app
/// root (which runs commands) and the cards (which render the elements).
#[derive(Clone, Default)]
pub struct DomPlayers {
    refs: Rc<RefCell<HashMap<String, NodeRef>>>,
}

impl PartialEq for DomPlayers {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.refs, &other.refs)
    }
}

impl DomPlayers {
    /// Node ref for the given video id, created on first use. The card
    /// attaches it to its `<video>` element so commands can reach it.
    pub fn node_ref(&self, id: &str) -> NodeRef {
        self.refs
            .borrow_mut()
            .entry(id.to_string())
            .or_default()
            .clone()
    }

    fn element(&self, id: &str) -> Option<HtmlVideoElement> {
        self.refs
            .borrow()
            .get(id)
            .and_then(|node| node.cast::<HtmlVideoElement>())
    }
}

impl PlayerControl for DomPlayers {
    fn play(&self, id: &str) {
        if let Some(element) = self.element(id) {
            // A rejected play promise surfaces through the element itself
            let _ = element.play();
        }
    }

    fn pause(&self, id: &str) {
        if let Some(element) = self.element(id) {
            let _ = element.pause();
        }
    }

    fn seek_to(&self, id: &str, seconds: f64) {
        if let Some(element) = self.element(id) {
            element.set_current_time(seconds);
        }
    }

    fn current_time(&self, id: &str) -> Option<f64> {
        self.element(id).map(|element| element.current_time())
    }
}
