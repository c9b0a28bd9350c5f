//! Audio command sink.
//!
//! The terminal frontend has no sound device; commands are logged and the
//! running-music bookkeeping is kept so scene logic can still ask whether
//! the background music is on.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::audio::AudioCmd;
use crate::resources::audiostate::AudioState;

pub fn audio_sink(mut reader: MessageReader<AudioCmd>, mut state: ResMut<AudioState>) {
    for cmd in reader.read() {
        match cmd {
            AudioCmd::PlayMusic { id, looped } => {
                debug!("audio: play music '{}' (looped={})", id, looped);
                state.music_started(id);
            }
            AudioCmd::StopMusic { id } => {
                debug!("audio: stop music '{}'", id);
                state.music_stopped(id);
            }
            AudioCmd::StopAllMusic => {
                debug!("audio: stop all music");
                state.stop_all_music();
            }
            AudioCmd::PlayFx { id } => {
                debug!("audio: play fx '{}'", id);
            }
        }
    }
}

/// Advance the audio command mailbox. Runs before [`audio_sink`].
pub fn update_audio_messages(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}
