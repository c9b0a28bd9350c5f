//! Audio playback commands.
//!
//! Scenes and entity machines emit these; the audio sink system consumes
//! them, logs the request and keeps [`AudioState`](crate::resources::audiostate::AudioState)
//! up to date. There is no sound device behind the terminal frontend.

use bevy_ecs::prelude::Message;

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    StopAllMusic,
    PlayFx { id: String },
}
