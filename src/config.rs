//! Runtime settings shared by the command line tool and library users

use crate::{
    source::MAX_CHARS,
    speech::{CommandSpeaker, LogSpeaker, Speaker, SpeechError},
};

/// Number of pins that are moved together by default
pub const BATCH_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pins moved together by the display driver
    pub batch_size: usize,
    /// Characters taken from a text source
    pub max_chars: usize,
    /// External program used for speech, e.g. `espeak -v zh`
    pub speech_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: BATCH_SIZE,
            max_chars: MAX_CHARS,
            speech_command: None,
        }
    }
}

impl Config {
    /// The configured speaker. Without a speech command the text is only
    /// logged.
    pub fn speaker(&self) -> Result<Box<dyn Speaker>, SpeechError> {
        match &self.speech_command {
            Some(command) => Ok(Box::new(CommandSpeaker::from_command_line(command)?)),
            None => Ok(Box::new(LogSpeaker)),
        }
    }
}
