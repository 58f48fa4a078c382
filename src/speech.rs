//! Speech output
//!
//! Speaking is a side channel: a failing speaker must never stop the
//! presentation, so callers go through [`announce`] which only logs.

use std::{
    process::{Command, Stdio},
    thread,
};

use log::{info, warn};

#[derive(thiserror::Error, Debug)]
pub enum SpeechError {
    #[error("No speech command configured")]
    NoCommand,
    #[error("Speech command {program:?} could not be started")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait Speaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speak `text` and log instead of returning a failure
pub fn announce<S: Speaker + ?Sized>(speaker: &S, text: &str) {
    if let Err(e) = speaker.speak(text) {
        warn!("speech failed: {e}");
    }
}

/// A speaker that writes the text to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSpeaker;

impl Speaker for LogSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        info!("speak: {text}");
        Ok(())
    }
}

/// A speaker that hands the text to an external program, e.g. `espeak`.
///
/// The text is passed as the last argument. The program is not awaited,
/// a background thread reaps it once it exits.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandSpeaker {
            program: program.into(),
            args,
        }
    }

    /// Split a command line such as `"espeak -v zh"` at whitespace
    pub fn from_command_line(command_line: &str) -> Result<Self, SpeechError> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or(SpeechError::NoCommand)?;
        Ok(CommandSpeaker::new(program, words.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        // reap the child without blocking the caller
        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => warn!("{program} exited with {status}"),
            Ok(_) => {}
            Err(e) => warn!("waiting for {program} failed: {e}"),
        });
        Ok(())
    }
}

impl<S: Speaker + ?Sized> Speaker for Box<S> {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        (**self).speak(text)
    }
}
