/// Configuration for the demo console app
use crate::error::{EventError, Result};
use crate::types::Interest;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Display name for the demo profile
    pub name: String,

    /// Job title for the demo profile
    pub title: String,

    /// Company for the demo profile
    pub company: String,

    /// Interests for the demo profile (at least one)
    pub interests: Vec<Interest>,

    /// Optional JSON file with the attendee pool (defaults to the builtin seed)
    pub attendees_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "Demo Attendee".to_string(),
            title: "Attendee".to_string(),
            company: "EventLink".to_string(),
            interests: vec![Interest::AiMl],
            attendees_path: None,
        }
    }
}

impl Config {
    /// Create config from command line arguments
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut interests: Vec<Interest> = Vec::new();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--name" => {
                    config.name = args
                        .get(i + 1)
                        .ok_or_else(|| {
                            EventError::Config("--name requires a value".to_string())
                        })?
                        .clone();
                    i += 2;
                }
                "--title" => {
                    config.title = args
                        .get(i + 1)
                        .ok_or_else(|| {
                            EventError::Config("--title requires a value".to_string())
                        })?
                        .clone();
                    i += 2;
                }
                "--company" => {
                    config.company = args
                        .get(i + 1)
                        .ok_or_else(|| {
                            EventError::Config("--company requires a value".to_string())
                        })?
                        .clone();
                    i += 2;
                }
                "--interest" => {
                    let raw = args.get(i + 1).ok_or_else(|| {
                        EventError::Config("--interest requires a topic argument".to_string())
                    })?;
                    let interest = raw
                        .parse::<Interest>()
                        .map_err(EventError::Config)?;
                    interests.push(interest);
                    i += 2;
                }
                "--attendees" => {
                    let path = args.get(i + 1).ok_or_else(|| {
                        EventError::Config("--attendees requires a path argument".to_string())
                    })?;
                    config.attendees_path = Some(PathBuf::from(path));
                    i += 2;
                }
                other => {
                    return Err(EventError::Config(format!(
                        "Unknown argument: {} (usage: {} [--name <name>] [--title <title>] [--company <company>] [--interest <topic>]... [--attendees <path>])",
                        other,
                        args.first().map(|s| s.as_str()).unwrap_or("eventlink")
                    )));
                }
            }
        }

        if !interests.is_empty() {
            config.interests = interests;
        }

        // Env overrides (nice for scripts)
        if let Ok(name) = std::env::var("EVENTLINK_NAME") {
            config.name = name;
        }
        if let Ok(path) = std::env::var("EVENTLINK_ATTENDEES") {
            config.attendees_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}
