//! Linear dialogue sequencer.

use std::fmt;

/// One line of dialogue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DialogueLine {
    /// Unattributed text.
    Narration(String),
    Spoken { speaker: String, text: String },
}

impl DialogueLine {
    pub fn spoken(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Spoken {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> Option<&str> {
        match self {
            Self::Narration(_) => None,
            Self::Spoken { speaker, .. } => Some(speaker),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Narration(text) | Self::Spoken { text, .. } => text,
        }
    }
}

impl From<&str> for DialogueLine {
    fn from(text: &str) -> Self {
        Self::Narration(text.to_owned())
    }
}

impl From<String> for DialogueLine {
    fn from(text: String) -> Self {
        Self::Narration(text)
    }
}

impl fmt::Display for DialogueLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Narration(text) => f.write_str(text),
            Self::Spoken { speaker, text } => write!(f, "{speaker}: {text}"),
        }
    }
}

/// Holds the active conversation and the position in it.
///
/// Only moves forward. Once past the last line it reports finished until a
/// new conversation is started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialogue {
    lines: Vec<DialogueLine>,
    index: usize,
}

impl Dialogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the conversation and rewinds to its first line.
    pub fn start(&mut self, lines: impl IntoIterator<Item = DialogueLine>) {
        self.lines = lines.into_iter().collect();
        self.index = 0;
    }

    /// Line being shown, or `None` once finished.
    pub fn current(&self) -> Option<&DialogueLine> {
        self.lines.get(self.index)
    }

    /// Moves to the next line. Returns whether the conversation is finished.
    pub fn advance(&mut self) -> bool {
        if self.index < self.lines.len() {
            self.index += 1;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.lines.len()
    }

    pub fn end(&mut self) {
        self.lines.clear();
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
