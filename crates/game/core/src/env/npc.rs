//! Talkable NPC definitions.

use crate::dialogue::DialogueLine;
use crate::state::{NpcId, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lines: Vec<DialogueLine>,
}

impl NpcTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a line spoken by this NPC.
    #[must_use]
    pub fn says(mut self, text: impl Into<String>) -> Self {
        let line = DialogueLine::spoken(self.name.clone(), text);
        self.lines.push(line);
        self
    }

    /// Lines in the order they are shown.
    pub fn dialogue(&self) -> impl Iterator<Item = DialogueLine> + '_ {
        self.lines.iter().cloned()
    }
}

/// Placement of one NPC in the world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSpawn {
    pub id: NpcId,
    pub template: String,
    pub position: Position,
}

/// Oracle providing NPC definitions by definition id.
pub trait NpcOracle: Send + Sync {
    fn npc(&self, def_id: &str) -> Option<NpcTemplate>;
}
