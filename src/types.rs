use serde::Serialize;

use crate::color::Border;
use crate::container::Container;

/// One container as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerView {
    /// Color codes, index 0 first.
    pub slots: Vec<u8>,
    pub selected: bool,
    pub border: u8,
}

impl From<&Container> for ContainerView {
    fn from(container: &Container) -> Self {
        Self {
            slots: container.slots().iter().map(|c| c.code()).collect(),
            selected: container.is_selected(),
            border: Border::for_selected(container.is_selected()).code(),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub containers: Vec<ContainerView>,
    pub selection: Option<u8>,
    pub entropy: u32,
    pub games_played: u32,
    /// Contract:
    /// - Indices of containers changed since the previous snapshot, in order.
    /// - Every index after a new deal.
    pub redraw: Vec<u8>,
}

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Click {
    /// Nothing selected, nothing moved, or a selection cleared.
    None,
    Selected,
    /// A transfer was attempted, legal or not.
    Attempted,
    /// The attempt solved the puzzle and a new deal replaced it.
    Solved,
}

impl Click {
    pub fn as_str(self) -> &'static str {
        match self {
            Click::None => "none",
            Click::Selected => "selected",
            Click::Attempted => "attempted",
            Click::Solved => "solved",
        }
    }
}
