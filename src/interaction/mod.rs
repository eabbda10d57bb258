use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::extensions::MarkerId;

/// Controller state: either idle or waiting for the click that ends a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    MovePending(MarkerId),
}

impl InteractionState {
    #[must_use]
    pub fn pending_move(self) -> Option<MarkerId> {
        match self {
            Self::Idle => None,
            Self::MovePending(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    pub fn arm_move(&mut self, id: MarkerId) {
        *self = Self::MovePending(id);
    }

    /// Drops a pending move, returning the marker that was armed.
    pub fn cancel_move(&mut self) -> Option<MarkerId> {
        let pending = self.pending_move();
        *self = Self::Idle;
        pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Abstract input delivered by the host's event loop.
///
/// `target` names the marker under the pointer, if any; hit testing is the
/// host's job (see `MarkerOverlay::hit_test`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Click {
        button: PointerButton,
        position: PixelPoint,
        #[serde(default)]
        target: Option<MarkerId>,
    },
    DoubleClick {
        marker: MarkerId,
    },
    KeyPress {
        key: char,
    },
}

impl InputEvent {
    #[must_use]
    pub fn primary_click(position: PixelPoint, target: Option<MarkerId>) -> Self {
        Self::Click {
            button: PointerButton::Primary,
            position,
            target,
        }
    }

    #[must_use]
    pub fn secondary_click(position: PixelPoint, target: Option<MarkerId>) -> Self {
        Self::Click {
            button: PointerButton::Secondary,
            position,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    ClearAll,
    MarkCurrentPosition,
}

/// Keyboard shortcuts. Matching ignores ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_clear_all_key")]
    pub clear_all: char,
    #[serde(default = "default_mark_current_key")]
    pub mark_current_position: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            clear_all: default_clear_all_key(),
            mark_current_position: default_mark_current_key(),
        }
    }
}

impl KeyBindings {
    #[must_use]
    pub fn resolve(self, key: char) -> Option<KeyCommand> {
        if key.eq_ignore_ascii_case(&self.clear_all) {
            Some(KeyCommand::ClearAll)
        } else if key.eq_ignore_ascii_case(&self.mark_current_position) {
            Some(KeyCommand::MarkCurrentPosition)
        } else {
            None
        }
    }
}

fn default_clear_all_key() -> char {
    'x'
}

fn default_mark_current_key() -> char {
    'o'
}
