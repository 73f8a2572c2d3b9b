use std::sync::mpsc::{Receiver, Sender, channel};

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Operator, Quaternion};
use crate::input::{InputMode, MatrixInput, MatrixSlot, OrientationInput};

/// One edit made in the input panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    SelectMode(InputMode),
    SetQuaternion {
        w: f64,
        x: f64,
        y: f64,
        z: f64,
    },
    SetEntry {
        slot: MatrixSlot,
        row: usize,
        col: usize,
        value: f64,
    },
    SetMatrix {
        slot: MatrixSlot,
        rows: MatrixInput,
    },
    SetOperator(Operator),
    Reset,
}

impl InputCommand {
    /// Applies the edit. Returns `false` if it addressed a non-existent field.
    pub fn apply(self, input: &mut OrientationInput) -> bool {
        match self {
            InputCommand::SelectMode(mode) => input.mode = mode,
            InputCommand::SetQuaternion { w, x, y, z } => {
                input.quaternion = Quaternion::new(w, x, y, z);
            }
            InputCommand::SetEntry {
                slot,
                row,
                col,
                value,
            } => {
                if !input.slot_mut(slot).set(row, col, value) {
                    tracing::warn!(?slot, row, col, "matrix entry out of range, edit ignored");
                    return false;
                }
            }
            InputCommand::SetMatrix { slot, rows } => *input.slot_mut(slot) = rows,
            InputCommand::SetOperator(operator) => input.operator = operator,
            InputCommand::Reset => *input = OrientationInput::default(),
        }
        true
    }
}

pub struct CommandQueue {
    receiver: Receiver<InputCommand>,
}

#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<InputCommand>,
}

impl CommandQueue {
    pub fn new() -> (Self, CommandSender) {
        let (sender, receiver) = channel();
        (Self { receiver }, CommandSender { sender })
    }

    pub fn try_recv(&self) -> Option<InputCommand> {
        self.receiver.try_recv().ok()
    }

    /// Everything queued so far, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = InputCommand> + '_ {
        self.receiver.try_iter()
    }
}

impl CommandSender {
    pub fn send(&self, cmd: InputCommand) {
        let _ = self.sender.send(cmd);
    }
}
