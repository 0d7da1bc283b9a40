//! Programmable transaction builder
//!
//! A transaction is an ordered list of commands. Each `move_call` yields an
//! [`Argument::Result`] that later commands can consume, e.g. to transfer a
//! freshly created object back to the sender.
//!
//! The wallet connector receives the JSON form of [`Transaction`] and is
//! responsible for resolving object versions, gas, signing and execution.

use serde::{Deserialize, Serialize};

use super::types::{Address, ObjectId};

/// Pure (by-value) transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PureValue {
    String(String),
    Address(Address),
}

/// Command argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Argument {
    Pure { value: PureValue },
    Object { id: ObjectId },
    /// Output of the command at this index
    Result { index: u16 },
}

/// A single transaction command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    MoveCall {
        target: String,
        arguments: Vec<Argument>,
    },
    TransferObjects {
        objects: Vec<Argument>,
        recipient: Argument,
    },
}

/// Ordered command list submitted through the wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub commands: Vec<Command>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure string input
    pub fn pure_string(value: impl Into<String>) -> Argument {
        Argument::Pure {
            value: PureValue::String(value.into()),
        }
    }

    /// Pure address input
    pub fn pure_address(address: Address) -> Argument {
        Argument::Pure {
            value: PureValue::Address(address),
        }
    }

    /// Object input
    pub fn object(id: ObjectId) -> Argument {
        Argument::Object { id }
    }

    /// The shared system clock, supplying current chain time to a call
    pub fn clock() -> Argument {
        Argument::Object {
            id: ObjectId::clock(),
        }
    }

    /// Append a Move call to `package::module::function` and return its result handle
    pub fn move_call(
        &mut self,
        package: &ObjectId,
        module: &str,
        function: &str,
        arguments: Vec<Argument>,
    ) -> Argument {
        let index = self.commands.len() as u16;
        self.commands.push(Command::MoveCall {
            target: format!("{}::{}::{}", package, module, function),
            arguments,
        });
        Argument::Result { index }
    }

    /// Append a transfer of `objects` to `recipient`
    pub fn transfer_objects(&mut self, objects: Vec<Argument>, recipient: Address) {
        self.commands.push(Command::TransferObjects {
            objects,
            recipient: Self::pure_address(recipient),
        });
    }
}
