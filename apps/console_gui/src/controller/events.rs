//! UI/backend events and error modeling for the console controller.

use client_core::{ClientError, SearchOutcome};
use shared::error::ErrorKind;
use shared::protocol::{EchoResponse, HelloResponse};

/// The three user-triggered exchanges a control can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleAction {
    Hello,
    Echo,
    Search,
}

impl ConsoleAction {
    pub fn title(self) -> &'static str {
        match self {
            ConsoleAction::Hello => "Hello",
            ConsoleAction::Echo => "Echo",
            ConsoleAction::Search => "Search",
        }
    }
}

pub enum UiEvent {
    WorkerReady,
    WorkerFailed(String),
    HelloSucceeded(HelloResponse),
    EchoSucceeded(EchoResponse),
    SearchSucceeded(SearchOutcome),
    ActionFailed {
        action: ConsoleAction,
        error: UiError,
    },
}

#[derive(Debug, Clone)]
pub struct UiError {
    kind: ErrorKind,
    message: String,
}

impl UiError {
    pub fn from_client_error(error: &ClientError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
