//! Backend worker: one thread owning a tokio runtime and the HTTP client,
//! processing UI commands strictly in order.

use std::thread;

use client_core::{BackendClient, ClientError};
use crossbeam_channel::{Receiver, Sender};
use shared::protocol::EchoRequest;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{ConsoleAction, UiError, UiEvent};

const ECHO_GREETING: &str = "Hello from the console!";

pub fn spawn_backend_thread(
    server_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = BackendClient::new(server_url);
            let _ = ui_tx.try_send(UiEvent::WorkerReady);

            while let Ok(cmd) = cmd_rx.recv() {
                let event = run_command(&client, cmd).await;
                let _ = ui_tx.try_send(event);
            }
        });
    });
}

async fn run_command(client: &BackendClient, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Hello => match client.hello().await {
            Ok(body) => UiEvent::HelloSucceeded(body),
            Err(err) => failed(ConsoleAction::Hello, err),
        },
        BackendCommand::Echo => {
            let request = EchoRequest::synthesized(ECHO_GREETING);
            match client.echo(&request).await {
                Ok(body) => UiEvent::EchoSucceeded(body),
                Err(err) => failed(ConsoleAction::Echo, err),
            }
        }
        BackendCommand::SearchKeyword { request } => {
            match client.search_keyword(&request).await {
                Ok(outcome) => UiEvent::SearchSucceeded(outcome),
                Err(err) => failed(ConsoleAction::Search, err),
            }
        }
    }
}

fn failed(action: ConsoleAction, error: ClientError) -> UiEvent {
    tracing::warn!(action = action.title(), "backend exchange failed: {error}");
    UiEvent::ActionFailed {
        action,
        error: UiError::from_client_error(&error),
    }
}
