//! Network actor - runs API requests in the Tokio async runtime

use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that turns commands into API calls, one task per request
pub struct NetworkActor {
    client: ApiClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => break,
                        Some(command) => self.spawn_request(command),
                    }
                }

                // Reap completed tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Request task failed");
                    }
                }
            }
        }

        // Outstanding requests are dropped with the JoinSet
        tracing::info!(pending = self.active_requests.len(), "Network actor stopped");
    }

    fn spawn_request(&mut self, command: NetworkCommand) {
        let client = self.client.clone();
        let response_tx = self.response_tx.clone();

        self.active_requests.spawn(async move {
            if let Some(response) = execute(&client, command).await {
                let _ = response_tx.send(response);
            }
        });
    }
}

/// Execute one command against the API; `None` for commands that carry no request
pub async fn execute(client: &ApiClient, command: NetworkCommand) -> Option<NetworkResponse> {
    let flow = command.flow()?;
    let id = command.id()?;
    tracing::info!(id, flow = flow.as_str(), base_url = client.base_url(), "Executing request");
    let start = Instant::now();

    let response = match command {
        NetworkCommand::CreateUser { id, input } => {
            let result = client.create_user(&input).await;
            NetworkResponse::UserCreated { id, result, time_ms: elapsed_ms(start) }
        }
        NetworkCommand::ListUsers { id } => {
            let result = client.list_users().await;
            NetworkResponse::UsersListed { id, result, time_ms: elapsed_ms(start) }
        }
        NetworkCommand::CreateExercise { id, input } => {
            let result = client.create_exercise(&input).await;
            NetworkResponse::ExerciseCreated { id, result, time_ms: elapsed_ms(start) }
        }
        NetworkCommand::Shutdown => return None,
    };

    if response.is_success() {
        tracing::info!(id, flow = flow.as_str(), time_ms = response.time_ms(), "Request completed");
    } else {
        tracing::warn!(id, flow = flow.as_str(), time_ms = response.time_ms(), "Request failed");
    }
    Some(response)
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
