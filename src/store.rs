use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::client::{Client, ClientId};

/// Owner of the client collection. Implementations serialize every operation.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn list(&self) -> Vec<Client>;
    async fn get(&self, id: ClientId) -> Option<Client>;
    async fn create(&self, client: Client) -> Client;
    /// Replaces the name of the first client matching `id`; the id itself never changes.
    async fn update_name(&self, id: ClientId, name: String) -> Option<Client>;
    /// Removes the first client matching `id`, returning whether one was found.
    async fn delete(&self, id: ClientId) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    clients: Mutex<Vec<Client>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self {
            clients: Mutex::new(clients),
        }
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn list(&self) -> Vec<Client> {
        self.clients.lock().await.clone()
    }

    async fn get(&self, id: ClientId) -> Option<Client> {
        let clients = self.clients.lock().await;
        find_index(&clients, id).map(|index| clients[index].clone())
    }

    async fn create(&self, client: Client) -> Client {
        let mut clients = self.clients.lock().await;
        clients.push(client.clone());
        debug!(client_id = client.id, len = clients.len(), "client appended");
        client
    }

    async fn update_name(&self, id: ClientId, name: String) -> Option<Client> {
        let mut clients = self.clients.lock().await;
        let index = find_index(&clients, id)?;
        clients[index].name = name;
        debug!(client_id = id, "client renamed");
        Some(clients[index].clone())
    }

    async fn delete(&self, id: ClientId) -> bool {
        let mut clients = self.clients.lock().await;
        let Some(index) = find_index(&clients, id) else {
            return false;
        };
        clients.remove(index);
        debug!(client_id = id, len = clients.len(), "client removed");
        true
    }
}

fn find_index(clients: &[Client], id: ClientId) -> Option<usize> {
    clients.iter().position(|client| client.id == id)
}
