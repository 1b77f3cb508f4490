//! MongoDB test infrastructure backed by testcontainers

use mongodb::{Client, Database};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use uuid::Uuid;

/// A MongoDB container with a per-test database.
///
/// The container lives as long as this struct; dropping it tears the
/// server down. Each instance gets its own database name, so tests can
/// run in parallel against separate containers without colliding.
pub struct TestMongo {
    _container: ContainerAsync<Mongo>,
    client: Client,
    db_name: String,
}

impl TestMongo {
    /// Start a MongoDB container and connect to it.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("failed to resolve MongoDB container port");
        let url = format!("mongodb://127.0.0.1:{}", port);

        let client = Client::with_uri_str(&url)
            .await
            .expect("failed to connect to test MongoDB");

        let db_name = format!("test_{}", Uuid::now_v7().simple());
        tracing::debug!(%url, %db_name, "Test MongoDB ready");

        Self {
            _container: container,
            client,
            db_name,
        }
    }

    /// The test database handle.
    pub fn database(&self) -> Database {
        self.client.database(&self.db_name)
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
