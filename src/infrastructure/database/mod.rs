//! Database Module
//!
//! MongoDB client bootstrap, collection names and document conversion.

pub mod codec;

use std::sync::Arc;
use std::time::{Duration, Instant};

use mongodb::{
    bson::{self, doc},
    options::ClientOptions,
    Client, Collection, Database,
};
use tokio::sync::OnceCell;

use crate::config::DatabaseSettings;

pub use codec::{from_bson, to_bson};

/// Collection holding service listings
pub const SERVICES_COLLECTION: &str = "services";

/// Collection holding bookings
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Create a MongoDB client.
///
/// Parsing a `mongodb+srv://` URI resolves the SRV record, so this fails when
/// the cluster host cannot be resolved. No server handshake happens until the
/// first operation or [`ping`].
pub async fn create_client(settings: &DatabaseSettings) -> Result<Client, mongodb::error::Error> {
    let mut options = ClientOptions::parse(settings.connection_uri()).await?;
    options.app_name = Some(settings.app_name.clone());
    options.server_selection_timeout =
        Some(Duration::from_secs(settings.server_selection_timeout_secs));
    Client::with_options(options)
}

/// Round-trip a `ping` command and report its latency.
pub async fn ping(database: &Database) -> Result<Duration, mongodb::error::Error> {
    let start = Instant::now();
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(start.elapsed())
}

/// Shared handle to the configured database, connected on first use.
///
/// A failed connection attempt leaves the handle empty, so the next
/// operation tries again.
#[derive(Clone)]
pub struct MongoStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    settings: DatabaseSettings,
    connection: OnceCell<(Client, Database)>,
}

impl MongoStore {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                settings,
                connection: OnceCell::new(),
            }),
        }
    }

    /// Name of the configured database
    pub fn name(&self) -> &str {
        &self.inner.settings.name
    }

    /// The database handle, creating the client if none exists yet.
    pub async fn database(&self) -> Result<Database, mongodb::error::Error> {
        let (_, database) = self
            .inner
            .connection
            .get_or_try_init(|| async {
                let client = create_client(&self.inner.settings).await?;
                let database = client.database(&self.inner.settings.name);
                tracing::debug!(database = %self.inner.settings.name, "MongoDB client created");
                Ok::<_, mongodb::error::Error>((client, database))
            })
            .await?;

        Ok(database.clone())
    }

    /// A collection of untyped documents.
    pub async fn collection(
        &self,
        name: &str,
    ) -> Result<Collection<bson::Document>, mongodb::error::Error> {
        Ok(self.database().await?.collection(name))
    }

    /// Ping the database, connecting first if needed.
    pub async fn ping(&self) -> Result<Duration, mongodb::error::Error> {
        ping(&self.database().await?).await
    }

    /// Close the client if one was ever created.
    pub async fn shutdown(&self) {
        if let Some((client, _)) = self.inner.connection.get() {
            client.clone().shutdown().await;
            tracing::info!("MongoDB client closed");
        }
    }
}
