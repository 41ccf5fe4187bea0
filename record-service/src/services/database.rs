use crate::models::Person;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Server error code MongoDB raises on `_id` collisions.
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct PersonDb {
    client: MongoClient,
    db: Database,
}

impl PersonDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn people(&self) -> Collection<Person> {
        self.db.collection("people")
    }

    /// Inserts a person, relying on the `_id` primary key for uniqueness.
    ///
    /// The insert is a single conditional write: of two racing creates for the
    /// same id, one loses with a duplicate key error instead of overwriting.
    pub async fn insert(&self, person: &Person) -> Result<(), AppError> {
        self.people().insert_one(person, None).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::Conflict(anyhow::anyhow!(
                    "a person with id {} already exists",
                    person.id
                ))
            } else {
                tracing::error!("Failed to insert person {}: {}", person.id, e);
                AppError::from(e)
            }
        })?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Person>, AppError> {
        self.people()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find person {}: {}", id, e);
                AppError::from(e)
            })
    }

    /// Deletes the person with the given id, reporting whether one existed.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, AppError> {
        let result = self
            .people()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete person {}: {}", id, e);
                AppError::from(e)
            })?;
        Ok(result.deleted_count > 0)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => {
            write_error.code == DUPLICATE_KEY
        }
        _ => false,
    }
}
