// ============================================================
// Layer 4 — MongoDB Document Store
// ============================================================
// Reads one collection through the synchronous mongodb driver.
//
// The driver connects lazily, so connect() issues a `ping`
// against the target database to surface an unreachable server
// or bad credentials as a Connection error up front, before any
// output directory or file is touched.
//
// BSON → FieldValue mapping:
//   Int32 / Int64      → Int
//   Double             → Float
//   String / Symbol    → Text
//   Boolean            → Bool
//   Null / Undefined   → Null
//   ObjectId           → Text (24 hex chars)
//   DateTime           → Text (RFC 3339)
//   anything else      → Text (relaxed extended JSON)
//
// The client is owned by the store and released when the store
// is dropped.
//
// Reference: mongodb crate documentation (sync API)

use mongodb::bson::{doc, Bson, Document};
use mongodb::sync::{Client, Collection};

use crate::domain::error::IngestError;
use crate::domain::record::{FieldValue, Record};
use crate::domain::table::Table;
use crate::domain::traits::DocumentStore;

pub struct MongoStore {
    // Kept so the connection lives exactly as long as the store
    _client:    Client,
    database:   String,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Open a client, resolve `database.collection` and confirm
    /// the server answers.
    pub fn connect(
        connection_string: &str,
        database_name:     &str,
        collection_name:   &str,
    ) -> Result<Self, IngestError> {
        tracing::info!("Connecting to MongoDB");

        let client = Client::with_uri_str(connection_string)
            .map_err(IngestError::connection)?;

        let db = client.database(database_name);
        db.run_command(doc! { "ping": 1 })
            .run()
            .map_err(IngestError::connection)?;

        let collection = db.collection::<Document>(collection_name);
        tracing::info!("Connected to MongoDB ({}.{})", database_name, collection_name);

        Ok(Self {
            _client:  client,
            database: database_name.to_string(),
            collection,
        })
    }
}

impl DocumentStore for MongoStore {
    fn describe(&self) -> String {
        format!("mongodb:{}.{}", self.database, self.collection.name())
    }

    fn fetch_all(&self) -> Result<Table, IngestError> {
        let name = self.collection.name().to_string();
        tracing::info!("Fetching data from MongoDB");

        let cursor = self
            .collection
            .find(doc! {})
            .run()
            .map_err(|e| IngestError::fetch(&name, e))?;

        let mut rows = Vec::new();
        for item in cursor {
            let document = item.map_err(|e| IngestError::fetch(&name, e))?;
            rows.push(document_to_record(document));
        }

        tracing::info!("Data fetched successfully ({} documents)", rows.len());
        Ok(Table::from_records(rows))
    }
}

/// Convert one BSON document into a Record without its `_id`.
pub fn document_to_record(document: Document) -> Record {
    let mut record = Record::new();
    for (name, value) in document {
        record.insert(name, bson_to_value(value));
    }
    record.strip_store_id()
}

/// Map a BSON value onto a scalar cell value.
pub fn bson_to_value(value: Bson) -> FieldValue {
    match value {
        Bson::Int32(i)              => FieldValue::Int(i64::from(i)),
        Bson::Int64(i)              => FieldValue::Int(i),
        Bson::Double(f)             => FieldValue::Float(f),
        Bson::String(s)             => FieldValue::Text(s),
        Bson::Symbol(s)             => FieldValue::Text(s),
        Bson::Boolean(b)            => FieldValue::Bool(b),
        Bson::Null | Bson::Undefined => FieldValue::Null,
        Bson::ObjectId(oid)         => FieldValue::Text(oid.to_hex()),
        Bson::DateTime(dt)          => FieldValue::Text(
            dt.try_to_rfc3339_string().unwrap_or_else(|_| dt.to_string()),
        ),
        other => FieldValue::Text(other.into_relaxed_extjson().to_string()),
    }
}
