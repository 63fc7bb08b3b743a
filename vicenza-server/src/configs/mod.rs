mod schema;
mod settings;
mod storage;

pub use schema::SchemaManager;
pub use settings::{Clock, Database, Gateway, GatewayAuth, Logger, News, Server, Settings, Weather};
pub use storage::Storage;
