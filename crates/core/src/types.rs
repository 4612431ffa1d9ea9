/// Primary keys for makes and categories are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Cars are keyed by a server-generated UUID.
pub type CarId = uuid::Uuid;
