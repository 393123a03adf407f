//! Record store database schema.

/// SQL to create the records table. The surrogate `id` exists only to give
/// `list_all` a stable storage order; it is never exposed to callers.
pub const CREATE_RECORDS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS records (
    id          BIGSERIAL PRIMARY KEY,
    document    JSONB NOT NULL,
    ingested_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";
