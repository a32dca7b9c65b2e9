//! SQLite schema definition.

/// Complete database schema for the clinic document store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Collection Documents
-- ============================================================================

-- One row per collection; value is the JSON array of entities.
CREATE TABLE IF NOT EXISTS documents (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL CHECK (json_valid(value)),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
