//! Keyed JSON document operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};

impl Database {
    /// Get the raw JSON stored under a key, if it was ever written.
    pub fn get_document(&self, key: &str) -> DbResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM documents WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    /// Write a single document, replacing any previous value.
    pub fn put_document(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO documents (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    /// Write several documents atomically. Either every document is replaced or none is.
    pub fn put_documents(&mut self, documents: &[(&str, String)]) -> DbResult<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in documents {
            tx.execute(
                r#"
                INSERT INTO documents (key, value, updated_at)
                VALUES (?1, ?2, datetime('now'))
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// List stored document keys.
    pub fn list_document_keys(&self) -> DbResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM documents ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_missing_document() {
        let db = setup_db();
        assert_eq!(db.get_document("dentalPatients").unwrap(), None);
    }

    #[test]
    fn test_put_and_get() {
        let db = setup_db();
        db.put_document("dentalPatients", r#"[{"id":1}]"#).unwrap();

        let value = db.get_document("dentalPatients").unwrap();
        assert_eq!(value, Some(r#"[{"id":1}]"#.into()));
    }

    #[test]
    fn test_put_overwrites() {
        let db = setup_db();
        db.put_document("dentalTreatments", "[1]").unwrap();
        db.put_document("dentalTreatments", "[]").unwrap();

        assert_eq!(db.get_document("dentalTreatments").unwrap(), Some("[]".into()));
        assert_eq!(db.list_document_keys().unwrap().len(), 1);
    }

    #[test]
    fn test_put_documents_is_atomic() {
        let mut db = setup_db();
        db.put_document("a", "[]").unwrap();

        // Second value violates the json_valid check, so the first must not land either.
        let result = db.put_documents(&[("a", "[1,2]".to_string()), ("b", "{oops".to_string())]);
        assert!(result.is_err());

        assert_eq!(db.get_document("a").unwrap(), Some("[]".into()));
        assert_eq!(db.get_document("b").unwrap(), None);
    }

    #[test]
    fn test_list_document_keys() {
        let mut db = setup_db();
        db.put_documents(&[
            ("dentalTreatments", "[]".to_string()),
            ("dentalPatients", "[]".to_string()),
        ])
        .unwrap();

        assert_eq!(
            db.list_document_keys().unwrap(),
            vec!["dentalPatients".to_string(), "dentalTreatments".to_string()]
        );
    }
}
