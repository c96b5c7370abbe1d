use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Storage key for the colour scheme, shared by every platform
pub const THEME_KEY: &str = "portfolio_theme_mode";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("storage unavailable")]
    Unavailable,
    #[cfg(not(target_arch = "wasm32"))]
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Other(String),
}

/// Colour scheme for the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Unknown values fall back to the default scheme
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class set on the page root
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "sun",
            Theme::Dark => "moon",
        }
    }
}

/// Read the saved theme. Missing or unreadable values yield the default.
pub fn load_theme() -> Theme {
    match read_value(THEME_KEY) {
        Ok(Some(value)) => Theme::parse(&value),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!(error = %err, "failed to read theme preference");
            Theme::default()
        }
    }
}

pub fn save_theme(theme: Theme) -> Result<(), DbError> {
    write_value(THEME_KEY, theme.as_str())
}

// Values are stored as raw strings so the key stays readable from plain JS.
#[cfg(target_arch = "wasm32")]
fn read_value(key: &str) -> Result<Option<String>, DbError> {
    LocalStorage::raw()
        .get_item(key)
        .map_err(|_| DbError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn write_value(key: &str, value: &str) -> Result<(), DbError> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|_| DbError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value(key: &str) -> Result<Option<String>, DbError> {
    let conn = get_db_connection()?;
    read_value_from(&conn, key)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_value(key: &str, value: &str) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    write_value_to(&conn, key, value)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_value_from(conn: &rusqlite::Connection, key: &str) -> Result<Option<String>, DbError> {
    use rusqlite::OptionalExtension;

    let value = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row: &rusqlite::Row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_value_to(conn: &rusqlite::Connection, key: &str, value: &str) -> Result<(), DbError> {
    conn.execute(
        "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
        [key, value],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("folio"))
        .ok_or(DbError::Unavailable)?;
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::Other(format!("Failed to create data dir: {}", e)))?;

    let conn = rusqlite::Connection::open(data_dir.join("folio.db"))?;
    initialize_schema(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("sepia"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn theme_toggles_and_names() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().as_str(), "dark");
        assert_eq!(Theme::Light.root_class(), "light-mode");
        assert_eq!(Theme::Dark.icon(), "moon");
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Theme::Light).expect("serialize"),
            "\"light\""
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn preference_round_trips_through_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().expect("open");
        initialize_schema(&conn).expect("schema");

        assert_eq!(read_value_from(&conn, THEME_KEY).expect("read"), None);
        write_value_to(&conn, THEME_KEY, "light").expect("write");
        write_value_to(&conn, THEME_KEY, "dark").expect("overwrite");
        assert_eq!(
            read_value_from(&conn, THEME_KEY).expect("read"),
            Some("dark".to_string())
        );
    }
}
