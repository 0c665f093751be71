//! Backend identification.

use std::fmt;

/// Identifies the type of database backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// SQLite database (file-based or in-memory).
    Sqlite,
    /// PostgreSQL database.
    Postgres,
}

impl BackendKind {
    /// Selects the backend for a database URL.
    ///
    /// `postgres://` and `postgresql://` URLs select PostgreSQL. Everything
    /// else (`sqlite:` URLs, `:memory:`, plain file paths) selects SQLite.
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            BackendKind::Postgres
        } else {
            BackendKind::Sqlite
        }
    }

    /// Maps a storage's `backend_name()` back to a built-in backend.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqlite" => Some(BackendKind::Sqlite),
            "postgres" => Some(BackendKind::Postgres),
            _ => None,
        }
    }

    /// Returns the cargo feature that compiles this backend in.
    pub fn feature(&self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Sqlite => write!(f, "sqlite"),
            BackendKind::Postgres => write!(f, "postgres"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(BackendKind::from_name("sqlite"), Some(BackendKind::Sqlite));
        assert_eq!(BackendKind::from_name("postgres"), Some(BackendKind::Postgres));
        assert_eq!(BackendKind::from_name("memory"), None);
    }

    #[test]
    fn test_from_url() {
        assert_eq!(
            BackendKind::from_url("postgres://u:p@localhost:5432/db"),
            BackendKind::Postgres
        );
        assert_eq!(
            BackendKind::from_url("postgresql://localhost/db"),
            BackendKind::Postgres
        );
        assert_eq!(BackendKind::from_url(":memory:"), BackendKind::Sqlite);
        assert_eq!(BackendKind::from_url("sqlite:fruits.db"), BackendKind::Sqlite);
        assert_eq!(BackendKind::from_url("data/veg.db"), BackendKind::Sqlite);
    }

    #[test]
    fn test_display() {
        assert_eq!(BackendKind::Sqlite.to_string(), "sqlite");
        assert_eq!(BackendKind::Postgres.to_string(), "postgres");
        assert_eq!(BackendKind::Postgres.feature(), "postgres");
    }
}
