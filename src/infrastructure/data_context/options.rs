//! Explicit configuration handed to a data context when it is opened.

use std::time::Duration;

/// Connection settings for the PostgreSQL backend.
#[derive(Debug, Clone)]
pub struct PostgresOptions {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Apply `migrations/` when the context is opened.
    pub run_migrations: bool,
}

impl PostgresOptions {
    /// Options with the default pool settings for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
            run_migrations: true,
        }
    }
}

/// Which store backs a data context.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Durable relational store.
    Postgres(PostgresOptions),
    /// Ephemeral process-local store. Contexts opened with the same name share rows.
    InMemory { name: String },
}

/// Options used to open a [`super::DataContext`].
#[derive(Debug, Clone)]
pub struct DataContextOptions {
    pub backend: StorageBackend,
}

impl DataContextOptions {
    pub fn postgres(options: PostgresOptions) -> Self {
        Self {
            backend: StorageBackend::Postgres(options),
        }
    }

    pub fn in_memory(name: impl Into<String>) -> Self {
        Self {
            backend: StorageBackend::InMemory { name: name.into() },
        }
    }

    /// In-memory options with a random store name.
    ///
    /// Every call yields a namespace no other context is using, so parallel
    /// tests never see each other's rows.
    pub fn in_memory_unique() -> Self {
        Self::in_memory(format!("blog-{:016x}", rand::random::<u64>()))
    }

    /// Short backend label for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            StorageBackend::Postgres(_) => "postgres",
            StorageBackend::InMemory { .. } => "memory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_defaults() {
        let options = PostgresOptions::new("postgres://localhost/blog");

        assert_eq!(options.url, "postgres://localhost/blog");
        assert_eq!(options.max_connections, 10);
        assert_eq!(options.acquire_timeout, Duration::from_secs(30));
        assert!(options.run_migrations);
    }

    #[test]
    fn test_in_memory_unique_names_differ() {
        let a = DataContextOptions::in_memory_unique();
        let b = DataContextOptions::in_memory_unique();

        match (a.backend, b.backend) {
            (StorageBackend::InMemory { name: a }, StorageBackend::InMemory { name: b }) => {
                assert_ne!(a, b);
                assert!(a.starts_with("blog-"));
            }
            _ => panic!("expected in-memory backends"),
        }
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(DataContextOptions::in_memory("x").backend_name(), "memory");
        assert_eq!(
            DataContextOptions::postgres(PostgresOptions::new("postgres://h/db")).backend_name(),
            "postgres"
        );
    }
}
