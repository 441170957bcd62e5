//! Repository layer over the in-memory catalog

pub mod books;
pub mod seed;

/// Main repository struct holding the catalog stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }
}
