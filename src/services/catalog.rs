//! Catalog management service

use crate::{error::AppResult, models::Book, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id)
    }

    pub fn create_book(&self, book: Book) -> AppResult<Book> {
        self.repository.books.create(book)
    }

    /// Full replace of an existing book; `payload` is the decoded body
    pub fn update_book(&self, id: i64, payload: AppResult<Book>) -> AppResult<Book> {
        self.repository.books.update(id, payload)
    }

    pub fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id)
    }

    /// Restore the seed catalog, returning the number of books loaded
    pub fn reset_books(&self) -> usize {
        self.repository.books.reset()
    }
}
