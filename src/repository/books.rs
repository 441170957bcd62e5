//! In-memory book store
//!
//! All records and the identifier counter sit behind one mutex. Every
//! operation takes the lock once, for its whole duration, and never awaits
//! while holding it.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use super::seed::seed_books;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

struct Catalog {
    books: BTreeMap<i64, Book>,
    next_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Catalog {
    fn insert(&mut self, book: Book) -> Book {
        let book = book.with_id(self.next_id);
        self.next_id += 1;
        self.books.insert(book.id, book.clone());
        book
    }
}

#[derive(Clone, Default)]
pub struct BooksRepository {
    catalog: Arc<Mutex<Catalog>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Catalog> {
        // No operation panics halfway through a mutation, so a poisoned
        // catalog is still consistent.
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All books, ordered by identifier
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.lock()
            .books
            .get(&id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    /// Store a new book under the next identifier, ignoring `book.id`
    pub fn create(&self, book: Book) -> AppResult<Book> {
        let created = self.lock().insert(book);
        tracing::info!("Created book id={}", created.id);
        Ok(created)
    }

    /// Replace the book stored under `id`.
    ///
    /// `payload` is the decoded request body. Existence is checked first, so
    /// an unknown `id` is reported as not found even when the body failed to
    /// decode.
    pub fn update(&self, id: i64, payload: AppResult<Book>) -> AppResult<Book> {
        let mut catalog = self.lock();
        let slot = catalog.books.get_mut(&id).ok_or_else(AppError::book_not_found)?;
        let book = payload?.with_id(id);
        *slot = book.clone();
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.lock()
            .books
            .remove(&id)
            .ok_or_else(AppError::book_not_found)?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    /// Drop every record, restart the counter and load the seed books
    pub fn reset(&self) -> usize {
        let mut catalog = self.lock();
        *catalog = Catalog::default();
        for book in seed_books() {
            catalog.insert(book);
        }
        let count = catalog.books.len();
        tracing::info!("Catalog reset to {} seed books", count);
        count
    }

    pub fn len(&self) -> usize {
        self.lock().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
