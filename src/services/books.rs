//! Book catalog service
//!
//! Maps store outcomes onto application results: absence becomes a
//! not-found error, malformed patch input becomes a bad-request error
//! before any field is touched.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPatch, NewBook, PriceInput, SortKey, SortOrder},
    store::{BookChanges, BookStore},
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    /// All books in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.store.list()
    }

    /// Get a book by id
    pub fn get(&self, id: i64) -> AppResult<Book> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Append a new book and return the full updated catalog
    pub fn create(&self, new: NewBook) -> Vec<Book> {
        tracing::info!("Creating book id={:?} title={:?}", new.id, new.title);
        self.store.create(new)
    }

    /// Case-insensitive title search; an absent query returns everything
    pub fn search(&self, title: Option<&str>) -> Vec<Book> {
        self.store.search_title(title.unwrap_or(""))
    }

    /// Filter by inclusive price bounds
    pub fn by_price(&self, min: Option<f64>, max: Option<f64>) -> Vec<Book> {
        self.store.price_range(min, max)
    }

    /// Sorted copy of the catalog. Unknown keys sort by title, unknown
    /// directions sort ascending.
    pub fn sorted(&self, sort_by: Option<&str>, order: Option<&str>) -> Vec<Book> {
        let key = sort_by.map_or(SortKey::Title, SortKey::from);
        let order = order.map_or(SortOrder::Asc, SortOrder::from);
        self.store.sorted(key, order)
    }

    /// Full update: overwrite title, author and price, keeping the stored id
    pub fn replace(&self, id: i64, update: NewBook) -> AppResult<Book> {
        self.store
            .replace(id, &update)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Partial update. Price input is coerced first, so a malformed value
    /// fails before any field is applied.
    pub fn patch(&self, id: i64, patch: BookPatch) -> AppResult<Book> {
        let changes = BookChanges {
            title: patch.title,
            author: patch.author,
            price: patch.price.map(coerce_price).transpose()?,
        };
        self.store
            .update(id, changes)
            .ok_or_else(|| AppError::NotFound(format!("No book with id {}", id)))
    }

    /// Delete a book permanently
    pub fn delete(&self, id: i64) -> AppResult<()> {
        if self.store.delete(id) {
            tracing::info!("Deleted book id={}", id);
            Ok(())
        } else {
            Err(AppError::NotFound(format!("No book with id {}", id)))
        }
    }
}

/// Accept a numeric price, or a string holding one ("19.99")
fn coerce_price(input: PriceInput) -> AppResult<f64> {
    match input {
        PriceInput::Number(value) => Ok(value),
        PriceInput::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid price value: {:?}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BooksService {
        BooksService::new(Arc::new(BookStore::seeded()))
    }

    #[test]
    fn test_get_absent_is_not_found() {
        let books = service();
        assert!(matches!(books.get(999), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_patch_coerces_string_price() {
        let books = service();
        let patch = BookPatch {
            price: Some(PriceInput::Text("19.99".to_string())),
            ..Default::default()
        };
        let updated = books.patch(1, patch).unwrap();
        assert_eq!(updated.price, 19.99);
    }

    #[test]
    fn test_patch_rejects_unparseable_price() {
        let books = service();
        let patch = BookPatch {
            title: Some("Should Not Apply".to_string()),
            price: Some(PriceInput::Text("abc".to_string())),
            ..Default::default()
        };
        assert!(matches!(books.patch(1, patch), Err(AppError::BadRequest(_))));
        // No partial application.
        assert_eq!(books.get(1).unwrap().title, "Spring Boot in Action");
    }

    #[test]
    fn test_patch_author_updates_author() {
        let books = service();
        let patch = BookPatch {
            author: Some("Uncle Bob".to_string()),
            ..Default::default()
        };
        let updated = books.patch(3, patch).unwrap();
        assert_eq!(updated.author, "Uncle Bob");
        assert_eq!(updated.title, "Clean Code");
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let books = service();
        books.delete(5).unwrap();
        assert!(matches!(books.get(5), Err(AppError::NotFound(_))));
        assert!(matches!(books.delete(5), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_sorted_author_key_is_dispatched() {
        let books = service();
        let by_author = books.sorted(Some("author"), None);
        let by_title = books.sorted(Some("title"), None);
        assert_ne!(by_author, by_title);
        assert_eq!(by_author[0].author, "Al Sweigart");
    }
}
