//! In-memory book store.
//!
//! The repository analog for this server: a single insertion-ordered `Vec`
//! of records plus a monotonic next-id counter, guarded by one mutex so the
//! multi-threaded axum runtime cannot race mutations. State lives for the
//! lifetime of the process; there is no persistence.

use std::sync::{Mutex, MutexGuard};

use crate::models::book::{Book, NewBook, SortKey, SortOrder};

/// Typed view of a partial update, built after input coercion.
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
}

#[derive(Debug)]
struct Inner {
    books: Vec<Book>,
    next_id: i64,
}

/// Process-lifetime collection of books behind a single lock.
#[derive(Debug)]
pub struct BookStore {
    inner: Mutex<Inner>,
}

const SEED: [(&str, &str, f64); 15] = [
    ("Spring Boot in Action", "Craig Walls", 39.99),
    ("Effective Java", "Joshua Bloch", 45.00),
    ("Clean Code", "Robert Martin", 42.50),
    ("Java Concurrency in Practice", "Brian Goetz", 49.99),
    ("Design Patterns", "Gang of Four", 54.99),
    ("Head First Java", "Kathy Sierra", 35.00),
    ("Spring in Action", "Craig Walls", 44.99),
    ("Clean Architecture", "Robert Martin", 39.99),
    ("Refactoring", "Martin Fowler", 47.50),
    ("The Pragmatic Programmer", "Andrew Hunt", 41.99),
    ("You Don't Know JS", "Kyle Simpson", 29.99),
    ("JavaScript: The Good Parts", "Douglas Crockford", 32.50),
    ("Eloquent JavaScript", "Marijn Haverbeke", 27.99),
    ("Python Crash Course", "Eric Matthes", 38.00),
    ("Automate the Boring Stuff", "Al Sweigart", 33.50),
];

impl BookStore {
    /// Create an empty store with the id counter at 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                books: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the fixed 15-record catalog, ids 1-15
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for (title, author, price) in SEED {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.books.push(Book {
                    id,
                    title: title.to_string(),
                    author: author.to_string(),
                    price,
                });
            }
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.lock().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().books.is_empty()
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<Book> {
        self.lock().books.clone()
    }

    /// First record with the given id, if any
    pub fn get(&self, id: i64) -> Option<Book> {
        self.lock().books.iter().find(|b| b.id == id).cloned()
    }

    /// Append a record and return the full updated catalog.
    ///
    /// A caller-supplied id is stored verbatim, colliding or not; the counter
    /// only fills in when the payload has none. Either way it advances by one.
    pub fn create(&self, new: NewBook) -> Vec<Book> {
        let mut inner = self.lock();
        let id = new.id.unwrap_or(inner.next_id);
        inner.next_id += 1;
        inner.books.push(Book {
            id,
            title: new.title,
            author: new.author,
            price: new.price,
        });
        inner.books.clone()
    }

    /// Case-insensitive substring match on title; empty query matches all
    pub fn search_title(&self, query: &str) -> Vec<Book> {
        let inner = self.lock();
        if query.is_empty() {
            return inner.books.clone();
        }

        let needle = query.to_lowercase();
        inner
            .books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records whose price falls within the given inclusive bounds.
    /// An absent bound imposes no constraint on that side.
    pub fn price_range(&self, min: Option<f64>, max: Option<f64>) -> Vec<Book> {
        self.lock()
            .books
            .iter()
            .filter(|b| {
                min.map_or(true, |m| b.price >= m) && max.map_or(true, |m| b.price <= m)
            })
            .cloned()
            .collect()
    }

    /// A sorted copy of the catalog; the stored order is untouched
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Book> {
        let mut books = self.lock().books.clone();
        books.sort_by(|a, b| {
            let ord = match key {
                SortKey::Title => a.title.cmp(&b.title),
                SortKey::Author => a.author.cmp(&b.author),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        books
    }

    /// Overwrite title, author and price of the record with the given id.
    /// The stored id is preserved; any id in the payload is ignored.
    pub fn replace(&self, id: i64, update: &NewBook) -> Option<Book> {
        let mut inner = self.lock();
        let book = inner.books.iter_mut().find(|b| b.id == id)?;
        book.title = update.title.clone();
        book.author = update.author.clone();
        book.price = update.price;
        Some(book.clone())
    }

    /// Apply a partial update in place
    pub fn update(&self, id: i64, changes: BookChanges) -> Option<Book> {
        let mut inner = self.lock();
        let book = inner.books.iter_mut().find(|b| b.id == id)?;
        if let Some(title) = changes.title {
            book.title = title;
        }
        if let Some(author) = changes.author {
            book.author = author;
        }
        if let Some(price) = changes.price {
            book.price = price;
        }
        Some(book.clone())
    }

    /// Remove the record with the given id; returns false when absent
    pub fn delete(&self, id: i64) -> bool {
        let mut inner = self.lock();
        match inner.books.iter().position(|b| b.id == id) {
            Some(pos) => {
                inner.books.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
