//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookPatch, NewBook, PriceRangeQuery, SearchQuery, SortQuery},
};

/// List all books in insertion order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list())
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(id)?;
    Ok(Json(book))
}

/// Create a new book
///
/// Returns the full updated catalog. A caller-supplied id is stored
/// verbatim; no uniqueness check is made.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created, full catalog returned", body = Vec<Book>)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(new): Json<NewBook>,
) -> (StatusCode, Json<Vec<Book>>) {
    let books = state.services.books.create(new);
    (StatusCode::CREATED, Json(books))
}

/// Search books by title substring
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(
        ("title" = Option<String>, Query, description = "Case-insensitive title substring (default: match all)")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.books.search(query.title.as_deref()))
}

/// Filter books by price range
#[utoipa::path(
    get,
    path = "/books/price-range",
    tag = "books",
    params(
        ("minPrice" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("maxPrice" = Option<f64>, Query, description = "Inclusive upper price bound")
    ),
    responses(
        (status = 200, description = "Books within the bounds", body = Vec<Book>)
    )
)]
pub async fn books_by_price(
    State(state): State<crate::AppState>,
    Query(query): Query<PriceRangeQuery>,
) -> Json<Vec<Book>> {
    Json(state.services.books.by_price(query.min_price, query.max_price))
}

/// List books sorted by title or author
#[utoipa::path(
    get,
    path = "/books/sorted",
    tag = "books",
    params(
        ("sortBy" = Option<String>, Query, description = "Sort key: title or author (default: title)"),
        ("order" = Option<String>, Query, description = "Sort direction: asc or desc (default: asc)")
    ),
    responses(
        (status = 200, description = "Sorted books", body = Vec<Book>)
    )
)]
pub async fn sorted_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SortQuery>,
) -> Json<Vec<Book>> {
    Json(
        state
            .services
            .books
            .sorted(query.sort_by.as_deref(), query.order.as_deref()),
    )
}

/// Replace a book's title, author and price
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = NewBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(update): Json<NewBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.replace(id, update)?;
    Ok(Json(updated))
}

/// Partially update a book
///
/// Any subset of title, author and price; price also accepts a numeric
/// string. A malformed price fails the whole request.
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed price value"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<BookPatch>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.patch(id, patch)?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
