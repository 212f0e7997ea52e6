//! Book inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::SuccessResponse;

/// Add a book to the inventory
#[utoipa::path(
    post,
    path = "/Books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = SuccessResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    state.services.books.create(book).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(201, "Book added successfully")),
    ))
}

/// List all books
#[utoipa::path(
    get,
    path = "/Books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = [Book])
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/Books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_isbn(&isbn).await?;
    Ok(Json(book))
}

/// List books in a category
#[utoipa::path(
    get,
    path = "/Books/Category/{category_id}",
    tag = "books",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Books in the category", body = [Book]),
        (status = 404, description = "No books found for this category", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books_by_category(
    State(state): State<crate::AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_by_category(category_id).await?;
    Ok(Json(books))
}

/// Update a book's title and author
#[utoipa::path(
    put,
    path = "/Books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = SuccessResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.books.update(&isbn, book).await?;
    Ok(Json(SuccessResponse::new(200, "Book updated successfully")))
}

/// Delete a book by ISBN
#[utoipa::path(
    delete,
    path = "/Books/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book deleted", body = SuccessResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.books.delete(&isbn).await?;
    Ok(Json(SuccessResponse::new(200, "Book deleted successfully")))
}
