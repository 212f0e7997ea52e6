//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, categories, health, librarians, log_operations};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "0.1.0",
        description = "Library Management Record-Keeping REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        // Librarians
        librarians::create_librarian,
        librarians::list_librarians,
        librarians::get_librarian,
        librarians::delete_librarian,
        // Books
        books::create_book,
        books::list_books,
        books::get_book,
        books::list_books_by_category,
        books::update_book,
        books::delete_book,
        // Categories
        categories::create_category,
        categories::list_categories,
        categories::update_category,
        // Log operations
        log_operations::create_log_operation,
        log_operations::list_log_operations,
        log_operations::get_log_operation,
        log_operations::update_log_operation,
        log_operations::delete_log_operation,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            // Librarians
            crate::models::librarian::Librarian,
            crate::models::librarian::CreateLibrarian,
            crate::models::librarian::LibrarianBase,
            crate::models::librarian::User,
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            // Categories
            crate::models::category::Category,
            crate::models::category::CategoryPayload,
            // Log operations
            crate::models::log_operation::LogOperation,
            crate::models::log_operation::CreateLogOperation,
            crate::models::log_operation::UpdateLogOperation,
            // Envelopes
            crate::api::SuccessResponse,
            crate::error::ErrorResponse,
            // Health
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "auth", description = "Librarian login"),
        (name = "librarians", description = "Librarian account management"),
        (name = "books", description = "Book inventory management"),
        (name = "categories", description = "Book category management"),
        (name = "log_operations", description = "Borrow/return log management"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
