//! Categories repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryPayload},
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a category by ID
    pub async fn get_by_id(&self, category_id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name, shelf_no FROM categories WHERE category_id = $1",
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Check if a category name is already taken
    pub async fn name_exists(&self, category_name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE category_name = $1)",
        )
        .bind(category_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// List all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name, shelf_no FROM categories ORDER BY category_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Create a new category, returning the generated id
    pub async fn create(&self, category: &CategoryPayload) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO categories (category_name, shelf_no) VALUES ($1, $2) RETURNING category_id",
        )
        .bind(&category.category_name)
        .bind(category.shelf_no)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Overwrite name and shelf number of an existing category
    pub async fn update(&self, category_id: i32, category: &CategoryPayload) -> AppResult<()> {
        sqlx::query("UPDATE categories SET category_name = $1, shelf_no = $2 WHERE category_id = $3")
            .bind(&category.category_name)
            .bind(category.shelf_no)
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
