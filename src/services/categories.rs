//! Category management

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, CategoryPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new category. The name pre-check and the store's UNIQUE
    /// constraint both guard against duplicates; the constraint wins a
    /// race between two concurrent creations.
    pub async fn create(&self, category: CategoryPayload) -> AppResult<i32> {
        if self
            .repository
            .categories
            .name_exists(&category.category_name)
            .await?
        {
            return Err(AppError::Conflict(
                "Category name already exists".to_string(),
            ));
        }

        self.repository.categories.create(&category).await
    }

    /// List all categories
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.list().await
    }

    /// Overwrite name and shelf number of an existing category
    pub async fn update(&self, category_id: i32, category: CategoryPayload) -> AppResult<()> {
        self.repository.categories.get_by_id(category_id).await?;
        self.repository.categories.update(category_id, &category).await
    }
}
