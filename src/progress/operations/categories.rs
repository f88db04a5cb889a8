use serde::{Deserialize, Serialize};

use crate::progress::ProgressStore;
use crate::store::{self, keys, Persistence, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Informational only; membership is decided by `Word::category_id`.
    pub word_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub word_ids: Option<Vec<String>>,
}

impl CategoryUpdate {
    fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(icon) = self.icon {
            category.icon = icon;
        }
        if let Some(word_ids) = self.word_ids {
            category.word_ids = word_ids;
        }
    }
}

impl<P: Persistence> ProgressStore<P> {
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn add_category(&mut self, input: NewCategory) -> Result<Category, StoreError> {
        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            icon: input.icon,
            word_ids: Vec::new(),
        };
        let mut categories = self.categories.clone();
        categories.push(category.clone());
        self.commit_categories(categories)?;
        tracing::debug!(category_id = %category.id, "Category added");
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        category_id: &str,
        update: CategoryUpdate,
    ) -> Result<Option<Category>, StoreError> {
        let Some(index) = self.categories.iter().position(|c| c.id == category_id) else {
            return Ok(None);
        };
        let mut categories = self.categories.clone();
        update.apply_to(&mut categories[index]);
        let updated = categories[index].clone();
        self.commit_categories(categories)?;
        Ok(Some(updated))
    }

    /// Removes the category only. Words pointing at it keep their `category_id`.
    pub fn delete_category(&mut self, category_id: &str) -> Result<bool, StoreError> {
        let mut categories = self.categories.clone();
        categories.retain(|c| c.id != category_id);
        let removed = categories.len() != self.categories.len();
        self.commit_categories(categories)?;
        if removed {
            tracing::debug!(category_id, "Category deleted");
        }
        Ok(removed)
    }

    fn commit_categories(&mut self, categories: Vec<Category>) -> Result<(), StoreError> {
        store::save_value(&mut self.backend, keys::CATEGORIES, &categories)?;
        self.categories = categories;
        Ok(())
    }
}
