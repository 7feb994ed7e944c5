//! Category registry with per-name enable/disable

use crate::base::CommentCategory;
use crate::categories;
use std::collections::HashSet;
use thiserror::Error;

/// A category name that no registered category carries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown comment category: {0:?}")]
pub struct UnknownCategory(pub String);

/// Ordered set of comment categories
pub struct CategoryRegistry {
    categories: Vec<Box<dyn CommentCategory>>,
    disabled: HashSet<String>,
}

impl CategoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            disabled: HashSet::new(),
        }
    }

    /// Registry holding the built-in catalog
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for category in categories::builtin() {
            registry.register(category);
        }
        registry
    }

    /// Register a category; a category with the same name is replaced in place
    pub fn register(&mut self, category: Box<dyn CommentCategory>) {
        match self
            .categories
            .iter()
            .position(|c| c.name() == category.name())
        {
            Some(index) => self.categories[index] = category,
            None => self.categories.push(category),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name() == name)
    }

    pub fn disable(&mut self, name: &str) -> Result<(), UnknownCategory> {
        if !self.contains(name) {
            return Err(UnknownCategory(name.to_string()));
        }
        self.disabled.insert(name.to_string());
        Ok(())
    }

    pub fn enable(&mut self, name: &str) -> Result<(), UnknownCategory> {
        if !self.contains(name) {
            return Err(UnknownCategory(name.to_string()));
        }
        self.disabled.remove(name);
        Ok(())
    }

    /// Re-enable everything
    pub fn enable_all(&mut self) {
        self.disabled.clear();
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.contains(name) && !self.disabled.contains(name)
    }

    /// Enabled categories in registration order
    pub fn active(&self) -> impl Iterator<Item = &dyn CommentCategory> {
        self.categories
            .iter()
            .filter(|c| !self.disabled.contains(c.name()))
            .map(|c| &**c)
    }

    /// All registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name()).collect()
    }

    /// Get number of registered categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryRegistry")
            .field("categories", &self.names())
            .field("disabled", &self.disabled)
            .finish()
    }
}
