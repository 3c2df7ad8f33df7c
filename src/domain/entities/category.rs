//! Product category entity.

/// A catalog category. Owns a collection of products via `category_id`.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}
