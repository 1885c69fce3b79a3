//! Query condition model.
//!
//! Filter conditions are built as a small tagged-variant type and compiled
//! to the store's native filter syntax at the repository boundary. Dotted
//! field paths (`typeOfGood.typeOf`, `project.id`) pass through verbatim.

use bson::{doc, Bson, Document};

/// A query condition over one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Field presence or absence.
    Exists { field: String, exists: bool },
    /// Strict less-than comparison.
    LessThan { field: String, value: Bson },
    /// Field equality.
    Equals { field: String, value: Bson },
    /// Conjunction of conditions.
    And(Vec<Filter>),
}

impl Filter {
    pub fn exists(field: impl Into<String>) -> Self {
        Self::Exists { field: field.into(), exists: true }
    }

    pub fn not_exists(field: impl Into<String>) -> Self {
        Self::Exists { field: field.into(), exists: false }
    }

    pub fn less_than(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::LessThan { field: field.into(), value: value.into() }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::Equals { field: field.into(), value: value.into() }
    }

    pub fn and(conditions: impl IntoIterator<Item = Filter>) -> Self {
        Self::And(conditions.into_iter().collect())
    }

    /// Compile to a BSON filter document.
    pub fn compile(&self) -> Document {
        match self {
            Filter::Exists { field, exists } => {
                let field = field.as_str();
                doc! { field: { "$exists": *exists } }
            }
            Filter::LessThan { field, value } => {
                let field = field.as_str();
                doc! { field: { "$lt": value.clone() } }
            }
            Filter::Equals { field, value } => {
                let field = field.as_str();
                doc! { field: value.clone() }
            }
            Filter::And(conditions) => {
                if conditions.is_empty() {
                    return Document::new();
                }
                let parts: Vec<Bson> = conditions
                    .iter()
                    .map(|c| Bson::Document(c.compile()))
                    .collect();
                doc! { "$and": parts }
            }
        }
    }
}

impl From<&Filter> for Document {
    fn from(filter: &Filter) -> Self {
        filter.compile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::DateTime;

    #[test]
    fn test_exists_compiles_to_exists_operator() {
        let filter = Filter::exists("project.id");
        assert_eq!(filter.compile(), doc! { "project.id": { "$exists": true } });

        let filter = Filter::not_exists("project.id");
        assert_eq!(filter.compile(), doc! { "project.id": { "$exists": false } });
    }

    #[test]
    fn test_less_than_compiles_to_lt_operator() {
        let now = DateTime::from_millis(1_700_000_000_000);
        let filter = Filter::less_than("ownedThrough", now);
        assert_eq!(filter.compile(), doc! { "ownedThrough": { "$lt": now } });
    }

    #[test]
    fn test_equals_compiles_to_plain_equality() {
        let filter = Filter::equals("typeOfGood.typeOf", "ProgramMembership");
        assert_eq!(
            filter.compile(),
            doc! { "typeOfGood.typeOf": "ProgramMembership" }
        );
    }

    #[test]
    fn test_and_compiles_to_and_operator() {
        let now = DateTime::from_millis(1_700_000_000_000);
        let filter = Filter::and([
            Filter::equals("project.id", "main"),
            Filter::less_than("ownedFrom", now),
        ]);
        assert_eq!(
            filter.compile(),
            doc! { "$and": [
                { "project.id": "main" },
                { "ownedFrom": { "$lt": now } },
            ] }
        );
    }

    #[test]
    fn test_empty_and_matches_everything() {
        assert_eq!(Filter::and([]).compile(), Document::new());
    }
}
