//! The static set of quiz cases.

mod builtin;

use crate::error::{CatalogError, Result};
use crate::resolver::{AliasTable, Resolution};
use crate::types::{Case, Category};
use std::collections::HashSet;

/// Immutable, validated collection of cases plus the alias table built
/// from them.
#[derive(Debug, Clone)]
pub struct Catalog {
    cases: Vec<Case>,
    aliases: AliasTable,
}

impl Catalog {
    /// Validate and load a list of cases.
    pub fn new(cases: Vec<Case>) -> Result<Self> {
        if cases.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen_ids = HashSet::new();
        for (position, case) in cases.iter().enumerate() {
            if case.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { position });
            }
            if !seen_ids.insert(case.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: case.id.clone(),
                    position,
                });
            }
        }

        Ok(Self::assemble(cases))
    }

    /// Load a catalog from a JSON array of cases.
    pub fn from_json(content: &str) -> Result<Self> {
        let cases: Vec<Case> = serde_json::from_str(content)?;
        Self::new(cases)
    }

    /// The shipped congenital heart disease cases.
    pub fn builtin() -> Self {
        Self::assemble(builtin::cases())
    }

    fn assemble(cases: Vec<Case>) -> Self {
        // Ids and names first so exact names always beat a partial alias.
        let mut aliases = AliasTable::new();
        for case in &cases {
            aliases.insert(&case.id, &case.id);
            aliases.insert(&case.name, &case.id);
        }
        for case in &cases {
            for alias in &case.aliases {
                aliases.insert(alias, &case.id);
            }
        }
        Self { cases, aliases }
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case at a main-sequence position.
    pub fn at(&self, index: usize) -> Option<&Case> {
        self.cases.get(index)
    }

    pub fn get(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.cases.iter().position(|c| c.id == id)
    }

    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.get(id).map(|c| c.category)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Case> {
        self.cases.iter().filter(|c| c.category == category).collect()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Resolve free text against this catalog's alias table.
    pub fn resolve(&self, raw: &str) -> Resolution {
        self.aliases.resolve(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        let revalidated = Catalog::new(catalog.cases().to_vec()).unwrap();
        assert_eq!(revalidated.len(), 12);
    }

    #[test]
    fn builtin_order_is_stable() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .cases()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "asd", "vsd", "pda", "coa", "ps", "tof", "tga", "truncus", "tapvr", "avsd",
                "ebstein", "hlhs"
            ]
        );
    }

    #[test]
    fn every_category_has_cases() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(!catalog.by_category(category).is_empty(), "{category:?}");
        }
        assert_eq!(catalog.by_category(Category::AcyanoticShunt).len(), 3);
        assert_eq!(catalog.by_category(Category::CyanoticOther).len(), 4);
    }

    #[test]
    fn every_canonical_name_resolves_to_its_case() {
        let catalog = Catalog::builtin();
        for case in catalog.cases() {
            assert_eq!(catalog.resolve(&case.name).case_id(), Some(case.id.as_str()));
            assert_eq!(catalog.resolve(&case.id).case_id(), Some(case.id.as_str()));
        }
    }

    #[test]
    fn abbreviation_and_full_name_resolve_alike() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve("ASD").case_id(), Some("asd"));
        assert_eq!(catalog.resolve("Atrial Septal Defect").case_id(), Some("asd"));
        assert_eq!(catalog.resolve("d-TGA").case_id(), Some("tga"));
        assert_eq!(catalog.resolve("AV canal").case_id(), Some("avsd"));
        assert_eq!(catalog.resolve("Tetralogy").case_id(), Some("tof"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut cases = Catalog::builtin().cases().to_vec();
        cases.push(cases[0].clone());
        let err = Catalog::new(cases).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { ref id, position: 12 } if id == "asd"));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn rejects_blank_id() {
        let mut cases = Catalog::builtin().cases().to_vec();
        cases[2].id = "  ".to_string();
        assert!(matches!(
            Catalog::new(cases),
            Err(CatalogError::EmptyId { position: 2 })
        ));
    }

    #[test]
    fn json_catalog_round_trips_builtin() {
        let json = serde_json::to_string(Catalog::builtin().cases()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.cases(), Catalog::builtin().cases());
    }

    #[test]
    fn json_catalog_requires_five_stages() {
        let mut value = serde_json::to_value(&Catalog::builtin().cases()[..1]).unwrap();
        value[0]["stages"].as_array_mut().unwrap().pop();
        let err = Catalog::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidJson(_)));
    }

    #[test]
    fn category_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_of("tof"), Some(Category::CyanoticConotruncal));
        assert_eq!(catalog.category_of("nope"), None);
        assert_eq!(catalog.position("hlhs"), Some(11));
    }
}
