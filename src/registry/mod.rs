//! The category registry: a flat, id-keyed view of the category forest.
//!
//! The registry is read-mostly, process-wide state. Lookups are total
//! functions — an unresolvable reference degrades to the designated fallback
//! category instead of failing, so downstream analytics always have a usable
//! node. The sole mutation path is the administrative batch factor update,
//! which validates the whole batch before applying it and replaces the global
//! instance by swapping in a fresh one.

mod data;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use once_cell::sync::Lazy;

use crate::domain::Category;
use crate::errors::{RegistryError, Result};

/// Id of the category every unresolvable reference degrades to.
pub const FALLBACK_CATEGORY_ID: &str = "miscellaneous-others";

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: HashMap<String, Category>,
    /// Authored order, for deterministic scans and listings.
    order: Vec<String>,
    /// Reverse index: parent id to direct child ids, built once.
    children: HashMap<String, Vec<String>>,
    /// Regional multipliers keyed by category id, then region code.
    regional: HashMap<String, HashMap<String, f64>>,
}

impl CategoryRegistry {
    /// Builds a registry after validating the forest invariants: unique ids,
    /// no dangling parents, acyclic parent chains, sane factors and
    /// proportions, and a present fallback node.
    pub fn new(
        categories: Vec<Category>,
        regional: Vec<(&str, &str, f64)>,
    ) -> Result<Self> {
        let mut map: HashMap<String, Category> = HashMap::with_capacity(categories.len());
        let mut order = Vec::with_capacity(categories.len());
        for category in categories {
            if let Some(factor) = category.emission_factor {
                if !factor.is_finite() || factor < 0.0 {
                    return Err(RegistryError::InvalidFactor {
                        id: category.id.clone(),
                        factor,
                    });
                }
            }
            if let Some(proportion) = category.proportion {
                if !proportion.is_finite() || !(0.0..=1.0).contains(&proportion) {
                    return Err(RegistryError::InvalidProportion {
                        id: category.id.clone(),
                        proportion,
                    });
                }
            }
            order.push(category.id.clone());
            if map.insert(category.id.clone(), category).is_some() {
                let id = order.pop().unwrap_or_default();
                return Err(RegistryError::DuplicateCategory(id));
            }
        }
        if !map.contains_key(FALLBACK_CATEGORY_ID) {
            return Err(RegistryError::MissingFallback(FALLBACK_CATEGORY_ID));
        }

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for id in &order {
            let category = &map[id];
            if let Some(parent_id) = category.parent_id.as_deref() {
                if !map.contains_key(parent_id) {
                    return Err(RegistryError::DanglingParent {
                        id: id.clone(),
                        parent: parent_id.to_string(),
                    });
                }
                children
                    .entry(parent_id.to_string())
                    .or_default()
                    .push(id.clone());
            }
        }
        for id in &order {
            let mut current = &map[id];
            let mut hops = 0usize;
            while let Some(parent_id) = current.parent_id.as_deref() {
                hops += 1;
                if hops > map.len() {
                    return Err(RegistryError::ParentCycle(id.clone()));
                }
                current = &map[parent_id];
            }
        }

        let mut regional_map: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for (category_id, region, multiplier) in regional {
            if !map.contains_key(category_id) {
                return Err(RegistryError::UnknownCategory(category_id.to_string()));
            }
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(RegistryError::InvalidFactor {
                    id: category_id.to_string(),
                    factor: multiplier,
                });
            }
            regional_map
                .entry(category_id.to_string())
                .or_default()
                .insert(region.to_string(), multiplier);
        }

        Ok(Self {
            categories: map,
            order,
            children,
            regional: regional_map,
        })
    }

    /// The registry shipped with the application.
    pub fn builtin() -> Self {
        Self::new(data::builtin_categories(), data::regional_adjustments())
            .expect("builtin category data upholds the registry invariants")
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Exact display-name lookup. Names are not unique across the forest;
    /// the first match in authored order wins.
    pub fn get_by_name(&self, name: &str) -> Option<&Category> {
        self.order
            .iter()
            .map(|id| &self.categories[id])
            .find(|category| category.name == name)
    }

    pub fn fallback(&self) -> &Category {
        &self.categories[FALLBACK_CATEGORY_ID]
    }

    /// Total lookup by id or display name. Unresolvable references degrade
    /// to the fallback node; the miss is logged with the nearest known name
    /// so silent misclassification stays observable.
    pub fn resolve(&self, key: &str) -> &Category {
        if let Some(category) = self.get(key).or_else(|| self.get_by_name(key)) {
            return category;
        }
        tracing::debug!(
            category = key,
            suggestion = %self.nearest_name(key).unwrap_or_default(),
            "unresolvable category reference, using fallback"
        );
        self.fallback()
    }

    /// Name lookup that never fails: unmatched names resolve to the fallback
    /// node so malformed or legacy labels degrade instead of erroring.
    pub fn find_by_name(&self, name: &str) -> &Category {
        match self.get_by_name(name) {
            Some(category) => category,
            None => {
                tracing::debug!(
                    name,
                    suggestion = %self.nearest_name(name).unwrap_or_default(),
                    "no category with this name, using fallback"
                );
                self.fallback()
            }
        }
    }

    fn nearest_name(&self, key: &str) -> Option<String> {
        self.order
            .iter()
            .map(|id| &self.categories[id])
            .map(|category| {
                let score = strsim::jaro_winkler(key, &category.name)
                    .max(strsim::jaro_winkler(key, &category.id));
                (category, score)
            })
            .filter(|(_, score)| *score >= 0.85)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(category, _)| category.name.clone())
    }

    /// Follows the parent chain to the root. Roots map to themselves.
    pub fn parent_category<'a>(&'a self, category: &'a Category) -> &'a Category {
        let mut current = category;
        while let Some(parent) = current
            .parent_id
            .as_deref()
            .and_then(|id| self.categories.get(id))
        {
            current = parent;
        }
        current
    }

    /// Reflexive ancestor test: true when `sub` is `sup` or descends from it.
    pub fn is_under(&self, sub: &Category, sup: &Category) -> bool {
        let mut current = sub;
        loop {
            if current.id == sup.id {
                return true;
            }
            match current
                .parent_id
                .as_deref()
                .and_then(|id| self.categories.get(id))
            {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Full descendant set of `category`, excluding the node itself.
    pub fn sub_categories(&self, category: &Category) -> Vec<&Category> {
        self.order
            .iter()
            .map(|id| &self.categories[id])
            .filter(|entry| entry.id != category.id && self.is_under(entry, category))
            .collect()
    }

    /// Direct children in authored order.
    pub fn children(&self, id: &str) -> Vec<&Category> {
        self.children
            .get(id)
            .map(|ids| ids.iter().map(|child| &self.categories[child]).collect())
            .unwrap_or_default()
    }

    /// All categories in authored order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.order.iter().map(|id| &self.categories[id])
    }

    /// Regional multiplier for a category/region pair; 1.0 when no override
    /// is defined.
    pub fn regional_adjustment(&self, category_id: &str, region: &str) -> f64 {
        self.regional
            .get(category_id)
            .and_then(|by_region| by_region.get(region))
            .copied()
            .unwrap_or(1.0)
    }

    /// Administrative batch update of emission factors.
    ///
    /// The whole batch is validated before any node is touched, so a bad
    /// entry cannot leave the registry half-updated. Returns the number of
    /// categories changed.
    pub fn update_emission_factors(&mut self, updates: &[(String, f64)]) -> Result<usize> {
        for (id, factor) in updates {
            if !self.categories.contains_key(id) {
                return Err(RegistryError::UnknownCategory(id.clone()));
            }
            if !factor.is_finite() || *factor < 0.0 {
                return Err(RegistryError::InvalidFactor {
                    id: id.clone(),
                    factor: *factor,
                });
            }
        }
        let today = Utc::now().date_naive();
        for (id, factor) in updates {
            if let Some(category) = self.categories.get_mut(id) {
                category.emission_factor = Some(*factor);
                category.last_updated = Some(today);
            }
        }
        tracing::info!(count = updates.len(), "emission factors updated");
        Ok(updates.len())
    }
}

static REGISTRY: Lazy<RwLock<Arc<CategoryRegistry>>> =
    Lazy::new(|| RwLock::new(Arc::new(CategoryRegistry::builtin())));

/// Current process-wide registry snapshot.
pub fn current() -> Arc<CategoryRegistry> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Applies a factor batch to the process-wide registry by swapping in an
/// updated copy; readers holding the previous snapshot are unaffected.
pub fn apply_factor_updates(updates: &[(String, f64)]) -> Result<usize> {
    let mut guard = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    let mut next = CategoryRegistry::clone(&guard);
    let applied = next.update_emission_factors(updates)?;
    *guard = Arc::new(next);
    Ok(applied)
}
