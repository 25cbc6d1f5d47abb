use footprint_core::{CategoryRegistry, FALLBACK_CATEGORY_ID};

#[test]
fn is_under_is_reflexive_for_every_category() {
    let registry = CategoryRegistry::builtin();
    for category in registry.categories() {
        assert!(
            registry.is_under(category, category),
            "{} is not under itself",
            category.id
        );
    }
}

#[test]
fn is_under_is_transitive_along_the_groceries_chain() {
    let registry = CategoryRegistry::builtin();
    let meat = registry
        .get("food-and-dining-groceries-meat-products")
        .expect("meat products");
    let groceries = registry.get("food-and-dining-groceries").expect("groceries");
    let food = registry.get("food-and-dining").expect("food and dining");

    assert!(registry.is_under(meat, groceries));
    assert!(registry.is_under(groceries, food));
    assert!(registry.is_under(meat, food));
}

#[test]
fn is_under_rejects_unrelated_branches() {
    let registry = CategoryRegistry::builtin();
    let meat = registry
        .get("food-and-dining-groceries-meat-products")
        .expect("meat products");
    let shopping = registry.get("shopping").expect("shopping");
    assert!(!registry.is_under(meat, shopping));
    assert!(!registry.is_under(shopping, meat));
}

#[test]
fn parent_category_is_idempotent() {
    let registry = CategoryRegistry::builtin();
    for category in registry.categories() {
        let root = registry.parent_category(category);
        let twice = registry.parent_category(root);
        assert_eq!(root.id, twice.id, "root resolution of {} is unstable", category.id);
        assert!(root.is_root());
    }
}

#[test]
fn sub_categories_excludes_the_node_itself() {
    let registry = CategoryRegistry::builtin();
    let food = registry.get("food-and-dining").expect("food and dining");
    let descendants = registry.sub_categories(food);
    assert!(descendants.iter().all(|c| c.id != food.id));
    let ids: Vec<&str> = descendants.iter().map(|c| c.id.as_str()).collect();
    assert!(ids.contains(&"food-and-dining-groceries"));
    assert!(ids.contains(&"food-and-dining-groceries-meat-products"));
    assert!(ids.contains(&"food-and-dining-dining-out"));
    assert!(!ids.contains(&"shopping"));
}

#[test]
fn children_returns_direct_children_only() {
    let registry = CategoryRegistry::builtin();
    let ids: Vec<&str> = registry
        .children("food-and-dining")
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "food-and-dining-groceries",
            "food-and-dining-dining-out",
            "food-and-dining-delivery-services",
        ]
    );
}

#[test]
fn name_lookup_falls_back_instead_of_failing() {
    let registry = CategoryRegistry::builtin();
    assert_eq!(registry.find_by_name("Seafood").id, "food-and-dining-groceries-seafood");
    assert_eq!(registry.find_by_name("Legacy Label").id, FALLBACK_CATEGORY_ID);
}
