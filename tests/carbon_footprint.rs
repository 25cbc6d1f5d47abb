use chrono::NaiveDate;
use footprint_core::{
    CarbonCalculator, CategoryRegistry, Filters, Transaction, DEFAULT_REGION,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn expense(id: &str, on: NaiveDate, amount: f64, category: &str) -> Transaction {
    Transaction::new(id, on, -amount, category, "card")
}

fn income(id: &str, on: NaiveDate, amount: f64) -> Transaction {
    Transaction::new(id, on, amount, "income-salary-and-wages", "bank")
}

#[test]
fn income_never_contributes_to_total_emissions() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![
        income("salary", date(2023, 1, 25), 1000.0),
        expense("meat", date(2023, 1, 5), 100.0, "food-and-dining-groceries-meat-products"),
    ];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    assert!((analysis.total_emissions - 300.0).abs() < 1e-9);
}

#[test]
fn apportionment_matches_the_authored_proportions() {
    let registry = CategoryRegistry::builtin();
    // meat: 0.3 * 3.0, seafood: 0.2 * 2.5 per unit; regional default 1.0.
    let transactions = vec![expense(
        "groceries",
        date(2023, 1, 5),
        100.0,
        "food-and-dining-groceries",
    )];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    let meat_and_seafood = 100.0 * 0.3 * 3.0 + 100.0 * 0.2 * 2.5;
    assert!(analysis.total_emissions > meat_and_seafood);
    assert!((analysis.total_emissions - 161.0).abs() < 1e-9);
}

#[test]
fn unresolvable_category_uses_the_fallback_factor() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![expense("odd", date(2023, 1, 5), 100.0, "totally-unknown-id")];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    // Fallback "Others" carries factor 0.25.
    assert!((analysis.total_emissions - 25.0).abs() < 1e-9);
    assert_eq!(analysis.breakdown.len(), 1);
    assert_eq!(analysis.breakdown[0].category, "Others");
}

#[test]
fn monthly_average_divides_by_distinct_months() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![
        expense("jan-1", date(2023, 1, 5), 100.0, "food-and-dining-groceries-meat-products"),
        expense("jan-2", date(2023, 1, 20), 100.0, "food-and-dining-groceries-meat-products"),
        expense("feb", date(2023, 2, 5), 100.0, "food-and-dining-groceries-meat-products"),
    ];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    assert!((analysis.total_emissions - 900.0).abs() < 1e-9);
    assert!((analysis.monthly_average - 450.0).abs() < 1e-9);
}

#[test]
fn income_months_widen_the_monthly_average_denominator() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![
        expense("jan", date(2023, 1, 5), 100.0, "food-and-dining-groceries-meat-products"),
        expense("feb", date(2023, 2, 5), 100.0, "food-and-dining-groceries-meat-products"),
        income("march-salary", date(2023, 3, 25), 2000.0),
    ];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    assert!((analysis.monthly_average - 600.0 / 3.0).abs() < 1e-9);
}

#[test]
fn breakdown_is_sorted_descending_with_percentages() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![
        expense("meat", date(2023, 1, 5), 100.0, "food-and-dining-groceries-meat-products"),
        expense("bus", date(2023, 1, 6), 100.0, "transport-public-transport"),
    ];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    assert_eq!(analysis.breakdown.len(), 2);
    assert_eq!(analysis.breakdown[0].category, "Meat Products");
    assert!(analysis.breakdown[0].emissions >= analysis.breakdown[1].emissions);
    let pct_sum: f64 = analysis.breakdown.iter().map(|b| b.percentage).sum();
    assert!((pct_sum - 100.0).abs() < 1e-9);
}

#[test]
fn all_income_yields_single_insufficient_data_recommendation() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![income("salary", date(2023, 1, 25), 1000.0)];
    let analysis = CarbonCalculator::analyze(&registry, &transactions, DEFAULT_REGION);
    assert_eq!(analysis.total_emissions, 0.0);
    assert_eq!(analysis.recommendations.len(), 1);
    assert!(analysis.recommendations[0].contains("Not enough data"));
}

#[test]
fn empty_input_behaves_like_all_income() {
    let registry = CategoryRegistry::builtin();
    let analysis = CarbonCalculator::analyze(&registry, &[], DEFAULT_REGION);
    assert_eq!(analysis.total_emissions, 0.0);
    assert_eq!(analysis.monthly_average, 0.0);
    assert!(analysis.breakdown.is_empty());
    assert_eq!(analysis.recommendations.len(), 1);
}

#[test]
fn region_is_echoed_and_applied() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![expense(
        "coal",
        date(2023, 1, 5),
        50.0,
        "housing-and-utilities-electricity-coal-based",
    )];
    let eu = CarbonCalculator::analyze(&registry, &transactions, "EU");
    let pl = CarbonCalculator::analyze(&registry, &transactions, "PL");
    assert_eq!(eu.region, "EU");
    assert_eq!(pl.region, "PL");
    assert!((pl.total_emissions - eu.total_emissions * 1.2).abs() < 1e-9);
}

#[test]
fn monthly_footprint_series_is_sorted_and_split_by_direction() {
    let registry = CategoryRegistry::builtin();
    let transactions = vec![
        expense("feb", date(2023, 2, 5), 100.0, "food-and-dining-groceries-meat-products"),
        income("jan-salary", date(2023, 1, 25), 1500.0),
        expense("jan", date(2023, 1, 5), 40.0, "transport-public-transport"),
    ];
    let series = CarbonCalculator::monthly_footprint(&registry, &transactions, DEFAULT_REGION);
    assert_eq!(series.len(), 2);
    assert_eq!((series[0].year, series[0].month), (2023, 1));
    assert!((series[0].income - 1500.0).abs() < 1e-9);
    assert!((series[0].expenses - 40.0).abs() < 1e-9);
    assert!((series[0].carbon - 2.0).abs() < 1e-9);
    assert_eq!((series[1].year, series[1].month), (2023, 2));
    assert!((series[1].carbon - 300.0).abs() < 1e-9);
}

#[test]
fn snapshot_shaped_json_round_trips() {
    let raw = r#"{
        "id": "t1",
        "date": "2023-12-01",
        "description": "Grocery run",
        "amount": -42.5,
        "category": "food-and-dining-groceries",
        "account": "checking"
    }"#;
    let tx: Transaction = serde_json::from_str(raw).expect("snapshot shape deserializes");
    assert_eq!(tx.date, Some(date(2023, 12, 1)));
    assert!(tx.is_expense());

    let filters: Filters = serde_json::from_str(
        r#"{"dateRange": {"start": "2023-01-01", "end": "2023-12-31"}, "account": "checking"}"#,
    )
    .expect("filter shape deserializes");
    assert!(filters.date_range.is_some());
    assert_eq!(filters.account.as_deref(), Some("checking"));

    let back = serde_json::to_string(&tx).expect("serializes");
    let again: Transaction = serde_json::from_str(&back).expect("round trip");
    assert_eq!(again, tx);
}
