//! Carbon footprint estimation over categorized transactions.
//!
//! Emission factors are illustrative estimates, not audited figures. The
//! calculator is deliberately total: missing data routes to the fallback
//! category or a zero contribution, never an error, so a partial or
//! malformed transaction cannot abort an analysis.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::{Category, Transaction};
use crate::registry::CategoryRegistry;

/// Region assumed when the caller does not pick one.
pub const DEFAULT_REGION: &str = "EU";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarbonBreakdown {
    pub category: String,
    pub emissions: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarbonAnalysis {
    pub total_emissions: f64,
    pub monthly_average: f64,
    /// Per-category emissions, descending.
    pub breakdown: Vec<CarbonBreakdown>,
    pub recommendations: Vec<String>,
    pub region: String,
}

/// One calendar month of the footprint series behind the trend chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFootprint {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expenses: f64,
    pub carbon: f64,
}

pub struct CarbonCalculator;

impl CarbonCalculator {
    /// Emission estimate for a single transaction, in kg CO₂-equivalent.
    /// Income and neutral transactions contribute nothing.
    pub fn transaction_emission(
        registry: &CategoryRegistry,
        tx: &Transaction,
        region: &str,
    ) -> f64 {
        if !tx.is_expense() {
            return 0.0;
        }
        let category = registry.resolve(&tx.category);
        let base = Self::category_emission(registry, category, tx.amount.abs());
        base * registry.regional_adjustment(&category.id, region)
    }

    /// Emission for spending `amount` on `category`: the direct factor when
    /// one is set, otherwise the amount is apportioned across direct children
    /// by `proportion` (equal shares when unset) and factorless children
    /// recurse into their own subtrees. A childless node without a factor
    /// contributes nothing.
    fn category_emission(registry: &CategoryRegistry, category: &Category, amount: f64) -> f64 {
        if !amount.is_finite() {
            return 0.0;
        }
        if let Some(factor) = category.emission_factor {
            return amount * factor;
        }
        let children = registry.children(&category.id);
        if children.is_empty() {
            return 0.0;
        }
        let equal_share = 1.0 / children.len() as f64;
        children
            .iter()
            .map(|child| {
                let share = amount * child.proportion.unwrap_or(equal_share);
                match child.emission_factor {
                    Some(factor) => share * factor,
                    None => Self::category_emission(registry, child, share),
                }
            })
            .sum()
    }

    /// Footprint analysis over a transaction set: totals, per-category
    /// breakdown, monthly average, and advice.
    pub fn analyze(
        registry: &CategoryRegistry,
        transactions: &[Transaction],
        region: &str,
    ) -> CarbonAnalysis {
        let mut by_category: HashMap<String, f64> = HashMap::new();
        let mut total = 0.0;
        for tx in transactions {
            if !tx.is_expense() {
                continue;
            }
            let emission = Self::transaction_emission(registry, tx, region);
            total += emission;
            let name = registry.resolve(&tx.category).name.clone();
            *by_category.entry(name).or_insert(0.0) += emission;
        }

        let mut breakdown: Vec<CarbonBreakdown> = by_category
            .into_iter()
            .map(|(category, emissions)| CarbonBreakdown {
                category,
                emissions,
                percentage: if total > 0.0 {
                    emissions / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        breakdown.sort_by(|a, b| {
            b.emissions
                .total_cmp(&a.emissions)
                .then_with(|| a.category.cmp(&b.category))
        });

        // Month distinctness is date-driven, so income transactions count.
        let months: HashSet<(i32, u32)> = transactions
            .iter()
            .filter_map(|tx| tx.date)
            .map(|date| (date.year(), date.month()))
            .collect();
        let monthly_average = if months.is_empty() {
            0.0
        } else {
            total / months.len() as f64
        };

        let recommendations = Self::recommendations(&breakdown, total, region);

        CarbonAnalysis {
            total_emissions: total,
            monthly_average,
            breakdown,
            recommendations,
            region: region.to_string(),
        }
    }

    /// Per-month income/expense/carbon series, ascending by month.
    pub fn monthly_footprint(
        registry: &CategoryRegistry,
        transactions: &[Transaction],
        region: &str,
    ) -> Vec<MonthlyFootprint> {
        let mut by_month: BTreeMap<(i32, u32), MonthlyFootprint> = BTreeMap::new();
        for tx in transactions {
            let Some(date) = tx.date else {
                continue;
            };
            if !tx.amount.is_finite() {
                continue;
            }
            let entry = by_month
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthlyFootprint {
                    year: date.year(),
                    month: date.month(),
                    income: 0.0,
                    expenses: 0.0,
                    carbon: 0.0,
                });
            if tx.is_expense() {
                entry.expenses += tx.amount.abs();
                entry.carbon += Self::transaction_emission(registry, tx, region);
            } else {
                entry.income += tx.amount;
            }
        }
        by_month.into_values().collect()
    }

    fn recommendations(breakdown: &[CarbonBreakdown], total: f64, region: &str) -> Vec<String> {
        if total == 0.0 {
            return vec!["Not enough data to generate recommendations.".into()];
        }
        let mut recommendations = Vec::new();

        match region {
            "NO" | "FR" => recommendations.push(
                "Your region has a relatively clean electricity grid. Consider electrifying \
                 transport and heating."
                    .into(),
            ),
            "PL" | "DE" => recommendations.push(
                "Your region still depends on fossil fuels. Prioritize energy efficiency and \
                 consider domestic solar."
                    .into(),
            ),
            _ => {}
        }

        for entry in breakdown.iter().take(3) {
            if entry.percentage <= 20.0 {
                continue;
            }
            match entry.category.to_lowercase().as_str() {
                "transport" => {
                    if region == "NO" || region == "FR" {
                        recommendations.push(
                            "With your clean grid, switching to an electric vehicle would have \
                             a large positive impact."
                                .into(),
                        );
                    } else {
                        recommendations.push(
                            "Consider public transport, walking, cycling, or carpooling to cut \
                             transport emissions."
                                .into(),
                        );
                    }
                }
                "transportation" => recommendations.push(
                    "Consider public transport or electric vehicles to reduce transport \
                     emissions."
                        .into(),
                ),
                "food and dining" | "food & dining" | "restaurant" => recommendations.push(
                    "Reduce meat consumption and choose vegetarian or vegan options more often."
                        .into(),
                ),
                "housing and utilities" | "utilities" => {
                    if region == "PL" || region == "CN" {
                        recommendations.push(
                            "Your electricity grid is coal-intensive. Prioritize energy \
                             efficiency and consider solar panels."
                                .into(),
                        );
                    } else {
                        recommendations.push(
                            "Improve your home's energy efficiency and consider switching to a \
                             renewable energy provider."
                                .into(),
                        );
                    }
                }
                "bills & utilities" => recommendations.push(
                    "Consider switching to renewable energy and improving your home's energy \
                     efficiency."
                        .into(),
                ),
                "shopping" | "retail" => recommendations.push(
                    "Buy from sustainable brands and cut back on fast fashion.".into(),
                ),
                "travel" => recommendations.push(
                    "Choose closer destinations or offset the emissions of your long trips."
                        .into(),
                ),
                _ => recommendations.push(format!(
                    "Review your spending on {} to find ways to cut emissions.",
                    entry.category
                )),
            }
        }

        if total > 1000.0 {
            recommendations.push(
                "Your carbon footprint is above average. Consider changes in your \
                 highest-emitting categories."
                    .into(),
            );
        } else if total > 500.0 {
            recommendations.push(
                "Your carbon footprint is moderate. Small changes can make a big difference."
                    .into(),
            );
        } else {
            recommendations.push(
                "Excellent! Your carbon footprint is relatively low. Keep up these sustainable \
                 habits."
                    .into(),
            );
        }

        recommendations
    }
}
