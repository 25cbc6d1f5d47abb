//! Builtin category forest and regional adjustment table.
//!
//! Ids are stable kebab-case slugs; transactions and saved snapshots refer to
//! them directly, so existing ids must never be renamed.

use crate::domain::Category;

fn root(id: &str, name: &str) -> Category {
    Category::new(id, name)
}

fn branch(id: &str, name: &str, parent: &str) -> Category {
    Category::new(id, name).child_of(parent)
}

fn leaf(id: &str, name: &str, parent: &str, factor: f64) -> Category {
    Category::new(id, name).child_of(parent).with_factor(factor)
}

/// Leaf that both carries a direct factor and apportions a share of its
/// parent's spending.
fn slice(id: &str, name: &str, parent: &str, proportion: f64, factor: f64) -> Category {
    Category::new(id, name)
        .child_of(parent)
        .with_proportion(proportion)
        .with_factor(factor)
}

/// Income share; income categories carry no emission factors.
fn share(id: &str, name: &str, parent: &str, proportion: f64) -> Category {
    Category::new(id, name)
        .child_of(parent)
        .with_proportion(proportion)
}

pub(crate) fn builtin_categories() -> Vec<Category> {
    vec![
        // Expenses
        root("food-and-dining", "Food and Dining"),
        branch("food-and-dining-groceries", "Groceries", "food-and-dining"),
        slice(
            "food-and-dining-groceries-meat-products",
            "Meat Products",
            "food-and-dining-groceries",
            0.3,
            3.0,
        ),
        slice(
            "food-and-dining-groceries-seafood",
            "Seafood",
            "food-and-dining-groceries",
            0.2,
            2.5,
        ),
        slice(
            "food-and-dining-groceries-vegan-options",
            "Vegan Options",
            "food-and-dining-groceries",
            0.1,
            0.1,
        ),
        slice(
            "food-and-dining-groceries-other-groceries",
            "Other Groceries (Processed)",
            "food-and-dining-groceries",
            0.4,
            0.5,
        ),
        leaf("food-and-dining-dining-out", "Dining Out", "food-and-dining", 0.8),
        leaf(
            "food-and-dining-delivery-services",
            "Delivery Services",
            "food-and-dining",
            1.0,
        ),
        root("transport", "Transport"),
        leaf("transport-public-transport", "Public Transport", "transport", 0.05),
        branch(
            "transport-private-vehicle-fuel",
            "Private Vehicle Fuel",
            "transport",
        ),
        leaf(
            "transport-private-vehicle-fuel-gasoline",
            "Gasoline",
            "transport-private-vehicle-fuel",
            2.3,
        ),
        leaf(
            "transport-private-vehicle-fuel-diesel",
            "Diesel",
            "transport-private-vehicle-fuel",
            2.7,
        ),
        leaf(
            "transport-private-vehicle-fuel-electric",
            "Electric",
            "transport-private-vehicle-fuel",
            0.5,
        ),
        branch("transport-air-travel", "Air Travel", "transport"),
        leaf(
            "transport-air-travel-domestic-flights",
            "Domestic Flights",
            "transport-air-travel",
            0.15,
        ),
        leaf(
            "transport-air-travel-international-flights",
            "International Flights",
            "transport-air-travel",
            0.25,
        ),
        root("housing-and-utilities", "Housing and Utilities"),
        branch(
            "housing-and-utilities-electricity",
            "Electricity",
            "housing-and-utilities",
        ),
        slice(
            "housing-and-utilities-electricity-renewable",
            "Electricity (Renewable)",
            "housing-and-utilities-electricity",
            0.75,
            0.05,
        ),
        slice(
            "housing-and-utilities-electricity-coal-based",
            "Electricity (Coal-Based)",
            "housing-and-utilities-electricity",
            0.25,
            0.9,
        ),
        leaf(
            "housing-and-utilities-water-usage",
            "Water Usage",
            "housing-and-utilities",
            0.02,
        ),
        branch(
            "housing-and-utilities-heating",
            "Heating",
            "housing-and-utilities",
        ),
        slice(
            "housing-and-utilities-heating-natural-gas",
            "Heating (Natural Gas)",
            "housing-and-utilities-heating",
            0.5,
            0.2,
        ),
        slice(
            "housing-and-utilities-heating-electric",
            "Heating (Electric)",
            "housing-and-utilities-heating",
            0.5,
            0.5,
        ),
        leaf(
            "housing-and-utilities-rent-mortgage",
            "Rent/Mortgage",
            "housing-and-utilities",
            0.3,
        ),
        root("shopping", "Shopping"),
        branch("shopping-clothing", "Clothing", "shopping"),
        slice(
            "shopping-clothing-fast-fashion",
            "Clothing (Fast Fashion)",
            "shopping-clothing",
            0.2,
            1.2,
        ),
        slice(
            "shopping-clothing-sustainable-brands",
            "Clothing (Sustainable Brands)",
            "shopping-clothing",
            0.8,
            0.3,
        ),
        leaf("shopping-electronics", "Electronics", "shopping", 2.0),
        leaf("shopping-furniture-wooden", "Furniture (Wooden)", "shopping", 0.8),
        leaf("shopping-furniture-metal", "Furniture (Metal)", "shopping", 1.5),
        leaf("shopping-personal-care", "Personal Care", "shopping", 0.7),
        root("entertainment-and-recreation", "Entertainment and Recreation"),
        leaf(
            "entertainment-and-recreation-streaming-services",
            "Streaming Services",
            "entertainment-and-recreation",
            0.1,
        ),
        leaf(
            "entertainment-and-recreation-movies-and-events",
            "Movies and Events",
            "entertainment-and-recreation",
            0.2,
        ),
        leaf(
            "entertainment-and-recreation-outdoor-activities",
            "Outdoor Activities",
            "entertainment-and-recreation",
            0.3,
        ),
        leaf(
            "entertainment-and-recreation-travel-and-tourism-hotels",
            "Travel and Tourism (Hotels)",
            "entertainment-and-recreation",
            2.0,
        ),
        root("healthcare", "Healthcare"),
        leaf("healthcare-medication", "Medication", "healthcare", 0.2),
        leaf("healthcare-health-services", "Health Services", "healthcare", 0.3),
        leaf("healthcare-supplements", "Supplements", "healthcare", 0.15),
        root("education", "Education"),
        branch("education-books", "Books", "education"),
        leaf("education-books-physical", "Books (Physical)", "education-books", 0.5),
        leaf("education-books-digital", "Books (Digital)", "education-books", 0.1),
        leaf("education-online-courses", "Online Courses", "education", 0.05),
        leaf("education-school-supplies", "School Supplies", "education", 0.2),
        root("miscellaneous", "Miscellaneous"),
        leaf("miscellaneous-donations", "Donations", "miscellaneous", 0.1),
        leaf("miscellaneous-pet-care", "Pet Care", "miscellaneous", 0.3),
        leaf("miscellaneous-hobbies", "Hobbies", "miscellaneous", 0.25),
        // Fallback node for unresolvable category references.
        leaf("miscellaneous-others", "Others", "miscellaneous", 0.25),
        // Income
        root("income-salary-and-wages", "Salary and Wages"),
        share(
            "income-salary-and-wages-full-time-job",
            "Full-Time Job",
            "income-salary-and-wages",
            0.7,
        ),
        share(
            "income-salary-and-wages-part-time-job",
            "Part-Time Job",
            "income-salary-and-wages",
            0.2,
        ),
        share(
            "income-salary-and-wages-overtime-and-bonuses",
            "Overtime and Bonuses",
            "income-salary-and-wages",
            0.1,
        ),
        root("income-investments", "Investments"),
        branch(
            "income-investments-stocks-and-bonds",
            "Stocks and Bonds",
            "income-investments",
        ),
        share(
            "income-investments-stocks-and-bonds-dividends",
            "Dividends",
            "income-investments-stocks-and-bonds",
            0.6,
        ),
        share(
            "income-investments-stocks-and-bonds-capital-gains",
            "Capital Gains",
            "income-investments-stocks-and-bonds",
            0.4,
        ),
        branch(
            "income-investments-real-estate",
            "Real Estate",
            "income-investments",
        ),
        share(
            "income-investments-real-estate-rental-income",
            "Rental Income",
            "income-investments-real-estate",
            0.8,
        ),
        share(
            "income-investments-real-estate-sale-of-property",
            "Sale of Property",
            "income-investments-real-estate",
            0.2,
        ),
        branch(
            "income-investments-cryptocurrency",
            "Cryptocurrency",
            "income-investments",
        ),
        share(
            "income-investments-cryptocurrency-trading",
            "Trading",
            "income-investments-cryptocurrency",
            0.7,
        ),
        share(
            "income-investments-cryptocurrency-staking",
            "Staking",
            "income-investments-cryptocurrency",
            0.3,
        ),
        root("income-business-income", "Business Income"),
        share(
            "income-business-income-self-employed-services",
            "Self-Employed Services",
            "income-business-income",
            0.5,
        ),
        share(
            "income-business-income-freelancing",
            "Freelancing",
            "income-business-income",
            0.3,
        ),
        share(
            "income-business-income-small-business-profits",
            "Small Business Profits",
            "income-business-income",
            0.2,
        ),
        root("income-government-benefits", "Government Benefits"),
        share(
            "income-government-benefits-unemployment-benefits",
            "Unemployment Benefits",
            "income-government-benefits",
            0.4,
        ),
        share(
            "income-government-benefits-social-security",
            "Social Security",
            "income-government-benefits",
            0.4,
        ),
        share(
            "income-government-benefits-disability-allowance",
            "Disability Allowance",
            "income-government-benefits",
            0.2,
        ),
        root("income-pension-and-retirement-funds", "Pension and Retirement Funds"),
        share(
            "income-pension-and-retirement-funds-private-pension",
            "Private Pension",
            "income-pension-and-retirement-funds",
            0.6,
        ),
        share(
            "income-pension-and-retirement-funds-employer-retirement-plan",
            "Employer Retirement Plan",
            "income-pension-and-retirement-funds",
            0.4,
        ),
        root("income-side-hustles", "Side Hustles"),
        share(
            "income-side-hustles-gig-economy",
            "Gig Economy (e.g., Delivery, Ride-Sharing)",
            "income-side-hustles",
            0.5,
        ),
        share(
            "income-side-hustles-online-stores",
            "Online Stores",
            "income-side-hustles",
            0.3,
        ),
        share(
            "income-side-hustles-content-creation",
            "Content Creation (e.g., YouTube, Twitch)",
            "income-side-hustles",
            0.2,
        ),
        root("income-royalties-and-licenses", "Royalties and Licenses"),
        share(
            "income-royalties-and-licenses-book-royalties",
            "Book Royalties",
            "income-royalties-and-licenses",
            0.4,
        ),
        share(
            "income-royalties-and-licenses-music-royalties",
            "Music Royalties",
            "income-royalties-and-licenses",
            0.4,
        ),
        share(
            "income-royalties-and-licenses-software-licenses",
            "Software Licenses",
            "income-royalties-and-licenses",
            0.2,
        ),
        root("income-gifts-and-inheritances", "Gifts and Inheritances"),
        share(
            "income-gifts-and-inheritances-monetary-gifts",
            "Monetary Gifts",
            "income-gifts-and-inheritances",
            0.7,
        ),
        share(
            "income-gifts-and-inheritances-inheritances",
            "Inheritances",
            "income-gifts-and-inheritances",
            0.3,
        ),
        root("income-miscellaneous-income", "Miscellaneous Income"),
        share(
            "income-miscellaneous-income-lottery-winnings",
            "Lottery Winnings",
            "income-miscellaneous-income",
            0.2,
        ),
        share(
            "income-miscellaneous-income-cashbacks-and-rewards",
            "Cashbacks and Rewards",
            "income-miscellaneous-income",
            0.4,
        ),
        share(
            "income-miscellaneous-income-alimony-or-child-support",
            "Alimony or Child Support",
            "income-miscellaneous-income",
            0.4,
        ),
    ]
}

/// `(category id, region code, multiplier)` overrides; any pair not listed
/// here defaults to 1.0. Multipliers reflect grid carbon intensity relative
/// to the EU baseline the builtin factors were estimated against.
pub(crate) fn regional_adjustments() -> Vec<(&'static str, &'static str, f64)> {
    vec![
        ("housing-and-utilities-electricity", "NO", 0.15),
        ("housing-and-utilities-electricity", "FR", 0.25),
        ("housing-and-utilities-electricity", "DE", 1.25),
        ("housing-and-utilities-electricity", "PL", 1.6),
        ("housing-and-utilities-electricity", "CN", 1.5),
        ("housing-and-utilities-electricity", "US", 1.1),
        ("housing-and-utilities-electricity-coal-based", "NO", 0.4),
        ("housing-and-utilities-electricity-coal-based", "FR", 0.5),
        ("housing-and-utilities-electricity-coal-based", "DE", 1.1),
        ("housing-and-utilities-electricity-coal-based", "PL", 1.2),
        ("housing-and-utilities-heating", "NO", 0.6),
        ("housing-and-utilities-heating", "FR", 0.8),
        ("housing-and-utilities-heating", "DE", 1.15),
        ("housing-and-utilities-heating", "PL", 1.3),
        ("housing-and-utilities-heating-electric", "NO", 0.2),
        ("housing-and-utilities-heating-electric", "FR", 0.3),
        ("housing-and-utilities-heating-electric", "DE", 1.3),
        ("housing-and-utilities-heating-electric", "PL", 1.5),
        ("transport", "NO", 0.8),
        ("transport", "FR", 0.9),
        ("transport", "DE", 1.05),
        ("transport", "PL", 1.1),
        ("transport", "US", 1.25),
        ("transport-public-transport", "NO", 0.5),
        ("transport-public-transport", "FR", 0.6),
        ("transport-public-transport", "PL", 1.2),
        ("transport-private-vehicle-fuel-electric", "NO", 0.1),
        ("transport-private-vehicle-fuel-electric", "FR", 0.2),
        ("transport-private-vehicle-fuel-electric", "DE", 1.4),
        ("transport-private-vehicle-fuel-electric", "PL", 1.8),
        ("transport-private-vehicle-fuel-electric", "CN", 1.6),
        ("transport-private-vehicle-fuel-electric", "US", 1.2),
    ]
}
