//! Insight Engine - maps each insight id to its recipe and display hint

use tracing::debug;

use super::recipes;
use super::types::{DisplayHint, Insight, InsightId, InsightValue};
use crate::dataset::Dataset;

type RecipeFn = fn(&Dataset) -> InsightValue;

/// One row of the dispatch table
struct Recipe {
    id: InsightId,
    hint: DisplayHint,
    run: RecipeFn,
}

/// Every insight, in menu order. Adding an insight means adding a row here.
static RECIPES: [Recipe; 10] = [
    Recipe {
        id: InsightId::TotalOrders,
        hint: DisplayHint::Metric,
        run: recipes::total_orders,
    },
    Recipe {
        id: InsightId::TopCategories,
        hint: DisplayHint::RankedBar,
        run: recipes::top_categories,
    },
    Recipe {
        id: InsightId::TotalRevenue,
        hint: DisplayHint::Metric,
        run: recipes::total_revenue,
    },
    Recipe {
        id: InsightId::TopSellers,
        hint: DisplayHint::RankedBar,
        run: recipes::top_sellers,
    },
    Recipe {
        id: InsightId::AverageDelivery,
        hint: DisplayHint::Metric,
        run: recipes::average_delivery,
    },
    Recipe {
        id: InsightId::TopCities,
        hint: DisplayHint::RankedBar,
        run: recipes::top_cities,
    },
    Recipe {
        id: InsightId::PaymentMethods,
        hint: DisplayHint::RankedBar,
        run: recipes::payment_methods,
    },
    Recipe {
        id: InsightId::MostExpensiveItems,
        hint: DisplayHint::Table,
        run: recipes::most_expensive_items,
    },
    Recipe {
        id: InsightId::SellersPerState,
        hint: DisplayHint::RankedBar,
        run: recipes::sellers_per_state,
    },
    Recipe {
        id: InsightId::MonthlyOrders,
        hint: DisplayHint::TimeSeriesLine,
        run: recipes::monthly_orders,
    },
];

fn recipe_for(id: InsightId) -> &'static Recipe {
    // RECIPES is in menu order, so the number is the position
    let recipe = &RECIPES[usize::from(id.number()) - 1];
    debug_assert_eq!(recipe.id, id);
    recipe
}

/// Display hint an insight will be rendered with
pub fn display_hint(id: InsightId) -> DisplayHint {
    recipe_for(id).hint
}

/// Compute one insight against the snapshot
pub fn compute(dataset: &Dataset, id: InsightId) -> Insight {
    let recipe = recipe_for(id);
    let value = (recipe.run)(dataset);

    debug!(
        insight = id.as_str(),
        hint = recipe.hint.as_str(),
        rows = value.len(),
        "Insight computed"
    );

    Insight {
        id,
        number: id.number(),
        title: id.title(),
        hint: recipe.hint,
        value,
    }
}

/// Compute every insight, in menu order
pub fn compute_all(dataset: &Dataset) -> Vec<Insight> {
    InsightId::ALL
        .iter()
        .map(|&id| compute(dataset, id))
        .collect()
}
