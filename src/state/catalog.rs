//! Derived catalog aggregation: pure functions over fetched data.
//!
//! The backend serves flat lists; the views need products grouped per
//! game with counts and a lowest price, per-status totals for the status
//! board, and duration-adjusted display prices. Keeping these pure makes
//! them testable without a browser.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Game, Product, ProductStatusRow};

/// Preferred display order for known games. Games outside this list are
/// appended after, in the order the backend returns them.
pub const GAME_ORDER: [&str; 7] = [
    "Rust",
    "Valorant",
    "CS2",
    "Marvel Rivals",
    "Overwatch",
    "Arc Raiders",
    "Minecraft",
];

/// A license duration choice with its price multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationOption {
    pub key: &'static str,
    pub label: &'static str,
    pub multiplier: f64,
}

/// Purchase durations offered on the product detail page. The backend
/// recomputes the price server-side; the multiplier here is display only.
pub const DURATIONS: [DurationOption; 3] = [
    DurationOption { key: "daily", label: "1 Day", multiplier: 0.25 },
    DurationOption { key: "weekly", label: "7 Days", multiplier: 0.5 },
    DurationOption { key: "monthly", label: "30 Days", multiplier: 1.0 },
];

/// URL slug for a game name: lowercased, whitespace collapsed to dashes.
pub fn to_slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Resolve a route slug back to a game name. Unknown slugs pass through
/// unchanged so the game-products page can fall back to a product lookup.
pub fn game_from_slug(slug: &str) -> String {
    GAME_ORDER
        .iter()
        .find(|name| to_slug(name) == slug)
        .map_or_else(|| slug.to_owned(), |name| (*name).to_owned())
}

/// One game's card on the products overview page.
#[derive(Clone, Debug, PartialEq)]
pub struct GameGroup {
    pub name: String,
    pub slug: String,
    pub product_count: usize,
    pub undetected_count: usize,
    pub lowest_price: f64,
}

fn group_for(name: &str, products: &[Product]) -> Option<GameGroup> {
    let owned: Vec<&Product> = products.iter().filter(|p| p.game == name).collect();
    if owned.is_empty() {
        return None;
    }
    let undetected_count = owned.iter().filter(|p| p.status == "undetected").count();
    let lowest_price = owned.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    Some(GameGroup {
        name: name.to_owned(),
        slug: to_slug(name),
        product_count: owned.len(),
        undetected_count,
        lowest_price,
    })
}

/// Group the catalog per game: known games first in [`GAME_ORDER`], then
/// any remaining games from the `/games` listing. Games with no products
/// are skipped.
pub fn group_by_game(products: &[Product], games: &[Game]) -> Vec<GameGroup> {
    let mut groups: Vec<GameGroup> = GAME_ORDER
        .iter()
        .filter_map(|name| group_for(name, products))
        .collect();

    for game in games {
        if GAME_ORDER.contains(&game.name.as_str()) {
            continue;
        }
        if let Some(group) = group_for(&game.name, products) {
            groups.push(group);
        }
    }

    groups
}

/// Per-status totals for the status board summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub undetected: usize,
    pub testing: usize,
    pub updating: usize,
    pub detected: usize,
}

/// Count status rows per detection state.
pub fn status_counts(rows: &[ProductStatusRow]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for row in rows {
        match row.status.as_str() {
            "undetected" => counts.undetected += 1,
            "testing" => counts.testing += 1,
            "updating" => counts.updating += 1,
            "detected" => counts.detected += 1,
            _ => {}
        }
    }
    counts
}

/// Filter status rows by game and status; `"all"` is a wildcard for both.
pub fn filter_statuses<'a>(
    rows: &'a [ProductStatusRow],
    game: &str,
    status: &str,
) -> Vec<&'a ProductStatusRow> {
    rows.iter()
        .filter(|row| game == "all" || row.game == game)
        .filter(|row| status == "all" || row.status == status)
        .collect()
}

/// Distinct game names present in the status rows, sorted.
pub fn status_games(rows: &[ProductStatusRow]) -> Vec<String> {
    let mut games: Vec<String> = rows.iter().map(|r| r.game.clone()).collect();
    games.sort();
    games.dedup();
    games
}

/// Featured products for the home page: Premium tier, first four.
pub fn featured(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.tier == "Premium")
        .take(4)
        .cloned()
        .collect()
}

/// Duration-adjusted price formatted for display.
pub fn display_price(price: f64, multiplier: f64) -> String {
    format!("{:.2}", price * multiplier)
}
