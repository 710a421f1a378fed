use super::*;
use crate::net::types::{Game, Product, ProductStatusRow};

fn product(id: &str, game: &str, price: f64, status: &str, tier: &str) -> Product {
    Product {
        product_id: id.to_owned(),
        name: id.to_owned(),
        game: game.to_owned(),
        description: String::new(),
        features: Vec::new(),
        price,
        status: status.to_owned(),
        status_label: String::new(),
        image_url: String::new(),
        accent_color: String::new(),
        tier: tier.to_owned(),
    }
}

fn status_row(id: &str, game: &str, status: &str) -> ProductStatusRow {
    ProductStatusRow {
        product_id: id.to_owned(),
        name: id.to_owned(),
        game: game.to_owned(),
        status: status.to_owned(),
        last_updated: String::new(),
    }
}

// =============================================================
// Slugs
// =============================================================

#[test]
fn to_slug_lowercases_and_dashes() {
    assert_eq!(to_slug("Marvel Rivals"), "marvel-rivals");
    assert_eq!(to_slug("CS2"), "cs2");
}

#[test]
fn known_game_slugs_round_trip() {
    for name in GAME_ORDER {
        assert_eq!(game_from_slug(&to_slug(name)), name);
    }
}

#[test]
fn unknown_slug_passes_through() {
    assert_eq!(game_from_slug("rust-disconnect"), "rust-disconnect");
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn group_by_game_honors_preferred_order() {
    let products = vec![
        product("mc-1", "Minecraft", 9.99, "undetected", "Lite"),
        product("rust-1", "Rust", 29.99, "undetected", "Premium"),
        product("val-1", "Valorant", 34.99, "undetected", "Premium"),
    ];
    let groups = group_by_game(&products, &[]);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Rust", "Valorant", "Minecraft"]);
}

#[test]
fn group_by_game_appends_unknown_games() {
    let products = vec![
        product("rust-1", "Rust", 29.99, "undetected", "Premium"),
        product("tar-1", "Tarkov", 24.99, "testing", "Premium"),
    ];
    let games = vec![
        Game { name: "Rust".to_owned(), products: Vec::new() },
        Game { name: "Tarkov".to_owned(), products: Vec::new() },
    ];
    let groups = group_by_game(&products, &games);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Rust", "Tarkov"]);
}

#[test]
fn group_by_game_skips_games_without_products() {
    let games = vec![Game { name: "Rust".to_owned(), products: Vec::new() }];
    assert!(group_by_game(&[], &games).is_empty());
}

#[test]
fn group_counts_and_lowest_price() {
    let products = vec![
        product("rust-1", "Rust", 29.99, "undetected", "Premium"),
        product("rust-2", "Rust", 19.99, "undetected", "Standard"),
        product("rust-3", "Rust", 12.99, "testing", "Lite"),
    ];
    let groups = group_by_game(&products, &[]);
    assert_eq!(groups.len(), 1);
    let rust = &groups[0];
    assert_eq!(rust.product_count, 3);
    assert_eq!(rust.undetected_count, 2);
    assert!((rust.lowest_price - 12.99).abs() < f64::EPSILON);
}

// =============================================================
// Status board
// =============================================================

#[test]
fn status_counts_tallies_each_state() {
    let rows = vec![
        status_row("a", "Rust", "undetected"),
        status_row("b", "Rust", "undetected"),
        status_row("c", "CS2", "testing"),
        status_row("d", "Valorant", "updating"),
        status_row("e", "Overwatch", "detected"),
    ];
    let counts = status_counts(&rows);
    assert_eq!(counts.undetected, 2);
    assert_eq!(counts.testing, 1);
    assert_eq!(counts.updating, 1);
    assert_eq!(counts.detected, 1);
}

#[test]
fn filter_statuses_all_is_wildcard() {
    let rows = vec![
        status_row("a", "Rust", "undetected"),
        status_row("b", "CS2", "testing"),
    ];
    assert_eq!(filter_statuses(&rows, "all", "all").len(), 2);
    assert_eq!(filter_statuses(&rows, "Rust", "all").len(), 1);
    assert_eq!(filter_statuses(&rows, "all", "testing").len(), 1);
    assert!(filter_statuses(&rows, "Rust", "testing").is_empty());
}

#[test]
fn status_games_sorted_and_deduped() {
    let rows = vec![
        status_row("a", "Valorant", "undetected"),
        status_row("b", "Rust", "testing"),
        status_row("c", "Rust", "undetected"),
    ];
    assert_eq!(status_games(&rows), ["Rust", "Valorant"]);
}

// =============================================================
// Featured and pricing
// =============================================================

#[test]
fn featured_takes_first_four_premium() {
    let products = vec![
        product("p1", "Rust", 29.99, "undetected", "Premium"),
        product("s1", "Rust", 19.99, "undetected", "Standard"),
        product("p2", "CS2", 34.99, "undetected", "Premium"),
        product("p3", "Valorant", 34.99, "undetected", "Premium"),
        product("p4", "Overwatch", 29.99, "undetected", "Premium"),
        product("p5", "Minecraft", 19.99, "undetected", "Premium"),
    ];
    let picks = featured(&products);
    let ids: Vec<&str> = picks.iter().map(|p| p.product_id.as_str()).collect();
    assert_eq!(ids, ["p1", "p2", "p3", "p4"]);
}

#[test]
fn display_price_applies_multiplier() {
    assert_eq!(display_price(29.99, 1.0), "29.99");
    assert_eq!(display_price(20.0, 0.5), "10.00");
    assert_eq!(display_price(12.0, 0.25), "3.00");
}

#[test]
fn durations_cover_daily_weekly_monthly() {
    let keys: Vec<&str> = DURATIONS.iter().map(|d| d.key).collect();
    assert_eq!(keys, ["daily", "weekly", "monthly"]);
}
