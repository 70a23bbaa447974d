use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::models::Food;

/// Minimum fuzzy score for a library suggestion.
const FUZZY_MATCH_FLOOR: f64 = 0.7;

/// Preset reference foods, label data from the manufacturer's
/// published analytical constituents.
pub static FOOD_LIBRARY: LazyLock<Vec<Food>> = LazyLock::new(|| {
    [
        ("katkin_cluck", "Katkin Cluck", 17.1, 6.5, 0.0, 1.9, 74.6),
        ("katkin_moo", "Katkin Moo", 17.2, 10.2, 0.3, 2.2, 69.4),
        ("katkin_gobble", "Katkin Gobble", 18.1, 4.2, 0.2, 1.6, 75.1),
        ("katkin_baa", "Katkin Baa", 13.6, 12.6, 0.1, 2.4, 70.5),
        ("katkin_splash", "Katkin Splash", 16.6, 6.8, 0.0, 2.3, 73.3),
        ("katkin_quack", "Katkin Quack", 18.8, 6.2, 0.1, 2.2, 72.8),
        ("katkin_oink", "Katkin Oink", 17.2, 10.2, 0.1, 2.4, 69.9),
    ]
    .into_iter()
    .map(|(id, name, protein, fat, fibre, ash, moisture)| {
        Food::new(
            id.to_string(),
            name.to_string(),
            protein,
            fat,
            fibre,
            ash,
            Some(moisture),
        )
        .expect("library label data stays under the nutrient sum limit")
    })
    .collect()
});

/// Library entries matching a search term, minus names already in the
/// plan.
///
/// An empty term returns everything still addable. Substring matches
/// win; when none hit, falls back to fuzzy scoring so close
/// misspellings still find their food.
pub fn search_library(term: &str, exclude_names: &[String]) -> Vec<&'static Food> {
    let candidates: Vec<&Food> = FOOD_LIBRARY
        .iter()
        .filter(|food| {
            !exclude_names
                .iter()
                .any(|name| name.eq_ignore_ascii_case(&food.name))
        })
        .collect();

    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return candidates;
    }

    let substring: Vec<&Food> = candidates
        .iter()
        .copied()
        .filter(|food| food.name.to_lowercase().contains(&term))
        .collect();
    if !substring.is_empty() {
        return substring;
    }

    let mut fuzzy: Vec<(&Food, f64)> = candidates
        .into_iter()
        .map(|food| (food, jaro_winkler(&food.name.to_lowercase(), &term)))
        .filter(|(_, score)| *score > FUZZY_MATCH_FLOOR)
        .collect();
    fuzzy.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    fuzzy.into_iter().map(|(food, _)| food).collect()
}
