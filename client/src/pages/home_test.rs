use super::*;

#[test]
fn language_cards_cover_featured_languages_in_order() {
    let ids: Vec<&str> = LANGUAGE_CARDS.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec!["html", "css", "javascript", "python", "sql", "react"]);
}

#[test]
fn language_card_ids_are_unique() {
    let mut ids: Vec<&str> = LANGUAGE_CARDS.iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), LANGUAGE_CARDS.len());
}

#[test]
fn every_card_has_an_example() {
    for card in &LANGUAGE_CARDS {
        assert!(!card.example.trim().is_empty(), "{} has no example", card.id);
        assert!(!card.description.is_empty());
    }
}
