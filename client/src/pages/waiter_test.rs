use super::*;

#[test]
fn table_card_is_keyed_by_room_and_number() {
    let card = table_card(&TABLES[2]);
    assert_eq!(card.key, "Terraza-3");
    assert_eq!(card.title, "Terraza · Mesa 3");
    assert_eq!(card.lines, vec!["Estado: Cuenta solicitada".to_owned()]);
    assert_eq!(card.footnote.as_deref(), Some("Asignada a: Mozo Demo"));
}

#[test]
fn one_card_per_table_with_unique_keys() {
    let cards: Vec<_> = TABLES.iter().map(table_card).collect();
    assert_eq!(cards.len(), TABLES.len());
    let mut keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), TABLES.len());
}

#[test]
fn status_labels() {
    assert_eq!(TableStatus::Free.label(), "Libre");
    assert_eq!(TableStatus::Occupied.label(), "Ocupada");
    assert_eq!(TableStatus::BillRequested.label(), "Cuenta solicitada");
}
