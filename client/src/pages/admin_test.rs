use super::*;

#[test]
fn module_card_has_name_and_description_only() {
    let card = module_card(&MODULES[1]);
    assert_eq!(card.title, "Reportes");
    assert_eq!(card.lines, vec!["Ventas, gastos, propinas y mapas de calor exportables a Excel.".to_owned()]);
    assert_eq!(card.footnote, None);
}

#[test]
fn module_names_are_unique_keys() {
    let mut keys: Vec<_> = MODULES.iter().map(|m| module_card(m).key).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), MODULES.len());
}
