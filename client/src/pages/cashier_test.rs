use super::*;

// =============================================================
// Totals
// =============================================================

#[test]
fn total_is_exact_sum_of_amounts() {
    assert_eq!(total_amount(&PAYMENTS), 53_600);
}

#[test]
fn total_heading_uses_currency_grouping() {
    assert_eq!(total_heading(&PAYMENTS), "Total facturado: ARS 53.600");
}

#[test]
fn empty_dataset_totals_zero() {
    assert_eq!(total_amount(&[]), 0);
    assert_eq!(total_heading(&[]), "Total facturado: ARS 0");
}

// =============================================================
// Cards
// =============================================================

#[test]
fn payment_card_shows_amount_and_count() {
    let card = payment_card(&PAYMENTS[0]);
    assert_eq!(card.key, "Efectivo");
    assert_eq!(card.lines, vec!["Monto: ARS 25.400".to_owned()]);
    assert_eq!(card.footnote.as_deref(), Some("Transacciones: 18"));
}
