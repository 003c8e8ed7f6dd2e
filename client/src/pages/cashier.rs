//! Cashier (caja) dashboard: shift payments by method and the running total.

#[cfg(test)]
#[path = "cashier_test.rs"]
mod cashier_test;

use leptos::prelude::*;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::summary_card::CardModel;
use crate::util::format::format_currency;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentRecord {
    pub method: &'static str,
    pub amount: i64,
    pub count: u32,
}

pub const PAYMENTS: [PaymentRecord; 3] = [
    PaymentRecord { method: "Efectivo", amount: 25_400, count: 18 },
    PaymentRecord { method: "Mercado Pago QR", amount: 18_400, count: 12 },
    PaymentRecord { method: "Crédito", amount: 9_800, count: 4 },
];

/// Exact sum of `amount` over all records.
pub fn total_amount(payments: &[PaymentRecord]) -> i64 {
    payments.iter().map(|p| p.amount).sum()
}

pub fn total_heading(payments: &[PaymentRecord]) -> String {
    format!("Total facturado: {}", format_currency(total_amount(payments)))
}

pub fn payment_card(payment: &PaymentRecord) -> CardModel {
    CardModel {
        key: payment.method.to_owned(),
        title: payment.method.to_owned(),
        lines: vec![format!("Monto: {}", format_currency(payment.amount))],
        footnote: Some(format!("Transacciones: {}", payment.count)),
    }
}

#[component]
pub fn CashierDashboard() -> impl IntoView {
    let cards = PAYMENTS.iter().map(payment_card).collect::<Vec<_>>();

    view! {
        <DashboardFrame
            title="Panel de Caja"
            description="Resumen de movimientos y medios de pago del turno en curso."
            highlight=total_heading(&PAYMENTS)
            cards=cards
        />
    }
}
