//! Waiter (mozo) dashboard: table occupancy at a glance.

#[cfg(test)]
#[path = "waiter_test.rs"]
mod waiter_test;

use leptos::prelude::*;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::summary_card::CardModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableStatus {
    Free,
    Occupied,
    BillRequested,
}

impl TableStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Libre",
            Self::Occupied => "Ocupada",
            Self::BillRequested => "Cuenta solicitada",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSummary {
    pub room: &'static str,
    pub number: &'static str,
    pub status: TableStatus,
    pub assigned_staff: &'static str,
}

pub const TABLES: [TableSummary; 3] = [
    TableSummary { room: "Salón", number: "1", status: TableStatus::Occupied, assigned_staff: "Mozo Demo" },
    TableSummary { room: "Salón", number: "2", status: TableStatus::Free, assigned_staff: "Mozo Demo" },
    TableSummary {
        room: "Terraza",
        number: "3",
        status: TableStatus::BillRequested,
        assigned_staff: "Mozo Demo",
    },
];

/// One card per table, keyed by room and number.
pub fn table_card(table: &TableSummary) -> CardModel {
    CardModel {
        key: format!("{}-{}", table.room, table.number),
        title: format!("{} · Mesa {}", table.room, table.number),
        lines: vec![format!("Estado: {}", table.status.label())],
        footnote: Some(format!("Asignada a: {}", table.assigned_staff)),
    }
}

#[component]
pub fn WaiterDashboard() -> impl IntoView {
    let cards = TABLES.iter().map(table_card).collect::<Vec<_>>();

    view! {
        <DashboardFrame
            title="Gestión de Mesas"
            description="Visualización rápida de ocupación, con acceso a pedidos, precuenta e impresión."
            cards=cards
        />
    }
}
