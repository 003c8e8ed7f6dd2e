//! Kitchen display (KDS): ticket queue with status and origin room.
//!
//! Ticket statuses arrive as free-text keys. Keys outside the known set are
//! shown with `UNKNOWN_STATUS_LABEL` instead of an empty label.

#[cfg(test)]
#[path = "kitchen_test.rs"]
mod kitchen_test;

use leptos::prelude::*;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::summary_card::CardModel;

pub const UNKNOWN_STATUS_LABEL: &str = "Desconocido";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketStatus {
    Pending,
    InProgress,
    Ready,
}

impl TicketStatus {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pendiente" => Some(Self::Pending),
            "en_curso" => Some(Self::InProgress),
            "listo" => Some(Self::Ready),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En curso",
            Self::Ready => "Listo",
        }
    }
}

/// Label for a raw status key, falling back for unknown keys.
pub fn status_label(key: &str) -> &'static str {
    TicketStatus::from_key(key).map_or(UNKNOWN_STATUS_LABEL, TicketStatus::label)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KitchenTicket {
    pub id: &'static str,
    pub status: &'static str,
    pub origin_room: &'static str,
    /// Time in queue, `mm:ss`.
    pub wait: &'static str,
}

pub const TICKETS: [KitchenTicket; 3] = [
    KitchenTicket { id: "PC-101", status: "pendiente", origin_room: "Salón", wait: "02:15" },
    KitchenTicket { id: "PC-102", status: "en_curso", origin_room: "Mostrador", wait: "05:40" },
    KitchenTicket { id: "PC-103", status: "listo", origin_room: "Terraza", wait: "07:05" },
];

pub fn ticket_card(ticket: &KitchenTicket) -> CardModel {
    CardModel {
        key: ticket.id.to_owned(),
        title: ticket.id.to_owned(),
        lines: vec![
            format!("Estado: {}", status_label(ticket.status)),
            format!("Origen: {}", ticket.origin_room),
        ],
        footnote: Some(format!("Tiempo en cola: {}", ticket.wait)),
    }
}

#[component]
pub fn KitchenDashboard() -> impl IntoView {
    let cards = TICKETS.iter().map(ticket_card).collect::<Vec<_>>();

    view! {
        <DashboardFrame
            title="Tablero de Cocina (KDS)"
            description="Cola visual de comandas con estado y sala de origen."
            cards=cards
        />
    }
}
