//! Admin dashboard: informational list of back-office modules.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::dashboard_frame::DashboardFrame;
use crate::components::summary_card::CardModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

pub const MODULES: [ModuleDescriptor; 3] = [
    ModuleDescriptor {
        name: "Productos y Recetas",
        description: "Gestioná listas de precios, recetas, favoritos y stock mínimo.",
    },
    ModuleDescriptor {
        name: "Reportes",
        description: "Ventas, gastos, propinas y mapas de calor exportables a Excel.",
    },
    ModuleDescriptor {
        name: "Integraciones",
        description: "Configuración de Mercado Pago, WhatsApp y Carta QR.",
    },
];

pub fn module_card(module: &ModuleDescriptor) -> CardModel {
    CardModel {
        key: module.name.to_owned(),
        title: module.name.to_owned(),
        lines: vec![module.description.to_owned()],
        footnote: None,
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let cards = MODULES.iter().map(module_card).collect::<Vec<_>>();

    view! {
        <DashboardFrame
            title="Panel Administrativo"
            description="Centro de control para usuarios, stock, proveedores e integraciones."
            cards=cards
        />
    }
}
