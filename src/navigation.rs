//! Paths owned by the surrounding router and the dashboard's quick links.

use crate::types::{is_admin, Session};

pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const MEDICAMENTOS: &str = "/medicamentos";
    pub const MEDICAMENTOS_NUEVO: &str = "/medicamentos/nuevo";
    pub const LABORATORIOS: &str = "/laboratorios";
    pub const LABORATORIOS_NUEVO: &str = "/laboratorios/nuevo";
    pub const ORDENES_COMPRA: &str = "/ordenes-compra";
    pub const ORDENES_COMPRA_NUEVA: &str = "/ordenes-compra/nueva";
    pub const USUARIOS: &str = "/usuarios";
    pub const USUARIOS_NUEVO: &str = "/usuarios/nuevo";
}

/// Who may see an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

impl Access {
    pub fn permits(self, session: &Session) -> bool {
        match self {
            Access::Authenticated => true,
            Access::Admin => is_admin(session),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub label: &'static str,
    pub to: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickLinkSection {
    pub title: &'static str,
    pub links: Vec<QuickLink>,
}

struct SectionEntry {
    title: &'static str,
    access: Access,
    links: &'static [(&'static str, &'static str, Access)],
}

const SECTIONS: &[SectionEntry] = &[
    SectionEntry {
        title: "Medicamentos",
        access: Access::Authenticated,
        links: &[
            ("Ver", paths::MEDICAMENTOS, Access::Authenticated),
            ("Añadir", paths::MEDICAMENTOS_NUEVO, Access::Admin),
        ],
    },
    SectionEntry {
        title: "Laboratorios",
        access: Access::Admin,
        links: &[
            ("Ver", paths::LABORATORIOS, Access::Admin),
            ("Añadir", paths::LABORATORIOS_NUEVO, Access::Admin),
        ],
    },
    SectionEntry {
        title: "Órdenes de Compra",
        access: Access::Authenticated,
        links: &[
            ("Ver", paths::ORDENES_COMPRA, Access::Authenticated),
            ("Nueva", paths::ORDENES_COMPRA_NUEVA, Access::Authenticated),
        ],
    },
    SectionEntry {
        title: "Usuarios",
        access: Access::Admin,
        links: &[
            ("Ver", paths::USUARIOS, Access::Admin),
            ("Añadir", paths::USUARIOS_NUEVO, Access::Admin),
        ],
    },
];

/// Quick-link sections visible to `session`, in display order.
pub fn quick_links(session: &Session) -> Vec<QuickLinkSection> {
    SECTIONS
        .iter()
        .filter(|section| section.access.permits(session))
        .map(|section| QuickLinkSection {
            title: section.title,
            links: section
                .links
                .iter()
                .filter(|(_, _, access)| access.permits(session))
                .map(|&(label, to, _)| QuickLink { label, to })
                .collect(),
        })
        .collect()
}
