//! Pharmacy management dashboard for the web.
//!
//! The dashboard checks the stored session, counts medications, laboratories
//! and purchase orders through the farmacia API, and shows role-gated quick
//! links. Collaborators are injected through Dioxus context:
//! an `Rc<dyn SessionProvider>` and an `Rc<dyn FarmaciaApi>`.

pub mod components;
pub mod config;
pub mod farmacia_client;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod stats;
pub mod types;
