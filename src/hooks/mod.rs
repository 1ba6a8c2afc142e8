pub mod use_dashboard_state;

pub use use_dashboard_state::{
    resolve_mount, use_dashboard_state, DashboardHandle, DashboardState, MountAction,
};
