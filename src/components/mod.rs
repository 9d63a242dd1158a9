//! Reusable view components.

pub mod door_detail_panel;
pub mod fetch_error_banner;
pub mod floor_plan_host;
