//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and validation and delegates shared
//! controls to `components`. Pages never decide access themselves; the
//! route guard has already run by the time one renders.

pub mod calendar;
pub mod input_form;
pub mod login;
pub mod remarks;
pub mod transactions;
