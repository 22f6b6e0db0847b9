// src/ui/mod.rs
pub mod alert;
pub mod results;
pub mod tender_input;
