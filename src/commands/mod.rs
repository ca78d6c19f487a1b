// src/commands/mod.rs
//! Command handlers for the ionbridge CLI

mod integrations;

pub use integrations::{
    cmd_integrations_add, cmd_integrations_disable, cmd_integrations_enable,
    cmd_integrations_list,
};
