//! Integration tests for the nsfs namespace

mod lookup_strategies;
mod namespace_properties;
mod namespace_scenarios;
