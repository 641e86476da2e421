//! Property-based tests for list-set laws and registry structure

mod listset_laws;
mod registry_laws;
