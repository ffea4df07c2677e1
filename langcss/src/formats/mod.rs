//! File formats handled by langcss: CSV translation tables in, CSS stylesheets out.

pub mod css;
pub mod csv;
