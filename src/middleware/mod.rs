//! Middleware y extractores compartidos

pub mod company_scope;
pub mod cors;
