//! Servicios de arranque

pub mod bootstrap;
