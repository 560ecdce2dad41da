pub mod app;
pub mod psa;
pub mod workstation;
