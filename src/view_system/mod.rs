pub mod free_look;
pub mod transforms;
