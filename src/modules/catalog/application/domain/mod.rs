pub mod entities;
pub mod formula;
pub mod pricing;
pub mod terms;
