pub mod equivalence_properties;
pub mod table_rendering;
