pub mod entity;
pub mod invariants;

pub use entity::GarmentRecord;
pub use invariants::validate_garment;
