pub mod csv_export;
pub mod entities;
pub mod monthly_volume;
pub mod ordering;
