pub mod catalog;
pub mod label;
pub mod shipment;

pub use catalog::{Catalog, Catalogs};
pub use label::Label;
pub use shipment::ShipmentRecord;
