//! Bindings model and persistence.

pub mod locations;
pub mod store;

pub use locations::{
  LocationSet,
  is_bindable_key,
  is_storable_path,
};
pub use store::LocationStore;
