pub mod lookup;

pub use lookup::StarService;
