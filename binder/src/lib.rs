// Binds numeric input fields to the formatting engine.
pub mod config;
pub mod cursor;
pub mod state;
pub mod view;

pub use config::{AppConfig, FieldConfig};
pub use state::binding::{FieldBinding, FieldUpdate};
pub use state::registry::BindingRegistry;
pub use view::{NumericField, WordsOutput};
