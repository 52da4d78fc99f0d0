pub mod constructors;
pub mod error;
pub mod extract;
pub mod module;
pub mod resolve;
pub mod value;


pub use constructors::Object;
pub use error::{ConstructError, ErrorKind};
pub use extract::Slot;
pub use module::{ConstructorFn, ConstructorObj, Module};
pub use resolve::Variant;
pub use value::{Shape, Value};
