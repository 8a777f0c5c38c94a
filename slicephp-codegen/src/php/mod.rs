//! PHP code generation modules.

pub mod classes;
pub mod constants;
pub mod enums;
pub mod types;

pub use classes::ClassGenerator;
pub use constants::{ConstantGenerator, encode_string, parse_long};
pub use enums::EnumGenerator;
pub use types::{is_native_key, type_hint};
