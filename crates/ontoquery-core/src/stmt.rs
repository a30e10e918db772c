mod literal;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
