mod bind;
pub use bind::Bind;

mod row;
pub use row::Row;

mod value;
pub use value::{FromValue, Value};
