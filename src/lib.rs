pub mod engine;
pub mod key;
pub mod toggle;
pub mod traits;
pub mod types;

pub use crate::engine::handle_key;
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::toggle::{MARKER, line_block, toggle_block};
pub use crate::traits::TextInput;
pub use crate::types::{Dispatch, LineBlock, Selection};
