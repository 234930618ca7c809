/*!
 * Signal Handler - Table and Callbacks
 * Handler table storage and the callback registry it references
 */

mod callbacks;
mod table;

// Re-export public API
pub use callbacks::{CallbackRegistry, HandlerFn};
pub use table::{HandlerSlot, HandlerTable};
