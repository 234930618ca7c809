/*!
 * Monitoring
 * Structured tracing for trap operations
 */

mod tracer;

pub use tracer::{init_tracing, span_trap, TrapSpan};
