/*!
 * Platform Signal Arming
 * Host-specific implementations of the arming facility
 */

mod fallback;
#[cfg(unix)]
mod unix;

pub use fallback::DetachedArming;
#[cfg(unix)]
pub use unix::HostArming;

#[cfg(unix)]
pub use unix::HostArming as PlatformArming;

#[cfg(not(unix))]
pub use fallback::DetachedArming as PlatformArming;
