/// Ctrl-C wiring for watch mode
use crate::logger::{self, LogTag};
use crate::monitor::CancellationHandle;

/// Install a Ctrl-C handler that cancels `handle`
///
/// `ctrlc` allows a single handler per process, so this is called once from
/// the binary before the refresh loop starts.
pub fn install_ctrlc_handler(handle: CancellationHandle) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        logger::debug(LogTag::System, "Interrupt received, stopping refresh loop");
        handle.cancel();
    })
}
