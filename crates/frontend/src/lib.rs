pub mod domain;
pub mod shared;

/// Logging for the browser build: `log` records go to the devtools console,
/// panics are reported there too.
pub fn init_logging() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
