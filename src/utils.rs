// Console helpers: panic hook, log/warn macros and a scoped console timer.
// On non-wasm targets messages go to stderr so the simulation can be tested natively.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::utils::log_str(&format!($($t)*))
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::utils::warn_str(&format!($($t)*))
    };
}

pub fn log_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

pub fn warn_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {}", msg);
}

// Wraps console.time/console.timeEnd for the lifetime of the guard
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.name;
    }
}
