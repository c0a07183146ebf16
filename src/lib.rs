//! Animated "code rain" page background.
//!
//! Falling glyph columns plus short, fading, rotating code snippets drawn on a
//! 2D canvas. The simulation is platform independent and driven through the
//! [`controller::Host`] trait; the browser binding lives in the wasm-only
//! `wasm` module.

pub mod chars;
pub mod columns;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod lifecycle;
pub mod paint;
pub mod random;
pub mod scene;
pub mod snippets;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use controller::{Controller, Host};
pub use layout::{Surface, Viewport};
pub use lifecycle::RunState;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::Config;

    mod control;
    mod render;

    pub use control::{mount, CodeRain};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Warn).ok();

        match control::mount(Config::default()) {
            Ok(Some(_)) => log::debug!("code rain mounted"),
            Ok(None) => log::debug!("reduced motion requested, code rain disabled"),
            // Decorative only: never surface mount failures to the page.
            Err(e) => log::debug!("code rain inactive: {e}"),
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, CodeRain};
