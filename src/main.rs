#![cfg_attr(all(test, not(target_arch = "wasm32")), allow(dead_code))]

#[cfg(any(target_arch = "wasm32", test))]
mod config;
#[cfg(any(target_arch = "wasm32", test))]
mod contact;
#[cfg(any(target_arch = "wasm32", test))]
mod counters;
#[cfg(any(target_arch = "wasm32", test))]
mod cursor;
#[cfg(any(target_arch = "wasm32", test))]
mod error;
#[cfg(any(target_arch = "wasm32", test))]
mod hero;
#[cfg(any(target_arch = "wasm32", test))]
mod loading;
#[cfg(any(target_arch = "wasm32", test))]
mod motion;
#[cfg(any(target_arch = "wasm32", test))]
mod navigation;
#[cfg(any(target_arch = "wasm32", test))]
mod notification;
#[cfg(any(target_arch = "wasm32", test))]
mod performance;
#[cfg(any(target_arch = "wasm32", test))]
mod reveal;
#[cfg(any(target_arch = "wasm32", test))]
mod telemetry;
#[cfg(any(target_arch = "wasm32", test))]
mod theme;
#[cfg(any(target_arch = "wasm32", test))]
mod work_filter;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
