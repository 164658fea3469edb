//! Entry point for the WASM application

pub fn main() {
    smartnote::run();
}
