use wasm_bindgen::prelude::*;
use zkwasm_rust_sdk::{require, wasm_input};

/// Entry point executed by the zkWasm prover.
///
/// Public input 0 is the expected sum of the private inputs.
#[wasm_bindgen]
pub fn zkmain() {
    let expected = unsafe { wasm_input(1) };
    let count = unsafe { wasm_input(0) };

    let mut sum = 0u64;
    for _ in 0..count {
        sum = sum.wrapping_add(unsafe { wasm_input(0) });
    }

    unsafe { require(sum == expected) };
}
