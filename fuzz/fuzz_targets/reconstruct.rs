#![no_main]
use libfuzzer_sys::fuzz_target;

use gf256sss::{reconstruct, Share};

fuzz_target!(|shares: Vec<Share>| {
    let _secret = reconstruct(&shares);
});
