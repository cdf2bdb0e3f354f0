#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use gf256sss::{regenerate_share, Share};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub x: u8,
    pub shares: Vec<Share>,
}

fuzz_target!(|params: Parameters| {
    let _share = regenerate_share(&params.shares, params.x);
});
