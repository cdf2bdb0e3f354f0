#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use gf256sss::{reconstruct, split, SplitOptions};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub min: u8,
    pub total: u8,
    pub secret: Vec<u8>,
}

fuzz_target!(|params: Parameters| {
    let options = SplitOptions {
        min: params.min as usize,
        total: params.total as usize,
    };
    if let Ok(shares) = split(&params.secret, options) {
        let secret = reconstruct(&shares[..options.min]).unwrap();
        assert_eq!(secret, params.secret);
    }
});
