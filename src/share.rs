use alloc::vec::Vec;

#[cfg(feature = "fuzzing")]
use arbitrary::Arbitrary;

#[cfg(feature = "zeroize_memory")]
use zeroize::Zeroize;

/// A share used to reconstruct the secret.
///
/// This is a plain in-memory record; encoding it for storage or transport is
/// left to the caller.
///
/// Usage example:
/// ```
/// use gf256sss::{split_with_rng, reconstruct, Share, SplitOptions};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
///
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = split_with_rng(b"AB", SplitOptions { min: 2, total: 3 }, &mut rng).unwrap();
/// assert_eq!(shares.iter().map(|s| s.x).collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// // A share rebuilt from stored parts works the same way
/// let restored = Share::new(shares[2].x, shares[2].y.clone(), shares[2].threshold);
/// let secret = reconstruct(&[shares[0].clone(), restored]).unwrap();
/// assert_eq!(secret, b"AB");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(Arbitrary))]
#[cfg_attr(feature = "zeroize_memory", derive(Zeroize))]
#[cfg_attr(feature = "zeroize_memory", zeroize(drop))]
pub struct Share {
    /// The x coordinate of the share, in `1..=254` for shares produced by a split.
    pub x: u8,
    /// The y coordinates of the share, one per secret byte.
    pub y: Vec<u8>,
    /// Minimum number of shares needed for reconstruction, if known.
    pub threshold: Option<u8>,
}

impl Share {
    /// Builds a share from its stored parts.
    pub fn new(x: u8, y: Vec<u8>, threshold: Option<u8>) -> Self {
        Share { x, y, threshold }
    }

    /// Number of secret bytes this share carries.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
