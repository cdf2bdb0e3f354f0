//! Threshold [Shamir's Secret Sharing](https://en.wikipedia.org/wiki/Shamir%27s_Secret_Sharing) over GF(256)
//!
//! A secret byte sequence is split into `total` shares such that any `min` of them
//! reconstruct the secret, while fewer reveal nothing about it. Every secret byte gets its
//! own random polynomial of degree `min - 1` over the field defined by `0x11d`.
//!
//! # Usage
//! ## (std)
//!
//! ```
//! use gf256sss::{reconstruct, split, SplitOptions};
//!
//! # #[cfg(feature = "std")]
//! # {
//! // Any 3 out of 5 shares recover the secret
//! let shares = split(&[1, 2, 3, 4], SplitOptions { min: 3, total: 5 }).unwrap();
//! assert_eq!(shares.len(), 5);
//! // Recover the original secret!
//! let secret = reconstruct(&shares[1..4]).unwrap();
//! assert_eq!(secret, vec![1, 2, 3, 4]);
//! # }
//! ```
//!
//! ## (no std)
//!
//! ```
//! use gf256sss::{reconstruct, split_with_rng, SplitOptions};
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//!
//! let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
//! let shares = split_with_rng(&[1, 2, 3, 4], SplitOptions { min: 3, total: 5 }, &mut rng).unwrap();
//! let secret = reconstruct(&[shares[4].clone(), shares[0].clone(), shares[2].clone()]).unwrap();
//! assert_eq!(secret, vec![1, 2, 3, 4]);
//! ```
//!
//! # Feature flags
//!
//! - `std` — enables [`split`], which draws coefficients from `rand::thread_rng`.
//!   Without `std`, use [`split_with_rng`] with any `RngCore + CryptoRng` source.
//! - `zeroize_memory` — shares and intermediate polynomials are zeroized on drop.
//! - `fuzzing` — derives `Arbitrary` for [`Share`].
//!
//! # Threshold metadata
//!
//! Shares produced by a split record their threshold. [`reconstruct`] checks the count
//! against the threshold of the first share only when it is present; shares without
//! threshold metadata are interpolated as given and the caller is responsible for
//! supplying enough of them.
#![cfg_attr(not(feature = "std"), no_std)]

mod error;
pub mod field;
mod math;
mod share;

extern crate alloc;

use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::{CryptoRng, RngCore};

pub use error::{Error, Result};
pub use field::GF256;
pub use share::Share;

/// Largest number of shares a single split can produce.
pub const MAX_SHARES: usize = 254;

/// Parameters of a split: any `min` of the `total` shares recover the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Shares needed to reconstruct, at least 2.
    pub min: usize,
    /// Shares produced, at most [`MAX_SHARES`].
    pub total: usize,
}

impl SplitOptions {
    /// Checks `2 <= min <= total <= 254`.
    pub fn validate(&self) -> Result<()> {
        if self.min < 2 || self.min > self.total {
            return Err(Error::InvalidThreshold {
                min: self.min,
                total: self.total,
            });
        }
        if self.total > MAX_SHARES {
            return Err(Error::TooManyShares { total: self.total });
        }
        Ok(())
    }
}

/// Splits `secret` into `options.total` shares with `x = 1..=total`, drawing the
/// polynomial coefficients from `rng`.
///
/// Exactly `secret.len() * (min - 1)` random bytes are consumed. A failing source is
/// reported as [`Error::RandomSourceFailure`] and no shares are returned.
///
/// Example:
/// ```
/// # use gf256sss::{split_with_rng, Error, SplitOptions};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = split_with_rng(&[1, 2], SplitOptions { min: 2, total: 3 }, &mut rng).unwrap();
/// assert_eq!(shares.len(), 3);
///
/// let err = split_with_rng(&[1, 2], SplitOptions { min: 1, total: 3 }, &mut rng);
/// assert!(matches!(err, Err(Error::InvalidThreshold { .. })));
/// ```
pub fn split_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    options: SplitOptions,
    rng: &mut R,
) -> Result<Vec<Share>> {
    options.validate()?;

    let polys = math::random_polynomials(secret, options.min, rng)?;

    // validate() bounds both values by MAX_SHARES
    let shares = math::evaluate_shares(&polys, options.total as u8, options.min as u8);

    tracing::debug!(
        secret_len = secret.len(),
        min = options.min,
        total = options.total,
        "split secret into shares"
    );

    Ok(shares)
}

/// Splits `secret` into `options.total` shares using the thread-local CSPRNG.
///
/// Example:
/// ```
/// # use gf256sss::{split, reconstruct, SplitOptions};
/// let shares = split(b"AB", SplitOptions { min: 2, total: 3 }).unwrap();
/// assert_eq!(reconstruct(&shares[1..]).unwrap(), b"AB");
/// ```
#[cfg(feature = "std")]
pub fn split(secret: &[u8], options: SplitOptions) -> Result<Vec<Share>> {
    let mut rng = rand::thread_rng();
    split_with_rng(secret, options, &mut rng)
}

// Checks run before any interpolation.
fn check_shares(shares: &[Share]) -> Result<()> {
    let first = shares.first().ok_or(Error::NoShares)?;

    if let Some(threshold) = first.threshold {
        if shares.len() < threshold as usize {
            return Err(Error::InsufficientShares {
                required: threshold as usize,
                provided: shares.len(),
            });
        }
    }

    let expected = first.len();
    if let Some(share) = shares.iter().find(|s| s.len() != expected) {
        return Err(Error::MalformedShares {
            expected,
            actual: share.len(),
        });
    }

    let mut seen: HashSet<u8> = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.x) {
            return Err(Error::DuplicateShareX { x: share.x });
        }
    }

    Ok(())
}

/// Recovers the secret from `shares` by Lagrange interpolation at `x = 0`.
///
/// Fails with [`Error::NoShares`] on empty input, [`Error::InsufficientShares`] when the
/// first share records a threshold larger than the number of shares given,
/// [`Error::MalformedShares`] when the `y` lengths differ and [`Error::DuplicateShareX`]
/// when two shares have the same `x`.
///
/// Example:
/// ```
/// # use gf256sss::{reconstruct, split_with_rng, Error, SplitOptions};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// # let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = split_with_rng(&[1], SplitOptions { min: 3, total: 5 }, &mut rng).unwrap();
/// // Secret correctly recovered
/// assert_eq!(reconstruct(&shares[..3]).unwrap(), vec![1]);
/// // Not enough shares to recover secret
/// assert!(matches!(
///     reconstruct(&shares[..2]),
///     Err(Error::InsufficientShares { required: 3, provided: 2 })
/// ));
/// ```
pub fn reconstruct(shares: &[Share]) -> Result<Vec<u8>> {
    check_shares(shares)?;

    let secret = math::interpolate(shares, GF256::ZERO)?;

    tracing::debug!(
        shares = shares.len(),
        secret_len = secret.len(),
        "reconstructed secret"
    );

    Ok(secret)
}

/// Recreates the share at `x` from at least threshold-many existing shares.
///
/// The new share lies on the same polynomials as the given ones, so it can be mixed with
/// the originals for a later [`reconstruct`]. `x` must be in `1..=254`.
///
/// Example:
/// ```
/// # use gf256sss::{regenerate_share, split_with_rng, SplitOptions};
/// # use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
/// # let mut rng = ChaCha8Rng::from_seed([0x90; 32]);
/// let shares = split_with_rng(&[1, 2, 3, 4], SplitOptions { min: 2, total: 3 }, &mut rng).unwrap();
/// // Share 2 was lost, rebuild it from shares 1 and 3
/// let rebuilt = regenerate_share(&[shares[0].clone(), shares[2].clone()], 2).unwrap();
/// assert_eq!(rebuilt, shares[1]);
/// ```
pub fn regenerate_share(shares: &[Share], x: u8) -> Result<Share> {
    if x == 0 || x as usize > MAX_SHARES {
        return Err(Error::InvalidShareX { x });
    }
    check_shares(shares)?;

    let y = math::interpolate(shares, GF256(x))?;
    let threshold = shares[0].threshold;

    tracing::debug!(shares = shares.len(), x, "regenerated share");

    Ok(Share { x, y, threshold })
}
