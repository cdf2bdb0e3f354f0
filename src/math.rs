// A module which contains necessary algorithms to compute Shamir's shares and recover secrets

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use super::error::{Error, Result};
use super::field::GF256;
use super::share::Share;

// Per-byte polynomials of a split, constant term first. Wiped on drop, including early returns.
#[cfg(feature = "zeroize_memory")]
pub type Polynomials = zeroize::Zeroizing<Vec<Vec<GF256>>>;
#[cfg(not(feature = "zeroize_memory"))]
pub type Polynomials = Vec<Vec<GF256>>;

// Evaluates `coefficients` at `x`, where `coefficients[i]` is the coefficient of `x^i`.
pub fn evaluate(coefficients: &[GF256], x: GF256) -> GF256 {
    let mut result = GF256::ZERO;
    let mut x_power = GF256::ONE;

    for c in coefficients {
        result = result + *c * x_power;
        x_power = x_power * x;
    }

    result
}

// Generates `k` polynomial coefficients, the first one being `s` and the others drawn from `rng`.
// Coefficient degrees go from lower to higher in the returned vector order.
// Exactly `k - 1` bytes are consumed from `rng`.
pub fn random_polynomial<R: RngCore + CryptoRng>(
    s: GF256,
    k: usize,
    rng: &mut R,
) -> Result<Vec<GF256>> {
    #[cfg(feature = "zeroize_memory")]
    let mut random = zeroize::Zeroizing::new(alloc::vec![0u8; k.saturating_sub(1)]);
    #[cfg(not(feature = "zeroize_memory"))]
    let mut random = alloc::vec![0u8; k.saturating_sub(1)];

    rng.try_fill_bytes(&mut random)
        .map_err(Error::RandomSourceFailure)?;

    let mut poly = Vec::with_capacity(k);
    poly.push(s);
    poly.extend(random.iter().map(|b| GF256(*b)));

    Ok(poly)
}

// Builds one random polynomial per secret byte. On failure everything built so far is dropped,
// and wiped with `zeroize_memory`.
pub fn random_polynomials<R: RngCore + CryptoRng>(
    secret: &[u8],
    k: usize,
    rng: &mut R,
) -> Result<Polynomials> {
    let mut polys = Polynomials::from(Vec::with_capacity(secret.len()));
    for chunk in secret {
        polys.push(random_polynomial(GF256(*chunk), k, rng)?);
    }
    Ok(polys)
}

// Computes the Lagrange basis value of every share for the evaluation point `at`.
// Two shares with the same `x` make a denominator vanish, which is reported as a duplicate.
pub fn lagrange_basis(shares: &[Share], at: GF256) -> Result<Vec<GF256>> {
    shares
        .iter()
        .enumerate()
        .map(|(i, s_i)| {
            let x_i = GF256(s_i.x);
            let (numerator, denominator) = shares
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, s_j)| GF256(s_j.x))
                .fold((GF256::ONE, GF256::ONE), |(num, den), x_j| {
                    (num * (at - x_j), den * (x_i - x_j))
                });

            numerator
                .checked_div(denominator)
                .map_err(|_| Error::DuplicateShareX { x: s_i.x })
        })
        .collect()
}

// Evaluates the polynomials interpolated through `shares` at `at`, one value per byte position.
// All shares are expected to carry `y` values of the same length.
pub fn interpolate(shares: &[Share], at: GF256) -> Result<Vec<u8>> {
    let basis = lagrange_basis(shares, at)?;
    let length = shares.first().map_or(0, |s| s.y.len());

    Ok((0..length)
        .map(|k| {
            shares
                .iter()
                .zip(basis.iter())
                .map(|(s_i, b_i)| GF256(s_i.y[k]) * *b_i)
                .sum::<GF256>()
                .0
        })
        .collect())
}

// Returns the shares for `x = 1..=total` of the `polys` polynomials passed as argument.
// Each polynomial corresponds to one byte chunk of the original secret.
pub fn evaluate_shares(polys: &[Vec<GF256>], total: u8, threshold: u8) -> Vec<Share> {
    (1..=total)
        .map(|x| Share {
            x,
            y: polys.iter().map(|p| evaluate(p, GF256(x)).0).collect(),
            threshold: Some(threshold),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        evaluate, evaluate_shares, interpolate, lagrange_basis, random_polynomial,
        random_polynomials,
    };
    use crate::error::Error;
    use crate::field::GF256;
    use crate::share::Share;
    use alloc::{vec, vec::Vec};
    use rand::{CryptoRng, RngCore};
    use rand_chacha::rand_core::SeedableRng;

    // Counts how many bytes were requested while delegating to a seeded generator.
    struct CountingRng {
        inner: rand_chacha::ChaCha8Rng,
        consumed: usize,
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.consumed += 4;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.consumed += 8;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.consumed += dest.len();
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.consumed += dest.len();
            self.inner.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for CountingRng {}

    #[test]
    fn evaluate_works() {
        // 3 + 2x + 5x^2
        let poly = [GF256(3), GF256(2), GF256(5)];
        assert_eq!(evaluate(&poly, GF256(0)), GF256(3));
        assert_eq!(evaluate(&poly, GF256(1)), GF256(4));
        assert_eq!(evaluate(&poly, GF256(2)), GF256(3 ^ 4 ^ 20));
    }

    #[test]
    fn evaluate_empty_polynomial_is_zero() {
        assert_eq!(evaluate(&[], GF256(9)), GF256(0));
    }

    #[test]
    fn random_polynomial_works() {
        let mut rng = CountingRng {
            inner: rand_chacha::ChaCha8Rng::from_seed([0x90; 32]),
            consumed: 0,
        };
        let poly = random_polynomial(GF256(1), 3, &mut rng).unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly[0], GF256(1));
        assert_eq!(rng.consumed, 2);
    }

    #[test]
    fn random_polynomials_works() {
        let mut rng = CountingRng {
            inner: rand_chacha::ChaCha8Rng::from_seed([0x90; 32]),
            consumed: 0,
        };
        let polys = random_polynomials(&[7, 8, 9], 4, &mut rng).unwrap();
        assert_eq!(polys.len(), 3);
        assert!(polys.iter().all(|p| p.len() == 4));
        assert_eq!(
            polys.iter().map(|p| p[0]).collect::<Vec<_>>(),
            vec![GF256(7), GF256(8), GF256(9)]
        );
        assert_eq!(rng.consumed, 9);
    }

    #[cfg(feature = "zeroize_memory")]
    #[test]
    fn polynomials_are_wiped_on_drop() {
        fn zeroize_on_drop<T: zeroize::ZeroizeOnDrop>() {}
        zeroize_on_drop::<super::Polynomials>();
    }

    #[test]
    fn evaluate_shares_works() {
        let shares = evaluate_shares(&[vec![GF256(3), GF256(2), GF256(5)]], 2, 3);
        let values: Vec<_> = shares.iter().map(|s| (s.x, s.y.clone())).collect();
        assert_eq!(values, vec![(1, vec![4]), (2, vec![3 ^ 4 ^ 20])]);
        assert!(shares.iter().all(|s| s.threshold == Some(3)));
    }

    #[test]
    fn interpolate_works() {
        let mut rng = rand_chacha::ChaCha8Rng::from_seed([0x90; 32]);
        let poly = random_polynomial(GF256(185), 10, &mut rng).unwrap();
        let shares = evaluate_shares(&[poly.clone()], 10, 10);
        assert_eq!(interpolate(&shares, GF256(0)).unwrap(), vec![185]);
        assert_eq!(
            interpolate(&shares[..10], GF256(42)).unwrap(),
            vec![evaluate(&poly, GF256(42)).0]
        );
    }

    #[test]
    fn lagrange_basis_detects_duplicates() {
        let shares = vec![
            Share {
                x: 4,
                y: vec![1],
                threshold: None,
            },
            Share {
                x: 4,
                y: vec![2],
                threshold: None,
            },
        ];
        assert!(matches!(
            lagrange_basis(&shares, GF256(0)),
            Err(Error::DuplicateShareX { x: 4 })
        ));
    }
}
