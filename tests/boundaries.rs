use std::collections::HashSet;
use std::thread;

use big_integer::{BigInt, Endian, Error};
use num_bigint::BigInt as Oracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

/// A value with exactly `words` significant words, in both implementations.
fn random_value(rng: &mut StdRng, words: usize, negative: bool) -> (BigInt, Oracle) {
    let mut mag: Vec<u32> = (0..words).map(|_| rng.gen()).collect();
    if let Some(top) = mag.last_mut() {
        *top |= 1;
    }
    from_mag(&mag, negative)
}

fn from_mag(mag: &[u32], negative: bool) -> (BigInt, Oracle) {
    let mut bytes: Vec<u8> = mag.iter().flat_map(|w| w.to_le_bytes()).collect();
    bytes.push(0);
    let ours = BigInt::from_bytes(&bytes, Endian::Little);
    let oracle = Oracle::from_signed_bytes_le(&bytes);
    if negative {
        (-ours, -oracle)
    } else {
        (ours, oracle)
    }
}

#[test]
fn boundary_literals() {
    let min = big("-9223372036854775808");
    assert_eq!(min.to_i64(), Ok(i64::MIN));
    assert_eq!(i64::try_from(&min), Ok(i64::MIN));
    assert_eq!(min.negate().to_string(), "9223372036854775808");
    assert_eq!(min.negate().to_i64(), Err(Error::Overflow { target: "i64" }));

    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("-0"), BigInt::zero());
    assert!(!big("-0").is_negative());
    assert_eq!(big("000123").to_string(), "123");

    assert_eq!((BigInt::one() << 64u32) >> 64u32, BigInt::one());

    assert_eq!(big("100").divide(&big("0")), Err(Error::DivisionByZero));
    assert_eq!(big("100").remainder(&big("0")), Err(Error::DivisionByZero));
    assert!(matches!(BigInt::from_string(""), Err(Error::InvalidArgument(_))));
    assert!(matches!(BigInt::from_string("12a"), Err(Error::InvalidArgument(_))));
    assert!(matches!(BigInt::from_string("-"), Err(Error::InvalidArgument(_))));
    assert!(matches!(BigInt::from_string("+5"), Err(Error::InvalidArgument(_))));
}

#[test]
fn division_signs() {
    let cases = [(-7, 2, -3, -1), (7, -2, -3, 1), (-7, -2, 3, -1), (7, 2, 3, 1), (-6, 3, -2, 0)];
    for (a, b, q, r) in cases {
        let (quot, rem) = BigInt::value_of(a).div_rem(&BigInt::value_of(b)).unwrap();
        assert_eq!(quot, BigInt::value_of(q), "{} / {}", a, b);
        assert_eq!(rem, BigInt::value_of(r), "{} % {}", a, b);
    }

    let (quot, rem) = BigInt::value_of(i64::MIN).div_rem(&BigInt::value_of(-1)).unwrap();
    assert_eq!(quot.to_string(), "9223372036854775808");
    assert!(rem.is_zero());

    let small = big("-12345");
    let (quot, rem) = small.div_rem(&big("123456789012345678901234567890")).unwrap();
    assert!(quot.is_zero());
    assert_eq!(rem, small);
}

#[test]
fn threshold_sizes_multiply_and_square() {
    let mut rng = StdRng::seed_from_u64(0x0b16_1e7e);
    let sizes: Vec<usize> = (9..=12).chain(15..=17).chain(31..=33).chain(63..=65).collect();
    for &n in &sizes {
        let (a, oa) = random_value(&mut rng, n, false);
        assert_eq!(a.square().to_string(), (&oa * &oa).to_string(), "square of {} words", n);
        assert_eq!(a.multiply(&a), a.square());
        for &m in &sizes {
            let negative = rng.gen_bool(0.5);
            let (b, ob) = random_value(&mut rng, m, negative);
            assert_eq!((&a * &b).to_string(), (&oa * &ob).to_string(), "{} x {} words", n, m);
        }
    }
}

#[test]
fn karatsuba_matches_split_products() {
    for (x, y) in [
        (
            "12345678901234567890123456789012345678901234567890",
            "98765432109876543210987654321098765432109876543210",
        ),
        (
            "99999999999999999999999999999999999999999999999999",
            "99999999999999999999999999999999999999999999999999",
        ),
    ] {
        let a = big(x);
        let b = big(y);
        let half = BigInt::ten().pow(25);
        let (a1, a0) = (BigInt::from_substring(x, 0, 25).unwrap(), BigInt::from_substring(x, 25, 50).unwrap());
        let (b1, b0) = (BigInt::from_substring(y, 0, 25).unwrap(), BigInt::from_substring(y, 25, 50).unwrap());
        let expected = &(&(&(&a1 * &b1) * &half) + &(&(&a1 * &b0) + &(&a0 * &b1))) * &half + &a0 * &b0;
        assert_eq!(&a * &b, expected);
    }

    // long enough for the recursive path
    let mut rng = StdRng::seed_from_u64(50);
    let digits: String = (0..600).map(|i| char::from(b'0' + rng.gen_range(u8::from(i == 0)..10))).collect();
    let other: String = (0..600).map(|i| char::from(b'0' + rng.gen_range(u8::from(i == 0)..10))).collect();
    let (a, b) = (big(&digits), big(&other));
    let half = BigInt::ten().pow(300);
    let (a1, a0) = (BigInt::from_substring(&digits, 0, 300).unwrap(), BigInt::from_substring(&digits, 300, 600).unwrap());
    let (b1, b0) = (BigInt::from_substring(&other, 0, 300).unwrap(), BigInt::from_substring(&other, 300, 600).unwrap());
    let expected = &(&(&(&a1 * &b1) * &half) + &(&(&a1 * &b0) + &(&a0 * &b1))) * &half + &a0 * &b0;
    assert_eq!(&a * &b, expected);
    assert_eq!((&a * &b).to_string(), (digits.parse::<Oracle>().unwrap() * other.parse::<Oracle>().unwrap()).to_string());
}

#[test]
fn quotient_correction_stress() {
    let mut rng = StdRng::seed_from_u64(3);
    let tops: [&[u32]; 5] = [
        &[u32::MAX, u32::MAX],
        &[0, 0x8000_0000],
        &[u32::MAX, 0x8000_0000],
        &[0, 1],
        &[1, 0x7fff_ffff],
    ];
    for top in tops {
        for low_words in [0usize, 1, 2, 5, 12] {
            let mut divisor: Vec<u32> = (0..low_words).map(|_| rng.gen()).collect();
            divisor.extend_from_slice(top);
            let (b, ob) = from_mag(&divisor, false);
            for dividend_words in [divisor.len(), divisor.len() + 1, divisor.len() + 7] {
                for fill in [u32::MAX, 0x8000_0000, 0] {
                    let mut dividend = vec![fill; dividend_words];
                    dividend[0] = rng.gen();
                    dividend[dividend_words - 1] |= 1;
                    let (a, oa) = from_mag(&dividend, rng.gen_bool(0.5));
                    let (q, r) = a.div_rem(&b).unwrap();
                    assert_eq!(q.to_string(), (&oa / &ob).to_string());
                    assert_eq!(r.to_string(), (&oa % &ob).to_string());
                    assert_eq!(&(&q * &b) + &r, a);
                }
            }
        }
    }
}

#[test]
fn seeded_sweep() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let (n, m) = (rng.gen_range(1..80), rng.gen_range(1..80));
        let (a, oa) = {
            let negative = rng.gen_bool(0.5);
            random_value(&mut rng, n, negative)
        };
        let (b, ob) = {
            let negative = rng.gen_bool(0.5);
            random_value(&mut rng, m, negative)
        };
        assert_eq!((&a * &b).to_string(), (&oa * &ob).to_string());
        assert_eq!((&a / &b).to_string(), (&oa / &ob).to_string());
        assert_eq!((&a % &b).to_string(), (&oa % &ob).to_string());
        assert_eq!((&a - &b).to_string(), (&oa - &ob).to_string());
        let text = a.to_string();
        assert_eq!(BigInt::from_string(&text), Ok(a.clone()));
        assert_eq!(a.digit_count() as usize, text.trim_start_matches('-').len());
    }
}

#[test]
fn digit_count_at_powers_of_ten() {
    let mut power = BigInt::one();
    for digits in 1..=400u64 {
        assert_eq!(power.digit_count(), digits);
        assert_eq!((&power - &BigInt::one()).digit_count(), (digits - 1).max(1));
        power = &power * &BigInt::ten();
    }
}

#[test]
fn formatting_flags() {
    let v = BigInt::value_of(-42);
    assert_eq!(format!("{:>6}", v), "   -42");
    assert_eq!(format!("{:+}", BigInt::value_of(42)), "+42");
    assert_eq!(format!("{:06}", v), "-00042");
}

#[test]
fn hash_and_order_follow_value() {
    let mut seen = HashSet::new();
    seen.insert(big("-0"));
    seen.insert(BigInt::zero());
    seen.insert(big("18446744073709551616"));
    seen.insert(BigInt::one() << 64u32);
    assert_eq!(seen.len(), 2);

    let mut values = vec![big("5"), big("-5"), big("0"), big("-18446744073709551616"), big("18446744073709551616")];
    values.sort();
    let sorted: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["-18446744073709551616", "-5", "0", "5", "18446744073709551616"]);
}

#[test]
fn shared_across_threads() {
    let base = big("123456789012345678901234567890");
    let handles: Vec<_> = (1..=4u32)
        .map(|e| {
            let base = base.clone();
            thread::spawn(move || base.pow(e))
        })
        .collect();
    for (e, handle) in (1..=4u32).zip(handles) {
        assert_eq!(handle.join().unwrap(), base.pow(e));
    }
}
