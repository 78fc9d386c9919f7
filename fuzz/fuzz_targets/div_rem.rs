#![no_main]

use libfuzzer_sys::fuzz_target;

use decint::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4 * 1024 {
        return;
    }
    let Ok(src) = std::str::from_utf8(data) else {
        return;
    };
    let Some((lhs, rhs)) = src.split_once(',') else {
        return;
    };
    let (Ok(a), Ok(b)) = (lhs.parse::<BigInt>(), rhs.parse::<BigInt>()) else {
        return;
    };

    match a.div_rem(&b) {
        Ok((q, r)) => {
            // dividend = quotient * divisor + remainder, truncating semantics.
            assert_eq!(&(&q * &b) + &r, a);
            assert!(r.abs() < b.abs());
            assert!(r == BigInt::from(0) || r.is_negative() == a.is_negative());
        }
        Err(_) => assert_eq!(b, BigInt::from(0)),
    }
});
