#![no_main]
use libfuzzer_sys::fuzz_target;

use libfrac::{gcd, Fraction};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

fn assert_canonical(f: &Fraction<i32>) {
    assert!(f.denominator() > 0, "{} has a nonpositive denominator", f);
    if f.numerator() == 0 {
        assert_eq!(f.denominator(), 1, "{} is not canonical zero", f);
    } else {
        assert_eq!(gcd(f.numerator(), f.denominator()), 1, "{} is not reduced", f);
    }
}

fuzz_target!(|parts: (i32, i32, i32, i32)| {
    let (a, b, c, d) = parts;
    let (x, y) = match (Fraction::checked_new(a, b), Fraction::checked_new(c, d)) {
        (Some(x), Some(y)) => (x, y),
        _ => return,
    };
    let results = [
        x.checked_add(&y),
        x.checked_sub(&y),
        x.checked_mul(&y),
        x.checked_div(&y),
    ];
    assert_canonical(&x);
    assert_canonical(&y);
    for result in results.iter().flatten() {
        assert_canonical(result);
        // Anything representable round-trips through its textual form.
        assert_eq!(result.to_string().parse::<Fraction<i32>>().as_ref(), Ok(result));
    }
    assert_eq!(x.cmp(&y), y.cmp(&x).reverse());
});
