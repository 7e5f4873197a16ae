//! Numbers living in arena storage behave like owned ones.

use std::cmp::Ordering;

use pib26_core::{newton, BigFloat, BigInt, Digit, Karatsuba, NoOpTicker, Sign};
use pib26_memory::DigitArena;

#[test]
fn arena_floats_match_owned_floats() {
    let prec = 20;
    let len = BigFloat::buffer_len(prec);
    let arena = DigitArena::new();
    let mut strategy = Karatsuba::new(4 * len);

    let mut a = BigFloat::from_view(arena.alloc_slice::<Digit>(len), prec).unwrap();
    let mut r = BigFloat::from_view(arena.alloc_slice::<Digit>(len), prec).unwrap();
    assert!(arena.allocated_bytes() >= 2 * len * std::mem::size_of::<Digit>());
    a.assign_small(11);
    newton::recip(&mut r, &mut a, &mut strategy, &mut NoOpTicker).unwrap();

    let mut owned_a = BigFloat::new(prec);
    owned_a.assign_small(11);
    let mut owned_r = BigFloat::new(prec);
    newton::recip(&mut owned_r, &mut owned_a, &mut strategy, &mut NoOpTicker).unwrap();

    assert_eq!(r.digits(), owned_r.digits());
    assert_eq!(r.exponent(), owned_r.exponent());
    assert_eq!(r.compare(&owned_r), Ordering::Equal);
}

#[test]
fn arena_windows_shrink_from_the_bottom() {
    let arena = DigitArena::with_capacity(1024);
    let storage = arena.alloc_slice::<Digit>(64);
    let mut f = BigFloat::from_view(storage, 4).unwrap();
    assert_eq!(f.total_len(), 6);
    f.assign_small(-5);
    assert_eq!(f.compare_small(-5), Ordering::Equal);
    // the window sits at the bottom of the slice, so it can only shrink
    assert!(f.resize(40).is_err());
    f.resize(2).unwrap();
    assert_eq!(f.compare_small(-5), Ordering::Equal);
    f.resize(4).unwrap();
    assert_eq!(f.total_len(), 6);
}

#[test]
fn arena_integers_share_nothing() {
    let arena = DigitArena::new();
    let mut x = BigInt::from_view(arena.alloc_slice::<Digit>(4));
    let mut y = BigInt::from_view_with_capacity(arena.alloc_slice::<Digit>(8), 3).unwrap();
    x.assign_small(-70_000);
    y.assign_small(30_000);
    assert_eq!(y.capacity(), 3);

    let mut sum = BigInt::from_view(arena.alloc_slice::<Digit>(4));
    sum.add(&x, &y);
    assert_eq!(sum.compare_small(-40_000), Ordering::Equal);
    assert_eq!(sum.sign(), Sign::Negative);

    #[cfg(debug_assertions)]
    {
        assert!(!x.shares_storage_with(&y));
        assert!(x.shares_storage_with(&x));
    }
}

#[test]
fn undersized_views_are_rejected() {
    let arena = DigitArena::new();
    assert!(BigFloat::from_view(arena.alloc_slice::<Digit>(3), 4).is_err());
    assert!(BigInt::from_view_with_capacity(arena.alloc_slice::<Digit>(2), 3).is_err());
}

#[test]
fn reset_releases_everything() {
    let mut arena = DigitArena::new();
    {
        let mut f = BigFloat::from_view(arena.alloc_slice::<Digit>(10), 8).unwrap();
        f.assign_small(1);
        f.div_small_assign(3u32).unwrap();
        assert!(!f.is_zero());
    }
    arena.reset();
    let fresh = arena.alloc_slice::<Digit>(10);
    let f = BigFloat::from_view(fresh, 8).unwrap();
    assert!(f.is_zero());
}
