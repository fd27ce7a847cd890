//! Property-based invariant tests for geometry primitives (Rect, Size, Padding).
//!
//! 1. Union is commutative and contains both inputs.
//! 2. Intersection is commutative and fits within both inputs.
//! 3. Overlap agrees with intersection.
//! 4. Inner padding never grows a rectangle and never goes negative.
//! 5. Translation preserves size and shifts edges exactly.

use pressure_core::geometry::{Padding, Rect, Size};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

// Integral coordinates keep float comparisons exact.
fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500)
        .prop_map(|(x, y, w, h)| Rect::new(x.into(), y.into(), w.into(), h.into()))
}

fn padding_strategy() -> impl Strategy<Value = Padding> {
    (0u16..=100, 0u16..=100).prop_map(|(h, v)| Padding::new(h.into(), v.into()))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Union
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn union_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_contains_both(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        for r in [a, b] {
            prop_assert!(u.left() <= r.left() && u.top() <= r.top());
            prop_assert!(u.right() >= r.right() && u.bottom() >= r.bottom());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Intersection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn intersection_commutative(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.intersection_opt(&b), b.intersection_opt(&a));
    }

    #[test]
    fn intersection_fits_within_both(a in rect_strategy(), b in rect_strategy()) {
        if let Some(inter) = a.intersection_opt(&b) {
            prop_assert!(inter.left() >= a.left() && inter.left() >= b.left());
            prop_assert!(inter.top() >= a.top() && inter.top() >= b.top());
            prop_assert!(inter.right() <= a.right() && inter.right() <= b.right());
            prop_assert!(inter.bottom() <= a.bottom() && inter.bottom() <= b.bottom());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overlap_matches_intersection(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.overlaps(&b), a.intersection_opt(&b).is_some());
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Inner padding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inner_shrinks(r in rect_strategy(), p in padding_strategy()) {
        let inner = r.inner(p);
        prop_assert!(inner.width <= r.width && inner.height <= r.height);
        prop_assert!(inner.width >= 0.0 && inner.height >= 0.0);
        prop_assert_eq!(inner.x, r.x + p.horizontal / 2.0);
        prop_assert_eq!(inner.y, r.y + p.vertical / 2.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Translation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn translate_preserves_size(r in rect_strategy(), dx in -200i16..=200, dy in -200i16..=200) {
        let moved = r.translate(dx.into(), dy.into());
        prop_assert_eq!(moved.size(), r.size());
        prop_assert_eq!(moved.right(), r.right() + f64::from(dx));
        prop_assert_eq!(moved.bottom(), r.bottom() + f64::from(dy));
    }

    #[test]
    fn padded_size_adds_totals(w in 0u16..=1000, h in 0u16..=1000, p in padding_strategy()) {
        let s = Size::new(w.into(), h.into()).padded(p);
        prop_assert_eq!(s.width, f64::from(w) + p.horizontal);
        prop_assert_eq!(s.height, f64::from(h) + p.vertical);
    }
}
