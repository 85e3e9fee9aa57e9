#![forbid(unsafe_code)]

//! Per-visit shuffling of gallery images and marquee items.

use rand::Rng;
use rand::seq::SliceRandom;

/// A uniformly shuffled copy of `items`.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// One entry in the scrolling marquee strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeItem {
    pub text: String,
    pub icon: String,
}

/// Shuffle `texts` and pair each with an icon, cycling through `icons` in
/// order. Returns nothing when `icons` is empty.
#[must_use]
pub fn marquee_items<R: Rng + ?Sized>(texts: &[&str], icons: &[&str], rng: &mut R) -> Vec<MarqueeItem> {
    if icons.is_empty() {
        return Vec::new();
    }
    shuffled(texts, rng)
        .into_iter()
        .enumerate()
        .map(|(i, text)| MarqueeItem {
            text: text.to_owned(),
            icon: icons[i % icons.len()].to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..20).collect();
        let mut out = shuffled(&items, &mut rng);
        assert_eq!(out.len(), items.len());
        out.sort_unstable();
        assert_eq!(out, items);
    }

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffled(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffled(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn source_is_untouched() {
        let items = vec!['a', 'b', 'c'];
        let _ = shuffled(&items, &mut StdRng::seed_from_u64(1));
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn marquee_icons_cycle() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = marquee_items(&["a", "b", "c", "d", "e"], &["✂", "🧵"], &mut rng);
        assert_eq!(items.len(), 5);
        let icons: Vec<&str> = items.iter().map(|m| m.icon.as_str()).collect();
        assert_eq!(icons, ["✂", "🧵", "✂", "🧵", "✂"]);
    }

    #[test]
    fn marquee_without_icons_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(marquee_items(&["a"], &[], &mut rng).is_empty());
    }
}
