// ⚖️ Price Comparison
// Uses only the public read accessors of Entry

use crate::entry::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceComparison {
    AGreater,
    BGreater,
    Equal,
}

impl PriceComparison {
    /// Same comparison seen from the other side
    pub fn reverse(self) -> Self {
        match self {
            PriceComparison::AGreater => PriceComparison::BGreater,
            PriceComparison::BGreater => PriceComparison::AGreater,
            PriceComparison::Equal => PriceComparison::Equal,
        }
    }
}

/// Report which entry is more expensive
pub fn compare_price(a: &Entry, b: &Entry) -> PriceComparison {
    if a.price() > b.price() {
        PriceComparison::AGreater
    } else if a.price() < b.price() {
        PriceComparison::BGreater
    } else {
        PriceComparison::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compare_price() {
        let dune = Entry::physical("Dune", "Herbert", 20.0);
        let orwell = Entry::physical("1984", "Orwell", 15.0);
        let ebook = Entry::electronic("Dune", "Herbert", 20.0, 3.0);

        assert_eq!(compare_price(&dune, &orwell), PriceComparison::AGreater);
        assert_eq!(compare_price(&orwell, &dune), PriceComparison::BGreater);
        assert_eq!(compare_price(&dune, &ebook), PriceComparison::Equal);
    }

    proptest! {
        #[test]
        fn prop_compare_is_antisymmetric(a in 0.0f64..1_000.0, b in 0.0f64..1_000.0) {
            let first = Entry::physical("A", "X", a);
            let second = Entry::electronic("B", "Y", b, 1.0);

            let forward = compare_price(&first, &second);
            prop_assert_eq!(compare_price(&second, &first), forward.reverse());
            prop_assert_eq!(forward == PriceComparison::Equal, a == b);
        }
    }
}
