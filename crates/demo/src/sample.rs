//! Deterministic sample catalog: six categories, five base names each, a
//! rotating prefix, prices in the 100-1000 range and stock in 1-100.

use shopfront_core::{Product, ProductStatus};

const CATEGORIES: [&str; 6] = ["Electronics", "Clothing", "Books", "Home", "Sports", "Toys"];

const NAMES: [[&str; 5]; 6] = [
    ["Smartphone", "Laptop", "Headphones", "Camera", "Smartwatch"],
    ["T-Shirt", "Jeans", "Jacket", "Hoodie", "Sneakers"],
    ["Novel", "Biography", "Cookbook", "Comic", "Textbook"],
    ["Chair", "Table", "Lamp", "Couch", "Bed"],
    ["Football", "Basketball", "Tennis Racket", "Yoga Mat", "Dumbbells"],
    ["Action Figure", "Puzzle", "Doll", "Board Game", "Toy Car"],
];

const PREFIXES: [&str; 6] = ["Premium", "Ultra", "Eco", "Classic", "Pro", "Smart"];

/// Small xorshift so runs are reproducible without a PRNG dependency.
struct SeededRng(u64);

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_in(&mut self, lo: u64, hi: u64) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        lo + x % (hi - lo + 1)
    }
}

/// Generate `count` products with ids `p1..pN`.
pub fn sample_products(count: usize) -> Vec<Product> {
    let mut rng = SeededRng::new(0x5eed);
    (0..count)
        .map(|i| {
            let id = format!("p{}", i + 1);
            let category = CATEGORIES[i % CATEGORIES.len()];
            let base = NAMES[i % CATEGORIES.len()][i % 5];
            let name = format!("{} {}", PREFIXES[i % PREFIXES.len()], base);
            let price = rng.next_in(100, 1000);
            let stock = rng.next_in(1, 100) as u32;
            let status = if i % 2 == 0 { ProductStatus::Active } else { ProductStatus::Inactive };

            Product::new(&id, &name, category, price, stock, status)
                .expect("generated ids and names are non-empty")
                .with_desc(format!("{name} with high quality and great features"))
                .with_img(format!("https://picsum.photos/seed/{id}/200/140"))
        })
        .collect()
}
