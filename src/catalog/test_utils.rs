use super::{Concentration, Fragrance, Notes};

fn to_strings(notes: &[&str]) -> Vec<String> {
    notes.iter().map(|n| n.to_string()).collect()
}

/// A minimal fragrance record with the given notes, everything else plain.
pub fn fragrance_with_notes(id: &str, top: &[&str], middle: &[&str], base: &[&str]) -> Fragrance {
    Fragrance {
        id: id.to_string(),
        name: format!("Fragrance {}", id),
        brand: "Test House".to_string(),
        concentration: Concentration::EDP,
        price: 100.0,
        original_price: None,
        rating: 4.0,
        review_count: 10,
        image: String::new(),
        notes: Notes {
            top: to_strings(top),
            middle: to_strings(middle),
            base: to_strings(base),
        },
        description: String::new(),
        longevity: 5,
        projection: 5,
        seasonality: vec![],
        occasions: vec![],
        mood: vec![],
    }
}
