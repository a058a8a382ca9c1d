use crate::types::Product;

#[allow(clippy::too_many_arguments)]
fn artwork(
    id: u64,
    name: &str,
    price: f64,
    image: &str,
    brand: &str,
    company: &str,
    featured: bool,
    size: &[&str],
    color: &[&str],
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        image: image.to_string(),
        brand: brand.to_string(),
        company: company.to_string(),
        featured,
        size: size.iter().map(|s| s.to_string()).collect(),
        color: color.iter().map(|c| c.to_string()).collect(),
        description: None,
    }
}

/// The artworks the storefront ships with when no catalog file is configured.
pub fn seed_products() -> Vec<Product> {
    vec![
        artwork(
            1,
            "Vibrant Dreamscape",
            215.00,
            "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5",
            "Sarah Johnson",
            "abstract",
            true,
            &["Cartoon Characters", "Digital Art"],
            &["acrylic", "oil"],
        ),
        artwork(
            2,
            "Serene Portrait",
            184.00,
            "https://images.unsplash.com/photo-1547891654-e66ed7ebb968",
            "Michael Chen",
            "portrait",
            false,
            &["Face Portraits"],
            &["oil", "watercolor"],
        ),
        artwork(
            3,
            "Digital Landscape",
            127.00,
            "https://images.unsplash.com/photo-1549490349-8643362247b5",
            "Elena Rodriguez",
            "digital",
            true,
            &["Digital Art"],
            &["digital", "color"],
        ),
        artwork(
            4,
            "Urban Expression",
            174.00,
            "https://images.unsplash.com/photo-1574182245530-967d9b3831af",
            "Jamal Wilson",
            "street",
            false,
            &["Cartoon Characters"],
            &["acrylic", "airbrush"],
        ),
        artwork(
            5,
            "Mushroom Trip",
            165.00,
            "https://res.cloudinary.com/dsoglviw7/image/upload/v1746371922/mushroom_trip_vkazvz.jpg",
            "Olivia Kim",
            "nature",
            true,
            &["Digital Art"],
            &["watercolor", "ink"],
        ),
        artwork(
            6,
            "Krisz the Turtle",
            189.00,
            "https://res.cloudinary.com/dsoglviw7/image/upload/v1746371921/Krisz_u29vph.jpg",
            "Alex Thompson",
            "pop",
            true,
            &["Cartoon Characters"],
            &["acrylic", "color"],
        ),
        artwork(
            7,
            "Classic Still Life",
            291.00,
            "https://images.unsplash.com/photo-1547826039-bfc35e0f1ea8",
            "Isabella Martinez",
            "still-life",
            false,
            &["Face Portraits"],
            &["oil"],
        ),
        artwork(
            8,
            "Kilian",
            207.00,
            "https://res.cloudinary.com/dsoglviw7/image/upload/v1746371922/Kilian_k6bqym.jpg",
            "Daniel Lee",
            "cartoon",
            false,
            &["Cartoon Characters"],
            &["latex", "acrylic"],
        ),
        artwork(
            9,
            "Mountain Serenity",
            164.00,
            "https://images.unsplash.com/photo-1543857778-c4a1a3e0b2eb",
            "Sophie Miller",
            "landscape",
            true,
            &["Digital Art"],
            &["oil", "acrylic"],
        ),
        artwork(
            10,
            "Toddler",
            125.00,
            "https://res.cloudinary.com/dsoglviw7/image/upload/v1746371924/toddler_ck5div.jpg",
            "Ryan Parker",
            "portrait",
            false,
            &["Face Portraits", "Digital Art"],
            &["digital", "color"],
        ),
        artwork(
            11,
            "Abstract Emotions",
            185.00,
            "https://images.unsplash.com/photo-1565799557186-1272a69ebc4a",
            "Emma Davis",
            "abstract",
            true,
            &["Digital Art"],
            &["watercolor", "ink"],
        ),
        artwork(
            12,
            "Character Composition",
            195.00,
            "https://images.unsplash.com/photo-1578301978693-85fa9c0320b9",
            "Noah Garcia",
            "cartoon",
            false,
            &["Cartoon Characters"],
            &["acrylic", "color"],
        ),
    ]
}
