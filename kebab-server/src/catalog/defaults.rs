//! Built-in menu
//!
//! Used when no `CATALOG_PATH` is configured.

use shared::models::{Ingredient, IngredientCategory, SizeKey, SizeSpec};

use super::ComboPreset;

use IngredientCategory::{Extra, Protein, Sauce, Tortilla, Vegetable};

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=200&h=150&fit=crop&crop=center")
}

#[allow(clippy::too_many_arguments)]
fn ingredient(
    id: u32,
    name: &str,
    category: IngredientCategory,
    price: f64,
    protein: f64,
    weight: f64,
    description: &str,
    visual_description: &str,
    color: &str,
    photo: &str,
) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        category,
        price,
        protein,
        weight,
        image: image(photo),
        description: description.to_string(),
        visual_description: visual_description.to_string(),
        color: color.to_string(),
        available: true,
        single_selection: category.is_single_selection(),
    }
}

/// Ingredients in menu display order
#[rustfmt::skip]
pub fn ingredients() -> Vec<Ingredient> {
    vec![
        // Tortillas
        ingredient(20, "White Flour Tortilla", Tortilla, 0.00, 3.2, 50.0,
            "Classic soft white flour tortilla",
            "a soft pale white flour tortilla", "#F5E6D3",
            "photo-1565299624946-b28f40a0ca4b"),
        ingredient(21, "Whole Wheat Tortilla", Tortilla, 0.50, 4.1, 55.0,
            "Healthy whole wheat tortilla",
            "a light brown whole wheat tortilla", "#D4A574",
            "photo-1626191466257-a9e4329fdc5c"),
        ingredient(22, "Spinach Tortilla", Tortilla, 0.75, 3.8, 52.0,
            "Green spinach flavored tortilla",
            "a vibrant green spinach tortilla", "#9ACD32",
            "photo-1623664788841-0c4a2e4ac2e5"),
        ingredient(23, "Tomato Tortilla", Tortilla, 0.75, 3.5, 53.0,
            "Red tomato flavored tortilla",
            "a reddish orange tomato tortilla", "#FF6347",
            "photo-1565299624946-b28f40a0ca4b"),
        // Proteins
        ingredient(1, "Grilled Chicken", Protein, 4.50, 25.4, 120.0,
            "Tender grilled chicken breast strips",
            "golden grilled chicken breast strips with char marks", "#DEB887",
            "photo-1532550907401-a500c9a57435"),
        ingredient(2, "Lamb Kebab", Protein, 6.00, 22.8, 110.0,
            "Tender seasoned lamb kebab meat",
            "juicy spiced lamb kebab slices", "#8B4513",
            "photo-1529692236671-f1f6cf9683ba"),
        ingredient(3, "Beef Doner", Protein, 5.50, 24.6, 115.0,
            "Slow-cooked seasoned beef doner",
            "thin shaved slices of seasoned beef doner", "#A0522D",
            "photo-1546833999-b9f581a1996d"),
        ingredient(4, "Mixed Grill", Protein, 5.75, 24.1, 125.0,
            "Combination of chicken and lamb",
            "a mix of grilled chicken pieces and lamb slices", "#CD853F",
            "photo-1555939594-58d7cb561ad1"),
        ingredient(24, "Falafel", Protein, 4.00, 8.5, 100.0,
            "Crispy homemade falafel balls",
            "crispy golden brown falafel balls", "#DAA520",
            "photo-1601050690597-df0568f70950"),
        // Vegetables
        ingredient(5, "Fresh Lettuce", Vegetable, 0.50, 1.2, 30.0,
            "Crispy iceberg lettuce",
            "crisp shredded green lettuce", "#90EE90",
            "photo-1556909114-4f7a0cb94ac4"),
        ingredient(6, "Fresh Tomatoes", Vegetable, 0.75, 0.9, 40.0,
            "Ripe sliced tomatoes",
            "ripe red tomato slices", "#FF6347",
            "photo-1546094096-0df4bcaaa337"),
        ingredient(7, "Red Onions", Vegetable, 0.50, 1.1, 25.0,
            "Fresh sliced red onions",
            "thin purple red onion rings", "#9370DB",
            "photo-1518977676601-b53f82aba655"),
        ingredient(8, "Cucumbers", Vegetable, 0.60, 0.7, 35.0,
            "Fresh cucumber slices",
            "fresh cucumber slices", "#98FB98",
            "photo-1449300079323-02e209d9d3a6"),
        ingredient(9, "Bell Peppers", Vegetable, 0.80, 1.0, 45.0,
            "Colorful bell pepper mix",
            "colorful red and yellow bell pepper strips", "#FFD700",
            "photo-1563565375-f3fdfdbefa83"),
        ingredient(10, "Pickles", Vegetable, 0.40, 0.3, 20.0,
            "Tangy dill pickles",
            "tangy green pickle slices", "#ADFF2F",
            "photo-1571167635670-3942fb6d4bdc"),
        ingredient(25, "Jalapeños", Vegetable, 0.60, 0.4, 15.0,
            "Spicy jalapeño peppers",
            "sliced green jalapeño rings", "#32CD32",
            "photo-1578662996442-48f60103fc96"),
        // Sauces
        ingredient(11, "Garlic Aioli", Sauce, 0.30, 0.5, 15.0,
            "Creamy garlic aioli sauce",
            "a drizzle of creamy white garlic aioli", "#F5F5DC",
            "photo-1472476443507-c7a5948772fc"),
        ingredient(12, "Hot Sauce", Sauce, 0.30, 0.2, 12.0,
            "Spicy chili hot sauce",
            "a streak of bright red chili hot sauce", "#FF4500",
            "photo-1578662996442-48f60103fc96"),
        ingredient(13, "Tzatziki", Sauce, 0.40, 2.1, 18.0,
            "Cool cucumber yogurt sauce",
            "cool white tzatziki with cucumber flecks", "#F0F8FF",
            "photo-1571197019966-4acc94ba5cd8"),
        ingredient(14, "Tahini Sauce", Sauce, 0.50, 5.8, 20.0,
            "Rich sesame tahini sauce",
            "a ribbon of beige sesame tahini", "#DEB887",
            "photo-1609501676725-7186f0932175"),
        ingredient(15, "Hummus", Sauce, 0.60, 4.9, 25.0,
            "Smooth chickpea hummus",
            "a smooth layer of chickpea hummus", "#D2B48C",
            "photo-1541592106381-b31e9677c0e5"),
        // Extras
        ingredient(16, "Melted Cheese", Extra, 1.00, 8.2, 30.0,
            "Creamy melted cheese",
            "gooey melted yellow cheese", "#FFD700",
            "photo-1486297678162-eb2a19b0a32d"),
        ingredient(17, "Crispy Fries", Extra, 2.00, 2.8, 80.0,
            "Golden french fries inside",
            "golden crispy french fries", "#F4A460",
            "photo-1573080496219-bb080dd4f877"),
        ingredient(18, "Grilled Halloumi", Extra, 2.50, 11.2, 60.0,
            "Grilled halloumi cheese",
            "grilled halloumi slices with grill stripes", "#FFFACD",
            "photo-1631452180519-c014fe946bc7"),
        ingredient(19, "Double Meat", Extra, 3.00, 15.6, 100.0,
            "Double portion of your chosen meat",
            "an extra generous heap of meat", "#8B4513",
            "photo-1555939594-58d7cb561ad1"),
        ingredient(26, "Avocado", Extra, 1.50, 2.0, 40.0,
            "Fresh sliced avocado",
            "creamy green avocado slices", "#9ACD32",
            "photo-1523049673857-eb18f1d7b578"),
        ingredient(27, "Olives", Extra, 0.80, 0.8, 25.0,
            "Mixed Mediterranean olives",
            "glossy black and green olives", "#2F4F4F",
            "photo-1544551763-46a013bb70d5"),
    ]
}

fn size(
    key: SizeKey,
    price: f64,
    length: f64,
    diameter: f64,
    weight: f64,
    serves: &str,
    description: &str,
) -> SizeSpec {
    SizeSpec {
        key,
        price,
        length,
        diameter,
        weight,
        serves: serves.to_string(),
        description: description.to_string(),
    }
}

#[rustfmt::skip]
pub fn sizes() -> Vec<SizeSpec> {
    vec![
        size(SizeKey::Small, 5.00, 15.0, 4.0, 150.0, "1",
            "Perfect for a light meal or snack"),
        size(SizeKey::Medium, 7.00, 20.0, 5.0, 250.0, "1-2",
            "Our most popular size, great for lunch"),
        size(SizeKey::Large, 9.00, 25.0, 6.0, 350.0, "2-3",
            "Hearty portion perfect for dinner"),
        size(SizeKey::Family, 14.00, 35.0, 8.0, 600.0, "3-4",
            "Our largest kebab, great for sharing"),
    ]
}

/// Preset compositions for the "popular" shelf. Prices are computed at request time.
pub fn combos() -> Vec<ComboPreset> {
    vec![
        ComboPreset {
            id: 1,
            name: "Classic Chicken Kebab".into(),
            size: SizeKey::Medium,
            ingredients: vec![20, 1, 5, 6, 7, 11, 13],
            description: "Our most popular chicken kebab with fresh vegetables and creamy sauces"
                .into(),
        },
        ComboPreset {
            id: 2,
            name: "Spicy Lamb Special".into(),
            size: SizeKey::Large,
            ingredients: vec![23, 2, 5, 6, 9, 12, 14],
            description: "For those who like it hot! Lamb with spicy peppers and chili sauce"
                .into(),
        },
        ComboPreset {
            id: 3,
            name: "Vegetarian Delight".into(),
            size: SizeKey::Medium,
            ingredients: vec![22, 5, 6, 7, 8, 9, 15, 18],
            description: "Perfect for vegetarians with grilled halloumi and fresh vegetables"
                .into(),
        },
        ComboPreset {
            id: 4,
            name: "Meat Lovers".into(),
            size: SizeKey::Large,
            ingredients: vec![20, 4, 6, 7, 11, 16, 19],
            description: "Double meat portion with cheese for the ultimate protein experience"
                .into(),
        },
    ]
}
