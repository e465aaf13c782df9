//! The built-in product table.
//!
//! Only laptops are stocked; the desktop and accessory categories exist but
//! are empty.

use voltcart_core::{Category, CurrencyCode, Price, Product, ProductId, ProductSpec};

/// Specification keys, in display order.
const SPEC_KEYS: [&str; 8] = [
    "processor",
    "ram",
    "storage",
    "display",
    "graphics",
    "battery",
    "weight",
    "color",
];

struct Row {
    id: i32,
    name: &'static str,
    brand: &'static str,
    model: &'static str,
    description: &'static str,
    price: i64,
    condition: &'static str,
    image: &'static str,
    rating: f32,
    specs: [&'static str; 8],
}

const LAPTOPS: [Row; 14] = [
    Row {
        id: 1,
        name: "Apple MacBook Air M4 14inch",
        brand: "Apple",
        model: "M4 Air",
        description: "14-inch Retina display, M4 chip, 16GB RAM, 256GB SSD",
        price: 82_000,
        condition: "new",
        image: "Apple m4 air.jpeg",
        rating: 4.7,
        specs: [
            "Apple M4",
            "16GB Unified Memory",
            "256GB SSD",
            "14-inch Retina display",
            "Apple M4 graphics",
            "Up to 18 hours",
            "2.8 pounds",
            "Space Gray",
        ],
    },
    Row {
        id: 2,
        name: "Apple MacBook pro A1989 with Touch Bar",
        brand: "Apple",
        model: "A1989",
        description: "16-inch Retina display, Intel Core i5, 8GB RAM, 256GB SSD",
        price: 21_500,
        condition: "new",
        image: "A1989.jpg",
        rating: 4.8,
        specs: [
            "Intel Core i5",
            "8GB RAM",
            "256GB SSD",
            "16-inch Retina display",
            "Integrated Intel Graphics",
            "Up to 14 hours",
            "3.2 pounds",
            "Black",
        ],
    },
    Row {
        id: 3,
        name: "Apple MacBook pro M1 (2021)",
        brand: "Apple",
        model: "M1 Pro",
        description: "16-inch Retina display, M1 chip, 32GB RAM, 512GB SSD",
        price: 84_000,
        condition: "new,used",
        image: "m1 pro 16inch.jpg",
        rating: 4.8,
        specs: [
            "Apple M1",
            "32GB RAM",
            "512GB SSD",
            "16-inch Retina display",
            "Apple M1 graphics",
            "Up to 21 hours",
            "3.5 pounds",
            "Silver",
        ],
    },
    Row {
        id: 4,
        name: "Apple MacBook M3 Pro",
        brand: "Apple",
        model: "M3 Pro",
        description: "16-inch Retina display, M3 chip, 18GB RAM, 512GB SSD",
        price: 84_000,
        condition: "new",
        image: "M3 pro.png",
        rating: 4.8,
        specs: [
            "Apple M3",
            "18GB RAM",
            "512GB SSD",
            "16-inch Retina display",
            "Apple M3 graphics",
            "Up to 21 hours",
            "3.5 pounds",
            "Silver",
        ],
    },
    Row {
        id: 5,
        name: "Dell latitude 5420",
        brand: "Dell",
        model: "5420",
        description: "15.6-inch 360Hz display, Intel Core i7, 11th gen, 16GB RAM, 512GB SSD, with Touchpad",
        price: 21_500,
        condition: "new",
        image: "Dell 5420.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "16GB RAM",
            "512GB SSD",
            "15.6-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 6,
        name: "Lenovo L460",
        brand: "Lenovo",
        model: "L460",
        description: "15.6-inch 360Hz display, Intel Core i5, 6th gen, 8GB RAM, 512GB SSD",
        price: 11_500,
        condition: "new",
        image: "Lenovo L460.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "16GB RAM",
            "512GB SSD",
            "15.6-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 7,
        name: "Lenovo X1 Yoga",
        brand: "Lenovo",
        model: "X1 Yoga",
        description: "14-inch 360Hz display, Intel Core i7, 8th gen, 16GB RAM, 256GB NVMe SSD",
        price: 20_000,
        condition: "new",
        image: "X1 yoga.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "16GB RAM",
            "256GB NVMe SSD",
            "15.6-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 8,
        name: "Lenovo X1 Carbon",
        brand: "Lenovo",
        model: "X1 Carbon",
        description: "14-inch 360Hz display, Intel Core i7, 8th gen, 16GB RAM, 256GB NVMe SSD",
        price: 22_500,
        condition: "new",
        image: "X1 carbon.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "16GB RAM",
            "256GB NVMe SSD",
            "14-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 9,
        name: "Dell Latitude 3420",
        brand: "Dell",
        model: "Latitude 3420",
        description: "14-inch 360Hz display, Intel Core i5, 11th gen, 8GB RAM, 256GB SSD",
        price: 18_000,
        condition: "new",
        image: "Dell 3420.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i5",
            "8GB RAM",
            "256GB SSD",
            "14-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 10,
        name: "HP EliteBook 440 G8",
        brand: "HP",
        model: "EliteBook 440 G8",
        description: "14-inch 360Hz display, Intel Core i5, 11th gen, 8GB RAM, 256GB NVMe SSD",
        price: 18_000,
        condition: "new",
        image: "HP 440 G8.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i5",
            "8GB RAM",
            "256GB NVMe SSD",
            "14-inch 360Hz display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 11,
        name: "HP Pavilion 15",
        brand: "HP",
        model: "Pavilion 15",
        description: "15.6-inch 360Hz display, Intel Core i5, 7th gen, 16GB RAM, 512GB SSD, Backlit Keyboard",
        price: 22_500,
        condition: "new",
        image: "Pavilion i5.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i5",
            "16GB RAM",
            "512GB SSD",
            "15.6-inch 360Hz display",
            "4GB NVIDIA Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 12,
        name: "HP Pavilion gaming 15",
        brand: "HP",
        model: "Pavilion 15",
        description: "15.6-inch 360Hz display, AMD Ryzen 5 4600H, 7th gen, 16GB RAM, 512GB SSD, Backlit Keyboard",
        price: 24_500,
        condition: "new",
        image: "HP amd 5.jpg",
        rating: 4.9,
        specs: [
            "AMD Ryzen 5",
            "16GB RAM",
            "512GB SSD",
            "15.6-inch 360Hz display",
            "4GB NVIDIA Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 13,
        name: "Dell Latitude 5410",
        brand: "Dell",
        model: "Latitude 5410",
        description: "14-inch FHD display, Intel Core i7, 10th gen, 8GB RAM, 256GB SSD",
        price: 24_500,
        condition: "new",
        image: "Dell 5410.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "8GB RAM",
            "256GB SSD",
            "14-inch FHD display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
    Row {
        id: 14,
        name: "Dell Latitude 7490",
        brand: "Dell",
        model: "Latitude 7490",
        description: "14-inch FHD display, Intel Core i7, 8th gen, 8GB RAM, 256GB SSD",
        price: 24_500,
        condition: "new",
        image: "Dell 7490.jpg",
        rating: 4.9,
        specs: [
            "Intel Core i7",
            "8GB RAM",
            "256GB SSD",
            "14-inch FHD display",
            "Integrated Intel Graphics",
            "Up to 8 hours",
            "4.3 pounds",
            "Obsidian Black",
        ],
    },
];

fn laptop(row: &Row) -> Product {
    Product {
        id: ProductId::new(row.id),
        name: row.name.to_owned(),
        brand: row.brand.to_owned(),
        model: row.model.to_owned(),
        description: row.description.to_owned(),
        price: Price::from_units(row.price, CurrencyCode::NPR),
        category: Category::Laptops,
        condition: row.condition.to_owned(),
        image: format!("/static/images/{}", row.image),
        rating: row.rating,
        specs: SPEC_KEYS
            .iter()
            .zip(row.specs)
            .map(|(key, value)| ProductSpec {
                key: (*key).to_owned(),
                value: value.to_owned(),
            })
            .collect(),
    }
}

/// Every stocked product, in catalog order.
pub(super) fn products() -> Vec<Product> {
    LAPTOPS.iter().map(laptop).collect()
}
