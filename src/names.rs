// Written by chroma-names-tools

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

// Reference colors: 152 entries, 92 names
lazy_static! {
  pub(crate) static ref COLORS: Vec<ColorEntry> = vec![
    ColorEntry::new("Bright Red", 1.00, 0.00, 0.00),
    ColorEntry::new("Red", 0.90, 0.10, 0.10),
    ColorEntry::new("Red", 0.80, 0.05, 0.05),
    ColorEntry::new("Red", 0.85, 0.15, 0.20),
    ColorEntry::new("Red", 0.93, 0.20, 0.15),
    ColorEntry::new("Crimson", 0.86, 0.08, 0.24),
    ColorEntry::new("Crimson", 0.78, 0.06, 0.23),
    ColorEntry::new("Scarlet", 1.00, 0.14, 0.00),
    ColorEntry::new("Cherry", 0.87, 0.19, 0.39),
    ColorEntry::new("Dark Red", 0.55, 0.00, 0.00),
    ColorEntry::new("Dark Red", 0.60, 0.07, 0.07),
    ColorEntry::new("Maroon", 0.50, 0.00, 0.00),
    ColorEntry::new("Maroon", 0.45, 0.05, 0.10),
    ColorEntry::new("Burgundy", 0.50, 0.00, 0.13),
    ColorEntry::new("Burgundy", 0.44, 0.09, 0.17),
    ColorEntry::new("Wine", 0.45, 0.18, 0.22),
    ColorEntry::new("Brick", 0.70, 0.25, 0.20),
    ColorEntry::new("Brick", 0.61, 0.22, 0.18),
    ColorEntry::new("Rust", 0.72, 0.25, 0.05),
    ColorEntry::new("Terracotta", 0.89, 0.45, 0.36),
    ColorEntry::new("Terracotta", 0.80, 0.40, 0.30),
    ColorEntry::new("Coral", 1.00, 0.50, 0.31),
    ColorEntry::new("Coral", 0.97, 0.51, 0.47),
    ColorEntry::new("Salmon", 0.98, 0.50, 0.45),
    ColorEntry::new("Salmon", 0.91, 0.59, 0.48),
    ColorEntry::new("Rose", 0.90, 0.40, 0.50),
    ColorEntry::new("Dusty Rose", 0.86, 0.60, 0.62),
    ColorEntry::new("Dusty Rose", 0.79, 0.54, 0.55),
    ColorEntry::new("Pink", 1.00, 0.75, 0.80),
    ColorEntry::new("Pink", 0.98, 0.68, 0.75),
    ColorEntry::new("Baby Pink", 0.96, 0.76, 0.76),
    ColorEntry::new("Blush", 0.87, 0.36, 0.51),
    ColorEntry::new("Hot Pink", 1.00, 0.41, 0.71),
    ColorEntry::new("Hot Pink", 0.95, 0.30, 0.62),
    ColorEntry::new("Fuchsia", 1.00, 0.00, 1.00),
    ColorEntry::new("Magenta", 1.00, 0.00, 1.00),
    ColorEntry::new("Magenta", 0.85, 0.10, 0.70),
    ColorEntry::new("Orange", 1.00, 0.65, 0.00),
    ColorEntry::new("Orange", 1.00, 0.55, 0.10),
    ColorEntry::new("Orange", 0.95, 0.50, 0.05),
    ColorEntry::new("Burnt Orange", 0.80, 0.33, 0.00),
    ColorEntry::new("Burnt Orange", 0.75, 0.36, 0.10),
    ColorEntry::new("Tangerine", 0.95, 0.52, 0.00),
    ColorEntry::new("Peach", 1.00, 0.80, 0.64),
    ColorEntry::new("Peach", 1.00, 0.85, 0.73),
    ColorEntry::new("Apricot", 0.98, 0.81, 0.69),
    ColorEntry::new("Amber", 1.00, 0.75, 0.00),
    ColorEntry::new("Yellow", 1.00, 1.00, 0.00),
    ColorEntry::new("Yellow", 0.95, 0.90, 0.10),
    ColorEntry::new("Yellow", 1.00, 0.93, 0.20),
    ColorEntry::new("Lemon", 1.00, 0.97, 0.30),
    ColorEntry::new("Mustard", 0.88, 0.68, 0.10),
    ColorEntry::new("Mustard", 0.80, 0.62, 0.15),
    ColorEntry::new("Gold", 1.00, 0.84, 0.00),
    ColorEntry::new("Gold", 0.85, 0.65, 0.13),
    ColorEntry::new("Butter", 1.00, 0.95, 0.60),
    ColorEntry::new("Cream", 1.00, 0.99, 0.82),
    ColorEntry::new("Cream", 0.96, 0.93, 0.80),
    ColorEntry::new("Ivory", 1.00, 1.00, 0.94),
    ColorEntry::new("Beige", 0.96, 0.96, 0.86),
    ColorEntry::new("Beige", 0.91, 0.86, 0.75),
    ColorEntry::new("Khaki", 0.76, 0.69, 0.57),
    ColorEntry::new("Khaki", 0.94, 0.90, 0.55),
    ColorEntry::new("Bright Green", 0.00, 1.00, 0.00),
    ColorEntry::new("Green", 0.00, 0.50, 0.00),
    ColorEntry::new("Green", 0.10, 0.60, 0.10),
    ColorEntry::new("Green", 0.20, 0.70, 0.25),
    ColorEntry::new("Lime", 0.75, 1.00, 0.00),
    ColorEntry::new("Lime", 0.60, 0.90, 0.20),
    ColorEntry::new("Chartreuse", 0.50, 1.00, 0.00),
    ColorEntry::new("Olive", 0.50, 0.50, 0.00),
    ColorEntry::new("Olive", 0.42, 0.45, 0.14),
    ColorEntry::new("Forest Green", 0.13, 0.55, 0.13),
    ColorEntry::new("Forest Green", 0.09, 0.40, 0.12),
    ColorEntry::new("Hunter Green", 0.21, 0.37, 0.23),
    ColorEntry::new("Emerald", 0.31, 0.78, 0.47),
    ColorEntry::new("Jade", 0.00, 0.66, 0.42),
    ColorEntry::new("Mint", 0.60, 1.00, 0.80),
    ColorEntry::new("Mint", 0.67, 0.94, 0.82),
    ColorEntry::new("Seafoam", 0.62, 0.89, 0.75),
    ColorEntry::new("Sage", 0.70, 0.75, 0.60),
    ColorEntry::new("Sage", 0.74, 0.80, 0.66),
    ColorEntry::new("Pistachio", 0.58, 0.77, 0.45),
    ColorEntry::new("Teal", 0.00, 0.50, 0.50),
    ColorEntry::new("Teal", 0.00, 0.43, 0.45),
    ColorEntry::new("Turquoise", 0.25, 0.88, 0.82),
    ColorEntry::new("Turquoise", 0.19, 0.84, 0.78),
    ColorEntry::new("Aqua", 0.00, 1.00, 1.00),
    ColorEntry::new("Cyan", 0.00, 1.00, 1.00),
    ColorEntry::new("Cyan", 0.10, 0.90, 0.90),
    ColorEntry::new("Blue", 0.00, 0.00, 1.00),
    ColorEntry::new("Blue", 0.10, 0.20, 0.90),
    ColorEntry::new("Blue", 0.15, 0.30, 0.85),
    ColorEntry::new("Royal Blue", 0.25, 0.41, 0.88),
    ColorEntry::new("Cobalt", 0.00, 0.28, 0.67),
    ColorEntry::new("Denim", 0.08, 0.38, 0.74),
    ColorEntry::new("Denim", 0.21, 0.35, 0.54),
    ColorEntry::new("Navy", 0.00, 0.00, 0.50),
    ColorEntry::new("Navy", 0.00, 0.13, 0.38),
    ColorEntry::new("Navy", 0.06, 0.11, 0.30),
    ColorEntry::new("Midnight Blue", 0.10, 0.10, 0.44),
    ColorEntry::new("Sky Blue", 0.53, 0.81, 0.92),
    ColorEntry::new("Baby Blue", 0.54, 0.81, 0.94),
    ColorEntry::new("Light Blue", 0.68, 0.85, 0.90),
    ColorEntry::new("Light Blue", 0.60, 0.78, 0.95),
    ColorEntry::new("Powder Blue", 0.69, 0.88, 0.90),
    ColorEntry::new("Steel Blue", 0.27, 0.51, 0.71),
    ColorEntry::new("Slate Blue", 0.42, 0.35, 0.80),
    ColorEntry::new("Periwinkle", 0.80, 0.80, 1.00),
    ColorEntry::new("Periwinkle", 0.76, 0.80, 0.95),
    ColorEntry::new("Purple", 0.50, 0.00, 0.50),
    ColorEntry::new("Purple", 0.55, 0.15, 0.65),
    ColorEntry::new("Purple", 0.45, 0.10, 0.55),
    ColorEntry::new("Violet", 0.56, 0.00, 1.00),
    ColorEntry::new("Violet", 0.93, 0.51, 0.93),
    ColorEntry::new("Deep Purple", 0.30, 0.10, 0.40),
    ColorEntry::new("Deep Purple", 0.25, 0.05, 0.35),
    ColorEntry::new("Eggplant", 0.38, 0.25, 0.32),
    ColorEntry::new("Plum", 0.56, 0.27, 0.52),
    ColorEntry::new("Lavender", 0.90, 0.90, 0.98),
    ColorEntry::new("Lavender", 0.71, 0.49, 0.86),
    ColorEntry::new("Lilac", 0.78, 0.64, 0.78),
    ColorEntry::new("Mauve", 0.88, 0.69, 1.00),
    ColorEntry::new("Mauve", 0.80, 0.60, 0.80),
    ColorEntry::new("Brown", 0.59, 0.29, 0.00),
    ColorEntry::new("Brown", 0.55, 0.27, 0.07),
    ColorEntry::new("Brown", 0.45, 0.26, 0.14),
    ColorEntry::new("Chocolate", 0.48, 0.25, 0.00),
    ColorEntry::new("Chocolate", 0.36, 0.20, 0.09),
    ColorEntry::new("Chestnut", 0.58, 0.27, 0.21),
    ColorEntry::new("Coffee", 0.44, 0.31, 0.22),
    ColorEntry::new("Mocha", 0.38, 0.26, 0.20),
    ColorEntry::new("Camel", 0.76, 0.60, 0.42),
    ColorEntry::new("Tan", 0.82, 0.71, 0.55),
    ColorEntry::new("Tan", 0.85, 0.70, 0.50),
    ColorEntry::new("Taupe", 0.28, 0.24, 0.20),
    ColorEntry::new("Sand", 0.76, 0.70, 0.50),
    ColorEntry::new("Sand", 0.88, 0.80, 0.62),
    ColorEntry::new("White", 1.00, 1.00, 1.00),
    ColorEntry::new("White", 0.98, 0.98, 0.98),
    ColorEntry::new("Off White", 0.96, 0.96, 0.94),
    ColorEntry::new("Light Gray", 0.83, 0.83, 0.83),
    ColorEntry::new("Light Gray", 0.87, 0.87, 0.87),
    ColorEntry::new("Silver", 0.75, 0.75, 0.75),
    ColorEntry::new("Medium Gray", 0.61, 0.61, 0.61),
    ColorEntry::new("Dark Gray", 0.38, 0.38, 0.38),
    ColorEntry::new("Dark Gray", 0.33, 0.33, 0.35),
    ColorEntry::new("Charcoal", 0.21, 0.27, 0.31),
    ColorEntry::new("Charcoal", 0.21, 0.21, 0.21),
    ColorEntry::new("Black", 0.00, 0.00, 0.00),
    ColorEntry::new("Black", 0.05, 0.05, 0.05),
    ColorEntry::new("Black", 0.08, 0.08, 0.10),
  ];
}

// Style groups: 13
lazy_static! {
  pub(crate) static ref STYLES: Vec<StyleGroup> = vec![
    StyleGroup::new("Academia", ["Navy", "Ivory", "Burgundy", "Brown", "Chocolate", "Coffee", "Forest Green", "Hunter Green", "Camel", "Mustard", "Olive"]),
    StyleGroup::new("Boho", ["Terracotta", "Rust", "Mustard", "Burnt Orange", "Sand", "Camel", "Olive", "Brick", "Dusty Rose"]),
    StyleGroup::new("Coastal", ["White", "Off White", "Sky Blue", "Baby Blue", "Light Blue", "Turquoise", "Aqua", "Seafoam", "Sand", "Teal", "Powder Blue"]),
    StyleGroup::new("Cottagecore", ["Sage", "Cream", "Butter", "Baby Pink", "Lavender", "Mint", "Peach", "Beige", "Pistachio"]),
    StyleGroup::new("Earthy", ["Brown", "Olive", "Khaki", "Taupe", "Mocha", "Chestnut", "Tan", "Rust", "Hunter Green", "Sage"]),
    StyleGroup::new("Emo", ["Black", "Dark Red", "Charcoal", "Deep Purple", "Hot Pink", "Maroon"]),
    StyleGroup::new("Gothic", ["Black", "Burgundy", "Wine", "Deep Purple", "Eggplant", "Dark Gray", "Crimson"]),
    StyleGroup::new("Minimalist", ["White", "Off White", "Black", "Light Gray", "Medium Gray", "Beige", "Taupe", "Silver"]),
    StyleGroup::new("Pastel", ["Baby Pink", "Baby Blue", "Lavender", "Mint", "Peach", "Lilac", "Butter", "Periwinkle", "Apricot"]),
    StyleGroup::new("Professional", ["Navy", "Ivory", "Charcoal", "Steel Blue", "Medium Gray", "Silver", "White"]),
    StyleGroup::new("Tropical", ["Coral", "Tangerine", "Lime", "Turquoise", "Hot Pink", "Emerald", "Jade", "Yellow", "Fuchsia"]),
    StyleGroup::new("Vintage", ["Mustard", "Olive", "Dusty Rose", "Teal", "Burnt Orange", "Cream", "Mauve", "Brick"]),
    StyleGroup::new("Y2K", ["Hot Pink", "Fuchsia", "Magenta", "Silver", "Cyan", "Lime", "Periwinkle", "Baby Blue", "Violet"]),
  ];
}
