use crate::model::capitalize;

/// The consolidated list of broad color families filters pick from.
pub const COLOR_FAMILIES: [&str; 13] = [
    "Beige",
    "Black",
    "Blue",
    "Brown",
    "Green",
    "Grey",
    "Multicolor",
    "Orange",
    "Pink",
    "Purple",
    "Red",
    "White",
    "Yellow",
];

/// Map a specific color name to its broad family.
///
/// Unmapped names fall back to the capitalized specific color so new
/// shades still render as their own swatch; empty input is "Unknown".
pub fn color_family(specific_color: &str) -> String {
    let cleaned = specific_color.trim().to_lowercase();
    if cleaned.is_empty() {
        return String::from("Unknown");
    }

    match family_for(&cleaned) {
        Some(family) => String::from(family),
        None => capitalize(&cleaned),
    }
}

/// Hex swatch for a broad family. Multicolor has no single value.
pub fn family_hex(family: &str) -> Option<&'static str> {
    let hex = match family {
        "Beige" => "#F5F5DC",
        "Black" => "#000000",
        "Blue" => "#0000FF",
        "Brown" => "#8B4513",
        "Green" => "#008000",
        "Grey" => "#808080",
        "Orange" => "#FFA500",
        "Pink" => "#FFC0CB",
        "Purple" => "#800080",
        "Red" => "#FF0000",
        "White" => "#FFFFFF",
        "Yellow" => "#FFFF00",
        _ => return None,
    };
    Some(hex)
}

fn family_for(cleaned: &str) -> Option<&'static str> {
    let family = match cleaned {
        "black" | "jet black" | "onyx" | "pitch black" => "Black",

        "navy" | "light blue" | "pale blue" | "dark turquoise"
        | "sky blue" | "teal" | "turquoise" | "indigo" | "royal blue"
        | "baby blue" | "cyan" | "midnight blue" | "denim" | "sapphire"
        | "aqua" | "blue jeans" | "dark grey jeans" => "Blue",

        "brown" | "dark brown" | "dusty brown" | "golden brown"
        | "coffee" | "copper" | "mahogany" | "taupe" | "chocolate"
        | "bronze" | "cocoa" | "cinnamon" => "Brown",

        "beige" | "tan" | "khaki" | "camel" | "sand" | "wheat" | "cream"
        | "nude" | "ivory" | "off-white" | "eggshell" | "vanilla"
        | "bone" => "Beige",

        "olive" | "light olive" | "dark green" | "dusty green"
        | "pale green" | "brownish green" | "teal green" | "steel green"
        | "yellow green" | "emerald" | "lime" | "sage" | "mint"
        | "forest green" | "army green" | "khaki green" | "moss"
        | "fern" => "Green",

        "anthracite" | "charcoal" | "dark grey" | "mid grey"
        | "light grey" | "silver" | "slate" | "graphite" | "ash"
        | "smoke" | "steel" | "gunmetal" => "Grey",

        "orange" | "amber" | "rust" | "burnt orange" | "apricot"
        | "tangerine" => "Orange",

        "pink" | "dusty rose" | "magenta" | "fuchsia" | "rose"
        | "salmon" | "coral" | "hot pink" | "blush" | "peach"
        | "pastel pink" => "Pink",

        "purple" | "dark violet" | "steel violet" | "lavender" | "lilac"
        | "violet" | "plum" | "mauve" | "orchid" | "grape" | "aubergine"
        | "hyacinth" => "Purple",

        "red" | "burgundy" | "carmine" | "maroon" | "crimson"
        | "scarlet" | "brick red" | "cherry" | "wine" | "ruby" => "Red",

        "white" | "snow" => "White",

        "yellow" | "gold" | "mustard" | "canary" | "lemon"
        | "light yellow" | "golden" => "Yellow",

        "multicolor" => "Multicolor",

        _ => return None,
    };
    Some(family)
}
