//! Amenity label → icon lookup.
//!
//! Labels are free text typed by owners ("Poêle à bois", "pet-friendly").
//! They are normalized before lookup; anything unknown gets the house icon.

use serde::Serialize;

/// Icons the front-end knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmenityIcon {
    Wifi,
    Utensils,
    Flame,
    Heater,
    Snowflake,
    Sun,
    Leaf,
    TreePine,
    Waves,
    ParkingCircle,
    PawPrint,
    MountainSnow,
    Wind,
    Ship,
    Tv,
    Bath,
    ShowerHead,
    Bed,
    Coffee,
    Users,
    Check,
    PlugZap,
    Bike,
    Droplets,
    Star,
    Warehouse,
    Sofa,
    Home,
}

impl AmenityIcon {
    /// Identifier of the icon in the front-end icon set
    pub fn name(self) -> &'static str {
        match self {
            AmenityIcon::Wifi => "wifi",
            AmenityIcon::Utensils => "utensils",
            AmenityIcon::Flame => "flame",
            AmenityIcon::Heater => "heater",
            AmenityIcon::Snowflake => "snowflake",
            AmenityIcon::Sun => "sun",
            AmenityIcon::Leaf => "leaf",
            AmenityIcon::TreePine => "tree-pine",
            AmenityIcon::Waves => "waves",
            AmenityIcon::ParkingCircle => "parking-circle",
            AmenityIcon::PawPrint => "paw-print",
            AmenityIcon::MountainSnow => "mountain-snow",
            AmenityIcon::Wind => "wind",
            AmenityIcon::Ship => "ship",
            AmenityIcon::Tv => "tv",
            AmenityIcon::Bath => "bath",
            AmenityIcon::ShowerHead => "shower-head",
            AmenityIcon::Bed => "bed",
            AmenityIcon::Coffee => "coffee",
            AmenityIcon::Users => "users",
            AmenityIcon::Check => "check",
            AmenityIcon::PlugZap => "plug-zap",
            AmenityIcon::Bike => "bike",
            AmenityIcon::Droplets => "droplets",
            AmenityIcon::Star => "star",
            AmenityIcon::Warehouse => "warehouse",
            AmenityIcon::Sofa => "sofa",
            AmenityIcon::Home => "home",
        }
    }
}

// Keys are normalized labels, English first, then French spellings.
const AMENITY_ICONS: &[(&str, AmenityIcon)] = &[
    ("wifi", AmenityIcon::Wifi),
    ("kitchen", AmenityIcon::Utensils),
    ("kitchenette", AmenityIcon::Utensils),
    ("cuisine", AmenityIcon::Utensils),
    ("wood stove", AmenityIcon::Flame),
    ("poeleabois", AmenityIcon::Flame),
    ("poele a bois", AmenityIcon::Flame),
    ("fireplace", AmenityIcon::Flame),
    ("cheminee", AmenityIcon::Flame),
    ("fire pit", AmenityIcon::Flame),
    ("foyer", AmenityIcon::Flame),
    ("heating", AmenityIcon::Heater),
    ("chauffage", AmenityIcon::Heater),
    ("air conditioning", AmenityIcon::Snowflake),
    ("climatisation", AmenityIcon::Snowflake),
    ("terrace", AmenityIcon::Sun),
    ("terrasse", AmenityIcon::Sun),
    ("balcony", AmenityIcon::Sun),
    ("balcon", AmenityIcon::Sun),
    ("garden", AmenityIcon::Leaf),
    ("jardin", AmenityIcon::Leaf),
    ("nature", AmenityIcon::TreePine),
    ("hiking trails", AmenityIcon::TreePine),
    ("sentiers de randonnee", AmenityIcon::TreePine),
    ("near the beach", AmenityIcon::Waves),
    ("procheplage", AmenityIcon::Waves),
    ("beach access", AmenityIcon::Waves),
    ("accesplage", AmenityIcon::Waves),
    ("acces a la plage", AmenityIcon::Waves),
    ("parking", AmenityIcon::ParkingCircle),
    ("pets allowed", AmenityIcon::PawPrint),
    ("pet friendly", AmenityIcon::PawPrint),
    ("animaux acceptes", AmenityIcon::PawPrint),
    ("mountain", AmenityIcon::MountainSnow),
    ("montagne", AmenityIcon::MountainSnow),
    ("wind", AmenityIcon::Wind),
    ("vent", AmenityIcon::Wind),
    ("boat", AmenityIcon::Ship),
    ("bateau", AmenityIcon::Ship),
    ("television", AmenityIcon::Tv),
    ("tv", AmenityIcon::Tv),
    ("bathtub", AmenityIcon::Bath),
    ("baignoire", AmenityIcon::Bath),
    ("shower", AmenityIcon::ShowerHead),
    ("douche", AmenityIcon::ShowerHead),
    ("bathroom", AmenityIcon::Bath),
    ("salle de bain", AmenityIcon::Bath),
    ("bedroom", AmenityIcon::Bed),
    ("chambre", AmenityIcon::Bed),
    ("coffee", AmenityIcon::Coffee),
    ("cafe", AmenityIcon::Coffee),
    ("bbq", AmenityIcon::Flame),
    ("barbecue", AmenityIcon::Flame),
    ("guests", AmenityIcon::Users),
    ("invites", AmenityIcon::Users),
    ("hot tub", AmenityIcon::Snowflake),
    ("jacuzzi", AmenityIcon::Snowflake),
    ("pool", AmenityIcon::Waves),
    ("piscine", AmenityIcon::Waves),
    ("essentials", AmenityIcon::Check),
    ("essentiel", AmenityIcon::Check),
    ("open view", AmenityIcon::Sun),
    ("vue degagee", AmenityIcon::Sun),
    ("solar panels", AmenityIcon::PlugZap),
    ("panneaux solaires", AmenityIcon::PlugZap),
    ("dry toilets", AmenityIcon::Leaf),
    ("toilettes seches", AmenityIcon::Leaf),
    ("bike rental", AmenityIcon::Bike),
    ("pret de velos", AmenityIcon::Bike),
    ("kayak", AmenityIcon::Ship),
    ("kayaks", AmenityIcon::Ship),
    ("waterfront deck", AmenityIcon::Droplets),
    ("terrasse sur l eau", AmenityIcon::Droplets),
    ("dock", AmenityIcon::Ship),
    ("quai", AmenityIcon::Ship),
    ("design", AmenityIcon::Star),
    ("container", AmenityIcon::Warehouse),
    ("sofa bed", AmenityIcon::Sofa),
    ("canapelit", AmenityIcon::Sofa),
    ("canape lit", AmenityIcon::Sofa),
];

/// Lowercases, strips accents, turns hyphens and apostrophes into spaces and
/// collapses whitespace.
pub fn normalize(label: &str) -> String {
    let folded: String = label
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            '-' | '\'' | '’' => ' ',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Icon for an amenity label, falling back to [`AmenityIcon::Home`].
pub fn resolve(label: &str) -> AmenityIcon {
    let key = normalize(label);
    AMENITY_ICONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, icon)| *icon)
        .unwrap_or(AmenityIcon::Home)
}

/// An amenity as displayed: the owner's label next to its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmenityItem {
    pub label: String,
    pub icon: AmenityIcon,
}

impl AmenityItem {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            icon: resolve(label),
        }
    }
}
