/// Static reference entity: a named surf spot. Identified externally by the
/// slug derived from name + city; never user-editable.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub name: &'static str,
    pub city: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Spot {
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&format!("{} {}", self.name, self.city))
    }
}

const SPOTS: [Spot; 10] = [
    Spot {
        name: "Plage de Carnac",
        city: "Carnac",
        lat: 47.5986,
        lon: -3.1144,
    },
    Spot {
        name: "La Torche",
        city: "Plomeur",
        lat: 47.8366,
        lon: -4.3475,
    },
    Spot {
        name: "Port Blanc",
        city: "Quiberon",
        lat: 47.5196,
        lon: -3.1516,
    },
    Spot {
        name: "Fort Bloqué",
        city: "Guidel",
        lat: 47.7506,
        lon: -3.4866,
    },
    Spot {
        name: "Plage des Donnants",
        city: "Belle-Île-en-Mer",
        lat: 47.3258,
        lon: -3.2406,
    },
    Spot {
        name: "Les Kaolins",
        city: "Ploemeur",
        lat: 47.7009,
        lon: -3.4601,
    },
    Spot {
        name: "Plage de Kerhillio",
        city: "Erdeven",
        lat: 47.6245,
        lon: -3.1948,
    },
    Spot {
        name: "Pointe de la Falaise",
        city: "Gâvres",
        lat: 47.6897,
        lon: -3.3517,
    },
    Spot {
        name: "Baie des Trépassés",
        city: "Cléden-Cap-Sizun",
        lat: 48.0419,
        lon: -4.6644,
    },
    Spot {
        name: "Plage du Loch",
        city: "Guidel",
        lat: 47.7674,
        lon: -3.5272,
    },
];

#[must_use]
pub fn all() -> &'static [Spot] {
    &SPOTS
}

#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static Spot> {
    SPOTS.iter().find(|s| s.slug() == slug)
}

/// Accent-insensitive substring search over name + city, capped at 8 hits.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Spot> {
    let needle = fold(query);
    if needle.is_empty() {
        return Vec::new();
    }
    SPOTS
        .iter()
        .filter(|s| fold(&format!("{} {}", s.name, s.city)).contains(&needle))
        .take(8)
        .collect()
}

/// Resolves a CLI argument: exact slug first, then best search hit.
#[must_use]
pub fn resolve(query: &str) -> Option<&'static Spot> {
    find_by_slug(query).or_else(|| search(query).into_iter().next())
}

#[must_use]
pub fn default_spot() -> &'static Spot {
    &SPOTS[0]
}

/// Favourite slugs from the preferences file, resolved back to spots in
/// table order; unknown slugs are silently skipped.
#[must_use]
pub fn favourites(slugs: &[String]) -> Vec<&'static Spot> {
    SPOTS
        .iter()
        .filter(|s| {
            let slug = s.slug();
            slugs.iter().any(|f| *f == slug)
        })
        .collect()
}

/// Case-folds, strips the accents occurring in the spot table, and
/// hyphenates; everything non-alphanumeric collapses to a single hyphen.
#[must_use]
pub fn slugify(value: &str) -> String {
    let folded = fold(value);
    let mut out = String::with_capacity(folded.len());
    let mut pending_hyphen = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

fn fold(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(fold_char)
        .collect::<String>()
        .to_lowercase()
}

fn fold_char(ch: char) -> char {
    match ch {
        'à' | 'â' | 'ä' | 'À' | 'Â' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'î' | 'ï' | 'Î' | 'Ï' => 'i',
        'ô' | 'ö' | 'Ô' | 'Ö' => 'o',
        'ù' | 'û' | 'ü' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        _ => ch,
    }
}
