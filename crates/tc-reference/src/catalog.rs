use tc_thermocouple::TypeCode;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThermocoupleCatalogEntry {
    pub code: TypeCode,
    pub display_name: &'static str,
    pub positive_leg: &'static str,
    pub negative_leg: &'static str,
    /// Span of the forward EMF function, °C.
    pub range_c: (f64, f64),
    pub aliases: &'static [&'static str],
}

impl ThermocoupleCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.code.key().to_ascii_lowercase() == query
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self.positive_leg.to_ascii_lowercase().contains(&query)
            || self.negative_leg.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const STANDARD_CATALOG: [ThermocoupleCatalogEntry; 8] = [
    ThermocoupleCatalogEntry {
        code: TypeCode::B,
        display_name: "Type B",
        positive_leg: "Pt-30%Rh",
        negative_leg: "Pt-6%Rh",
        range_c: (0.0, 1820.0),
        aliases: &["platinum-rhodium", "ptrh30-ptrh6"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::E,
        display_name: "Type E",
        positive_leg: "Ni-Cr (Chromel)",
        negative_leg: "Cu-Ni (Constantan)",
        range_c: (-270.0, 1000.0),
        aliases: &["chromel-constantan"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::J,
        display_name: "Type J",
        positive_leg: "Fe",
        negative_leg: "Cu-Ni (Constantan)",
        range_c: (-210.0, 1200.0),
        aliases: &["iron-constantan"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::K,
        display_name: "Type K",
        positive_leg: "Ni-Cr (Chromel)",
        negative_leg: "Ni-Al (Alumel)",
        range_c: (-270.0, 1372.0),
        aliases: &["chromel-alumel"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::N,
        display_name: "Type N",
        positive_leg: "Ni-Cr-Si (Nicrosil)",
        negative_leg: "Ni-Si (Nisil)",
        range_c: (-270.0, 1300.0),
        aliases: &["nicrosil-nisil"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::R,
        display_name: "Type R",
        positive_leg: "Pt-13%Rh",
        negative_leg: "Pt",
        range_c: (-50.0, 1768.1),
        aliases: &["platinum-rhodium", "ptrh13-pt"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::S,
        display_name: "Type S",
        positive_leg: "Pt-10%Rh",
        negative_leg: "Pt",
        range_c: (-50.0, 1768.1),
        aliases: &["platinum-rhodium", "ptrh10-pt"],
    },
    ThermocoupleCatalogEntry {
        code: TypeCode::T,
        display_name: "Type T",
        positive_leg: "Cu",
        negative_leg: "Cu-Ni (Constantan)",
        range_c: (-270.0, 400.0),
        aliases: &["copper-constantan"],
    },
];

pub fn standard_catalog() -> &'static [ThermocoupleCatalogEntry] {
    &STANDARD_CATALOG
}

pub fn catalog_entry(code: TypeCode) -> Option<&'static ThermocoupleCatalogEntry> {
    STANDARD_CATALOG.iter().find(|entry| entry.code == code)
}

pub fn filter_catalog(query: &str) -> Vec<ThermocoupleCatalogEntry> {
    standard_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
