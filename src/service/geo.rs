//! Static coordinate resolution for manual location selections.
//!
//! Coordinate-based provider queries are considerably more reliable than
//! name matching, so manual selections are resolved against this table
//! first and fall back to name-based queries only on a miss. The table
//! carries a centroid for every Turkish province and district entries for
//! the largest metros; a miss is an expected outcome, not an error.

use crate::model::Coordinates;

/// Province centroids, keyed by Turkish name.
const PROVINCES: &[(&str, f64, f64)] = &[
    ("Adana", 37.0000, 35.3213),
    ("Adıyaman", 37.7648, 38.2786),
    ("Afyonkarahisar", 38.7507, 30.5567),
    ("Ağrı", 39.7191, 43.0503),
    ("Aksaray", 38.3687, 34.0370),
    ("Amasya", 40.6499, 35.8353),
    ("Ankara", 39.9334, 32.8597),
    ("Antalya", 36.8969, 30.7133),
    ("Ardahan", 41.1105, 42.7022),
    ("Artvin", 41.1828, 41.8183),
    ("Aydın", 37.8560, 27.8416),
    ("Balıkesir", 39.6484, 27.8826),
    ("Bartın", 41.6344, 32.3375),
    ("Batman", 37.8812, 41.1351),
    ("Bayburt", 40.2552, 40.2249),
    ("Bilecik", 40.1426, 29.9793),
    ("Bingöl", 38.8854, 40.4966),
    ("Bitlis", 38.4006, 42.1095),
    ("Bolu", 40.7392, 31.6089),
    ("Burdur", 37.7203, 30.2908),
    ("Bursa", 40.1885, 29.0610),
    ("Çanakkale", 40.1553, 26.4142),
    ("Çankırı", 40.6013, 33.6134),
    ("Çorum", 40.5506, 34.9556),
    ("Denizli", 37.7765, 29.0864),
    ("Diyarbakır", 37.9144, 40.2306),
    ("Düzce", 40.8438, 31.1565),
    ("Edirne", 41.6818, 26.5623),
    ("Elazığ", 38.6810, 39.2264),
    ("Erzincan", 39.7500, 39.4926),
    ("Erzurum", 39.9055, 41.2658),
    ("Eskişehir", 39.7767, 30.5206),
    ("Gaziantep", 37.0662, 37.3833),
    ("Giresun", 40.9128, 38.3895),
    ("Gümüşhane", 40.4386, 39.5086),
    ("Hakkari", 37.5744, 43.7408),
    ("Hatay", 36.4018, 36.3498),
    ("Iğdır", 39.8880, 44.0048),
    ("Isparta", 37.7648, 30.5566),
    ("İstanbul", 41.0082, 28.9784),
    ("İzmir", 38.4192, 27.1287),
    ("Kahramanmaraş", 37.5858, 36.9371),
    ("Karabük", 41.2061, 32.6204),
    ("Karaman", 37.1759, 33.2287),
    ("Kars", 40.6013, 43.0975),
    ("Kastamonu", 41.3887, 33.7827),
    ("Kayseri", 38.7312, 35.4787),
    ("Kırıkkale", 39.8468, 33.5153),
    ("Kırklareli", 41.7333, 27.2167),
    ("Kırşehir", 39.1425, 34.1709),
    ("Kilis", 36.7184, 37.1212),
    ("Kocaeli", 40.8533, 29.8815),
    ("Konya", 37.8667, 32.4833),
    ("Kütahya", 39.4167, 29.9833),
    ("Malatya", 38.3552, 38.3095),
    ("Manisa", 38.6191, 27.4289),
    ("Mardin", 37.3212, 40.7245),
    ("Mersin", 36.8000, 34.6333),
    ("Muğla", 37.2153, 28.3636),
    ("Muş", 38.9462, 41.7539),
    ("Nevşehir", 38.6939, 34.6857),
    ("Niğde", 37.9667, 34.6833),
    ("Ordu", 40.9839, 37.8764),
    ("Osmaniye", 37.0742, 36.2478),
    ("Rize", 41.0201, 40.5234),
    ("Sakarya", 40.6940, 30.4358),
    ("Samsun", 41.2928, 36.3313),
    ("Siirt", 37.9274, 41.9420),
    ("Sinop", 42.0231, 35.1531),
    ("Sivas", 39.7477, 37.0179),
    ("Şanlıurfa", 37.1591, 38.7969),
    ("Şırnak", 37.4187, 42.4918),
    ("Tekirdağ", 40.9833, 27.5167),
    ("Tokat", 40.3167, 36.5500),
    ("Trabzon", 41.0015, 39.7178),
    ("Tunceli", 39.3074, 39.4388),
    ("Uşak", 38.6823, 29.4082),
    ("Van", 38.4891, 43.4089),
    ("Yalova", 40.6500, 29.2667),
    ("Yozgat", 39.8181, 34.8147),
    ("Zonguldak", 41.4564, 31.7987),
];

/// District coordinates for the metros where the district-level difference
/// is large enough to matter, keyed by `(province, district)`.
const DISTRICTS: &[(&str, &str, f64, f64)] = &[
    ("Ankara", "Beypazarı", 40.1675, 31.9211),
    ("Ankara", "Çankaya", 39.9179, 32.8627),
    ("Ankara", "Etimesgut", 39.9440, 32.6676),
    ("Ankara", "Keçiören", 39.9798, 32.8672),
    ("Ankara", "Mamak", 39.9211, 32.9170),
    ("Ankara", "Polatlı", 39.5842, 32.1472),
    ("Ankara", "Sincan", 39.9724, 32.5786),
    ("Ankara", "Yenimahalle", 39.9650, 32.8060),
    ("Antalya", "Alanya", 36.5444, 31.9954),
    ("Antalya", "Kaş", 36.2020, 29.6414),
    ("Antalya", "Kepez", 36.9381, 30.7132),
    ("Antalya", "Konyaaltı", 36.8867, 30.6366),
    ("Antalya", "Manavgat", 36.7867, 31.4456),
    ("Antalya", "Muratpaşa", 36.8859, 30.7056),
    ("Bursa", "Gemlik", 40.4300, 29.1600),
    ("Bursa", "İnegöl", 40.0810, 29.5100),
    ("Bursa", "Nilüfer", 40.2130, 28.9870),
    ("Bursa", "Osmangazi", 40.1900, 29.0510),
    ("Bursa", "Yıldırım", 40.1960, 29.0790),
    ("İstanbul", "Bakırköy", 40.9819, 28.8772),
    ("İstanbul", "Beşiktaş", 41.0430, 29.0046),
    ("İstanbul", "Beyoğlu", 41.0370, 28.9850),
    ("İstanbul", "Büyükçekmece", 41.0200, 28.5850),
    ("İstanbul", "Fatih", 41.0186, 28.9394),
    ("İstanbul", "Kadıköy", 40.9819, 29.0576),
    ("İstanbul", "Kartal", 40.9060, 29.1855),
    ("İstanbul", "Maltepe", 40.9357, 29.1310),
    ("İstanbul", "Pendik", 40.8775, 29.2513),
    ("İstanbul", "Sarıyer", 41.1669, 29.0571),
    ("İstanbul", "Silivri", 41.0739, 28.2464),
    ("İstanbul", "Şile", 41.1735, 29.6128),
    ("İstanbul", "Şişli", 41.0602, 28.9877),
    ("İstanbul", "Ümraniye", 41.0164, 29.1248),
    ("İstanbul", "Üsküdar", 41.0226, 29.0150),
    ("İzmir", "Bergama", 39.1210, 27.1790),
    ("İzmir", "Bornova", 38.4703, 27.2172),
    ("İzmir", "Buca", 38.3872, 27.1560),
    ("İzmir", "Çeşme", 38.3236, 26.3024),
    ("İzmir", "Karşıyaka", 38.4600, 27.1117),
    ("İzmir", "Konak", 38.4189, 27.1287),
    ("İzmir", "Ödemiş", 38.2280, 27.9699),
    ("İzmir", "Selçuk", 37.9510, 27.3700),
];

/// Resolves a manual region selection to coordinates.
///
/// Lookup order: the exact `(region, subregion)` pair first; when the
/// subregion is omitted or unmatched, the region-level centroid. Returns
/// `None` when the region itself is absent; callers proceed with
/// name-based provider resolution rather than failing.
pub fn resolve(region: &str, subregion: Option<&str>) -> Option<Coordinates> {
    if let Some(subregion) = subregion {
        let district = DISTRICTS
            .iter()
            .find(|(province, name, _, _)| *province == region && *name == subregion);

        if let Some((_, _, latitude, longitude)) = district {
            return Some(Coordinates {
                latitude: *latitude,
                longitude: *longitude,
            });
        }
    }

    PROVINCES
        .iter()
        .find(|(name, _, _)| *name == region)
        .map(|(_, latitude, longitude)| Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        })
}

/// Splits a legacy composite `"Region - Subregion"` selection string.
///
/// Region pickers historically stored the district inside the city field;
/// the district part feeds the resolver and is discarded for name-based
/// provider queries (the provider has no district concept).
pub fn split_region(composite: &str) -> (&str, Option<&str>) {
    match composite.split_once(" - ") {
        Some((region, subregion)) => (region.trim(), Some(subregion.trim())),
        None => (composite.trim(), None),
    }
}
