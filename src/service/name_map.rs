//! Static name normalization for the timings provider.
//!
//! The provider matches place names against ASCII spellings, so known
//! diacritic-bearing Turkish province names are transliterated before being
//! sent. Unmapped names pass through unchanged; the provider's own fuzzy
//! matching gets a chance at anything not listed here.

/// Province names whose Turkish spelling differs from the provider's
/// expected ASCII form.
const PROVIDER_CITY_NAMES: &[(&str, &str)] = &[
    ("Adıyaman", "Adiyaman"),
    ("Ağrı", "Agri"),
    ("Aydın", "Aydin"),
    ("Balıkesir", "Balikesir"),
    ("Bartın", "Bartin"),
    ("Bingöl", "Bingol"),
    ("Çanakkale", "Canakkale"),
    ("Çankırı", "Cankiri"),
    ("Çorum", "Corum"),
    ("Diyarbakır", "Diyarbakir"),
    ("Düzce", "Duzce"),
    ("Elazığ", "Elazig"),
    ("Eskişehir", "Eskisehir"),
    ("Gümüşhane", "Gumushane"),
    ("Iğdır", "Igdir"),
    ("İstanbul", "Istanbul"),
    ("İzmir", "Izmir"),
    ("Kahramanmaraş", "Kahramanmaras"),
    ("Karabük", "Karabuk"),
    ("Kırıkkale", "Kirikkale"),
    ("Kırklareli", "Kirklareli"),
    ("Kırşehir", "Kirsehir"),
    ("Kütahya", "Kutahya"),
    ("Muğla", "Mugla"),
    ("Muş", "Mus"),
    ("Nevşehir", "Nevsehir"),
    ("Niğde", "Nigde"),
    ("Şanlıurfa", "Sanliurfa"),
    ("Şırnak", "Sirnak"),
    ("Tekirdağ", "Tekirdag"),
    ("Uşak", "Usak"),
];

const PROVIDER_COUNTRY_NAMES: &[(&str, &str)] = &[("Türkiye", "Turkey"), ("Turkiye", "Turkey")];

/// The city name to send to the provider for `name`.
pub fn provider_city_name(name: &str) -> &str {
    PROVIDER_CITY_NAMES
        .iter()
        .find(|(turkish, _)| *turkish == name)
        .map(|(_, ascii)| *ascii)
        .unwrap_or(name)
}

/// The country name to send to the provider for `name`.
pub fn provider_country_name(name: &str) -> &str {
    PROVIDER_COUNTRY_NAMES
        .iter()
        .find(|(local, _)| *local == name)
        .map(|(_, ascii)| *ascii)
        .unwrap_or(name)
}
