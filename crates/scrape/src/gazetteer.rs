// ABOUTME: Static reference data: Lithuanian city gazetteer, URL-slug map, and compiled patterns.
// ABOUTME: List order of CITIES is the precedence rule for location resolution; do not sort it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Known place names, in precedence order. Location resolution scans this
/// list and takes the first city present anywhere in the page text, so an
/// earlier entry wins over a later one regardless of text position.
pub const CITIES: &[&str] = &[
    "Vilnius",
    "Kaunas",
    "Klaipėda",
    "Šiauliai",
    "Panevėžys",
    "Alytus",
    "Marijampolė",
    "Mažeikiai",
    "Jonava",
    "Utena",
    "Kėdainiai",
    "Telšiai",
    "Tauragė",
    "Ukmergė",
    "Visaginas",
    "Plungė",
    "Kretinga",
    "Palanga",
    "Šilutė",
    "Radviliškis",
    "Rokiškis",
    "Biržai",
    "Gargždai",
    "Kupiškis",
    "Elektrėnai",
    "Jurbarkas",
    "Garliava",
    "Vilkaviškis",
    "Raseiniai",
    "Anykščiai",
    "Lentvaris",
    "Grigiškės",
    "Prienai",
    "Joniškis",
    "Kelmė",
    "Varėna",
    "Kaišiadorys",
    "Pasvalys",
    "Kuršėnai",
    "Molėtai",
    "Naujoji Akmenė",
    "Šakiai",
    "Skuodas",
    "Zarasai",
    "Širvintos",
    "Pakruojis",
    "Ignalina",
];

/// Locative (ASCII-folded) city slugs as they appear in job URLs, e.g.
/// "...-projektu-vadovas-vilniuje-".
pub static CITY_SLUG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"-(vilniuje|kaune|klaipedoje|siauliuose|panevezyje|alytu|marijampoleje|mazeikiuose|jonavoje|utenoje|kedainiuose|telsiuose|taurageje|ukmerge|visagine|plungeje|kretingoje|palangoje|siluteje|radviliskyje|rokiskyje|birzuose|gargzduose|kupiskyje|elektrenuse|jurbarke|garliavoje|vilkaviskyje|raseinuose|anyksciuose|lentvaryje|grigiskese|prienuose|joniskyje|kelmeje|varenoje|kaisiadoruose|pasvalyje|kursenuose|moletuose|naujoje-akmene|sakiuose|skuode|zarasuose|sirvintose|pakruojyje|ignalina)",
    )
    .unwrap()
});

/// Slug → canonical city name. Slugs not in this table fall back to a
/// capitalized best-effort name.
pub static CITY_SLUG_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("vilniuje", "Vilnius"),
        ("kaune", "Kaunas"),
        ("klaipedoje", "Klaipėda"),
        ("siauliuose", "Šiauliai"),
        ("panevezyje", "Panevėžys"),
        ("marijampoleje", "Marijampolė"),
        ("telsiuose", "Telšiai"),
        ("rokiskyje", "Rokiškis"),
        ("kupiskyje", "Kupiškis"),
        ("vilkaviskyje", "Vilkaviškis"),
        ("pasvalyje", "Pasvalys"),
        ("moletuose", "Molėtai"),
        ("ignalina", "Ignalina"),
        ("plungeje", "Plungė"),
    ])
});

/// Work-type phrases, Lithuanian and English. First match wins.
pub static WORK_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(Visa darbo diena|Dalinis darbo laikas|Full-time|Part-time)").unwrap());

/// Strict department pattern: bilingual "job family" label followed by a
/// capitalized Lithuanian phrase, terminated by the next label or end of text.
pub static DEPARTMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Darbo sritis/Job family:\s*([A-ZĄČĘĖĮŠŲŪŽ][a-ząčęėįšųūž\s]+?)(?:Bendrovės|$)")
        .unwrap()
});

/// Looser fallback department pattern for pages with the English-only label.
pub static DEPARTMENT_FALLBACK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Job family:\s*([A-Za-z\s]+?)(?:\n|Bendrovės|$)").unwrap());

/// Labeled salary range with a currency marker, e.g. "atlygis 2500–3500 EUR".
pub static SALARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)atlygis\s+(\d+[–-]\d+\s*(?:EUR|€))").unwrap());

/// Case-insensitive substrings flagging remote work availability.
pub const REMOTE_MARKERS: &[&str] = &["nuotoliniu", "remote"];

/// Label stripped from salary segments in anchor-inline listings.
pub const SALARY_LABEL: &str = "Atlyginimas";

/// Section headings whose following element contributes to the description,
/// in output order.
pub const DESCRIPTION_HEADINGS: &[&str] = &["Darbo aprašymas", "Reikalavimai"];
