//! Fixed French keyword tables for the two document kinds.
//!
//! Keywords are lowercase and matched as plain substrings, so short entries
//! such as `"v"` or `"bt"` also hit inside longer words.

use crate::classify::{KeywordCategory, LinePolicy, LineTest};

pub const PERMIT_BANNER: &str = "ANALYSE DU CONTENU - PERMIS ÉLECTRIQUE";
pub const SGI_BANNER: &str = "ANALYSE DU CONTENU";

pub const ELECTRICAL_KEYWORDS: &[&str] = &[
    "permis",
    "électrique",
    "habilitation",
    "tension",
    "voltage",
    "ampérage",
    "installation",
    "équipement",
    "sécurité",
    "protection",
    "isolation",
    "mise à la terre",
    "court-circuit",
    "déconnexion",
    "verrouillage",
    "consignation",
    "déconsignation",
    "mesures",
    "vérification",
];

pub const PERMIT_REQUIRED_KEYWORDS: &[&str] = &[
    "requis",
    "obligatoire",
    "doit être",
    "à fournir",
    "nécessaire",
    "nom",
    "prénom",
    "date",
    "signature",
    "habilitation",
    "niveau",
];

pub const HABILITATION_KEYWORDS: &[&str] = &[
    "b0", "b1", "b2", "bc", "br", "be", "bp", "h0", "h1", "h2", "hc", "hr", "he", "hp",
];

pub const VOLTAGE_KEYWORDS: &[&str] = &[
    "tension",
    "voltage",
    "v",
    "kv",
    "volt",
    "basse tension",
    "haute tension",
    "bt",
    "ht",
    "tbt",
    "très basse tension",
    "moyenne tension",
    "mt",
];

// "obligatoire" appears twice; duplicates do not change matching.
pub const SGI_REQUIRED_KEYWORDS: &[&str] =
    &["requis", "obligatoire", "*", "obligatoire", "nécessaire"];

pub const PERMIT_CATEGORIES: [KeywordCategory; 4] = [
    KeywordCategory::new(
        "SECTIONS IDENTIFIÉES (PERMIS ÉLECTRIQUE):",
        LineTest::AnyKeyword(ELECTRICAL_KEYWORDS),
        LinePolicy::Trimmed,
    ),
    KeywordCategory::new(
        "CHAMPS OBLIGATOIRES IDENTIFIÉS:",
        LineTest::AnyKeyword(PERMIT_REQUIRED_KEYWORDS),
        LinePolicy::Trimmed,
    ),
    KeywordCategory::new(
        "NIVEAUX D'HABILITATION IDENTIFIÉS:",
        LineTest::AnyKeyword(HABILITATION_KEYWORDS),
        LinePolicy::Verbatim,
    ),
    KeywordCategory::new(
        "DOMAINES DE TENSION IDENTIFIÉS:",
        LineTest::AnyKeyword(VOLTAGE_KEYWORDS),
        LinePolicy::Verbatim,
    ),
];

pub const SGI_CATEGORIES: [KeywordCategory; 2] = [
    KeywordCategory::new(
        "SECTIONS IDENTIFIÉES:",
        LineTest::SectionHeading,
        LinePolicy::Trimmed,
    ),
    KeywordCategory::new(
        "CHAMPS OBLIGATOIRES IDENTIFIÉS:",
        LineTest::AnyKeyword(SGI_REQUIRED_KEYWORDS),
        LinePolicy::Trimmed,
    ),
];
