//! Built-in vocabularies for English, German and French.
//!
//! Numeric ordinals ("19th", "19.", "xixe") are generated for 1..=21, the
//! range of centuries the grammars accept.

use std::collections::BTreeMap;

use super::{Language, Vocabulary};

const MAX_ORDINAL: u32 = 21;

const ROMAN: [&str; 21] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv", "xv", "xvi", "xvii",
    "xviii", "xix", "xx", "xxi",
];

pub(super) const GENERIC_MONTHS: [&[&str]; 12] = [
    &["january"],
    &["february"],
    &["march"],
    &["april"],
    &["may"],
    &["june"],
    &["july"],
    &["august"],
    &["september"],
    &["october"],
    &["november"],
    &["december"],
];
pub(super) const GENERIC_SPRING: &[&str] = &["spring"];
pub(super) const GENERIC_SUMMER: &[&str] = &["summer"];
pub(super) const GENERIC_AUTUMN: &[&str] = &["autumn"];
pub(super) const GENERIC_WINTER: &[&str] = &["winter"];
pub(super) const GENERIC_BEFORE: &[&str] = &["before"];
pub(super) const GENERIC_AFTER: &[&str] = &["after"];

pub(super) fn builtin(language: Language) -> Vocabulary {
    match language {
        Language::En => english(),
        Language::De => german(),
        Language::Fr => french(),
    }
}

/// The generic English fragments used when no vocabulary exists for a
/// language. Carries no century grammar.
pub(super) fn fallback() -> Vocabulary {
    Vocabulary {
        name: "generic".to_string(),
        months: GENERIC_MONTHS.iter().map(|tokens| words(tokens)).collect(),
        spring: words(GENERIC_SPRING),
        summer: words(GENERIC_SUMMER),
        autumn: words(GENERIC_AUTUMN),
        winter: words(GENERIC_WINTER),
        before: words(GENERIC_BEFORE),
        after: words(GENERIC_AFTER),
        ..Vocabulary::default()
    }
}

fn english() -> Vocabulary {
    const MONTHS: [&[&str]; 12] = [
        &["january", "jan"],
        &["february", "feb"],
        &["march", "mar"],
        &["april", "apr"],
        &["may"],
        &["june", "jun"],
        &["july", "jul"],
        &["august", "aug"],
        &["september", "sept", "sep"],
        &["october", "oct"],
        &["november", "nov"],
        &["december", "dec"],
    ];
    const WORDS: [&str; 21] = [
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
        "fourteenth",
        "fifteenth",
        "sixteenth",
        "seventeenth",
        "eighteenth",
        "nineteenth",
        "twentieth",
        "twenty-first",
    ];

    let mut ordinals = BTreeMap::new();
    for n in 1..=MAX_ORDINAL {
        ordinals.insert(format!("{n}{}", english_suffix(n)), n);
    }
    insert_words(&mut ordinals, &WORDS);

    Vocabulary {
        name: "english".to_string(),
        months: MONTHS.iter().map(|tokens| words(tokens)).collect(),
        spring: words(&["spring"]),
        summer: words(&["summer"]),
        autumn: words(&["autumn", "fall"]),
        winter: words(&["winter"]),
        before: words(&["before", "prior to"]),
        after: words(&["after"]),
        approximate: words(&["circa", "ca.", "ca", "around", "about", "approximately", "~"]),
        uncertain: words(&["uncertain", "perhaps", "probably", "possibly", "?"]),
        century: words(&["century", "centuries", "cent"]),
        half: words(&["half"]),
        third: words(&["third"]),
        quarter: words(&["quarter"]),
        last: words(&["last"]),
        early: words(&["early"]),
        mid: words(&["mid", "middle"]),
        late: words(&["late"]),
        ordinals,
        bc: words(&["b.c.", "bc", "b.c.e.", "bce", "before christ"]),
        connectors: words(&["of the", "of", "the"]),
        decade_suffixes: words(&["s", "'s"]),
        decade_year_suffixes: Vec::new(),
        decade_prefixes: Vec::new(),
    }
}

fn german() -> Vocabulary {
    const MONTHS: [&[&str]; 12] = [
        &["januar", "jänner", "jan"],
        &["februar", "feb"],
        &["märz", "maerz", "mär"],
        &["april", "apr"],
        &["mai"],
        &["juni", "jun"],
        &["juli", "jul"],
        &["august", "aug"],
        &["september", "sept", "sep"],
        &["oktober", "okt"],
        &["november", "nov"],
        &["dezember", "dez"],
    ];
    const WORDS: [(&str, u32); 12] = [
        ("erste", 1),
        ("erstes", 1),
        ("ersten", 1),
        ("zweite", 2),
        ("zweites", 2),
        ("zweiten", 2),
        ("dritte", 3),
        ("drittes", 3),
        ("dritten", 3),
        ("vierte", 4),
        ("viertes", 4),
        ("vierten", 4),
    ];

    let mut ordinals = BTreeMap::new();
    for n in 1..=MAX_ORDINAL {
        ordinals.insert(format!("{n}."), n);
    }
    for (word, n) in WORDS {
        ordinals.insert(word.to_string(), n);
    }

    Vocabulary {
        name: "german".to_string(),
        months: MONTHS.iter().map(|tokens| words(tokens)).collect(),
        spring: words(&["frühling", "frühjahr"]),
        summer: words(&["sommer"]),
        autumn: words(&["herbst"]),
        winter: words(&["winter"]),
        before: words(&["vor"]),
        after: words(&["nach"]),
        approximate: words(&["ca.", "ca", "circa", "um", "gegen", "ungefähr", "~"]),
        uncertain: words(&["etwa", "wohl", "vermutlich", "wahrscheinlich", "möglicherweise", "?"]),
        century: words(&["jahrhundert", "jahrhunderts", "jhdt", "jhd", "jh"]),
        half: words(&["hälfte"]),
        third: words(&["drittel"]),
        quarter: words(&["viertel"]),
        last: words(&["letzte", "letztes", "letzten", "letztem"]),
        early: words(&["anfang", "frühes", "frühen", "früh"]),
        mid: words(&["mitte"]),
        late: words(&["ende", "spätes", "späten", "spät"]),
        ordinals,
        bc: words(&["v. chr.", "v. chr", "v.chr.", "vor christus", "v. u. z."]),
        connectors: words(&["des", "der", "dem"]),
        decade_suffixes: words(&["er"]),
        decade_year_suffixes: words(&["er jahre", "er-jahre"]),
        decade_prefixes: Vec::new(),
    }
}

fn french() -> Vocabulary {
    const MONTHS: [&[&str]; 12] = [
        &["janvier", "janv"],
        &["février", "fevrier", "févr", "fevr"],
        &["mars"],
        &["avril", "avr"],
        &["mai"],
        &["juin"],
        &["juillet", "juil"],
        &["août", "aout"],
        &["septembre", "sept"],
        &["octobre", "oct"],
        &["novembre", "nov"],
        &["décembre", "decembre", "déc", "dec"],
    ];
    const WORDS: [(&str, u32); 14] = [
        ("premier", 1),
        ("première", 1),
        ("premiere", 1),
        ("second", 2),
        ("seconde", 2),
        ("deuxième", 2),
        ("deuxieme", 2),
        ("troisième", 3),
        ("troisieme", 3),
        ("quatrième", 4),
        ("quatrieme", 4),
        ("cinquième", 5),
        ("sixième", 6),
        ("dixième", 10),
    ];

    let mut ordinals = BTreeMap::new();
    for (index, roman) in ROMAN.iter().enumerate() {
        let n = index as u32 + 1;
        if n == 1 {
            for form in ["1er", "1re", "1ère", "ier", "ire"] {
                ordinals.insert(form.to_string(), n);
            }
            continue;
        }
        for suffix in ["e", "ème", "eme"] {
            ordinals.insert(format!("{n}{suffix}"), n);
            ordinals.insert(format!("{roman}{suffix}"), n);
        }
    }
    for (word, n) in WORDS {
        ordinals.insert(word.to_string(), n);
    }

    Vocabulary {
        name: "french".to_string(),
        months: MONTHS.iter().map(|tokens| words(tokens)).collect(),
        spring: words(&["printemps"]),
        summer: words(&["été", "ete"]),
        autumn: words(&["automne"]),
        winter: words(&["hiver"]),
        before: words(&["avant"]),
        after: words(&["après", "apres"]),
        approximate: words(&["vers", "environ", "circa", "ca.", "ca", "~"]),
        uncertain: words(&["peut-être", "probablement", "incertain", "?"]),
        century: words(&["siècle", "siècles", "siecle", "siecles"]),
        half: words(&["moitié", "moitie"]),
        third: words(&["tiers"]),
        quarter: words(&["quart"]),
        last: words(&["dernier", "dernière", "derniere"]),
        early: words(&["début", "debut"]),
        mid: words(&["milieu"]),
        late: words(&["fin"]),
        ordinals,
        bc: words(&["av. j.-c.", "av. j.-c", "av. j.c.", "av. jc", "avant j.-c.", "avant jésus-christ"]),
        connectors: words(&["du", "de la", "des", "de"]),
        decade_suffixes: Vec::new(),
        decade_year_suffixes: Vec::new(),
        decade_prefixes: words(&["années", "annees"]),
    }
}

fn english_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn insert_words(ordinals: &mut BTreeMap<String, u32>, words: &[&str]) {
    for (index, word) in words.iter().enumerate() {
        ordinals.insert((*word).to_string(), index as u32 + 1);
    }
}

fn words(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_numeric_ordinals() {
        let vocab = english();
        assert_eq!(vocab.ordinals.get("1st"), Some(&1));
        assert_eq!(vocab.ordinals.get("2nd"), Some(&2));
        assert_eq!(vocab.ordinals.get("3rd"), Some(&3));
        assert_eq!(vocab.ordinals.get("11th"), Some(&11));
        assert_eq!(vocab.ordinals.get("12th"), Some(&12));
        assert_eq!(vocab.ordinals.get("21st"), Some(&21));
        assert_eq!(vocab.ordinals.get("twenty-first"), Some(&21));
    }

    #[test]
    fn french_roman_ordinals() {
        let vocab = french();
        assert_eq!(vocab.ordinals.get("xixe"), Some(&19));
        assert_eq!(vocab.ordinals.get("ier"), Some(&1));
        assert_eq!(vocab.ordinals.get("5ème"), Some(&5));
        assert_eq!(vocab.ordinals.get("ve"), Some(&5));
    }

    #[test]
    fn every_builtin_table_has_twelve_months() {
        for language in Language::ALL {
            assert_eq!(builtin(language).months.len(), 12, "{language}");
        }
        assert_eq!(fallback().months.len(), 12);
    }
}
