use crate::{Context, Language, Options, Scheme, parse_with};

fn iso_all(text: &str, language: Language) -> Vec<Option<String>> {
    let options = Options::new(Scheme::IsoFormat).with_language(language);
    parse_with(text, &Context::default(), &options)
        .unwrap()
        .into_vec()
        .into_iter()
        .map(|v| v.iso_format().map(str::to_string))
        .collect()
}

fn iso(text: &str, language: Language) -> Option<String> {
    let mut all = iso_all(text, language);
    assert_eq!(all.len(), 1, "expected one result for {text:?}, got {all:?}");
    all.remove(0)
}

fn span(text: &str, language: Language) -> (f64, f64) {
    let options = Options::new(Scheme::TimeSpan).with_language(language);
    let out = parse_with(text, &Context::default(), &options).unwrap().into_vec();
    out[0].time_span().unwrap().as_tuple()
}

fn check(language: Language, cases: &[(&str, &str)]) {
    for (expected, input) in cases {
        assert_eq!(iso(input, language).as_deref(), Some(*expected), "input: {input:?}");
    }
}

#[test]
fn english_examples_matching() {
    // Array of (expected iso, input)
    check(
        Language::En,
        &[
            ("1963-06-01/1963-06-30", "June 1963"),
            ("1901-05-01/1901-05-31", "May 1901"),
            ("1890-10-01/1890-10-31", "Oct. 1890"),
            ("1856-01-01/1856-01-01", "January 1, 1856"),
            ("1958-08-11/1958-08-11", "August 11, 1958"),
            ("..1855-12-31", "before 1856"),
            ("1860-07-01..", "after June 1860"),
            ("..1899-12-31", "before January 1900"),
            ("1901-01-01..", "after December 1900"),
            ("1924-01-01..", "after 1923"),
            ("1945-09-01/1945-11-30", "Autumn 1945"),
            ("1900-12-01/1901-02-28", "winter 1900"),
            ("..1906-11-30", "before winter 1907"),
            ("1752-01-01/1760-12-31", "1752/60"),
            ("1752-01-01/1760-12-31", "1752/1760"),
            ("1840-01-01/1849-12-31", "1840s"),
            ("1840-01-01/1849-12-31", "1840's"),
            ("1840-01-01/1849-12-31", "the 1840s"),
            ("1884-01-01/1885-12-31", "mid-1880s"),
            ("1887-01-01/1889-12-31", "late 1880s"),
            ("1801-01-01/1900-12-31", "19th century"),
            ("-0500-12-31/-0401-01-01", "5th century b.c."),
            ("-0500-12-31/-0401-01-01", "5th century BC"),
            ("0401-01-01/0450-12-31", "1st half 5th century"),
            ("0451-01-01/0500-12-31", "second half of the 5th century"),
            ("1667-01-01/1700-12-31", "last third 17th cent"),
            ("1776-01-01/1800-12-31", "4th quarter of the 18th century"),
            ("1701-01-01~/1800-12-31~", "circa 18th century"),
            ("1586-01-01/1600-12-31", "late 16th century"),
            ("1146-01-01/1155-12-31", "mid-12th century"),
            ("1801-01-01/1815-12-31", "early 19th century"),
            ("1920-01-01~/1920-12-31~", "ca. 1920"),
            ("1842-01-01?/1842-12-31?", "1842?"),
            ("1460-01-01/1460-12-31", "1460"),
            ("1860-06-13/1860-06-13", "13th June 1860"),
            ("-0440-01-01/-0440-12-31", "-440"),
        ],
    );
}

#[test]
fn german_examples_matching() {
    check(
        Language::De,
        &[
            ("1907-06-01/1907-08-31", "Sommer 1907"),
            ("..1907-05-31", "vor dem Sommer 1907"),
            ("1908-03-01..", "nach dem Winter 1907"),
            ("..1906-11-30", "vor dem Winter 1907"),
            ("1890-03-01/1890-03-31", "März 1890"),
            ("1760-01-01/1769-12-31", "1760er Jahre"),
            ("1760-01-01/1769-12-31", "die 1760er Jahre"),
            ("1885-01-01/1894-12-31", "1885er Jahre"),
            ("1550-01-01?/1559-12-31?", "etwa 1550er Jahre"),
            ("1887-01-01/1889-12-31", "Ende der 1880er Jahre"),
            ("1801-01-01/1900-12-31", "19. Jh."),
            ("1801-01-01/1900-12-31", "19. Jahrhundert"),
            ("-0500-12-31/-0401-01-01", "5. Jh. v. Chr"),
            ("-0200-12-31~/-0101-01-01~", "ca. 2. Jh. v. Chr"),
            ("0101-01-01~/0150-12-31~", "ca. 1. Hälfte 2. Jh."),
            ("1876-01-01/1900-12-31", "letztes Viertel des 19. Jh."),
            ("1801-01-01/1815-12-31", "Anfang des 19. Jahrhunderts"),
            ("1846-01-01/1855-12-31", "Mitte des 19. Jh."),
            ("1880-01-01/1882-12-31", "Anfang der 1880er Jahre"),
            ("1882-07-13/1882-07-13", "13. Juli 1882"),
            ("1924-01-01..", "wohl nach 1923"),
            ("1900-01-01~/1900-12-31~", "um 1900"),
            ("..1849-12-31", "vor 1850"),
            ("1851-01-01..", "nach 1850"),
        ],
    );
}

#[test]
fn french_examples_matching() {
    check(
        Language::Fr,
        &[
            ("1871-03-01/1871-03-31", "mars 1871"),
            ("1870-12-01/1871-02-28", "hiver 1870"),
            ("1880-01-01/1889-12-31", "années 1880"),
            ("1801-01-01/1900-12-31", "XIXe siècle"),
            ("1801-01-01/1900-12-31", "19e siècle"),
            ("1886-01-01/1900-12-31", "fin du XIXe siècle"),
            ("1801-01-01/1850-12-31", "première moitié du XIXe siècle"),
            ("-0100-12-31/-0001-01-01", "Ier siècle av. J.-C."),
            ("1850-01-01~/1850-12-31~", "vers 1850"),
            ("1900-05-01/1900-05-01", "1er mai 1900"),
            ("..1849-12-31", "avant 1850"),
            ("1851-01-01..", "après 1850"),
        ],
    );
}

#[test]
fn open_intervals_are_never_both_finite() {
    for year in [850, 1456, 1856, 1999] {
        let (start, end) = span(&format!("before {year}"), Language::En);
        assert_eq!((start, end), (f64::NEG_INFINITY, f64::from(year - 1)));
        let (start, end) = span(&format!("after {year}"), Language::En);
        assert_eq!((start, end), (f64::from(year + 1), f64::INFINITY));
    }
}

#[test]
fn bce_centuries() {
    for c in 1..=21 {
        let text = format!("{c}th century BC");
        let first = 100 * c;
        let last = 100 * (c - 1) + 1;
        assert_eq!(span(&text, Language::En), (-f64::from(first), -f64::from(last)), "{text}");
        assert_eq!(iso(&text, Language::En), Some(format!("-{first:04}-12-31/-{last:04}-01-01")), "{text}");
    }
}

#[test]
fn decade_spans() {
    for decade in (1000..=2020).step_by(10) {
        assert_eq!(span(&format!("{decade}s"), Language::En), (f64::from(decade), f64::from(decade + 9)));
    }
}

#[test]
fn fuzzy_markers_keep_time_span() {
    for (marker, suffix) in [("circa", '~'), ("ca.", '~'), ("probably", '?')] {
        for text in ["1842", "June 1963", "19th century", "1840s"] {
            let marked = format!("{marker} {text}");
            assert_eq!(span(&marked, Language::En), span(text, Language::En), "{marked}");
            let iso = iso(&marked, Language::En).unwrap();
            let (start, end) = iso.split_once('/').unwrap();
            assert!(start.ends_with(suffix) && end.ends_with(suffix), "{iso}");
        }
    }
}

#[test]
fn compound_inputs_follow_sweep_order() {
    assert_eq!(
        iso_all("(Guss vor 1906) 1897", Language::De),
        vec![Some("..1905-12-31".to_string()), Some("1897-01-01/1897-12-31".to_string())]
    );
    assert_eq!(
        iso_all("13. Juli 1882 - 15. Juli 1882", Language::De),
        vec![Some("1882-07-13/1882-07-13".to_string()), Some("1882-07-15/1882-07-15".to_string())]
    );
    // Day dates come out before keyword matches even when they appear later.
    assert_eq!(
        iso_all("(nach 1850) 3. März 1862", Language::De),
        vec![Some("1862-03-03/1862-03-03".to_string()), Some("1851-01-01..".to_string())]
    );
    assert_eq!(
        iso_all("(vor dem Winter 1907) 1897", Language::De),
        vec![Some("..1906-11-30".to_string()), Some("1897-01-01/1897-12-31".to_string())]
    );
    // Digit runs longer than a year are skipped, not truncated.
    assert_eq!(iso_all("(12345) 1897", Language::En), vec![Some("1897-01-01/1897-12-31".to_string())]);
    assert_eq!(iso_all("(vor 19061) 1897", Language::De), vec![Some("1897-01-01/1897-12-31".to_string())]);
    assert_eq!(
        iso_all("1880 - 1890", Language::En),
        vec![Some("1880-01-01/1880-12-31".to_string()), Some("1890-01-01/1890-12-31".to_string())]
    );
}

#[test]
fn year_intervals_never_decline() {
    check(
        Language::En,
        &[
            ("1799-01-01/1800-12-31", "1799/00"),
            ("1760-01-01/1852-12-31", "1760/52"),
            ("1760-01-01/1752-12-31", "1760/1752"),
        ],
    );
    assert_eq!(span("1760/1752", Language::En), (1752.0, 1760.0));
}

#[test]
fn declined_inputs() {
    for text in ["", "no date here", "February 30, 1900", "0th century", "since 1850"] {
        let out = iso_all(text, Language::En);
        assert_eq!(out, vec![None], "{text:?}");
    }
}
