//! Search-as-you-type suggestion assembly.
//!
//! Suggestions are drawn, in priority order, from service names, office
//! names/addresses and a fixed list of popular terms. The result is a plain
//! list of strings.

/// Minimum query length (in characters) before any suggestion is produced.
pub const MIN_QUERY_CHARS: usize = 2;

/// Maximum service-name suggestions.
pub const MAX_SERVICE_SUGGESTIONS: usize = 5;

/// Maximum office suggestions.
pub const MAX_OFFICE_SUGGESTIONS: usize = 3;

/// Below this many catalog hits the popular terms are consulted.
pub const POPULAR_FALLBACK_THRESHOLD: usize = 3;

/// Hard cap on the returned list.
pub const MAX_SUGGESTIONS: usize = 8;

/// Frequently searched terms used when the catalog yields too few matches.
pub const POPULAR_TERMS: &[&str] = &[
    "паспорт",
    "загранпаспорт",
    "СНИЛС",
    "ИНН",
    "пенсия",
    "пособие",
    "регистрация",
    "субсидия",
    "налоговый учет",
    "выписка",
];

/// Office row as seen by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeCandidate {
    pub name: String,
    pub address: String,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Assemble suggestions for `query`.
///
/// Candidates may be pre-filtered by the caller; they are filtered again
/// here so the contract holds for any input.
///
/// ```
/// use mfc_core::suggest::{assemble, POPULAR_TERMS};
/// assert!(assemble::<&str>("п", &[], &[], POPULAR_TERMS).is_empty());
/// ```
pub fn assemble<S: AsRef<str>>(
    query: &str,
    service_names: &[S],
    offices: &[OfficeCandidate],
    popular_terms: &[&str],
) -> Vec<String> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut found: Vec<String> = service_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| contains_ci(name, &needle))
        .take(MAX_SERVICE_SUGGESTIONS)
        .map(str::to_string)
        .collect();

    found.extend(
        offices
            .iter()
            .filter_map(|office| {
                if contains_ci(&office.name, &needle) {
                    Some(office.name.clone())
                } else if contains_ci(&office.address, &needle) {
                    Some(office.address.clone())
                } else {
                    None
                }
            })
            .take(MAX_OFFICE_SUGGESTIONS),
    );

    if found.len() < POPULAR_FALLBACK_THRESHOLD {
        let room = MAX_SUGGESTIONS.saturating_sub(found.len());
        found.extend(
            popular_terms
                .iter()
                .filter(|term| contains_ci(term, &needle))
                .take(room)
                .map(|term| (*term).to_string()),
        );
    }

    let mut out: Vec<String> = Vec::with_capacity(found.len());
    for text in found {
        if !out.contains(&text) {
            out.push(text);
        }
    }
    out.truncate(MAX_SUGGESTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn office(name: &str, address: &str) -> OfficeCandidate {
        OfficeCandidate {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    const SERVICES: &[&str] = &[
        "Выдача загранпаспорта",
        "Замена паспорта в 20 лет",
        "Замена паспорта в 45 лет",
        "Получение ИНН",
        "Регистрация брака",
        "Регистрация рождения",
    ];

    #[test]
    fn short_queries_yield_nothing() {
        assert!(assemble("", SERVICES, &[], POPULAR_TERMS).is_empty());
        assert!(assemble("п", SERVICES, &[], POPULAR_TERMS).is_empty());
        assert!(assemble("  п  ", SERVICES, &[], POPULAR_TERMS).is_empty());
    }

    #[test]
    fn two_cyrillic_chars_are_enough() {
        // "па" is 4 bytes but 2 characters.
        let out = assemble("па", SERVICES, &[], POPULAR_TERMS);
        assert!(!out.is_empty());
    }

    #[test]
    fn service_matches_are_case_insensitive() {
        let out = assemble("ЗАМЕНА", SERVICES, &[], &[]);
        assert_eq!(
            out,
            vec!["Замена паспорта в 20 лет", "Замена паспорта в 45 лет"]
        );
    }

    #[test]
    fn passport_query_lists_services_first() {
        let out = assemble("пас", SERVICES, &[], POPULAR_TERMS);
        assert_eq!(out[0], "Выдача загранпаспорта");
        assert_eq!(out[1], "Замена паспорта в 20 лет");
        assert_eq!(out[2], "Замена паспорта в 45 лет");
        // Three catalog hits: no fallback to popular terms.
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn falls_back_to_popular_terms_after_services() {
        let services = ["Замена паспорта в 20 лет"];
        let out = assemble("пас", &services, &[], POPULAR_TERMS);
        assert_eq!(
            out,
            vec!["Замена паспорта в 20 лет", "паспорт", "загранпаспорт"]
        );
    }

    #[test]
    fn services_capped_at_five() {
        let services: Vec<String> = (0..9).map(|i| format!("Услуга {i}")).collect();
        let out = assemble("услуга", &services, &[], &[]);
        assert_eq!(out.len(), MAX_SERVICE_SUGGESTIONS);
        assert_eq!(out[0], "Услуга 0");
    }

    #[test]
    fn offices_match_by_name_or_address() {
        let offices = vec![
            office("МФЦ на Ленина", "ул. Ленина, д. 1"),
            office("МФЦ Центральный", "пл. Центральная, д. 5"),
            office("МФЦ Западный", "ул. Западная, д. 25"),
        ];
        let out = assemble("ленина", &[] as &[&str], &offices, &[]);
        assert_eq!(out, vec!["МФЦ на Ленина"]);

        let out = assemble("пл.", &[] as &[&str], &offices, &[]);
        assert_eq!(out, vec!["пл. Центральная, д. 5"]);
    }

    #[test]
    fn offices_capped_at_three() {
        let offices: Vec<OfficeCandidate> = (0..6)
            .map(|i| office(&format!("МФЦ №{i}"), "ул. Мира"))
            .collect();
        let out = assemble("мфц", &[] as &[&str], &offices, &[]);
        assert_eq!(out.len(), MAX_OFFICE_SUGGESTIONS);
    }

    #[test]
    fn no_fallback_when_catalog_has_three_hits() {
        let offices = vec![office("Регистрационный центр", "ул. Мира")];
        let out = assemble("регистр", SERVICES, &offices, POPULAR_TERMS);
        assert_eq!(
            out,
            vec![
                "Регистрация брака",
                "Регистрация рождения",
                "Регистрационный центр"
            ]
        );
    }

    #[test]
    fn duplicates_are_removed_keeping_first_seen() {
        let services = ["паспорт"];
        let offices = vec![office("паспорт", "паспорт")];
        let out = assemble("паспорт", &services, &offices, POPULAR_TERMS);
        assert_eq!(out, vec!["паспорт", "загранпаспорт"]);
    }

    #[test]
    fn popular_fill_stops_at_eight() {
        let popular: Vec<String> = (0..20).map(|i| format!("термин {i}")).collect();
        let popular: Vec<&str> = popular.iter().map(String::as_str).collect();
        let out = assemble("термин", &[] as &[&str], &[], &popular);
        assert_eq!(out.len(), MAX_SUGGESTIONS);
        assert_eq!(out[7], "термин 7");
    }

    #[test]
    fn never_exceeds_cap_and_never_duplicates() {
        let services: Vec<String> = (0..10).map(|i| format!("ab{}", i % 3)).collect();
        let offices: Vec<OfficeCandidate> = (0..10).map(|i| office(&format!("ab{i}"), "ab")).collect();
        let popular = ["ab0", "ab1", "abc", "abd", "abe", "abf", "abg", "abh", "abi"];
        for q in ["ab", "AB", "b0", "abx"] {
            let out = assemble(q, &services, &offices, &popular);
            assert!(out.len() <= MAX_SUGGESTIONS);
            let mut sorted = out.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), out.len(), "duplicates for {q}: {out:?}");
        }
    }
}
