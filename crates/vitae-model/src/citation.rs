//! APA-style citation synthesis.
//!
//! One fixed field order; every piece is appended only when its source
//! value is present. Presence was decided once, at the record boundary:
//! by the time a publication reaches this module its optional fields are
//! plain `Option`s.

use crate::date::year_of;
use crate::publications::Publication;
use crate::registry::Author;

/// Build the citation string for a publication and its resolved,
/// ordered author list.
pub fn apa_citation(publication: &Publication, resolved: &[&Author]) -> String {
    let mut citation = String::new();

    // de-duplicated short aliases, first-occurrence order
    let mut aliases: Vec<&str> = Vec::new();
    for author in resolved {
        if !aliases.contains(&author.alias_short.as_str()) {
            aliases.push(&author.alias_short);
        }
    }
    match aliases.as_slice() {
        [] => {}
        [single] => citation.push_str(single),
        [firsts @ .., last] => {
            citation.push_str(&firsts.join(", "));
            citation.push_str(&format!(", & {}", last));
        }
    }

    if let Some(date) = publication.date {
        citation.push_str(&format!(" ({}). ", year_of(date)));
    }
    citation.push_str(&format!("{}. ", publication.title));
    if let Some(venue) = &publication.venue {
        citation.push_str(venue);
    }
    if let Some(volume) = publication.volume {
        citation.push_str(&format!(", {}", volume));
    }
    if let Some(issue) = publication.issue {
        citation.push_str(&format!("({})", issue));
    }
    if let Some(art_no) = &publication.art_no {
        citation.push_str(art_no);
    }
    if let Some(page_start) = publication.page_start {
        citation.push_str(&format!(", pp. {}", page_start));
        if let Some(page_end) = publication.page_end {
            citation.push_str(&format!("-{}", page_end));
        }
    }
    if let Some(doi) = &publication.doi {
        citation.push_str(&format!(", doi: {}", doi));
    }
    citation.push('.');
    citation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{DatePrecision, parse_instant};
    use crate::resolve::AuthorReference;

    fn author(id: i64, affiliation_id: i64, alias: &str) -> Author {
        Author {
            id,
            affiliation_id,
            name: "N".into(),
            lastname: "L".into(),
            alias_long: None,
            alias_short: alias.into(),
            job_title: None,
            email: None,
            telephone: None,
            website: None,
            address: None,
            location: None,
            linkedin: None,
            github: None,
            google_scholar: None,
            orcid: None,
            researchgate: None,
            fingerprint: None,
            public_key: None,
        }
    }

    fn publication() -> Publication {
        Publication {
            authors: vec![AuthorReference {
                author_id: 1,
                affiliation_ids: vec![2],
            }],
            title: "X".into(),
            date: Some(parse_instant("2020", DatePrecision::MonthYear).unwrap()),
            venue: Some("Y Journal".into()),
            volume: Some(3),
            issue: None,
            art_no: None,
            page_start: Some(10),
            page_end: Some(12),
            doi: Some("10.1/x".into()),
            preprint_doi: None,
            document_type: "Journal article".into(),
            code: None,
            slides: None,
            abstract_: None,
            keywords: None,
            jcr: None,
            license: None,
            copyright: None,
        }
    }

    #[test]
    fn full_citation_with_two_authors() {
        let a1 = author(1, 2, "A1");
        let a5 = author(5, 3, "A5");
        let citation = apa_citation(&publication(), &[&a1, &a5]);
        assert_eq!(citation, "A1, & A5 (2020). X. Y Journal, 3, pp. 10-12, doi: 10.1/x.");
    }

    #[test]
    fn absent_fields_leave_no_empty_parentheticals() {
        let mut publication = publication();
        publication.issue = None;
        publication.art_no = None;
        let a1 = author(1, 2, "A1");
        let citation = apa_citation(&publication, &[&a1]);
        assert_eq!(citation, "A1 (2020). X. Y Journal, 3, pp. 10-12, doi: 10.1/x.");
    }

    #[test]
    fn page_end_renders_only_after_a_page_start() {
        let mut publication = publication();
        publication.page_start = None;
        let a1 = author(1, 2, "A1");
        let citation = apa_citation(&publication, &[&a1]);
        assert_eq!(citation, "A1 (2020). X. Y Journal, 3, doi: 10.1/x.");
    }

    #[test]
    fn issue_and_art_no_append_in_place() {
        let mut publication = publication();
        publication.issue = Some(4);
        publication.art_no = Some(" e0217".into());
        publication.page_start = None;
        publication.doi = None;
        let a1 = author(1, 2, "A1");
        let citation = apa_citation(&publication, &[&a1]);
        assert_eq!(citation, "A1 (2020). X. Y Journal, 3(4) e0217.");
    }

    #[test]
    fn duplicate_aliases_collapse_in_first_occurrence_order() {
        // the same person under two affiliations cites once
        let a7a = author(7, 2, "A7");
        let a7b = author(7, 3, "A7");
        let a5 = author(5, 3, "A5");
        let citation = apa_citation(&publication(), &[&a7a, &a7b, &a5]);
        assert!(citation.starts_with("A7, & A5 ("), "got: {}", citation);
    }

    #[test]
    fn three_aliases_join_with_ampersand_on_the_last() {
        let a = author(1, 2, "A");
        let b = author(2, 2, "B");
        let c = author(3, 2, "C");
        let citation = apa_citation(&publication(), &[&a, &b, &c]);
        assert!(citation.starts_with("A, B, & C ("), "got: {}", citation);
    }

    #[test]
    fn missing_year_omits_the_parenthetical_year() {
        let mut publication = publication();
        publication.date = None;
        let a1 = author(1, 2, "A1");
        let citation = apa_citation(&publication, &[&a1]);
        assert!(citation.starts_with("A1X. "), "got: {}", citation);
    }
}
