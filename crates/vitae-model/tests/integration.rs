//! End-to-end: build a full CV model from a JSON section dump and query
//! it the way a site renderer would.

use vitae_model::{Cv, Error};
use vitae_record::{MemorySource, RecordSource};

fn fixture() -> MemorySource {
    MemorySource::from_json(FIXTURE).expect("fixture parses")
}

const FIXTURE: &str = r#"{
  "Institutes": [
    {"id": 2, "Name": "Massachusetts Institute of Technology", "Name Abbreviation": "MIT",
     "City": "Cambridge", "Country": "USA", "Coordinates": "42.3601° N, 71.0942° W"},
    {"id": 3, "Name": "Technical University of Denmark", "Name Abbreviation": "DTU",
     "City": "Kongens Lyngby", "Country": "Denmark"}
  ],
  "Software": [
    {"id": 1, "Name": "netsched", "Version": "0.3.1", "Description": "Network schedule synthesizer",
     "Repository": "https://example.org/netsched", "License": "MIT"}
  ],
  "Authors": [
    {"id": 1, "Affiliations": "2,3", "Name": "Jane", "Lastname": "Doe",
     "Alias Short": "Doe, J.", "Alias Long": "Jane Doe", "Email": "jane@example.org"},
    {"id": 5, "Affiliations": "3", "Name": "Richard", "Lastname": "Roe",
     "Alias Short": "Roe, R."}
  ],
  "Intro": [
    {"Short summary": "Researcher in networked systems.",
     "Welcome": "Welcome to my site.", "Tagline": "Networks, scheduling, embedded systems"}
  ],
  "Research_Interests": [
    {"Interests": "Dependable networked embedded systems", "Keywords": "IoT"},
    {"Interests": null, "Keywords": "Scheduling"}
  ],
  "Education": [
    {"Degree": "MSc", "Institution": "DTU", "Year": "1 Sep 2013-30 Jun 2015"},
    {"Degree": "PhD", "Institution": "MIT", "Year": "1 Sep 2015-30 Jun 2019",
     "Thesis": "Scheduling in low-power networks", "Advisor": "5"}
  ],
  "Experience": [
    {"Year": "Jan 2019-Dec 2020", "Position": "Postdoctoral researcher", "Institution": "DTU"},
    {"Year": "Jan 2021-present", "Position": "Assistant professor", "Institution": "DTU"}
  ],
  "Teaching": [
    {"Year": "Jan 2020-Jun 2020; Jan 2022-Jun 2022", "Course": "Distributed Systems",
     "Type": "Lecturer", "Institution": "DTU"}
  ],
  "Supervision": [
    {"Year": 2020, "Title": "Edge offloading strategies", "Type": "BSc", "Supervisors": "5"},
    {"Year": 2022, "Title": "Adaptive TSCH scheduling", "Type": "MSc", "Supervisors": "1,5"}
  ],
  "Publications": [
    {"Authors": "5", "Title": "W", "Year": "2019", "Source": "Z Conference",
     "Document Type": "Conference paper", "Page start": 1, "Page end": 9},
    {"Authors": "1(2),5", "Title": "X", "Year": "2020", "Source": "Y Journal",
     "Volume": 3, "Issue": null, "Page start": 10, "Page end": 12,
     "DOI": "10.1/x", "Document Type": "Journal article"},
    {"Authors": "1(2;3)", "Title": "V", "Year": "Mar 2022", "Source": "Y Journal",
     "Volume": 5, "Issue": 2, "DOI": "10.1/v", "Document Type": "Journal article"}
  ],
  "Presentations": [
    {"Title": "Invited talk on TSCH", "Date": "Jun 2023", "Institution id": 3,
     "Event": "NetSys Seminar"}
  ],
  "Grants_awards": [
    {"Year": 2018, "Description": "Travel grant", "Country": "Denmark"},
    {"Year": 2021, "Description": "Best paper award", "Institution": "Y Journal"}
  ],
  "Professional_memberships": [
    {"Year": 2019, "Membership": "IEEE Member"}
  ],
  "Professional_services": [
    {"Type": "Reviewer", "Venue": "IEEE Transactions on Mobile Computing"},
    {"Type": "Chair", "Venue": "EWSN Poster Session"}
  ],
  "Skills": [
    {"Type": "Programming", "Skill": "Rust", "Level": "Advanced"},
    {"Type": "Languages", "Skill": "Danish", "Level": "Native"}
  ],
  "News": [
    {"Title": "Paper accepted at Y Journal", "Date": "12 Mar 2024", "DOI": "10.1/x"}
  ],
  "References": [
    {"Author id": 5}
  ]
}"#;

#[test]
fn builds_the_full_model() {
    let cv = Cv::load(&fixture()).unwrap();
    assert_eq!(cv.institutes.len(), 2);
    assert_eq!(cv.software.len(), 1);
    // author row 1 has two affiliations → two identities
    assert_eq!(cv.authors.len(), 3);
    assert_eq!(cv.publications.len(), 3);
    assert_eq!(cv.intro.tagline, "Networks, scheduling, embedded systems");
    assert_eq!(cv.research_interests.keywords, vec!["IoT", "Scheduling"]);
}

#[test]
fn author_identity_is_disambiguated_by_affiliation() {
    let cv = Cv::load(&fixture()).unwrap();
    // plain lookup: first-loaded identity
    let first = cv.authors.get(1).unwrap();
    assert_eq!(first.affiliation_id, 2);
    // composite lookup: exact identity
    let at_dtu = cv.authors.get_by_affiliation(1, 3).unwrap();
    assert_eq!(at_dtu.affiliation_id, 3);
    assert_eq!(
        at_dtu.affiliation(&cv.institutes).map(|i| i.name_abbr.clone()),
        Some(Some("DTU".to_string()))
    );
}

#[test]
fn publications_sort_by_type_then_year_descending() {
    let cv = Cv::load(&fixture()).unwrap();
    let titles: Vec<&str> = cv.publications.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["V", "X", "W"]);
    assert_eq!(
        cv.publications.document_types_ordered(),
        vec!["Journal article", "Conference paper"]
    );
    assert_eq!(cv.publications.year_range(), Some((2019, 2022)));
    assert_eq!(cv.publications.unique_venues(), 2);
    assert_eq!(cv.publications.count_by_author(1), 2);
}

#[test]
fn citations_come_out_in_canonical_order() {
    let cv = Cv::load(&fixture()).unwrap();
    let citations = cv.citations().unwrap();
    assert_eq!(
        citations,
        vec![
            // "1(2;3)" resolves the same person twice; the alias dedupes
            "Doe, J. (2022). V. Y Journal, 5(2), doi: 10.1/v.",
            "Doe, J., & Roe, R. (2020). X. Y Journal, 3, pp. 10-12, doi: 10.1/x.",
            "Roe, R. (2019). W. Z Conference, pp. 1-9.",
        ]
    );
}

#[test]
fn career_sections_order_newest_first() {
    let cv = Cv::load(&fixture()).unwrap();

    let degrees: Vec<&str> = cv.education.iter().map(|e| e.degree.as_str()).collect();
    assert_eq!(degrees, vec!["PhD", "MSc"]);

    let positions: Vec<&str> = cv.experience.iter().map(|e| e.position.as_str()).collect();
    assert_eq!(positions, vec!["Assistant professor", "Postdoctoral researcher"]);
    assert!(cv.experience.iter().next().unwrap().is_ongoing());

    let supervised: Vec<i64> = cv.supervision.iter().map(|s| s.year).collect();
    assert_eq!(supervised, vec![2022, 2020]);

    let grant_years: Vec<i64> = cv.grants_awards.iter().map(|g| g.year).collect();
    assert_eq!(grant_years, vec![2021, 2018]);
    assert_eq!(cv.grants_awards.oldest_year(), Some(2018));
}

#[test]
fn catalogs_sort_ascending() {
    let cv = Cv::load(&fixture()).unwrap();
    let skills: Vec<&str> = cv.skills.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(skills, vec!["Danish", "Rust"]);
    let service_kinds: Vec<&str> = cv.services.iter().map(|s| s.kind.as_str()).collect();
    assert_eq!(service_kinds, vec!["Chair", "Reviewer"]);
}

#[test]
fn advisors_and_references_resolve_to_live_authors() {
    let cv = Cv::load(&fixture()).unwrap();
    let phd = cv.education.iter().next().unwrap();
    let advisors: Vec<&str> = phd
        .advisors(&cv.authors)
        .map(|a| a.alias_short.as_str())
        .collect();
    assert_eq!(advisors, vec!["Roe, R."]);

    let reference = cv.references.iter().next().unwrap();
    let people: Vec<&str> = reference
        .people(&cv.authors)
        .map(|a| a.alias_short.as_str())
        .collect();
    assert_eq!(people, vec!["Roe, R."]);
}

#[test]
fn presentations_resolve_their_institute() {
    let cv = Cv::load(&fixture()).unwrap();
    let talk = cv.presentations.iter().next().unwrap();
    assert_eq!(
        talk.institution(&cv.institutes)
            .and_then(|i| i.name_abbr.as_deref()),
        Some("DTU")
    );
}

#[test]
fn institute_coordinates_parse_with_hemispheres() {
    let cv = Cv::load(&fixture()).unwrap();
    let mit = cv.institutes.get(2).unwrap();
    assert_eq!(mit.coordinates, Some((42.3601, -71.0942)));
}

#[test]
fn unresolved_publication_author_aborts_the_whole_load() {
    let mut source = fixture();
    let mut records = source.section("Publications").unwrap();
    let mut ghost = vitae_record::Record::new();
    ghost
        .set("Authors", "99")
        .set("Title", "Ghost")
        .set("Year", "2020")
        .set("Document Type", "Journal article");
    records.push(ghost);
    source.insert("Publications", records);

    let err = Cv::load(&source).unwrap_err();
    assert_eq!(
        err,
        Error::UnresolvedAuthor {
            section: "Publications".into(),
            record: "Ghost".into(),
            author_id: 99,
            affiliation_id: None,
        }
    );
}

#[test]
fn a_missing_section_aborts_the_load() {
    let source = MemorySource::from_json(r#"{"Institutes": []}"#).unwrap();
    let err = Cv::load(&source).unwrap_err();
    assert!(
        matches!(err, Error::Source(_)),
        "expected a source error, got {err}"
    );
}
