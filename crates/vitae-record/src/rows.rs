//! Typed per-section rows.
//!
//! Column-name → field mapping happens here, exactly once, at the
//! boundary. Reference cells that carry delimited id lists (`Affiliations`,
//! `Authors`, `Advisor`, `Supervisors`, `Author id`) stay raw text: their
//! grammar belongs to the model's resolver, not the boundary.

use crate::error::RecordError;
use crate::record::Record;

/// Mapping from a raw [`Record`] into a typed row.
pub trait FromRecord: Sized {
    /// Extract this row from a record. A missing required column/field or
    /// a wrong-typed cell is an error; optional fields absorb the missing
    /// sentinel as `None`.
    fn from_record(record: &Record) -> Result<Self, RecordError>;
}

/// One row of the `Institutes` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct InstituteRow {
    pub id: i64,
    pub name: String,
    pub name_abbr: Option<String>,
    pub department: Option<String>,
    pub department_abbr: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// Raw coordinate string, e.g. `"48.1351° N, 11.5820° E"`.
    pub coordinates: Option<String>,
    pub url: Option<String>,
}

impl FromRecord for InstituteRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(InstituteRow {
            id: record.required_integer("id")?,
            name: record.required_text("Name")?,
            name_abbr: record.text("Name Abbreviation"),
            department: record.text("Department"),
            department_abbr: record.text("Department Abbreviation"),
            address: record.text("Address"),
            city: record.text("City"),
            country: record.text("Country"),
            coordinates: record.text("Coordinates"),
            url: record.text("URL"),
        })
    }
}

/// One row of the `Authors` sheet.
///
/// A row materializes into one model Author per affiliation id in
/// `affiliations`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRow {
    pub id: i64,
    /// Raw affiliation id list, e.g. `"2,3"` or a single id.
    pub affiliations: String,
    // personal
    pub name: String,
    pub lastname: String,
    pub alias_long: Option<String>,
    pub alias_short: String,
    pub job_title: Option<String>,
    // contact
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    // social
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub google_scholar: Option<String>,
    pub orcid: Option<String>,
    pub researchgate: Option<String>,
    // security
    pub fingerprint: Option<String>,
    pub public_key: Option<String>,
}

impl FromRecord for AuthorRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(AuthorRow {
            id: record.required_integer("id")?,
            affiliations: record.required_text("Affiliations")?,
            name: record.required_text("Name")?,
            lastname: record.required_text("Lastname")?,
            alias_long: record.text("Alias Long"),
            alias_short: record.required_text("Alias Short")?,
            job_title: record.text("Job Title"),
            email: record.text("Email"),
            telephone: record.text("Telephone"),
            website: record.text("Website"),
            address: record.text("Address"),
            location: record.text("Location"),
            linkedin: record.text("LinkedIn"),
            github: record.text("GitHub"),
            google_scholar: record.text("Google Scholar"),
            orcid: record.text("ORCID"),
            researchgate: record.text("ResearchGate"),
            fingerprint: record.text("Fingerprint"),
            public_key: record.text("Public Key"),
        })
    }
}

/// One row of the `Software` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareRow {
    pub id: i64,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub repository: Option<String>,
    pub demo: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub license: Option<String>,
}

impl FromRecord for SoftwareRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(SoftwareRow {
            id: record.required_integer("id")?,
            name: record.required_text("Name")?,
            version: record.text("Version"),
            description: record.text("Description"),
            repository: record.text("Repository"),
            demo: record.text("Demo"),
            website: record.text("Website"),
            summary: record.text("Summary"),
            license: record.text("License"),
        })
    }
}

/// One row of the `Publications` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicationRow {
    /// Raw author reference list, e.g. `"1(2),5"`.
    pub authors: String,
    pub title: String,
    /// Raw year string, e.g. `"Mar 2020"` or `"2020"`.
    pub year: Option<String>,
    pub source: Option<String>,
    pub volume: Option<i64>,
    pub issue: Option<i64>,
    pub art_no: Option<String>,
    pub page_start: Option<i64>,
    pub page_end: Option<i64>,
    pub doi: Option<String>,
    pub preprint_doi: Option<String>,
    pub document_type: String,
    pub code: Option<String>,
    pub slides: Option<String>,
    pub abstract_: Option<String>,
    pub keywords: Option<String>,
    pub jcr: Option<String>,
    pub license: Option<String>,
    pub copyright: Option<String>,
}

impl FromRecord for PublicationRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(PublicationRow {
            authors: record.required_text("Authors")?,
            title: record.required_text("Title")?,
            year: record.text("Year"),
            source: record.text("Source"),
            volume: record.integer("Volume")?,
            issue: record.integer("Issue")?,
            art_no: record.text("Art. No."),
            page_start: record.integer("Page start")?,
            page_end: record.integer("Page end")?,
            doi: record.text("DOI"),
            preprint_doi: record.text("Preprint DOI"),
            document_type: record.required_text("Document Type")?,
            code: record.text("Code"),
            slides: record.text("Slides"),
            abstract_: record.text("Abstract"),
            keywords: record.text("Keywords"),
            jcr: record.text("JCR"),
            license: record.text("License"),
            copyright: record.text("Copyright"),
        })
    }
}

/// One row of the `Education` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationRow {
    pub degree: String,
    pub award: Option<String>,
    pub institution: Option<String>,
    /// Raw day-precision range list, e.g. `"1 Sep 2015-30 Jun 2019"`.
    pub year: String,
    pub thesis: Option<String>,
    pub thesis_link: Option<String>,
    /// Raw advisor id list.
    pub advisor: Option<String>,
}

impl FromRecord for EducationRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(EducationRow {
            degree: record.required_text("Degree")?,
            award: record.text("Award"),
            institution: record.text("Institution"),
            year: record.required_text("Year")?,
            thesis: record.text("Thesis"),
            thesis_link: record.text("Thesis link"),
            advisor: record.text("Advisor"),
        })
    }
}

/// One row of the `Experience` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRow {
    /// Raw month-precision range list; `present` marks an open end.
    pub year: String,
    pub position: String,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
}

impl FromRecord for ExperienceRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(ExperienceRow {
            year: record.required_text("Year")?,
            position: record.required_text("Position")?,
            institution: record.text("Institution"),
            description: record.text("Description"),
            responsibilities: record.text("Responsibilities"),
        })
    }
}

/// One row of the `Teaching` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TeachingRow {
    pub year: String,
    pub position: Option<String>,
    pub course: String,
    pub link: Option<String>,
    pub kind: Option<String>,
    pub institution: Option<String>,
    pub supervisor: Option<String>,
    pub responsibilities: Option<String>,
}

impl FromRecord for TeachingRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(TeachingRow {
            year: record.required_text("Year")?,
            position: record.text("Position"),
            course: record.required_text("Course")?,
            link: record.text("Link"),
            kind: record.text("Type"),
            institution: record.text("Institution"),
            supervisor: record.text("Supervisor"),
            responsibilities: record.text("Responsibilities"),
        })
    }
}

/// One row of the `Supervision` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisionRow {
    pub year: i64,
    pub title: String,
    pub program: Option<String>,
    pub kind: Option<String>,
    pub institution: Option<String>,
    /// Raw supervisor id list.
    pub supervisors: Option<String>,
    pub students: Option<String>,
}

impl FromRecord for SupervisionRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(SupervisionRow {
            year: record.required_integer("Year")?,
            title: record.required_text("Title")?,
            program: record.text("Program"),
            kind: record.text("Type"),
            institution: record.text("Institution"),
            supervisors: record.text("Supervisors"),
            students: record.text("Students"),
        })
    }
}

/// One row of the `Grants_awards` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantAwardRow {
    pub year: i64,
    pub description: String,
    pub institution: Option<String>,
    pub country: Option<String>,
    pub value: Option<String>,
}

impl FromRecord for GrantAwardRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(GrantAwardRow {
            year: record.required_integer("Year")?,
            description: record.required_text("Description")?,
            institution: record.text("Institution"),
            country: record.text("Country"),
            value: record.text("Value"),
        })
    }
}

/// One row of the `Professional_memberships` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipRow {
    pub year: i64,
    pub membership: String,
}

impl FromRecord for MembershipRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(MembershipRow {
            year: record.required_integer("Year")?,
            membership: record.required_text("Membership")?,
        })
    }
}

/// One row of the `Professional_services` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRow {
    pub kind: String,
    pub venue: String,
    pub link: Option<String>,
}

impl FromRecord for ServiceRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(ServiceRow {
            kind: record.required_text("Type")?,
            venue: record.required_text("Venue")?,
            link: record.text("Link"),
        })
    }
}

/// One row of the `Skills` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub kind: String,
    pub name: String,
    pub level: Option<String>,
}

impl FromRecord for SkillRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(SkillRow {
            kind: record.required_text("Type")?,
            name: record.required_text("Skill")?,
            level: record.text("Level"),
        })
    }
}

/// One row of the `News` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsRow {
    pub title: String,
    /// Raw day-precision date, e.g. `"12 Mar 2024"`.
    pub date: String,
    pub description: Option<String>,
    pub pdf: Option<String>,
    pub preprint: Option<String>,
    pub code: Option<String>,
    pub doi: Option<String>,
}

impl FromRecord for NewsRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(NewsRow {
            title: record.required_text("Title")?,
            date: record.required_text("Date")?,
            description: record.text("Description"),
            pdf: record.text("PDF"),
            preprint: record.text("Preprint"),
            code: record.text("Code"),
            doi: record.text("DOI"),
        })
    }
}

/// One row of the `References` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRow {
    /// Raw author id list (usually a single id).
    pub author_id: String,
}

impl FromRecord for ReferenceRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(ReferenceRow {
            author_id: record.required_text("Author id")?,
        })
    }
}

/// One row of the `Presentations` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationRow {
    pub title: String,
    /// Raw month-precision date, e.g. `"Jun 2023"`.
    pub date: String,
    pub institution_id: i64,
    pub event: Option<String>,
    pub slides: Option<String>,
}

impl FromRecord for PresentationRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(PresentationRow {
            title: record.required_text("Title")?,
            date: record.required_text("Date")?,
            institution_id: record.required_integer("Institution id")?,
            event: record.text("Event"),
            slides: record.text("Slides"),
        })
    }
}

/// The single row of the `Intro` sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroRow {
    pub short_summary: String,
    pub welcome: String,
    pub tagline: String,
}

impl FromRecord for IntroRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(IntroRow {
            short_summary: record.required_text("Short summary")?,
            welcome: record.required_text("Welcome")?,
            tagline: record.required_text("Tagline")?,
        })
    }
}

/// One row of the `Research_Interests` sheet.
///
/// The interests text lives on the first row; keywords accumulate one per
/// row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchInterestsRow {
    pub interests: Option<String>,
    pub keyword: Option<String>,
}

impl FromRecord for ResearchInterestsRow {
    fn from_record(record: &Record) -> Result<Self, RecordError> {
        Ok(ResearchInterestsRow {
            interests: record.text("Interests"),
            keyword: record.text("Keywords"),
        })
    }
}
