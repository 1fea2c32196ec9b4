//! The root CV model.

use crate::career::{Education, Experience, Supervision, Teaching};
use crate::error::Result;
use crate::listings::{GrantsAwards, Memberships, Services, Skills};
use crate::profile::{Intro, News, Presentations, References, ResearchInterests};
use crate::publications::Publications;
use crate::registry::{Authors, Institutes, SoftwareRegistry};
use vitae_record::RecordSource;

/// The fully built, cross-referenced CV document model.
///
/// Built once per process from a [`RecordSource`] and read-only
/// afterwards. Construction is single-threaded and ordered: the three
/// registries come first, because every other section resolves references
/// into them — the dependency is structural, not a locking discipline,
/// since each loader takes the registries it needs as arguments.
#[derive(Debug, Clone)]
pub struct Cv {
    pub institutes: Institutes,
    pub software: SoftwareRegistry,
    pub authors: Authors,
    pub intro: Intro,
    pub research_interests: ResearchInterests,
    pub education: Education,
    pub experience: Experience,
    pub teaching: Teaching,
    pub supervision: Supervision,
    pub publications: Publications,
    pub presentations: Presentations,
    pub grants_awards: GrantsAwards,
    pub memberships: Memberships,
    pub services: Services,
    pub skills: Skills,
    pub news: News,
    pub references: References,
}

impl Cv {
    /// Build the whole model from a record source.
    ///
    /// The first error aborts the load; there is no partial-success mode
    /// and no record is ever silently dropped.
    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        // registries first; everything below resolves into them
        let institutes = Institutes::load(source)?;
        let software = SoftwareRegistry::load(source)?;
        let authors = Authors::load(source, &institutes)?;

        let intro = Intro::load(source)?;
        let research_interests = ResearchInterests::load(source)?;
        let education = Education::load(source, &authors)?;
        let experience = Experience::load(source)?;
        let teaching = Teaching::load(source)?;
        let supervision = Supervision::load(source, &authors)?;
        let publications = Publications::load(source, &authors)?;
        let presentations = Presentations::load(source, &institutes)?;
        let grants_awards = GrantsAwards::load(source)?;
        let memberships = Memberships::load(source)?;
        let services = Services::load(source)?;
        let skills = Skills::load(source)?;
        let news = News::load(source)?;
        let references = References::load(source, &authors)?;

        tracing::info!(
            institutes = institutes.len(),
            authors = authors.len(),
            publications = publications.len(),
            "CV model built"
        );
        Ok(Cv {
            institutes,
            software,
            authors,
            intro,
            research_interests,
            education,
            experience,
            teaching,
            supervision,
            publications,
            presentations,
            grants_awards,
            memberships,
            services,
            skills,
            news,
            references,
        })
    }

    /// The citations of every publication, in canonical order.
    pub fn citations(&self) -> Result<Vec<String>> {
        self.publications
            .iter()
            .map(|p| p.citation(&self.authors))
            .collect()
    }
}
