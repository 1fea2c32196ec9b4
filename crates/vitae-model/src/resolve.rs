//! Cross-reference parsing and resolution.
//!
//! Publication author lists use the syntax `"id"` or `"id(aff1;aff2)"`,
//! comma-separated: the id before the parenthesis names the author, the
//! `;`-separated ids inside name affiliations. Advisor / supervisor /
//! reference cells carry plain comma-separated id lists, down to a single
//! bare integer.
//!
//! Resolution is purely functional over the already-built registries; an
//! unresolved reference is fatal for the record being built.

use crate::registry::{Author, Authors};
use serde::{Deserialize, Serialize};

/// One entry of a publication author list, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorReference {
    pub author_id: i64,
    /// Affiliation ids, in source order. Empty means "whichever identity
    /// the plain-id lookup finds first".
    pub affiliation_ids: Vec<i64>,
}

/// A reference that did not resolve against the author registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnresolvedAuthor {
    pub author_id: i64,
    pub affiliation_id: Option<i64>,
}

/// Parse an author list such as `"1(2),5"` or `"7(2;3)"`.
///
/// Errors carry the offending token; callers attach record context.
pub fn parse_author_list(raw: &str) -> Result<Vec<AuthorReference>, String> {
    let mut references = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        match token.find('(') {
            None => references.push(AuthorReference {
                author_id: parse_id(token)?,
                affiliation_ids: Vec::new(),
            }),
            Some(open) => {
                let head = token[..open].trim();
                let inner = token[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| token.to_string())?;
                let mut affiliation_ids = Vec::new();
                for part in inner.split(';').map(str::trim).filter(|p| !p.is_empty()) {
                    affiliation_ids.push(parse_id(part)?);
                }
                references.push(AuthorReference {
                    author_id: parse_id(head)?,
                    affiliation_ids,
                });
            }
        }
    }
    Ok(references)
}

/// Parse a plain id list such as `"1,2"`, tolerating a single bare
/// integer.
pub fn parse_id_list(raw: &str) -> Result<Vec<i64>, String> {
    raw.split(',').map(|token| parse_id(token.trim())).collect()
}

fn parse_id(token: &str) -> Result<i64, String> {
    token.parse::<i64>().map_err(|_| token.to_string())
}

/// Resolve an author list into live registry entries, in order.
///
/// A reference carrying affiliation ids yields one author per affiliation
/// (exact composite lookup); one without yields the plain-id first match.
pub fn resolve_author_list<'a>(
    references: &[AuthorReference],
    authors: &'a Authors,
) -> Result<Vec<&'a Author>, UnresolvedAuthor> {
    let mut resolved = Vec::new();
    for reference in references {
        if reference.affiliation_ids.is_empty() {
            resolved.push(authors.get(reference.author_id).ok_or(UnresolvedAuthor {
                author_id: reference.author_id,
                affiliation_id: None,
            })?);
        } else {
            for &affiliation_id in &reference.affiliation_ids {
                resolved.push(
                    authors
                        .get_by_affiliation(reference.author_id, affiliation_id)
                        .ok_or(UnresolvedAuthor {
                            author_id: reference.author_id,
                            affiliation_id: Some(affiliation_id),
                        })?,
                );
            }
        }
    }
    Ok(resolved)
}

/// Resolve a plain id list against the author registry.
pub fn resolve_author_ids<'a>(
    ids: &[i64],
    authors: &'a Authors,
) -> Result<Vec<&'a Author>, UnresolvedAuthor> {
    ids.iter()
        .map(|&id| {
            authors.get(id).ok_or(UnresolvedAuthor {
                author_id: id,
                affiliation_id: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Institutes;
    use vitae_record::{MemorySource, Record};

    #[test]
    fn plain_tokens_parse_without_affiliations() {
        let refs = parse_author_list("1, 5").unwrap();
        assert_eq!(
            refs,
            vec![
                AuthorReference {
                    author_id: 1,
                    affiliation_ids: vec![]
                },
                AuthorReference {
                    author_id: 5,
                    affiliation_ids: vec![]
                },
            ]
        );
    }

    #[test]
    fn parenthesized_tokens_carry_affiliations() {
        let refs = parse_author_list("7(2;3),5").unwrap();
        assert_eq!(refs[0].author_id, 7);
        assert_eq!(refs[0].affiliation_ids, vec![2, 3]);
        assert_eq!(refs[1].author_id, 5);
        assert!(refs[1].affiliation_ids.is_empty());
    }

    #[test]
    fn malformed_tokens_carry_the_offender() {
        assert_eq!(parse_author_list("1,x").unwrap_err(), "x");
        assert_eq!(parse_author_list("1(2;3").unwrap_err(), "1(2;3");
        assert_eq!(parse_author_list("(2;3)").unwrap_err(), "");
    }

    #[test]
    fn id_lists_tolerate_a_bare_integer() {
        assert_eq!(parse_id_list("4").unwrap(), vec![4]);
        assert_eq!(parse_id_list("1, 2").unwrap(), vec![1, 2]);
        assert_eq!(parse_id_list("1;2").unwrap_err(), "1;2");
    }

    fn fixture_authors() -> Authors {
        let mut source = MemorySource::new();
        let mut mit = Record::new();
        mit.set("id", 2).set("Name", "MIT");
        let mut dtu = Record::new();
        dtu.set("id", 3).set("Name", "DTU");
        source.insert(Institutes::SECTION, vec![mit, dtu]);

        let mut multi = Record::new();
        multi
            .set("id", 7)
            .set("Affiliations", "2,3")
            .set("Name", "Ada")
            .set("Lastname", "Lovelace")
            .set("Alias Short", "Lovelace, A.");
        let mut single = Record::new();
        single
            .set("id", 5)
            .set("Affiliations", "3")
            .set("Name", "Grace")
            .set("Lastname", "Hopper")
            .set("Alias Short", "Hopper, G.");
        source.insert(Authors::SECTION, vec![multi, single]);

        let institutes = Institutes::load(&source).unwrap();
        Authors::load(&source, &institutes).unwrap()
    }

    #[test]
    fn affiliated_reference_resolves_one_author_per_affiliation() {
        let authors = fixture_authors();
        let refs = parse_author_list("7(2;3)").unwrap();
        let resolved = resolve_author_list(&refs, &authors).unwrap();
        assert_eq!(resolved.len(), 2);
        assert!(resolved.iter().all(|a| a.id == 7));
        assert_eq!(resolved[0].affiliation_id, 2);
        assert_eq!(resolved[1].affiliation_id, 3);
    }

    #[test]
    fn bare_reference_resolves_by_plain_id() {
        let authors = fixture_authors();
        let refs = parse_author_list("5").unwrap();
        let resolved = resolve_author_list(&refs, &authors).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].alias_short, "Hopper, G.");
    }

    #[test]
    fn misses_report_the_failing_pair() {
        let authors = fixture_authors();
        let refs = parse_author_list("99").unwrap();
        assert_eq!(
            resolve_author_list(&refs, &authors).unwrap_err(),
            UnresolvedAuthor {
                author_id: 99,
                affiliation_id: None
            }
        );

        let refs = parse_author_list("7(9)").unwrap();
        assert_eq!(
            resolve_author_list(&refs, &authors).unwrap_err(),
            UnresolvedAuthor {
                author_id: 7,
                affiliation_id: Some(9)
            }
        );
    }
}
