//! Fixed-path element lookup over vendor SOAP responses.
//!
//! Element names are matched as `prefix:local` exactly as the camera writes them, so a
//! response that binds the same namespace to a different prefix does not match. Every
//! step returns a `Result`; the first missing element ends the walk with its path.

use crate::error::ExtractError;
use roxmltree::{Document, Node};

pub const ENVELOPE: &str = "SOAP-ENV:Envelope";
pub const BODY: &str = "SOAP-ENV:Body";

pub fn parse(body: &str) -> Result<Document<'_>, ExtractError> {
    Document::parse(body).map_err(|err| ExtractError::Parse(err.to_string()))
}

/// An element reached by a checked walk, together with the path that led to it.
#[derive(Clone, Debug)]
pub struct Located<'a, 'input> {
    node: Node<'a, 'input>,
    path: String,
}

impl<'a, 'input> Located<'a, 'input> {
    /// Starts at the document element, which must be `name`.
    pub fn root(doc: &'a Document<'input>, name: &str) -> Result<Self, ExtractError> {
        let node = doc.root_element();
        if !has_qualified_name(node, name) {
            return Err(ExtractError::MissingElement {
                path: name.to_string(),
            });
        }
        Ok(Self {
            node,
            path: name.to_string(),
        })
    }

    /// Walks `steps` from the document element, `steps[0]` naming the root.
    pub fn walk(doc: &'a Document<'input>, steps: &[&str]) -> Result<Self, ExtractError> {
        let (first, rest) = steps.split_first().ok_or_else(|| ExtractError::MissingElement {
            path: String::new(),
        })?;
        Self::root(doc, first)?.descend(rest)
    }

    pub fn find_child(&self, name: &str) -> Option<Self> {
        self.node
            .children()
            .find(|child| has_qualified_name(*child, name))
            .map(|node| Self {
                node,
                path: format!("{}/{}", self.path, name),
            })
    }

    pub fn child(&self, name: &str) -> Result<Self, ExtractError> {
        self.find_child(name)
            .ok_or_else(|| ExtractError::MissingElement {
                path: format!("{}/{}", self.path, name),
            })
    }

    pub fn descend(self, steps: &[&str]) -> Result<Self, ExtractError> {
        steps.iter().try_fold(self, |located, step| located.child(step))
    }

    pub fn text(&self) -> Option<&'a str> {
        self.node.text().map(str::trim).filter(|text| !text.is_empty())
    }

    pub fn attribute(&self, name: &str) -> Result<&'a str, ExtractError> {
        self.node
            .attribute(name)
            .ok_or_else(|| ExtractError::MissingAttribute {
                path: self.path.clone(),
                attribute: name.to_string(),
            })
    }

    pub fn f32_text(&self) -> Result<f32, ExtractError> {
        parse_f32(self.text().unwrap_or_default(), &self.path)
    }

    pub fn f32_attribute(&self, name: &str) -> Result<f32, ExtractError> {
        let value = self.attribute(name)?;
        parse_f32(value, &format!("{}@{}", self.path, name))
    }
}

fn parse_f32(value: &str, path: &str) -> Result<f32, ExtractError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| ExtractError::InvalidNumber {
            path: path.to_string(),
            value: value.to_string(),
        })
}

fn has_qualified_name(node: Node, name: &str) -> bool {
    node.is_element() && written_name(node) == Some(name)
}

/// The element's name as it appears in the input, prefix included.
fn written_name<'input>(node: Node<'_, 'input>) -> Option<&'input str> {
    let start = node.range().start + 1;
    let rest = node.document().input_text().get(start..)?;
    let end = rest
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    mod success {
        use crate::onvif_xml::{parse, Located};

        const DOC: &str = r#"<a:Root xmlns:a="urn:a" xmlns:b="urn:b">
  <a:Child>
    <b:Leaf value="1.5"> 2.25 </b:Leaf>
  </a:Child>
  <Plain/>
</a:Root>"#;

        #[test]
        fn walk_follows_prefixed_names() {
            let doc = parse(DOC).unwrap();
            let leaf = Located::walk(&doc, &["a:Root", "a:Child", "b:Leaf"]).unwrap();
            assert_eq!(leaf.text(), Some("2.25"));
            assert_eq!(leaf.f32_text().unwrap(), 2.25);
            assert_eq!(leaf.f32_attribute("value").unwrap(), 1.5);
        }

        #[test]
        fn prefix_is_matched_as_written_when_namespace_has_two() {
            let doc = parse(
                r#"<b:Root xmlns:a="urn:same" xmlns:b="urn:same"><a:Child/><b:Child/></b:Root>"#,
            )
            .unwrap();
            let root = Located::root(&doc, "b:Root").unwrap();
            assert!(root.find_child("a:Child").is_some());
            assert!(root.find_child("b:Child").is_some());
            assert!(Located::root(&doc, "a:Root").is_err());
        }

        #[test]
        fn unprefixed_name_matches_element_without_namespace() {
            let doc = parse(DOC).unwrap();
            let root = Located::root(&doc, "a:Root").unwrap();
            assert!(root.find_child("Plain").is_some());
        }
    }

    mod failure {
        use crate::error::ExtractError;
        use crate::onvif_xml::{parse, Located};

        const DOC: &str = r#"<a:Root xmlns:a="urn:a" xmlns:b="urn:b"><a:Child><b:Leaf>x</b:Leaf></a:Child></a:Root>"#;

        #[test]
        fn malformed_input_is_parse_error() {
            assert!(matches!(parse("<a:Root"), Err(ExtractError::Parse(_))));
            assert!(matches!(parse(""), Err(ExtractError::Parse(_))));
        }

        #[test]
        fn missing_step_reports_path() {
            let doc = parse(DOC).unwrap();
            let err = Located::walk(&doc, &["a:Root", "a:Other", "b:Leaf"]).unwrap_err();
            assert_eq!(
                err,
                ExtractError::MissingElement {
                    path: "a:Root/a:Other".to_string()
                }
            );
        }

        #[test]
        fn wrong_root_is_missing_element() {
            let doc = parse(DOC).unwrap();
            let err = Located::root(&doc, "a:Envelope").unwrap_err();
            assert!(matches!(err, ExtractError::MissingElement { .. }));
        }

        #[test]
        fn prefix_must_match_exactly() {
            let doc = parse(r#"<x:Root xmlns:x="urn:a"/>"#).unwrap();
            assert!(Located::root(&doc, "a:Root").is_err());
            assert!(Located::root(&doc, "x:Root").is_ok());
        }

        #[test]
        fn same_namespace_under_other_prefix_is_not_enough() {
            let doc = parse(r#"<env:Root xmlns:env="urn:a" xmlns:a="urn:a"/>"#).unwrap();
            assert!(Located::root(&doc, "a:Root").is_err());
        }

        #[test]
        fn local_name_is_not_enough() {
            let doc = parse(DOC).unwrap();
            let root = Located::root(&doc, "a:Root").unwrap();
            assert!(root.find_child("b:Child").is_none());
            assert!(root.find_child("Child").is_none());
        }

        #[test]
        fn non_numeric_text_is_invalid_number() {
            let doc = parse(DOC).unwrap();
            let leaf = Located::walk(&doc, &["a:Root", "a:Child", "b:Leaf"]).unwrap();
            assert_eq!(
                leaf.f32_text().unwrap_err(),
                ExtractError::InvalidNumber {
                    path: "a:Root/a:Child/b:Leaf".to_string(),
                    value: "x".to_string()
                }
            );
        }

        #[test]
        fn absent_attribute_is_reported() {
            let doc = parse(DOC).unwrap();
            let leaf = Located::walk(&doc, &["a:Root", "a:Child", "b:Leaf"]).unwrap();
            assert!(matches!(
                leaf.f32_attribute("x"),
                Err(ExtractError::MissingAttribute { .. })
            ));
        }

        #[test]
        fn empty_walk_is_rejected() {
            let doc = parse(DOC).unwrap();
            assert!(Located::walk(&doc, &[]).is_err());
        }
    }
}
