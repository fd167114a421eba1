use crate::wsse;

pub const SOAP_ENV_NS: &str = "http://www.w3.org/2003/05/soap-envelope";
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8;";

/// Header and body are inserted as-is; they are expected to be well-formed fragments.
pub fn pack_envelope(header: &str, body: &str) -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="{SOAP_ENV_NS}"><soapenv:Header>{header}</soapenv:Header><soapenv:Body>{body}</soapenv:Body></soapenv:Envelope>"#
    )
}

/// Full request document with a freshly generated UsernameToken.
pub fn build_payload(username: &str, password: &str, body: &str) -> String {
    let header = wsse::pack_security_header(username, password);
    format!("{}{}", XML_DECLARATION, pack_envelope(&header, body))
}

#[cfg(test)]
mod tests {
    mod success {
        use crate::onvif_requests::{pack_status, PTZ_ACTION_NS};
        use crate::soap::{build_payload, pack_envelope, SOAP_ENV_NS, XML_DECLARATION};
        use crate::wsse::{pack_security_header_with, SecurityParameters, WSSE_NS};
        use roxmltree::Document;

        fn count(doc: &Document, local: &str) -> usize {
            doc.descendants()
                .filter(|n| n.is_element() && n.has_tag_name((SOAP_ENV_NS, local)))
                .count()
        }

        #[test]
        fn envelope_has_one_header_and_one_body() {
            let params =
                SecurityParameters::new([3u8; 16], "2024-01-01T00:00:00+0000".to_string(), "pw");
            let header = pack_security_header_with("admin", &params);
            let envelope = pack_envelope(&header, &pack_status("profile_1"));

            let doc = Document::parse(&envelope).unwrap();
            let root = doc.root_element();
            assert!(root.has_tag_name((SOAP_ENV_NS, "Envelope")));
            assert_eq!(count(&doc, "Header"), 1);
            assert_eq!(count(&doc, "Body"), 1);

            let children: Vec<_> = root.children().filter(|n| n.is_element()).collect();
            assert_eq!(children.len(), 2);
            assert!(children[0].has_tag_name((SOAP_ENV_NS, "Header")));
            assert!(children[1].has_tag_name((SOAP_ENV_NS, "Body")));

            let security = children[0].first_element_child().unwrap();
            assert!(security.has_tag_name((WSSE_NS, "Security")));
            let operation = children[1].first_element_child().unwrap();
            assert!(operation.has_tag_name((PTZ_ACTION_NS, "GetStatus")));
        }

        #[test]
        fn envelope_accepts_empty_fragments() {
            let envelope = pack_envelope("", "");
            let doc = Document::parse(&envelope).unwrap();
            assert_eq!(count(&doc, "Header"), 1);
            assert_eq!(count(&doc, "Body"), 1);
        }

        #[test]
        fn envelope_keeps_fragments_verbatim() {
            let envelope = pack_envelope("<h/>", "<b>text</b>");
            assert!(envelope.contains("<soapenv:Header><h/></soapenv:Header>"));
            assert!(envelope.contains("<soapenv:Body><b>text</b></soapenv:Body>"));
        }

        #[test]
        fn payload_starts_with_declaration_and_parses() {
            let payload = build_payload("admin", "secret", &pack_status("profile_1"));
            assert!(payload.starts_with(XML_DECLARATION));
            assert!(Document::parse(&payload).is_ok());
        }

        #[test]
        fn payload_never_contains_plain_password() {
            let payload = build_payload("admin", "hunter2-password", &pack_status("p"));
            assert!(!payload.contains("hunter2-password"));
        }
    }
}
