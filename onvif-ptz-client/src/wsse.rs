use crate::xml_text::xml_escape;
use base64::{engine::general_purpose, Engine as _};
use rand::{rngs::OsRng, RngCore};
use sha1::{Digest, Sha1};
use std::sync::OnceLock;
use time::{macros::format_description, OffsetDateTime, UtcOffset};

pub const NONCE_LENGTH: usize = 16;
pub const SHA1_LENGTH: usize = 20;

pub const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
pub const WSU_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd";
const PASSWORD_DIGEST_TYPE: &str = "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordDigest";
const NONCE_ENCODING: &str = "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-soap-message-security-1.0#Base64Binary";

/// Per-request UsernameToken material. Never reuse one across requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityParameters {
    pub created: String,
    pub nonce: [u8; NONCE_LENGTH],
    pub password_digest: [u8; SHA1_LENGTH],
}

impl SecurityParameters {
    pub fn new(nonce: [u8; NONCE_LENGTH], created: String, password: &str) -> Self {
        let password_digest = password_digest(&nonce, &created, password);
        Self {
            created,
            nonce,
            password_digest,
        }
    }

    pub fn nonce_b64(&self) -> String {
        general_purpose::STANDARD.encode(self.nonce)
    }

    pub fn password_digest_b64(&self) -> String {
        general_purpose::STANDARD.encode(self.password_digest)
    }
}

pub fn generate_security_parameters(password: &str) -> SecurityParameters {
    SecurityParameters::new(generate_nonce(), created_timestamp(), password)
}

/// SHA1(nonce ∥ created ∥ password). The order is what the device verifies against.
pub fn password_digest(nonce: &[u8], created: &str, password: &str) -> [u8; SHA1_LENGTH] {
    let mut hasher = Sha1::new();
    hasher.update(nonce);
    hasher.update(created.as_bytes());
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

pub fn pack_security_header(username: &str, password: &str) -> String {
    pack_security_header_with(username, &generate_security_parameters(password))
}

pub fn pack_security_header_with(username: &str, params: &SecurityParameters) -> String {
    format!(
        concat!(
            r#"<wss:Security xmlns:wss="{wsse}">"#,
            r#"<wss:UsernameToken>"#,
            r#"<wss:Username>{username}</wss:Username>"#,
            r#"<wss:Password Type="{digest_type}">{digest}</wss:Password>"#,
            r#"<wss:Nonce EncodingType="{nonce_encoding}">{nonce}</wss:Nonce>"#,
            r#"<wsu:Created xmlns:wsu="{wsu}">{created}</wsu:Created>"#,
            r#"</wss:UsernameToken>"#,
            r#"</wss:Security>"#,
        ),
        wsse = WSSE_NS,
        username = xml_escape(username),
        digest_type = PASSWORD_DIGEST_TYPE,
        digest = params.password_digest_b64(),
        nonce_encoding = NONCE_ENCODING,
        nonce = params.nonce_b64(),
        wsu = WSU_NS,
        created = xml_escape(&params.created),
    )
}

/// Local UTC offset, read once and reused for every `created` stamp.
///
/// `time` only reports the local offset while the process is single-threaded, so call
/// this before starting a multi-threaded runtime. Falls back to UTC otherwise.
pub fn local_offset() -> UtcOffset {
    static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();
    *LOCAL_OFFSET.get_or_init(|| UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
}

fn created_timestamp() -> String {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    let now = OffsetDateTime::now_utc().to_offset(local_offset());
    // The format only names fields an OffsetDateTime always has.
    now.format(&format).unwrap_or_default()
}

fn generate_nonce() -> [u8; NONCE_LENGTH] {
    let mut bytes = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
