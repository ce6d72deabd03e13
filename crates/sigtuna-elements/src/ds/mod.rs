#![forbid(unsafe_code)]

//! XML Digital Signature (`ds:`) element types.

mod key_info;
mod key_name;
mod key_value;
mod retrieval_method;
mod signature_method;
mod transform;
mod transforms;
mod x509_certificate;
mod x509_data;
mod x509_issuer_name;
mod x509_issuer_serial;
mod x509_subject_name;

pub use key_info::{KeyInfo, KeyInfoEntry};
pub use key_name::KeyName;
pub use key_value::KeyValue;
pub use retrieval_method::RetrievalMethod;
pub use signature_method::SignatureMethod;
pub use transform::Transform;
pub use transforms::Transforms;
pub use x509_certificate::X509Certificate;
pub use x509_data::{X509Data, X509DataEntry};
pub use x509_issuer_name::X509IssuerName;
pub use x509_issuer_serial::{X509IssuerSerial, X509SerialNumber};
pub use x509_subject_name::X509SubjectName;
