#![forbid(unsafe_code)]

use crate::macros::text_element;
use sigtuna_core::ns;

text_element!(
    /// A `ds:X509SubjectName` element: an X.501 distinguished name, kept as
    /// an opaque string.
    X509SubjectName,
    ns::DSIG,
    ns::DSIG_PREFIX,
    ns::node::X509_SUBJECT_NAME
);
