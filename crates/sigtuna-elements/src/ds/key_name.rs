#![forbid(unsafe_code)]

use crate::macros::text_element;
use sigtuna_core::ns;

text_element!(
    /// A `ds:KeyName` element: a string identifying a key to the recipient.
    KeyName,
    ns::DSIG,
    ns::DSIG_PREFIX,
    ns::node::KEY_NAME
);
