//! Studio glue around the editor: the panel collection, the generative backend seam, draft
//! snapshots and script export.

pub(crate) mod backend;
pub(crate) mod collection;
pub(crate) mod draft;
pub(crate) mod script;
