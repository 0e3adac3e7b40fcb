//! Lead route group re-exported by the top-level routing module.

mod detail;
mod form;
mod list;

pub(crate) use detail::{LeadCreatePage, LeadDetailPage};
pub(crate) use list::LeadListPage;
