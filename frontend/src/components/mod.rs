pub mod data_sources;
pub mod issue_form;
pub mod receipt;
