pub mod department;
pub mod item;
pub mod request;
pub mod requester;
pub mod variant;
