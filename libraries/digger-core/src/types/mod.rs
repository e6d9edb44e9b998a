mod album;
mod ids;
mod query;
mod user;

pub use album::{Album, AlbumPatch, NewAlbum};
pub use ids::AlbumId;
pub use query::{PageRequest, SearchField, SearchRequest};
pub use user::SeedUser;
