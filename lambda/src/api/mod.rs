//! Lambda handlers for the movie endpoints and request processing

pub mod helpers;
pub mod list_movies;
pub mod movie_summary;
pub mod movies_by_year;
pub mod parsing;
