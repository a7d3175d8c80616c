pub mod movie_queries;

pub use movie_queries::MovieQueryService;
